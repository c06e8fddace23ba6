//! Line-oriented console prompts
//!
//! Wraps an input/output pair so the game can run against stdin/stdout or
//! scripted buffers.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Reserved input that ends the game from any prompt
pub const QUIT_COMMAND: &str = "quit game";

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// The quit command was typed or input ended
    Quit,
}

/// Console over any buffered reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer for game output
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consume the console, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, trimmed of surrounding whitespace
    ///
    /// The quit command is matched exactly as typed. End of input counts as
    /// quitting.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or flushing output fails.
    pub fn read_input(&mut self) -> io::Result<Input> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(Input::Quit);
        }

        let line = line.trim();
        if line == QUIT_COMMAND {
            debug!("quit command entered");
            return Ok(Input::Quit);
        }

        Ok(Input::Line(line.to_string()))
    }

    /// Ask a y/n question until answered
    ///
    /// Returns `true` for `y`. `n`, the quit command and end of input all
    /// return `false`. Any other answer repeats the question.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            writeln!(self.output, "{}", question.bright_white().bold())?;

            match self.read_input()? {
                Input::Quit => return Ok(false),
                Input::Line(answer) => match answer.as_str() {
                    "y" => return Ok(true),
                    "n" => return Ok(false),
                    _ => writeln!(self.output, "{}", "Please answer 'y' or 'n'.".red())?,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn read_input_trims_line() {
        let mut console = console("  crane \r\n");
        assert_eq!(console.read_input().unwrap(), Input::Line("crane".to_string()));
    }

    #[test]
    fn read_input_detects_quit() {
        let mut console = console("quit game\n");
        assert_eq!(console.read_input().unwrap(), Input::Quit);
    }

    #[test]
    fn quit_command_is_case_sensitive() {
        let mut console = console("Quit Game\n");
        assert_eq!(
            console.read_input().unwrap(),
            Input::Line("Quit Game".to_string())
        );
    }

    #[test]
    fn end_of_input_quits() {
        let mut console = console("");
        assert_eq!(console.read_input().unwrap(), Input::Quit);
    }

    #[test]
    fn confirm_yes_and_no() {
        assert!(console("y\n").confirm("Again? (y/n)").unwrap());
        assert!(!console("n\n").confirm("Again? (y/n)").unwrap());
    }

    #[test]
    fn confirm_repeats_until_answered() {
        let mut console = console("maybe\nY\nyes\n\ny\n");
        assert!(console.confirm("Again? (y/n)").unwrap());

        let text = output(console);
        assert_eq!(text.matches("Again? (y/n)").count(), 5);
        assert_eq!(text.matches("Please answer 'y' or 'n'.").count(), 4);
    }

    #[test]
    fn confirm_trims_answers() {
        assert!(console("y \nn\n").confirm("Again? (y/n)").unwrap());
        assert!(!console("\tn\ny\n").confirm("Again? (y/n)").unwrap());
    }

    #[test]
    fn confirm_quit_command_declines() {
        let mut console = console("quit game\ny\n");
        assert!(!console.confirm("Again? (y/n)").unwrap());
    }

    #[test]
    fn confirm_end_of_input_declines() {
        let mut console = console("maybe\n");
        assert!(!console.confirm("Again? (y/n)").unwrap());
    }
}
