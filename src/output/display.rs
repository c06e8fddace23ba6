//! Display functions for game screens
//!
//! Everything writes to a caller-supplied writer so the session can be driven
//! with in-memory buffers.

use super::formatters::{board_lines, level_number, remaining_text};
use crate::core::{InvalidGuess, LevelState};
use crate::game::QUIT_COMMAND;
use colored::Colorize;
use std::io::{self, Write};

/// Print the introduction and rules
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_intro(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(50).cyan())?;
    writeln!(out, "{}", "Welcome to The Word Game.".bright_cyan().bold())?;
    writeln!(out)?;
    writeln!(out, "Guess the word correctly to proceed to the next level.")?;
    writeln!(
        out,
        "A correct letter in the correct position will be displayed in lower case."
    )?;
    writeln!(
        out,
        "A correct letter in the incorrect position will be displayed in upper case to the right of the game board."
    )?;
    writeln!(out)?;
    writeln!(out, "If you wish to quit at any point, type '{QUIT_COMMAND}'.")?;
    writeln!(out, "{}", "=".repeat(50).cyan())?;
    writeln!(out)
}

/// Print the "LEVEL n" header for a word length
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_level_header(out: &mut impl Write, length: usize) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("LEVEL {}", level_number(length)).bright_yellow().bold()
    )
}

/// Print the board followed by the remaining guess count
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, level: &LevelState) -> io::Result<()> {
    for line in board_lines(level) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", remaining_text(level.remaining_guesses()))?;
    out.flush()
}

/// Print why a guess was rejected
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_warning(out: &mut impl Write, reason: &InvalidGuess) -> io::Result<()> {
    writeln!(out, "{}", reason.to_string().red())?;
    out.flush()
}

/// Print the message shown between levels
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_level_cleared(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Congratulations! You guessed correctly. Proceed to the next level.".green()
    )
}
