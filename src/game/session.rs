//! Level progression and retry flow
//!
//! A session plays levels from `MIN_LENGTH` to `MAX_LENGTH` letters. Clearing the
//! last level offers a new game; running out of guesses reveals the word and
//! offers a retry. Either way a new game starts again from the shortest length.

use super::console::{Console, Input};
use crate::core::{Dictionary, LevelState, MAX_LENGTH, MIN_LENGTH, Word};
use crate::output::{
    print_board, print_intro, print_level_cleared, print_level_header, print_warning,
};
use crate::wordlists::WordCatalog;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const PLAY_AGAIN_PROMPT: &str =
    "Congratulations! You have completed all levels. Play again? (y/n)";

/// Everything a session needs, built once at startup
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Words the levels draw their targets from
    pub targets: WordCatalog,
    /// Dictionary guesses must appear in; `None` accepts any letters
    pub dictionary: Option<WordCatalog>,
    /// Pause after an invalid-guess warning
    pub invalid_guess_pause: Duration,
}

impl GameConfig {
    #[must_use]
    pub fn new(targets: WordCatalog, dictionary: Option<WordCatalog>) -> Self {
        Self {
            targets,
            dictionary,
            invalid_guess_pause: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.invalid_guess_pause = pause;
        self
    }

    fn dictionary(&self) -> Option<&dyn Dictionary> {
        self.dictionary.as_ref().map(|d| d as &dyn Dictionary)
    }
}

/// How a single level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    Won,
    Lost,
    Quit,
}

/// How one pass through the levels ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// Every level was cleared
    Completed,
    /// Guesses ran out on some level
    Abandoned,
    Quit,
}

/// A run of games sharing one configuration and random source
pub struct GameSession<'a, G: Rng> {
    config: &'a GameConfig,
    rng: G,
    current_length: Option<usize>,
    last_target: Option<Word>,
    last_end: Option<GameEnd>,
    games_started: usize,
}

impl<'a, G: Rng> GameSession<'a, G> {
    pub const fn new(config: &'a GameConfig, rng: G) -> Self {
        Self {
            config,
            rng,
            current_length: None,
            last_target: None,
            last_end: None,
            games_started: 0,
        }
    }

    /// Word length of the level being (or last) played
    #[must_use]
    pub const fn current_length(&self) -> Option<usize> {
        self.current_length
    }

    /// Target of the level being (or last) played
    #[must_use]
    pub const fn last_target(&self) -> Option<&Word> {
        self.last_target.as_ref()
    }

    /// How the most recent game ended, `None` while one is in progress
    #[must_use]
    pub const fn last_end(&self) -> Option<GameEnd> {
        self.last_end
    }

    #[must_use]
    pub const fn games_started(&self) -> usize {
        self.games_started
    }

    /// Play games until the player declines to continue or quits
    ///
    /// # Errors
    ///
    /// Returns an error if console I/O fails or a level length has no target
    /// words.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            let end = self.play_game(console)?;
            self.last_end = Some(end);
            info!(?end, games = self.games_started, "game ended");

            let again = match end {
                GameEnd::Quit => false,
                GameEnd::Completed => console.confirm(PLAY_AGAIN_PROMPT)?,
                GameEnd::Abandoned => {
                    let word = self.last_target.as_ref().map_or("", Word::text);
                    console.confirm(&format!(
                        "GAME OVER. The correct word was '{word}'. Try again? (y/n)"
                    ))?
                }
            };

            if !again {
                return Ok(());
            }
        }
    }

    /// Play every level once, shortest first
    ///
    /// # Errors
    ///
    /// See [`GameSession::run`].
    pub fn play_game<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameEnd> {
        self.games_started += 1;
        self.last_end = None;
        print_intro(console.out())?;

        for length in MIN_LENGTH..=MAX_LENGTH {
            match self.play_level(length, console)? {
                LevelOutcome::Won if length == MAX_LENGTH => {}
                LevelOutcome::Won => print_level_cleared(console.out())?,
                LevelOutcome::Lost => return Ok(GameEnd::Abandoned),
                LevelOutcome::Quit => return Ok(GameEnd::Quit),
            }
        }

        Ok(GameEnd::Completed)
    }

    /// Play one level with a freshly drawn target
    ///
    /// # Errors
    ///
    /// See [`GameSession::run`].
    pub fn play_level<R: BufRead, W: Write>(
        &mut self,
        length: usize,
        console: &mut Console<R, W>,
    ) -> Result<LevelOutcome> {
        let target = self
            .config
            .targets
            .pick_random(length, &mut self.rng)
            .cloned()
            .with_context(|| {
                format!(
                    "No words of length {length} in {}",
                    self.config.targets.name()
                )
            })?;
        debug!(length, "starting level");

        self.current_length = Some(length);
        self.last_target = Some(target.clone());

        let mut level = LevelState::new(length);
        print_level_header(console.out(), length)?;

        while !level.is_exhausted() {
            print_board(console.out(), &level)?;

            let guess = match console.read_input()? {
                Input::Quit => return Ok(LevelOutcome::Quit),
                Input::Line(line) => line.to_lowercase(),
            };

            if target.matches(&guess) {
                debug!(length, remaining = level.remaining_guesses(), "level won");
                return Ok(LevelOutcome::Won);
            }

            if let Err(reason) = level.submit_guess(&target, &guess, self.config.dictionary()) {
                debug!(%reason, "rejected guess");
                print_warning(console.out(), &reason)?;
                if !self.config.invalid_guess_pause.is_zero() {
                    thread::sleep(self.config.invalid_guess_pause);
                }
            }
        }

        debug!(length, "level lost");
        Ok(LevelOutcome::Lost)
    }
}
