//! Core domain types for the word game
//!
//! This module contains the word and level types with no I/O.
//! Everything here is pure and deterministic.

mod level;
mod word;

pub use level::{Dictionary, GUESSES_PER_LEVEL, InvalidGuess, LevelState};
pub use word::{MAX_LENGTH, MIN_LENGTH, Word, WordError, is_legal};
