//! Word Game
//!
//! A terminal word-guessing game. Each level hides a word one letter longer than
//! the last, from 4 up to 13 letters, and the player has six guesses per level.
//!
//! # Quick Start
//!
//! ```rust
//! use word_game::core::{LevelState, Word};
//!
//! let target = Word::new("bake").unwrap();
//! let mut level = LevelState::new(target.len());
//!
//! level.submit_guess(&target, "cake", None).unwrap();
//! assert_eq!(level.slots()[1], Some(b'a'));
//! assert_eq!(level.remaining_guesses(), 5);
//! ```

// Core domain types
pub mod core;

// Word lists and catalogs
pub mod wordlists;

// Terminal output formatting
pub mod output;

// Interactive game flow
pub mod game;
