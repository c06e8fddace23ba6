//! Per-level game state and guess feedback
//!
//! A level tracks which letters the player has uncovered for one hidden word:
//! - Revealed slots hold letters guessed in their correct position
//! - Present letters occur in the target but were guessed at the wrong index
//! - Absent letters do not occur in the target at all
//!
//! Presence is checked against the whole target word, not only the slots still
//! unrevealed. A letter that occurs once in the target can therefore be reported
//! as present even after its slot has been revealed.

use super::Word;
use std::collections::BTreeSet;
use std::fmt;

/// Guess budget for every level
pub const GUESSES_PER_LEVEL: u8 = 6;

/// Source of acceptable guesses
///
/// Implemented by the dictionary catalog. When no dictionary is configured,
/// any alphabetic guess of the right length is accepted.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

/// Reasons a guess is rejected without consuming a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGuess {
    WrongLength { expected: usize, got: usize },
    NotAlphabetic,
    UnknownWord(String),
}

impl fmt::Display for InvalidGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => write!(f, "Guess a word of length {expected}."),
            Self::NotAlphabetic => write!(f, "Guess must contain only letters."),
            Self::UnknownWord(word) => write!(f, "'{word}' is not a recognized word."),
        }
    }
}

impl std::error::Error for InvalidGuess {}

/// State of a single level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelState {
    slots: Vec<Option<u8>>,
    present: BTreeSet<u8>,
    absent: BTreeSet<u8>,
    remaining_guesses: u8,
}

impl LevelState {
    /// Start a level for words of `length` letters
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
            present: BTreeSet::new(),
            absent: BTreeSet::new(),
            remaining_guesses: GUESSES_PER_LEVEL,
        }
    }

    /// Word length for this level
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.slots.len()
    }

    /// Revealed letter per position, `None` where still hidden
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    /// Letters known to be in the target at some other position, sorted
    pub fn present_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.present.iter().copied()
    }

    /// Letters known not to be in the target, sorted
    pub fn absent_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.absent.iter().copied()
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        self.remaining_guesses
    }

    /// `true` once the guess budget is spent
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_guesses == 0
    }

    /// Check a lowercased guess and turn it into a `Word`
    ///
    /// Length is checked first, then letters, then dictionary membership when a
    /// dictionary is given.
    ///
    /// # Errors
    /// Returns `InvalidGuess` describing the first failed check.
    pub fn validate_guess(
        &self,
        guess: &str,
        dictionary: Option<&dyn Dictionary>,
    ) -> Result<Word, InvalidGuess> {
        let got = guess.chars().count();
        if got != self.length() {
            return Err(InvalidGuess::WrongLength {
                expected: self.length(),
                got,
            });
        }

        if !guess.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(InvalidGuess::NotAlphabetic);
        }

        if let Some(dictionary) = dictionary
            && !dictionary.contains(guess)
        {
            return Err(InvalidGuess::UnknownWord(guess.to_string()));
        }

        // Length matches a level length and all letters are lowercase ASCII
        Word::new(guess).map_err(|_| InvalidGuess::NotAlphabetic)
    }

    #[must_use]
    pub fn is_valid_guess(&self, guess: &str, dictionary: Option<&dyn Dictionary>) -> bool {
        self.validate_guess(guess, dictionary).is_ok()
    }

    /// Record feedback for `guess` against `target`
    ///
    /// The guess must already be validated and have the target's length.
    /// Revealed slots are never cleared.
    pub fn apply_guess(&mut self, target: &Word, guess: &Word) {
        debug_assert_eq!(target.len(), guess.len(), "guess length must match target");

        for (i, &letter) in guess.chars().iter().enumerate() {
            if target.char_at(i) == letter {
                self.slots[i] = Some(letter);
            } else if target.has_letter(letter) {
                self.present.insert(letter);
            } else {
                self.absent.insert(letter);
            }
        }
    }

    /// Spend one guess if `guess` is valid
    ///
    /// Returns `true` if a guess was consumed.
    pub fn consume_guess(&mut self, guess: &str, dictionary: Option<&dyn Dictionary>) -> bool {
        if self.is_valid_guess(guess, dictionary) {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
            true
        } else {
            false
        }
    }

    /// Validate, score and pay for a guess in one step
    ///
    /// # Errors
    /// Returns `InvalidGuess` without touching the level when validation fails.
    pub fn submit_guess(
        &mut self,
        target: &Word,
        guess: &str,
        dictionary: Option<&dyn Dictionary>,
    ) -> Result<Word, InvalidGuess> {
        let word = self.validate_guess(guess, dictionary)?;
        self.apply_guess(target, &word);
        self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        Ok(word)
    }
}
