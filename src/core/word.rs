//! Word representation
//!
//! A Word stores a legal game word, 4 to 13 lowercase ASCII letters.

use std::fmt;

/// Shortest word length, used by the first level
pub const MIN_LENGTH: usize = 4;

/// Longest word length, used by the final level
pub const MAX_LENGTH: usize = 13;

/// A legal game word
///
/// Legal words are 4 to 13 lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for strings that are not legal words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
    NotLowercase,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_LENGTH} to {MAX_LENGTH} letters, got {len}"
                )
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::NotLowercase => write!(f, "Word must be lowercase"),
        }
    }
}

impl std::error::Error for WordError {}

/// Returns `true` if `text` is a legal word
///
/// # Examples
/// ```
/// use word_game::core::is_legal;
///
/// assert!(is_legal("code"));
/// assert!(!is_legal("Code"));
/// assert!(!is_legal("abc"));
/// ```
#[must_use]
pub fn is_legal(text: &str) -> bool {
    Word::check(text).is_ok()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Unlike guesses typed by the player, words are not case-folded here:
    /// uppercase input is rejected.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside 4..=13
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    /// - Contains uppercase letters
    ///
    /// # Examples
    /// ```
    /// use word_game::core::Word;
    ///
    /// let word = Word::new("garden").unwrap();
    /// assert_eq!(word.text(), "garden");
    ///
    /// assert!(Word::new("Garden").is_err());
    /// assert!(Word::new("gard3n").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        Self::check(&text)?;
        Ok(Self { text })
    }

    fn check(text: &str) -> Result<(), WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::NotLowercase);
        }

        Ok(())
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; legal words have at least 4 letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.chars()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }

    /// Case-insensitive comparison against raw player input
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.text.eq_ignore_ascii_case(input)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
