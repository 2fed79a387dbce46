//! Wordle word representation
//!
//! A Word stores a validated 5-letter word along with its canonical letter
//! counts, which the scorer clones for each scoring pass.

use super::{LetterCounts, WORD_LENGTH};
use std::fmt;

/// A validated 5-letter word
///
/// Stores the word as lowercase bytes plus its canonical letter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    bytes: [u8; WORD_LENGTH],
    counts: LetterCounts,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Word must contain only ASCII letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the word is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the length is not exactly 5 or any character
    /// is outside ASCII a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let bytes: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        let counts = LetterCounts::from_bytes(&bytes);

        Ok(Self {
            text,
            bytes,
            counts,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.bytes
    }

    /// Canonical letter counts, built once at construction
    ///
    /// The scorer clones these before each pass so that scoring stays a
    /// pure function of (attempt, target).
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &LetterCounts {
        &self.counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
