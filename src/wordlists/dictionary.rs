//! Dictionary of playable words
//!
//! An immutable set of valid words supplying membership tests and random
//! target selection. Emptiness is rejected at construction, so target
//! selection can never loop forever looking for a qualifying word.

use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Immutable set of valid words of the playable length
///
/// Membership is case-insensitive because every entry (and every query
/// `Word`) is normalized to lowercase at construction.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<[u8; crate::core::WORD_LENGTH]>,
}

/// Error raised when no word of the required length is available
///
/// Surfaced at construction time: the game cannot start without a target
/// pool, and checking here avoids discovering the problem mid-game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyDictionary;

impl fmt::Display for EmptyDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No playable words of the required length available")
    }
}

impl std::error::Error for EmptyDictionary {}

impl Dictionary {
    /// Create a dictionary from validated words
    ///
    /// # Errors
    /// Returns `EmptyDictionary` if no words are supplied.
    pub fn new(words: Vec<Word>) -> Result<Self, EmptyDictionary> {
        if words.is_empty() {
            return Err(EmptyDictionary);
        }

        let index = words.iter().map(|w| *w.bytes()).collect();
        Ok(Self { words, index })
    }

    /// Create a dictionary from raw entries, skipping invalid ones
    ///
    /// # Errors
    /// Returns `EmptyDictionary` if no entry is a valid 5-letter word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_slice(&["crane", "slate"]).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    ///
    /// assert!(Dictionary::from_slice(&["not a word"]).is_err());
    /// ```
    pub fn from_slice(entries: &[&str]) -> Result<Self, EmptyDictionary> {
        Self::new(super::loader::words_from_slice(entries))
    }

    /// Check whether a word is in the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.bytes())
    }

    /// Pick a uniformly-random target word
    ///
    /// # Panics
    /// Will not panic - the dictionary is never empty by construction.
    #[must_use]
    pub fn pick_target(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("dictionary is never empty")
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: emptiness is rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
