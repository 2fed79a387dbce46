//! Letter multiset used by the scorer
//!
//! Tracks how many occurrences of each letter are still unclaimed during a
//! scoring pass. Every pass starts from a fresh clone of the target's
//! canonical counts, so scoring never accumulates state across attempts.

use rustc_hash::FxHashMap;

/// Remaining-match count per letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<u8, u8>);

impl LetterCounts {
    /// Build counts by scanning a word once, incrementing per occurrence
    #[must_use]
    pub fn from_bytes(word: &[u8]) -> Self {
        let mut counts = FxHashMap::default();
        for &ch in word {
            *counts.entry(ch).or_insert(0u8) += 1;
        }
        Self(counts)
    }

    /// Occurrences of `letter` still unclaimed
    #[must_use]
    pub fn remaining(&self, letter: u8) -> u8 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Claim one occurrence of `letter`
    ///
    /// Returns true and decrements if an occurrence was available,
    /// false (and no change) otherwise.
    pub fn take(&mut self, letter: u8) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_word_with_duplicates() {
        let counts = LetterCounts::from_bytes(b"speed");
        assert_eq!(counts.remaining(b's'), 1);
        assert_eq!(counts.remaining(b'p'), 1);
        assert_eq!(counts.remaining(b'e'), 2);
        assert_eq!(counts.remaining(b'd'), 1);
        assert_eq!(counts.remaining(b'z'), 0);
    }

    #[test]
    fn take_decrements_until_exhausted() {
        let mut counts = LetterCounts::from_bytes(b"speed");
        assert!(counts.take(b'e'));
        assert!(counts.take(b'e'));
        assert!(!counts.take(b'e'));
        assert_eq!(counts.remaining(b'e'), 0);
    }

    #[test]
    fn take_absent_letter_is_noop() {
        let mut counts = LetterCounts::from_bytes(b"crane");
        assert!(!counts.take(b'z'));
        assert_eq!(counts, LetterCounts::from_bytes(b"crane"));
    }

    #[test]
    fn clone_is_independent() {
        let canonical = LetterCounts::from_bytes(b"apple");
        let mut pass = canonical.clone();
        assert!(pass.take(b'p'));
        assert!(pass.take(b'p'));

        // The canonical counts are untouched
        assert_eq!(canonical.remaining(b'p'), 2);
        assert_eq!(pass.remaining(b'p'), 0);
    }
}
