//! Word lists and the playable dictionary
//!
//! Provides the embedded word list compiled into the binary, a file loader
//! for custom lists, and the `Dictionary` the game engine draws targets
//! from and validates attempts against.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, EmptyDictionary};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dictionary = Dictionary::from_slice(WORDS).unwrap();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_list_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
