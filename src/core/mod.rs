//! Core domain types for the Wordle game engine
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear invariants.

mod feedback;
mod letters;
mod word;

pub use feedback::{LetterFeedback, score};
pub use letters::LetterCounts;
pub use word::{Word, WordError};

/// Length of every playable word
pub const WORD_LENGTH: usize = 5;

/// Number of attempts the player gets per game
pub const NUMBER_OF_TRIES: usize = 6;
