//! Attempt rows and their letter cells
//!
//! One attempt is one row in the grid: a fixed-width sequence of letter
//! cells, created empty, filled left to right by input, and frozen once
//! scored.

use crate::core::{LetterFeedback, WORD_LENGTH};

/// A single letter cell in the attempt grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Letter {
    character: Option<char>,
    state: LetterFeedback,
}

impl Letter {
    /// The typed character, if the cell is filled (lowercase ASCII)
    #[inline]
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        self.character
    }

    /// Feedback state of the cell (`Pending` until the row is scored)
    #[inline]
    #[must_use]
    pub const fn state(&self) -> LetterFeedback {
        self.state
    }

    /// True once the cell holds a character
    #[inline]
    #[must_use]
    pub const fn is_filled(&self) -> bool {
        self.character.is_some()
    }
}

/// One row of the grid: exactly `WORD_LENGTH` letter cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attempt {
    letters: [Letter; WORD_LENGTH],
}

impl Attempt {
    /// The row's cells, left to right
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// True when every cell is filled
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.iter().all(Letter::is_filled)
    }

    /// The row's text so far, skipping empty cells
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().filter_map(Letter::character).collect()
    }

    pub(super) fn set_character(&mut self, column: usize, ch: char) {
        self.letters[column].character = Some(ch);
    }

    pub(super) fn clear_character(&mut self, column: usize) {
        self.letters[column].character = None;
    }

    pub(super) fn apply_feedback(&mut self, feedback: &[LetterFeedback; WORD_LENGTH]) {
        for (cell, &mark) in self.letters.iter_mut().zip(feedback) {
            cell.state = mark;
        }
    }
}
