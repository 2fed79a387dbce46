//! Formatting utilities for terminal output

use crate::core::{LetterFeedback, WORD_LENGTH};
use crate::session::Attempt;
use colored::Colorize;

/// Format a feedback row as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterFeedback; WORD_LENGTH]) -> String {
    feedback
        .iter()
        .map(|mark| match mark {
            LetterFeedback::Correct => '🟩',
            LetterFeedback::Present => '🟨',
            LetterFeedback::Absent | LetterFeedback::Pending => '⬜',
        })
        .collect()
}

/// Format a scored attempt as colored letter tiles
///
/// Correct letters get a green tile, present ones yellow, absent ones a
/// dim tile; unscored cells print plain, with a placeholder dot keeping
/// empty cells visible.
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    let mut row = String::new();
    for cell in attempt.letters() {
        let ch = cell.character().map_or('·', |c| c.to_ascii_uppercase());
        let tile = format!(" {ch} ");
        let tile = match cell.state() {
            LetterFeedback::Correct => tile.black().on_green().bold().to_string(),
            LetterFeedback::Present => tile.black().on_yellow().bold().to_string(),
            LetterFeedback::Absent => tile.white().on_bright_black().to_string(),
            LetterFeedback::Pending => tile,
        };
        row.push_str(&tile);
        row.push(' ');
    }
    row.trim_end().to_string()
}
