//! Game session state machine
//!
//! `GameSession` orchestrates a full game: it owns the attempt grid, the
//! target word, the cursor into the current row, and the outcome status.
//! Input events (letter, delete, submit) arrive from the presentation
//! layer; the session validates them, delegates scoring to the core, and
//! reports every outcome as an explicit result value. Invalid operations
//! are no-ops, never state corruption.

use super::Attempt;
use crate::core::{LetterFeedback, NUMBER_OF_TRIES, WORD_LENGTH, Word, score};
use crate::wordlists::Dictionary;
use log::debug;
use std::fmt;

/// Outcome status of a session
///
/// `Won` and `Lost` are terminal: no further mutation is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Recoverable submit failures
///
/// These are presentation-level signals, not aborts: the session state is
/// unchanged and the current row stays editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The current row is not completely filled
    Incomplete,
    /// The assembled word is not in the dictionary
    UnknownWord,
    /// The session is already won or lost
    Finished,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "Not enough letters"),
            Self::UnknownWord => write!(f, "Not in word list"),
            Self::Finished => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Result of a successful submit
///
/// Carries the scored row's feedback and the resulting status, so callers
/// that stagger the reveal for animation read this precomputed sequence
/// instead of re-invoking the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored {
    /// Index of the row that was scored
    pub row: usize,
    /// Per-letter feedback for that row
    pub feedback: [LetterFeedback; WORD_LENGTH],
    /// Session status after this submission
    pub status: GameStatus,
}

/// A single game: target word, attempt grid, cursor, and status
///
/// Created once per game with a random target drawn from the dictionary;
/// discarded when the player starts a new game.
///
/// # Examples
/// ```
/// use wordle_game::session::{GameSession, GameStatus};
/// use wordle_game::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_slice(&["crane"]).unwrap();
/// let mut session = GameSession::new(&dictionary);
///
/// for ch in "crane".chars() {
///     session.push_letter(ch);
/// }
/// let scored = session.submit().unwrap();
/// assert_eq!(scored.status, GameStatus::Won);
/// ```
#[derive(Debug)]
pub struct GameSession<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    attempts: [Attempt; NUMBER_OF_TRIES],
    /// Flattened index into the grid, bounded by the current unsubmitted row
    cursor: usize,
    submitted: usize,
    status: GameStatus,
}

impl<'a> GameSession<'a> {
    /// Start a new game with a uniformly-random target word
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let target = dictionary.pick_target().clone();
        Self::with_target(dictionary, target)
    }

    /// Start a new game with a fixed target word
    #[must_use]
    pub fn with_target(dictionary: &'a Dictionary, target: Word) -> Self {
        debug!("new session, target: {target}");
        Self {
            dictionary,
            target,
            attempts: [Attempt::default(); NUMBER_OF_TRIES],
            cursor: 0,
            submitted: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Append a letter to the current row
    ///
    /// Accepts only the 26 ASCII letters (case-insensitive) while the game
    /// is in progress and the row has room. Returns false, changing
    /// nothing, otherwise.
    pub fn push_letter(&mut self, ch: char) -> bool {
        if self.status != GameStatus::InProgress || !ch.is_ascii_alphabetic() {
            return false;
        }
        if self.cursor >= self.row_end() {
            // Current row is full
            return false;
        }

        let column = self.cursor - self.row_start();
        self.attempts[self.submitted].set_character(column, ch.to_ascii_lowercase());
        self.cursor += 1;
        true
    }

    /// Delete the last letter of the current row
    ///
    /// Never deletes into a previously submitted row: at the row start this
    /// is a reported no-op.
    pub fn delete_letter(&mut self) -> bool {
        if self.status != GameStatus::InProgress || self.cursor == self.row_start() {
            return false;
        }

        self.cursor -= 1;
        let column = self.cursor - self.row_start();
        self.attempts[self.submitted].clear_character(column);
        true
    }

    /// Submit the current row for scoring
    ///
    /// On success the row's cells transition from `Pending` to their
    /// terminal feedback, the submitted count advances, and the cursor
    /// already sits at the start of the next row.
    ///
    /// # Errors
    /// - `SubmitError::Incomplete` if the row is not fully filled;
    /// - `SubmitError::UnknownWord` if the word is not in the dictionary
    ///   (the row stays editable);
    /// - `SubmitError::Finished` if the session is already terminal.
    ///
    /// All three leave the session completely unchanged.
    pub fn submit(&mut self) -> Result<Scored, SubmitError> {
        if self.status != GameStatus::InProgress {
            return Err(SubmitError::Finished);
        }
        if self.cursor < self.row_end() {
            return Err(SubmitError::Incomplete);
        }

        let row = self.submitted;
        let attempt = Word::new(self.attempts[row].text()).map_err(|_| SubmitError::Incomplete)?;
        if !self.dictionary.contains(&attempt) {
            return Err(SubmitError::UnknownWord);
        }

        let feedback = score(&attempt, &self.target);
        self.attempts[row].apply_feedback(&feedback);
        self.submitted += 1;

        if feedback.iter().all(|&mark| mark == LetterFeedback::Correct) {
            self.status = GameStatus::Won;
        } else if self.submitted == NUMBER_OF_TRIES {
            self.status = GameStatus::Lost;
        }
        debug!(
            "scored row {row}: {attempt} -> {feedback:?}, status {:?}",
            self.status
        );

        Ok(Scored {
            row,
            feedback,
            status: self.status,
        })
    }

    /// The attempt grid, all rows
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> &[Attempt; NUMBER_OF_TRIES] {
        &self.attempts
    }

    /// Current session status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of attempts scored so far
    #[inline]
    #[must_use]
    pub const fn submitted_count(&self) -> usize {
        self.submitted
    }

    /// The hidden target word
    ///
    /// The presentation layer decides when to show it (typically on loss).
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Index of the row currently being filled
    ///
    /// Equals the submitted count while in progress; clamped to the last
    /// row once terminal.
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.submitted.min(NUMBER_OF_TRIES - 1)
    }

    fn row_start(&self) -> usize {
        self.submitted * WORD_LENGTH
    }

    fn row_end(&self) -> usize {
        (self.submitted + 1) * WORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterFeedback::{Absent, Correct, Present};

    fn dictionary() -> Dictionary {
        Dictionary::from_slice(&[
            "crane", "trace", "slate", "speed", "erase", "apple", "paper", "pound", "audio",
            "robot", "floor",
        ])
        .unwrap()
    }

    fn session<'a>(dictionary: &'a Dictionary, target: &str) -> GameSession<'a> {
        GameSession::with_target(dictionary, Word::new(target).unwrap())
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for ch in word.chars() {
            assert!(session.push_letter(ch));
        }
    }

    #[test]
    fn fresh_session_is_empty() {
        let dictionary = dictionary();
        let session = session(&dictionary, "crane");

        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.submitted_count(), 0);
        assert_eq!(session.current_row(), 0);
        for attempt in session.attempts() {
            assert!(!attempt.is_full());
            for cell in attempt.letters() {
                assert_eq!(cell.state(), LetterFeedback::Pending);
            }
        }
    }

    #[test]
    fn push_letter_fills_and_normalizes() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert!(session.push_letter('T'));
        assert!(session.push_letter('r'));
        assert_eq!(session.attempts()[0].text(), "tr");
    }

    #[test]
    fn push_letter_rejects_non_letters() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert!(!session.push_letter('1'));
        assert!(!session.push_letter(' '));
        assert!(!session.push_letter('é'));
        assert_eq!(session.attempts()[0].text(), "");
    }

    #[test]
    fn push_letter_stops_at_row_end() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "trace");
        assert!(!session.push_letter('x'));
        assert_eq!(session.attempts()[0].text(), "trace");
    }

    #[test]
    fn delete_letter_stops_at_row_start() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        assert!(!session.delete_letter());

        session.push_letter('a');
        assert!(session.delete_letter());
        assert!(!session.delete_letter());
        assert_eq!(session.attempts()[0].text(), "");
    }

    #[test]
    fn delete_never_crosses_into_submitted_row() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "slate");
        session.submit().unwrap();

        // Cursor now sits at the start of row 1
        assert!(!session.delete_letter());
        assert_eq!(session.attempts()[0].text(), "slate");
    }

    #[test]
    fn submit_incomplete_row_changes_nothing() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "tra");
        assert_eq!(session.submit(), Err(SubmitError::Incomplete));
        assert_eq!(session.submitted_count(), 0);
        for cell in session.attempts()[0].letters() {
            assert_eq!(cell.state(), LetterFeedback::Pending);
        }
    }

    #[test]
    fn submit_unknown_word_stays_editable() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "zzzzz");
        assert_eq!(session.submit(), Err(SubmitError::UnknownWord));
        assert_eq!(session.submitted_count(), 0);

        // The row is still editable: delete and retype
        for _ in 0..5 {
            assert!(session.delete_letter());
        }
        type_word(&mut session, "crane");
        assert_eq!(session.submit().unwrap().status, GameStatus::Won);
    }

    #[test]
    fn submit_scores_row_and_advances() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "trace");
        let scored = session.submit().unwrap();

        assert_eq!(scored.row, 0);
        assert_eq!(scored.feedback, [Absent, Correct, Correct, Present, Correct]);
        assert_eq!(scored.status, GameStatus::InProgress);
        assert_eq!(session.submitted_count(), 1);
        assert_eq!(session.current_row(), 1);

        // The scored row's cells carry the feedback
        let states: Vec<_> = session.attempts()[0]
            .letters()
            .iter()
            .map(|cell| cell.state())
            .collect();
        assert_eq!(states, vec![Absent, Correct, Correct, Present, Correct]);

        // The next push lands in row 1
        assert!(session.push_letter('c'));
        assert_eq!(session.attempts()[1].text(), "c");
    }

    #[test]
    fn winning_submission_sets_won() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "crane");
        let scored = session.submit().unwrap();

        assert_eq!(scored.feedback, [Correct; WORD_LENGTH]);
        assert_eq!(scored.status, GameStatus::Won);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn six_losing_submissions_set_lost() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        for i in 0..NUMBER_OF_TRIES {
            type_word(&mut session, "pound");
            let scored = session.submit().unwrap();
            if i + 1 < NUMBER_OF_TRIES {
                assert_eq!(scored.status, GameStatus::InProgress);
            } else {
                assert_eq!(scored.status, GameStatus::Lost);
            }
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.submitted_count(), NUMBER_OF_TRIES);
        // Target readable by the caller for the reveal
        assert_eq!(session.target().text(), "crane");
    }

    #[test]
    fn terminal_session_rejects_all_mutation() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        type_word(&mut session, "crane");
        session.submit().unwrap();

        assert!(!session.push_letter('a'));
        assert!(!session.delete_letter());
        assert_eq!(session.submit(), Err(SubmitError::Finished));
        assert_eq!(session.submitted_count(), 1);
    }

    #[test]
    fn duplicate_letters_scored_through_session() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "speed");

        type_word(&mut session, "erase");
        let scored = session.submit().unwrap();
        assert_eq!(scored.feedback, [Present, Absent, Absent, Present, Present]);
    }

    #[test]
    fn random_target_comes_from_dictionary() {
        let dictionary = dictionary();
        for _ in 0..10 {
            let session = GameSession::new(&dictionary);
            assert!(dictionary.contains(session.target()));
        }
    }

    #[test]
    fn win_on_last_row_is_won_not_lost() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, "crane");

        for _ in 0..NUMBER_OF_TRIES - 1 {
            type_word(&mut session, "pound");
            session.submit().unwrap();
        }
        type_word(&mut session, "crane");
        let scored = session.submit().unwrap();
        assert_eq!(scored.status, GameStatus::Won);
    }
}
