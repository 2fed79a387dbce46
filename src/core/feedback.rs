//! Per-letter guess feedback and the scoring function
//!
//! Scoring is the algorithmic heart of the game: given an attempt and the
//! target word, produce one feedback mark per letter with correct handling
//! of duplicate letters.

use super::{WORD_LENGTH, Word};

/// Feedback state for a single letter cell
///
/// `Pending` exists only before the owning row is submitted; the other
/// three variants are terminal for that cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LetterFeedback {
    /// Row not yet submitted
    #[default]
    Pending,
    /// Letter not in the target (or all its occurrences already claimed)
    Absent,
    /// Letter in the target but in the wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

/// Score an attempt against the target word
///
/// Pure function: the same inputs always produce the same output, and no
/// shared state is mutated.
///
/// # Algorithm
/// 1. Clone the target's canonical letter counts.
/// 2. First pass: mark exact-position matches `Correct`, each claiming one
///    occurrence from the counts.
/// 3. Second pass, left to right: mark `Present` where an occurrence is
///    still unclaimed, else leave `Absent`.
///
/// Exact-position matches always claim counts before misplaced ones, and
/// within each pass earlier indices claim first. This is what makes double
/// letters score deterministically.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterFeedback, Word, score};
///
/// let attempt = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(
///     score(&attempt, &target),
///     [
///         LetterFeedback::Absent,
///         LetterFeedback::Absent,
///         LetterFeedback::Correct,
///         LetterFeedback::Absent,
///         LetterFeedback::Correct,
///     ]
/// );
/// ```
#[must_use]
pub fn score(attempt: &Word, target: &Word) -> [LetterFeedback; WORD_LENGTH] {
    let mut marks = [LetterFeedback::Absent; WORD_LENGTH];
    let mut remaining = target.letter_counts().clone();

    // First pass: exact-position matches
    // Allow: index needed to compare attempt[i] with target[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = attempt.bytes()[i];
        if letter == target.bytes()[i] && remaining.take(letter) {
            marks[i] = LetterFeedback::Correct;
        }
    }

    // Second pass: misplaced letters, left to right
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if marks[i] != LetterFeedback::Correct && remaining.take(attempt.bytes()[i]) {
            marks[i] = LetterFeedback::Present;
        }
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn identical_words_all_correct() {
        for s in ["crane", "slate", "speed", "aaaaa"] {
            let w = word(s);
            assert_eq!(score(&w, &w), [Correct; WORD_LENGTH]);
        }
    }

    #[test]
    fn disjoint_words_all_absent() {
        assert_eq!(score(&word("abcde"), &word("fghij")), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn output_length_is_word_length() {
        let marks = score(&word("crane"), &word("pound"));
        assert_eq!(marks.len(), WORD_LENGTH);
    }

    #[test]
    fn crane_vs_trace() {
        // Target CRANE, attempt TRACE:
        // T absent, R correct, A correct (exact position), C present, E correct
        assert_eq!(
            score(&word("trace"), &word("crane")),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn duplicate_letters_speed_vs_erase() {
        // Target SPEED, attempt ERASE: the target has two E's, so both E's
        // in the attempt score Present; A and R have no occurrences to claim.
        assert_eq!(
            score(&word("erase"), &word("speed")),
            [Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn duplicate_letters_paper_vs_apple() {
        // Target APPLE, attempt PAPER: the middle P is an exact match and
        // claims one of the target's two P's first; the leading P takes the
        // second as Present. R has nothing to claim.
        assert_eq!(
            score(&word("paper"), &word("apple")),
            [Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn exact_match_claims_before_earlier_misplaced() {
        // Target POUND, attempt OODLE: the target's single O is claimed by
        // the exact match at index 1, so the earlier O at index 0 gets
        // nothing even though pass 2 runs left to right.
        assert_eq!(
            score(&word("oodle"), &word("pound")),
            [Absent, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn earlier_occurrence_claims_first_within_pass() {
        // Target ROBIN, attempt ERROR: one R in the target, none in exact
        // position, so the leftmost attempt R takes it.
        assert_eq!(
            score(&word("error"), &word("robin")),
            [Absent, Present, Absent, Present, Absent]
        );
    }

    #[test]
    fn scoring_is_idempotent() {
        let attempt = word("erase");
        let target = word("speed");

        let first = score(&attempt, &target);
        let second = score(&attempt, &target);
        assert_eq!(first, second);

        // The target's canonical counts are untouched by scoring
        assert_eq!(target.letter_counts().remaining(b'e'), 2);
    }

    #[test]
    fn pending_is_default() {
        assert_eq!(LetterFeedback::default(), LetterFeedback::Pending);
    }
}
