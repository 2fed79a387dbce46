//! Display functions for the terminal game

use super::formatters::{colored_row, feedback_to_emoji};
use crate::session::{GameSession, GameStatus};
use colored::Colorize;

/// Print the attempt grid, one colored row per attempt
pub fn print_grid(session: &GameSession) {
    println!();
    for attempt in session.attempts() {
        println!("  {}", colored_row(attempt));
    }
    println!();
}

/// Print the end-of-game banner with the shareable emoji grid
pub fn print_game_over(session: &GameSession) {
    match session.status() {
        GameStatus::Won => {
            println!(
                "{}",
                format!(
                    "🎉 Solved in {} {}!",
                    session.submitted_count(),
                    if session.submitted_count() == 1 {
                        "guess"
                    } else {
                        "guesses"
                    }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} The word was {}.",
                "❌ Out of tries!".red().bold(),
                session.target().text().to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => return,
    }

    // Shareable summary, feedback only
    println!();
    for attempt in session.attempts().iter().take(session.submitted_count()) {
        let mut feedback = [crate::core::LetterFeedback::Pending; crate::core::WORD_LENGTH];
        for (mark, cell) in feedback.iter_mut().zip(attempt.letters()) {
            *mark = cell.state();
        }
        println!("  {}", feedback_to_emoji(&feedback));
    }
    println!();
}
