//! Simple interactive CLI mode
//!
//! Text-based game without TUI: one word per line, colored tiles after
//! every scored attempt.

use crate::core::NUMBER_OF_TRIES;
use crate::output::{print_game_over, print_grid};
use crate::session::{GameSession, GameStatus, SubmitError};
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple(dictionary: &Dictionary) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   WORDLE - Terminal Edition                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden 5-letter word in {NUMBER_OF_TRIES} tries.");
    println!("After each guess the tiles show your feedback:\n");
    println!("  {} letter in the correct position", " A ".black().on_green().bold());
    println!("  {} letter in the word, wrong position", " A ".black().on_yellow().bold());
    println!("  {} letter not in the word\n", " A ".white().on_bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new(dictionary);

    loop {
        let turn = session.submitted_count() + 1;
        let input =
            get_user_input(&format!("Guess {turn}/{NUMBER_OF_TRIES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::new(dictionary);
                println!("\n🔄 New game started!\n");
                continue;
            }
            word => {
                if let Err(error) = crate::core::Word::new(word) {
                    println!("{}\n", error.to_string().red());
                    continue;
                }

                // Retype the current row from scratch
                while session.delete_letter() {}
                for ch in word.chars() {
                    session.push_letter(ch);
                }

                match session.submit() {
                    Ok(_) => print_grid(&session),
                    Err(error @ (SubmitError::Incomplete | SubmitError::UnknownWord)) => {
                        println!("{}\n", error.to_string().red());
                        continue;
                    }
                    Err(SubmitError::Finished) => continue,
                }
            }
        }

        if session.status() != GameStatus::InProgress {
            print_game_over(&session);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session = GameSession::new(dictionary);
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
