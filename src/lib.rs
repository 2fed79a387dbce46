//! Wordle Game
//!
//! A terminal Wordle: guess the hidden 5-letter word in 6 tries, with
//! per-letter feedback after each attempt. The guess evaluation and
//! game-progression engine is pure and UI-agnostic; the TUI and CLI front
//! ends feed input events in and render the structured results.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::session::{GameSession, GameStatus};
//! use wordle_game::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_slice(&["crane", "trace"]).unwrap();
//! let mut session = GameSession::new(&dictionary);
//!
//! for ch in "trace".chars() {
//!     session.push_letter(ch);
//! }
//! let scored = session.submit().unwrap();
//! println!("Feedback: {:?}", scored.feedback);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Word lists and dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
