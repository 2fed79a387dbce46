//! Game session: the attempt grid and its state machine
//!
//! The presentation layer feeds letter, delete, and submit events into
//! `GameSession` and renders the read-only grid and discriminated results
//! it gets back. All timing and animation live outside this module.

mod attempt;
mod game;

pub use attempt::{Attempt, Letter};
pub use game::{GameSession, GameStatus, Scored, SubmitError};
