//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_game_over, print_grid};
pub use formatters::{colored_row, feedback_to_emoji};
