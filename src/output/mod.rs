//! Terminal output formatting
//!
//! Plain-terminal display for the score command and the post-game summary.

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_score_result};
