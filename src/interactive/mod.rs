//! Interactive TUI interface
//!
//! Terminal shell around the game: reads keys, draws the board.

mod app;
mod rendering;

pub use app::{App, Command, command_for, run_tui};
pub use rendering::board_lines;
