//! Wordle TUI
//!
//! A terminal word-guessing game: six tries to find a hidden 5-letter word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Feedback, Mark, Word};
//!
//! let secret = Word::new("speed").unwrap();
//! let guess = Word::new("eerie").unwrap();
//!
//! // Only two of the three E's light up: the secret has two
//! let feedback = Feedback::score(&secret, &guess);
//! assert_eq!(feedback.count(Mark::Present), 2);
//! ```

// Core domain types
pub mod core;

// Turn state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
