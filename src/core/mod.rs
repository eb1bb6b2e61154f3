//! Core domain types for the game
//!
//! This module contains the fundamental domain types with no terminal dependencies.
//! Scoring lives here as a pure function over two words.

mod feedback;
mod word;

pub use feedback::{Feedback, Mark};
pub use word::{WORD_LENGTH, Word, WordError};
