//! Command implementations

pub mod score;

pub use score::{ScoreResult, score_words};
