//! Game rules
//!
//! The turn protocol: typing, validation against the word list, acceptance, win and loss.

mod state;

pub use state::{Action, GameState, MAX_GUESSES, Outcome, Phase};
