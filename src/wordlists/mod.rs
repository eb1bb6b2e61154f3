//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, file loading,
//! and the immutable [`WordList`] a game is played against.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDLIST, WORDLIST_COUNT};
pub use list::{LoadError, WordList};
pub use loader::{EmbeddedLoader, FileLoader, WordListLoader};
