//! Word list loading utilities
//!
//! Provides loaders for word list files and for the embedded list.

use super::list::{LoadError, WordList};
use crate::core::Word;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the dictionary a game is played against
pub trait WordListLoader {
    /// Load the complete word list
    ///
    /// # Errors
    /// Returns `LoadError` if the source is unreadable or holds no valid words.
    fn load(&self) -> Result<WordList, LoadError>;
}

/// Loads the list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl WordListLoader for EmbeddedLoader {
    fn load(&self) -> Result<WordList, LoadError> {
        WordList::from_words(words_from_slice(super::WORDLIST), "<embedded>")
    }
}

/// Loads a newline-separated word file, one word per line
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordListLoader for FileLoader {
    fn load(&self) -> Result<WordList, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        WordList::from_words(parse_words(&content), &self.path.display().to_string())
    }
}

/// Parse word file contents
///
/// Lines are trimmed; blank lines and entries that are not valid words are skipped.
///
/// # Examples
/// ```
/// use wordle_tui::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\n  SLATE \ntoolong\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "slate");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("wordle_tui_{}_{name}", process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_handles_crlf_and_blank_lines() {
        let words = parse_words("crane\r\n\r\nslate\r\n");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
    }

    #[test]
    fn embedded_loader_loads_every_word() {
        let list = EmbeddedLoader.load().unwrap();
        assert_eq!(list.len(), super::super::WORDLIST_COUNT);
        assert!(list.contains("crane"));
    }

    #[test]
    fn file_loader_reads_words() {
        let path = scratch_file("words.txt", "crane\nslate\nirate\n");
        let loader = FileLoader::new(&path);
        assert_eq!(loader.path(), path.as_path());
        let list = loader.load().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 3);
        assert!(list.contains("irate"));
    }

    #[test]
    fn file_loader_missing_file_is_io_error() {
        let loader = FileLoader::new("/definitely/not/here/wordlist");
        let err = loader.load().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here/wordlist"));
    }

    #[test]
    fn file_loader_empty_file_is_empty_error() {
        let path = scratch_file("empty.txt", "\n  \nnope\n");
        let err = FileLoader::new(&path).load().unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, LoadError::Empty { .. }));
    }
}
