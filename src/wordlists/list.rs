//! The dictionary of guessable words

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error raised when a word list cannot be loaded
///
/// A game cannot start without at least one word, so callers treat this as fatal.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The source held no valid words
    Empty { origin: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::Empty { origin } => write!(f, "Word list {origin} contains no valid words"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

/// Immutable set of valid words
///
/// Never empty: construction fails instead. Keeps insertion order for
/// secret selection and an index for membership checks.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashMap<String, usize>,
}

impl WordList {
    /// Build a word list, dropping duplicates
    ///
    /// `origin` names the source in the error message.
    ///
    /// # Errors
    /// Returns `LoadError::Empty` if `candidates` yields nothing.
    pub fn from_words(
        candidates: impl IntoIterator<Item = Word>,
        origin: &str,
    ) -> Result<Self, LoadError> {
        let mut lookup = FxHashMap::default();
        let mut words = Vec::new();
        for word in candidates {
            if !lookup.contains_key(word.text()) {
                lookup.insert(word.text().to_string(), words.len());
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(LoadError::Empty {
                origin: origin.to_string(),
            });
        }

        Ok(Self { words, lookup })
    }

    /// Check whether `text` is a guessable word
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains_key(text)
    }

    /// Look up the listed word spelled `text`
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.lookup.get(text).map(|&i| &self.words[i])
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; an empty list is rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick one word uniformly at random
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_tui::wordlists::{EmbeddedLoader, WordListLoader};
    ///
    /// let list = EmbeddedLoader.load().unwrap();
    /// let secret = list.choose(&mut StdRng::seed_from_u64(7));
    /// assert!(list.contains(secret.text()));
    /// ```
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::from_words(words.iter().map(|w| Word::new(*w).unwrap()), "test").unwrap()
    }

    #[test]
    fn word_list_membership() {
        let words = list(&["crane", "slate"]);
        assert!(words.contains("crane"));
        assert!(words.contains("slate"));
        assert!(!words.contains("irate"));
        assert!(!words.contains("CRANE"));
    }

    #[test]
    fn word_list_get_returns_listed_word() {
        let words = list(&["crane", "slate"]);
        assert_eq!(words.get("slate").map(Word::text), Some("slate"));
        assert!(words.get("irate").is_none());
    }

    #[test]
    fn word_list_drops_duplicates() {
        let words = list(&["crane", "slate", "CRANE", "crane"]);
        assert_eq!(words.len(), 2);
        assert_eq!(words.words()[0].text(), "crane");
        assert_eq!(words.words()[1].text(), "slate");
    }

    #[test]
    fn word_list_rejects_empty() {
        let err = WordList::from_words(Vec::new(), "nothing").unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
        assert_eq!(err.to_string(), "Word list nothing contains no valid words");
    }

    #[test]
    fn word_list_choose_is_deterministic_with_seed() {
        let words = list(&["crane", "slate", "irate", "audio", "moist"]);
        let first = words.choose(&mut StdRng::seed_from_u64(42)).clone();
        let second = words.choose(&mut StdRng::seed_from_u64(42)).clone();
        assert_eq!(first, second);
        assert!(words.contains(first.text()));
    }

    #[test]
    fn word_list_choose_covers_every_word() {
        let words = list(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..200 {
            seen.insert(words.choose(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn word_list_single_word() {
        let words = list(&["crane"]);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(words.choose(&mut rng).text(), "crane");
    }
}
