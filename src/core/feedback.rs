//! Per-position guess feedback
//!
//! Every position of a scored guess receives one [`Mark`]:
//! - `Correct` = letter in the right position
//! - `Present` = letter in the word, wrong position
//! - `Absent` = letter not in the word (after duplicates already matched)

use super::Word;
use super::word::WORD_LENGTH;

/// Feedback label for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

impl Mark {
    /// Share-grid glyph for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '🔲',
        }
    }
}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Build feedback from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled the Wordle way: a letter is marked
    /// `Correct` or `Present` at most as many times as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the secret's letter bag
    /// 2. Second pass: left to right, mark `Present` while the bag still holds the letter
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Mark, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = Feedback::score(&secret, &guess);
    ///
    /// use Mark::{Absent, Correct};
    /// assert_eq!(feedback.marks(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut bag = secret.char_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Correct;
                if let Some(count) = bag.get_mut(&g) {
                    *count -= 1;
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Correct {
                continue;
            }
            if let Some(count) = bag.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Present;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// Marks in position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Number of positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Render as a share-grid row like "🟩🟨🔲🔲🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Absent, Correct, Present};

    fn score(secret: &str, guess: &str) -> Feedback {
        Feedback::score(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn feedback_all_absent_when_no_shared_letters() {
        let feedback = score("fghij", "abcde");
        assert_eq!(feedback, Feedback::new([Absent; 5]));
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn feedback_all_correct_for_same_word() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "speed"] {
            assert!(score(word, word).is_perfect(), "{word} vs itself");
        }
    }

    #[test]
    fn feedback_duplicate_guess_letters_capped_by_secret() {
        // SPEED holds two E's; EERIE offers three, only two may light up
        let feedback = score("speed", "eerie");
        assert_eq!(
            feedback.marks(),
            &[Present, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_green_takes_priority() {
        // FLOOR vs ROBOT: the second O is an exact match, the first is misplaced
        let feedback = score("floor", "robot");
        assert_eq!(
            feedback.marks(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_exact_match_consumes_letter_before_misplaced() {
        // Only one L in the secret and it is matched exactly at position 3
        let feedback = score("abbly", "lolly");
        assert_eq!(
            feedback.marks(),
            &[Absent, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn feedback_misplaced_duplicates_left_to_right() {
        let feedback = score("erase", "speed");
        assert_eq!(
            feedback.marks(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_never_overcounts_letters() {
        let words: Vec<Word> = crate::wordlists::WORDLIST
            .iter()
            .take(60)
            .filter_map(|&w| Word::new(w).ok())
            .collect();

        for secret in &words {
            let counts = secret.char_counts();
            for guess in &words {
                let feedback = Feedback::score(secret, guess);
                for (&letter, &available) in &counts {
                    let lit = guess
                        .chars()
                        .iter()
                        .zip(feedback.marks())
                        .filter(|&(&g, &m)| g == letter && m != Absent)
                        .count();
                    assert!(lit <= usize::from(available), "{secret} vs {guess}");
                }
                for (i, &g) in guess.chars().iter().enumerate() {
                    if !counts.contains_key(&g) {
                        assert_eq!(feedback.marks()[i], Absent, "{secret} vs {guess}");
                    }
                }
            }
        }
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(score("slate", "crane").to_emoji(), "🔲🔲🟩🔲🟩");
        assert_eq!(score("floor", "robot").to_emoji(), "🟨🟨🔲🟩🔲");
    }
}
