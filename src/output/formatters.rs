//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use crate::game::GameState;
use colored::{ColoredString, Colorize};

/// Color one letter the way the board does
#[must_use]
pub fn colored_letter(letter: u8, mark: Mark) -> ColoredString {
    let text = char::from(letter).to_ascii_uppercase().to_string();
    match mark {
        Mark::Correct => text.black().on_green(),
        Mark::Present => text.black().on_yellow(),
        Mark::Absent => text.normal(),
    }
}

/// Format a guess as space-separated colored letters
#[must_use]
pub fn colored_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.marks())
        .map(|(&letter, &mark)| colored_letter(letter, mark).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji share grid, one row per accepted guess
#[must_use]
pub fn share_grid(game: &GameState) -> String {
    game.scored_history()
        .map(|(_, feedback)| feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Action;
    use crate::wordlists::WordList;

    #[test]
    fn share_grid_one_row_per_guess() {
        let words = ["slate", "crane", "irate"].map(|w| Word::new(w).unwrap());
        let list = WordList::from_words(words, "test").unwrap();
        let mut game = GameState::with_secret(&list, Word::new("slate").unwrap());

        for word in ["crane", "irate", "slate"] {
            for c in word.chars() {
                game.apply(Action::Type(c));
            }
            game.apply(Action::Confirm);
        }

        assert_eq!(share_grid(&game), "🔲🔲🟩🔲🟩\n🔲🔲🟩🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty_without_guesses() {
        let words = ["slate"].map(|w| Word::new(w).unwrap());
        let list = WordList::from_words(words, "test").unwrap();
        let game = GameState::with_secret(&list, Word::new("slate").unwrap());
        assert!(share_grid(&game).is_empty());
    }
}
