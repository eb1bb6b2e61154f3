//! Score a single guess against a given secret

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret` without starting a game
///
/// Neither word has to be in a word list.
///
/// # Errors
///
/// Returns `WordError` if either input is not a valid 5-character word.
///
/// # Examples
/// ```
/// use wordle_tui::commands::score_words;
///
/// let result = score_words("speed", "eerie").unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨🟨🔲🔲🔲");
/// ```
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::score(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
