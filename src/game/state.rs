//! Turn-based game state machine
//!
//! Every action is total: an action that is not allowed in the current phase
//! is an identity transition and reports `false`, never an error.

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;

/// Number of accepted guesses before the game is lost
pub const MAX_GUESSES: usize = 6;

/// Where the player is in the turn protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Typing, fewer than 5 characters entered
    Entering,
    /// 5 characters forming a listed word, waiting for confirm
    PendingConfirmation,
    /// 5 characters not in the word list, must be edited
    Invalid,
    Won,
    Lost,
}

impl Phase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Result of the game so far, derived from the guess history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// A single player input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Type(char),
    Backspace,
    Confirm,
}

/// State of one game
///
/// Owned by the driving loop; borrows the word list for its lifetime.
#[derive(Debug, Clone)]
pub struct GameState<'a> {
    word_list: &'a WordList,
    secret: Word,
    history: Vec<Word>,
    buffer: String,
    phase: Phase,
}

impl<'a> GameState<'a> {
    /// Start a game with a secret drawn uniformly from `word_list`
    #[must_use]
    pub fn new<R: Rng + ?Sized>(word_list: &'a WordList, rng: &mut R) -> Self {
        let secret = word_list.choose(rng).clone();
        log::debug!("secret chosen from {} words", word_list.len());
        Self::with_secret(word_list, secret)
    }

    /// Start a game with a known secret
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::Word;
    /// use wordle_tui::game::{Action, GameState, Outcome, Phase};
    /// use wordle_tui::wordlists::{EmbeddedLoader, WordListLoader};
    ///
    /// let list = EmbeddedLoader.load().unwrap();
    /// let mut game = GameState::with_secret(&list, Word::new("crane").unwrap());
    ///
    /// for c in "crane".chars() {
    ///     game.apply(Action::Type(c));
    /// }
    /// assert_eq!(game.phase(), Phase::PendingConfirmation);
    ///
    /// game.apply(Action::Confirm);
    /// assert_eq!(game.outcome(), Outcome::Won);
    /// ```
    #[must_use]
    pub fn with_secret(word_list: &'a WordList, secret: Word) -> Self {
        Self {
            word_list,
            secret,
            history: Vec::with_capacity(MAX_GUESSES),
            buffer: String::with_capacity(WORD_LENGTH),
            phase: Phase::Entering,
        }
    }

    /// Apply one input event, returning whether anything changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Type(c) => self.append_char(c),
            Action::Backspace => self.backspace(),
            Action::Confirm => self.confirm(),
        }
    }

    /// Append a character to the in-flight guess
    ///
    /// Ignored unless entering, the buffer has room, and `c` is ASCII alphanumeric.
    pub fn append_char(&mut self, c: char) -> bool {
        if self.phase != Phase::Entering
            || self.buffer.len() >= WORD_LENGTH
            || !c.is_ascii_alphanumeric()
        {
            return false;
        }

        self.buffer.push(c.to_ascii_lowercase());
        if self.buffer.len() == WORD_LENGTH {
            self.phase = if self.word_list.contains(&self.buffer) {
                Phase::PendingConfirmation
            } else {
                Phase::Invalid
            };
        }
        true
    }

    /// Remove the last typed character and return to entering
    pub fn backspace(&mut self) -> bool {
        if self.phase.is_terminal() || self.buffer.pop().is_none() {
            return false;
        }
        self.phase = Phase::Entering;
        true
    }

    /// Accept the pending guess
    ///
    /// Only valid in `PendingConfirmation`. Ends the game when the guess is
    /// the secret or the last guess has been used.
    pub fn confirm(&mut self) -> bool {
        if self.phase != Phase::PendingConfirmation {
            return false;
        }
        let Some(guess) = self.word_list.get(&self.buffer).cloned() else {
            return false;
        };

        self.buffer.clear();
        self.history.push(guess);

        self.phase = match self.outcome() {
            Outcome::Won => Phase::Won,
            Outcome::Lost => Phase::Lost,
            Outcome::InProgress => Phase::Entering,
        };

        log::info!(
            "guess {}/{MAX_GUESSES} accepted, phase now {:?}",
            self.history.len(),
            self.phase
        );
        true
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome derived from the accepted guesses
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.history.last() {
            Some(last) if *last == self.secret => Outcome::Won,
            Some(_) if self.history.len() >= MAX_GUESSES => Outcome::Lost,
            _ => Outcome::InProgress,
        }
    }

    /// Accepted guesses in turn order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    /// Each accepted guess with its feedback
    pub fn scored_history(&self) -> impl Iterator<Item = (&Word, Feedback)> + '_ {
        self.history
            .iter()
            .map(|guess| (guess, Feedback::score(&self.secret, guess)))
    }

    /// Characters typed for the guess in progress
    #[inline]
    #[must_use]
    pub fn in_flight(&self) -> &str {
        &self.buffer
    }

    /// The secret, revealed only once the game is over
    #[must_use]
    pub fn secret(&self) -> Option<&Word> {
        self.phase.is_terminal().then_some(&self.secret)
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }
}
