//! Display functions for command results

use super::formatters::{colored_guess, share_grid};
use crate::commands::ScoreResult;
use crate::game::{GameState, MAX_GUESSES, Outcome};
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(30).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(30).cyan());
    println!(
        "\n{}   {}",
        colored_guess(&result.guess, result.feedback),
        result.feedback.to_emoji()
    );
}

/// Print the end-of-session summary after the TUI closes
pub fn print_game_summary(game: &GameState) {
    if game.history().is_empty() {
        return;
    }

    println!();
    for (guess, feedback) in game.scored_history() {
        println!("{}", colored_guess(guess, feedback));
    }
    println!();

    match game.outcome() {
        Outcome::Won => {
            println!(
                "{}",
                format!("Wordle {}/{MAX_GUESSES}", game.history().len())
                    .green()
                    .bold()
            );
            println!("{}", share_grid(game));
        }
        Outcome::Lost => {
            println!("{}", format!("Wordle X/{MAX_GUESSES}").red().bold());
            println!("{}", share_grid(game));
            if let Some(secret) = game.secret() {
                println!("The word was: {}", secret.text().to_uppercase().bold());
            }
        }
        Outcome::InProgress => {
            println!(
                "{}",
                format!(
                    "Quit after {} of {MAX_GUESSES} guesses",
                    game.history().len()
                )
                .yellow()
            );
        }
    }
}
