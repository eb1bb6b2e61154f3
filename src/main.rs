//! Wordle TUI - CLI
//!
//! Play in the terminal, or score a single guess from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::PathBuf;
use wordle_tui::{
    commands::score_words,
    game::GameState,
    interactive::{App, run_tui},
    output::{print_game_summary, print_score_result},
    wordlists::{EmbeddedLoader, FileLoader, WordList, WordListLoader},
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Guess the hidden 5-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for choosing the secret word
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default info)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Score a guess against a secret and print the feedback
    Score {
        /// The hidden word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

/// Route logging away from the terminal the TUI draws on
fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => stderr_logger().init(),
    }
    Ok(())
}

/// Errors only: stderr shares the tty with the board, so `RUST_LOG` is ignored here
fn stderr_logger() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Error);
    builder
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    if wordlist_mode == "embedded" {
        let list = EmbeddedLoader.load()?;
        log::info!("loaded {} words from the embedded list", list.len());
        return Ok(list);
    }

    let loader = FileLoader::new(wordlist_mode);
    let list = loader.load()?;
    log::info!("loaded {} words from {}", list.len(), loader.path().display());
    Ok(list)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_ref())?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_play_command(wordlist_mode: &str, seed: Option<u64>) -> Result<()> {
    let word_list = load_wordlist(wordlist_mode).context("Cannot start a game")?;

    let game = match seed {
        Some(seed) => GameState::new(&word_list, &mut StdRng::seed_from_u64(seed)),
        None => GameState::new(&word_list, &mut rand::rng()),
    };

    let app = run_tui(App::new(game))?;
    log::info!("session ended: {:?}", app.game.outcome());
    print_game_summary(&app.game);
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_words(secret, guess).context("Invalid word")?;
    print_score_result(&result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_logger_only_passes_errors() {
        let logger = stderr_logger().build();
        assert_eq!(logger.filter(), log::LevelFilter::Error);
    }

    #[test]
    fn load_wordlist_reads_file_path() {
        let path = std::env::temp_dir().join(format!("wordle_tui_main_{}", std::process::id()));
        std::fs::write(&path, "crane\nslate\n").unwrap();
        let list = load_wordlist(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn load_wordlist_missing_file_fails() {
        assert!(load_wordlist("/definitely/not/here/wordlist").is_err());
    }
}
