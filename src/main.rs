//! Wordle Game - CLI
//!
//! Wordle-style word guessing game with TUI and simple CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use wordle_game::{
    commands::{check_guess, run_simple},
    core::Word,
    game::{RandomPicker, RoundController},
    logging,
    output::print_check_result,
    wordlists::{TARGETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for target selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log filter, e.g. 'warn', 'debug', 'wordle_game=trace' (RUST_LOG overrides)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load target words based on the -w flag
fn load_targets(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(TARGETS)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn build_picker(wordlist_mode: &str, seed: Option<u64>) -> Result<RandomPicker> {
    let words = load_targets(wordlist_mode)?;
    let count = words.len();
    let picker = match seed {
        Some(seed) => RandomPicker::with_seed(words, seed),
        None => RandomPicker::new(words),
    }
    .with_context(|| format!("no usable words in '{wordlist_mode}'"))?;

    info!(words = count, seeded = seed.is_some(), "word list ready");
    Ok(picker)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal; keep stderr quiet unless a file is given
    let log_level = match (&command, &cli.log_file) {
        (Commands::Play, None) => "off",
        _ => cli.log_level.as_str(),
    };
    logging::init(log_level, cli.log_file.as_deref())?;

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.seed),
        Commands::Simple => run_simple_command(&cli.wordlist, cli.seed),
        Commands::Check { guess, target } => run_check_command(&guess, &target),
    }
}

fn run_play_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let picker = build_picker(wordlist, seed)?;
    let app = App::new(RoundController::new(picker));
    run_tui(app)
}

fn run_simple_command(wordlist: &str, seed: Option<u64>) -> Result<()> {
    let picker = build_picker(wordlist, seed)?;
    let mut game = RoundController::new(picker);
    let stats = run_simple(&mut game)?;

    if stats.total_games > 0 {
        println!(
            "Played {} | Won {} | Win rate {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        );
    }
    Ok(())
}

fn run_check_command(guess: &str, target: &str) -> Result<()> {
    let result = check_guess(guess, target).context("cannot check guess")?;
    print_check_result(&result);
    Ok(())
}
