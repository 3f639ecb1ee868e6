//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{NUM_ROUNDS, WORD_LENGTH};
use crate::game::{RoundController, Statistics, SubmitOutcome, WordPicker};
use crate::output::{print_game_over, print_row};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the simple CLI game on stdin
///
/// Returns the session statistics when the player quits.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<P: WordPicker>(game: &mut RoundController<P>) -> Result<Statistics> {
    let stdin = io::stdin();
    run_simple_with(game, stdin.lock())
}

/// Run the simple CLI game reading lines from `input`
///
/// End of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error if reading from `input` or flushing stdout fails.
pub fn run_simple_with<P: WordPicker, R: BufRead>(
    game: &mut RoundController<P>,
    mut input: R,
) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {NUM_ROUNDS} tries.");
    println!("  - Green: right letter, right place");
    println!("  - Yellow: in the word, wrong place");
    println!("  - Gray: not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut stats = Statistics::default();

    loop {
        if game.is_terminal() {
            stats.record(game.status(), game.current_round());
            print_game_over(game.submitted(), game.status(), game.target().text());

            let Some(answer) = get_user_input(&mut input, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            break;
        }

        let prompt = format!("Guess {}/{NUM_ROUNDS}", game.current_round() + 1);
        let Some(line) = get_user_input(&mut input, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.reset();
                println!("\n🔄 New game started!\n");
            }
            guess => {
                if guess.chars().count() != WORD_LENGTH {
                    println!("❌ Guesses must be exactly {WORD_LENGTH} letters\n");
                    continue;
                }
                if !guess.chars().all(char::is_alphabetic) {
                    println!("❌ Letters only, please\n");
                    continue;
                }

                game.update_draft(guess);
                if game.submit() == SubmitOutcome::Ignored {
                    continue;
                }
                for (i, row) in game.submitted().iter().enumerate() {
                    print_row(i + 1, row);
                }
                println!();
            }
        }
    }

    info!(
        games = stats.total_games,
        won = stats.games_won,
        "simple session finished"
    );
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Prompt and read one trimmed line, `None` at end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
