//! Display functions for command results

use super::formatters::{colored_tiles, guess_to_emoji, guess_to_symbols, share_grid};
use crate::commands::CheckResult;
use crate::core::Guess;
use crate::game::GameStatus;
use colored::Colorize;

/// Print one row as colored tiles followed by its emoji form
///
/// Without color support the tiles carry no feedback, so the row falls back
/// to `G`/`Y`/`-` symbols.
pub fn print_row(index: usize, guess: &Guess) {
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    println!("{}", format_row(index, guess, colorize));
}

fn format_row(index: usize, guess: &Guess, colorize: bool) -> String {
    let tiles: String = colored_tiles(guess)
        .iter()
        .map(ToString::to_string)
        .collect();
    let feedback = if colorize {
        guess_to_emoji(guess)
    } else {
        guess_to_symbols(guess)
    };
    format!("  {} {}  {}", format!("{index}.").bright_black(), tiles, feedback)
}

/// Print the result of a one-off check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    print_row(1, &result.guess);

    println!();
    if result.guess.is_solved() {
        println!("{}", "✅ Exact match!".green().bold());
    } else {
        let greens = result
            .guess
            .letters()
            .iter()
            .filter(|l| l.class == crate::core::Classification::Correct)
            .count();
        println!("{greens} letter(s) in the right place");
    }
}

/// Print the end-of-game banner
pub fn print_game_over(submitted: &[Guess], status: GameStatus, answer: &str) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match status {
        GameStatus::Won => {
            let rounds = submitted.len();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {rounds} {}!",
                    if rounds == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Exhausted => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                answer.to_uppercase().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());
    println!("\n{}\n", share_grid(submitted, status));
}
