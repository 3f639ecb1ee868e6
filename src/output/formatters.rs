//! Formatting utilities for terminal output

use crate::core::{Guess, NUM_ROUNDS};
use crate::game::GameStatus;
use colored::{ColoredString, Colorize};

/// Format a row as emoji squares
#[must_use]
pub fn guess_to_emoji(guess: &Guess) -> String {
    guess
        .letters()
        .iter()
        .map(|l| l.class.to_emoji())
        .collect()
}

/// Format a row as `G`/`Y`/`-` symbols
#[must_use]
pub fn guess_to_symbols(guess: &Guess) -> String {
    guess.letters().iter().map(|l| l.class.symbol()).collect()
}

/// Spoiler-free summary of a finished game
///
/// A `Wordle 3/6` header (`X/6` on a loss) followed by one emoji row per
/// submitted guess.
#[must_use]
pub fn share_grid(submitted: &[Guess], status: GameStatus) -> String {
    let score = match status {
        GameStatus::Won => submitted.len().to_string(),
        GameStatus::Exhausted | GameStatus::InProgress => "X".to_string(),
    };

    let mut grid = format!("Wordle {score}/{NUM_ROUNDS}");
    for guess in submitted {
        grid.push('\n');
        grid.push_str(&guess_to_emoji(guess));
    }
    grid
}

/// Color a row as letter tiles, e.g. ` C ` on green
#[must_use]
pub fn colored_tiles(guess: &Guess) -> Vec<ColoredString> {
    use crate::core::Classification;

    guess
        .letters()
        .iter()
        .map(|letter| {
            let tile = format!(" {} ", letter.ch.unwrap_or('_').to_ascii_uppercase());
            match letter.class {
                Classification::Correct => tile.black().on_green().bold(),
                Classification::Partial => tile.black().on_yellow().bold(),
                Classification::Incorrect => tile.white().on_bright_black(),
                Classification::Unused => tile.normal(),
            }
        })
        .collect()
}
