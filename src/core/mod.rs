//! Core domain types for the puzzle
//!
//! Words, letters, guesses and the evaluation rules that classify a guess
//! against the target. Everything here is pure and has no I/O.

mod evaluator;
mod guess;
mod letter;
mod word;

pub use evaluator::evaluate;
use evaluator::fold_case;
pub use guess::Guess;
pub use letter::{Classification, Letter};
pub use word::{Word, WordError};

/// Number of letters in every guess and target word
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets per game
pub const NUM_ROUNDS: usize = 6;
