//! Game flow
//!
//! The round controller that drives a single game, the word-selection seam it
//! draws targets through, and per-session statistics.

mod picker;
mod round;
mod stats;

pub use picker::{RandomPicker, WordPicker};
pub use round::{GameStatus, RoundController, SubmitOutcome};
pub use stats::Statistics;

use thiserror::Error;

/// Errors raised while setting up a game
#[derive(Debug, Error)]
pub enum GameError {
    #[error("word list is empty")]
    EmptyWordList,
}
