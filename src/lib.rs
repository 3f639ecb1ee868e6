//! Wordle Game
//!
//! A Wordle-style word guessing game: six rounds to find a hidden five-letter
//! word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{evaluate, Classification, Word};
//! use wordle_game::game::{RoundController, SubmitOutcome};
//!
//! // Score a guess directly
//! let feedback = evaluate("crane", "slate");
//! assert_eq!(feedback[2], Classification::Correct);
//!
//! // Or drive a whole game
//! let mut game = RoundController::new(|| Word::new("slate").unwrap());
//! game.update_draft("crane");
//! assert_eq!(game.submit(), SubmitOutcome::Continue);
//! ```

// Core domain types
pub mod core;

// Round controller and word selection
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log subscriber setup
pub mod logging;
