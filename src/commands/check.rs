//! One-off guess check
//!
//! Scores a single guess against a given target without starting a game.

use crate::core::{Guess, Word, WordError};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Guess,
    pub target: Word,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
///
/// # Examples
/// ```
/// use wordle_game::commands::check_guess;
///
/// let result = check_guess("ROBOT", "floor").unwrap();
/// assert_eq!(result.guess.text(), "robot");
/// assert!(!result.guess.is_solved());
/// ```
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    Ok(CheckResult {
        guess: Guess::from_draft(guess.text()).classify(&target),
        target,
    })
}
