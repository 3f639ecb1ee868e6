//! Target word selection

use super::GameError;
use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies target words to the round controller
///
/// Called once when a game is created and again on every reset.
pub trait WordPicker {
    fn pick_target(&mut self) -> Word;
}

impl<F> WordPicker for F
where
    F: FnMut() -> Word,
{
    fn pick_target(&mut self) -> Word {
        self()
    }
}

/// Uniform random choice over a fixed word list
///
/// Words may repeat between games.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomPicker {
    /// Create a picker seeded from the OS
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, GameError> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Create a picker with a fixed seed, for reproducible games
    ///
    /// # Errors
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{RandomPicker, WordPicker};
    ///
    /// let words = vec![Word::new("crane").unwrap()];
    /// let mut picker = RandomPicker::with_seed(words, 7).unwrap();
    /// assert_eq!(picker.pick_target().text(), "crane");
    /// ```
    pub fn with_seed(words: Vec<Word>, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<Word>, rng: StdRng) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        Ok(Self { words, rng })
    }
}

impl WordPicker for RandomPicker {
    fn pick_target(&mut self) -> Word {
        // Non-empty is checked at construction
        let index = self.rng.random_range(0..self.words.len());
        self.words[index].clone()
    }
}
