//! One row of the board
//!
//! A `Guess` is either a draft (typed letters, all `Unused`) or a submitted
//! row where every letter carries its classification.

use super::{Classification, Letter, WORD_LENGTH, Word, evaluate, fold_case};

/// A fixed-width row of letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Guess([Letter; WORD_LENGTH]);

impl Guess {
    /// An empty row
    pub const BLANK: Self = Self([Letter::BLANK; WORD_LENGTH]);

    /// Build a draft row from raw input
    ///
    /// Input is truncated to `WORD_LENGTH` characters and each one lowercased;
    /// missing slots are blank. Every letter is `Unused`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Guess;
    ///
    /// let draft = Guess::from_draft("CRa");
    /// assert_eq!(draft.text(), "cra");
    /// assert!(!draft.is_complete());
    /// assert!(Guess::from_draft("cranes").is_complete());
    /// ```
    #[must_use]
    pub fn from_draft(input: &str) -> Self {
        let mut letters = [Letter::BLANK; WORD_LENGTH];
        for (slot, ch) in letters
            .iter_mut()
            .zip(input.chars().map(fold_case))
        {
            *slot = Letter::typed(ch);
        }
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    /// A draft is complete once its last slot holds a real character
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.0[WORD_LENGTH - 1].is_blank()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(Letter::is_blank)
    }

    /// True once every letter has been classified
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.0.iter().all(|l| l.class.is_resolved())
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|l| l.class == Classification::Correct)
    }

    /// Typed characters concatenated, blanks skipped
    #[must_use]
    pub fn text(&self) -> String {
        self.0.iter().filter_map(|l| l.ch).collect()
    }

    #[must_use]
    pub fn classifications(&self) -> [Classification; WORD_LENGTH] {
        self.0.map(|l| l.class)
    }

    /// Classify a complete draft against `target`
    ///
    /// # Panics
    /// Panics if the draft is not complete.
    #[must_use]
    pub fn classify(&self, target: &Word) -> Self {
        let classes = evaluate(&self.text(), target.text());
        let mut letters = self.0;
        for (letter, class) in letters.iter_mut().zip(classes) {
            letter.class = class;
        }
        Self(letters)
    }
}
