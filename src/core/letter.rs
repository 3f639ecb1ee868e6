//! Per-letter feedback
//!
//! Each slot on the board is a `Letter`: an optional character and the
//! classification the evaluator assigned to it.

/// Feedback tag for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// Right letter, right position
    Correct,
    /// Letter is in the target but somewhere else
    Partial,
    /// Letter is not in the target (or all its occurrences are already credited)
    Incorrect,
    /// Not yet submitted
    #[default]
    Unused,
}

impl Classification {
    /// True for every tag a submitted letter can carry
    #[inline]
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Unused)
    }

    /// Emoji square used in share grids
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Partial => '🟨',
            Self::Incorrect => '⬜',
            Self::Unused => '⬛',
        }
    }

    /// Single ASCII symbol: `G`, `Y`, `-`, or `.` for unused
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Partial => 'Y',
            Self::Incorrect => '-',
            Self::Unused => '.',
        }
    }
}

/// One slot of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Letter {
    pub ch: Option<char>,
    pub class: Classification,
}

impl Letter {
    /// Placeholder for a slot the player hasn't typed into
    pub const BLANK: Self = Self {
        ch: None,
        class: Classification::Unused,
    };

    /// A typed but unsubmitted letter
    #[must_use]
    pub const fn typed(ch: char) -> Self {
        Self {
            ch: Some(ch),
            class: Classification::Unused,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.ch.is_none()
    }
}
