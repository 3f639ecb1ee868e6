//! Word lists the game draws targets from
//!
//! Provides the embedded target list compiled into the binary, and loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn targets_are_valid_words() {
        for &word in TARGETS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_have_no_duplicates() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }

    #[test]
    fn targets_not_empty() {
        assert!(TARGETS_COUNT > 100);
    }
}
