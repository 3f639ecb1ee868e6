//! Guess evaluation
//!
//! Classifies every letter of a guess against the target with Wordle's
//! duplicate-letter rules: each target letter is credited at most once, and
//! exact matches are always resolved before misplaced ones.

use super::{Classification, WORD_LENGTH};
use rustc_hash::FxHashMap;

/// Classify `guess` against `target`
///
/// Both inputs are lowercased first, one character for one character, so case
/// never affects the result.
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact position matches as correct and take them out of
///    the pool
/// 3. Second pass, left to right: a remaining letter still in the pool is
///    partial (and consumes one from the pool), otherwise incorrect
///
/// When the guess repeats a letter more often than the target, the leftmost
/// extra occurrences get the partial credit.
///
/// # Panics
/// Panics if either input is not exactly `WORD_LENGTH` characters. Callers
/// enforce this before evaluating.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Classification::*};
///
/// assert_eq!(
///     evaluate("ummmm", "mummy"),
///     [Partial, Partial, Correct, Correct, Incorrect]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> [Classification; WORD_LENGTH] {
    let guess = normalize(guess);
    let target = normalize(target);
    assert_eq!(guess.len(), WORD_LENGTH, "guess must be {WORD_LENGTH} letters");
    assert_eq!(target.len(), WORD_LENGTH, "target must be {WORD_LENGTH} letters");

    let mut result = [Classification::Incorrect; WORD_LENGTH];
    let mut remaining = letter_counts(&target);

    // First pass: exact matches
    for ((slot, g), t) in result.iter_mut().zip(&guess).zip(&target) {
        if g == t {
            *slot = Classification::Correct;
            if let Some(count) = remaining.get_mut(g) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced letters from what's left in the pool
    for (slot, g) in result.iter_mut().zip(&guess) {
        if *slot == Classification::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(g)
            && *count > 0
        {
            *slot = Classification::Partial;
            *count -= 1;
        }
    }

    result
}

fn normalize(word: &str) -> Vec<char> {
    word.chars().map(fold_case).collect()
}

/// Lowercase a single character without changing the character count
///
/// Characters whose lowercase form is several characters keep only the first.
pub(super) fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn letter_counts(word: &[char]) -> FxHashMap<char, u8> {
    let mut counts = FxHashMap::default();
    for &ch in word {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Classification::{Correct, Incorrect, Partial};
    use proptest::prelude::*;

    #[test]
    fn duplicate_guess_letters_against_repeated_target() {
        assert_eq!(
            evaluate("ummmm", "mummy"),
            [Partial, Partial, Correct, Correct, Incorrect]
        );
    }

    #[test]
    fn exact_match_is_never_stolen_by_earlier_partial() {
        // ROBOT vs FLOOR: the second O is exact, the first O gets the other one
        assert_eq!(
            evaluate("robot", "floor"),
            [Partial, Partial, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn excess_occurrences_resolve_left_to_right() {
        // Only one E in the target: first misplaced E is credited, the rest are not
        assert_eq!(
            evaluate("eerie", "alert"),
            [Partial, Incorrect, Partial, Incorrect, Incorrect]
        );
        assert_eq!(
            evaluate("speed", "abide"),
            [Incorrect, Incorrect, Partial, Incorrect, Partial]
        );
    }

    #[test]
    fn both_duplicates_credited_when_target_has_two() {
        // SPEED vs ERASE: S misplaced, both E's misplaced
        assert_eq!(
            evaluate("speed", "erase"),
            [Partial, Incorrect, Partial, Partial, Incorrect]
        );
    }

    #[test]
    fn classic_example() {
        assert_eq!(
            evaluate("crane", "slate"),
            [Incorrect, Incorrect, Correct, Incorrect, Correct]
        );
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(evaluate("CrAnE", "slate"), evaluate("crane", "SLATE"));
        assert_eq!(evaluate("MUMMY", "mummy"), [Correct; WORD_LENGTH]);
    }

    #[test]
    #[should_panic(expected = "guess must be 5 letters")]
    fn short_guess_panics() {
        let _ = evaluate("cran", "crane");
    }

    #[test]
    fn multi_char_lowercase_keeps_length() {
        // 'İ' lowercases to 'i' plus a combining dot; it still counts as one letter
        let guess = "\u{130}abcd";
        assert_eq!(guess.chars().count(), WORD_LENGTH);
        assert_eq!(
            evaluate(guess, "abcde"),
            [Incorrect, Partial, Partial, Partial, Partial]
        );
        assert_eq!(evaluate(guess, "iabcd"), [Correct; WORD_LENGTH]);
    }

    #[test]
    #[should_panic(expected = "target must be 5 letters")]
    fn long_target_panics() {
        let _ = evaluate("crane", "cranes");
    }

    fn word() -> impl Strategy<Value = String> {
        "[a-z]{5}"
    }

    fn distinct_word() -> impl Strategy<Value = String> {
        proptest::sample::subsequence(('a'..='z').collect::<Vec<_>>(), WORD_LENGTH)
            .prop_shuffle()
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn word_against_itself_is_all_correct(target in word()) {
            prop_assert_eq!(evaluate(&target, &target), [Correct; WORD_LENGTH]);
        }

        #[test]
        fn evaluation_is_repeatable(guess in word(), target in word()) {
            prop_assert_eq!(evaluate(&guess, &target), evaluate(&guess, &target));
        }

        #[test]
        fn distinct_letters_follow_simple_rule(guess in distinct_word(), target in distinct_word()) {
            let result = evaluate(&guess, &target);
            for ((class, g), t) in result.iter().zip(guess.chars()).zip(target.chars()) {
                let expected = if g == t {
                    Correct
                } else if target.contains(g) {
                    Partial
                } else {
                    Incorrect
                };
                prop_assert_eq!(*class, expected);
            }
        }

        #[test]
        fn disjoint_letters_are_all_incorrect(guess in "[a-m]{5}", target in "[n-z]{5}") {
            prop_assert_eq!(evaluate(&guess, &target), [Incorrect; WORD_LENGTH]);
        }

        #[test]
        fn credit_never_exceeds_target_count(guess in word(), target in word()) {
            let result = evaluate(&guess, &target);
            for letter in guess.chars() {
                let credited = result
                    .iter()
                    .zip(guess.chars())
                    .filter(|(c, g)| *g == letter && **c != Incorrect)
                    .count();
                let available = target.chars().filter(|&t| t == letter).count();
                prop_assert!(credited <= available);
            }
        }
    }
}
