//! Round controller
//!
//! Owns the board for one game: the target, one row per round, and the index
//! of the row currently being typed. Invalid actions (typing or submitting
//! after the game is over, submitting a short draft) are silently ignored.

use super::WordPicker;
use crate::core::{Guess, NUM_ROUNDS, Word};
use tracing::{debug, info};

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won,
    Exhausted,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// What a call to [`RoundController::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
    /// Draft was incomplete or the game is already over; nothing changed
    Ignored,
    /// Guess recorded, rounds remain
    Continue,
    Won,
    Exhausted,
}

/// Fixed-round state machine for a single game
#[derive(Debug)]
pub struct RoundController<P> {
    picker: P,
    target: Word,
    history: [Guess; NUM_ROUNDS],
    current: usize,
    status: GameStatus,
}

impl<P: WordPicker> RoundController<P> {
    /// Start a game, drawing the first target from `picker`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameStatus, RoundController, SubmitOutcome};
    ///
    /// let mut game = RoundController::new(|| Word::new("mummy").unwrap());
    /// game.update_draft("ummmm");
    /// assert_eq!(game.submit(), SubmitOutcome::Continue);
    /// game.update_draft("MUMMY");
    /// assert_eq!(game.submit(), SubmitOutcome::Won);
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(mut picker: P) -> Self {
        let target = picker.pick_target();
        debug!("game started");
        Self {
            picker,
            target,
            history: [Guess::BLANK; NUM_ROUNDS],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Replace the current round's draft with `input`
    ///
    /// Input is lowercased and cut to the word length. Ignored once the game
    /// is over.
    pub fn update_draft(&mut self, input: &str) {
        if self.status.is_terminal() {
            return;
        }
        self.history[self.current] = Guess::from_draft(input);
    }

    /// Score the current draft and move to the next round
    ///
    /// Does nothing unless the game is in progress and the draft is complete.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status.is_terminal() {
            return SubmitOutcome::Ignored;
        }

        let draft = &self.history[self.current];
        if !draft.is_complete() {
            return SubmitOutcome::Ignored;
        }

        let row = draft.classify(&self.target);
        self.history[self.current] = row;
        self.current += 1;
        debug!(round = self.current, guess = %row.text(), "guess submitted");

        self.status = if row.text() == self.target.text() {
            GameStatus::Won
        } else if self.current == NUM_ROUNDS {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        };

        match self.status {
            GameStatus::Won => {
                info!(rounds = self.current, "puzzle solved");
                SubmitOutcome::Won
            }
            GameStatus::Exhausted => {
                info!(answer = %self.target, "out of rounds");
                SubmitOutcome::Exhausted
            }
            GameStatus::InProgress => SubmitOutcome::Continue,
        }
    }

    /// Throw the board away and start over with a new target
    pub fn reset(&mut self) {
        self.history = [Guess::BLANK; NUM_ROUNDS];
        self.current = 0;
        self.status = GameStatus::InProgress;
        self.target = self.picker.pick_target();
        debug!("game reset");
    }
}

impl<P> RoundController<P> {
    /// Every row of the board, submitted or not
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &[Guess; NUM_ROUNDS] {
        &self.history
    }

    /// Only the rows that have been scored
    #[must_use]
    pub fn submitted(&self) -> &[Guess] {
        &self.history[..self.current]
    }

    /// The row being typed, if the game is still going
    #[must_use]
    pub fn draft(&self) -> Option<&Guess> {
        if self.status.is_terminal() {
            None
        } else {
            self.history.get(self.current)
        }
    }

    /// Zero-based index of the round being played
    #[inline]
    #[must_use]
    pub const fn current_round(&self) -> usize {
        self.current
    }

    #[inline]
    #[must_use]
    pub const fn rounds_remaining(&self) -> usize {
        NUM_ROUNDS - self.current
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The hidden word. Front ends only reveal it once the game is over.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, WORD_LENGTH};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Cycles through `words` and counts how often it was asked
    fn picker(words: &[&str], calls: &Rc<Cell<usize>>) -> impl FnMut() -> Word + use<> {
        let words: Vec<Word> = words.iter().map(|w| Word::new(w).unwrap()).collect();
        let calls = Rc::clone(calls);
        move || {
            let word = words[calls.get() % words.len()].clone();
            calls.set(calls.get() + 1);
            word
        }
    }

    fn game(target: &str) -> RoundController<impl FnMut() -> Word> {
        RoundController::new(picker(&[target], &Rc::new(Cell::new(0))))
    }

    fn play(game: &mut RoundController<impl WordPicker>, guess: &str) -> SubmitOutcome {
        game.update_draft(guess);
        game.submit()
    }

    #[test]
    fn fresh_game_is_blank() {
        let game = game("crane");
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_round(), 0);
        assert_eq!(game.rounds_remaining(), NUM_ROUNDS);
        assert!(game.history().iter().all(Guess::is_blank));
        assert!(game.submitted().is_empty());
        assert_eq!(game.target().text(), "crane");
    }

    #[test]
    fn draft_replaces_current_row_only() {
        let mut game = game("crane");
        game.update_draft("sl");
        game.update_draft("sla");

        assert_eq!(game.history()[0].text(), "sla");
        assert!(game.history()[1..].iter().all(Guess::is_blank));
        assert_eq!(game.draft().map(Guess::text).as_deref(), Some("sla"));
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn incomplete_draft_is_not_submitted() {
        let mut game = game("crane");
        assert_eq!(play(&mut game, "slat"), SubmitOutcome::Ignored);
        assert_eq!(game.current_round(), 0);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.history()[0].text(), "slat");

        assert_eq!(play(&mut game, ""), SubmitOutcome::Ignored);
        assert_eq!(game.current_round(), 0);
    }

    #[test]
    fn submit_scores_row_and_advances() {
        let mut game = game("mummy");
        assert_eq!(play(&mut game, "ummmm"), SubmitOutcome::Continue);

        assert_eq!(game.current_round(), 1);
        let row = &game.submitted()[0];
        assert!(row.is_submitted());
        assert_eq!(
            row.classifications(),
            [
                Classification::Partial,
                Classification::Partial,
                Classification::Correct,
                Classification::Correct,
                Classification::Incorrect,
            ]
        );
        assert!(game.draft().is_some_and(Guess::is_blank));
    }

    #[test]
    fn resubmitting_without_typing_is_ignored() {
        let mut game = game("crane");
        play(&mut game, "slate");
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
        assert_eq!(game.current_round(), 1);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let mut game = game("crane");
        assert_eq!(play(&mut game, "slate"), SubmitOutcome::Continue);
        assert_eq!(play(&mut game, "CRANE"), SubmitOutcome::Won);

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_round(), 2);
        assert!(game.is_terminal());
        assert!(game.draft().is_none());
        assert!(game.submitted()[1].is_solved());
    }

    #[test]
    fn win_on_last_round_is_a_win() {
        let mut game = game("crane");
        for _ in 0..NUM_ROUNDS - 1 {
            play(&mut game, "slate");
        }
        assert_eq!(play(&mut game, "crane"), SubmitOutcome::Won);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.current_round(), NUM_ROUNDS);
    }

    #[test]
    fn running_out_of_rounds_exhausts() {
        let mut game = game("crane");
        for round in 1..NUM_ROUNDS {
            assert_eq!(play(&mut game, "slate"), SubmitOutcome::Continue);
            assert_eq!(game.current_round(), round);
        }
        assert_eq!(play(&mut game, "slate"), SubmitOutcome::Exhausted);

        assert_eq!(game.status(), GameStatus::Exhausted);
        assert_eq!(game.current_round(), NUM_ROUNDS);
        assert_eq!(game.rounds_remaining(), 0);
        assert!(game.history().iter().all(Guess::is_submitted));
    }

    #[test]
    fn terminal_game_ignores_input() {
        let mut game = game("crane");
        play(&mut game, "crane");
        let before = *game.history();

        game.update_draft("slate");
        assert_eq!(game.submit(), SubmitOutcome::Ignored);
        assert_eq!(*game.history(), before);
        assert_eq!(game.current_round(), 1);

        let mut game = self::game("crane");
        for _ in 0..NUM_ROUNDS {
            play(&mut game, "slate");
        }
        let before = *game.history();
        assert_eq!(play(&mut game, "crane"), SubmitOutcome::Ignored);
        assert_eq!(*game.history(), before);
        assert_eq!(game.status(), GameStatus::Exhausted);
    }

    #[test]
    fn reset_draws_new_target_and_clears_board() {
        let calls = Rc::new(Cell::new(0));
        let mut game = RoundController::new(picker(&["crane", "mummy"], &calls));
        assert_eq!(calls.get(), 1);

        play(&mut game, "crane");
        assert_eq!(game.status(), GameStatus::Won);

        game.reset();
        assert_eq!(calls.get(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_round(), 0);
        assert!(game.history().iter().all(Guess::is_blank));
        assert_eq!(game.target().text(), "mummy");
    }

    #[test]
    fn reset_after_exhaustion_and_mid_game() {
        let calls = Rc::new(Cell::new(0));
        let mut game = RoundController::new(picker(&["crane"], &calls));
        for _ in 0..NUM_ROUNDS {
            play(&mut game, "slate");
        }
        game.reset();
        assert_eq!(calls.get(), 2);
        assert_eq!(game.status(), GameStatus::InProgress);

        // Same word drawn again is fine; the draw still happens
        play(&mut game, "slate");
        game.update_draft("cr");
        game.reset();
        assert_eq!(calls.get(), 3);
        assert_eq!(game.current_round(), 0);
        assert_eq!(game.target().text(), "crane");
        assert!(game.draft().is_some_and(Guess::is_blank));
    }

    #[test]
    fn overlong_draft_is_truncated() {
        let mut game = game("plane");
        game.update_draft("planets");
        assert_eq!(game.draft().map(Guess::text).as_deref(), Some("plane"));
        assert_eq!(game.submit(), SubmitOutcome::Won);
        assert_eq!(game.submitted()[0].letters().len(), WORD_LENGTH);
    }
}
