//! Per-session statistics

use super::GameStatus;
use crate::core::NUM_ROUNDS;

/// Results of every finished game in this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used (index 0 unused)
    pub guess_distribution: [usize; NUM_ROUNDS + 1],
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    /// Record a finished game
    ///
    /// `rounds_used` is the number of submitted guesses. In-progress games
    /// are not recorded.
    pub fn record(&mut self, status: GameStatus, rounds_used: usize) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(rounds_used) {
                    *slot += 1;
                }
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
            }
            GameStatus::Exhausted => {
                self.total_games += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Win percentage, 0 when no games have been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}
