//! Win/draw/loss summary of a session.

use crate::{GameOutcome, GameResult};
use serde::{Deserialize, Serialize};

/// Counts of wins, draws and losses in a list of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl ScoreTally {
    /// Tallies the results of `games`.
    pub fn from_games(games: &[GameOutcome]) -> Self {
        games.iter().fold(Self::default(), |mut tally, game| {
            match game.result {
                GameResult::Win => tally.wins += 1,
                GameResult::Draw => tally.draws += 1,
                GameResult::Loss => tally.losses += 1,
            }
            tally
        })
    }

    /// Total number of games.
    #[inline]
    pub const fn games(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Points scored (a draw is worth half a point).
    #[inline]
    pub fn points(&self) -> f64 {
        f64::from(self.wins) + 0.5 * f64::from(self.draws)
    }

    /// Fraction of available points scored, or `None` if no games were played.
    pub fn fraction(&self) -> Option<f64> {
        match self.games() {
            0 => None,
            n => Some(self.points() / f64::from(n)),
        }
    }
}
