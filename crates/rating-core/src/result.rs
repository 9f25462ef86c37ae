//! Game result representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a game result string is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid game result '{0}': expected win, draw or loss")]
pub struct ResultParseError(pub String);

/// The result of one game from the rated player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Draw,
    Loss,
}

impl GameResult {
    /// Returns the numeric score (1.0 for a win, 0.5 for a draw, 0.0 for a loss).
    #[inline]
    pub const fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.5,
            GameResult::Loss => 0.0,
        }
    }

    /// Returns the result as seen by the opponent.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Draw => GameResult::Draw,
            GameResult::Loss => GameResult::Win,
        }
    }
}

impl FromStr for GameResult {
    type Err = ResultParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "win" | "1" | "1.0" => Ok(GameResult::Win),
            "d" | "draw" | "=" | "0.5" | "½" => Ok(GameResult::Draw),
            "l" | "loss" | "0" | "0.0" => Ok(GameResult::Loss),
            _ => Err(ResultParseError(s.to_string())),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win => write!(f, "win"),
            GameResult::Draw => write!(f, "draw"),
            GameResult::Loss => write!(f, "loss"),
        }
    }
}
