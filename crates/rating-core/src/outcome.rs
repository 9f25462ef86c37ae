//! A single rated game and its `RATING:RESULT[:NAME]` notation.

use crate::result::{GameResult, ResultParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing game notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutcomeParseError {
    #[error("invalid game '{0}': expected RATING:RESULT[:NAME]")]
    InvalidFormat(String),

    #[error("invalid opponent rating: {0}")]
    InvalidRating(String),

    #[error(transparent)]
    InvalidResult(#[from] ResultParseError),
}

/// Identifies an opponent for repeat-pairing checks.
///
/// Named opponents are compared by name; unnamed ones by rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpponentKey<'a> {
    Named(&'a str),
    Rated(i32),
}

/// One played game: the opponent's rating and the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOutcome {
    /// Opponent's rating at the time of the game.
    pub opponent_rating: i32,
    /// Result from the rated player's point of view.
    pub result: GameResult,
    /// Optional opponent name, used to recognise repeat pairings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
}

impl GameOutcome {
    /// Creates an outcome against an unnamed opponent.
    pub fn new(opponent_rating: i32, result: GameResult) -> Self {
        GameOutcome {
            opponent_rating,
            result,
            opponent: None,
        }
    }

    /// Attaches an opponent name.
    pub fn with_opponent(mut self, name: impl Into<String>) -> Self {
        self.opponent = Some(name.into());
        self
    }

    /// Shorthand for a win against `opponent_rating`.
    pub fn win(opponent_rating: i32) -> Self {
        Self::new(opponent_rating, GameResult::Win)
    }

    /// Shorthand for a draw against `opponent_rating`.
    pub fn draw(opponent_rating: i32) -> Self {
        Self::new(opponent_rating, GameResult::Draw)
    }

    /// Shorthand for a loss against `opponent_rating`.
    pub fn loss(opponent_rating: i32) -> Self {
        Self::new(opponent_rating, GameResult::Loss)
    }

    /// Returns the numeric score of this game.
    #[inline]
    pub fn score(&self) -> f64 {
        self.result.score()
    }

    /// Returns the key used to decide whether two games were against the same opponent.
    pub fn opponent_key(&self) -> OpponentKey<'_> {
        match &self.opponent {
            Some(name) => OpponentKey::Named(name),
            None => OpponentKey::Rated(self.opponent_rating),
        }
    }
}

impl FromStr for GameOutcome {
    type Err = OutcomeParseError;

    /// Parses `RATING:RESULT` or `RATING:RESULT:NAME`, e.g. `1450:w` or `1500:d:Smith`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().splitn(3, ':');
        let (Some(rating), Some(result)) = (parts.next(), parts.next()) else {
            return Err(OutcomeParseError::InvalidFormat(s.to_string()));
        };

        let opponent_rating = rating
            .trim()
            .parse::<i32>()
            .map_err(|_| OutcomeParseError::InvalidRating(rating.to_string()))?;
        let result = result.parse::<GameResult>()?;

        let outcome = GameOutcome::new(opponent_rating, result);
        Ok(match parts.next().map(str::trim) {
            Some(name) if !name.is_empty() => outcome.with_opponent(name),
            _ => outcome,
        })
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.opponent {
            Some(name) => write!(f, "{} vs {} ({})", self.result, name, self.opponent_rating),
            None => write!(f, "{} vs {}", self.result, self.opponent_rating),
        }
    }
}
