//! ECF rating calculation.
//!
//! Unlike FIDE and US Chess, a session is rated game by game: each game
//! starts from the rating the previous game produced.

use crate::expected::{expected_score, ECF_SCALE};
use crate::{rounding, EcfResult, RatingChange, RatingSystem};
use rating_core::{validate, Federation, GameOutcome, InputError};
use serde::{Deserialize, Serialize};

/// The two K-factors the ECF publishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum EcfKFactor {
    /// K = 40.
    #[default]
    Standard,
    /// K = 20.
    Reduced,
}

impl EcfKFactor {
    pub const fn value(self) -> u32 {
        match self {
            EcfKFactor::Standard => 40,
            EcfKFactor::Reduced => 20,
        }
    }
}

impl TryFrom<u32> for EcfKFactor {
    type Error = InputError;

    fn try_from(k: u32) -> Result<Self, Self::Error> {
        validate::ecf_k_factor(k)?;
        Ok(if k == 20 {
            EcfKFactor::Reduced
        } else {
            EcfKFactor::Standard
        })
    }
}

impl From<EcfKFactor> for u32 {
    fn from(k: EcfKFactor) -> Self {
        k.value()
    }
}

/// Inputs for an ECF calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcfRequest {
    pub current_rating: i32,
    pub games: Vec<GameOutcome>,
    #[serde(default)]
    pub k_factor: EcfKFactor,
}

impl EcfRequest {
    pub fn new(current_rating: i32, games: Vec<GameOutcome>) -> Self {
        EcfRequest {
            current_rating,
            games,
            k_factor: EcfKFactor::default(),
        }
    }

    pub fn with_k_factor(mut self, k_factor: EcfKFactor) -> Self {
        self.k_factor = k_factor;
        self
    }
}

/// Rate a single game.
pub fn rate_game(rating: i32, game: &GameOutcome, k: EcfKFactor) -> EcfResult {
    let k = f64::from(k.value());
    let expected = expected_score(rating, game.opponent_rating, ECF_SCALE);
    let actual = game.score();
    let base_change = k * (actual - expected);
    let change = rounding::nearest(base_change);

    EcfResult {
        summary: RatingChange {
            current_rating: rating,
            new_rating: rating + change,
            rating_change: change,
            base_rating_change: base_change,
            expected_score: rounding::two_places(expected),
            actual_score: actual,
            total_games: 1,
            k_factor: k,
            is_provisional: false,
        },
    }
}

/// Rate each game in turn, feeding every new rating into the next game.
pub fn rate_session(rating: i32, games: &[GameOutcome], k: EcfKFactor) -> Vec<EcfResult> {
    let mut current = rating;
    games
        .iter()
        .map(|game| {
            let step = rate_game(current, game, k);
            current = step.summary.new_rating;
            step
        })
        .collect()
}

/// The ECF rating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ecf;

impl RatingSystem for Ecf {
    type Request = EcfRequest;
    type Output = EcfResult;

    fn federation(&self) -> Federation {
        Federation::Ecf
    }

    /// Chains the session and aggregates the per-game steps.
    fn calculate(&self, request: &EcfRequest) -> EcfResult {
        let steps = rate_session(request.current_rating, &request.games, request.k_factor);

        let new_rating = steps
            .last()
            .map_or(request.current_rating, |step| step.summary.new_rating);
        let base_change: f64 = steps.iter().map(|s| s.summary.base_rating_change).sum();
        // Recomputed at full precision; the per-step value is rounded for display.
        let expected: f64 = steps
            .iter()
            .zip(&request.games)
            .map(|(step, game)| {
                expected_score(step.summary.current_rating, game.opponent_rating, ECF_SCALE)
            })
            .sum();
        let actual: f64 = steps.iter().map(|step| step.summary.actual_score).sum();

        EcfResult {
            summary: RatingChange {
                current_rating: request.current_rating,
                new_rating,
                rating_change: new_rating - request.current_rating,
                base_rating_change: base_change,
                expected_score: rounding::two_places(expected),
                actual_score: actual,
                total_games: steps.len() as u32,
                k_factor: f64::from(request.k_factor.value()),
                is_provisional: false,
            },
        }
    }
}
