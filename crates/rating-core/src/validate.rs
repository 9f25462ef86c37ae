//! Input validation for the calling layer.
//!
//! The rating engine assumes validated numeric input. Callers (the CLI and
//! the browser bindings) run these checks first and surface the error
//! message to the user.

use crate::{GameOutcome, PlayerContext, UscfProfile};
use thiserror::Error;

/// Highest rating accepted for a player or opponent.
pub const MAX_RATING: i32 = 4000;

/// Highest prior game count accepted.
pub const MAX_PRIOR_GAMES: u32 = 100_000;

/// Highest age accepted.
pub const MAX_AGE: u32 = 120;

/// Errors reported to the user when input is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be between 0 and {max}, got {value}", max = MAX_RATING)]
    RatingOutOfRange { field: &'static str, value: i32 },

    #[error("prior game count must be at most {max}, got {0}", max = MAX_PRIOR_GAMES)]
    PriorGamesOutOfRange(u32),

    #[error("at least one game is required")]
    NoGames,

    #[error("game {index}: opponent rating must be between 0 and {max}, got {value}", max = MAX_RATING)]
    OpponentRatingOutOfRange { index: usize, value: i32 },

    #[error("score must be between 0 and {games}, got {score}")]
    ScoreOutOfRange { score: f64, games: u32 },

    #[error("score must be a multiple of 0.5, got {0}")]
    ScoreNotHalfPoint(f64),

    #[error("age must be between 0 and {max}, got {0}", max = MAX_AGE)]
    AgeOutOfRange(u32),

    #[error("ECF K-factor must be 40 or 20, got {0}")]
    InvalidEcfKFactor(u32),

    #[error("scale must be 400 or 50, got {0}")]
    InvalidScale(f64),
}

/// Checks that a rating lies in `0..=MAX_RATING`.
pub fn rating(field: &'static str, value: i32) -> Result<(), InputError> {
    if (0..=MAX_RATING).contains(&value) {
        Ok(())
    } else {
        Err(InputError::RatingOutOfRange { field, value })
    }
}

/// Checks the player's current rating and prior game count.
pub fn player(context: &PlayerContext) -> Result<(), InputError> {
    rating("current rating", context.current_rating)?;
    if context.prior_game_count > MAX_PRIOR_GAMES {
        return Err(InputError::PriorGamesOutOfRange(context.prior_game_count));
    }
    Ok(())
}

/// Checks that there is at least one game and every opponent rating is in range.
///
/// Reported game indices are 1-based.
pub fn games(games: &[GameOutcome]) -> Result<(), InputError> {
    if games.is_empty() {
        return Err(InputError::NoGames);
    }
    for (i, game) in games.iter().enumerate() {
        if !(0..=MAX_RATING).contains(&game.opponent_rating) {
            return Err(InputError::OpponentRatingOutOfRange {
                index: i + 1,
                value: game.opponent_rating,
            });
        }
    }
    Ok(())
}

/// Checks that an aggregate score lies in `[0, games]` and is a whole or half point.
pub fn score(score: f64, games: u32) -> Result<(), InputError> {
    if games == 0 {
        return Err(InputError::NoGames);
    }
    if !score.is_finite() || score < 0.0 || score > f64::from(games) {
        return Err(InputError::ScoreOutOfRange { score, games });
    }
    if (score * 2.0).fract() != 0.0 {
        return Err(InputError::ScoreNotHalfPoint(score));
    }
    Ok(())
}

/// Checks the optional USCF inputs.
pub fn uscf_profile(profile: &UscfProfile) -> Result<(), InputError> {
    if let Some(highest) = profile.highest_achieved_rating {
        rating("highest achieved rating", highest)?;
    }
    if let Some(fide) = profile.fide_rating {
        rating("FIDE rating", fide)?;
    }
    if let Some(cfc) = profile.cfc_rating {
        rating("CFC rating", cfc)?;
    }
    if let Some(age) = profile.age {
        if age > MAX_AGE {
            return Err(InputError::AgeOutOfRange(age));
        }
    }
    Ok(())
}

/// Checks that an ECF K-factor is one of the two published values.
pub fn ecf_k_factor(k: u32) -> Result<(), InputError> {
    match k {
        20 | 40 => Ok(()),
        other => Err(InputError::InvalidEcfKFactor(other)),
    }
}

/// Checks that an expected-score scale is the standard 400 or the ECF 50.
pub fn scale(scale: f64) -> Result<(), InputError> {
    if scale == 400.0 || scale == 50.0 {
        Ok(())
    } else {
        Err(InputError::InvalidScale(scale))
    }
}
