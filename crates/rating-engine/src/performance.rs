//! Performance-rating estimators.
//!
//! Three independent approximations of the rating level a session's results
//! correspond to. They are informational and never feed back into a new rating.

use rating_core::GameOutcome;
use serde::Serialize;

/// Points added to or subtracted from the average for a perfect or zero score.
const PERFECT_SCORE_SPREAD: f64 = 800.0;

/// The aggregate a performance rating is estimated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionScore {
    /// Sum of the opponents' ratings.
    pub opponent_total: i64,
    /// Points scored.
    pub score: f64,
    /// Number of games.
    pub games: u32,
}

impl SessionScore {
    /// Builds the aggregate from a list of games.
    pub fn from_games(games: &[GameOutcome]) -> Self {
        SessionScore {
            opponent_total: games.iter().map(|g| i64::from(g.opponent_rating)).sum(),
            score: games.iter().map(GameOutcome::score).sum(),
            games: games.len() as u32,
        }
    }

    /// Builds the aggregate from an average opponent rating and a total score.
    pub fn from_average(average_opponent: i32, score: f64, games: u32) -> Self {
        SessionScore {
            opponent_total: i64::from(average_opponent) * i64::from(games),
            score,
            games,
        }
    }

    /// Average opponent rating, or `None` for an empty session.
    pub fn average_opponent(&self) -> Option<f64> {
        (self.games > 0).then(|| self.opponent_total as f64 / f64::from(self.games))
    }

    /// Score as a fraction of the games played.
    pub fn fraction(&self) -> Option<f64> {
        (self.games > 0).then(|| self.score / f64::from(self.games))
    }
}

/// All three estimates, as reported for US Chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRatings {
    pub fide_method: Option<i32>,
    pub linear: Option<i32>,
    pub algorithm_400: Option<i32>,
}

impl PerformanceRatings {
    pub fn estimate(session: &SessionScore) -> Self {
        PerformanceRatings {
            fide_method: fide_method(session),
            linear: linear(session),
            algorithm_400: algorithm_400(session),
        }
    }
}

/// Average opponent rating plus `400 × log10(S / (1 − S))`.
///
/// A perfect score gives the average plus 800 and a zero score the average
/// minus 800, so the logarithm is only taken strictly inside (0, 1).
pub fn fide_method(session: &SessionScore) -> Option<i32> {
    let average = session.average_opponent()?;
    let fraction = session.fraction()?;
    let difference = if fraction >= 1.0 {
        PERFECT_SCORE_SPREAD
    } else if fraction <= 0.0 {
        -PERFECT_SCORE_SPREAD
    } else {
        400.0 * (fraction / (1.0 - fraction)).log10()
    };
    Some((average + difference).round() as i32)
}

/// Average opponent rating plus eight points per percentage point above 50%.
pub fn linear(session: &SessionScore) -> Option<i32> {
    let average = session.average_opponent()?;
    let percentage = session.fraction()? * 100.0;
    Some((average + 8.0 * (percentage - 50.0)).round() as i32)
}

/// `(Σ opponent ratings + 400 × (wins − losses)) / games`.
///
/// Wins minus losses equals `2 × score − games`, so draws need not be counted.
pub fn algorithm_400(session: &SessionScore) -> Option<i32> {
    if session.games == 0 {
        return None;
    }
    let games = f64::from(session.games);
    let margin = 2.0 * session.score - games;
    Some(((session.opponent_total as f64 + 400.0 * margin) / games).round() as i32)
}
