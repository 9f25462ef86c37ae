//! Expected-score formulas.

use rating_core::GameOutcome;

/// Logistic scale divisor used by FIDE and US Chess.
pub const STANDARD_SCALE: f64 = 400.0;

/// Logistic scale divisor used by the ECF.
pub const ECF_SCALE: f64 = 50.0;

/// Rating gap beyond which the provisional formula saturates.
const PROVISIONAL_SPREAD: i32 = 400;

/// Calculate the expected score of a player rated `rating` against `opponent`.
///
/// Uses the logistic Elo curve `1 / (1 + 10^((opponent - rating) / scale))`.
pub fn expected_score(rating: i32, opponent: i32, scale: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(f64::from(opponent - rating) / scale))
}

/// Piecewise-linear expected score used for provisionally rated US Chess players.
///
/// An opponent 400 or more points weaker gives 1.0, one 400 or more points
/// stronger gives 0.0, and the gap in between is linear with slope 1/800.
pub fn provisional_expected_score(rating: i32, opponent: i32) -> f64 {
    let gap = opponent - rating;
    if gap <= -PROVISIONAL_SPREAD {
        1.0
    } else if gap >= PROVISIONAL_SPREAD {
        0.0
    } else {
        0.5 - f64::from(gap) / 800.0
    }
}

/// Sums a per-game expectation over a session, holding `rating` fixed for every game.
pub fn session_expected_score<F>(rating: i32, games: &[GameOutcome], expectation: F) -> f64
where
    F: Fn(i32, i32) -> f64,
{
    games
        .iter()
        .map(|game| expectation(rating, game.opponent_rating))
        .sum()
}
