//! US Chess rating calculation.
//!
//! The session is rated with a fixed pre-event rating. Provisional players
//! (eight or fewer prior games) use a piecewise-linear expected score and a
//! K-factor that grows with experience; established players use the logistic
//! curve with a K-factor that shrinks as the rating rises. Bonus points,
//! away-from-zero rounding and the rating floor are applied in that order.

mod bonus;
mod floor;
mod initial;

pub use bonus::{bonus_points, is_eligible as bonus_eligible, BONUS_THRESHOLD};
pub use floor::{rating_floor, step_floor, LIFE_MASTER_FLOOR};
pub use initial::{initial_rating, DEFAULT_INITIAL_RATING};

use crate::expected::{
    expected_score as logistic_expected_score, provisional_expected_score, session_expected_score,
    STANDARD_SCALE,
};
use crate::performance::{PerformanceRatings, SessionScore};
use crate::{rounding, RatingChange, RatingSystem, UscfResult};
use rating_core::{Federation, GameOutcome, PlayerContext, ScoreTally, UscfProfile};
use serde::{Deserialize, Serialize};

/// Prior games at or below which a rating is provisional.
pub const PROVISIONAL_GAME_LIMIT: u32 = 8;

/// Prior games beyond this count are ignored when selecting the K-factor.
pub const EFFECTIVE_GAME_CAP: u32 = 50;

/// Inputs for a US Chess calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UscfRequest {
    #[serde(flatten)]
    pub player: PlayerContext,
    #[serde(flatten)]
    pub profile: UscfProfile,
    pub games: Vec<GameOutcome>,
    #[serde(default = "default_apply_bonus")]
    pub apply_bonus: bool,
}

fn default_apply_bonus() -> bool {
    true
}

impl UscfRequest {
    /// Creates a request with bonus points enabled and an empty profile.
    pub fn new(player: PlayerContext, games: Vec<GameOutcome>) -> Self {
        UscfRequest {
            player,
            profile: UscfProfile::default(),
            games,
            apply_bonus: true,
        }
    }

    pub fn with_profile(mut self, profile: UscfProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_bonus(mut self, apply_bonus: bool) -> Self {
        self.apply_bonus = apply_bonus;
        self
    }
}

/// Prior games counted towards the K-factor.
#[inline]
pub fn effective_games(prior_game_count: u32) -> u32 {
    prior_game_count.min(EFFECTIVE_GAME_CAP)
}

/// Returns true if a player with `prior_game_count` games is provisionally rated.
#[inline]
pub fn is_provisional(prior_game_count: u32) -> bool {
    effective_games(prior_game_count) <= PROVISIONAL_GAME_LIMIT
}

/// Select the K-factor for a player.
pub fn k_factor(rating: i32, prior_game_count: u32) -> f64 {
    let games = effective_games(prior_game_count);
    if games <= PROVISIONAL_GAME_LIMIT {
        32.0 * (4.0 + f64::from(games) / 2.0) / 6.0
    } else if rating > 2100 {
        16.0
    } else if rating > 1800 {
        24.0
    } else {
        32.0
    }
}

/// Expected score against one opponent, using the provisional formula when `provisional`.
pub fn expected_score(rating: i32, opponent: i32, provisional: bool) -> f64 {
    if provisional {
        provisional_expected_score(rating, opponent)
    } else {
        logistic_expected_score(rating, opponent, STANDARD_SCALE)
    }
}

/// The US Chess rating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uscf;

impl RatingSystem for Uscf {
    type Request = UscfRequest;
    type Output = UscfResult;

    fn federation(&self) -> Federation {
        Federation::Uscf
    }

    fn calculate(&self, request: &UscfRequest) -> UscfResult {
        let player = &request.player;
        let games = &request.games;

        let assigned = player
            .is_unrated()
            .then(|| initial_rating(&request.profile));
        let rating = assigned.unwrap_or(player.current_rating);

        let provisional = is_provisional(player.prior_game_count);
        let k = k_factor(rating, player.prior_game_count);

        let expected = session_expected_score(rating, games, |r, o| {
            expected_score(r, o, provisional)
        });
        let actual = ScoreTally::from_games(games).points();
        let base_change = k * (actual - expected);

        let bonus = if request.apply_bonus && bonus_eligible(games) {
            bonus_points(base_change, games.len())
        } else {
            0.0
        };

        let change = rounding::away_from_zero(base_change + bonus);
        let rating_without_floor = rating + change;
        let minimum = rating_floor(&request.profile);

        UscfResult {
            summary: RatingChange {
                current_rating: rating,
                new_rating: floor::apply_floor(rating_without_floor, minimum),
                rating_change: change,
                base_rating_change: base_change,
                expected_score: rounding::two_places(expected),
                actual_score: actual,
                total_games: games.len() as u32,
                k_factor: rounding::two_places(k),
                is_provisional: provisional,
            },
            bonus,
            performance_rating: PerformanceRatings::estimate(&SessionScore::from_games(games)),
            rating_without_floor,
            rating_floor: minimum,
            initial_rating: assigned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_games_capped_at_50() {
        assert_eq!(effective_games(10), 10);
        assert_eq!(effective_games(50), 50);
        assert_eq!(effective_games(300), 50);
    }

    #[test]
    fn provisional_up_to_eight_games() {
        assert!(is_provisional(0));
        assert!(is_provisional(8));
        assert!(!is_provisional(9));
    }

    #[test]
    fn provisional_k_factor_grows_with_games() {
        assert!((k_factor(1500, 0) - 21.333_333).abs() < 1e-5);
        assert!((k_factor(1500, 4) - 32.0).abs() < 1e-12);
        assert!((k_factor(1500, 8) - 42.666_666).abs() < 1e-5);
    }

    #[test]
    fn established_k_factor_by_rating() {
        assert_eq!(k_factor(1400, 10), 32.0);
        assert_eq!(k_factor(1800, 10), 32.0);
        assert_eq!(k_factor(1801, 10), 24.0);
        assert_eq!(k_factor(2100, 10), 24.0);
        assert_eq!(k_factor(2101, 10), 16.0);
    }

    #[test]
    fn expected_score_switches_formula() {
        assert_eq!(expected_score(1500, 2000, true), 0.0);
        assert!(expected_score(1500, 2000, false) > 0.0);
    }

    #[test]
    fn request_defaults_bonus_on() {
        let request: UscfRequest = serde_json::from_str(
            r#"{"currentRating":1400,"priorGameCount":10,"games":[{"opponentRating":1450,"result":"win"}]}"#,
        )
        .unwrap();
        assert!(request.apply_bonus);
        assert_eq!(request.player, PlayerContext::new(1400, 10));
        assert_eq!(request.profile, UscfProfile::default());
    }

    #[test]
    fn request_reads_flattened_profile() {
        let request: UscfRequest = serde_json::from_str(
            r#"{"currentRating":1900,"priorGameCount":100,"games":[],
                "applyBonus":false,"highestAchievedRating":2050,"age":70,"isLifeMaster":true}"#,
        )
        .unwrap();
        assert!(!request.apply_bonus);
        assert_eq!(request.profile.highest_achieved_rating, Some(2050));
        assert_eq!(request.profile.age, Some(70));
        assert!(request.profile.is_life_master);
    }
}
