//! FIDE rating calculation.

use crate::expected::{expected_score, session_expected_score, STANDARD_SCALE};
use crate::performance::{self, SessionScore};
use crate::{rounding, FideResult, RatingChange, RatingSystem};
use rating_core::{Federation, GameOutcome, PlayerContext, ScoreTally};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Total games below which no rating is published.
pub const MIN_RATED_GAMES: u32 = 5;

/// Total games from which the established K-factors apply.
pub const ESTABLISHED_GAMES: u32 = 30;

/// Rating from which an established player's K-factor drops to 10.
pub const ELITE_RATING: i32 = 2400;

/// Cap on `K × games` for the displayed dynamic K-factor.
pub const DYNAMIC_K_CAP: u32 = 700;

/// Inputs for a FIDE calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FideRequest {
    #[serde(flatten)]
    pub player: PlayerContext,
    pub games: Vec<GameOutcome>,
}

impl FideRequest {
    pub fn new(player: PlayerContext, games: Vec<GameOutcome>) -> Self {
        FideRequest { player, games }
    }

    /// Prior games plus the games in this session.
    pub fn total_games(&self) -> u32 {
        let session = u32::try_from(self.games.len()).unwrap_or(u32::MAX);
        self.player.prior_game_count.saturating_add(session)
    }
}

/// Skill tier of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Classification {
    Novice,
    #[serde(rename = "Class D")]
    ClassD,
    #[serde(rename = "Class C")]
    ClassC,
    #[serde(rename = "Class B")]
    ClassB,
    #[serde(rename = "Class A")]
    ClassA,
    Expert,
    #[serde(rename = "Candidate Master")]
    CandidateMaster,
    #[serde(rename = "FIDE Master")]
    FideMaster,
    #[serde(rename = "International Master")]
    InternationalMaster,
    Grandmaster,
    #[serde(rename = "Super Grandmaster")]
    SuperGrandmaster,
}

impl Classification {
    /// (minimum rating, tier), highest first.
    const TIERS: [(i32, Classification); 10] = [
        (2700, Classification::SuperGrandmaster),
        (2500, Classification::Grandmaster),
        (2400, Classification::InternationalMaster),
        (2300, Classification::FideMaster),
        (2200, Classification::CandidateMaster),
        (2000, Classification::Expert),
        (1800, Classification::ClassA),
        (1600, Classification::ClassB),
        (1400, Classification::ClassC),
        (1200, Classification::ClassD),
    ];

    /// Returns the tier a rating falls in.
    pub fn from_rating(rating: i32) -> Self {
        Self::TIERS
            .iter()
            .find(|(minimum, _)| rating >= *minimum)
            .map_or(Classification::Novice, |(_, tier)| *tier)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Classification::Novice => "Novice",
            Classification::ClassD => "Class D",
            Classification::ClassC => "Class C",
            Classification::ClassB => "Class B",
            Classification::ClassA => "Class A",
            Classification::Expert => "Expert",
            Classification::CandidateMaster => "Candidate Master",
            Classification::FideMaster => "FIDE Master",
            Classification::InternationalMaster => "International Master",
            Classification::Grandmaster => "Grandmaster",
            Classification::SuperGrandmaster => "Super Grandmaster",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Select the K-factor, or `None` while fewer than five games have been played.
pub fn k_factor(rating: i32, total_games: u32) -> Option<u32> {
    if total_games < MIN_RATED_GAMES {
        None
    } else if total_games < ESTABLISHED_GAMES {
        Some(40)
    } else if rating >= ELITE_RATING {
        Some(10)
    } else {
        Some(20)
    }
}

/// K-factor reduced so that `K × total_games` does not exceed 700.
///
/// Reported for display; the rating change always uses the unreduced K.
pub fn dynamic_k_factor(k: u32, total_games: u32) -> u32 {
    if k.saturating_mul(total_games) > DYNAMIC_K_CAP {
        DYNAMIC_K_CAP / total_games
    } else {
        k
    }
}

/// The FIDE rating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fide;

impl RatingSystem for Fide {
    type Request = FideRequest;
    type Output = FideResult;

    fn federation(&self) -> Federation {
        Federation::Fide
    }

    fn calculate(&self, request: &FideRequest) -> FideResult {
        let rating = request.player.current_rating;
        let games = &request.games;
        let total_games = request.total_games();

        let expected = session_expected_score(rating, games, |r, o| {
            expected_score(r, o, STANDARD_SCALE)
        });
        let actual = ScoreTally::from_games(games).points();
        let performance_rating = performance::fide_method(&SessionScore::from_games(games));

        let Some(k) = k_factor(rating, total_games) else {
            return FideResult {
                summary: RatingChange {
                    current_rating: rating,
                    new_rating: 0,
                    rating_change: 0,
                    base_rating_change: 0.0,
                    expected_score: rounding::two_places(expected),
                    actual_score: actual,
                    total_games: games.len() as u32,
                    k_factor: 0.0,
                    is_provisional: true,
                },
                performance_rating,
                classification: Classification::from_rating(performance_rating.unwrap_or(0)),
                dynamic_k_factor: 0,
            };
        };

        let base_change = f64::from(k) * (actual - expected);
        let change = rounding::nearest(base_change);
        let new_rating = rating + change;

        FideResult {
            summary: RatingChange {
                current_rating: rating,
                new_rating,
                rating_change: change,
                base_rating_change: base_change,
                expected_score: rounding::two_places(expected),
                actual_score: actual,
                total_games: games.len() as u32,
                k_factor: f64::from(k),
                is_provisional: false,
            },
            performance_rating,
            classification: Classification::from_rating(new_rating),
            dynamic_k_factor: dynamic_k_factor(k, total_games),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_factor_by_experience_and_rating() {
        assert_eq!(k_factor(1500, 4), None);
        assert_eq!(k_factor(1500, 5), Some(40));
        assert_eq!(k_factor(2500, 29), Some(40));
        assert_eq!(k_factor(2399, 30), Some(20));
        assert_eq!(k_factor(2400, 30), Some(10));
    }

    #[test]
    fn dynamic_k_factor_caps_product() {
        assert_eq!(dynamic_k_factor(40, 10), 40);
        assert_eq!(dynamic_k_factor(40, 17), 40);
        assert_eq!(dynamic_k_factor(40, 18), 38);
        assert_eq!(dynamic_k_factor(20, 35), 20);
        assert_eq!(dynamic_k_factor(20, 36), 19);
        assert_eq!(dynamic_k_factor(10, 100), 7);
    }

    #[test]
    fn dynamic_k_factor_huge_game_count() {
        assert_eq!(dynamic_k_factor(20, 300_000_000), 0);
        assert_eq!(dynamic_k_factor(20, u32::MAX), 0);
    }

    #[test]
    fn classification_tiers() {
        assert_eq!(Classification::from_rating(2750), Classification::SuperGrandmaster);
        assert_eq!(Classification::from_rating(2500), Classification::Grandmaster);
        assert_eq!(Classification::from_rating(2450), Classification::InternationalMaster);
        assert_eq!(Classification::from_rating(2300), Classification::FideMaster);
        assert_eq!(Classification::from_rating(2250), Classification::CandidateMaster);
        assert_eq!(Classification::from_rating(2000), Classification::Expert);
        assert_eq!(Classification::from_rating(1999), Classification::ClassA);
        assert_eq!(Classification::from_rating(1650), Classification::ClassB);
        assert_eq!(Classification::from_rating(1400), Classification::ClassC);
        assert_eq!(Classification::from_rating(1200), Classification::ClassD);
        assert_eq!(Classification::from_rating(900), Classification::Novice);
    }

    #[test]
    fn classification_labels() {
        assert_eq!(Classification::FideMaster.to_string(), "FIDE Master");
        assert_eq!(
            serde_json::to_string(&Classification::ClassA).unwrap(),
            "\"Class A\""
        );
        assert_eq!(
            serde_json::to_string(&Classification::Expert).unwrap(),
            "\"Expert\""
        );
    }

    #[test]
    fn total_games_includes_session() {
        let request = FideRequest::new(
            PlayerContext::new(1600, 12),
            vec![GameOutcome::win(1500), GameOutcome::loss(1700)],
        );
        assert_eq!(request.total_games(), 14);
    }

    #[test]
    fn total_games_saturates() {
        let request = FideRequest::new(
            PlayerContext::new(1600, u32::MAX),
            vec![GameOutcome::win(1600)],
        );
        assert_eq!(request.total_games(), u32::MAX);
    }

    #[test]
    fn calculate_with_huge_prior_game_count() {
        for prior in [300_000_000, u32::MAX] {
            let result = Fide.calculate(&FideRequest::new(
                PlayerContext::new(1600, prior),
                vec![GameOutcome::win(1600)],
            ));
            assert_eq!(result.summary.k_factor, 20.0);
            assert_eq!(result.summary.new_rating, 1610);
            assert_eq!(result.dynamic_k_factor, 0);
        }
    }
}
