//! Calculation results.

use crate::fide::Classification;
use crate::performance::PerformanceRatings;
use rating_core::Federation;
use serde::Serialize;

/// Fields common to every federation's result.
///
/// `expected_score` and `k_factor` are rounded to two decimal places for
/// display; the rating change was computed from the unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub current_rating: i32,
    pub new_rating: i32,
    /// Rounded, signed change.
    pub rating_change: i32,
    /// Change before any bonus and before rounding.
    pub base_rating_change: f64,
    pub expected_score: f64,
    pub actual_score: f64,
    pub total_games: u32,
    pub k_factor: f64,
    pub is_provisional: bool,
}

/// US Chess result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UscfResult {
    #[serde(flatten)]
    pub summary: RatingChange,
    /// Bonus points added to the base change.
    pub bonus: f64,
    pub performance_rating: PerformanceRatings,
    /// Rating before the floor was applied.
    pub rating_without_floor: i32,
    pub rating_floor: i32,
    /// Starting rating assigned to an unrated player, if one was assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_rating: Option<i32>,
}

/// FIDE result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FideResult {
    #[serde(flatten)]
    pub summary: RatingChange,
    pub performance_rating: Option<i32>,
    pub classification: Classification,
    /// K-factor after the 700-point cap, reported for display only.
    pub dynamic_k_factor: u32,
}

/// ECF result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcfResult {
    #[serde(flatten)]
    pub summary: RatingChange,
}

/// A calculation result tagged with the federation that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "federation", rename_all = "lowercase")]
pub enum RatingResult {
    Uscf(UscfResult),
    Fide(FideResult),
    Ecf(EcfResult),
}

impl RatingResult {
    pub fn federation(&self) -> Federation {
        match self {
            RatingResult::Uscf(_) => Federation::Uscf,
            RatingResult::Fide(_) => Federation::Fide,
            RatingResult::Ecf(_) => Federation::Ecf,
        }
    }

    /// Returns the fields common to every federation.
    pub fn summary(&self) -> &RatingChange {
        match self {
            RatingResult::Uscf(r) => &r.summary,
            RatingResult::Fide(r) => &r.summary,
            RatingResult::Ecf(r) => &r.summary,
        }
    }
}

impl From<UscfResult> for RatingResult {
    fn from(result: UscfResult) -> Self {
        RatingResult::Uscf(result)
    }
}

impl From<FideResult> for RatingResult {
    fn from(result: FideResult) -> Self {
        RatingResult::Fide(result)
    }
}

impl From<EcfResult> for RatingResult {
    fn from(result: EcfResult) -> Self {
        RatingResult::Ecf(result)
    }
}
