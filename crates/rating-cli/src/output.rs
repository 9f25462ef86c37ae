//! Rendering of calculation results as text or JSON.

use rating_engine::{PerformanceRatings, RatingChange, RatingResult};
use serde::{Deserialize, Serialize};

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Expected score against a single opponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedReport {
    pub rating: i32,
    pub opponent_rating: i32,
    pub scale: f64,
    pub expected_score: f64,
}

/// Performance estimates from an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub average_opponent: i32,
    pub score: f64,
    pub games: u32,
    #[serde(flatten)]
    pub estimates: PerformanceRatings,
}

/// Renders `value` in the requested format, using `text` for the text form.
pub fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => serde_json::to_string_pretty(value),
    }
}

fn signed(value: i32) -> String {
    format!("{:+}", value)
}

fn estimate(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn summary_lines(lines: &mut Vec<String>, summary: &RatingChange) {
    let games = summary.total_games;
    lines.push(format!("  Current rating      {}", summary.current_rating));
    lines.push(format!(
        "  New rating          {} ({})",
        summary.new_rating,
        signed(summary.rating_change)
    ));
    lines.push(format!(
        "  Expected score      {:.2} / {}",
        summary.expected_score, games
    ));
    lines.push(format!("  Actual score        {} / {}", summary.actual_score, games));
    lines.push(format!("  K-factor            {:.2}", summary.k_factor));
    lines.push(format!("  Base change         {:+.2}", summary.base_rating_change));
}

/// Renders a rating result as a human-readable summary.
pub fn rating_text(result: &RatingResult) -> String {
    let mut lines = vec![format!("{} rating change", result.federation())];

    match result {
        RatingResult::Uscf(r) => {
            if let Some(initial) = r.initial_rating {
                lines.push(format!("  Initial rating      {} (assigned)", initial));
            }
            summary_lines(&mut lines, &r.summary);
            lines.push(format!("  Bonus               {:.2}", r.bonus));
            lines.push(format!(
                "  Rating floor        {} (without floor: {})",
                r.rating_floor, r.rating_without_floor
            ));
            lines.push(format!(
                "  Performance         FIDE {} / linear {} / algorithm-400 {}",
                estimate(r.performance_rating.fide_method),
                estimate(r.performance_rating.linear),
                estimate(r.performance_rating.algorithm_400)
            ));
            if r.summary.is_provisional {
                lines.push("  Provisional rating".to_string());
            }
        }
        RatingResult::Fide(r) => {
            if r.summary.is_provisional {
                lines.push(
                    "  Provisional: at least 5 games are needed for a FIDE rating".to_string(),
                );
                lines.push(format!("  Games this session  {}", r.summary.total_games));
                lines.push(format!("  Actual score        {}", r.summary.actual_score));
            } else {
                summary_lines(&mut lines, &r.summary);
                lines.push(format!("  Dynamic K-factor    {}", r.dynamic_k_factor));
            }
            lines.push(format!("  Performance         {}", estimate(r.performance_rating)));
            lines.push(format!("  Classification      {}", r.classification));
        }
        RatingResult::Ecf(r) => summary_lines(&mut lines, &r.summary),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders an expected-score report.
pub fn expected_text(report: &ExpectedReport) -> String {
    format!(
        "Expected score of {} against {}: {:.3}\n",
        report.rating, report.opponent_rating, report.expected_score
    )
}

/// Renders a performance report.
pub fn performance_text(report: &PerformanceReport) -> String {
    format!(
        "Performance over {} games ({} points, average opponent {})\n  \
         FIDE method         {}\n  \
         Linear              {}\n  \
         Algorithm-400       {}\n",
        report.games,
        report.score,
        report.average_opponent,
        estimate(report.estimates.fide_method),
        estimate(report.estimates.linear),
        estimate(report.estimates.algorithm_400)
    )
}
