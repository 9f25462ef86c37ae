//! Turning validated command-line input into engine requests.
//!
//! Every builder runs the checks from [`rating_core::validate`] before the
//! engine sees the values, so out-of-range input never reaches a formula.

use rating_core::{validate, GameOutcome, InputError, PlayerContext, UscfProfile};
use rating_engine::{EcfKFactor, EcfRequest, FideRequest, SessionScore, UscfRequest};

/// Builds a US Chess request.
pub fn uscf_request(
    player: PlayerContext,
    profile: UscfProfile,
    games: Vec<GameOutcome>,
    apply_bonus: bool,
) -> Result<UscfRequest, InputError> {
    validate::player(&player)?;
    validate::uscf_profile(&profile)?;
    validate::games(&games)?;
    Ok(UscfRequest::new(player, games)
        .with_profile(profile)
        .with_bonus(apply_bonus))
}

/// Builds a FIDE request.
pub fn fide_request(
    player: PlayerContext,
    games: Vec<GameOutcome>,
) -> Result<FideRequest, InputError> {
    validate::player(&player)?;
    validate::games(&games)?;
    Ok(FideRequest::new(player, games))
}

/// Builds an ECF request.
pub fn ecf_request(
    current_rating: i32,
    games: Vec<GameOutcome>,
    k_factor: u32,
) -> Result<EcfRequest, InputError> {
    validate::rating("current rating", current_rating)?;
    validate::games(&games)?;
    let k_factor = EcfKFactor::try_from(k_factor)?;
    Ok(EcfRequest::new(current_rating, games).with_k_factor(k_factor))
}

/// Checks the two ratings and the scale of an expected-score query.
pub fn expected_query(rating: i32, opponent: i32, scale: f64) -> Result<(), InputError> {
    validate::rating("rating", rating)?;
    validate::rating("opponent rating", opponent)?;
    validate::scale(scale)
}

/// Builds an aggregate for the performance estimators.
pub fn session_score(
    average_opponent: i32,
    score: f64,
    games: u32,
) -> Result<SessionScore, InputError> {
    validate::rating("average opponent rating", average_opponent)?;
    validate::score(score, games)?;
    Ok(SessionScore::from_average(average_opponent, score, games))
}
