//! WebAssembly bindings for the rating calculators.
//!
//! This crate exposes the rating engine to JavaScript. Requests and results
//! are plain objects with camelCase fields; invalid input is rejected with a
//! thrown error carrying a user-facing message.
//!
//! # Usage
//!
//! ```javascript
//! import init, { calculateUscf, EcfSession } from 'rating-wasm';
//!
//! await init();
//!
//! const result = calculateUscf({
//!   currentRating: 1400,
//!   priorGameCount: 10,
//!   games: [
//!     { opponentRating: 1450, result: 'win' },
//!     { opponentRating: 1500, result: 'draw' },
//!   ],
//! });
//! console.log(result.newRating);
//!
//! const session = new EcfSession(150, 40);
//! session.play(100, 'win');
//! console.log(session.rating());
//! ```

use rating_core::{validate, GameOutcome, GameResult, InputError};
use rating_engine::expected::{expected_score, STANDARD_SCALE};
use rating_engine::{
    ecf, Ecf, EcfKFactor, EcfRequest, Fide, FideRequest, RatingResult, RatingSystem, Uscf,
    UscfRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

// Flattened results serialize as maps, which must become plain objects rather than `Map`s.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Validates and rates a US Chess request.
pub fn rate_uscf(request: &UscfRequest) -> Result<RatingResult, InputError> {
    validate::player(&request.player)?;
    validate::uscf_profile(&request.profile)?;
    validate::games(&request.games)?;
    Ok(Uscf.rate(request))
}

/// Validates and rates a FIDE request.
pub fn rate_fide(request: &FideRequest) -> Result<RatingResult, InputError> {
    validate::player(&request.player)?;
    validate::games(&request.games)?;
    Ok(Fide.rate(request))
}

/// Validates and rates an ECF request.
pub fn rate_ecf(request: &EcfRequest) -> Result<RatingResult, InputError> {
    validate::rating("current rating", request.current_rating)?;
    validate::games(&request.games)?;
    Ok(Ecf.rate(request))
}

/// Calculates a US Chess rating change.
///
/// Throws if the input object is malformed or fails validation.
#[wasm_bindgen(js_name = calculateUscf)]
pub fn calculate_uscf(input: JsValue) -> Result<JsValue, JsError> {
    let request: UscfRequest = from_js(input)?;
    to_js(&rate_uscf(&request)?)
}

/// Calculates a FIDE rating change.
///
/// With fewer than five games in total the result is provisional and
/// `newRating` is 0.
#[wasm_bindgen(js_name = calculateFide)]
pub fn calculate_fide(input: JsValue) -> Result<JsValue, JsError> {
    let request: FideRequest = from_js(input)?;
    to_js(&rate_fide(&request)?)
}

/// Calculates an ECF rating change over a chained session.
#[wasm_bindgen(js_name = calculateEcf)]
pub fn calculate_ecf(input: JsValue) -> Result<JsValue, JsError> {
    let request: EcfRequest = from_js(input)?;
    to_js(&rate_ecf(&request)?)
}

/// Validates both ratings and the scale, then returns the expected score.
pub fn checked_expected_score(
    rating: i32,
    opponent: i32,
    scale: f64,
) -> Result<f64, InputError> {
    validate::rating("rating", rating)?;
    validate::rating("opponent rating", opponent)?;
    validate::scale(scale)?;
    Ok(expected_score(rating, opponent, scale))
}

/// Returns the expected score of `rating` against `opponent`.
///
/// `scale` defaults to 400; pass 50 for ECF ratings. Throws on out-of-range
/// ratings or any other scale.
#[wasm_bindgen(js_name = expectedScore)]
pub fn js_expected_score(
    rating: i32,
    opponent: i32,
    scale: Option<f64>,
) -> Result<f64, JsError> {
    let scale = scale.unwrap_or(STANDARD_SCALE);
    Ok(checked_expected_score(rating, opponent, scale)?)
}

/// An ECF rating updated one game at a time.
#[wasm_bindgen]
pub struct EcfSession {
    start: i32,
    rating: i32,
    k_factor: EcfKFactor,
    games: u32,
}

#[wasm_bindgen]
impl EcfSession {
    /// Starts a session from `rating` with K-factor 40 or 20.
    #[wasm_bindgen(constructor)]
    pub fn new(rating: i32, k_factor: u32) -> Result<EcfSession, JsError> {
        validate::rating("current rating", rating)?;
        Ok(EcfSession {
            start: rating,
            rating,
            k_factor: EcfKFactor::try_from(k_factor)?,
            games: 0,
        })
    }

    /// Rates one game and returns the rating change it produced.
    ///
    /// `result` accepts "win", "draw", "loss" or their short forms.
    pub fn play(&mut self, opponent_rating: i32, result: &str) -> Result<i32, JsError> {
        let result: GameResult = result.parse()?;
        validate::rating("opponent rating", opponent_rating)?;

        let game = GameOutcome::new(opponent_rating, result);
        let step = ecf::rate_game(self.rating, &game, self.k_factor);
        self.rating = step.summary.new_rating;
        self.games += 1;
        Ok(step.summary.rating_change)
    }

    /// Returns the current rating.
    pub fn rating(&self) -> i32 {
        self.rating
    }

    /// Returns the number of games rated so far.
    #[wasm_bindgen(js_name = gamesPlayed)]
    pub fn games_played(&self) -> u32 {
        self.games
    }

    /// Returns the change since the session started.
    #[wasm_bindgen(js_name = totalChange)]
    pub fn total_change(&self) -> i32 {
        self.rating - self.start
    }

    /// Restarts the session from the original rating.
    pub fn reset(&mut self) {
        self.rating = self.start;
        self.games = 0;
    }
}
