//! Core types for chess rating calculations.
//!
//! This crate provides the fundamental types shared by the rating engine and
//! its callers:
//! - [`GameResult`] and [`GameOutcome`] for a single played game
//! - [`ScoreTally`] for summarising a session's results
//! - [`Federation`] for the supported rating bodies
//! - [`PlayerContext`] and [`UscfProfile`] for the player's state before a session
//! - Input validation for the calling layer (see [`validate`])

mod federation;
mod outcome;
mod player;
mod result;
mod tally;
pub mod validate;

pub use federation::{Federation, FederationParseError};
pub use outcome::{GameOutcome, OpponentKey, OutcomeParseError};
pub use player::{PlayerContext, UscfProfile};
pub use result::{GameResult, ResultParseError};
pub use tally::ScoreTally;
pub use validate::InputError;
