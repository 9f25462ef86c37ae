//! Rating-change calculators for FIDE, US Chess and the ECF.
//!
//! This crate provides:
//! - [`expected`] - Logistic and provisional expected-score formulas
//! - [`Uscf`], [`Fide`], [`Ecf`] - The three federations' calculations
//! - [`performance`] - Performance-rating estimators
//! - [`RatingSystem`] - Trait shared by the federation calculators
//! - [`RatingResult`] - Federation-tagged calculation results
//!
//! # Architecture
//!
//! Every calculation is a pure function of its request. The engine assumes
//! validated input (see [`rating_core::validate`]) and always returns a
//! result; a FIDE player with fewer than five games gets a provisional
//! result with a new rating of 0 rather than an error.
//!
//! # Example
//!
//! ```
//! use rating_core::{GameOutcome, PlayerContext};
//! use rating_engine::{RatingSystem, Uscf, UscfRequest};
//!
//! let request = UscfRequest::new(
//!     PlayerContext::new(1400, 10),
//!     vec![
//!         GameOutcome::win(1450),
//!         GameOutcome::draw(1500),
//!         GameOutcome::loss(1380),
//!     ],
//! );
//! let result = Uscf.calculate(&request);
//! assert_eq!(result.summary.k_factor, 32.0);
//! assert_eq!(result.summary.new_rating, 1406);
//! ```

pub mod ecf;
pub mod expected;
pub mod fide;
pub mod performance;
mod result;
pub mod rounding;
mod system;
pub mod uscf;

pub use ecf::{Ecf, EcfKFactor, EcfRequest};
pub use fide::{Classification, Fide, FideRequest};
pub use performance::{PerformanceRatings, SessionScore};
pub use result::{EcfResult, FideResult, RatingChange, RatingResult, UscfResult};
pub use system::RatingSystem;
pub use uscf::{Uscf, UscfRequest};
