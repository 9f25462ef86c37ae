//! Rating system abstraction.
//!
//! Each federation is a unit type implementing [`RatingSystem`]. The request
//! and output types differ per federation; [`RatingSystem::rate`] erases them
//! into the tagged [`RatingResult`].

use crate::RatingResult;
use rating_core::Federation;

/// Trait for a federation's rating-change calculation.
///
/// # Example
///
/// ```
/// use rating_core::GameOutcome;
/// use rating_engine::{Ecf, EcfRequest, RatingSystem};
///
/// let request = EcfRequest::new(150, vec![GameOutcome::win(100)]);
/// let result = Ecf.calculate(&request);
/// assert_eq!(result.summary.new_rating, 154);
/// ```
pub trait RatingSystem {
    /// Inputs for one calculation.
    type Request;

    /// Federation-specific result.
    type Output: Into<RatingResult>;

    /// Returns the federation whose rules this system implements.
    fn federation(&self) -> Federation;

    /// Runs the calculation. Inputs are assumed to be validated.
    fn calculate(&self, request: &Self::Request) -> Self::Output;

    /// Runs the calculation and tags the result with its federation.
    fn rate(&self, request: &Self::Request) -> RatingResult {
        self.calculate(request).into()
    }
}
