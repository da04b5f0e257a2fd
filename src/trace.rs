//! Tracing integration for the railway.
//!
//! This module hooks [`Outcome`] into the `tracing` ecosystem so that both
//! rails can be observed without breaking a combinator chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! railway = { version = "0.2", features = ["tracing"] }
//! ```

use core::fmt::Display;

use crate::types::Outcome;

/// Extension trait emitting `tracing` events for an outcome.
///
/// `traced` observes both rails in passing, like
/// [`on_both`](Outcome::on_both): a failure emits an error-level event
/// carrying the rendered error, a success emits a debug-level event. The
/// outcome itself flows on unchanged.
///
/// # Examples
///
/// ```
/// use railway::trace::TracedOutcome;
/// use railway::Outcome;
///
/// let outcome = Outcome::<i32, &str>::with_error("user not found")
///     .traced("find_user");
/// assert!(outcome.is_failure());
/// ```
pub trait TracedOutcome: Sized {
    /// Emits a tracing event describing the outcome of the named
    /// operation, returning the outcome unchanged.
    fn traced(self, operation: &str) -> Self;
}

impl<S, F: Display> TracedOutcome for Outcome<S, F> {
    fn traced(self, operation: &str) -> Self {
        match &self {
            Outcome::Success(Some(_)) => {
                tracing::debug!(operation, outcome = "success");
            }
            Outcome::Success(None) => {
                tracing::debug!(operation, outcome = "success without value");
            }
            Outcome::Failure(error) => {
                tracing::error!(operation, error = %error, "operation failed");
            }
        }
        self
    }
}
