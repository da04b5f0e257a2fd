//! Conversion helpers between [`Outcome`] and the core `Result`/`Option`
//! types.
//!
//! These adapters make it straightforward to adopt the railway
//! incrementally: legacy results move onto the track at the boundary and
//! flatten back into core types when interacting with external APIs.
//!
//! # Examples
//!
//! ```
//! use railway::convert::*;
//!
//! let outcome = result_to_outcome("7".parse::<i32>());
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(outcome);
//! assert_eq!(back, Ok(Some(7)));
//! ```

use crate::types::Outcome;

/// Converts a core `Result` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use railway::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("failed"));
/// assert_eq!(outcome.try_error().unwrap(), &"failed");
/// ```
#[inline]
pub fn result_to_outcome<S, F>(result: Result<S, F>) -> Outcome<S, F> {
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] back into a core `Result`.
///
/// The success side keeps its explicit `Option` so success-without-value
/// survives the conversion.
///
/// # Examples
///
/// ```
/// use railway::convert::outcome_to_result;
/// use railway::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<i32, &str>::without_value()), Ok(None));
/// ```
#[inline]
pub fn outcome_to_result<S, F>(outcome: Outcome<S, F>) -> Result<Option<S>, F> {
    outcome.into_result()
}

/// Converts a possibly-absent value into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use railway::convert::option_to_outcome;
///
/// let outcome = option_to_outcome(Some(1), "missing");
/// assert!(outcome.is_success());
/// ```
#[inline]
pub fn option_to_outcome<S, F>(value: Option<S>, error: F) -> Outcome<S, F> {
    Outcome::from_option(value, error)
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        Outcome::from_result(result)
    }
}

impl<S, F> From<Outcome<S, F>> for Result<Option<S>, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}
