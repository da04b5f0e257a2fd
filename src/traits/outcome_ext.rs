//! Extension traits for moving core `Result` and `Option` values onto the
//! railway without verbose constructor calls.
//!
//! # Examples
//!
//! ```
//! use railway::traits::{OptionExt, ResultExt};
//! use railway::Outcome;
//!
//! fn port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into_outcome()
//! }
//!
//! assert!(port("8080").is_success());
//! assert!(port("eighty").is_failure());
//! ```

use crate::types::Outcome;

/// Extension trait lifting a core `Result` into an [`Outcome`].
pub trait ResultExt<S, F> {
    /// Converts `Ok` into a success with value and `Err` into a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::traits::ResultExt;
    ///
    /// let outcome = Ok::<_, &str>(5).into_outcome();
    /// assert_eq!(outcome.try_value().unwrap(), &5);
    /// ```
    fn into_outcome(self) -> Outcome<S, F>;
}

impl<S, F> ResultExt<S, F> for Result<S, F> {
    #[inline]
    fn into_outcome(self) -> Outcome<S, F> {
        Outcome::from_result(self)
    }
}

/// Extension trait turning a possibly-absent value into an [`Outcome`].
///
/// This is the ergonomic spelling of [`Outcome::from_option`]: the absent
/// case becomes a failure with the supplied error.
pub trait OptionExt<S> {
    /// Converts `Some` into a success with value and `None` into a failure
    /// with the given error.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::traits::OptionExt;
    ///
    /// let outcome = Some("alice").outcome_or("username missing");
    /// assert!(outcome.is_success());
    ///
    /// let outcome = None::<&str>.outcome_or("username missing");
    /// assert_eq!(outcome.try_error().unwrap(), &"username missing");
    /// ```
    fn outcome_or<F>(self, error: F) -> Outcome<S, F>;
}

impl<S> OptionExt<S> for Option<S> {
    #[inline]
    fn outcome_or<F>(self, error: F) -> Outcome<S, F> {
        Outcome::from_option(self, error)
    }
}
