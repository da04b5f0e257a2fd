//! Structural conditions raised by variant-incompatible access.
//!
//! These are not domain failures: they signal that a caller asked an
//! [`Outcome`](crate::Outcome) for something the active variant cannot
//! provide, or passed an absent value where one is mandatory. Generic
//! failure handling must never swallow them, so they travel as their own
//! types instead of the `F` payload.

use core::fmt;

use crate::types::alloc_type::Cow;

/// A caller contract violation: an accessor incompatible with the
/// outcome's active variant.
///
/// # Type Parameters
///
/// * `E` - The error payload carried when a failed outcome was asked for
///   its value (borrowed or owned depending on the accessor)
///
/// # Examples
///
/// ```
/// use railway::{Outcome, Violation};
///
/// let empty = Outcome::<i32, &str>::without_value();
/// assert_eq!(empty.try_value(), Err(Violation::EmptyHasNoValue));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation<E> {
    /// A failed outcome was asked for its value; carries the error.
    FailedHasNoValue(E),
    /// A successful outcome without a value was asked for its value.
    EmptyHasNoValue,
    /// A successful outcome was asked for its error.
    SuccessfulHasNoError,
}

impl<E> Violation<E> {
    /// Returns the error carried by a [`FailedHasNoValue`](Self::FailedHasNoValue)
    /// violation, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Violation;
    ///
    /// let violation = Violation::FailedHasNoValue("boom");
    /// assert_eq!(violation.into_inner_error(), Some("boom"));
    ///
    /// let violation = Violation::<&str>::EmptyHasNoValue;
    /// assert_eq!(violation.into_inner_error(), None);
    /// ```
    #[inline]
    pub fn into_inner_error(self) -> Option<E> {
        match self {
            Self::FailedHasNoValue(error) => Some(error),
            Self::EmptyHasNoValue | Self::SuccessfulHasNoError => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Violation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailedHasNoValue(error) => {
                write!(f, "failed Outcome has no value (error: {error})")
            }
            Self::EmptyHasNoValue => {
                write!(f, "successful Outcome without a value has no value")
            }
            Self::SuccessfulHasNoError => write!(f, "successful Outcome has no error"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for Violation<E> {}

/// An absent value where one is mandatory.
///
/// Raised only where absence is representable at runtime, such as
/// [`value_object!`](crate::value_object) construction from an `Option`.
/// Indicates a bug in the caller; not recoverable as a domain failure.
///
/// # Examples
///
/// ```
/// use railway::InvalidArgument;
///
/// let invalid = InvalidArgument::missing_value("Password");
/// assert_eq!(invalid.parameter(), "Password");
/// assert_eq!(invalid.to_string(), "value of Password may not be absent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidArgument {
    parameter: Cow<'static, str>,
}

impl InvalidArgument {
    /// Creates a violation naming the parameter that was absent.
    #[inline]
    pub fn missing_value(parameter: impl Into<Cow<'static, str>>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }

    /// Returns the name of the offending parameter.
    #[inline]
    pub fn parameter(&self) -> &str {
        &self.parameter
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value of {} may not be absent", self.parameter)
    }
}

impl core::error::Error for InvalidArgument {}
