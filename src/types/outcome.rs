//! The Success/Failure container and its combinator protocol.
//!
//! [`Outcome`] is the railway track: a computation either carries a value
//! (or deliberately no value) on the success rail, or carries an error on
//! the failure rail. Every combinator runs inline on the caller's thread
//! and returns a new `Outcome`; once a failure occurs, later combinators
//! return it unchanged without invoking their functions.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::violation::Violation;

/// Result of a computation or any other action.
///
/// Can be successful and contain a value, successful without a value (an
/// operation whose only outcome is "did or did not succeed"), or failed and
/// contain an error of type `F`.
///
/// Absence of a success value is represented explicitly with `Option`;
/// there is no sentinel state. A failure always carries its error.
///
/// # Type Parameters
///
/// * `S` - The type of the contained value
/// * `F` - The type of the error object in case of a failure
///
/// # Examples
///
/// ```
/// use railway::Outcome;
///
/// let success = Outcome::<_, &str>::with_value(42);
/// assert!(success.is_success());
///
/// let failure = Outcome::<i32, _>::with_error("boom");
/// assert!(failure.is_failure());
///
/// let empty = Outcome::<i32, &str>::without_value();
/// assert!(empty.is_success());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Outcome<S, F> {
    /// Successful outcome; `None` means success-without-value.
    Success(Option<S>),
    /// Failed outcome; the error is always present.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Creates a successful outcome holding the given value.
    ///
    /// An absent value is unrepresentable here; use
    /// [`from_option`](Self::from_option) for a possibly-absent source.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<_, &str>::with_value("hello");
    /// assert_eq!(outcome.try_value().unwrap(), &"hello");
    /// ```
    #[inline]
    pub fn with_value(value: S) -> Self {
        Self::Success(Some(value))
    }

    /// Creates a failed outcome holding the given error.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<i32, _>::with_error("not found");
    /// assert_eq!(outcome.try_error().unwrap(), &"not found");
    /// ```
    #[inline]
    pub fn with_error(error: F) -> Self {
        Self::Failure(error)
    }

    /// Creates a successful outcome without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::without_value();
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn without_value() -> Self {
        Self::Success(None)
    }

    /// Creates an outcome from a possibly-absent value.
    ///
    /// `Some(value)` becomes a success with that value, `None` becomes a
    /// failure with the given error. `Option` is the single boundary
    /// representation of absence.
    ///
    /// # Arguments
    ///
    /// * `value` - The optional value
    /// * `error` - The error to use if the value is absent
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let present = Outcome::from_option(Some(7), "missing");
    /// assert!(present.is_success());
    ///
    /// let absent = Outcome::<i32, _>::from_option(None, "missing");
    /// assert_eq!(absent.try_error().unwrap(), &"missing");
    /// ```
    #[inline]
    pub fn from_option(value: Option<S>, error: F) -> Self {
        match value {
            Some(value) => Self::with_value(value),
            None => Self::with_error(error),
        }
    }

    /// Creates an outcome from a core `Result`.
    ///
    /// `Ok` becomes a success with value, `Err` becomes a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::from_result("42".parse::<i32>());
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::with_value(value),
            Err(error) => Self::with_error(error),
        }
    }

    /// Checks whether the outcome is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert!(Outcome::<_, &str>::with_value(1).is_success());
    /// assert!(Outcome::<i32, &str>::without_value().is_success());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Checks whether the outcome is failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert!(Outcome::<i32, _>::with_error("boom").is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns a reference to the success value.
    ///
    /// Accessing the value of a failed or empty outcome is a structural
    /// usage violation, surfaced as a distinct [`Violation`] so it is never
    /// mistaken for a domain failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, Violation};
    ///
    /// let outcome = Outcome::<_, &str>::with_value(3);
    /// assert_eq!(outcome.try_value(), Ok(&3));
    ///
    /// let empty = Outcome::<i32, &str>::without_value();
    /// assert_eq!(empty.try_value(), Err(Violation::EmptyHasNoValue));
    ///
    /// let failed = Outcome::<i32, _>::with_error("boom");
    /// assert_eq!(failed.try_value(), Err(Violation::FailedHasNoValue(&"boom")));
    /// ```
    #[inline]
    pub fn try_value(&self) -> Result<&S, Violation<&F>> {
        match self {
            Self::Success(Some(value)) => Ok(value),
            Self::Success(None) => Err(Violation::EmptyHasNoValue),
            Self::Failure(error) => Err(Violation::FailedHasNoValue(error)),
        }
    }

    /// Returns a reference to the error.
    ///
    /// Asking a successful outcome (with or without value) for its error is
    /// a structural usage violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, Violation};
    ///
    /// let failed = Outcome::<i32, _>::with_error("boom");
    /// assert_eq!(failed.try_error(), Ok(&"boom"));
    ///
    /// let success = Outcome::<_, &str>::with_value(1);
    /// assert_eq!(success.try_error(), Err(Violation::SuccessfulHasNoError));
    /// ```
    #[inline]
    pub fn try_error(&self) -> Result<&F, Violation<&F>> {
        match self {
            Self::Success(_) => Err(Violation::SuccessfulHasNoError),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, Violation};
    ///
    /// let outcome = Outcome::<_, &str>::with_value("v".to_string());
    /// assert_eq!(outcome.into_value(), Ok("v".to_string()));
    ///
    /// let failed = Outcome::<i32, _>::with_error("boom");
    /// assert_eq!(failed.into_value(), Err(Violation::FailedHasNoValue("boom")));
    /// ```
    #[inline]
    pub fn into_value(self) -> Result<S, Violation<F>> {
        match self {
            Self::Success(Some(value)) => Ok(value),
            Self::Success(None) => Err(Violation::EmptyHasNoValue),
            Self::Failure(error) => Err(Violation::FailedHasNoValue(error)),
        }
    }

    /// Consumes the outcome, returning the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Outcome, Violation};
    ///
    /// let failed = Outcome::<i32, _>::with_error("boom");
    /// assert_eq!(failed.into_error(), Ok("boom"));
    ///
    /// let empty = Outcome::<i32, &str>::without_value();
    /// assert_eq!(empty.into_error(), Err(Violation::SuccessfulHasNoError));
    /// ```
    #[inline]
    pub fn into_error(self) -> Result<F, Violation<F>> {
        match self {
            Self::Success(_) => Err(Violation::SuccessfulHasNoError),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns a reference to the success value, panicking on misuse.
    ///
    /// Prefer [`try_value`](Self::try_value) unless the variant has already
    /// been established.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is failed or is a success without a value;
    /// both indicate incorrect use of the API, not a domain failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<_, &str>::with_value(5);
    /// assert_eq!(*outcome.value(), 5);
    /// ```
    #[inline]
    pub fn value(&self) -> &S
    where
        F: fmt::Debug,
    {
        match self {
            Self::Success(Some(value)) => value,
            Self::Success(None) => empty_value_panic("Outcome::value"),
            Self::Failure(error) => {
                panic!("called `Outcome::value` on a failed Outcome (error: {error:?})")
            }
        }
    }

    /// Returns a reference to the error, panicking on misuse.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let failed = Outcome::<i32, _>::with_error("boom");
    /// assert_eq!(*failed.error(), "boom");
    /// ```
    #[inline]
    pub fn error(&self) -> &F {
        match self {
            Self::Success(_) => panic!("called `Outcome::error` on a successful Outcome"),
            Self::Failure(error) => error,
        }
    }

    /// Combines two outcomes, short-circuiting on the first failure.
    ///
    /// Left-biased: if `self` is failed its error wins, otherwise a failed
    /// `other` wins, otherwise the combination is a success without a
    /// value. Success payloads are discarded; `combine` answers only "did
    /// every step succeed".
    ///
    /// # Arguments
    ///
    /// * `other` - The outcome to combine with
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let both = Outcome::<_, &str>::with_value("a")
    ///     .combine(Outcome::<_, &str>::with_value(1));
    /// assert_eq!(both, Outcome::without_value());
    ///
    /// let first = Outcome::<i32, _>::with_error("e1")
    ///     .combine(Outcome::<i32, &str>::with_error("e2"));
    /// assert_eq!(first.try_error().unwrap(), &"e1");
    /// ```
    #[inline]
    pub fn combine<T>(self, other: Outcome<T, F>) -> Outcome<(), F> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(_) => match other {
                Outcome::Failure(error) => Outcome::Failure(error),
                Outcome::Success(_) => Outcome::without_value(),
            },
        }
    }

    /// Discards the success payload, keeping only the rail.
    ///
    /// Useful for combining outcomes of different success types; the
    /// [`combine!`](crate::combine) macro applies this to every argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let erased = Outcome::<_, &str>::with_value(42).discard_value();
    /// assert_eq!(erased, Outcome::without_value());
    /// ```
    #[inline]
    pub fn discard_value(self) -> Outcome<(), F> {
        match self {
            Self::Success(_) => Outcome::without_value(),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Runs the given function, if the outcome is successful.
    ///
    /// On failure the error propagates into a new failed outcome of the
    /// target type without invoking the function.
    ///
    /// # Arguments
    ///
    /// * `function` - Supplier of the next outcome on the track
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let next = Outcome::<_, &str>::with_value("ignored")
    ///     .on_success(|| Outcome::<_, &str>::with_value(7));
    /// assert_eq!(next, Outcome::with_value(7));
    ///
    /// let skipped = Outcome::<i32, _>::with_error("boom")
    ///     .on_success(|| Outcome::<i32, &str>::with_value(7));
    /// assert_eq!(skipped.try_error().unwrap(), &"boom");
    /// ```
    #[inline]
    pub fn on_success<T, Fun>(self, function: Fun) -> Outcome<T, F>
    where
        Fun: FnOnce() -> Outcome<T, F>,
    {
        match self {
            Self::Success(_) => function(),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Runs the given function and wraps its return value, if the outcome
    /// is successful.
    ///
    /// # Arguments
    ///
    /// * `function` - Supplier of the next plain value
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let next = Outcome::<i32, &str>::without_value().on_success_value(|| 3);
    /// assert_eq!(next, Outcome::with_value(3));
    /// ```
    #[inline]
    pub fn on_success_value<T, Fun>(self, function: Fun) -> Outcome<T, F>
    where
        Fun: FnOnce() -> T,
    {
        self.on_success(|| Outcome::with_value(function()))
    }

    /// Runs a side effect with the success value, returning the outcome
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value; inspecting a
    /// value that structurally cannot exist is a usage error.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<_, &str>::with_value(9)
    ///     .on_success_do(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(9));
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn on_success_do<Fun>(self, function: Fun) -> Self
    where
        Fun: FnOnce(&S),
    {
        match &self {
            Self::Success(Some(value)) => function(value),
            Self::Success(None) => empty_value_panic("Outcome::on_success_do"),
            Self::Failure(_) => {}
        }
        self
    }

    /// Runs a side effect if the outcome is failed, returning the outcome
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mut called = false;
    /// let outcome = Outcome::<i32, _>::with_error("boom")
    ///     .on_failure(|| called = true);
    /// assert!(called);
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure<Fun>(self, function: Fun) -> Self
    where
        Fun: FnOnce(),
    {
        if self.is_failure() {
            function();
        }
        self
    }

    /// Runs a side effect with the error if the outcome is failed,
    /// returning the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<i32, _>::with_error("boom")
    ///     .on_failure_with(|e| seen = Some(*e));
    /// assert_eq!(seen, Some("boom"));
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub fn on_failure_with<Fun>(self, function: Fun) -> Self
    where
        Fun: FnOnce(&F),
    {
        if let Self::Failure(error) = &self {
            function(error);
        }
        self
    }

    /// Runs a side effect with the error if the outcome is failed and the
    /// predicate holds, returning the outcome unchanged either way.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Decides whether the error is interesting
    /// * `function` - Side effect receiving the error
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mut seen = None;
    /// let _ = Outcome::<i32, _>::with_error(404)
    ///     .on_failure_if(|code| *code == 404, |code| seen = Some(*code));
    /// assert_eq!(seen, Some(404));
    /// ```
    #[inline]
    pub fn on_failure_if<Pred, Fun>(self, predicate: Pred, function: Fun) -> Self
    where
        Pred: FnOnce(&F) -> bool,
        Fun: FnOnce(&F),
    {
        if let Self::Failure(error) = &self {
            if predicate(error) {
                function(error);
            }
        }
        self
    }

    /// Runs a side effect with the outcome itself, regardless of rail.
    ///
    /// Used for logging and telemetry that must observe both rails.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mut log = Vec::new();
    /// let _ = Outcome::<_, &str>::with_value(1)
    ///     .on_both(|o| log.push(o.is_success()));
    /// let _ = Outcome::<i32, _>::with_error("e")
    ///     .on_both(|o| log.push(o.is_success()));
    /// assert_eq!(log, [true, false]);
    /// ```
    #[inline]
    pub fn on_both<Fun>(self, function: Fun) -> Self
    where
        Fun: FnOnce(&Self),
    {
        function(&self);
        self
    }

    /// Checks the success value against a predicate.
    ///
    /// A `false` predicate converts the outcome into a failure with the
    /// given error. On an already-failed outcome this is a no-op. For
    /// predicates whose evaluation can itself fail, use
    /// [`ensure_fallible`](Self::ensure_fallible).
    ///
    /// # Arguments
    ///
    /// * `predicate` - Validation over the success value
    /// * `error` - Error if the predicate returns `false`
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value; validating a
    /// value that structurally cannot exist is a usage error, not a failed
    /// validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let ok = Outcome::<_, &str>::with_value("hi").ensure(|s| s.len() > 1, "too short");
    /// assert_eq!(ok, Outcome::with_value("hi"));
    ///
    /// let failed = Outcome::<_, &str>::with_value("hi").ensure(|s| s.len() > 5, "too short");
    /// assert_eq!(failed.try_error().unwrap(), &"too short");
    /// ```
    #[inline]
    pub fn ensure<Pred>(self, predicate: Pred, error: F) -> Self
    where
        Pred: FnOnce(&S) -> bool,
    {
        match &self {
            Self::Failure(_) => self,
            Self::Success(None) => empty_value_panic("Outcome::ensure"),
            Self::Success(Some(value)) => {
                if predicate(value) {
                    self
                } else {
                    Self::Failure(error)
                }
            }
        }
    }

    /// Checks the success value against a predicate whose evaluation can
    /// fail.
    ///
    /// A predicate evaluation error counts as failed validation: both
    /// `Ok(false)` and `Err(_)` convert the outcome into a failure with the
    /// given error. The two cases stay observable at the call site through
    /// the predicate's own return value.
    ///
    /// # Arguments
    ///
    /// * `predicate` - Fallible validation over the success value
    /// * `error` - Error if validation fails or cannot be evaluated
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value, exactly like
    /// [`ensure`](Self::ensure).
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// // The predicate itself fails to evaluate: validation fails.
    /// let failed = Outcome::<_, &str>::with_value("hi")
    ///     .ensure_fallible(|s| s.parse::<i32>().map(|n| n > 0), "not a number");
    /// assert_eq!(failed.try_error().unwrap(), &"not a number");
    ///
    /// let ok = Outcome::<_, &str>::with_value("7")
    ///     .ensure_fallible(|s| s.parse::<i32>().map(|n| n > 0), "not a number");
    /// assert_eq!(ok, Outcome::with_value("7"));
    /// ```
    #[inline]
    pub fn ensure_fallible<Pred, E>(self, predicate: Pred, error: F) -> Self
    where
        Pred: FnOnce(&S) -> Result<bool, E>,
    {
        match &self {
            Self::Failure(_) => self,
            Self::Success(None) => empty_value_panic("Outcome::ensure_fallible"),
            Self::Success(Some(value)) => match predicate(value) {
                Ok(true) => self,
                Ok(false) | Err(_) => Self::Failure(error),
            },
        }
    }

    /// Chains a function over the success value, flattening the result.
    ///
    /// On failure the error propagates into a new failed outcome without
    /// invoking the function; on success the function's outcome is returned
    /// directly, with no double wrapping.
    ///
    /// # Arguments
    ///
    /// * `function` - The next step on the track
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let chained = Outcome::<_, &str>::with_value(6)
    ///     .flat_map(|n| Outcome::with_value(n * 7));
    /// assert_eq!(chained, Outcome::with_value(42));
    ///
    /// let skipped = Outcome::<i32, _>::with_error("boom")
    ///     .flat_map(|n| Outcome::<i32, &str>::with_value(n + 1));
    /// assert_eq!(skipped.try_error().unwrap(), &"boom");
    /// ```
    #[inline]
    pub fn flat_map<T, Fun>(self, function: Fun) -> Outcome<T, F>
    where
        Fun: FnOnce(S) -> Outcome<T, F>,
    {
        match self {
            Self::Success(Some(value)) => function(value),
            Self::Success(None) => empty_value_panic("Outcome::flat_map"),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps the success value to another value.
    ///
    /// Defined through [`flat_map`](Self::flat_map): the mapped value is
    /// wrapped with [`with_value`](Self::with_value).
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let mapped = Outcome::<_, &str>::with_value(2).map(|n| n * 3);
    /// assert_eq!(mapped, Outcome::with_value(6));
    /// ```
    #[inline]
    pub fn map<T, Fun>(self, function: Fun) -> Outcome<T, F>
    where
        Fun: FnOnce(S) -> T,
    {
        self.flat_map(|value| Outcome::with_value(function(value)))
    }

    /// Converts the outcome into a core `Result`.
    ///
    /// The success side keeps its explicit `Option` so the
    /// success-without-value case survives the conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert_eq!(Outcome::<_, &str>::with_value(1).into_result(), Ok(Some(1)));
    /// assert_eq!(Outcome::<i32, &str>::without_value().into_result(), Ok(None));
    /// assert_eq!(Outcome::<i32, _>::with_error("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Option<S>, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<F> Outcome<(), F> {
    /// Combines a sequence of outcomes left to right.
    ///
    /// Returns the first failure, or a success without a value if the
    /// sequence is empty or every outcome succeeds. Heterogeneous success
    /// types combine through [`discard_value`](Outcome::discard_value) or
    /// the [`combine!`](crate::combine) macro.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let all_good = Outcome::combine_all([
    ///     Outcome::<_, &str>::with_value(1),
    ///     Outcome::<_, &str>::with_value(2),
    /// ]);
    /// assert_eq!(all_good, Outcome::without_value());
    ///
    /// let empty: [Outcome<i32, &str>; 0] = [];
    /// assert_eq!(Outcome::combine_all(empty), Outcome::without_value());
    ///
    /// let first_failure = Outcome::combine_all([
    ///     Outcome::<i32, _>::with_error("e1"),
    ///     Outcome::<i32, _>::with_error("e2"),
    /// ]);
    /// assert_eq!(first_failure.try_error().unwrap(), &"e1");
    /// ```
    pub fn combine_all<S, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome<S, F>>,
    {
        for outcome in outcomes {
            if let Outcome::Failure(error) = outcome {
                return Outcome::Failure(error);
            }
        }
        Outcome::without_value()
    }
}

impl<T, F> Outcome<Option<T>, F> {
    /// Extracts the inner value from an optional success value.
    ///
    /// Only defined where the success type is itself an `Option`, so
    /// there is no runtime check that the payload is optional. An empty
    /// inner option becomes a failure with the given error; a failure
    /// propagates unchanged.
    ///
    /// # Arguments
    ///
    /// * `error_if_absent` - Error if the inner option is empty
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success without a value (there is no
    /// inner option to inspect).
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let present = Outcome::<_, &str>::with_value(Some("x"));
    /// assert_eq!(present.if_value_is_present("absent"), Outcome::with_value("x"));
    ///
    /// let absent = Outcome::<Option<&str>, &str>::with_value(None);
    /// let failed = absent.if_value_is_present("absent");
    /// assert_eq!(failed.try_error().unwrap(), &"absent");
    /// ```
    #[inline]
    pub fn if_value_is_present(self, error_if_absent: F) -> Outcome<T, F> {
        match self {
            Self::Failure(error) => Outcome::Failure(error),
            Self::Success(None) => empty_value_panic("Outcome::if_value_is_present"),
            Self::Success(Some(inner)) => Outcome::from_option(inner, error_if_absent),
        }
    }
}

/// Renders the externally observable string form.
///
/// The `Result (...)` wording is a stable formatting contract that
/// downstream logging and printing collaborators may depend on verbatim:
/// `Result (Success with value <v>)`, `Result (Success)` and
/// `Result (Failure: <error>)`.
impl<S, F> fmt::Display for Outcome<S, F>
where
    S: fmt::Display,
    F: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(Some(value)) => write!(f, "Result (Success with value <{value}>)"),
            Self::Success(None) => write!(f, "Result (Success)"),
            Self::Failure(error) => write!(f, "Result (Failure: {error})"),
        }
    }
}

#[cold]
#[track_caller]
fn empty_value_panic(operation: &str) -> ! {
    panic!("called `{operation}` on a successful Outcome without a value")
}
