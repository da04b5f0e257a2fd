//! Macros for combining outcomes, building messages, and declaring typed
//! value objects.

/// Combines any number of outcomes left to right, short-circuiting on the
/// first failure.
///
/// Success payloads may differ between arguments; each is erased with
/// [`Outcome::discard_value`](crate::Outcome::discard_value) before the
/// combination, so the result is always `Outcome<(), F>`: the first
/// failure, or a success without a value when every outcome succeeds.
///
/// # Examples
///
/// ```
/// use railway::{combine, Outcome};
///
/// let checks = combine!(
///     Outcome::<_, &str>::with_value("alice"),
///     Outcome::<_, &str>::with_value(42),
///     Outcome::<(), &str>::without_value(),
/// );
/// assert_eq!(checks, Outcome::without_value());
///
/// let failed = combine!(
///     Outcome::<_, &str>::with_value("alice"),
///     Outcome::<i32, _>::with_error("age missing"),
/// );
/// assert_eq!(failed.try_error().unwrap(), &"age missing");
/// ```
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),+ $(,)?) => {
        $crate::types::Outcome::combine_all([
            $($crate::types::Outcome::discard_value($outcome)),+
        ])
    };
}

/// Builds an error-level [`Message`](crate::Message) from a format string.
///
/// The message's `source` is captured from the macro invocation site.
///
/// # Examples
///
/// ```
/// use railway::msg;
///
/// let user_id = 42;
/// let message = msg!("user {} not found", user_id);
/// assert_eq!(message.text(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! msg {
    ($($arg:tt)*) => {
        $crate::types::Message::with_error(format!($($arg)*))
    };
}

/// Declares an immutable, typed wrapper around a single value.
///
/// The generated newtype has value-based equality and hashing, a
/// `TypeName (value)` display form, and constructors that make an absent
/// value impossible (`new`) or reject it with an
/// [`InvalidArgument`](crate::InvalidArgument) naming the type
/// (`from_option`). Two wrappers of different declared types never
/// compare equal; the comparison does not even compile.
///
/// # Examples
///
/// ```
/// use railway::value_object;
///
/// value_object! {
///     /// A user's password.
///     pub struct Password(String);
/// }
///
/// let password = Password::new("secret");
/// assert_eq!(password.value().as_str(), "secret");
/// assert_eq!(password.to_string(), "Password (secret)");
/// assert_eq!(password, Password::new("secret"));
///
/// let rejected = Password::from_option(None).unwrap_err();
/// assert_eq!(rejected.to_string(), "value of Password may not be absent");
/// ```
#[macro_export]
macro_rules! value_object {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis struct $name($inner);

        impl $name {
            /// Creates a new wrapper from the given value.
            pub fn new(value: impl Into<$inner>) -> Self {
                Self(value.into())
            }

            /// Creates a wrapper from a possibly-absent value, rejecting
            /// absence with an `InvalidArgument` naming this type.
            pub fn from_option(
                value: Option<$inner>,
            ) -> Result<Self, $crate::types::InvalidArgument> {
                match value {
                    Some(value) => Ok(Self(value)),
                    None => Err($crate::types::InvalidArgument::missing_value(
                        stringify!($name),
                    )),
                }
            }

            /// Returns a reference to the wrapped value.
            pub fn value(&self) -> &$inner {
                &self.0
            }

            /// Consumes the wrapper, returning the wrapped value.
            pub fn into_value(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::write!(f, "{} ({})", stringify!($name), self.0)
            }
        }
    };
}
