//! Conversion trait for producing [`Message`] descriptors from common
//! inputs.
//!
//! Implementations exist for `Message` itself (identity), string types
//! (error-level text) and anything implementing `core::error::Error`
//! through [`Message::builder`]'s detail rendering.

use crate::types::alloc_type::String;
use crate::types::{Message, Outcome};

/// Conversion into a structured [`Message`].
///
/// Implementors keep the builder's call-site source capture: the
/// conversion methods are `#[track_caller]`, so the resulting message
/// points at the place the conversion was requested.
pub trait IntoMessage {
    /// Converts `self` into a `Message`.
    fn into_message(self) -> Message;
}

impl IntoMessage for Message {
    #[inline]
    fn into_message(self) -> Message {
        self
    }
}

impl IntoMessage for &str {
    #[track_caller]
    #[inline]
    fn into_message(self) -> Message {
        Message::with_error(self)
    }
}

impl IntoMessage for String {
    #[track_caller]
    #[inline]
    fn into_message(self) -> Message {
        Message::with_error(self)
    }
}

impl<S> Outcome<S, Message> {
    /// Creates a failed outcome from anything convertible into a
    /// [`Message`].
    ///
    /// This is the structured-message spelling of
    /// [`with_error`](Outcome::with_error): a failure can be raised from a
    /// plain error text and still carry full message metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{MessageOutcome, Outcome};
    ///
    /// let outcome: MessageOutcome<u32> = Outcome::with_message("no such user");
    /// assert_eq!(outcome.try_error().unwrap().text(), "no such user");
    /// ```
    #[track_caller]
    #[inline]
    pub fn with_message(message: impl IntoMessage) -> Self {
        Self::with_error(message.into_message())
    }
}
