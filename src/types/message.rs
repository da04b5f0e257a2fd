//! Structured failure descriptor with a builder.
//!
//! [`Message`] is the default failure payload of the railway: an immutable
//! record of severity, code, origin, index, text and details. It is built
//! once through [`MessageBuilder`] and commonly constructed ad hoc wherever
//! a failure is produced.
//!
//! # Examples
//!
//! ```
//! use railway::{Message, MessageLevel};
//!
//! let message = Message::builder()
//!     .level(MessageLevel::Warning)
//!     .code(42)
//!     .source("billing")
//!     .index(3)
//!     .text("Invoice already settled")
//!     .details("idempotent retry")
//!     .build();
//!
//! assert_eq!(
//!     message.to_string(),
//!     "WARNING (42, billing, 3): \"Invoice already settled\" (details: \"idempotent retry\")"
//! );
//! ```

use core::fmt;
use core::panic::Location;

#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::alloc_type::String;

const DEFAULT_CODE: i32 = 1;
const DEFAULT_INDEX: i32 = 0;
const DEFAULT_TEXT: &str = "No text";
const DEFAULT_DETAILS: &str = "No details";
const NO_SOURCE: &str = "No source";

/// Severity of a [`Message`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// An error; the default level.
    #[default]
    Error,
    /// A warning.
    Warning,
    /// An informational message.
    Info,
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        };
        write!(f, "{name}")
    }
}

/// An immutable, structured failure message.
///
/// Created through [`Message::builder`] (or the [`Message::with_error`]
/// convenience factory) and immutable afterwards. Equality and hash cover
/// all six fields.
///
/// When `source` is not set explicitly it is derived, best-effort, from the
/// location of the builder call (`file:line` via
/// [`core::panic::Location::caller`]); the captured value is not guaranteed
/// stable across refactors.
///
/// # Examples
///
/// ```
/// use railway::Message;
///
/// let message = Message::with_error("User not found");
/// assert_eq!(message.code(), 1);
/// assert_eq!(message.text(), "User not found");
/// assert_eq!(message.details(), "No details");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    level: MessageLevel,
    code: i32,
    source: String,
    index: i32,
    text: String,
    details: String,
}

impl Message {
    /// Creates a builder with every field at its default.
    ///
    /// Defaults: level `Error`, code `1`, index `0`, text `"No text"`,
    /// details `"No details"`, source captured from the call site.
    #[track_caller]
    #[inline]
    pub fn builder() -> MessageBuilder {
        MessageBuilder {
            message: Message {
                level: MessageLevel::Error,
                code: DEFAULT_CODE,
                source: caller_source(),
                index: DEFAULT_INDEX,
                text: String::from(DEFAULT_TEXT),
                details: String::from(DEFAULT_DETAILS),
            },
        }
    }

    /// Creates a builder preset to the `Error` level.
    ///
    /// Kept alongside [`builder`](Self::builder) for call sites that want
    /// the severity spelled out.
    #[track_caller]
    #[inline]
    pub fn error() -> MessageBuilder {
        Self::builder().level(MessageLevel::Error)
    }

    /// Creates an error-level message from a plain text, defaulting the
    /// rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::{Message, MessageLevel};
    ///
    /// let message = Message::with_error("disk full");
    /// assert_eq!(message.level(), MessageLevel::Error);
    /// assert_eq!(message.text(), "disk full");
    /// ```
    #[track_caller]
    #[inline]
    pub fn with_error(text: impl Into<String>) -> Self {
        Self::builder().text(text).build()
    }

    /// Returns the message's level.
    #[inline]
    pub fn level(&self) -> MessageLevel {
        self.level
    }

    /// Returns the message's code.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the message's source.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the message's index.
    #[inline]
    pub fn index(&self) -> i32 {
        self.index
    }

    /// Returns the message's text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the message's details.
    #[inline]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Checks whether the message has the given code.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Message;
    ///
    /// let message = Message::builder().code(404).build();
    /// assert!(message.has_code(404));
    /// assert!(!message.has_code(500));
    /// ```
    #[inline]
    pub fn has_code(&self, code: i32) -> bool {
        self.code == code
    }
}

/// A message with every field defaulted and the fixed `"No source"`
/// placeholder, for paths where no call site capture happens.
impl Default for Message {
    fn default() -> Self {
        Self {
            level: MessageLevel::Error,
            code: DEFAULT_CODE,
            source: String::from(NO_SOURCE),
            index: DEFAULT_INDEX,
            text: String::from(DEFAULT_TEXT),
            details: String::from(DEFAULT_DETAILS),
        }
    }
}

/// Renders the message bit-exact as
/// `LEVEL (code, source, index): "text" (details: "details")`.
///
/// ```
/// use railway::Message;
///
/// let message = Message::builder().source("Test").text("The error").build();
/// assert_eq!(
///     message.to_string(),
///     "ERROR (1, Test, 0): \"The error\" (details: \"No details\")"
/// );
/// ```
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}): \"{}\" (details: \"{}\")",
            self.level, self.code, self.source, self.index, self.text, self.details
        )
    }
}

impl core::error::Error for Message {}

/// Consuming builder for [`Message`].
///
/// Every setter takes and returns the builder; [`build`](Self::build)
/// finalizes the immutable message.
#[must_use]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    /// Sets the new message's level.
    #[inline]
    pub fn level(mut self, level: MessageLevel) -> Self {
        self.message.level = level;
        self
    }

    /// Sets the new message's code.
    #[inline]
    pub fn code(mut self, code: i32) -> Self {
        self.message.code = code;
        self
    }

    /// Sets the new message's source, replacing the captured call site.
    #[inline]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.message.source = source.into();
        self
    }

    /// Sets the new message's index.
    #[inline]
    pub fn index(mut self, index: i32) -> Self {
        self.message.index = index;
        self
    }

    /// Sets the new message's text.
    #[inline]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.message.text = text.into();
        self
    }

    /// Sets the new message's details.
    #[inline]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.message.details = details.into();
        self
    }

    /// Sets the new message's details from an error and its source chain.
    ///
    /// The chain is rendered outermost first, joined with `" -> "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Message;
    ///
    /// let error = "nested failure".parse::<i32>().unwrap_err();
    /// let message = Message::builder().details_from_error(&error).build();
    /// assert_eq!(message.details(), "invalid digit found in string");
    /// ```
    pub fn details_from_error(mut self, error: &dyn core::error::Error) -> Self {
        let mut chain: SmallVec<[String; 4]> = SmallVec::new();
        chain.push(error.to_string());
        let mut cause = error.source();
        while let Some(current) = cause {
            chain.push(current.to_string());
            cause = current.source();
        }
        self.message.details = chain.join(" -> ");
        self
    }

    /// Creates the final message.
    #[inline]
    pub fn build(self) -> Message {
        self.message
    }
}

/// Best-effort provenance of the builder call as `file:line`.
#[track_caller]
fn caller_source() -> String {
    let location = Location::caller();
    format!("{}:{}", location.file(), location.line())
}
