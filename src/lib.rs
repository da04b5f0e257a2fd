//! Railway-Oriented Programming primitives.
//!
//! Fallible steps are chained on a track: once any step fails, every later
//! combinator is skipped and the original failure flows to the end unchanged.
//! The crate is built around [`Outcome`], a two-variant Success/Failure
//! container, [`Message`], the structured failure descriptor it is usually
//! parameterized with, and the [`value_object!`] macro for typed domain
//! primitives with value-based equality.
//!
//! # Examples
//!
//! ## Chaining fallible steps
//!
//! ```
//! use railway::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     Outcome::from_result(input.parse::<i32>().map_err(|e| e.to_string()))
//! }
//!
//! let doubled = parse("21")
//!     .ensure(|n| *n > 0, "must be positive".to_string())
//!     .map(|n| n * 2);
//!
//! assert_eq!(doubled, Outcome::with_value(42));
//!
//! let failed = parse("21")
//!     .ensure(|n| *n > 100, "too small".to_string())
//!     .map(|n| n * 2);
//!
//! assert_eq!(failed.try_error().unwrap(), &"too small".to_string());
//! ```
//!
//! ## Combining validations
//!
//! ```
//! use railway::{combine, Outcome};
//!
//! let checks = combine!(
//!     Outcome::<_, &str>::with_value("user"),
//!     Outcome::<&str, &str>::with_error("password missing"),
//!     Outcome::<_, &str>::with_value("token"),
//! );
//!
//! // First failure wins, later outcomes are ignored.
//! assert_eq!(checks.try_error().unwrap(), &"password missing");
//! ```
//!
//! ## Structured failure messages
//!
//! ```
//! use railway::{Message, MessageLevel};
//!
//! let message = Message::builder()
//!     .code(404)
//!     .source("user-service")
//!     .text("User not found")
//!     .build();
//!
//! assert_eq!(message.level(), MessageLevel::Error);
//! assert_eq!(
//!     message.to_string(),
//!     "ERROR (404, user-service, 0): \"User not found\" (details: \"No details\")"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Outcome` and the core `Result`/`Option` types
pub mod convert;
/// Macros for combining outcomes, building messages, and declaring value objects
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits lifting `Result` and `Option` onto the railway
pub mod traits;
/// The `Outcome` container, `Message` descriptor, and structural conditions
pub mod types;

/// Tracing integration - outcome-aware event emission (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

pub use convert::*;
pub use traits::*;
pub use types::{
    InvalidArgument, Message, MessageBuilder, MessageLevel, MessageOutcome, Outcome, Violation,
};

#[cfg(feature = "tracing")]
pub use trace::TracedOutcome;
