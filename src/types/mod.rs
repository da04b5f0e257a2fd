//! Core railway types.
//!
//! This module provides the [`Outcome`] container, the [`Message`] failure
//! descriptor it is commonly parameterized with, and the structural
//! conditions raised when an accessor is incompatible with the active
//! variant.
//!
//! # Examples
//!
//! ```
//! use railway::{Message, Outcome};
//!
//! let outcome: Outcome<u32, Message> =
//!     Outcome::with_error(Message::with_error("no such user"));
//!
//! assert!(outcome.is_failure());
//! println!("{}", outcome);
//! // Result (Failure: ERROR (1, src/main.rs:4, 0): "no such user" (details: "No details"))
//! ```

pub mod alloc_type;
pub mod message;
pub mod outcome;
pub mod violation;

pub use message::{Message, MessageBuilder, MessageLevel};
pub use outcome::Outcome;
pub use violation::{InvalidArgument, Violation};

/// Outcome alias with [`Message`] as the failure payload.
///
/// This is the parameterization most of the crate's examples use:
/// domain failures travel as structured messages.
///
/// # Type Parameters
///
/// * `S` - The success value type
pub type MessageOutcome<S> = Outcome<S, Message>;
