//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use railway::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`combine!`], [`msg!`], [`value_object!`]
//! - **Types**: [`Outcome`], [`Message`], [`MessageBuilder`], [`MessageLevel`], [`Violation`]
//! - **Traits**: [`ResultExt`], [`OptionExt`], [`IntoMessage`]
//! - **Aliases**: [`MessageOutcome`]
//!
//! # Examples
//!
//! ```
//! use railway::prelude::*;
//!
//! fn find_user(id: Option<u64>) -> MessageOutcome<u64> {
//!     id.outcome_or(msg!("user id missing"))
//! }
//!
//! assert!(find_user(Some(7)).is_success());
//! assert!(find_user(None).is_failure());
//! ```

// Macros
pub use crate::{combine, msg, value_object};

// Core types
pub use crate::types::{
    InvalidArgument, Message, MessageBuilder, MessageLevel, MessageOutcome, Outcome, Violation,
};

// Traits
pub use crate::traits::{IntoMessage, OptionExt, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::trace::TracedOutcome;
