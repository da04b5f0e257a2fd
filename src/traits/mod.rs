//! Traits that lift the surrounding ecosystem onto the railway.
//!
//! - [`ResultExt`]: moves a core `Result` onto the track
//! - [`OptionExt`]: turns a possibly-absent value into an outcome
//! - [`IntoMessage`]: conversion into the structured [`Message`](crate::Message) descriptor
//!
//! # Examples
//!
//! ```
//! use railway::traits::{OptionExt, ResultExt};
//!
//! let outcome = "17".parse::<i32>().into_outcome();
//! assert!(outcome.is_success());
//!
//! let absent: Option<i32> = None;
//! let outcome = absent.outcome_or("value required");
//! assert!(outcome.is_failure());
//! ```

pub mod into_message;
pub mod outcome_ext;

pub use into_message::IntoMessage;
pub use outcome_ext::{OptionExt, ResultExt};
