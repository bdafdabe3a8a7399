//! # Repeater
//!
//! Repeat a string into an ordered list of owned copies.
//!
//! ```
//! use repeater::repeat;
//!
//! assert_eq!(repeat("Hello!", 3), vec!["Hello!", "Hello!", "Hello!"]);
//! ```
//!
//! Counts arriving as signed integers or as text go through
//! [`list_of_strs_repeated`] and [`repeat_parsed`]. A negative count yields
//! an empty list; a count that is not an integer is an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod repeat;

// Re-export main types
pub use error::{RepeaterError, Result};
pub use repeat::{list_of_strs_repeated, parse_count, repeat, repeat_parsed};

/// Repeater version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
