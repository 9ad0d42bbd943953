//! # callkey
//!
//! Argument values and call keys for memoized function calls.
//!
//! ## Model
//! - **Value**: dynamic argument value; lists and maps are mutable and never hash
//! - **Args**: positional values plus named values in supply order
//! - **CallKey**: positional values as given, named values sorted by name

#![warn(missing_docs)]

mod args;
mod error;
mod key;
mod value;

pub use args::Args;
pub use error::{ArgPosition, KeyError, Result};
pub use key::CallKey;
pub use value::Value;
