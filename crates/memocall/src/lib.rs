//! # memocall
//!
//! Per-instance memoization for function calls.
//!
//! ## Architecture
//! - **Key**: positional arguments in order, named arguments sorted by name
//!   (see the `callkey` crate)
//! - **Store**: AHash map from key to `Arc` result, one per wrapper, never evicted
//! - **Notifier**: one line per call, `Getting from cache` or `Calculating new result`
//!
//! ## Semantics
//! - Equivalent calls run the wrapped function at most once
//! - Arguments holding lists or maps fail with `KeyError` before the function runs
//! - Errors from the wrapped function propagate unchanged and are never stored
//!
//! ## Concurrency
//! The store is behind a mutex that is not held while the wrapped function
//! runs. Two threads missing on the same key may both compute; the first
//! stored result is kept and returned to both.
//!
//! ```
//! use memocall::{memoize, Args, Silent, Value};
//!
//! let add = memoize(|args: &Args| match (args.at(0), args.at(1)) {
//!     (Some(Value::Int(x)), Some(Value::Int(y))) => x + y,
//!     _ => 0,
//! })
//! .with_notifier(Silent);
//!
//! assert_eq!(*add.call(&Args::positional([2, 3])).unwrap(), 5);
//! assert_eq!(*add.call(&Args::positional([2, 3])).unwrap(), 5);
//! assert_eq!(add.stats().hits(), 1);
//! ```

#![warn(missing_docs)]

mod cache;
mod memo;
mod notify;
mod stats;
mod store;
mod typed;

pub use callkey::{ArgPosition, Args, CallKey, KeyError, Value};
pub use memo::{memoize, Memoized};
pub use notify::{Notifier, Outcome, Recorder, Silent, Stdout, Writer, HIT_MESSAGE, MISS_MESSAGE};
pub use stats::CacheStats;
pub use typed::{memoize_typed, TypedMemo};
