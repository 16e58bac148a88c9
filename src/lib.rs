//! Convenience extensions for [`Option`].
//!
//! Small, total helpers that cover the gap between `Option`'s built-in
//! adapters and the patterns that show up constantly in application code:
//!
//! - [`OptionExt`]: unwrap with a fallback, unwrap or surface an error,
//!   run a closure only when a value is present, and assign into an
//!   optional only when it is currently empty.
//! - [`CoalesceAssign`]: insert into a map only when the key is vacant
//!   and the source value is present. Never overwrites.
//! - [`NoneOrEmpty`] / [`IsEmpty`]: "is this absent, or present but
//!   zero-length?" for optional strings and collections.
//! - [`cmp`]: a none-first ordering that compares optionals against
//!   optionals and against bare values, with `None` strictly less than
//!   any present value.
//!
//! # Example
//!
//! ```
//! use optionals::{cmp, OptionExt, NoneOrEmpty};
//!
//! let name: Option<String> = None;
//! assert!(name.is_none_or_empty());
//! assert_eq!(name.unwrapped_or("anonymous".to_owned()), "anonymous");
//!
//! assert!(cmp::lt(None, 0));
//! assert!(cmp::lt(-1, Some(0)));
//! ```
//!
//! Every operation here is synchronous and total; the single failure
//! path is [`OptionExt::unwrapped_or_err`] (and its canned counterpart
//! [`OptionExt::require`]), which hands back the caller's error when the
//! value is absent.

pub mod cmp;
mod empty;
mod ext;
mod map;

pub use empty::{IsEmpty, NoneOrEmpty};
pub use ext::{MissingValueError, OptionExt};
pub use map::CoalesceAssign;
