//! Unwrapping helpers, presence-gated execution, and conditional
//! self-assignment for [`Option`].
//!
//! The two assignment-flavored helpers accept `impl Into<Option<T>>` on
//! the right-hand side, so both bare values and optionals work without
//! wrapping at the call site.

use thiserror::Error;

/// The absent case of [`OptionExt::require`].
///
/// A canned error for callers that need *an* error on absence but do not
/// care which one; use [`OptionExt::unwrapped_or_err`] to surface a
/// domain error instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required value was absent")]
pub struct MissingValueError;

/// Convenience extensions on [`Option`].
pub trait OptionExt<T> {
    /// Returns the held value, or `default` when absent.
    ///
    /// ```
    /// use optionals::OptionExt;
    ///
    /// let set: Option<&str> = Some("configured");
    /// let unset: Option<&str> = None;
    /// assert_eq!(set.unwrapped_or("fallback"), "configured");
    /// assert_eq!(unset.unwrapped_or("fallback"), "fallback");
    /// ```
    fn unwrapped_or(self, default: T) -> T;

    /// Returns the held value, or `Err(error)` when absent.
    ///
    /// The error value passes through unchanged; nothing is retried or
    /// recovered here.
    fn unwrapped_or_err<E>(self, error: E) -> Result<T, E>;

    /// Returns the held value, or [`MissingValueError`] when absent.
    fn require(self) -> Result<T, MissingValueError>;

    /// Invokes `action` exactly once with the held value; does nothing
    /// when absent.
    fn run_if_present<F: FnOnce(T)>(self, action: F);

    /// Sets `self` to `value` only when `self` is currently `None`.
    ///
    /// A held value is never overwritten, even by `None`. The right-hand
    /// side may be a bare value or an optional:
    ///
    /// ```
    /// use optionals::OptionExt;
    ///
    /// let mut slot: Option<i32> = None;
    /// slot.assign_if_none(1);
    /// slot.assign_if_none(2);
    /// assert_eq!(slot, Some(1));
    /// ```
    fn assign_if_none(&mut self, value: impl Into<Option<T>>);
}

impl<T> OptionExt<T> for Option<T> {
    fn unwrapped_or(self, default: T) -> T {
        self.unwrap_or(default)
    }

    fn unwrapped_or_err<E>(self, error: E) -> Result<T, E> {
        self.ok_or(error)
    }

    fn require(self) -> Result<T, MissingValueError> {
        self.ok_or(MissingValueError)
    }

    fn run_if_present<F: FnOnce(T)>(self, action: F) {
        if let Some(value) = self {
            action(value);
        }
    }

    fn assign_if_none(&mut self, value: impl Into<Option<T>>) {
        if self.is_none() {
            *self = value.into();
        }
    }
}
