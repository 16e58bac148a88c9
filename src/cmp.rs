//! None-first ordering over optionals and bare values.
//!
//! Absence sorts strictly below any present value; two present values
//! compare by the inner type's ordering. The [`NoneFirstOrd`] trait has
//! one impl per operand shape — optional vs optional, optional vs bare,
//! and bare vs optional — so each call resolves to exactly one rule and
//! the inner type stays inferable.
//!
//! The rule agrees with the std derivation of `Ord` for `Option` (where
//! `None < Some(_)`); the bare-operand impls exist so the comparison can
//! be written against plain values without wrapping at the call site.
//!
//! ```
//! use optionals::cmp;
//!
//! let minus_one: Option<i32> = Some(-1);
//! let none: Option<i32> = None;
//! assert!(cmp::lt(minus_one, 0));
//! assert!(cmp::lt(none, minus_one));
//! assert!(!cmp::lt(minus_one, none));
//! ```

use std::cmp::Ordering;

/// Comparison with `None` as the minimum, one impl per operand shape.
pub trait NoneFirstOrd<Rhs> {
    /// Compares `self` against `other` under the none-first rule.
    fn none_first_cmp(&self, other: &Rhs) -> Ordering;
}

impl<T: Ord> NoneFirstOrd<Option<T>> for Option<T> {
    fn none_first_cmp(&self, other: &Option<T>) -> Ordering {
        match (self, other) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl<T: Ord> NoneFirstOrd<T> for Option<T> {
    fn none_first_cmp(&self, other: &T) -> Ordering {
        match self {
            Some(a) => a.cmp(other),
            None => Ordering::Less,
        }
    }
}

impl<T: Ord> NoneFirstOrd<Option<T>> for T {
    fn none_first_cmp(&self, other: &Option<T>) -> Ordering {
        match other {
            Some(b) => self.cmp(b),
            None => Ordering::Greater,
        }
    }
}

/// Compares two operands with `None` as the minimum.
pub fn compare<A, B>(a: A, b: B) -> Ordering
where
    A: NoneFirstOrd<B>,
{
    a.none_first_cmp(&b)
}

/// `a < b` under the none-first ordering.
pub fn lt<A, B>(a: A, b: B) -> bool
where
    A: NoneFirstOrd<B>,
{
    compare(a, b) == Ordering::Less
}

/// `a <= b` under the none-first ordering.
pub fn le<A, B>(a: A, b: B) -> bool
where
    A: NoneFirstOrd<B>,
{
    compare(a, b) != Ordering::Greater
}

/// `a > b` under the none-first ordering.
pub fn gt<A, B>(a: A, b: B) -> bool
where
    A: NoneFirstOrd<B>,
{
    compare(a, b) == Ordering::Greater
}

/// `a >= b` under the none-first ordering.
pub fn ge<A, B>(a: A, b: B) -> bool
where
    A: NoneFirstOrd<B>,
{
    compare(a, b) != Ordering::Less
}

#[cfg(test)]
mod tests;
