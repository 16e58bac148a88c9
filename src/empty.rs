//! Emptiness checks for optional strings and collections.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Types with a zero-length state.
///
/// Mirrors the inherent `is_empty` found on std strings and collections
/// so that [`NoneOrEmpty`] can abstract over them.
pub trait IsEmpty {
    /// Whether the value has zero length.
    fn is_empty(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty(&self) -> bool {
        T::is_empty(self)
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

/// Absence-or-emptiness predicate for optionals.
pub trait NoneOrEmpty {
    /// True when the optional is `None`, or `Some` of a zero-length
    /// value.
    ///
    /// ```
    /// use optionals::NoneOrEmpty;
    ///
    /// let missing: Option<Vec<i32>> = None;
    /// let empty: Option<Vec<i32>> = Some(vec![]);
    /// let filled: Option<Vec<i32>> = Some(vec![1]);
    /// assert!(missing.is_none_or_empty());
    /// assert!(empty.is_none_or_empty());
    /// assert!(!filled.is_none_or_empty());
    /// ```
    fn is_none_or_empty(&self) -> bool;
}

impl<C: IsEmpty> NoneOrEmpty for Option<C> {
    fn is_none_or_empty(&self) -> bool {
        match self {
            Some(value) => value.is_empty(),
            None => true,
        }
    }
}
