//! Coalescing assignment into maps.
//!
//! `coalesce_assign(key, value)` is the map analogue of
//! [`assign_if_none`](crate::OptionExt::assign_if_none): it fills a
//! vacant key from a present source and otherwise leaves the map alone.
//! An occupied entry is never overwritten, no matter how many present
//! sources arrive after it.

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Vacancy-only insertion from an optional source.
pub trait CoalesceAssign<K, V> {
    /// Inserts `value` at `key` only when the key is vacant and the
    /// source is present. Returns whether an insert happened.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use optionals::CoalesceAssign;
    ///
    /// let mut headers: HashMap<&str, &str> = HashMap::new();
    /// assert!(!headers.coalesce_assign("accept", None));
    /// assert!(headers.coalesce_assign("accept", "text/html"));
    /// assert!(!headers.coalesce_assign("accept", "application/json"));
    /// assert_eq!(headers["accept"], "text/html");
    /// ```
    fn coalesce_assign(&mut self, key: K, value: impl Into<Option<V>>) -> bool;
}

impl<K: Eq + Hash, V, S: BuildHasher> CoalesceAssign<K, V> for HashMap<K, V, S> {
    fn coalesce_assign(&mut self, key: K, value: impl Into<Option<V>>) -> bool {
        let Some(value) = value.into() else {
            return false;
        };
        match self.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K: Ord, V> CoalesceAssign<K, V> for BTreeMap<K, V> {
    fn coalesce_assign(&mut self, key: K, value: impl Into<Option<V>>) -> bool {
        let Some(value) = value.into() else {
            return false;
        };
        match self.entry(key) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}
