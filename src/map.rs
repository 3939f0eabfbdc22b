//! The generic map contract.
//!
//! [`Map`] is the calling contract shared by every map backend: `get`, `put`,
//! `remove`, `entry_set` and `size`. [`SortedMap`] extends it with the
//! operations that only make sense when keys are ordered by a
//! [`Comparator`]. [`Entry`] is the key/value pair those operations hand out.
//!
//! Code written against these traits works with any backend; see the
//! contract tests in `tests/map_contract.rs`.
//!
//! # Examples
//!
//! ```rust
//! use bstmap::{Map, MapError, TreeMap};
//!
//! fn greet<M: Map<i32, String>>(map: &mut M) -> Result<(), MapError> {
//!     map.put(5, "Hello".to_string())?;
//!     map.put(3, "Hi".to_string())?;
//!     Ok(())
//! }
//!
//! let mut map = TreeMap::new();
//! greet(&mut map).unwrap();
//! assert_eq!(Map::size(&map), 2);
//! assert_eq!(map.key_set(), vec![&3, &5]);
//! ```

use std::fmt;

use crate::comparator::Comparator;
use crate::error::MapError;

// =============================================================================
// Entry
// =============================================================================

/// A key/value pair stored in (or read from) a map.
///
/// Maps hand out `Entry<&K, &V>` views of their contents; use
/// [`Entry::cloned`] to obtain an owned copy.
///
/// # Examples
///
/// ```rust
/// use bstmap::Entry;
///
/// let entry = Entry::new(3, "three");
/// assert_eq!(entry.key(), &3);
/// assert_eq!(entry.value(), &"three");
/// assert_eq!(format!("{entry}"), "3=three");
/// assert_eq!(entry.into_parts(), (3, "three"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry from a key and a value.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key stored in this entry.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value stored in this entry.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Consumes the entry, returning its key.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }

    /// Consumes the entry, returning its value.
    #[inline]
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K: Clone, V: Clone> Entry<&K, &V> {
    /// Clones the borrowed key and value into an owned entry.
    #[must_use]
    pub fn cloned(&self) -> Entry<K, V> {
        Entry::new(self.key.clone(), self.value.clone())
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}={}", self.key, self.value)
    }
}

// =============================================================================
// Map Contracts
// =============================================================================

/// The calling contract shared by all map backends.
///
/// Every keyed operation may fail with [`MapError::IncompatibleKey`] when the
/// backend cannot use the key; a key that is merely absent is reported as
/// `Ok(None)`.
pub trait Map<K, V> {
    /// Returns the number of entries in the map.
    fn size(&self) -> usize;

    /// Returns the value associated with `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the key cannot be used.
    fn get(&self, key: &K) -> Result<Option<&V>, MapError>;

    /// Associates `value` with `key`, returning the previous value if the key
    /// was already present.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the key cannot be used.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError>;

    /// Removes the entry for `key`, returning its value if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the key cannot be used.
    fn remove(&mut self, key: &K) -> Result<Option<V>, MapError>;

    /// Returns a snapshot of every entry in the map.
    fn entry_set(&self) -> Vec<Entry<&K, &V>>;

    /// Returns `true` if the map holds no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns `true` if the map holds an entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the key cannot be used.
    fn contains_key(&self, key: &K) -> Result<bool, MapError> {
        self.get(key).map(|value| value.is_some())
    }

    /// Returns a snapshot of every key, in `entry_set` order.
    fn key_set<'a>(&'a self) -> Vec<&'a K>
    where
        V: 'a,
    {
        self.entry_set().into_iter().map(Entry::into_key).collect()
    }

    /// Returns a snapshot of every value, in `entry_set` order.
    fn values<'a>(&'a self) -> Vec<&'a V>
    where
        K: 'a,
    {
        self.entry_set().into_iter().map(Entry::into_value).collect()
    }
}

/// A [`Map`] whose entries are kept in the order defined by a [`Comparator`].
///
/// `entry_set` of a sorted map yields entries in strictly ascending key order.
pub trait SortedMap<K, V>: Map<K, V> {
    /// The ordering used for keys.
    type Comparator: Comparator<K>;

    /// Returns the comparator that orders this map's keys.
    fn comparator(&self) -> &Self::Comparator;

    /// Returns the entry with the smallest key.
    fn first_entry(&self) -> Option<Entry<&K, &V>>;

    /// Returns the entry with the largest key.
    fn last_entry(&self) -> Option<Entry<&K, &V>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_entry_accessors() {
        let entry = Entry::new(5, "Hello".to_string());
        assert_eq!(entry.key(), &5);
        assert_eq!(entry.value(), "Hello");
    }

    #[rstest]
    fn test_entry_tuple_conversions() {
        let entry: Entry<i32, &str> = (1, "one").into();
        let tuple: (i32, &str) = entry.into();
        assert_eq!(tuple, (1, "one"));
    }

    #[rstest]
    fn test_entry_cloned() {
        let key = 7;
        let value = "seven".to_string();
        let borrowed = Entry::new(&key, &value);
        assert_eq!(borrowed.cloned(), Entry::new(7, "seven".to_string()));
    }

    #[rstest]
    fn test_entry_display() {
        assert_eq!(Entry::new(3, "Bye").to_string(), "3=Bye");
    }

    #[rstest]
    fn test_entry_equality_compares_key_and_value() {
        assert_eq!(Entry::new(1, "a"), Entry::new(1, "a"));
        assert_ne!(Entry::new(1, "a"), Entry::new(1, "b"));
        assert_ne!(Entry::new(1, "a"), Entry::new(2, "a"));
    }
}
