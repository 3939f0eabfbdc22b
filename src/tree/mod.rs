//! Ordered map backed by an unbalanced binary search tree.
//!
//! This module provides [`TreeMap`], a mutable sorted map whose keys are
//! ordered by a pluggable [`Comparator`].
//!
//! # Overview
//!
//! The tree uses *sentinel leaves*: every empty position below an internal
//! node is an explicit external node, so every internal node always has two
//! children. Insertion expands the external node reached by the search into
//! an internal one; removal first reduces the doomed node to one with at most
//! one internal child (by moving its in-order successor's entry into it) and
//! then splices it out, promoting its remaining child.
//!
//! - O(h) get
//! - O(h) put
//! - O(h) remove
//! - O(n) in-order iteration
//! - O(1) len and `is_empty`
//!
//! where `h` is the height of the tree. The tree never rebalances, so `h` is
//! `O(log n)` for random insertion orders but degrades to `n` when keys arrive
//! sorted.
//!
//! # Examples
//!
//! ```rust
//! use bstmap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.put(5, "Hello")?;
//! map.put(3, "Hi")?;
//!
//! assert_eq!(map.get(&3)?, Some(&"Hi"));
//! assert_eq!(map.get(&4)?, None);
//!
//! assert_eq!(map.put(3, "Bye")?, Some("Hi"));
//! assert_eq!(map.remove(&5)?, Some("Hello"));
//!
//! let entries: Vec<(&i32, &&str)> = map.iter().collect();
//! assert_eq!(entries, vec![(&3, &"Bye")]);
//! # Ok::<(), bstmap::MapError>(())
//! ```

mod node;
mod traversal;
mod validate;

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::{debug, warn};

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::MapError;
use crate::map::{Entry, Map, SortedMap};

use node::{NodeId, NodeStore};
pub use traversal::{IntoIter, Iter};
pub use validate::InvariantViolation;

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map based on an unbalanced binary search tree.
///
/// Keys are ordered by the comparator `C`, which defaults to
/// [`NaturalOrder`]. Every keyed operation first checks that the comparator
/// can order the key against itself and fails with
/// [`MapError::IncompatibleKey`] otherwise.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `get`          | O(h)       |
/// | `put`          | O(h)       |
/// | `remove`       | O(h)       |
/// | `first_entry`  | O(h)       |
/// | `last_entry`   | O(h)       |
/// | `entry_set`    | O(n)       |
/// | `len`          | O(1)       |
///
/// # Examples
///
/// ```rust
/// use bstmap::TreeMap;
/// use bstmap::comparator::NaturalOrder;
///
/// let mut descending = TreeMap::with_comparator(NaturalOrder.reversed());
/// for key in [2, 9, 4] {
///     descending.put(key, key * 10).unwrap();
/// }
///
/// let keys: Vec<&i32> = descending.keys().collect();
/// assert_eq!(keys, vec![&9, &4, &2]);
/// ```
#[derive(Clone)]
pub struct TreeMap<K, V, C = NaturalOrder> {
    /// Arena holding every node, internal and external, plus the root handle
    store: NodeStore<K, V>,
    /// Number of internal nodes
    length: usize,
    comparator: C,
}

impl<K, V> TreeMap<K, V> {
    /// Creates an empty map ordered by the keys' natural order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            store: NodeStore::new(),
            length: 0,
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Alias of [`len`](Self::len), matching the [`Map`] contract.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the comparator ordering this map's keys.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every entry, keeping the comparator.
    pub fn clear(&mut self) {
        self.store = NodeStore::new();
        self.length = 0;
    }

    /// Returns the number of internal nodes on the longest path from the root.
    ///
    /// The tree does not rebalance, so inserting keys in sorted order yields a
    /// height equal to [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::TreeMap;
    ///
    /// let sorted: TreeMap<i32, ()> = (0..16).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.height(), 16);
    ///
    /// let balanced: TreeMap<i32, ()> = [4, 2, 6, 1, 3, 5, 7].map(|key| (key, ())).into_iter().collect();
    /// assert_eq!(balanced.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        traversal::height(&self.store)
    }

    /// Returns an iterator over the entries in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.store, self.length)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns every entry in ascending key order.
    ///
    /// The result is a snapshot: it is materialised by one in-order walk and
    /// does not track later changes to the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::{Entry, TreeMap};
    ///
    /// let mut map = TreeMap::new();
    /// map.put(5, "Hello").unwrap();
    /// map.put(3, "Hi").unwrap();
    ///
    /// assert_eq!(map.entry_set(), vec![Entry::new(&3, &"Hi"), Entry::new(&5, &"Hello")]);
    /// ```
    #[must_use]
    pub fn entry_set(&self) -> Vec<Entry<&K, &V>> {
        self.iter().map(Entry::from).collect()
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_entry(&self) -> Option<Entry<&K, &V>> {
        self.extreme_entry(NodeStore::subtree_min)
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_entry(&self) -> Option<Entry<&K, &V>> {
        self.extreme_entry(NodeStore::subtree_max)
    }

    fn extreme_entry(
        &self,
        descend: fn(&NodeStore<K, V>, NodeId) -> NodeId,
    ) -> Option<Entry<&K, &V>> {
        let root = self.store.root();
        if self.store.is_external(root) {
            return None;
        }
        self.store.entry(descend(&self.store, root)).map(Entry::from)
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Rejects keys the comparator cannot order against themselves.
    fn check_key(&self, key: &K) -> Result<(), MapError> {
        if self.comparator.is_comparable(key) {
            Ok(())
        } else {
            warn!("rejected key that does not compare equal to itself");
            Err(MapError::IncompatibleKey)
        }
    }

    /// Returns the internal node holding `key`, or the external node where
    /// `key` would be inserted.
    fn tree_search(&self, key: &K) -> Result<NodeId, MapError> {
        let mut current = self.store.root();
        loop {
            let node = self.store.node(current);
            let (Some((node_key, _)), Some((left, right))) = (&node.entry, node.children())
            else {
                return Ok(current);
            };
            match self.comparator.compare(key, node_key) {
                Some(Ordering::Equal) => return Ok(current),
                Some(Ordering::Less) => current = left,
                Some(Ordering::Greater) => current = right,
                None => {
                    warn!("comparator could not order key against stored key at {current:?}");
                    return Err(MapError::IncompatibleKey);
                }
            }
        }
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the comparator cannot order
    /// `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::{MapError, TreeMap};
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1.5, "one and a half").unwrap();
    ///
    /// assert_eq!(map.get(&1.5), Ok(Some(&"one and a half")));
    /// assert_eq!(map.get(&2.0), Ok(None));
    /// assert_eq!(map.get(&f64::NAN), Err(MapError::IncompatibleKey));
    /// ```
    pub fn get(&self, key: &K) -> Result<Option<&V>, MapError> {
        self.check_key(key)?;
        let position = self.tree_search(key)?;
        Ok(self.store.entry(position).map(|(_, value)| value))
    }

    /// Returns `true` if the map holds an entry for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the comparator cannot order
    /// `key`.
    pub fn contains_key(&self, key: &K) -> Result<bool, MapError> {
        self.get(key).map(|value| value.is_some())
    }

    /// Associates `value` with `key`.
    ///
    /// Returns the previous value if `key` was already present, in which case
    /// the value is replaced in place and the length is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the comparator cannot order
    /// `key`; the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.put(3, "Hi"), Ok(None));
    /// assert_eq!(map.put(3, "Bye"), Ok(Some("Hi")));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        self.check_key(&key)?;
        let position = self.tree_search(&key)?;
        match self.store.value_mut(position) {
            Some(slot) => Ok(Some(std::mem::replace(slot, value))),
            None => {
                self.store.expand_external(position, key, value);
                self.length += 1;
                Ok(None)
            }
        }
    }

    /// Removes the entry for `key`, returning its value if it was present.
    ///
    /// Removing an absent key leaves the map untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::IncompatibleKey`] if the comparator cannot order
    /// `key`; the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bstmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = [5, 3, 8, 7, 9].map(|key| (key, key)).into_iter().collect();
    ///
    /// assert_eq!(map.remove(&5), Ok(Some(5)));
    /// assert_eq!(map.remove(&5), Ok(None));
    ///
    /// let keys: Vec<&i32> = map.keys().collect();
    /// assert_eq!(keys, vec![&3, &7, &8, &9]);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<Option<V>, MapError> {
        self.check_key(key)?;
        let position = self.tree_search(key)?;
        Ok(self.remove_at(position))
    }

    /// Removes the internal node `position` from the tree.
    ///
    /// If both children are internal, the successor's entry is moved into
    /// `position` and the successor (which has an external left child) is
    /// removed instead. The removal itself splices out one external child and
    /// then the node, promoting the other child into its place.
    fn remove_at(&mut self, position: NodeId) -> Option<V> {
        let (left, right) = self.store.node(position).children()?;

        let target = if self.store.is_internal(left) && self.store.is_internal(right) {
            let successor = self.store.subtree_min(right);
            debug!("promoting successor {successor:?} into {position:?}");
            self.store.swap_entries(position, successor);
            successor
        } else {
            position
        };

        let (left, right) = self.store.node(target).children()?;
        let leaf = if self.store.is_external(left) {
            left
        } else {
            right
        };
        self.store.splice_out(leaf);
        let (_, value) = self.store.splice_out(target)?;
        self.length -= 1;
        Some(value)
    }

    /// Verifies the tree's structural invariants.
    ///
    /// Checks that every node has zero or two children, that entries sit
    /// exactly on internal nodes, that parent links mirror child links, that
    /// in-order keys are strictly ascending under the comparator and that the
    /// recorded length matches the number of internal nodes.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        validate::check(&self.store, &self.comparator, self.length)
    }
}

// =============================================================================
// Map Contract Implementations
// =============================================================================

impl<K, V, C: Comparator<K>> Map<K, V> for TreeMap<K, V, C> {
    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    fn get(&self, key: &K) -> Result<Option<&V>, MapError> {
        Self::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Result<Option<V>, MapError> {
        Self::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Result<Option<V>, MapError> {
        Self::remove(self, key)
    }

    fn entry_set(&self) -> Vec<Entry<&K, &V>> {
        Self::entry_set(self)
    }
}

impl<K, V, C: Comparator<K>> SortedMap<K, V> for TreeMap<K, V, C> {
    type Comparator = C;

    fn comparator(&self) -> &C {
        &self.comparator
    }

    fn first_entry(&self) -> Option<Entry<&K, &V>> {
        Self::first_entry(self)
    }

    fn last_entry(&self) -> Option<Entry<&K, &V>> {
        Self::last_entry(self)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for TreeMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    /// Puts every pair in turn. Keys the comparator cannot order are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if self.put(key, value).is_err() {
                warn!("skipped incomparable key while extending map");
            }
        }
    }
}

impl<K: PartialOrd, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store)
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(TreeMap<i32, String>: Send, Sync, Clone, Default);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for TreeMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct TreeMapVisitor<K, V, C> {
    marker: std::marker::PhantomData<fn() -> TreeMap<K, V, C>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::de::Visitor<'de> for TreeMapVisitor<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = TreeMap<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = TreeMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value)
                .map_err(<A::Error as serde::de::Error>::custom)?;
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for TreeMap<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn from_keys(keys: &[i32]) -> TreeMap<i32, i32> {
        keys.iter().map(|&key| (key, key * 10)).collect()
    }

    /// Pre-order walk over every node, `None` marking a sentinel.
    fn shape(map: &TreeMap<i32, i32>) -> Vec<Option<i32>> {
        let mut shape = Vec::new();
        let mut stack = vec![map.store.root()];
        while let Some(id) = stack.pop() {
            let node = map.store.node(id);
            shape.push(node.entry.as_ref().map(|(key, _)| *key));
            if let Some((left, right)) = node.children() {
                stack.push(right);
                stack.push(left);
            }
        }
        shape
    }

    #[rstest]
    fn test_new_map_has_external_root() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert!(map.store.is_external(map.store.root()));
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_tree_search_returns_insertion_point() {
        let map = from_keys(&[5, 3, 8]);
        let position = map.tree_search(&4).unwrap();
        assert!(map.store.is_external(position));
        let parent = map.store.node(position).parent.unwrap();
        assert_eq!(map.store.entry(parent), Some((&3, &30)));
        assert_eq!(map.store.node(parent).right, Some(position));
    }

    #[rstest]
    fn test_tree_search_finds_internal_node() {
        let map = from_keys(&[5, 3, 8]);
        let position = map.tree_search(&8).unwrap();
        assert_eq!(map.store.entry(position), Some((&8, &80)));
    }

    #[rstest]
    fn test_remove_with_two_internal_children_promotes_successor_in_place() {
        let mut map = from_keys(&[5, 3, 8, 7, 9]);
        let root = map.store.root();

        assert_eq!(map.remove(&5), Ok(Some(50)));

        assert_eq!(map.store.root(), root);
        assert_eq!(map.store.entry(root), Some((&7, &70)));
        let keys: Vec<i32> = map.keys().copied().collect();
        assert_eq!(keys, vec![3, 7, 8, 9]);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_remove_root_with_one_internal_child_promotes_child() {
        let mut map = from_keys(&[5, 8, 7]);
        let (_, right) = map.store.node(map.store.root()).children().unwrap();

        assert_eq!(map.remove(&5), Ok(Some(50)));

        assert_eq!(map.store.root(), right);
        assert_eq!(map.store.node(right).parent, None);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_remove_last_entry_leaves_single_sentinel() {
        let mut map = from_keys(&[1]);
        assert_eq!(map.remove(&1), Ok(Some(10)));
        assert!(map.store.is_external(map.store.root()));
        assert_eq!(map.store.live_nodes(), 1);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    #[case(&[5, 3, 8, 7, 9], 3)]
    #[case(&[5, 3, 8, 7, 9], 8)]
    #[case(&[5, 3, 8, 7, 9], 9)]
    #[case(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65], 30)]
    #[case(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65], 70)]
    #[case(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65], 50)]
    fn test_remove_keeps_invariants(#[case] keys: &[i32], #[case] removed: i32) {
        let mut map = from_keys(keys);
        assert_eq!(map.remove(&removed), Ok(Some(removed * 10)));
        assert_eq!(map.len(), keys.len() - 1);
        assert_eq!(map.get(&removed), Ok(None));
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_removed_nodes_are_released() {
        let mut map = from_keys(&[5, 3, 8, 7, 9]);
        for key in [5, 3, 8, 7, 9] {
            map.remove(&key).unwrap();
        }
        assert_eq!(map.store.live_nodes(), 1);
    }

    #[rstest]
    #[case(&[], 1)]
    #[case(&[5, 3, 8, 7, 9], 6)]
    #[case(&[5, 3, 8, 7, 9], 10)]
    #[case(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65], 33)]
    #[case(&[1, 2, 3, 4, 5], 0)]
    fn test_remove_absent_key_keeps_shape(#[case] keys: &[i32], #[case] absent: i32) {
        let mut map = from_keys(keys);
        let before = shape(&map);
        let nodes = map.store.live_nodes();

        assert_eq!(map.remove(&absent), Ok(None));

        assert_eq!(shape(&map), before);
        assert_eq!(map.store.live_nodes(), nodes);
        assert_eq!(map.len(), keys.len());
    }

    #[rstest]
    fn test_shape_sees_restructuring_at_equal_height() {
        let left_leaning = from_keys(&[2, 1, 3, 0]);
        let right_leaning = from_keys(&[2, 1, 3, 4]);
        assert_eq!(left_leaning.height(), right_leaning.height());
        assert_ne!(shape(&left_leaning), shape(&right_leaning));
        assert_eq!(
            shape(&from_keys(&[2, 1, 3])),
            vec![Some(2), Some(1), None, None, Some(3), None, None]
        );
    }

    #[rstest]
    fn test_put_rejects_nan_without_mutation() {
        let mut map = TreeMap::new();
        map.put(1.0, "one").unwrap();
        assert_eq!(map.put(f64::NAN, "nan"), Err(MapError::IncompatibleKey));
        assert_eq!(map.len(), 1);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_display_multiple_elements_sorted() {
        let map = from_keys(&[2, 1, 3]);
        assert_eq!(format!("{map}"), "{1: 10, 2: 20, 3: 30}");
    }

    #[rstest]
    fn test_display_empty() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    #[rstest]
    fn test_debug_format() {
        let map = from_keys(&[2, 1]);
        assert_eq!(format!("{map:?}"), "{1: 10, 2: 20}");
    }

    mod shape_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_remove_absent_keeps_shape(
                keys in prop::collection::vec(-64_i32..64, 0..48),
                absent in -64_i32..64,
            ) {
                let mut map = from_keys(&keys);
                map.remove(&absent).unwrap();
                let before = shape(&map);

                prop_assert_eq!(map.remove(&absent), Ok(None));
                prop_assert_eq!(shape(&map), before);
            }

            #[test]
            fn prop_overwrite_keeps_shape(
                keys in prop::collection::vec(-64_i32..64, 1..48),
                index in any::<prop::sample::Index>(),
            ) {
                let mut map = from_keys(&keys);
                let before = shape(&map);
                let key = keys[index.index(keys.len())];

                prop_assert_eq!(map.put(key, -1), Ok(Some(key * 10)));
                prop_assert_eq!(shape(&map), before);
            }
        }
    }
}
