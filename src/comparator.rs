//! Pluggable key orderings.
//!
//! A [`Comparator`] decides how a sorted map orders its keys. Comparators are
//! allowed to be *partial*: [`Comparator::compare`] returns `None` when two keys
//! cannot be ordered (for example `f64::NAN` under the natural order). A key
//! that cannot be ordered against itself is rejected by the map before any
//! tree traversal takes place.
//!
//! - [`NaturalOrder`]: the key type's own [`PartialOrd`] (the default)
//! - [`ReverseOrder`]: any comparator, reversed
//! - [`FnComparator`]: a total ordering given as a closure
//!
//! # Examples
//!
//! ```rust
//! use bstmap::comparator::{Comparator, FnComparator, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Some(Ordering::Less));
//! assert!(!NaturalOrder.is_comparable(&f64::NAN));
//!
//! let by_length = FnComparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_length.compare(&"ccc", &"a"), Some(Ordering::Greater));
//!
//! let descending = NaturalOrder.reversed();
//! assert_eq!(descending.compare(&1, &2), Some(Ordering::Greater));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An ordering strategy over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Compares two keys, returning `None` if they cannot be ordered.
    fn compare(&self, left: &K, right: &K) -> Option<Ordering>;

    /// Returns `true` if `key` compares equal to itself under this ordering.
    ///
    /// Keys failing this check are rejected by [`TreeMap`](crate::TreeMap)
    /// with [`MapError::IncompatibleKey`](crate::MapError::IncompatibleKey).
    #[inline]
    fn is_comparable(&self, key: &K) -> bool {
        self.compare(key, key) == Some(Ordering::Equal)
    }
}

/// Orders keys by their [`PartialOrd`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl NaturalOrder {
    /// Returns the descending natural order.
    #[inline]
    #[must_use]
    pub const fn reversed(self) -> ReverseOrder<Self> {
        ReverseOrder(self)
    }
}

impl<K: PartialOrd + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        left.partial_cmp(right)
    }
}

/// Reverses the ordering of the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder<C>(pub C);

impl<C> ReverseOrder<C> {
    /// Unwraps the reversed comparator, restoring the original order.
    #[inline]
    pub fn reversed(self) -> C {
        self.0
    }
}

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        self.0.compare(left, right).map(Ordering::reverse)
    }
}

/// A total ordering supplied as a closure.
///
/// # Examples
///
/// ```rust
/// use bstmap::TreeMap;
/// use bstmap::comparator::FnComparator;
///
/// let case_insensitive =
///     FnComparator::new(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
/// let mut map = TreeMap::with_comparator(case_insensitive);
/// map.put("Apple".to_string(), 1).unwrap();
///
/// assert_eq!(map.put("APPLE".to_string(), 2), Ok(Some(1)));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps `function` as a comparator.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns a comparator applying `function` with its result reversed.
    #[inline]
    pub const fn reversed(self) -> ReverseOrder<Self> {
        ReverseOrder(self)
    }
}

impl<K: ?Sized, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Option<Ordering> {
        Some((self.function)(left, right))
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnComparator")
    }
}
