//! # bstmap
//!
//! An ordered map backed by a plain (unbalanced) binary search tree.
//!
//! ## Overview
//!
//! - **[`TreeMap`]**: the sorted map. Nodes live in an arena and are linked by
//!   index handles; empty positions are explicit sentinel leaves, so every
//!   internal node always has two children.
//! - **Comparators**: keys are ordered by a pluggable
//!   [`Comparator`](comparator::Comparator), defaulting to the key type's
//!   natural order. Keys the comparator cannot order (such as `f64::NAN`) are
//!   rejected with [`MapError::IncompatibleKey`].
//! - **Map contract**: [`Map`] and [`SortedMap`] describe the
//!   `get`/`put`/`remove`/`entry_set` calling contract independently of the
//!   backing structure.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TreeMap`]
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! The crate reports through the [`log`] facade: structural changes at
//! `trace` level, successor promotions at `debug` level and rejected keys at
//! `warn` level. No logger is installed by the library.
//!
//! ## Example
//!
//! ```rust
//! use bstmap::prelude::*;
//!
//! let mut map = TreeMap::new();
//! map.put(5, "Hello".to_string())?;
//! map.put(3, "Hi".to_string())?;
//!
//! assert_eq!(map.put(3, "Bye".to_string())?, Some("Hi".to_string()));
//! assert_eq!(map.remove(&5)?, Some("Hello".to_string()));
//! assert_eq!(map.entry_set(), vec![Entry::new(&3, &"Bye".to_string())]);
//! # Ok::<(), MapError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bstmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
    pub use crate::error::MapError;
    pub use crate::map::{Entry, Map, SortedMap};
    pub use crate::tree::TreeMap;
}

pub mod comparator;
mod error;
mod map;
mod tree;

pub use error::MapError;
pub use map::{Entry, Map, SortedMap};
pub use tree::{IntoIter, InvariantViolation, Iter, TreeMap};
