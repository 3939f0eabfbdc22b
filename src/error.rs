//! Error types for map operations.
//!
//! The only failure a map operation can report is a key that the map's
//! comparator cannot order. A missing key is not an error: lookups and
//! removals report it as `Ok(None)`.

/// Represents errors that can occur when operating on a map.
///
/// # Examples
///
/// ```rust
/// use bstmap::{MapError, TreeMap};
///
/// let mut map: TreeMap<f64, &str> = TreeMap::new();
/// assert_eq!(map.put(f64::NAN, "nan"), Err(MapError::IncompatibleKey));
/// assert_eq!(
///     format!("{}", MapError::IncompatibleKey),
///     "Incompatible key: the comparator cannot order this key"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapError {
    /// The comparator could not order the supplied key, either against itself
    /// or against a key already stored in the map.
    IncompatibleKey,
}

impl std::fmt::Display for MapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompatibleKey => write!(
                formatter,
                "Incompatible key: the comparator cannot order this key"
            ),
        }
    }
}

impl std::error::Error for MapError {}
