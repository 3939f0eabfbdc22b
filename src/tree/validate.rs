//! Structural self-checks for [`TreeMap`](crate::TreeMap).

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use super::node::{NodeId, NodeStore};
use super::traversal::in_order_ids;
use crate::comparator::Comparator;

/// A broken tree invariant reported by
/// [`TreeMap::check_invariants`](crate::TreeMap::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node has exactly one child.
    HalfNode,
    /// An internal node without an entry, or an external node with one.
    EntryMismatch,
    /// A child's parent link does not point back at its parent, or the root
    /// has a parent.
    BrokenParentLink,
    /// Two in-order neighbours are not strictly ascending.
    OutOfOrder,
    /// The recorded length differs from the number of internal nodes.
    LengthMismatch {
        /// Length recorded by the map.
        recorded: usize,
        /// Internal nodes actually reachable from the root.
        counted: usize,
    },
    /// The arena holds nodes that are not reachable from the root.
    LeakedNodes {
        /// Nodes reachable from the root.
        reachable: usize,
        /// Nodes alive in the arena.
        allocated: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HalfNode => write!(formatter, "node with exactly one child"),
            Self::EntryMismatch => write!(formatter, "entry presence does not match node kind"),
            Self::BrokenParentLink => write!(formatter, "parent link does not match child link"),
            Self::OutOfOrder => write!(formatter, "keys are not strictly ascending in order"),
            Self::LengthMismatch { recorded, counted } => write!(
                formatter,
                "recorded length {recorded} but found {counted} internal nodes"
            ),
            Self::LeakedNodes {
                reachable,
                allocated,
            } => write!(
                formatter,
                "{allocated} nodes allocated but only {reachable} reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Checks shape, linkage, ordering and bookkeeping of a whole tree.
pub(crate) fn check<K, V, C>(
    store: &NodeStore<K, V>,
    comparator: &C,
    recorded_length: usize,
) -> Result<(), InvariantViolation>
where
    C: Comparator<K>,
{
    let root = store.root();
    if store.node(root).parent.is_some() {
        return Err(InvariantViolation::BrokenParentLink);
    }

    let mut reachable = 0;
    let mut internal = 0;
    let mut stack: SmallVec<[NodeId; 32]> = SmallVec::new();
    stack.push(root);
    while let Some(id) = stack.pop() {
        reachable += 1;
        let node = store.node(id);
        match (node.left, node.right) {
            (Some(left), Some(right)) => {
                if node.entry.is_none() {
                    return Err(InvariantViolation::EntryMismatch);
                }
                if store.node(left).parent != Some(id) || store.node(right).parent != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink);
                }
                internal += 1;
                stack.push(left);
                stack.push(right);
            }
            (None, None) => {
                if node.entry.is_some() {
                    return Err(InvariantViolation::EntryMismatch);
                }
            }
            _ => return Err(InvariantViolation::HalfNode),
        }
    }

    if internal != recorded_length {
        return Err(InvariantViolation::LengthMismatch {
            recorded: recorded_length,
            counted: internal,
        });
    }
    let allocated = store.live_nodes();
    if allocated != reachable {
        return Err(InvariantViolation::LeakedNodes {
            reachable,
            allocated,
        });
    }

    // Strictly ascending in-order keys is equivalent to the subtree ordering
    // property for every internal node.
    let keys: Vec<&K> = in_order_ids(store)
        .into_iter()
        .filter_map(|id| store.entry(id).map(|(key, _)| key))
        .collect();
    let ascending = keys
        .windows(2)
        .all(|pair| comparator.compare(pair[0], pair[1]) == Some(Ordering::Less));
    if ascending {
        Ok(())
    } else {
        Err(InvariantViolation::OutOfOrder)
    }
}
