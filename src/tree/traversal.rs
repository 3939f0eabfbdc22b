//! In-order traversal of the tree.
//!
//! Walks are driven by an explicit stack rather than recursion: the tree is
//! never rebalanced, so sorted insertion produces a path as deep as the map is
//! long.

use smallvec::SmallVec;

use super::node::{NodeId, NodeStore};

/// Inline stack capacity; deeper trees spill to the heap.
const STACK_INLINE: usize = 32;

type NodeStack = SmallVec<[NodeId; STACK_INLINE]>;

/// Pushes `id` and every internal node along its left spine.
fn push_left_spine<K, V>(store: &NodeStore<K, V>, stack: &mut NodeStack, mut id: NodeId) {
    while let Some((left, _)) = store.node(id).children() {
        stack.push(id);
        id = left;
    }
}

/// Returns the handles of all internal nodes, in ascending key order.
pub(crate) fn in_order_ids<K, V>(store: &NodeStore<K, V>) -> Vec<NodeId> {
    let mut ordered = Vec::new();
    let mut stack = NodeStack::new();
    push_left_spine(store, &mut stack, store.root());
    while let Some(id) = stack.pop() {
        ordered.push(id);
        if let Some((_, right)) = store.node(id).children() {
            push_left_spine(store, &mut stack, right);
        }
    }
    ordered
}

/// Number of internal nodes on the longest root-to-leaf path.
pub(crate) fn height<K, V>(store: &NodeStore<K, V>) -> usize {
    let mut deepest = 0;
    let mut stack: SmallVec<[(NodeId, usize); STACK_INLINE]> = SmallVec::new();
    stack.push((store.root(), 0));
    while let Some((id, depth)) = stack.pop() {
        match store.node(id).children() {
            Some((left, right)) => {
                stack.push((left, depth + 1));
                stack.push((right, depth + 1));
            }
            None => deepest = deepest.max(depth),
        }
    }
    deepest
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A borrowing iterator over the entries of a [`TreeMap`](crate::TreeMap),
/// in ascending key order.
pub struct Iter<'a, K, V> {
    store: &'a NodeStore<K, V>,
    stack: NodeStack,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(store: &'a NodeStore<K, V>, length: usize) -> Self {
        let mut stack = NodeStack::new();
        push_left_spine(store, &mut stack, store.root());
        Self {
            store,
            stack,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.store.node(id);
        if let Some((_, right)) = node.children() {
            push_left_spine(self.store, &mut self.stack, right);
        }
        self.remaining = self.remaining.saturating_sub(1);
        node.entry.as_ref().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// An owning iterator over the entries of a [`TreeMap`](crate::TreeMap),
/// in ascending key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(mut store: NodeStore<K, V>) -> Self {
        let entries: Vec<(K, V)> = in_order_ids(&store)
            .into_iter()
            .filter_map(|id| store.take_entry(id))
            .collect();
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}
