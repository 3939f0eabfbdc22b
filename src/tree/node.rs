//! Arena-backed node storage for the binary search tree.
//!
//! Every node lives in a slot of a single `Vec` owned by [`NodeStore`] and is
//! addressed by a [`NodeId`]. Child and parent links are plain handles, so the
//! parent back-reference never owns anything and the arena remains the sole
//! owner of every node.
//!
//! The tree is kept *full*: an internal node holds an entry and always has two
//! children, an external node (a sentinel leaf) holds nothing and has no
//! children. Empty slots below an internal node are therefore represented by
//! external nodes, never by missing links.

use log::trace;

/// Handle to a node slot inside a [`NodeStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// A single tree vertex.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) entry: Option<(K, V)>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    const fn external(parent: Option<NodeId>) -> Self {
        Self {
            entry: None,
            left: None,
            right: None,
            parent,
        }
    }

    /// Returns both children, or `None` for an external node.
    #[inline]
    pub(crate) const fn children(&self) -> Option<(NodeId, NodeId)> {
        match (self.left, self.right) {
            (Some(left), Some(right)) => Some((left, right)),
            _ => None,
        }
    }
}

#[derive(Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    Vacant { next_free: Option<usize> },
}

/// Owner of every node of one tree, plus the handle of its root.
#[derive(Clone)]
pub(crate) struct NodeStore<K, V> {
    slots: Vec<Slot<K, V>>,
    free_head: Option<usize>,
    root: NodeId,
}

impl<K, V> NodeStore<K, V> {
    /// Creates a store holding a single external root.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![Slot::Occupied(Node::external(None))],
            free_head: None,
            root: NodeId(0),
        }
    }

    #[inline]
    pub(crate) const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node behind `id`.
    ///
    /// Handles are only ever produced by this store and are dropped from the
    /// tree before their slot is released, so a vacant slot here is a bug.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle {id:?}"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("dangling node handle {id:?}"),
        }
    }

    #[inline]
    pub(crate) fn is_external(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.left.is_none() && node.right.is_none()
    }

    #[inline]
    pub(crate) fn is_internal(&self, id: NodeId) -> bool {
        let node = self.node(id);
        node.left.is_some() && node.right.is_some()
    }

    #[inline]
    pub(crate) fn entry(&self, id: NodeId) -> Option<(&K, &V)> {
        self.node(id).entry.as_ref().map(|(key, value)| (key, value))
    }

    #[inline]
    pub(crate) fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.node_mut(id).entry.as_mut().map(|(_, value)| value)
    }

    #[inline]
    pub(crate) fn take_entry(&mut self, id: NodeId) -> Option<(K, V)> {
        self.node_mut(id).entry.take()
    }

    /// Number of slots currently holding a node, internal or external.
    pub(crate) fn live_nodes(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Occupied(_)))
            .count()
    }

    fn allocate(&mut self, node: Node<K, V>) -> NodeId {
        match self.free_head {
            Some(index) => {
                if let Slot::Vacant { next_free } = &self.slots[index] {
                    self.free_head = *next_free;
                }
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        let slot = std::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("node {id:?} released twice"),
        }
    }

    /// Turns the external node `id` into an internal node holding
    /// `(key, value)` with two fresh external children.
    ///
    /// The caller is responsible for updating the entry count.
    pub(crate) fn expand_external(&mut self, id: NodeId, key: K, value: V) {
        debug_assert!(self.is_external(id), "expand_external on internal node");
        let left = self.allocate(Node::external(Some(id)));
        let right = self.allocate(Node::external(Some(id)));
        let node = self.node_mut(id);
        node.entry = Some((key, value));
        node.left = Some(left);
        node.right = Some(right);
        trace!("expanded {id:?} into internal node with children {left:?}, {right:?}");
    }

    /// Exchanges the entries held by two nodes without touching their links.
    pub(crate) fn swap_entries(&mut self, first: NodeId, second: NodeId) {
        if first == second {
            return;
        }
        let moved = self.node_mut(first).entry.take();
        let displaced = std::mem::replace(&mut self.node_mut(second).entry, moved);
        self.node_mut(first).entry = displaced;
    }

    /// Removes `id`, which must have at most one child, and promotes that
    /// child (if any) into the slot `id` occupied under its parent.
    ///
    /// When `id` is the root its child becomes the new root. The removed node
    /// is unlinked from parent and children before its slot is recycled; its
    /// entry is handed back to the caller.
    pub(crate) fn splice_out(&mut self, id: NodeId) -> Option<(K, V)> {
        let Node {
            entry,
            left,
            right,
            parent,
        } = self.release(id);
        debug_assert!(
            left.is_none() || right.is_none(),
            "splice_out on a node with two children"
        );
        let child = left.or(right);

        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }

        match parent {
            Some(parent) => {
                let parent_node = self.node_mut(parent);
                if parent_node.left == Some(id) {
                    parent_node.left = child;
                } else {
                    parent_node.right = child;
                }
            }
            None => {
                self.root = match child {
                    Some(child) => child,
                    None => self.allocate(Node::external(None)),
                };
            }
        }

        trace!("spliced out {id:?}, promoted {child:?}");
        entry
    }

    /// Returns the minimum-key node of the subtree rooted at the internal
    /// node `id`: follow left links down to the sentinel and take its parent.
    pub(crate) fn subtree_min(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(left) = self.node(current).left {
            current = left;
        }
        self.node(current).parent.unwrap_or(current)
    }

    /// Mirror image of [`subtree_min`](Self::subtree_min).
    pub(crate) fn subtree_max(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(right) = self.node(current).right {
            current = right;
        }
        self.node(current).parent.unwrap_or(current)
    }
}
