//! Arena node representation for the pairing heap
//!
//! Nodes live in a [`SlotMap`](slotmap::SlotMap) and refer to each other by
//! [`NodeKey`]. A key is never reused for a different node while the old one is
//! alive, and a key to a removed node is detected as stale by the arena's
//! generation counter.
//!
//! Each node carries three links:
//!
//! - `child`: head of this node's child list
//! - `sibling`: next node in the list this node belongs to
//! - `back`: where this node hangs from, see [`Back`]

use slotmap::new_key_type;

new_key_type! {
    /// Arena key of a heap node
    pub struct NodeKey;
}

/// The "previous" link of a node
///
/// A node in a child list is either the head of that list, in which case the
/// node before it is its parent, or it follows another sibling. Keeping the two
/// cases apart lets a node be cut out of its list in O(1) without inspecting
/// the neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Back {
    /// Detached: the heap root, or a tree being melded
    #[default]
    Root,
    /// Head of `parent`'s child list
    Parent(NodeKey),
    /// Follows this sibling in the same child list
    Prev(NodeKey),
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) child: Option<NodeKey>,
    pub(crate) sibling: Option<NodeKey>,
    pub(crate) back: Back,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Node {
            value,
            child: None,
            sibling: None,
            back: Back::Root,
        }
    }

    /// Drops every link, leaving a single-node tree (the child list is forgotten,
    /// not freed)
    #[inline]
    pub(crate) fn isolate(&mut self) {
        self.child = None;
        self.sibling = None;
        self.back = Back::Root;
    }

    /// True if the node is a detached tree root
    #[inline]
    pub(crate) fn is_detached(&self) -> bool {
        self.back == Back::Root && self.sibling.is_none()
    }
}
