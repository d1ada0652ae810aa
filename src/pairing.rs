//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multi-way forest with no shape invariant:
//! trees are joined by a single comparison ("meld") and the work of keeping
//! the structure shallow is deferred to extraction, where the orphaned
//! children of the removed root are melded back together in pairs.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity           |
//! |---------------------|----------------------|
//! | `push` / `add_node` | O(1)                 |
//! | `top`               | O(1)                 |
//! | `pop`               | O(log n) amortized   |
//! | `update_elt`        | O(log n) amortized   |
//! | `update_priorities` | O(n)                 |
//! | `clone` / `clear`   | O(n)                 |
//!
//! # Storage
//!
//! Nodes live in a generational arena. A [`PairingHandle`] is the arena key of
//! its node; nodes are relinked but never moved, so a handle stays valid across
//! `update_elt` and `update_priorities` and goes stale only when its element is
//! popped. Clone, clear and rebuild walk the forest with an explicit worklist,
//! so arbitrarily deep trees never grow the call stack.
//!
//! # Ordering
//!
//! "Most extreme" is decided by the heap's [`Compare`] implementation. The
//! default, [`MinFirst`], makes this a min-heap.
//!
//! # Panics
//!
//! A comparator that panics while the forest is being relinked leaves the
//! heap empty: every remaining element is dropped and all handles go stale.
//! The heap stays usable and dropping it is safe.

use crate::compare::{Compare, MinFirst};
use crate::node::{Back, Node, NodeKey};
use crate::traits::{AddressableQueue, Handle, HeapError, InvariantViolation, PriorityQueue};
use log::{debug, trace, warn};
use slotmap::SlotMap;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;

/// Handle to an element in a [`PairingHeap`]
///
/// Returned by [`PairingHeap::add_node`]. A handle is tied to the heap that
/// issued it; after its element is popped the heap reports it as
/// [`HeapError::InvalidHandle`]. Handles from a different heap are not
/// reliably detected and must not be used.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    key: NodeKey,
}

impl Handle for PairingHandle {}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<u32> = PairingHeap::new();
/// heap.push(10);
/// heap.push(20);
/// let handle = heap.add_node(30);
///
/// heap.update_elt(handle, 1).unwrap();
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(10));
/// ```
pub struct PairingHeap<T, C = MinFirst> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
    len: usize,
    cmp: C,
}

impl<T, C: Compare<T> + Default> PairingHeap<T, C> {
    /// Creates an empty heap ordered by the default comparator
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }

    /// Creates an empty heap with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, C::default())
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use pairing_pq::compare::MaxFirst;
    /// use pairing_pq::pairing::PairingHeap;
    ///
    /// let mut heap = PairingHeap::with_comparator(MaxFirst);
    /// heap.extend([3, 9, 4]);
    /// assert_eq!(heap.top(), Some(&9));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        PairingHeap {
            nodes: SlotMap::with_key(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` nodes
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        PairingHeap {
            nodes: SlotMap::with_capacity_and_key(capacity),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Builds a heap from a sequence of values, ordered by `cmp`
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity_and_comparator(iter.size_hint().0, cmp);
        heap.extend(iter);
        heap
    }

    /// Returns the comparator this heap is ordered by
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts a value
    pub fn push(&mut self, value: T) {
        self.add_node(value);
    }

    /// Inserts a value and returns a handle for later [`update_elt`](Self::update_elt) calls
    pub fn add_node(&mut self, value: T) -> PairingHandle {
        let key = self.nodes.insert(Node::new(value));
        self.reset_on_unwind(|heap| {
            heap.root = Some(match heap.root {
                Some(root) => heap.meld(root, key),
                None => key,
            });
            heap.len += 1;
        });
        self.debug_check();
        PairingHandle { key }
    }

    /// Returns the most extreme value, or `None` if the heap is empty
    pub fn top(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }

    /// Removes and returns the most extreme value, or `None` if the heap is empty
    ///
    /// The handle of the removed element becomes invalid.
    pub fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        let node = self.reset_on_unwind(|heap| {
            let node = heap.nodes.remove(root)?;
            heap.root = heap.combine_siblings(node.child);
            heap.len -= 1;
            Some(node)
        })?;
        self.debug_check();
        Some(node.value)
    }

    /// Replaces the value behind `handle` with one at least as extreme
    ///
    /// The node is cut out of its parent's child list together with its
    /// subtree and melded into the root. Handles stay valid.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidHandle`] if the element was already popped
    /// - [`HeapError::PriorityNotImproved`] if `new_value` is less extreme than
    ///   the current value; the heap is left untouched
    pub fn update_elt(&mut self, handle: PairingHandle, new_value: T) -> Result<(), HeapError> {
        let key = handle.key;
        let node = self.nodes.get_mut(key).ok_or_else(|| {
            debug!("update_elt called with stale handle {:?}", key);
            HeapError::InvalidHandle
        })?;
        if self.cmp.more_extreme(&node.value, &new_value) {
            debug!("update_elt rejected a less extreme value for {:?}", key);
            return Err(HeapError::PriorityNotImproved);
        }
        node.value = new_value;

        if self.root != Some(key) {
            self.reset_on_unwind(|heap| {
                heap.cut(key);
                if let Some(root) = heap.root {
                    heap.root = Some(heap.meld(root, key));
                }
            });
        }
        self.debug_check();
        Ok(())
    }

    /// Restores heap order over every element
    ///
    /// Use after values were changed in place through [`get_mut`](Self::get_mut).
    /// Every node is detached and melded back one at a time; nodes are reused,
    /// so handles and values are unchanged.
    pub fn update_priorities(&mut self) {
        let Some(root) = self.root else {
            return;
        };
        if self.len < 2 {
            return;
        }
        trace!("rebuilding pairing heap of {} nodes", self.len);

        let visited = self.reset_on_unwind(|heap| {
            let mut frontier = VecDeque::with_capacity(heap.len);
            frontier.push_back(root);
            let mut rebuilt: Option<NodeKey> = None;
            let mut visited = 0usize;

            while let Some(key) = frontier.pop_front() {
                let node = &mut heap.nodes[key];
                frontier.extend(node.sibling);
                frontier.extend(node.child);
                node.isolate();
                visited += 1;

                rebuilt = Some(match rebuilt {
                    Some(acc) => heap.meld(acc, key),
                    None => key,
                });
            }

            heap.root = rebuilt;
            visited
        });
        trace!("rebuild relinked {} nodes", visited);
        self.debug_check();
    }

    /// Consumes the heap, returning its values from most to least extreme
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Verifies heap order, link consistency and the element count
    ///
    /// Walks the whole forest, O(n). Intended for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            if self.len != 0 {
                return Err(InvariantViolation::CountMismatch {
                    len: self.len,
                    reachable: 0,
                });
            }
            return if self.nodes.is_empty() {
                Ok(())
            } else {
                Err(InvariantViolation::Leak {
                    allocated: self.nodes.len(),
                    reachable: 0,
                })
            };
        };

        let root_node = self
            .nodes
            .get(root)
            .ok_or(InvariantViolation::BrokenLink { depth: 0 })?;
        if !root_node.is_detached() {
            return Err(InvariantViolation::BrokenLink { depth: 0 });
        }

        let mut worklist = vec![(root, 0usize)];
        let mut reachable = 0usize;

        while let Some((key, depth)) = worklist.pop() {
            reachable += 1;
            // A cycle would otherwise keep the walk going forever.
            if reachable > self.nodes.len() {
                return Err(InvariantViolation::BrokenLink { depth });
            }
            let parent = &self.nodes[key];

            let mut expected_back = Back::Parent(key);
            let mut cursor = parent.child;
            while let Some(child_key) = cursor {
                let child = self
                    .nodes
                    .get(child_key)
                    .ok_or(InvariantViolation::BrokenLink { depth: depth + 1 })?;
                if child.back != expected_back {
                    return Err(InvariantViolation::BrokenLink { depth: depth + 1 });
                }
                if self.cmp.more_extreme(&child.value, &parent.value) {
                    return Err(InvariantViolation::HeapOrder { depth });
                }
                worklist.push((child_key, depth + 1));
                expected_back = Back::Prev(child_key);
                cursor = child.sibling;
            }
        }

        if reachable != self.len {
            return Err(InvariantViolation::CountMismatch {
                len: self.len,
                reachable,
            });
        }
        if self.nodes.len() != reachable {
            return Err(InvariantViolation::Leak {
                allocated: self.nodes.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Joins two detached trees, returning the root of the result
    ///
    /// The less extreme root becomes the head child of the other. On a tie
    /// `a` stays on top.
    fn meld(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        debug_assert_ne!(a, b, "cannot meld a tree with itself");
        debug_assert!(self.nodes[a].is_detached() && self.nodes[b].is_detached());

        let (a_value, b_value) = (&self.nodes[a].value, &self.nodes[b].value);
        let b_wins = self.cmp.more_extreme(b_value, a_value);
        let (winner, loser) = if b_wins { (b, a) } else { (a, b) };

        let old_head = self.nodes[winner].child;
        if let Some(head) = old_head {
            self.nodes[head].back = Back::Prev(loser);
        }
        let lower = &mut self.nodes[loser];
        lower.sibling = old_head;
        lower.back = Back::Parent(winner);
        self.nodes[winner].child = Some(loser);
        winner
    }

    /// Melds a sibling list back into a single tree
    ///
    /// The list is split into detached trees and paired front to back through a
    /// FIFO queue until one tree is left.
    fn combine_siblings(&mut self, first: Option<NodeKey>) -> Option<NodeKey> {
        let first = first?;
        if self.nodes[first].sibling.is_none() {
            self.nodes[first].back = Back::Root;
            return Some(first);
        }

        let mut queue = VecDeque::new();
        let mut cursor = Some(first);
        while let Some(key) = cursor {
            let node = &mut self.nodes[key];
            cursor = node.sibling.take();
            node.back = Back::Root;
            queue.push_back(key);
        }

        while queue.len() > 1 {
            if let (Some(a), Some(b)) = (queue.pop_front(), queue.pop_front()) {
                let melded = self.meld(a, b);
                queue.push_back(melded);
            }
        }
        queue.pop_front()
    }

    /// Unlinks a node (and its subtree) from the list it hangs in
    fn cut(&mut self, key: NodeKey) {
        let node = &mut self.nodes[key];
        let back = std::mem::take(&mut node.back);
        let next = node.sibling.take();

        match back {
            // Already detached.
            Back::Root => {
                node.sibling = next;
                return;
            }
            Back::Parent(parent) => self.nodes[parent].child = next,
            Back::Prev(prev) => self.nodes[prev].sibling = next,
        }
        if let Some(next) = next {
            self.nodes[next].back = back;
        }
    }

    /// Runs `relink` so that a panic out of the comparator empties the heap
    /// instead of leaving it half linked
    fn reset_on_unwind<R>(&mut self, relink: impl FnOnce(&mut Self) -> R) -> R {
        let mut guard = ResetOnUnwind { heap: self };
        let out = relink(&mut *guard.heap);
        std::mem::forget(guard);
        out
    }

    #[inline]
    fn debug_check(&self) {
        #[cfg(all(debug_assertions, feature = "invariant-checks"))]
        {
            if let Err(violation) = self.check_invariants() {
                panic!("pairing heap invariant broken: {}", violation);
            }
        }
    }
}

impl<T, C> PairingHeap<T, C> {
    /// Returns the value behind `handle`, or `None` if it was popped
    pub fn get(&self, handle: PairingHandle) -> Option<&T> {
        self.nodes.get(handle.key).map(|node| &node.value)
    }

    /// Returns mutable access to the value behind `handle`
    ///
    /// Changing the value's priority through this reference bypasses the heap;
    /// call [`update_priorities`](Self::update_priorities) before the next
    /// `top`, `pop` or `update_elt`.
    pub fn get_mut(&mut self, handle: PairingHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.key).map(|node| &mut node.value)
    }

    /// Returns true if `handle` refers to an element still in the heap
    pub fn contains(&self, handle: PairingHandle) -> bool {
        self.nodes.contains_key(handle.key)
    }

    /// Visits every value once, in no particular order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            frontier: self.root.into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Removes every element, invalidating all handles
    pub fn clear(&mut self) {
        let mut worklist: Vec<NodeKey> = self.root.take().into_iter().collect();
        let mut freed = 0usize;
        while let Some(key) = worklist.pop() {
            if let Some(node) = self.nodes.remove(key) {
                worklist.extend(node.sibling);
                worklist.extend(node.child);
                freed += 1;
            }
        }
        // Anything still allocated was unreachable from the root.
        self.nodes.clear();
        self.len = 0;
        if freed > 0 {
            trace!("cleared pairing heap, freed {} nodes", freed);
        }
    }
}

/// Empties the heap if dropped before `reset_on_unwind` forgets it
struct ResetOnUnwind<'a, T, C> {
    heap: &'a mut PairingHeap<T, C>,
}

impl<T, C> Drop for ResetOnUnwind<'_, T, C> {
    fn drop(&mut self) {
        warn!(
            "comparator panicked while relinking, dropping {} elements",
            self.heap.nodes.len()
        );
        self.heap.root = None;
        self.heap.len = 0;
        self.heap.nodes.clear();
    }
}

impl<T, C> Drop for PairingHeap<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, C: Compare<T> + Clone> Clone for PairingHeap<T, C> {
    /// Copies the heap by re-inserting every value into a fresh forest
    ///
    /// The copy shares nothing with the original. Handles issued by the
    /// original must not be used with the copy.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_and_comparator(self.len, self.cmp.clone());
        copy.extend(self.iter().cloned());
        trace!("cloned pairing heap of {} nodes", copy.len);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.cmp = source.cmp.clone();
        self.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.len)
            .field("top", &self.root.map(|root| &self.nodes[root].value))
            .finish()
    }
}

impl<T, C: Compare<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<'a, T, C> IntoIterator for &'a PairingHeap<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T> for PairingHeap<T, C> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn push(&mut self, value: T) {
        Self::push(self, value)
    }

    fn top(&self) -> Option<&T> {
        Self::top(self)
    }

    fn pop(&mut self) -> Option<T> {
        Self::pop(self)
    }

    fn update_priorities(&mut self) {
        Self::update_priorities(self)
    }
}

impl<T, C: Compare<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn add_node(&mut self, value: T) -> Self::Handle {
        Self::add_node(self, value)
    }

    fn update_elt(&mut self, handle: Self::Handle, new_value: T) -> Result<(), HeapError> {
        Self::update_elt(self, handle, new_value)
    }
}

/// Iterator over the values of a [`PairingHeap`] in forest order
///
/// Created by [`PairingHeap::iter`].
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    frontier: VecDeque<NodeKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.frontier.pop_front()?;
        let nodes = self.nodes;
        let node = &nodes[key];
        self.frontier.extend(node.sibling);
        self.frontier.extend(node.child);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
