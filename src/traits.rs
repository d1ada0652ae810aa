//! Common traits for priority queues
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: push / pop / top over elements ranked by a comparator
//! - [`AddressableQueue`]: adds handle-returning insertion and `update_elt`
//!   (decrease-key) on an element already in the queue
//!
//! Unlike the standard library's `BinaryHeap`, the ordering is not taken from
//! `Ord` on the element but from the [`Compare`](crate::compare::Compare)
//! implementation the queue was built with.

use thiserror::Error;

/// Error type for handle-based heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// The new value is less extreme than the value it replaces
    #[error("new value is less extreme than the current value")]
    PriorityNotImproved,
    /// The handle is no longer valid (element was popped, or it belongs to another heap)
    #[error("handle does not refer to a live element of this heap")]
    InvalidHandle,
}

/// A broken structural invariant found by a heap self-check
///
/// Seeing one of these means the heap's own bookkeeping is wrong (or the
/// element was mutated through an escape hatch without a later rebuild);
/// it is never the result of a correctly used public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// A child is more extreme than its parent
    #[error("heap order violated below the node at depth {depth}")]
    HeapOrder { depth: usize },
    /// A child/sibling/back link does not match its counterpart
    #[error("inconsistent node links at depth {depth}")]
    BrokenLink { depth: usize },
    /// The element count disagrees with the reachable node count
    #[error("count is {len} but {reachable} nodes are reachable")]
    CountMismatch { len: usize, reachable: usize },
    /// Storage holds nodes that are not reachable from the root
    #[error("{allocated} nodes allocated but only {reachable} reachable")]
    Leak { allocated: usize, reachable: usize },
}

/// A handle to an element in a queue, used for priority updates
///
/// Handles are cheap to copy and compare. They identify one element for as long
/// as that element stays in the queue that issued the handle.
pub trait Handle: Copy + PartialEq + Eq {}

/// Base trait for priority queues
///
/// The "top" element is the most extreme one under the queue's comparator.
///
/// # Example
///
/// ```rust
/// use pairing_pq::PriorityQueue;
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<i32> = PairingHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.top(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait PriorityQueue<T> {
    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Inserts an element
    fn push(&mut self, value: T);

    /// Returns the most extreme element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn top(&self) -> Option<&T>;

    /// Removes and returns the most extreme element
    fn pop(&mut self) -> Option<T>;

    /// Restores queue order after element priorities were changed outside the
    /// queue's control
    fn update_priorities(&mut self);
}

/// Extended queue trait with handle-based priority updates
///
/// # Example
///
/// ```rust
/// use pairing_pq::{AddressableQueue, PriorityQueue};
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap: PairingHeap<u32> = PairingHeap::new();
/// heap.add_node(10);
/// let handle = heap.add_node(30);
/// heap.update_elt(handle, 1).unwrap();
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type used to address elements of this queue
    type Handle: Handle;

    /// Inserts an element and returns a handle to it
    ///
    /// The handle stays valid until the element is popped.
    fn add_node(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a value that is at least as
    /// extreme, moving it toward the top as needed
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the handle is stale or foreign
    /// - [`HeapError::PriorityNotImproved`] if `new_value` is less extreme
    ///   than the current value
    fn update_elt(&mut self, handle: Self::Handle, new_value: T) -> Result<(), HeapError>;
}
