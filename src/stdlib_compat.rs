//! Standard library compatibility layer
//!
//! Provides a `std::collections::BinaryHeap`-shaped wrapper around any
//! [`PriorityQueue`].
//!
//! # Differences from BinaryHeap
//!
//! - **Ordering**: taken from the wrapped queue's comparator, not from `Ord`.
//!   Wrapping a `PairingHeap<T, MaxFirst>` gives `BinaryHeap`'s max-first order.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::compare::MaxFirst;
//! use pairing_pq::pairing::PairingHeap;
//! use pairing_pq::stdlib_compat::StdHeap;
//!
//! // Use like std::collections::BinaryHeap
//! let mut heap: StdHeap<i32, PairingHeap<i32, MaxFirst>> = StdHeap::new();
//! heap.push(5);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! ```

use crate::traits::PriorityQueue;

/// A `BinaryHeap`-style facade over a priority queue
///
/// # Type Parameters
/// - `T`: The element type
/// - `Q`: The underlying queue (e.g., `PairingHeap<T, MaxFirst>`)
pub struct StdHeap<T, Q: PriorityQueue<T>> {
    queue: Q,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, Q: PriorityQueue<T> + Default> StdHeap<T, Q> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self::from_queue(Q::default())
    }
}

impl<T, Q: PriorityQueue<T>> StdHeap<T, Q> {
    /// Wraps an existing queue
    pub fn from_queue(queue: Q) -> Self {
        Self {
            queue,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Pushes an item onto the heap
    pub fn push(&mut self, item: T) {
        self.queue.push(item)
    }

    /// Returns the top item without removing it
    pub fn peek(&self) -> Option<&T> {
        self.queue.top()
    }

    /// Removes and returns the top item
    pub fn pop(&mut self) -> Option<T> {
        self.queue.pop()
    }

    /// Unwraps the underlying queue
    pub fn into_inner(self) -> Q {
        self.queue
    }
}

impl<T, Q: PriorityQueue<T> + Default> Default for StdHeap<T, Q> {
    fn default() -> Self {
        Self::new()
    }
}
