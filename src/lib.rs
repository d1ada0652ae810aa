//! Addressable Pairing Heap for Rust
//!
//! This crate provides a priority queue implemented as a pairing heap: a
//! self-adjusting multi-way heap-ordered forest with handle-based priority
//! updates, as described in computer science literature.
//!
//! # Features
//!
//! - **O(1) insert** returning a stable handle to the new element
//! - **O(log n) amortized extract-top** using the two-pass pairing strategy
//! - **Decrease-key** (`update_elt`) on any element still in the heap
//! - **Full rebuild** (`update_priorities`) after values were changed in place
//! - **Pluggable ordering** through the [`Compare`](compare::Compare) trait
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::pairing::PairingHeap;
//!
//! let mut heap: PairingHeap<u32> = PairingHeap::new();
//! let handle1 = heap.add_node(5);
//! heap.add_node(3);
//! heap.update_elt(handle1, 1).unwrap();
//! assert_eq!(heap.top(), Some(&1));
//! ```
//!
//! # Feature flags
//!
//! - `invariant-checks`: in debug builds, re-verify heap order, link
//!   consistency and the element count after every mutating operation.
//!
//! ```bash
//! cargo test --features invariant-checks
//! ```
//!
//! The large stress workloads are ignored under this feature because every
//! operation becomes O(n).

pub mod compare;
mod node;
pub mod pairing;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main traits for convenience
pub use traits::{AddressableQueue, HeapError, PriorityQueue};
