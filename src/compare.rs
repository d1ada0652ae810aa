//! Comparators deciding which of two elements is "more extreme"
//!
//! A [`PairingHeap`](crate::pairing::PairingHeap) keeps the most extreme element
//! at its root. What "most extreme" means is decided by a [`Compare`]
//! implementation supplied at construction and kept for the heap's lifetime.
//!
//! | Comparator          | Root holds                     |
//! |---------------------|--------------------------------|
//! | [`MinFirst`]        | smallest element (the default) |
//! | [`MaxFirst`]        | largest element                |
//! | [`FnComparator`]    | whatever the closure decides   |
//!
//! Any `Fn(&T, &T) -> bool` closure is also a comparator on its own.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::compare::{Compare, MaxFirst, MinFirst};
//!
//! assert!(MinFirst.more_extreme(&1, &2));
//! assert!(MaxFirst.more_extreme(&2, &1));
//! assert!(!MinFirst.more_extreme(&2, &2));
//! ```

use std::fmt;

/// Strict total order over `T` used to rank heap elements
///
/// `more_extreme(a, b)` returns `true` when `a` must be extracted before `b`.
/// It must be irreflexive and transitive; two elements for which neither is
/// more extreme than the other are treated as ties.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn more_extreme(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smaller elements are more extreme (min-heap)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Compare<T> for MinFirst {
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Larger elements are more extreme (max-heap, like `std::collections::BinaryHeap`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Compare<T> for MaxFirst {
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Named wrapper around a closure comparator
///
/// Closures already implement [`Compare`]; the wrapper exists so the heap type
/// can be spelled out (`PairingHeap<T, FnComparator<fn(&T, &T) -> bool>>`) and
/// so it gets a `Debug` impl.
#[derive(Clone, Copy)]
pub struct FnComparator<F>(pub F);

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator")
    }
}

impl<T: ?Sized, F> Compare<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}
