//! Extreme stress tests that really push the heap to its limits
//!
//! These tests perform large numbers of operations in various patterns, and
//! build degenerate (very deep or very wide) forests to make sure clone, clear,
//! rebuild and drop never recurse on tree depth.

use pairing_pq::compare::MaxFirst;
use pairing_pq::pairing::PairingHeap;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Descending inserts under a min-first order make every new node the root,
/// leaving a single chain as deep as the heap is large.
fn deep_chain(n: i64) -> PairingHeap<i64> {
    let mut heap = PairingHeap::with_capacity(n as usize);
    for v in (0..n).rev() {
        heap.push(v);
    }
    heap
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_massive_operations() {
    init_logging();
    let mut heap: PairingHeap<i32> = PairingHeap::new();
    for i in 0..10_000 {
        heap.push(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000 {
        assert_eq!(heap.pop(), Some(i));
    }
    assert!(heap.is_empty());
}

#[test]
fn test_shuffled_values() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut values: Vec<u32> = (0..5_000).collect();
    values.shuffle(&mut rng);

    let heap: PairingHeap<u32> = values.iter().copied().collect();
    heap.check_invariants().unwrap();
    assert_eq!(heap.into_sorted_vec(), (0..5_000).collect::<Vec<_>>());
}

#[test]
fn test_many_decrease_keys() {
    let mut heap: PairingHeap<i32> = PairingHeap::new();
    let handles: Vec<_> = (0..2_000).map(|i| heap.add_node(100_000 + i)).collect();

    // Decrease in reverse so each update lands on a node deep in the child list.
    for (i, handle) in handles.iter().enumerate().rev() {
        heap.update_elt(*handle, i as i32).unwrap();
    }
    heap.check_invariants().unwrap();

    for i in 0..2_000 {
        assert_eq!(heap.pop(), Some(i));
    }
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_random_interleaving() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap: PairingHeap<i64> = PairingHeap::new();
    let mut live = Vec::new();

    for round in 0..20_000 {
        match rng.random_range(0..10) {
            0..=4 => {
                let value = rng.random_range(-1_000_000..1_000_000);
                live.push(heap.add_node(value));
            }
            5..=6 => {
                heap.pop();
            }
            7..=8 => {
                live.retain(|h| heap.contains(*h));
                if let Some(&handle) = live.choose(&mut rng) {
                    let current = heap.get(handle).copied().unwrap_or_default();
                    let lowered = current - rng.random_range(0..1_000);
                    heap.update_elt(handle, lowered).unwrap();
                }
            }
            _ => {
                live.retain(|h| heap.contains(*h));
                if let Some(&handle) = live.choose(&mut rng) {
                    if let Some(value) = heap.get_mut(handle) {
                        *value = rng.random_range(-1_000_000..1_000_000);
                    }
                    heap.update_priorities();
                }
            }
        }
        if round % 1_000 == 0 {
            heap.check_invariants().unwrap();
        }
    }

    heap.check_invariants().unwrap();
    let drained = heap.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_deep_chain_clone_and_drop() {
    init_logging();
    let heap = deep_chain(200_000);
    assert_eq!(heap.top(), Some(&0));

    let copy = heap.clone();
    assert_eq!(copy.len(), 200_000);
    assert_eq!(copy.top(), Some(&0));
    drop(copy);
    drop(heap);
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_deep_chain_rebuild() {
    let mut heap = deep_chain(200_000);
    heap.update_priorities();
    heap.check_invariants().unwrap();
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(heap.pop(), Some(1));
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_deep_chain_clear() {
    let mut heap = deep_chain(200_000);
    heap.clear();
    assert!(heap.is_empty());
    heap.push(7);
    assert_eq!(heap.pop(), Some(7));
}

#[test]
#[cfg_attr(feature = "invariant-checks", ignore = "per-operation checks make this quadratic")]
fn test_wide_root_pop() {
    // Ascending inserts hang every node directly off the root.
    let mut heap: PairingHeap<i64> = (0..100_000).collect();
    assert_eq!(heap.pop(), Some(0));
    heap.check_invariants().unwrap();
    assert_eq!(heap.pop(), Some(1));
}

#[test]
fn test_max_first_alternating() {
    let mut heap = PairingHeap::with_comparator(MaxFirst);
    for i in 0..1_000 {
        heap.push(i * 2);
        heap.push(i * 2 + 1);
        assert_eq!(heap.pop(), Some(i * 2 + 1));
    }
    assert_eq!(heap.len(), 1_000);
    let drained = heap.into_sorted_vec();
    assert!(drained.windows(2).all(|w| w[0] >= w[1]));
}
