//! Pairing heap throughput benchmarks
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench pairing_bench
//!
//! # Only the decrease-key workloads
//! cargo bench --bench pairing_bench -- update_elt
//! ```
//!
//! Workloads are sized 2^8 .. 2^16 and fed from a fixed-seed LCG so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairing_pq::pairing::PairingHeap;

const SIZES: [u32; 3] = [8, 12, 16];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }
}

fn random_values(n: usize) -> Vec<u64> {
    let mut rng = Lcg::new(0x9e3779b97f4a7c15);
    (0..n).map(|_| rng.next()).collect()
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for rank in SIZES {
        let values = random_values(1 << rank);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", rank)),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap: PairingHeap<u64> = PairingHeap::with_capacity(values.len());
                    for &v in values {
                        heap.push(v);
                    }
                    while let Some(v) = heap.pop() {
                        black_box(v);
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_update_elt(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_elt");
    for rank in SIZES {
        let values = random_values(1 << rank);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", rank)),
            &values,
            |b, values| {
                b.iter(|| {
                    let mut heap: PairingHeap<u64> = PairingHeap::with_capacity(values.len());
                    let handles: Vec<_> = values
                        .iter()
                        .map(|&v| heap.add_node(v + (1 << 32)))
                        .collect();
                    for (handle, &v) in handles.iter().zip(values) {
                        let _ = heap.update_elt(*handle, v);
                    }
                    black_box(heap.pop())
                })
            },
        );
    }
    group.finish();
}

fn bench_update_priorities(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_priorities");
    for rank in SIZES {
        let values = random_values(1 << rank);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("2^{}", rank)),
            &values,
            |b, values| {
                let mut heap: PairingHeap<u64> = values.iter().copied().collect();
                b.iter(|| {
                    heap.update_priorities();
                    black_box(heap.top().copied())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_update_elt, bench_update_priorities);
criterion_main!(benches);
