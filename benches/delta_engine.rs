use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use graphlet_delta::GraphletNetwork;

fn seeded_sparse_network(n: u32, edge_count: usize, seed: u64) -> GraphletNetwork {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut net = GraphletNetwork::construct(n).unwrap();
    let mut placed = 0usize;
    while placed < edge_count {
        let i = rng.gen_range(1..=n);
        let j = rng.gen_range(1..=n);
        if i == j {
            continue;
        }
        if !net.contains(i, j).unwrap() {
            net.flip(i, j).unwrap();
            placed += 1;
        }
    }
    net
}

fn bench_calculate_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_delta");
    for &n in &[100u32, 500, 2000] {
        let net = seeded_sparse_network(n, n as usize * 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| net.calculate_delta(1, 2).unwrap());
        });
    }
    group.finish();
}

fn bench_flip_then_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("flip_then_delta");
    for &n in &[100u32, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || seeded_sparse_network(n, n as usize * 3, 7),
                |mut net| {
                    net.flip(1, 2).unwrap();
                    net.calculate_delta(1, 2).unwrap()
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_calculate_delta, bench_flip_then_delta);
criterion_main!(benches);
