// Benchmarks for the editing primitives and keyed lookups
//
// - move_items: relocating a handful of scattered positions
// - insert: splicing a small block into a large list
// - keyed lookups: index build cost versus cached lookups

use std::rc::Rc;

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use keyed_list::ListEngine;
use keyed_list::ListOptions;
use keyed_list::primitives::insert;
use keyed_list::primitives::move_items;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_positions(rng: &mut StdRng, len: usize, count: usize) -> Vec<isize> {
    return (0..count).map(|_| rng.gen_range(0..len) as isize).collect();
}

// =============================================================================
// Primitives
// =============================================================================

fn bench_move_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_items");
    let mut rng = StdRng::seed_from_u64(42);

    for size in SIZES {
        let seq: Rc<Vec<Rc<usize>>> = Rc::new((0..size).map(Rc::new).collect());
        let sources = random_positions(&mut rng, size, 16);
        let target = (size / 2) as isize;

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("scattered_16", size), &size, |b, _| {
            b.iter(|| move_items(black_box(&seq), black_box(target), black_box(&sources)));
        });
    }

    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in SIZES {
        let seq: Rc<Vec<Rc<usize>>> = Rc::new((0..size).map(Rc::new).collect());

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("middle_4", size), &size, |b, _| {
            b.iter(|| {
                let values: Vec<Rc<usize>> = (0..4).map(Rc::new).collect();
                insert(black_box(&seq), black_box((size / 2) as isize), values)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Keyed lookups
// =============================================================================

fn bench_keyed_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("keyed_lookups");
    let mut rng = StdRng::seed_from_u64(7);

    for size in SIZES {
        let engine = ListEngine::new(|n: &usize| *n);
        let state = engine.initial_state((0..size).collect(), ListOptions::new());
        let keys: Vec<usize> = (0..64).map(|_| rng.gen_range(0..size)).collect();

        group.bench_with_input(BenchmarkId::new("cached", size), &size, |b, _| {
            b.iter(|| {
                for key in &keys {
                    black_box(engine.index_of(&state, key));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("after_edit", size), &size, |b, _| {
            b.iter(|| {
                let next = engine.update(&state, &keys[0], keys[0]);
                black_box(engine.index_of(&next, &keys[1]))
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_move_items,
    bench_insert,
    bench_keyed_lookups,
);

criterion_main!(benches);
