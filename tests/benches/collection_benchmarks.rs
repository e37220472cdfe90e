//! # Cryptomoji Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Generator draw | < 5μs |
//! | Address derivation | < 5μs |
//! | `CREATE_COLLECTION` (in-memory store) | < 100μs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use moji_processor::domain::{
    collection_address, make_moji_batch, moji_address, Dna, PublicKey, SeededGenerator,
};
use moji_processor::prelude::*;
use moji_tests::fixtures::{random_create_collection, random_public_key, seeded_rng};
use std::time::Duration;

// ============================================================================
// Domain
// ============================================================================

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    group.bench_function("seed", |b| {
        let seed = [7u8; 64];
        b.iter(|| SeededGenerator::new(black_box(&seed)))
    });

    for draws in [1usize, 3, 16] {
        group.throughput(Throughput::Elements(draws as u64));
        group.bench_with_input(BenchmarkId::new("draws", draws), &draws, |b, &draws| {
            let generator = SeededGenerator::new(&[7u8; 64]);
            b.iter(|| {
                let mut g = generator;
                for _ in 0..draws {
                    let (draw, next) = g.next();
                    black_box(draw);
                    g = next;
                }
            })
        });
    }

    group.finish();
}

fn bench_addressing(c: &mut Criterion) {
    let mut group = c.benchmark_group("addressing");
    let owner = PublicKey::new(random_public_key(&mut seeded_rng(1))).unwrap();
    let dna = Dna::new([0xAB; 18]);

    group.bench_function("collection_address", |b| {
        b.iter(|| collection_address(black_box(&owner)))
    });
    group.bench_function("moji_address", |b| {
        b.iter(|| moji_address(black_box(&owner), black_box(&dna)))
    });
    group.bench_function("make_moji_batch", |b| {
        let generator = SeededGenerator::new(&[3u8; 64]);
        b.iter(|| make_moji_batch(black_box(&owner), generator, 3))
    });

    group.finish();
}

// ============================================================================
// Handler
// ============================================================================

fn bench_create_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_collection");
    group.measurement_time(Duration::from_secs(5));

    let handler = MojiHandler::new();
    let mut rng = seeded_rng(2);

    group.bench_function("fresh_store", |b| {
        b.iter_batched(
            || (random_create_collection(&mut rng), InMemoryStateStore::new()),
            |(txn, store)| handler.apply(&txn, &store),
            criterion::BatchSize::SmallInput,
        )
    });

    let store = InMemoryStateStore::new();
    let txn = random_create_collection(&mut rng);
    let _ = handler.apply(&txn, &store);
    group.bench_function("duplicate_rejection", |b| {
        b.iter(|| handler.apply(black_box(&txn), &store))
    });

    group.finish();
}

criterion_group!(benches, bench_generator, bench_addressing, bench_create_collection);
criterion_main!(benches);
