//! # Particle Pool Benchmark
//!
//! REQUIREMENTS:
//! - 10,000 particles
//! - 0 allocations during a tick
//!
//! Run with: `cargo bench --package lumen_particles`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use lumen_particles::{Bounds, ParticlePool, PoolConfig};

/// Benchmark: one full tick (update + respawn) at several pool sizes.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_tick");

    for count in [1_000_i64, 10_000, 100_000] {
        let config = PoolConfig {
            pool_size: count,
            ..PoolConfig::default()
        };
        let mut pool = ParticlePool::new(&config, Bounds::DEFAULT, 42).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                pool.update(black_box(16.67), Bounds::DEFAULT);
                pool.respawn(Bounds::DEFAULT);
            });
        });
    }

    group.finish();
}

/// Benchmark: pool construction (the only allocating operation).
fn bench_creation(c: &mut Criterion) {
    let config = PoolConfig {
        pool_size: 10_000,
        ..PoolConfig::default()
    };

    c.bench_function("pool_creation_10k", |b| {
        b.iter(|| black_box(ParticlePool::new(&config, Bounds::DEFAULT, 42).unwrap()));
    });
}

criterion_group!(benches, bench_tick, bench_creation);
criterion_main!(benches);
