//! Criterion benchmarks for ring validation and repair.
//! Focus sizes: n in {10, 50, 100, 500} vertices.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use ringfix::rand::{draw_ring, draw_star_ring, ReplayToken, RingCfg, StarCfg, VertexCount};
use ringfix::{is_valid, repair};

fn bench_rings(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    for &n in &[10usize, 50, 100, 500] {
        // Star rings are (almost always) valid, so `is_valid` scans every edge pair.
        let star = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            radius: 1_000_000,
            angle_jitter_frac: 0.3,
        };
        let scatter = RingCfg {
            vertex_count: VertexCount::Fixed(n),
            extent: 1_000_000,
        };

        group.bench_with_input(BenchmarkId::new("is_valid_star", n), &n, |b, _| {
            let ring = draw_star_ring(star, ReplayToken { seed: 43, index: 0 });
            b.iter(|| is_valid(&ring))
        });

        group.bench_with_input(BenchmarkId::new("repair_scatter", n), &n, |b, _| {
            let mut index = 0u64;
            b.iter_batched(
                || {
                    index += 1;
                    draw_ring(scatter, ReplayToken { seed: 44, index })
                },
                |ring| repair(&ring),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rings);
criterion_main!(benches);
