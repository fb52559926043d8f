//! Criterion microbenches for gift-wrapping hulls.
//!
//! - uniform scatter: few hull vertices, O(n·h) stays cheap.
//! - points on a circle: every point is a hull vertex, O(n²) worst case.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ringfix::{convex_hull, Point};

fn scatter(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-10_000..=10_000), rng.gen_range(-10_000..=10_000)))
        .collect()
}

fn circle(n: usize) -> Vec<Point> {
    let r = 1.0e8;
    (0..n)
        .map(|k| {
            let th = 2.0 * std::f64::consts::PI * (k as f64) / (n as f64);
            Point::new((th.cos() * r).round() as i32, (th.sin() * r).round() as i32)
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[10usize, 50, 100, 500] {
        let pts = scatter(n, 7);
        group.bench_with_input(BenchmarkId::new("scatter", n), &pts, |b, pts| {
            b.iter(|| convex_hull(pts))
        });
        let pts = circle(n);
        group.bench_with_input(BenchmarkId::new("circle", n), &pts, |b, pts| {
            b.iter(|| convex_hull(pts))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
