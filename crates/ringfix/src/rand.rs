//! Random lattice rings (uniform scatter and star-shaped) with replay tokens.
//!
//! Purpose
//! - Deterministic inputs for property tests and benches of `is_valid` and `repair`.
//!
//! Model
//! - `draw_ring`: `n` uniform lattice points in `[-extent, extent]²`, closed into
//!   a ring. Mostly self-intersecting for `n >= 5`.
//! - `draw_star_ring`: `n` sorted, jittered angles around the origin with random
//!   radii, rounded to the lattice and closed. Star-shaped before rounding;
//!   rounding can merge or align vertices, so validity is not guaranteed.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! `VertexCount` and `ReplayToken` are adapted from viterbo's `geom2::rand`,
//! and `draw_star_ring` from its radial polygon sampler; the lattice rounding,
//! the uniform scatter and the ring closure are specific to this crate.

use crate::geom::{Point, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn draw<R: Rng>(self, rng: &mut R) -> usize {
        match self {
            Self::Fixed(n) => n.max(3),
            Self::Uniform { min, max } => {
                let lo = min.max(3);
                rng.gen_range(lo..=max.max(lo))
            }
        }
    }
}

/// `(seed, index)` pair naming one reproducible draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let salted = splitmix(self.index.wrapping_add(0x9e37_79b9_7f4a_7c15));
        StdRng::seed_from_u64(splitmix(self.seed ^ salted))
    }
}

/// SplitMix64 finaliser.
fn splitmix(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Uniform scatter configuration.
#[derive(Clone, Copy, Debug)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Coordinates are drawn from `[-extent, extent]`. Negative values are treated as 0.
    pub extent: i32,
}
impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            extent: 100,
        }
    }
}

/// Star-shaped sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Outer radius in lattice units; radii are drawn from `[radius / 2, radius]`.
    pub radius: i32,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
}
impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            radius: 1000,
            angle_jitter_frac: 0.3,
        }
    }
}

/// Draw a closed ring of uniformly scattered lattice points.
pub fn draw_ring(cfg: RingCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let e = cfg.extent.max(0);
    let points: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e)))
        .collect();
    close(points)
}

/// Draw a closed, star-shaped ring around the origin (counter-clockwise).
pub fn draw_star_ring(cfg: StarCfg, tok: ReplayToken) -> Polygon {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r_max = f64::from(cfg.radius.max(1));
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let points: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let r = r_max * (0.5 + 0.5 * rng.gen::<f64>());
            // |r cos θ| <= radius fits in i32.
            Point::new((th.cos() * r).round() as i32, (th.sin() * r).round() as i32)
        })
        .collect();
    close(points)
}

/// Repeat the first vertex even if the last one already equals it.
fn close(mut points: Vec<Point>) -> Polygon {
    if let Some(&first) = points.first() {
        points.push(first);
    }
    Polygon::new(points)
}
