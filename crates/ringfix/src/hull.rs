//! Gift-wrapping (Jarvis march) convex hull on lattice points.
//!
//! Output is counter-clockwise and open (the start vertex is not repeated).
//! O(n·h) for `n` input points and `h` hull vertices.

use crate::geom::Point;
use crate::predicates::{on_segment, orientation, Orientation};

/// Which input points lying on a hull edge are part of the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Collinear {
    /// Corners only: on a collinear tie the candidate farther from the current
    /// vertex wins, so points strictly inside a hull edge are skipped and an
    /// all-collinear set wraps to its two ends.
    #[default]
    Farthest,
    /// Corners plus every input point strictly inside a hull edge, in walking
    /// order. An all-collinear set still yields only its two ends.
    Keep,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullCfg {
    pub collinear: Collinear,
}

/// Convex hull with the default configuration.
#[inline]
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    convex_hull_with(points, HullCfg::default())
}

/// Convex hull of `points` (expected distinct).
///
/// - Fewer than 3 points are returned unchanged.
/// - Wrapping starts at the leftmost point, lowest first on ties, which is
///   always a hull corner and therefore the walk's end.
pub fn convex_hull_with(points: &[Point], cfg: HullCfg) -> Vec<Point> {
    let corners = wrap(points);
    match cfg.collinear {
        Collinear::Farthest => corners,
        Collinear::Keep => with_edge_points(&corners, points),
    }
}

fn wrap(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let start = leftmost(points);
    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(points[p]);

        let mut q = (p + 1) % n;
        for i in 0..n {
            if replaces(points[p], points[i], points[q]) {
                q = i;
            }
        }

        p = q;
        // Compared by value: a duplicate of the start closes the walk too.
        if points[p] == points[start] || hull.len() >= n {
            break;
        }
    }
    hull
}

/// Insert the points lying strictly inside each edge of `corners`, nearest first.
fn with_edge_points(corners: &[Point], points: &[Point]) -> Vec<Point> {
    let h = corners.len();
    if h < 3 {
        return corners.to_vec();
    }
    let mut hull = Vec::with_capacity(points.len());
    for (k, &a) in corners.iter().enumerate() {
        let b = corners[(k + 1) % h];
        let mut inner: Vec<Point> = points
            .iter()
            .copied()
            .filter(|&r| r != a && r != b)
            .filter(|&r| orientation(a, b, r).is_collinear() && on_segment(a, b, r))
            .collect();
        inner.sort_by_key(|&r| dist2(a, r));
        // Equal distance along one edge means the same point.
        inner.dedup();
        hull.push(a);
        hull.extend(inner);
    }
    hull
}

/// Index of the minimum point by `(x, y)`, first occurrence on exact ties.
fn leftmost(points: &[Point]) -> usize {
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if (pt.x(), pt.y()) < (b.x(), b.y()) {
            best = i;
        }
    }
    best
}

/// Candidate `i` is a better next hull vertex from `p` than `q`.
#[inline]
fn replaces(p: Point, i: Point, q: Point) -> bool {
    match orientation(p, i, q) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        Orientation::Collinear => dist2(p, i) > dist2(p, q),
    }
}

#[inline]
fn dist2(a: Point, b: Point) -> i128 {
    let v = a.vector_to(b);
    i128::from(v.x) * i128::from(v.x) + i128::from(v.y) * i128::from(v.y)
}
