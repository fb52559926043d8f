//! Ring validation and convex-hull repair.
//!
//! Validity
//! - A ring needs at least 4 vertices and must repeat its first vertex last.
//! - Edge `k` joins `points[k]` and `points[k + 1]`. Every pair of
//!   non-adjacent edges is tested with `segments_intersect`, except the first
//!   and last edge, which meet at the closing vertex.
//!
//! Repair
//! - Invalid input is replaced by the convex hull of its distinct vertices
//!   (first-occurrence order). Interior and concave detail is discarded.
//! - The result is open: the first hull vertex is not repeated.

use crate::geom::{Point, Polygon};
use crate::hull::{convex_hull_with, HullCfg};
use crate::predicates::segments_intersect;
use std::collections::HashSet;
use std::fmt;

/// Outcome of `check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    /// Fewer than 4 vertices; a closed triangle already needs 4.
    TooFewPoints { len: usize },
    /// First and last vertex differ.
    NotClosed,
    /// First offending edge pair in scan order (`first_edge < second_edge`).
    SelfIntersecting {
        first_edge: usize,
        second_edge: usize,
    },
}

impl Validity {
    #[inline]
    pub fn is_valid(self) -> bool {
        matches!(self, Validity::Valid)
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Validity::Valid => f.write_str("valid"),
            Validity::TooFewPoints { len } => {
                write!(f, "too few points: {len} (a closed ring needs at least 4)")
            }
            Validity::NotClosed => f.write_str("ring is not closed"),
            Validity::SelfIntersecting {
                first_edge,
                second_edge,
            } => write!(f, "edges {first_edge} and {second_edge} intersect"),
        }
    }
}

/// Edge pairs `(i, j)` tested for a closed ring of `n >= 2` vertices.
fn edge_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    let edges = n - 1;
    (0..edges)
        .flat_map(move |i| (i + 2..edges).map(move |j| (i, j)))
        .filter(move |&(i, j)| !(i == 0 && j == edges - 1))
}

#[inline]
fn edges_cross(pts: &[Point], (i, j): (usize, usize)) -> bool {
    segments_intersect(pts[i], pts[i + 1], pts[j], pts[j + 1])
}

/// Closure precondition; `None` when the ring may be scanned.
fn precondition(pts: &[Point]) -> Option<Validity> {
    let n = pts.len();
    if n < 4 {
        Some(Validity::TooFewPoints { len: n })
    } else if pts[0] != pts[n - 1] {
        Some(Validity::NotClosed)
    } else {
        None
    }
}

/// Diagnose `polygon`; stops at the first intersecting edge pair.
pub fn check(polygon: &Polygon) -> Validity {
    let pts = polygon.points();
    if let Some(v) = precondition(pts) {
        return v;
    }
    match edge_pairs(pts.len()).find(|&pair| edges_cross(pts, pair)) {
        Some((first_edge, second_edge)) => Validity::SelfIntersecting {
            first_edge,
            second_edge,
        },
        None => Validity::Valid,
    }
}

/// Closed ring with no intersecting non-adjacent edges.
#[inline]
pub fn is_valid(polygon: &Polygon) -> bool {
    check(polygon).is_valid()
}

/// Every intersecting edge pair in scan order; empty when the precondition fails.
pub fn intersecting_edges(polygon: &Polygon) -> Vec<(usize, usize)> {
    let pts = polygon.points();
    if precondition(pts).is_some() {
        return Vec::new();
    }
    edge_pairs(pts.len())
        .filter(|&pair| edges_cross(pts, pair))
        .collect()
}

/// Result of `repair_report`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repair {
    /// Diagnosis of the input.
    pub validity: Validity,
    /// Input copy when valid, else the open hull.
    pub polygon: Polygon,
    /// Distinct input vertices absent from `polygon`.
    pub dropped: Vec<Point>,
}

impl Repair {
    #[inline]
    pub fn repaired(&self) -> bool {
        !self.validity.is_valid()
    }
}

/// Repair with diagnostics.
pub fn repair_report(polygon: &Polygon, cfg: HullCfg) -> Repair {
    let validity = check(polygon);
    if validity.is_valid() {
        return Repair {
            validity,
            polygon: polygon.clone(),
            dropped: Vec::new(),
        };
    }
    let distinct = polygon.distinct_points();
    let hull = convex_hull_with(&distinct, cfg);
    let kept: HashSet<Point> = hull.iter().copied().collect();
    let dropped = distinct.into_iter().filter(|p| !kept.contains(p)).collect();
    Repair {
        validity,
        polygon: Polygon::new(hull),
        dropped,
    }
}

#[inline]
pub fn repair_with(polygon: &Polygon, cfg: HullCfg) -> Polygon {
    repair_report(polygon, cfg).polygon
}

/// Valid input is returned as an equal copy; otherwise the open convex hull of
/// its distinct vertices (fewer than 3 distinct vertices are returned as-is).
#[inline]
pub fn repair(polygon: &Polygon) -> Polygon {
    repair_with(polygon, HullCfg::default())
}
