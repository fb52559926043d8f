//! Exact orientation and segment-intersection predicates on lattice points.
//!
//! Coordinates are `i32`; differences are taken in `i64` and products in
//! `i128`, so the cross product is exact for every input.

use crate::geom::Point;
use nalgebra::Vector2;

/// Turn direction of `p → q → r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    /// Right turn (positive cross value below).
    Clockwise,
    /// Left turn (negative cross value below).
    CounterClockwise,
}

impl Orientation {
    /// Numeric code: 0 collinear, 1 clockwise, 2 counter-clockwise.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Orientation::Collinear => 0,
            Orientation::Clockwise => 1,
            Orientation::CounterClockwise => 2,
        }
    }

    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

#[inline]
fn perp(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

/// Sign of `(q.y-p.y)*(r.x-q.x) - (q.x-p.x)*(r.y-q.y)`.
///
/// That value equals `-perp(q - p, r - q)`, so a left turn is negative.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = -perp(p.vector_to(q), q.vector_to(r));
    match val.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// `r` lies in the bounding box of segment `p-q`.
///
/// Only a containment test once `r` is known to be collinear with `p-q`.
#[inline]
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    r.x() <= p.x().max(q.x())
        && r.x() >= p.x().min(q.x())
        && r.y() <= p.y().max(q.y())
        && r.y() >= p.y().min(q.y())
}

/// Closed segments `p1-q1` and `p2-q2` share at least one point.
///
/// Proper crossings, touching endpoints and collinear overlaps all count.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1.is_collinear() && on_segment(p1, q1, p2))
        || (o2.is_collinear() && on_segment(p1, q1, q2))
        || (o3.is_collinear() && on_segment(p2, q2, p1))
        || (o4.is_collinear() && on_segment(p2, q2, q1))
}
