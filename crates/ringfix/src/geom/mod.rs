//! Value types: lattice `Point` and the owned vertex sequence `Polygon`.
//!
//! - `Point`: immutable `i32` coordinates; differences are widened to `i64`
//!   (nalgebra `Vector2`) so downstream predicates never overflow.
//! - `Polygon`: ordered vertices in traversal order. A ring repeats its first
//!   vertex at the end; this is a convention checked by `validate`, not enforced here.

mod point;
mod polygon;

pub use point::{ParsePointError, Point};
pub use polygon::Polygon;
