//! Integer polygon rings: self-intersection checks and convex-hull repair.
//!
//! Layout
//! - `geom`: `Point` and `Polygon` value types.
//! - `predicates`: orientation, on-segment and segment-intersection tests.
//! - `hull`: gift-wrapping convex hull (`HullCfg` controls collinear boundary points).
//! - `validate`: `is_valid`, `check`, `repair` and the structured `Repair` report.
//! - `rand`: deterministic ring samplers for tests and benches.
//!
//! All operations are total and pure: malformed input is classified as invalid,
//! never reported as an error.

pub mod geom;
pub mod hull;
pub mod predicates;
pub mod rand;
pub mod validate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{ParsePointError, Point, Polygon};
pub use hull::{convex_hull, convex_hull_with, Collinear, HullCfg};
pub use predicates::{on_segment, orientation, segments_intersect, Orientation};
pub use validate::{
    check, intersecting_edges, is_valid, repair, repair_report, repair_with, Repair, Validity,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Point, Polygon};
    pub use crate::hull::{convex_hull, convex_hull_with, Collinear, HullCfg};
    pub use crate::predicates::{orientation, segments_intersect, Orientation};
    pub use crate::rand::{draw_ring, draw_star_ring, ReplayToken, RingCfg, StarCfg, VertexCount};
    pub use crate::validate::{check, is_valid, repair, repair_report, repair_with, Repair, Validity};
}
