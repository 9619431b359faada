//! Convex hulls of planar point sets and random point sets in rectangles.
//!
//! The hull is built by a Graham-style scan: the lowest point is the pivot,
//! the rest are ordered by descending polar angle around it, and a stack of
//! boundary vertices is extended and retracted with a cross-product test.
//!
//! Entry points
//! - `api::{generate, compute_pivot, compute_hull}` for the three-step pipeline.
//! - `geom2::Scene` for callers that keep a point set and re-query its hull.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Bounds, Hull, HullError, IntPoint, Point};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{compute_hull, compute_pivot, generate, generate_seeded, scene};
    pub use crate::geom2::rand::ReplayToken;
    pub use crate::geom2::{
        build_hull, cross, select_pivot, sort_by_angle, turn, Bounds, Hull, HullError, IntPoint,
        Point, PointSource, Scene, Turn,
    };
}
