//! Planar convex hull by angular ordering around the lowest point.
//!
//! Pipeline
//! - `rand::generate` (or caller points) → `pivot::select_pivot`
//!   → `polar::sort_by_angle` → `hull::build_hull` (using `orient::cross`).
//! - `Scene` bundles a point source with its pivot for repeated hull queries.
//!
//! Numerics
//! - Exact `f64` comparisons throughout: the angle tie-break and the
//!   collinearity test use `==`. Reproducing hull membership on fixtures
//!   depends on this, so no tolerance is introduced anywhere.

pub mod hull;
pub mod orient;
pub mod pivot;
pub mod polar;
pub mod rand;
mod scene;
mod types;

pub use hull::{build_hull, Hull};
pub use orient::{cross, turn, Turn};
pub use pivot::{lowest_index, select_pivot};
pub use polar::{compare_polar, polar_angle, sort_by_angle};
pub use scene::{PointSource, Scene};
pub use types::{Bounds, HullError, IntPoint, Point};
