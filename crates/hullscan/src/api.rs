//! Caller-facing pipeline: generate → compute_pivot → compute_hull.
//!
//! Each call is a pure function of its inputs (plus the random source for
//! `generate`). Nothing is cached between calls.

use crate::geom2::rand::{generate_replay, ReplayToken};
use crate::geom2::{
    build_hull, select_pivot, sort_by_angle, Bounds, Hull, HullError, Point, PointSource, Scene,
};

/// Random points inside `bounds`, drawn from the thread-local generator.
pub fn generate(bounds: Bounds) -> Result<Vec<Point>, HullError> {
    crate::geom2::rand::generate(bounds, &mut rand::thread_rng())
}

/// Reproducible variant of [`generate`].
pub fn generate_seeded(bounds: Bounds, tok: ReplayToken) -> Result<Vec<Point>, HullError> {
    generate_replay(bounds, tok)
}

/// Scene from either bounds (thread-local generator) or explicit points.
pub fn scene(source: PointSource) -> Result<Scene, HullError> {
    Scene::new(source, &mut rand::thread_rng())
}

/// Split off the lowest point (earliest on ties). Needs at least two points.
pub fn compute_pivot(points: Vec<Point>) -> Result<(Point, Vec<Point>), HullError> {
    select_pivot(points)
}

/// Angle-sort `points` around `pivot` and build the hull. Needs at least one point.
pub fn compute_hull(points: &[Point], pivot: Point) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::InsufficientPoints { needed: 1, got: 0 });
    }
    let sorted = sort_by_angle(points.to_vec(), pivot);
    build_hull(&sorted, pivot)
}
