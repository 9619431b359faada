//! Polar-angle ordering around the pivot.
//!
//! Order: descending `atan2` angle (from `+π` toward `−π`); exactly equal
//! angles fall back to descending `y`. Identical points compare equal and keep
//! their input order (the sort is stable). No tolerance is applied.
//!
//! Offsets are normalized so `-0.0` becomes `+0.0` before `atan2`: points that
//! are `==` must land on the same angle or the order is not total.

use super::types::Point;
use std::cmp::Ordering;

/// Angle of `p` seen from `pivot`, in `(−π, π]`.
#[inline]
pub fn polar_angle(pivot: Point, p: Point) -> f64 {
    // `x + 0.0` maps -0.0 to +0.0 and leaves every other value unchanged.
    let dy = (p.y - pivot.y) + 0.0;
    let dx = (p.x - pivot.x) + 0.0;
    dy.atan2(dx)
}

/// Comparator used by [`sort_by_angle`].
pub fn compare_polar(pivot: Point, p0: &Point, p1: &Point) -> Ordering {
    if p0 == p1 {
        return Ordering::Equal;
    }
    let a0 = polar_angle(pivot, *p0);
    let a1 = polar_angle(pivot, *p1);
    if a0 == a1 {
        return p1.y.partial_cmp(&p0.y).unwrap_or(Ordering::Equal);
    }
    a1.partial_cmp(&a0).unwrap_or(Ordering::Equal)
}

/// Sort `points` by descending polar angle about `pivot` (ties: higher `y` first).
pub fn sort_by_angle(mut points: Vec<Point>, pivot: Point) -> Vec<Point> {
    points.sort_by(|p0, p1| compare_polar(pivot, p0, p1));
    points
}
