//! Pivot selection: lowest `y`, earliest occurrence on ties.

use super::types::{HullError, Point};

/// Index of the lowest point. `None` when fewer than two points are given.
///
/// Only a strictly smaller `y` replaces the current minimum, so the first of
/// several equally low points wins regardless of `x`.
pub fn lowest_index(points: &[Point]) -> Option<usize> {
    if points.len() < 2 {
        return None;
    }
    let mut lowest = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if p.y < points[lowest].y {
            lowest = i;
        }
    }
    Some(lowest)
}

/// Remove the pivot from `points` and return it with the remainder.
///
/// The remainder keeps the original relative order.
pub fn select_pivot(mut points: Vec<Point>) -> Result<(Point, Vec<Point>), HullError> {
    let idx = lowest_index(&points).ok_or_else(|| HullError::insufficient(2, points.len()))?;
    let pivot = points.remove(idx);
    Ok((pivot, points))
}
