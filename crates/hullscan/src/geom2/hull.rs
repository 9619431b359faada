//! Stack-based hull construction over an angle-sorted point ring.
//!
//! Algorithm
//! - Seed the stack with the smallest-angle point (`sorted.last`) and the pivot.
//! - For each sorted point `b`: pop while `cross(second_to_last, last, b) >= 0`,
//!   then push `b`.
//! - Pop once more: the final push re-adds the seed `sorted.last`.
//!
//! The `>= 0` pop rule together with the descending-angle order yields a
//! clockwise traversal starting at the seed. Keep both as they are; flipping
//! either one changes the vertex order callers depend on.

use super::orient::cross;
use super::types::{HullError, Point};

/// Ordered hull boundary with tail-only mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(n),
        }
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.vertices.push(p);
    }

    /// Remove and return the last vertex.
    #[inline]
    pub fn pop(&mut self) -> Option<Point> {
        self.vertices.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Point> {
        self.vertices.get(i).copied()
    }

    /// `(last, second_to_last)` if at least two vertices are present.
    #[inline]
    pub fn last_two(&self) -> Option<(Point, Point)> {
        match self.vertices.as_slice() {
            [.., p, a] => Some((*a, *p)),
            _ => None,
        }
    }

    /// Fewer than three vertices: not a proper polygon.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    /// Whether `b` would make the current tail turn anti-clockwise (or run straight).
    fn is_anti_clockwise(&self, b: Point) -> bool {
        match self.last_two() {
            Some((a, p)) => cross(p, a, b) >= 0.0,
            None => false,
        }
    }
}

impl std::ops::Index<usize> for Hull {
    type Output = Point;
    fn index(&self, i: usize) -> &Point {
        &self.vertices[i]
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// Build the hull from points already sorted by [`super::polar::sort_by_angle`].
///
/// Errors with `InsufficientPoints` on an empty ring. A single sorted point
/// yields a one-vertex (degenerate) hull.
pub fn build_hull(sorted: &[Point], pivot: Point) -> Result<Hull, HullError> {
    let seed = *sorted.last().ok_or_else(|| HullError::insufficient(1, 0))?;
    let mut hull = Hull::with_capacity(sorted.len() + 2);
    hull.push(seed);
    hull.push(pivot);
    for &b in sorted {
        while hull.is_anti_clockwise(b) {
            hull.pop();
        }
        hull.push(b);
    }
    hull.pop();
    Ok(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::polar::sort_by_angle;
    use nalgebra::vector;

    #[test]
    fn unit_square_clockwise_from_seed() {
        let pivot = vector![0.0, 0.0];
        let sorted = sort_by_angle(
            vec![vector![1.0, 0.0], vector![1.0, 1.0], vector![0.0, 1.0]],
            pivot,
        );
        let hull = build_hull(&sorted, pivot).unwrap();
        assert_eq!(
            hull.as_slice(),
            &[
                vector![1.0, 0.0],
                vector![0.0, 0.0],
                vector![0.0, 1.0],
                vector![1.0, 1.0],
            ]
        );
        assert!(!hull.is_degenerate());
    }

    #[test]
    fn interior_point_is_dropped() {
        let pivot = vector![0.0, 0.0];
        let sorted = sort_by_angle(
            vec![
                vector![4.0, 0.5],
                vector![1.0, 1.0],
                vector![2.0, 4.0],
                vector![-2.0, 3.0],
            ],
            pivot,
        );
        let hull = build_hull(&sorted, pivot).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(hull.iter().all(|p| *p != vector![1.0, 1.0]));
        assert_eq!(hull.get(0), Some(vector![4.0, 0.5]));
        assert_eq!(hull.get(1), Some(pivot));
    }

    #[test]
    fn single_point_leaves_degenerate_hull() {
        let pivot = vector![0.0, 0.0];
        let a = vector![1.0, 1.0];
        let hull = build_hull(&[a], pivot).unwrap();
        assert_eq!(hull.as_slice(), &[a]);
        assert!(hull.is_degenerate());
    }

    #[test]
    fn empty_ring_is_an_error() {
        assert_eq!(
            build_hull(&[], vector![0.0, 0.0]),
            Err(HullError::InsufficientPoints { needed: 1, got: 0 })
        );
    }

    #[test]
    fn last_two_reports_tail_first() {
        let mut h = Hull::default();
        assert!(h.last_two().is_none());
        h.push(vector![1.0, 0.0]);
        assert!(h.last_two().is_none());
        h.push(vector![2.0, 0.0]);
        h.push(vector![3.0, 0.0]);
        assert_eq!(h.last_two(), Some((vector![3.0, 0.0], vector![2.0, 0.0])));
        assert_eq!(h.pop(), Some(vector![3.0, 0.0]));
        assert_eq!(h[1], vector![2.0, 0.0]);
    }
}
