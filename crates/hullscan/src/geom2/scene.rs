//! Point source and the derived pivot/remainder pair a renderer holds.

use super::hull::{build_hull, Hull};
use super::pivot::select_pivot;
use super::polar::sort_by_angle;
use super::rand::{generate, generate_replay, ReplayToken};
use super::types::{Bounds, HullError, Point};
use rand::Rng;

/// Either synthesize points inside bounds or adopt a caller-provided list.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSource {
    Bounds(Bounds),
    Points(Vec<Point>),
}

impl From<Bounds> for PointSource {
    fn from(b: Bounds) -> Self {
        PointSource::Bounds(b)
    }
}

impl From<Vec<Point>> for PointSource {
    fn from(v: Vec<Point>) -> Self {
        PointSource::Points(v)
    }
}

/// A point set split into its pivot and the remaining points.
///
/// Built once per regenerate; `sorted` and `hull` are recomputed on every call.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub pivot: Point,
    pub points: Vec<Point>,
}

impl Scene {
    pub fn new<R: Rng + ?Sized>(source: PointSource, rng: &mut R) -> Result<Self, HullError> {
        let points = match source {
            PointSource::Bounds(b) => generate(b, rng)?,
            PointSource::Points(v) => v,
        };
        Self::from_points(points)
    }

    /// Reproducible scene for bounds keyed by `tok`.
    pub fn replay(bounds: Bounds, tok: ReplayToken) -> Result<Self, HullError> {
        Self::from_points(generate_replay(bounds, tok)?)
    }

    pub fn from_points(points: Vec<Point>) -> Result<Self, HullError> {
        let (pivot, points) = select_pivot(points)?;
        Ok(Self { pivot, points })
    }

    /// Remaining points ordered by descending polar angle about the pivot.
    pub fn sorted(&self) -> Vec<Point> {
        sort_by_angle(self.points.clone(), self.pivot)
    }

    pub fn hull(&self) -> Result<Hull, HullError> {
        build_hull(&self.sorted(), self.pivot)
    }

    /// Pivot followed by the remainder (total point count).
    pub fn all_points(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.pivot).chain(self.points.iter().copied())
    }

    /// Total number of points, pivot included.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len() + 1
    }
}
