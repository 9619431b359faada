//! Basic 2D types for the hull pipeline.
//!
//! - `Point`: plain `Vector2<f64>`; equality is exact component equality.
//! - `IntPoint`, `Bounds`: integer rectangle plus point count for the generator.
//! - `HullError`: errors surfaced synchronously by every fallible stage.
//!
//! Numeric note
//! - No stage applies a tolerance. Angle ties and collinearity are decided by
//!   exact `f64` equality, so near-collinear inputs may classify differently
//!   across platforms. This is a known limitation, not an error condition.

use nalgebra::Vector2;
use std::fmt;

/// Planar point. Immutable value; compared bit-for-bit on both components.
pub type Point = Vector2<f64>;

/// Corner of a generation rectangle (non-negative integer coordinates).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct IntPoint {
    pub x: u32,
    pub y: u32,
}

impl IntPoint {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for IntPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangle `[lower_left, upper_right)` and the number of points to draw in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub lower_left: IntPoint,
    pub upper_right: IntPoint,
    pub count: usize,
}

impl Bounds {
    /// Margin from the canvas origin to the lower-left corner.
    pub const CANVAS_MARGIN_LOW: u32 = 10;
    /// Margin subtracted from the canvas extent for the upper-right corner.
    pub const CANVAS_MARGIN_HIGH: u32 = 20;

    #[inline]
    pub fn new(lower_left: IntPoint, upper_right: IntPoint, count: usize) -> Self {
        Self {
            lower_left,
            upper_right,
            count,
        }
    }

    /// Inset bounds for a drawing surface of `width × height`.
    ///
    /// Tiny canvases saturate to zero and come back degenerate from `validate`.
    pub fn for_canvas(width: u32, height: u32, count: usize) -> Self {
        Self {
            lower_left: IntPoint::new(Self::CANVAS_MARGIN_LOW, Self::CANVAS_MARGIN_LOW),
            upper_right: IntPoint::new(
                width.saturating_sub(Self::CANVAS_MARGIN_HIGH),
                height.saturating_sub(Self::CANVAS_MARGIN_HIGH),
            ),
            count,
        }
    }

    /// Strict corner ordering on both axes.
    pub fn validate(&self) -> Result<(), HullError> {
        if self.upper_right.x > self.lower_left.x && self.upper_right.y > self.lower_left.y {
            Ok(())
        } else {
            Err(HullError::DegenerateBounds {
                lower_left: self.lower_left,
                upper_right: self.upper_right,
            })
        }
    }

    /// Membership in the half-open rectangle.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        let (lx, ly) = (f64::from(self.lower_left.x), f64::from(self.lower_left.y));
        let (ux, uy) = (f64::from(self.upper_right.x), f64::from(self.upper_right.y));
        p.x >= lx && p.x < ux && p.y >= ly && p.y < uy
    }
}

/// Errors surfaced by generation, pivot selection, and hull construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// Upper-right corner does not strictly exceed lower-left on both axes.
    DegenerateBounds {
        lower_left: IntPoint,
        upper_right: IntPoint,
    },
    /// Too few points for the requested stage.
    InsufficientPoints { needed: usize, got: usize },
}

impl HullError {
    pub(crate) fn insufficient(needed: usize, got: usize) -> Self {
        Self::InsufficientPoints { needed, got }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::DegenerateBounds {
                lower_left,
                upper_right,
            } => write!(
                f,
                "degenerate bounds: upper-right {upper_right} must exceed lower-left {lower_left} on both axes"
            ),
            HullError::InsufficientPoints { needed, got } => {
                write!(f, "insufficient points: need at least {needed}, got {got}")
            }
        }
    }
}

impl std::error::Error for HullError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_bounds_are_inset() {
        let b = Bounds::for_canvas(480, 270, 20);
        assert_eq!(b.lower_left, IntPoint::new(10, 10));
        assert_eq!(b.upper_right, IntPoint::new(460, 250));
        assert_eq!(b.count, 20);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn tiny_canvas_is_degenerate() {
        let b = Bounds::for_canvas(25, 400, 5);
        assert!(matches!(
            b.validate(),
            Err(HullError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn validate_requires_strict_order_on_both_axes() {
        let ll = IntPoint::new(10, 10);
        assert!(Bounds::new(ll, IntPoint::new(11, 11), 1).validate().is_ok());
        assert!(Bounds::new(ll, IntPoint::new(10, 20), 1).validate().is_err());
        assert!(Bounds::new(ll, IntPoint::new(20, 10), 1).validate().is_err());
        assert!(Bounds::new(ll, IntPoint::new(5, 20), 1).validate().is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let b = Bounds::new(IntPoint::new(0, 0), IntPoint::new(10, 10), 0);
        assert!(b.contains(Point::new(0.0, 0.0)));
        assert!(b.contains(Point::new(9.999, 9.0)));
        assert!(!b.contains(Point::new(10.0, 5.0)));
        assert!(!b.contains(Point::new(5.0, -0.5)));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let e = HullError::insufficient(2, 1);
        assert_eq!(e.to_string(), "insufficient points: need at least 2, got 1");
        let d = HullError::DegenerateBounds {
            lower_left: IntPoint::new(3, 3),
            upper_right: IntPoint::new(3, 9),
        };
        assert!(d.to_string().starts_with("degenerate bounds"));
    }
}
