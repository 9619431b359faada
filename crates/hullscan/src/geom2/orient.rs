//! Orientation test (2D cross product).

use super::types::Point;

/// Turn classification of `b` relative to the directed line `p → a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    AntiClockwise,
    Collinear,
    Clockwise,
}

/// Cross product of `(a − p)` and `(b − p)`.
///
/// Positive when `b` lies anti-clockwise of `p → a`, negative when clockwise,
/// exactly `0.0` when collinear. The argument binding is fixed: this is the
/// side of `b` w.r.t. line `p → a`, not the turn at vertex `a`.
#[inline]
pub fn cross(p: Point, a: Point, b: Point) -> f64 {
    (a.x - p.x) * (b.y - p.y) - (a.y - p.y) * (b.x - p.x)
}

/// Classify `cross(p, a, b)` by sign (exact zero test).
#[inline]
pub fn turn(p: Point, a: Point, b: Point) -> Turn {
    let c = cross(p, a, b);
    if c > 0.0 {
        Turn::AntiClockwise
    } else if c < 0.0 {
        Turn::Clockwise
    } else {
        Turn::Collinear
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn collinear_is_exact_zero() {
        let p1 = vector![2.0, 12.0];
        let p2 = vector![4.0, 24.0];
        let p3 = vector![6.0, 36.0];
        assert_eq!(cross(p1, p2, p3), 0.0);
        assert_eq!(turn(p1, p2, p3), Turn::Collinear);
    }

    #[test]
    fn sign_follows_side_of_line() {
        let p1 = vector![2.0, 12.0];
        let p2 = vector![4.0, 24.0];
        // below the line through p1, p2
        let cw = vector![6.0, 30.0];
        assert!(cross(p1, p2, cw) < 0.0);
        assert_eq!(turn(p1, p2, cw), Turn::Clockwise);
        // above it
        let ccw = vector![6.0, 38.0];
        assert!(cross(p1, p2, ccw) > 0.0);
        assert_eq!(turn(p1, p2, ccw), Turn::AntiClockwise);

        let p6 = vector![7.1, 1.0];
        let p7 = vector![2.1, 0.5];
        let p8 = vector![0.0, 4.0];
        assert!(cross(p6, p7, p8) < 0.0);
    }

    #[test]
    fn swapping_a_and_b_flips_sign() {
        let p = vector![0.5, 0.25];
        let a = vector![3.0, 1.0];
        let b = vector![-1.0, 2.0];
        assert_eq!(cross(p, a, b), -cross(p, b, a));
    }
}
