//! Millipoint geometry: points, bounding rectangles and transforms.
//!
//! Coordinates are integer millipoints (1/72000 inch). Transform
//! coefficients use the FontManager's 16.16 fixed-point layout, so a matrix
//! read straight out of a control string needs no conversion.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// `1.0` in 16.16 fixed point.
pub const FIXED_ONE: i32 = 1 << 16;

/// Rounding bias added before the 16-bit shift (rounds half up).
const FIXED_HALF: i64 = 1 << 15;

/// A position or displacement in millipoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Dot product, widened so millipoint products cannot overflow.
    #[inline]
    pub fn dot(self, other: Point) -> i64 {
        i64::from(self.x) * i64::from(other.x) + i64::from(self.y) * i64::from(other.y)
    }

    /// Point halfway between `self` and `other`, rounded toward negative infinity.
    #[inline]
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: ((i64::from(self.x) + i64::from(other.x)).div_euclid(2)) as i32,
            y: ((i64::from(self.y) + i64::from(other.y)).div_euclid(2)) as i32,
        }
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_add(rhs.x),
            y: self.y.saturating_add(rhs.y),
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding rectangle, `(x0, y0)` bottom left to `(x1, y1)` top right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Rect { x0, y0, x1, y1 }
    }

    /// Zero-size rectangle sitting on a single point.
    #[inline]
    pub const fn at(p: Point) -> Self {
        Rect {
            x0: p.x,
            y0: p.y,
            x1: p.x,
            y1: p.y,
        }
    }

    /// Smallest rectangle covering both.
    #[inline]
    #[must_use]
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Grow to cover `p`.
    #[inline]
    #[must_use]
    pub fn include_point(self, p: Point) -> Rect {
        self.union(Rect::at(p))
    }

    #[inline]
    #[must_use]
    pub fn translate(self, by: Point) -> Rect {
        Rect {
            x0: self.x0.saturating_add(by.x),
            y0: self.y0.saturating_add(by.y),
            x1: self.x1.saturating_add(by.x),
            y1: self.y1.saturating_add(by.y),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) - ({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// 2D affine transform.
///
/// `x' = a·x + c·y + e`, `y' = b·x + d·y + f`, where `a..d` are 16.16 fixed
/// point and `e`, `f` are millipoint translations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
    pub e: i32,
    pub f: i32,
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: FIXED_ONE,
        b: 0,
        c: 0,
        d: FIXED_ONE,
        e: 0,
        f: 0,
    };

    /// Build a matrix from its six components.
    #[inline]
    pub const fn new(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32) -> Self {
        Matrix { a, b, c, d, e, f }
    }

    /// Axis-aligned scale by 16.16 factors, no rotation or translation.
    #[inline]
    pub const fn scale(sx: i32, sy: i32) -> Self {
        Matrix::new(sx, 0, 0, sy, 0, 0)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn translation(&self) -> Point {
        Point::new(self.e, self.f)
    }

    /// Transform a displacement (no translation).
    #[inline]
    pub fn apply_linear(&self, v: Point) -> Point {
        let x = (i64::from(self.a) * i64::from(v.x)).saturating_add(i64::from(self.c) * i64::from(v.y));
        let y = (i64::from(self.b) * i64::from(v.x)).saturating_add(i64::from(self.d) * i64::from(v.y));
        Point::new(fixed_to_i32(x), fixed_to_i32(y))
    }

    /// Transform a position.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        self.apply_linear(p) + self.translation()
    }

    /// Bounding box of the four transformed corners of `r`.
    pub fn transform_rect(&self, r: Rect) -> Rect {
        let corners = [
            self.apply(Point::new(r.x0, r.y0)),
            self.apply(Point::new(r.x1, r.y0)),
            self.apply(Point::new(r.x0, r.y1)),
            self.apply(Point::new(r.x1, r.y1)),
        ];
        corners
            .iter()
            .skip(1)
            .fold(Rect::at(corners[0]), |acc, &p| acc.include_point(p))
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fx = |v: i32| f64::from(v) / f64::from(FIXED_ONE);
        write!(
            f,
            "[{:.4} {:.4} {:.4} {:.4} {} {}]",
            fx(self.a),
            fx(self.b),
            fx(self.c),
            fx(self.d),
            self.e,
            self.f
        )
    }
}

/// Drop the 16 fraction bits of a widened product, rounding half up and
/// saturating to the `i32` range.
#[inline]
fn fixed_to_i32(v: i64) -> i32 {
    let shifted = v.saturating_add(FIXED_HALF) >> 16;
    shifted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Matrix, Point, Rect};
    crate::static_assert_size!(Point, 8);
    crate::static_assert_size!(Rect, 16);
    crate::static_assert_size!(Matrix, 24);
}
