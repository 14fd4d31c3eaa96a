//! 2D points and vectors for surface-space animation.
//!
//! Coordinates follow the usual surface convention: origin at the top
//! left, +x right, +y down.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point on a 2D surface.
///
/// # Example
///
/// ```rust
/// use elastica::{Point2, Vec2};
///
/// let p = Point2::new(3.0, 4.0);
/// assert_eq!(p.distance_to(Point2::origin()), 5.0);
/// let moved = p + Vec2::new(1.0, -1.0);
/// assert_eq!(moved, Point2::new(4.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2 {
    /// Creates a point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin (0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`.
    #[cfg(feature = "std")]
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        (other - self).magnitude()
    }

    /// Whether both coordinates are finite (no NaN or infinity).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Clamps the point into the axis-aligned rectangle
    /// `[0, width] x [0, height]`.
    #[inline]
    pub fn clamped_to(self, width: f64, height: f64) -> Self {
        Self {
            x: self.x.clamp(0.0, width),
            y: self.y.clamp(0.0, height),
        }
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, v: Vec2) -> Point2 {
        Point2 {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl AddAssign<Vec2> for Point2 {
    #[inline]
    fn add_assign(&mut self, v: Vec2) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl Sub for Point2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// A displacement in 2D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// Creates a vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Returns the magnitude (length) of the vector.
    #[cfg(feature = "std")]
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Whether both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    #[inline]
    fn neg(self) -> Vec2 {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2 {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}
