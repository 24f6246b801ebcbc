//! Axis-aligned boxes in `(x, y, width, height)` form.
//!
//! In the polar index `x` is distance and `y` is angle.

use crate::polar::Point2D;

/// Axis-aligned box anchored at its minimum corner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Minimum corner along the first axis
    pub x: f64,
    /// Minimum corner along the second axis
    pub y: f64,
    /// Extent along `x`
    pub width: f64,
    /// Extent along `y`
    pub height: f64,
}

impl BoundingBox {
    /// Creates a box from its minimum corner and extent
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-size box sitting on a single point
    #[must_use]
    pub const fn point(x: f64, y: f64) -> Self {
        Self { x, y, width: 0.0, height: 0.0 }
    }

    /// Right edge, `x + width`
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge, `y + height`
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Closed containment test: `x <= p.x <= x + width` and `y <= p.y <= y + height`
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// True when either extent is zero (or NaN), i.e. the box covers no area
    #[inline]
    #[must_use]
    pub fn is_zero_area(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Zero-area placeholder used when a query has no second sub-box
    #[must_use]
    pub const fn empty() -> Self {
        Self::point(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_closed() {
        let b = BoundingBox::new(5.0, 0.0, 10.0, 1.0);
        assert!(b.contains(Point2D::new(5.0, 0.0)), "min corner is inside");
        assert!(b.contains(Point2D::new(15.0, 1.0)), "max corner is inside");
        assert!(b.contains(Point2D::new(10.0, 0.5)));
        assert!(!b.contains(Point2D::new(15.000_001, 0.5)));
        assert!(!b.contains(Point2D::new(10.0, -0.000_001)));
    }

    #[test]
    fn test_zero_area() {
        assert!(BoundingBox::point(3.0, 4.0).is_zero_area());
        assert!(BoundingBox::new(0.0, 0.0, 5.0, 0.0).is_zero_area());
        assert!(BoundingBox::new(0.0, 0.0, f64::NAN, 1.0).is_zero_area());
        assert!(!BoundingBox::new(0.0, 0.0, 5.0, 0.1).is_zero_area());
    }

    #[test]
    fn test_nan_point_never_contained() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(!b.contains(Point2D::new(f64::NAN, 1.0)));
    }
}
