//! Cartesian to polar projection around a reference origin.
//!
//! Angles are measured counter-clockwise from the positive x axis and always
//! normalized into `[0, 2π)`. Distances are Euclidean and never negative.

use std::f64::consts::TAU;

/// Immutable cartesian point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Anything that has a cartesian position the engine can project.
///
/// The engine only ever calls [`Positioned::position`]; the rest of the
/// payload is opaque to it.
pub trait Positioned {
    /// Returns the current cartesian position
    fn position(&self) -> Point2D;
}

impl Positioned for Point2D {
    fn position(&self) -> Point2D {
        *self
    }
}

impl Positioned for (f64, f64) {
    fn position(&self) -> Point2D {
        Point2D::new(self.0, self.1)
    }
}

/// Polar position relative to an origin: `distance >= 0`, `angle` in `[0, 2π)`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarPoint {
    /// Euclidean distance from the origin
    pub distance: f64,
    /// Counter-clockwise angle from the positive x axis, in `[0, 2π)`
    pub angle: f64,
}

impl PolarPoint {
    /// Creates a polar point, normalizing the angle into `[0, 2π)`
    #[must_use]
    pub fn new(distance: f64, angle: f64) -> Self {
        Self { distance, angle: normalize_angle(angle) }
    }

    /// Converts back to cartesian coordinates around `origin`
    #[must_use]
    pub fn to_cartesian(self, origin: Point2D) -> Point2D {
        let (sin, cos) = self.angle.sin_cos();
        Point2D::new(origin.x + self.distance * cos, origin.y + self.distance * sin)
    }
}

/// Folds any angle into `[0, 2π)` with a single modulo.
///
/// Cost is independent of the magnitude of `radians`. `-0.0` comes back as
/// `+0.0`. Non-finite input yields NaN, which no query bound ever matches.
///
/// # Examples
/// ```
/// use ringslice::polar::normalize_angle;
/// use std::f64::consts::{PI, TAU};
///
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((0.0..TAU).contains(&normalize_angle(100.0 * PI)));
/// ```
#[inline]
#[must_use]
pub fn normalize_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU || wrapped == 0.0 { 0.0 } else { wrapped }
}

/// Projects `position` into polar space around `origin`.
///
/// When `position == origin` the difference vector is `(+0.0, +0.0)` and
/// `f64::atan2(+0.0, +0.0)` is `+0.0`, so the result is `(0, 0)`.
///
/// # Examples
/// ```
/// use ringslice::polar::{project, Point2D};
/// use std::f64::consts::PI;
///
/// let polar = project(Point2D::new(0.0, -10.0), Point2D::new(0.0, 0.0));
/// assert_eq!(polar.distance, 10.0);
/// assert!((polar.angle - 3.0 * PI / 2.0).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn project(position: Point2D, origin: Point2D) -> PolarPoint {
    let dx = position.x - origin.x;
    let dy = position.y - origin.y;
    PolarPoint {
        distance: dx.hypot(dy),
        angle: normalize_angle(dy.atan2(dx)),
    }
}
