//! Angle normalization and 2D point helpers.
//!
//! All points live in a screen frame with the y axis pointing down, so a
//! positive rotation turns clockwise on screen.

/// Wrap an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Whether two angles point the same way, modulo full turns.
pub fn equivalent_degrees(a: f64, b: f64, epsilon: f64) -> bool {
    let diff = normalize_degrees(a - b);
    diff <= epsilon || 360.0 - diff <= epsilon
}

/// A point in a gear's local or a scene's viewport frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert polar coordinates (angle in radians) to a point.
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            x: radius * cos,
            y: radius * sin,
        }
    }

    /// Rotate about the origin by `degrees`.
    pub fn rotated(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Distance from the origin.
    pub fn radius(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in radians, in `(-PI, PI]`.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
