//! Planar geometry primitives for the schematic.
//!
//! Diagrams live in the XY plane but carry a z coordinate so a 3-D renderer
//! can consume the output directly; every point this crate produces has z = 0.

pub mod symbols;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in the renderer's 3-D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point3) -> Point3 {
        (self + other) * 0.5
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(self, other: Point3) -> f64 {
        (other - self).length()
    }

    /// Unit vector in the direction of `self`. Zero stays zero.
    pub fn normalized(self) -> Point3 {
        let len = self.length();
        if len == 0.0 {
            Point3::ZERO
        } else {
            self * (1.0 / len)
        }
    }

    /// Unit vector perpendicular to `self` within the XY plane
    /// (`self × ẑ`, normalized). Symbols use this to offset their strokes.
    pub fn perpendicular(self) -> Point3 {
        Point3::new(self.y, -self.x, 0.0).normalized()
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;

    fn mul(self, scalar: f64) -> Point3 {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// A straight drawable line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireSegment {
    pub from: Point3,
    pub to: Point3,
}

impl WireSegment {
    pub fn new(from: Point3, to: Point3) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}
