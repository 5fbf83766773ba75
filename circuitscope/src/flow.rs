//! Particle-flow helpers for the animation driver.
//!
//! The composer's output is immutable; everything that changes per frame
//! lives here. The driver owns one phase value per particle, keyed by the
//! particle path's primitive id, and only reads the waypoint/voltage/current
//! fields of the primitives it was seeded with.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Point3;
use crate::primitives::DrawablePrimitive;

/// Particles per unit of path length.
pub const PARTICLE_DENSITY: f64 = 6.0;
/// Units of path length a particle travels per second per ampere.
pub const FLOW_SPEED: f64 = 4.0;

/// Hue at 0 V.
pub const COLOR_LOW: Rgb = Rgb {
    r: 0xfc as f32 / 255.0,
    g: 0xde as f32 / 255.0,
    b: 0x9c as f32 / 255.0,
};
/// Hue at 6 V and above.
pub const COLOR_HIGH: Rgb = Rgb {
    r: 0x7c as f32 / 255.0,
    g: 0x1d as f32 / 255.0,
    b: 0x6f as f32 / 255.0,
};
/// Voltage range mapped across the two reference hues.
const COLOR_VOLTAGE_MAX: f64 = 6.0;

/// Linear color; components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Particle color for a path voltage: linear interpolation between the two
/// reference hues over [0, 6] V, clamped outside that range.
pub fn voltage_color(voltage: f64) -> Rgb {
    let t = (voltage.clamp(0.0, COLOR_VOLTAGE_MAX) / COLOR_VOLTAGE_MAX) as f32;
    Rgb {
        r: COLOR_LOW.r + (COLOR_HIGH.r - COLOR_LOW.r) * t,
        g: COLOR_LOW.g + (COLOR_HIGH.g - COLOR_LOW.g) * t,
        b: COLOR_LOW.b + (COLOR_HIGH.b - COLOR_LOW.b) * t,
    }
}

/// A waypoint sequence with precomputed segment lengths, supporting
/// position-by-arc-length queries.
#[derive(Debug, Clone)]
pub struct Polyline {
    points: Vec<Point3>,
    segment_lengths: Vec<f64>,
    total_length: f64,
}

impl Polyline {
    pub fn new(points: Vec<Point3>) -> Self {
        let segment_lengths: Vec<f64> = points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .collect();
        let total_length = segment_lengths.iter().sum();
        Self {
            points,
            segment_lengths,
            total_length,
        }
    }

    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// Position at arc-length `distance` from the start, wrapping around the
    /// end of the path.
    pub fn point_at(&self, distance: f64) -> Point3 {
        if self.total_length == 0.0 {
            return self.points.first().copied().unwrap_or(Point3::ZERO);
        }
        let mut remaining = distance.rem_euclid(self.total_length);
        for (i, &length) in self.segment_lengths.iter().enumerate() {
            if remaining < length {
                let direction = (self.points[i + 1] - self.points[i]).normalized();
                return self.points[i] + direction * remaining;
            }
            remaining -= length;
        }
        // Accumulated rounding can leave a sliver past the last segment.
        *self.points.last().unwrap_or(&Point3::ZERO)
    }
}

struct FlowPath {
    line: Polyline,
    current: f64,
    phases: Vec<f64>,
}

/// Per-frame particle state for every particle path in a composition.
#[derive(Default)]
pub struct FlowDriver {
    paths: HashMap<String, FlowPath>,
}

impl FlowDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with particles seeded from the particle paths in
    /// `primitives`, evenly spaced at [`PARTICLE_DENSITY`] per unit length.
    pub fn seed(&mut self, primitives: &[DrawablePrimitive]) {
        self.paths.clear();
        for primitive in primitives {
            let DrawablePrimitive::ParticlePath {
                id,
                waypoints,
                current,
                ..
            } = primitive
            else {
                continue;
            };
            let line = Polyline::new(waypoints.clone());
            let count = (line.length() * PARTICLE_DENSITY).round() as usize;
            let phases = (0..count).map(|i| i as f64 / PARTICLE_DENSITY).collect();
            self.paths.insert(
                id.clone(),
                FlowPath {
                    line,
                    current: *current,
                    phases,
                },
            );
        }
    }

    /// Advance every particle by `dt` seconds; speed is proportional to the
    /// path's current.
    pub fn advance(&mut self, dt: f64) {
        for path in self.paths.values_mut() {
            let step = FLOW_SPEED * path.current * dt;
            let length = path.line.length();
            if length == 0.0 {
                continue;
            }
            for phase in &mut path.phases {
                *phase = (*phase + step).rem_euclid(length);
            }
        }
    }

    /// Current particle positions along the path with this primitive id.
    pub fn positions(&self, id: &str) -> Option<Vec<Point3>> {
        self.paths
            .get(id)
            .map(|path| path.phases.iter().map(|&p| path.line.point_at(p)).collect())
    }

    /// Total number of particles across all paths.
    pub fn particle_count(&self) -> usize {
        self.paths.values().map(|p| p.phases.len()).sum()
    }
}
