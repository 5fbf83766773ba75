//! Drawable primitives handed to the external renderer.
//!
//! Each primitive carries a stable identifier derived from its kind and the
//! coordinates of its geometry, so two compositions of identical circuits
//! produce identical ids and the renderer can key/diff primitives across
//! re-layouts.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point3, WireSegment};

/// Component kinds with a drawable symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Battery,
    Resistor,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Battery => write!(f, "battery"),
            ComponentKind::Resistor => write!(f, "resistor"),
        }
    }
}

/// One atomic drawable/animatable unit emitted by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawablePrimitive {
    /// A plain wire leg.
    Wire { id: String, segment: WireSegment },
    /// A component symbol: its segments plus an optional short readout
    /// (branch current) for hover display.
    Symbol {
        id: String,
        component: ComponentKind,
        segments: Vec<WireSegment>,
        label: Option<String>,
    },
    /// Waypoints for a flowing-particle animation. Color follows `voltage`,
    /// speed follows `current`; both are applied by the animation driver.
    ParticlePath {
        id: String,
        waypoints: Vec<Point3>,
        voltage: f64,
        current: f64,
    },
    /// Positioned text.
    Label {
        id: String,
        position: Point3,
        text: String,
        font_size: f64,
    },
}

impl DrawablePrimitive {
    pub fn id(&self) -> &str {
        match self {
            DrawablePrimitive::Wire { id, .. }
            | DrawablePrimitive::Symbol { id, .. }
            | DrawablePrimitive::ParticlePath { id, .. }
            | DrawablePrimitive::Label { id, .. } => id,
        }
    }
}

/// Build a primitive id from its kind tag and defining points.
///
/// Coordinates are formatted to three decimals; negative zero is normalized
/// so `-0.0` and `0.0` produce the same id.
pub fn primitive_id(prefix: &str, points: &[Point3]) -> String {
    let mut id = String::with_capacity(prefix.len() + points.len() * 24);
    id.push_str(prefix);
    for point in points {
        id.push(':');
        id.push_str(&format_coord(point.x));
        id.push(',');
        id.push_str(&format_coord(point.y));
        id.push(',');
        id.push_str(&format_coord(point.z));
    }
    id
}

fn format_coord(value: f64) -> String {
    // -0.0 == 0.0, so this folds the two representations together.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_deterministic() {
        let points = [Point3::new(2.0, 2.5, 0.0), Point3::new(2.0, 1.3, 0.0)];
        assert_eq!(primitive_id("wire", &points), primitive_id("wire", &points));
        assert_eq!(
            primitive_id("wire", &points),
            "wire:2.000,2.500,0.000:2.000,1.300,0.000"
        );
    }

    #[test]
    fn test_id_distinguishes_kinds_and_geometry() {
        let points = [Point3::new(2.0, 2.5, 0.0)];
        let shifted = [Point3::new(2.0, 2.501, 0.0)];
        assert_ne!(primitive_id("wire", &points), primitive_id("flow", &points));
        assert_ne!(primitive_id("wire", &points), primitive_id("wire", &shifted));
    }

    #[test]
    fn test_id_normalizes_negative_zero() {
        assert_eq!(
            primitive_id("label", &[Point3::new(-0.0, 1.0, 0.0)]),
            primitive_id("label", &[Point3::new(0.0, 1.0, 0.0)])
        );
    }

    #[test]
    fn test_serde_tagging() {
        let primitive = DrawablePrimitive::Label {
            id: "label:0.000,1.000,0.000".into(),
            position: Point3::new(0.0, 1.0, 0.0),
            text: "7 V".into(),
            font_size: 0.12,
        };
        let json = serde_json::to_value(&primitive).unwrap();
        assert_eq!(json["kind"], "label");
        assert_eq!(json["text"], "7 V");
    }
}
