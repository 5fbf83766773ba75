//! Component symbol generators.
//!
//! Each symbol is a pure function from two endpoint positions to the line
//! segments that draw it. Symbols make no orientation assumption beyond
//! `axis = normalize(dst - src)`; the perpendicular is taken within the XY
//! plane, so symbols always render flat in the diagram plane.

use super::{Point3, WireSegment};

/// Distance from the battery midpoint to the short-stroke center,
/// against the negative→positive axis.
const BATTERY_NEGATIVE_INSET: f64 = 0.05;
/// Distance from the battery midpoint to the long-stroke center,
/// along the negative→positive axis.
const BATTERY_POSITIVE_INSET: f64 = 0.1;
/// Half-length of the short (negative) cross-stroke.
const BATTERY_NEGATIVE_HALF: f64 = 0.25;
/// Half-length of the long (positive) cross-stroke.
const BATTERY_POSITIVE_HALF: f64 = 0.5;

/// Half of the zig-zag span; the body occupies 1.0 unit around the midpoint.
const RESISTOR_BODY_HALF: f64 = 0.5;
/// Perpendicular amplitude of each zig-zag tooth.
const RESISTOR_TOOTH_OFFSET: f64 = 0.2;
/// Number of zig-zag teeth.
const RESISTOR_TOOTH_COUNT: usize = 6;

/// Battery symbol between its negative and positive terminals.
///
/// Two lead segments plus two perpendicular cross-strokes near the midpoint;
/// the positive stroke is twice as long as the negative one (line thickness
/// is a rendering concern, so polarity is encoded in stroke length).
pub fn battery_symbol(negative: Point3, positive: Point3) -> Vec<WireSegment> {
    let center = negative.midpoint(positive);
    let axis = (positive - negative).normalized();
    let normal = (positive - negative).perpendicular();

    let negative_mid = center - axis * BATTERY_NEGATIVE_INSET;
    let positive_mid = center + axis * BATTERY_POSITIVE_INSET;

    vec![
        WireSegment::new(negative, negative_mid),
        WireSegment::new(
            negative_mid + normal * BATTERY_NEGATIVE_HALF,
            negative_mid - normal * BATTERY_NEGATIVE_HALF,
        ),
        WireSegment::new(positive_mid, positive),
        WireSegment::new(
            positive_mid + normal * BATTERY_POSITIVE_HALF,
            positive_mid - normal * BATTERY_POSITIVE_HALF,
        ),
    ]
}

/// American-style zig-zag resistor between `src` and `dst`.
///
/// The body spans 1.0 unit centered on the segment midpoint; teeth sit at
/// `(k + 0.5)/6` fractions of the span so the first and last teeth are
/// centered rather than flush with the span boundary. Two straight leads
/// connect the endpoints to the body.
pub fn resistor_symbol(src: Point3, dst: Point3) -> Vec<WireSegment> {
    let center = src.midpoint(dst);
    let axis = (dst - src).normalized();
    let normal = (dst - src).perpendicular();

    let start = center - axis * RESISTOR_BODY_HALF;
    let end = center + axis * RESISTOR_BODY_HALF;

    let teeth = (0..RESISTOR_TOOTH_COUNT).map(|k| {
        let along = (k as f64 + 0.5) / RESISTOR_TOOTH_COUNT as f64;
        let side = if k % 2 == 1 {
            RESISTOR_TOOTH_OFFSET
        } else {
            -RESISTOR_TOOTH_OFFSET
        };
        start + axis * along + normal * side
    });

    let mut body = Vec::with_capacity(RESISTOR_TOOTH_COUNT + 3);
    body.push(start);
    body.extend(teeth);
    body.push(end);

    let mut segments = Vec::with_capacity(body.len() + 1);
    segments.push(WireSegment::new(src, start));
    segments.extend(
        body.windows(2)
            .map(|pair| WireSegment::new(pair[0], pair[1])),
    );
    segments.push(WireSegment::new(end, dst));
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_battery_segment_count_and_leads() {
        let negative = Point3::new(-0.4, 3.0, 0.0);
        let positive = Point3::new(0.1, 3.0, 0.0);
        let segments = battery_symbol(negative, positive);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].from, negative);
        assert_eq!(segments[2].to, positive);
    }

    #[test]
    fn test_battery_stroke_lengths() {
        let segments = battery_symbol(Point3::new(-0.4, 3.0, 0.0), Point3::new(0.1, 3.0, 0.0));
        // Negative stroke is 0.5 long, positive stroke twice that.
        assert!((segments[1].length() - 0.5).abs() < EPS);
        assert!((segments[3].length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_battery_strokes_perpendicular_to_axis() {
        let negative = Point3::new(-0.4, 3.0, 0.0);
        let positive = Point3::new(0.1, 3.0, 0.0);
        let segments = battery_symbol(negative, positive);
        for seg in [&segments[1], &segments[3]] {
            let stroke = (seg.to - seg.from).normalized();
            let axis = (positive - negative).normalized();
            let dot = stroke.x * axis.x + stroke.y * axis.y;
            assert!(dot.abs() < EPS);
        }
    }

    #[test]
    fn test_resistor_segment_count() {
        // Lead in, start->6 teeth->end chain (7 legs), lead out.
        let segments = resistor_symbol(Point3::new(2.0, 2.5, 0.0), Point3::new(2.0, 1.3, 0.0));
        assert_eq!(segments.len(), 9);
    }

    #[test]
    fn test_resistor_connects_endpoints() {
        let src = Point3::new(2.0, 2.5, 0.0);
        let dst = Point3::new(2.0, 1.3, 0.0);
        let segments = resistor_symbol(src, dst);
        assert_eq!(segments.first().unwrap().from, src);
        assert_eq!(segments.last().unwrap().to, dst);
        // Consecutive segments share their endpoints.
        for pair in segments.windows(2) {
            assert!(pair[0].to.distance_to(pair[1].from) < EPS);
        }
    }

    #[test]
    fn test_resistor_teeth_alternate_sides() {
        // Vertical resistor: teeth offset in x, alternating sign.
        let segments = resistor_symbol(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, -2.0, 0.0));
        let teeth: Vec<f64> = segments[1..7].iter().map(|s| s.to.x).collect();
        for x in &teeth {
            assert!((x.abs() - 0.2).abs() < EPS);
        }
        for pair in teeth.windows(2) {
            assert!(pair[0] * pair[1] < 0.0);
        }
    }

    #[test]
    fn test_symbols_stay_planar() {
        let segments = resistor_symbol(Point3::new(1.0, 2.0, 0.0), Point3::new(3.0, -1.0, 0.0));
        for seg in segments {
            assert_eq!(seg.from.z, 0.0);
            assert_eq!(seg.to.z, 0.0);
        }
    }
}
