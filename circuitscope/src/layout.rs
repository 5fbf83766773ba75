//! Fixed-policy waypoint layout.
//!
//! Turns the abstract group list into explicit coordinates: battery
//! terminals, the feed wire, per-group resistor spans and connecting wires,
//! and the closing wire back to the battery. Every offset here is a design
//! constant reproduced for visual parity with the reference diagram; the
//! electrical computation is independent of them.

use serde::{Deserialize, Serialize};

use crate::core::CircuitError;
use crate::geometry::Point3;
use crate::schema::{validate_groups, ResistorGroup};

/// Battery negative terminal.
pub const BATTERY_NEGATIVE: Point3 = Point3 {
    x: -0.4,
    y: 3.0,
    z: 0.0,
};
/// Battery positive terminal.
pub const BATTERY_POSITIVE: Point3 = Point3 {
    x: 0.1,
    y: 3.0,
    z: 0.0,
};
/// Anchor for the battery voltage label.
pub const BATTERY_LABEL: Point3 = Point3 {
    x: -0.15,
    y: 2.35,
    z: 0.0,
};
/// Corner where the feed wire turns down.
const FEED_CORNER: Point3 = Point3 {
    x: 2.0,
    y: 3.0,
    z: 0.0,
};
/// First point of the group column; groups stack downward from here.
const FEED_START: Point3 = Point3 {
    x: 2.0,
    y: 2.5,
    z: 0.0,
};

/// Vertical span of a resistor body.
const RESISTOR_SPAN: f64 = 1.2;
/// Straight wire continuation after a resistor or junction.
const WIRE_EXTENSION: f64 = 0.5;
/// Horizontal half-split of a parallel pair.
const BRANCH_OFFSET: f64 = 0.5;
/// x position of the vertical leg of the closing wire.
const RETURN_X: f64 = -2.0;
/// Label offset from a single resistor's midpoint.
const LABEL_OFFSET_SINGLE: f64 = 0.5;
/// Label offset from each parallel resistor's midpoint.
const LABEL_OFFSET_PARALLEL: f64 = 0.45;

fn down(amount: f64) -> Point3 {
    Point3::new(0.0, -amount, 0.0)
}

fn right(amount: f64) -> Point3 {
    Point3::new(amount, 0.0, 0.0)
}

/// Waypoints and endpoints for one series group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupLayout {
    /// A straight vertical drop through one resistor plus a wire
    /// continuation.
    Single {
        /// Resistor endpoints (top, bottom).
        resistor: (Point3, Point3),
        /// Anchor for the resistance value label.
        label: Point3,
        /// Wire from the resistor's lower end onward.
        exit: Vec<Point3>,
    },
    /// The incoming wire splits, each branch drops through its own resistor,
    /// and both rejoin directly below the split point.
    Parallel {
        /// Per-branch wire from the split point to the resistor top.
        feeds: [Vec<Point3>; 2],
        /// Per-branch resistor endpoints.
        resistors: [(Point3, Point3); 2],
        /// Per-branch label anchors.
        labels: [Point3; 2],
        /// Per-branch wire from the resistor bottom to the junction.
        merges: [Vec<Point3>; 2],
        /// Wire from the junction straight down.
        exit: Vec<Point3>,
    },
}

impl GroupLayout {
    /// Last point of the group; the next group continues from here.
    pub fn exit_point(&self) -> Point3 {
        match self {
            GroupLayout::Single { exit, .. } | GroupLayout::Parallel { exit, .. } => {
                *exit.last().expect("exit wire has at least two points")
            }
        }
    }
}

/// The laid-out circuit: fixed battery and feed, one entry per group, and
/// the closing wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitLayout {
    pub battery_negative: Point3,
    pub battery_positive: Point3,
    pub battery_label: Point3,
    /// From the positive terminal to the top of the group column.
    pub feed: Vec<Point3>,
    pub groups: Vec<GroupLayout>,
    /// From the last group back to the negative terminal: left, up, right.
    pub closing: Vec<Point3>,
}

/// Lay the circuit out in diagram coordinates.
///
/// Threads a cursor down the group column; each group starts where the
/// previous one ended. Group-size invariants are checked up front.
pub fn layout_circuit(groups: &[ResistorGroup]) -> Result<CircuitLayout, CircuitError> {
    validate_groups(groups)?;

    let mut laid_out = Vec::with_capacity(groups.len());
    let mut cursor = FEED_START;

    for group in groups {
        let layout = match group.len() {
            1 => layout_single(cursor),
            _ => layout_parallel(cursor),
        };
        cursor = layout.exit_point();
        laid_out.push(layout);
    }

    let closing = vec![
        cursor,
        Point3::new(RETURN_X, cursor.y, 0.0),
        Point3::new(RETURN_X, BATTERY_NEGATIVE.y, 0.0),
        BATTERY_NEGATIVE,
    ];

    Ok(CircuitLayout {
        battery_negative: BATTERY_NEGATIVE,
        battery_positive: BATTERY_POSITIVE,
        battery_label: BATTERY_LABEL,
        feed: vec![BATTERY_POSITIVE, FEED_CORNER, FEED_START],
        groups: laid_out,
        closing,
    })
}

fn layout_single(cursor: Point3) -> GroupLayout {
    let resistor_end = cursor + down(RESISTOR_SPAN);
    let wire_end = resistor_end + down(WIRE_EXTENSION);
    let label = cursor.midpoint(resistor_end) + right(LABEL_OFFSET_SINGLE);
    GroupLayout::Single {
        resistor: (cursor, resistor_end),
        label,
        exit: vec![resistor_end, wire_end],
    }
}

fn layout_parallel(cursor: Point3) -> GroupLayout {
    // Branch geometry for one side of the split.
    let branch = |offset: f64| {
        let pre_mid = cursor + right(offset);
        let pre_end = pre_mid + down(WIRE_EXTENSION);
        let resistor_end = pre_end + down(RESISTOR_SPAN);
        let label = pre_end.midpoint(resistor_end) + right(LABEL_OFFSET_PARALLEL);
        (vec![cursor, pre_mid, pre_end], (pre_end, resistor_end), label)
    };
    let (feed_a, resistor_a, label_a) = branch(BRANCH_OFFSET);
    let (feed_b, resistor_b, label_b) = branch(-BRANCH_OFFSET);

    // Both branches rejoin directly below the split point.
    let junction_y = resistor_a.1.y - WIRE_EXTENSION;
    let junction = Point3::new(cursor.x, junction_y, cursor.z);
    let finish = Point3::new(cursor.x, junction_y - WIRE_EXTENSION, cursor.z);

    let merge = |resistor_end: Point3| vec![resistor_end, resistor_end + down(WIRE_EXTENSION), junction];

    GroupLayout::Parallel {
        feeds: [feed_a, feed_b],
        resistors: [resistor_a, resistor_b],
        labels: [label_a, label_b],
        merges: [merge(resistor_a.1), merge(resistor_b.1)],
        exit: vec![junction, finish],
    }
}
