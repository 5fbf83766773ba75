//! Circuit composition.
//!
//! Walks the group list once, zipping the electrical state with the laid-out
//! waypoints, and emits a flat ordered list of drawable primitives. The walk
//! is an explicit left-to-right scan; no state survives between calls, so
//! composing the same description twice yields identical lists.

use crate::core::CircuitError;
use crate::geometry::symbols::{battery_symbol, resistor_symbol};
use crate::geometry::Point3;
use crate::layout::{layout_circuit, GroupLayout};
use crate::network::{compute_network, GroupState};
use crate::primitives::{primitive_id, ComponentKind, DrawablePrimitive};
use crate::schema::CircuitDescription;

/// Font size of the battery label and single-resistor value labels.
const LABEL_FONT_SIZE: f64 = 0.12;
/// Font size of parallel-branch value labels (tighter spacing).
const LABEL_FONT_SIZE_PARALLEL: f64 = 0.1;

/// Stateless composer; the single entry point of the crate's core.
pub struct CircuitComposer;

impl CircuitComposer {
    /// Compose the full primitive list for a circuit description.
    ///
    /// Fails fast on any domain error from validation, the network
    /// computation, or the layout; no partial list is ever returned.
    pub fn compose(
        description: &CircuitDescription,
    ) -> Result<Vec<DrawablePrimitive>, CircuitError> {
        description.validate()?;
        let network = compute_network(description.battery_voltage, &description.groups)?;
        let layout = layout_circuit(&description.groups)?;

        let mut out = Vec::new();

        // Fixed part: battery symbol, voltage label, feed wire.
        out.push(DrawablePrimitive::Symbol {
            id: primitive_id(
                "battery",
                &[layout.battery_negative, layout.battery_positive],
            ),
            component: ComponentKind::Battery,
            segments: battery_symbol(layout.battery_negative, layout.battery_positive),
            label: None,
        });
        push_label(
            &mut out,
            layout.battery_label,
            format!("{} V", description.battery_voltage),
            LABEL_FONT_SIZE,
        );
        push_path(
            &mut out,
            &layout.feed,
            description.battery_voltage,
            network.total_current,
        );

        // Configurable part: one entry per series group. Layout, network
        // state, and description groups are index-aligned by construction.
        for ((group, state), values) in layout
            .groups
            .iter()
            .zip(&network.groups)
            .zip(&description.groups)
        {
            match group {
                GroupLayout::Single {
                    resistor,
                    label,
                    exit,
                } => {
                    compose_single(&mut out, resistor, *label, exit, values.resistors()[0], state);
                }
                GroupLayout::Parallel {
                    feeds,
                    resistors,
                    labels,
                    merges,
                    exit,
                } => {
                    compose_parallel(
                        &mut out,
                        feeds,
                        resistors,
                        labels,
                        merges,
                        exit,
                        values.resistors(),
                        state,
                        network.total_current,
                    );
                }
            }
        }

        // Closing wire back to the battery's negative terminal.
        push_path(
            &mut out,
            &layout.closing,
            network.final_voltage(),
            network.total_current,
        );

        tracing::debug!(primitives = out.len(), "composed circuit");
        Ok(out)
    }
}

fn compose_single(
    out: &mut Vec<DrawablePrimitive>,
    resistor: &(Point3, Point3),
    label: Point3,
    exit: &[Point3],
    value: f64,
    state: &GroupState,
) {
    let current = state.branch_currents[0];
    push_resistor(out, resistor.0, resistor.1, current);
    push_label(out, label, format!("{value} Ohm"), LABEL_FONT_SIZE);
    push_path(out, exit, state.voltage_after, current);
}

#[allow(clippy::too_many_arguments)]
fn compose_parallel(
    out: &mut Vec<DrawablePrimitive>,
    feeds: &[Vec<Point3>; 2],
    resistors: &[(Point3, Point3); 2],
    labels: &[Point3; 2],
    merges: &[Vec<Point3>; 2],
    exit: &[Point3],
    values: &[f64],
    state: &GroupState,
    total_current: f64,
) {
    for (feed, current) in feeds.iter().zip(&state.branch_currents) {
        push_path(out, feed, state.voltage_before, *current);
    }
    for ((src, dst), current) in resistors.iter().zip(&state.branch_currents) {
        push_resistor(out, *src, *dst, *current);
    }
    for (anchor, value) in labels.iter().zip(values) {
        push_label(out, *anchor, format!("{value} Ohm"), LABEL_FONT_SIZE_PARALLEL);
    }
    for (merge, current) in merges.iter().zip(&state.branch_currents) {
        push_path(out, merge, state.voltage_after, *current);
    }
    push_path(out, exit, state.voltage_after, total_current);
}

fn push_resistor(out: &mut Vec<DrawablePrimitive>, src: Point3, dst: Point3, current: f64) {
    out.push(DrawablePrimitive::Symbol {
        id: primitive_id("resistor", &[src, dst]),
        component: ComponentKind::Resistor,
        segments: resistor_symbol(src, dst),
        label: Some(format_current(current)),
    });
}

fn push_label(out: &mut Vec<DrawablePrimitive>, position: Point3, text: String, font_size: f64) {
    out.push(DrawablePrimitive::Label {
        id: primitive_id("label", &[position]),
        position,
        text,
        font_size,
    });
}

/// Emit one `Wire` per straight leg plus the particle path over the whole
/// polyline, matching the reference renderer's base-line-under-particles
/// structure.
fn push_path(out: &mut Vec<DrawablePrimitive>, points: &[Point3], voltage: f64, current: f64) {
    for pair in points.windows(2) {
        out.push(DrawablePrimitive::Wire {
            id: primitive_id("wire", pair),
            segment: crate::geometry::WireSegment::new(pair[0], pair[1]),
        });
    }
    out.push(DrawablePrimitive::ParticlePath {
        id: primitive_id("flow", points),
        waypoints: points.to_vec(),
        voltage,
        current,
    });
}

/// Hover readout: current in whole milliamperes.
fn format_current(current: f64) -> String {
    format!("{} mA", (current * 1000.0).round() as i64)
}
