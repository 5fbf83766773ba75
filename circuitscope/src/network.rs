//! Electrical state of the series/parallel network.
//!
//! Pure calculation: equivalent resistances, total current, and the running
//! voltage along the series chain. Deterministic for identical input and
//! recomputed wholesale on every description change.

use serde::{Deserialize, Serialize};

use crate::core::CircuitError;
use crate::schema::{validate_groups, ResistorGroup};

/// Electrical values for one series group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupState {
    /// Equivalent resistance of the group in ohms.
    pub resistance: f64,
    /// Voltage entering the group.
    pub voltage_before: f64,
    /// Voltage after the group's drop.
    pub voltage_after: f64,
    /// Current through each branch, aligned with the group's resistor order.
    /// A single-resistor group carries the total circuit current.
    pub branch_currents: Vec<f64>,
}

impl GroupState {
    /// Voltage drop across the group.
    pub fn voltage_drop(&self) -> f64 {
        self.voltage_before - self.voltage_after
    }
}

/// Complete electrical state for a circuit description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkState {
    /// Sum of group equivalent resistances, in ohms.
    pub total_resistance: f64,
    /// Battery voltage over total resistance, in amperes.
    pub total_current: f64,
    /// Per-group state in series order.
    pub groups: Vec<GroupState>,
}

impl NetworkState {
    /// Voltage at the end of the chain, before the closing wire.
    pub fn final_voltage(&self) -> f64 {
        self.groups
            .last()
            .map(|g| g.voltage_after)
            .unwrap_or(0.0)
    }
}

/// Compute the electrical state of the whole network.
///
/// Rejects invalid groups before any arithmetic; an empty group list has
/// zero total resistance and therefore no defined current, which surfaces as
/// [`CircuitError::ZeroResistance`].
pub fn compute_network(
    battery_voltage: f64,
    groups: &[ResistorGroup],
) -> Result<NetworkState, CircuitError> {
    if !(battery_voltage >= 0.0) {
        return Err(CircuitError::NegativeVoltage(battery_voltage));
    }
    validate_groups(groups)?;

    let total_resistance: f64 = groups.iter().map(ResistorGroup::equivalent_resistance).sum();
    if total_resistance <= 0.0 {
        return Err(CircuitError::ZeroResistance);
    }
    let total_current = battery_voltage / total_resistance;

    let mut states = Vec::with_capacity(groups.len());
    let mut voltage = battery_voltage;
    for group in groups {
        let resistance = group.equivalent_resistance();
        let drop = total_current * resistance;
        let voltage_after = voltage - drop;
        let branch_currents = if group.len() == 1 {
            vec![total_current]
        } else {
            group.resistors().iter().map(|r| drop / r).collect()
        };
        states.push(GroupState {
            resistance,
            voltage_before: voltage,
            voltage_after,
            branch_currents,
        });
        voltage = voltage_after;
    }

    tracing::debug!(
        total_resistance,
        total_current,
        groups = states.len(),
        "computed network state"
    );

    Ok(NetworkState {
        total_resistance,
        total_current,
        groups: states,
    })
}
