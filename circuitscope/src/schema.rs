//! Circuit description types.
//!
//! A circuit is a battery plus an ordered list of resistor groups: groups are
//! wired in series with each other, resistors inside a group in parallel.
//! The description is owned by the caller and passed by value into the
//! composer on every layout request; nothing here is retained between calls.

use serde::{Deserialize, Serialize};

use crate::core::CircuitError;

/// One series element: a single resistor or two resistors in parallel.
///
/// Resistance values are in ohms. The layout policy only knows how to draw
/// groups of one or two resistors; anything else fails validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorGroup(Vec<f64>);

impl ResistorGroup {
    pub fn new(resistors: Vec<f64>) -> Self {
        Self(resistors)
    }

    /// A single series resistor.
    pub fn single(resistance: f64) -> Self {
        Self(vec![resistance])
    }

    /// Two resistors sharing both endpoints.
    pub fn parallel(first: f64, second: f64) -> Self {
        Self(vec![first, second])
    }

    pub fn resistors(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Equivalent resistance of the group: `1 / Σ(1/r)`.
    ///
    /// A single-resistor group returns its value exactly rather than going
    /// through the double reciprocal.
    pub fn equivalent_resistance(&self) -> f64 {
        match self.0.as_slice() {
            [r] => *r,
            rs => 1.0 / rs.iter().map(|r| 1.0 / r).sum::<f64>(),
        }
    }
}

/// The full circuit as edited by the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitDescription {
    /// Battery voltage in volts; non-negative.
    pub battery_voltage: f64,
    /// Series groups, in circuit order from the positive terminal.
    pub groups: Vec<ResistorGroup>,
}

impl CircuitDescription {
    pub fn new(battery_voltage: f64, groups: Vec<ResistorGroup>) -> Self {
        Self {
            battery_voltage,
            groups,
        }
    }

    /// Check every invariant before any arithmetic or layout runs.
    pub fn validate(&self) -> Result<(), CircuitError> {
        if !(self.battery_voltage >= 0.0) {
            return Err(CircuitError::NegativeVoltage(self.battery_voltage));
        }
        validate_groups(&self.groups)
    }
}

/// Group-level invariants: non-empty, at most two resistors, all values
/// strictly positive. Shared by the network and layout entry points so a bad
/// description is rejected before either does any work.
pub fn validate_groups(groups: &[ResistorGroup]) -> Result<(), CircuitError> {
    for (index, group) in groups.iter().enumerate() {
        if group.is_empty() {
            return Err(CircuitError::EmptyGroup { index });
        }
        if group.len() > 2 {
            return Err(CircuitError::UnsupportedGroupSize {
                index,
                count: group.len(),
            });
        }
        for &value in group.resistors() {
            if !(value > 0.0) {
                return Err(CircuitError::NonPositiveResistance { index, value });
            }
        }
    }
    Ok(())
}
