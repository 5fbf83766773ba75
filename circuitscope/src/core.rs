//! Core API shared by library consumers and the CLI.
//! No rendering or UI dependencies.

use serde::Serialize;

use crate::compose::CircuitComposer;
use crate::network::{compute_network, NetworkState};
use crate::primitives::DrawablePrimitive;
use crate::schema::CircuitDescription;

/// Domain errors for circuit validation, electrical computation, and layout.
///
/// All operations are pure and deterministic, so a failure is terminal for
/// that input: retrying without changing the description cannot succeed.
#[derive(Debug, thiserror::Error)]
pub enum CircuitError {
    #[error("resistor group {index} is empty")]
    EmptyGroup { index: usize },
    #[error("resistor group {index} has {count} resistors; only 1 or 2 are supported")]
    UnsupportedGroupSize { index: usize, count: usize },
    #[error("zero or negative resistance {value} in group {index}")]
    NonPositiveResistance { index: usize, value: f64 },
    #[error("battery voltage {0} is negative")]
    NegativeVoltage(f64),
    #[error("total resistance is zero; current is undefined")]
    ZeroResistance,
}

/// Stateless entry points over the composer and network computation.
pub struct CircuitScope;

impl CircuitScope {
    /// Compose the drawable primitive list for a description.
    pub fn compose(
        description: &CircuitDescription,
    ) -> Result<Vec<DrawablePrimitive>, CircuitError> {
        CircuitComposer::compose(description)
    }

    /// Compute the electrical state without laying anything out.
    pub fn analyze(description: &CircuitDescription) -> Result<NetworkState, CircuitError> {
        description.validate()?;
        compute_network(description.battery_voltage, &description.groups)
    }

    /// Parse free-text resistor input and compose it in one step.
    pub fn compose_text(
        text: &str,
        battery_voltage: f64,
    ) -> Result<Vec<DrawablePrimitive>, CircuitError> {
        let description = crate::parser::parse_description(text, battery_voltage);
        Self::compose(&description)
    }
}

/// Primitive counts by kind, for summaries and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitStats {
    pub wires: usize,
    pub symbols: usize,
    pub particle_paths: usize,
    pub labels: usize,
}

impl CircuitStats {
    pub fn total(&self) -> usize {
        self.wires + self.symbols + self.particle_paths + self.labels
    }
}

/// Count primitives by kind.
pub fn primitive_stats(primitives: &[DrawablePrimitive]) -> CircuitStats {
    let mut stats = CircuitStats {
        wires: 0,
        symbols: 0,
        particle_paths: 0,
        labels: 0,
    };
    for primitive in primitives {
        match primitive {
            DrawablePrimitive::Wire { .. } => stats.wires += 1,
            DrawablePrimitive::Symbol { .. } => stats.symbols += 1,
            DrawablePrimitive::ParticlePath { .. } => stats.particle_paths += 1,
            DrawablePrimitive::Label { .. } => stats.labels += 1,
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResistorGroup;

    #[test]
    fn test_compose_text_matches_structured_input() {
        let from_text = CircuitScope::compose_text("15\n30 100\n5", 7.0).unwrap();
        let description = CircuitDescription::new(
            7.0,
            vec![
                ResistorGroup::single(15.0),
                ResistorGroup::parallel(30.0, 100.0),
                ResistorGroup::single(5.0),
            ],
        );
        let from_description = CircuitScope::compose(&description).unwrap();
        assert_eq!(from_text, from_description);
    }

    #[test]
    fn test_stats_cover_every_primitive() {
        let primitives = CircuitScope::compose_text("15\n30 100\n5", 7.0).unwrap();
        let stats = primitive_stats(&primitives);
        assert_eq!(stats.total(), primitives.len());
        assert_eq!(stats.symbols, 5); // battery + 4 resistors
        assert_eq!(stats.labels, 5); // voltage + 4 resistance values
    }

    #[test]
    fn test_analyze_validates_first() {
        let description = CircuitDescription::new(7.0, vec![ResistorGroup::new(vec![])]);
        assert!(matches!(
            CircuitScope::analyze(&description),
            Err(CircuitError::EmptyGroup { index: 0 })
        ));
    }

    #[test]
    fn test_error_display() {
        let err = CircuitError::NonPositiveResistance {
            index: 2,
            value: -5.0,
        };
        assert!(err.to_string().contains("group 2"));
    }
}
