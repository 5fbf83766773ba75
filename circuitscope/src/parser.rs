//! Free-text circuit input.
//!
//! The reference UI edits resistors as plain text: one line per series
//! group, whitespace-separated resistance values. Blank lines and lines with
//! any non-numeric token are discarded here, line by line; numeric
//! validation (positivity, group size) stays with the schema.

use crate::schema::{CircuitDescription, ResistorGroup};

/// Parse resistor groups from free text, discarding unparsable lines.
pub fn parse_groups(text: &str) -> Vec<ResistorGroup> {
    text.lines()
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                return None;
            }
            let values: Option<Vec<f64>> =
                tokens.iter().map(|t| t.parse::<f64>().ok()).collect();
            match values {
                Some(resistors) => Some(ResistorGroup::new(resistors)),
                None => {
                    tracing::debug!(line, "discarding unparsable resistor line");
                    None
                }
            }
        })
        .collect()
}

/// Convenience: parse the resistor text and pair it with a battery voltage.
pub fn parse_description(text: &str, battery_voltage: f64) -> CircuitDescription {
    CircuitDescription::new(battery_voltage, parse_groups(text))
}
