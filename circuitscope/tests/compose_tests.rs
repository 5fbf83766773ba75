//! End-to-end tests over the public API: free text in, primitive list out.

use circuitscope::prelude::*;
use circuitscope::{primitive_stats, FlowDriver, Point3};

const TOL: f64 = 1e-3;

fn reference_description() -> CircuitDescription {
    CircuitDescription::new(
        7.0,
        vec![
            ResistorGroup::single(15.0),
            ResistorGroup::parallel(30.0, 100.0),
            ResistorGroup::single(5.0),
        ],
    )
}

#[test]
fn test_reference_circuit_electrical_state() {
    let state = CircuitScope::analyze(&reference_description()).unwrap();
    assert!((state.total_resistance - 43.077).abs() < TOL);
    assert!((state.total_current - 0.1625).abs() < TOL);
}

#[test]
fn test_two_group_circuit_kcl() {
    let description =
        CircuitDescription::new(7.0, vec![ResistorGroup::parallel(5.0, 3.0), ResistorGroup::single(7.0)]);
    let state = CircuitScope::analyze(&description).unwrap();
    assert!((state.total_resistance - 8.875).abs() < TOL);
    assert!((state.total_current - 0.7887).abs() < TOL);
    let branches = &state.groups[0].branch_currents;
    assert!((branches.iter().sum::<f64>() - state.total_current).abs() < 1e-9);
}

#[test]
fn test_text_roundtrip_produces_stable_ids() {
    let first = CircuitScope::compose_text("15\n30 100\n5", 7.0).unwrap();
    let second = CircuitScope::compose_text("15\n30 100\n5", 7.0).unwrap();
    let ids: Vec<&str> = first.iter().map(DrawablePrimitive::id).collect();
    let ids_again: Vec<&str> = second.iter().map(DrawablePrimitive::id).collect();
    assert_eq!(ids, ids_again);

    // Ids are unique within one composition.
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn test_malformed_lines_do_not_fail_composition() {
    let primitives = CircuitScope::compose_text("15\ngarbage here\n5", 7.0).unwrap();
    let stats = primitive_stats(&primitives);
    // battery + two resistors survive.
    assert_eq!(stats.symbols, 3);
}

#[test]
fn test_empty_text_is_zero_resistance_error() {
    assert!(matches!(
        CircuitScope::compose_text("", 7.0),
        Err(CircuitError::ZeroResistance)
    ));
}

#[test]
fn test_primitive_list_serializes() {
    let primitives = CircuitScope::compose(&reference_description()).unwrap();
    let json = serde_json::to_string(&primitives).unwrap();
    let parsed: Vec<DrawablePrimitive> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, primitives);
}

#[test]
fn test_flow_driver_tracks_composition() {
    let primitives = CircuitScope::compose(&reference_description()).unwrap();
    let mut driver = FlowDriver::new();
    driver.seed(&primitives);
    assert!(driver.particle_count() > 0);

    let path_ids: Vec<&str> = primitives
        .iter()
        .filter_map(|p| match p {
            DrawablePrimitive::ParticlePath { id, .. } => Some(id.as_str()),
            _ => None,
        })
        .collect();
    driver.advance(0.016);
    for id in path_ids {
        let positions = driver.positions(id).unwrap();
        for position in positions {
            assert_eq!(position.z, 0.0);
        }
    }
}

#[test]
fn test_diagram_is_a_closed_loop() {
    let primitives = CircuitScope::compose(&reference_description()).unwrap();
    let last_path = primitives
        .iter()
        .rev()
        .find_map(|p| match p {
            DrawablePrimitive::ParticlePath { waypoints, .. } => Some(waypoints),
            _ => None,
        })
        .unwrap();
    // The closing wire ends on the battery's negative terminal.
    assert_eq!(last_path.last(), Some(&Point3::new(-0.4, 3.0, 0.0)));
}
