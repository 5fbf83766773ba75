//! Circuitscope - layout and electrical-state engine for animated resistor
//! circuit diagrams.
//!
//! Takes an abstract circuit description (a battery voltage plus series
//! groups of one or two parallel resistors) and produces everything a 3-D
//! renderer needs to draw the schematic and animate current flow: component
//! symbol segments, wire waypoints, value labels, and particle paths tagged
//! with voltage and current.
//!
//! # Quick Start
//!
//! ```
//! use circuitscope::{CircuitDescription, CircuitScope, ResistorGroup};
//!
//! let description = CircuitDescription::new(
//!     7.0,
//!     vec![
//!         ResistorGroup::single(15.0),
//!         ResistorGroup::parallel(30.0, 100.0),
//!         ResistorGroup::single(5.0),
//!     ],
//! );
//! let primitives = CircuitScope::compose(&description).unwrap();
//! assert!(!primitives.is_empty());
//! ```
//!
//! # Features
//!
//! - **Electrical state**: series/parallel equivalent resistance, total
//!   current, per-branch voltage drops
//! - **Fixed-policy layout**: deterministic coordinates for every wire,
//!   symbol, and label
//! - **Stable ids**: primitives are keyed by their geometry, so renderers
//!   can diff across re-layouts
//! - **Flow helpers**: voltage-to-color mapping and per-particle phase
//!   state for the animation driver

pub mod compose;
pub mod core;
pub mod flow;
pub mod geometry;
pub mod layout;
pub mod network;
pub mod parser;
pub mod primitives;
pub mod schema;

// Re-export main types
pub use compose::CircuitComposer;
pub use core::{primitive_stats, CircuitError, CircuitScope, CircuitStats};
pub use flow::{voltage_color, FlowDriver, Polyline, Rgb};
pub use geometry::{Point3, WireSegment};
pub use layout::{layout_circuit, CircuitLayout, GroupLayout};
pub use network::{compute_network, GroupState, NetworkState};
pub use parser::{parse_description, parse_groups};
pub use primitives::{ComponentKind, DrawablePrimitive};
pub use schema::{CircuitDescription, ResistorGroup};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CircuitDescription, CircuitError, CircuitScope, CircuitStats, DrawablePrimitive,
        NetworkState, ResistorGroup,
    };
}
