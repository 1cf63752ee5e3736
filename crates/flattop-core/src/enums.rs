//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Aircraft flight phase.
///
/// Invariant: an aircraft holds a visible model handle iff its phase is
/// not `Docked`, and tracks a reload timer only while `Docked`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightPhase {
    /// On deck. `reload_elapsed` is `None` for a factory-fresh aircraft
    /// (or after a full teardown) and counts up from zero after a
    /// mid-simulation dock.
    Docked { reload_elapsed: Option<f64> },
    /// Accelerating to cruise speed after launch.
    Launching,
    /// At cruise speed, burning flight time. Orbits its commanded target
    /// when one is set, flies straight otherwise.
    Cruising,
    /// Flight time expended; heading back to the ship to dock.
    Returning,
}

impl Default for FlightPhase {
    fn default() -> Self {
        FlightPhase::Docked {
            reload_elapsed: None,
        }
    }
}

impl FlightPhase {
    /// True when the aircraft is on deck.
    pub fn is_docked(&self) -> bool {
        matches!(self, FlightPhase::Docked { .. })
    }
}
