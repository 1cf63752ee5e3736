//! Simulation snapshot — the complete visible state reported each tick.

use serde::{Deserialize, Serialize};

use crate::enums::FlightPhase;
use crate::events::SimEvent;
use crate::types::{SimTime, Vec2};

/// Complete simulation state produced by every tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub ship: ShipView,
    /// One view per fleet slot, in fixed slot order.
    pub aircraft: Vec<AircraftView>,
    /// Events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// Ship pose for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec2,
    /// Heading in radians (0 = +X, CCW).
    pub heading: f64,
}

/// Per-aircraft state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftView {
    pub slot: usize,
    pub phase: FlightPhase,
    pub position: Vec2,
    pub heading: f64,
    /// Current speed (world units per second).
    pub speed: f64,
    /// Airborne seconds accumulated in the cruise phase.
    pub flight_elapsed: f64,
    /// Commanded orbit point, if any.
    pub target: Option<Vec2>,
}
