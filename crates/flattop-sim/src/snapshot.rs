//! Snapshot builder: reads the ship and fleet into a complete
//! `SimSnapshot`. Read-only — never modifies simulation state.

use flattop_core::events::SimEvent;
use flattop_core::state::{AircraftView, ShipView, SimSnapshot};
use flattop_core::types::SimTime;

use crate::aircraft::Aircraft;
use crate::ship::Ship;

/// Build a complete snapshot from the current state.
pub fn build_snapshot(ship: &Ship, time: &SimTime, events: Vec<SimEvent>) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        ship: ShipView {
            position: ship.position(),
            heading: ship.heading(),
        },
        aircraft: ship.fleet().iter().map(build_aircraft_view).collect(),
        events,
    }
}

fn build_aircraft_view(aircraft: &Aircraft) -> AircraftView {
    AircraftView {
        slot: aircraft.slot(),
        phase: aircraft.phase(),
        position: aircraft.position(),
        heading: aircraft.heading(),
        speed: aircraft.speed(),
        flight_elapsed: aircraft.flight_elapsed(),
        target: aircraft.target_point(),
    }
}
