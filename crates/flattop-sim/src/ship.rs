//! Player-driven ship: kinematics from held keys, ownership of the
//! aircraft fleet, and launch/target dispatch from clicks.

use flattop_core::commands::{Direction, HeldKeys, MouseButton};
use flattop_core::constants::{AIRCRAFT_COUNT, SHIP_ANGULAR_SPEED, SHIP_LINEAR_SPEED};
use flattop_core::events::SimEvent;
use flattop_core::types::Vec2;

use crate::aircraft::Aircraft;
use crate::frontend::{Frontend, ModelId};
use crate::profile::FlightProfile;

/// The carrier. Exclusively owns its fixed-size fleet; aircraft slots are
/// reused across launches, never destroyed.
#[derive(Debug)]
pub struct Ship {
    position: Vec2,
    heading: f64,
    keys: HeldKeys,
    fleet: Vec<Aircraft>,
    model: Option<ModelId>,
}

impl Ship {
    pub fn new(profile: FlightProfile) -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            keys: HeldKeys::default(),
            fleet: (0..AIRCRAFT_COUNT)
                .map(|slot| Aircraft::new(slot, profile))
                .collect(),
            model: None,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn fleet(&self) -> &[Aircraft] {
        &self.fleet
    }

    #[cfg(test)]
    pub(crate) fn fleet_mut(&mut self) -> &mut [Aircraft] {
        &mut self.fleet
    }

    /// Create the ship's visible model at the origin.
    pub fn init<F: Frontend>(&mut self, frontend: &mut F) {
        assert!(self.model.is_none(), "ship initialized twice");
        self.position = Vec2::ZERO;
        self.heading = 0.0;
        self.keys = HeldKeys::default();
        self.model = Some(frontend.create_ship_model());
    }

    /// Full teardown: release the ship model and dock every aircraft
    /// without arming reload clocks.
    pub fn deinit<F: Frontend>(&mut self, frontend: &mut F) {
        let id = self.model.take().expect("ship deinit before init");
        frontend.destroy_model(id);
        for aircraft in &mut self.fleet {
            aircraft.dock(frontend, true);
        }
    }

    pub fn key_pressed(&mut self, key: Direction) {
        self.keys.set(key, true);
    }

    pub fn key_released(&mut self, key: Direction) {
        self.keys.set(key, false);
    }

    /// Integrate ship kinematics, then update the fleet in slot order with
    /// the new pose as the launch/return reference.
    pub fn tick<F: Frontend>(&mut self, dt: f64, frontend: &mut F, events: &mut Vec<SimEvent>) {
        // Forward wins over backward; turning needs way on.
        let linear_speed = if self.keys.forward {
            SHIP_LINEAR_SPEED
        } else if self.keys.backward {
            -SHIP_LINEAR_SPEED
        } else {
            0.0
        };
        let angular_speed = if self.keys.left && linear_speed != 0.0 {
            SHIP_ANGULAR_SPEED
        } else if self.keys.right && linear_speed != 0.0 {
            -SHIP_ANGULAR_SPEED
        } else {
            0.0
        };

        self.heading += angular_speed * dt;
        self.position += Vec2::from_heading(self.heading) * (linear_speed * dt);

        if let Some(id) = self.model {
            frontend.place_model(id, self.position.x, self.position.y, self.heading);
        }

        for aircraft in &mut self.fleet {
            aircraft.tick(dt, self.position, self.heading, frontend, events);
        }
    }

    /// Dispatch a world-space click.
    ///
    /// Primary: drop a marker and command the point as the orbit target of
    /// every airborne aircraft (docked ones ignore it). Secondary: launch
    /// the first docked, non-cooling-down aircraft, or do nothing.
    pub fn click<F: Frontend>(
        &mut self,
        point: Vec2,
        button: MouseButton,
        frontend: &mut F,
        events: &mut Vec<SimEvent>,
    ) {
        match button {
            MouseButton::Primary => {
                frontend.place_marker(point.x, point.y);
                for aircraft in &mut self.fleet {
                    aircraft.set_target(point);
                }
                events.push(SimEvent::TargetAssigned {
                    x: point.x,
                    y: point.y,
                });
            }
            MouseButton::Secondary => {
                if let Some(aircraft) = self
                    .fleet
                    .iter_mut()
                    .find(|a| a.is_docked() && !a.is_cooling_down())
                {
                    let slot = aircraft.slot();
                    aircraft.launch(frontend, self.position, self.heading);
                    events.push(SimEvent::AircraftLaunched { slot });
                }
            }
        }
    }
}
