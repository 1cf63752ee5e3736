//! Simulation facade — the top-level entry points the host drives.
//!
//! `Simulation` owns the ship (and through it the fleet) plus the injected
//! frontend, forwards ticks and input events, and drains feedback events
//! into each snapshot. Completely headless and deterministic given an
//! identical input history.

use flattop_core::commands::{Direction, MouseButton};
use flattop_core::events::SimEvent;
use flattop_core::state::SimSnapshot;
use flattop_core::types::{SimTime, Vec2};

use crate::frontend::Frontend;
use crate::profile::FlightProfile;
use crate::ship::Ship;
use crate::snapshot;

pub struct Simulation<F: Frontend> {
    frontend: F,
    ship: Ship,
    time: SimTime,
    events: Vec<SimEvent>,
    initialized: bool,
}

impl<F: Frontend> Simulation<F> {
    /// Build with the canonical flight profile.
    pub fn new(frontend: F) -> Self {
        Self::with_profile(frontend, FlightProfile::standard())
    }

    pub fn with_profile(frontend: F, profile: FlightProfile) -> Self {
        Self {
            frontend,
            ship: Ship::new(profile),
            time: SimTime::default(),
            events: Vec::new(),
            initialized: false,
        }
    }

    /// Create the ship's visible model. The fleet stays docked until
    /// launched. Must be called exactly once before ticking.
    pub fn init(&mut self) {
        assert!(!self.initialized, "simulation initialized twice");
        self.ship.init(&mut self.frontend);
        self.initialized = true;
    }

    /// Advance the whole simulation by `dt` seconds and report the state.
    pub fn tick(&mut self, dt: f64) -> SimSnapshot {
        assert!(self.initialized, "tick before init");
        self.ship.tick(dt, &mut self.frontend, &mut self.events);
        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(&self.ship, &self.time, events)
    }

    pub fn key_pressed(&mut self, key: Direction) {
        self.ship.key_pressed(key);
    }

    pub fn key_released(&mut self, key: Direction) {
        self.ship.key_released(key);
    }

    /// Pointer click in world space.
    pub fn click(&mut self, x: f64, y: f64, button: MouseButton) {
        self.ship
            .click(Vec2::new(x, y), button, &mut self.frontend, &mut self.events);
    }

    /// Full shutdown: release every visible model. Reload clocks are left
    /// untouched, distinguishing teardown from a mid-simulation dock.
    pub fn deinit(&mut self) {
        assert!(self.initialized, "deinit before init");
        self.ship.deinit(&mut self.frontend);
        self.initialized = false;
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ship (and through it the fleet).
    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    /// Read-only access to the injected frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    #[cfg(test)]
    pub(crate) fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }
}
