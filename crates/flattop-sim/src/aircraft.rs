//! Per-aircraft kinematic state and flight phase machine.
//!
//! One `Aircraft` occupies one fleet slot for the whole run: it is never
//! destroyed, only launched and docked again. Airborne behavior advances
//! through `Launching` → `Cruising` → `Returning`; an orbit target can be
//! commanded in any airborne phase.

use flattop_core::constants::{ALIGN_EPS, SHIP_WIDTH, WIN_HEIGHT, WIN_WIDTH};
use flattop_core::enums::FlightPhase;
use flattop_core::events::SimEvent;
use flattop_core::types::{Mat2, Vec2};

use crate::frontend::{Frontend, ModelId};
use crate::profile::FlightProfile;
use crate::steering::{self, Alignment};

/// A commanded orbit point. The correction flag arms the one-time
/// orbit-entry adjustment for this target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitTarget {
    pub point: Vec2,
    pub needs_correction: bool,
}

/// One carrier aircraft.
///
/// Invariant: `model` is present iff the phase is not `Docked`.
#[derive(Debug)]
pub struct Aircraft {
    slot: usize,
    profile: FlightProfile,
    phase: FlightPhase,
    position: Vec2,
    velocity: Vec2,
    /// Cached velocity magnitude.
    speed: f64,
    acceleration: Vec2,
    /// Heading in radians (0 = +X, CCW).
    heading: f64,
    /// Seconds accumulated in the cruise phase.
    flight_elapsed: f64,
    /// Minimum turning-circle radius at current speed.
    rotation_radius: f64,
    /// Launch point; anchors the deck run.
    start_position: Vec2,
    target: Option<OrbitTarget>,
    model: Option<ModelId>,
}

impl Aircraft {
    pub fn new(slot: usize, profile: FlightProfile) -> Self {
        Self {
            slot,
            profile,
            phase: FlightPhase::default(),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            speed: 0.0,
            acceleration: Vec2::ZERO,
            heading: 0.0,
            flight_elapsed: 0.0,
            rotation_radius: 0.0,
            start_position: Vec2::ZERO,
            target: None,
            model: None,
        }
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn flight_elapsed(&self) -> f64 {
        self.flight_elapsed
    }

    /// Commanded orbit point, if any.
    pub fn target_point(&self) -> Option<Vec2> {
        self.target.map(|t| t.point)
    }

    pub fn is_docked(&self) -> bool {
        self.phase.is_docked()
    }

    /// True while the post-dock reload clock is still running. A
    /// factory-fresh aircraft has no clock and is immediately eligible.
    pub fn is_cooling_down(&self) -> bool {
        match self.phase {
            FlightPhase::Docked {
                reload_elapsed: Some(elapsed),
            } => elapsed < self.profile.reload_time,
            _ => false,
        }
    }

    /// Leave the deck from the ship's current pose.
    ///
    /// Launching an airborne aircraft is a programmer error.
    pub fn launch<F: Frontend>(&mut self, frontend: &mut F, position: Vec2, heading: f64) {
        assert!(self.model.is_none(), "launch of an airborne aircraft");

        let direction = Vec2::from_heading(heading);
        self.phase = FlightPhase::Launching;
        self.position = position;
        self.start_position = position;
        self.heading = heading;
        self.velocity = direction * self.profile.linear_speed_min;
        self.speed = self.profile.linear_speed_min;
        self.acceleration = direction * self.profile.linear_acceleration;
        self.rotation_radius = self.speed / self.profile.angular_speed;
        self.flight_elapsed = 0.0;
        self.target = None;
        self.model = Some(frontend.create_aircraft_model());
    }

    /// Return to the deck, releasing the visible model.
    ///
    /// A mid-simulation dock starts the reload clock at zero; a full
    /// shutdown leaves it untouched so teardown never arms a cooldown.
    pub fn dock<F: Frontend>(&mut self, frontend: &mut F, full_shutdown: bool) {
        let Some(id) = self.model.take() else {
            return;
        };
        frontend.destroy_model(id);
        self.velocity = Vec2::ZERO;
        self.speed = 0.0;
        self.phase = FlightPhase::Docked {
            reload_elapsed: if full_shutdown { None } else { Some(0.0) },
        };
    }

    /// Command an orbit point. Silent no-op while docked.
    pub fn set_target(&mut self, point: Vec2) {
        if self.is_docked() {
            return;
        }
        self.target = Some(OrbitTarget {
            point,
            needs_correction: true,
        });
    }

    /// Advance one tick. The ship pose is the launch/return reference.
    pub fn tick<F: Frontend>(
        &mut self,
        dt: f64,
        ship_position: Vec2,
        ship_heading: f64,
        frontend: &mut F,
        events: &mut Vec<SimEvent>,
    ) {
        if let FlightPhase::Docked { reload_elapsed } = &mut self.phase {
            if let Some(elapsed) = reload_elapsed {
                *elapsed += dt;
            }
            return;
        }

        // Past the playable bounds: steer back toward the mirror point
        // `-position` before the phase behavior runs. The phase itself is
        // unchanged.
        if self.position.x > WIN_WIDTH
            || self.position.x < -WIN_WIDTH
            || self.position.y > WIN_HEIGHT
            || self.position.y < -WIN_HEIGHT
        {
            self.steer(self.position * -2.0, dt);
        }

        match self.phase {
            FlightPhase::Launching => self.tick_launching(dt, ship_heading),
            FlightPhase::Cruising => self.tick_cruising(dt, ship_position, frontend, events),
            FlightPhase::Returning => self.tick_returning(dt, ship_position, frontend, events),
            FlightPhase::Docked { .. } => unreachable!("docked handled above"),
        }

        // Docked during this tick: nothing left to integrate or place.
        let Some(id) = self.model else {
            return;
        };
        self.position += self.velocity * dt;
        frontend.place_model(id, self.position.x, self.position.y, self.heading);
    }

    /// Accelerate to cruise speed. Inside the deck run the aircraft stays
    /// slaved to the ship's heading; once clear it may already chase a
    /// commanded target while still accelerating.
    fn tick_launching(&mut self, dt: f64, ship_heading: f64) {
        let deck_run = (self.position - self.start_position).magnitude() < SHIP_WIDTH;
        if deck_run && self.profile.snap_acceleration_on_launch {
            let direction = Vec2::from_heading(ship_heading);
            self.acceleration = direction * self.acceleration.magnitude();
            self.velocity = direction * self.speed;
            self.heading = ship_heading;
        } else if self.target.is_some() {
            self.orbit_target(dt);
        }

        self.velocity += self.acceleration * dt;
        self.speed = self.velocity.magnitude();
        self.rotation_radius = self.speed / self.profile.angular_speed;

        if self.speed >= self.profile.linear_speed {
            self.phase = FlightPhase::Cruising;
        }
    }

    /// Burn flight time; orbit the commanded target when one is set. On
    /// expiry, switch to `Returning` and run it within the same tick.
    fn tick_cruising<F: Frontend>(
        &mut self,
        dt: f64,
        ship_position: Vec2,
        frontend: &mut F,
        events: &mut Vec<SimEvent>,
    ) {
        if self.flight_elapsed < self.profile.flight_time {
            self.flight_elapsed += dt;
            if self.target.is_some() {
                self.orbit_target(dt);
            }
        } else {
            self.phase = FlightPhase::Returning;
            self.tick_returning(dt, ship_position, frontend, events);
        }
    }

    /// Chase the ship; dock once the gap is near zero.
    fn tick_returning<F: Frontend>(
        &mut self,
        dt: f64,
        ship_position: Vec2,
        frontend: &mut F,
        events: &mut Vec<SimEvent>,
    ) {
        let to_ship = ship_position - self.position;
        if to_ship.is_near_zero() {
            self.dock(frontend, false);
            events.push(SimEvent::AircraftDocked { slot: self.slot });
            return;
        }
        self.steer(to_ship, dt);
    }

    /// Orbit behavior around the commanded target.
    fn orbit_target(&mut self, dt: f64) {
        let Some(orbit) = self.target else {
            return;
        };
        let to_target = orbit.point - self.position;

        // First entry into the capture radius: offset the target point
        // once so the orbit circle lines up with the approach.
        if self.profile.has_course_correction
            && orbit.needs_correction
            && to_target.magnitude() <= self.rotation_radius
        {
            if let Some(corrected) =
                steering::corrected_orbit_target(&orbit.point, &to_target, self.rotation_radius)
            {
                self.target = Some(OrbitTarget {
                    point: corrected,
                    needs_correction: false,
                });
            }
        }

        if to_target.is_near_zero() {
            self.circle(dt);
        } else if let Some(orbit) = self.target {
            self.steer(orbit.point - self.position, dt);
        }
    }

    /// Steer toward a point this tick: fixed-rate turn when misaligned
    /// beyond the dead zone, snap onto the target line otherwise.
    fn steer(&mut self, to_target: Vec2, dt: f64) {
        match steering::classify(&self.velocity, &to_target, ALIGN_EPS) {
            Alignment::Turn => self.circle(dt),
            Alignment::Aligned(residual) => {
                let rotation = Mat2::rotation(residual);
                self.velocity = self.velocity.rotated(&rotation);
                self.acceleration = self.acceleration.rotated(&rotation);
                self.heading += residual;
            }
        }
    }

    /// Fixed-rate counterclockwise turn: advance heading, reorient
    /// velocity and acceleration to it at preserved magnitudes.
    fn circle(&mut self, dt: f64) {
        self.heading += self.profile.angular_speed * dt;
        let direction = Vec2::from_heading(self.heading);
        self.velocity = direction * self.speed;
        self.acceleration = direction * self.acceleration.magnitude();
    }

    /// Test hook: relocate an airborne aircraft.
    #[cfg(test)]
    pub(crate) fn teleport(&mut self, position: Vec2) {
        self.position = position;
    }
}
