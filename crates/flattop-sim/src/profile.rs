//! Flight behavior configuration.
//!
//! Historical tunings of the aircraft behavior differed in constants and
//! in two optional behaviors; they collapse here into one parameterized
//! profile instead of parallel implementations.

use flattop_core::constants::*;

/// Tuning and feature flags for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightProfile {
    /// Turn rate (radians per second).
    pub angular_speed: f64,
    /// Maximum cruise speed.
    pub linear_speed: f64,
    /// Speed at the moment of launch.
    pub linear_speed_min: f64,
    /// Launch acceleration magnitude.
    pub linear_acceleration: f64,
    /// Airborne seconds before breaking off back to the ship.
    pub flight_time: f64,
    /// Cooldown after docking before relaunch (seconds).
    pub reload_time: f64,
    /// Apply the one-time orbit-entry course correction.
    pub has_course_correction: bool,
    /// Keep heading, velocity, and acceleration slaved to the ship's
    /// heading while still inside the deck run.
    pub snap_acceleration_on_launch: bool,
}

impl Default for FlightProfile {
    fn default() -> Self {
        Self {
            angular_speed: AIRCRAFT_ANGULAR_SPEED,
            linear_speed: AIRCRAFT_LINEAR_SPEED,
            linear_speed_min: AIRCRAFT_LINEAR_SPEED_MIN,
            linear_acceleration: AIRCRAFT_LINEAR_ACCELERATION,
            flight_time: AIRCRAFT_FLIGHT_TIME,
            reload_time: AIRCRAFT_RELOAD_TIME,
            has_course_correction: true,
            snap_acceleration_on_launch: true,
        }
    }
}

impl FlightProfile {
    /// The canonical tuning.
    pub fn standard() -> Self {
        Self::default()
    }
}
