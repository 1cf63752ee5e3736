//! Simulation constants and tuning parameters.

/// Host tick rate for the fixed-rate loop (Hz). The core itself accepts
/// any `dt`; this is the cadence the app crate drives it at.
pub const TICK_RATE: u32 = 30;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Tolerances ---

/// Component bound for the near-zero vector test.
pub const EPSILON: f64 = 0.1;

/// Steering dead zone (radians): below this misalignment the aircraft
/// snaps onto the target line instead of turning at a fixed rate.
pub const ALIGN_EPS: f64 = 0.3;

// --- World bounds ---

/// Half-width of the playable area. Beyond it aircraft turn back.
pub const WIN_WIDTH: f64 = 8.0;

/// Half-height of the playable area.
pub const WIN_HEIGHT: f64 = 6.0;

// --- Ship ---

/// Ship cruise speed (world units per second).
pub const SHIP_LINEAR_SPEED: f64 = 0.5;

/// Ship turn rate (radians per second). Only effective under way.
pub const SHIP_ANGULAR_SPEED: f64 = 0.5;

/// Fleet size. Fixed; slots are reused, never destroyed.
pub const AIRCRAFT_COUNT: usize = 5;

/// Ship deck length. While an aircraft is within this distance of its
/// launch point it stays slaved to the ship's heading.
pub const SHIP_WIDTH: f64 = 0.6;

// --- Aircraft ---

/// Aircraft turn rate (radians per second).
pub const AIRCRAFT_ANGULAR_SPEED: f64 = 2.5;

/// Maximum cruise speed.
pub const AIRCRAFT_LINEAR_SPEED: f64 = 2.0;

/// Speed at the moment of launch.
pub const AIRCRAFT_LINEAR_SPEED_MIN: f64 = 0.1;

/// Launch acceleration (world units per second squared).
pub const AIRCRAFT_LINEAR_ACCELERATION: f64 = 1.0;

/// Airborne time before an aircraft breaks off and returns to the ship
/// (seconds, counted from reaching cruise speed).
pub const AIRCRAFT_FLIGHT_TIME: f64 = 45.0;

/// Cooldown after docking before an aircraft may relaunch (seconds).
pub const AIRCRAFT_RELOAD_TIME: f64 = 3.0;
