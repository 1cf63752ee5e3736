//! Pure steering math for aircraft navigation.
//!
//! No simulation state — plain functions over vectors, exercised both by
//! the aircraft state machine and directly by tests.

use flattop_core::types::Vec2;

/// Outcome of comparing the velocity direction against a target line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    /// Misaligned beyond tolerance: hold a fixed-rate turn this tick.
    Turn,
    /// Within tolerance: snap onto the target line by rotating through
    /// the carried signed residual angle.
    Aligned(f64),
}

/// Classify how the current velocity relates to the vector toward a target.
///
/// The residual angle is unsigned from `angle_between`; the sign is taken
/// from the cross product so a snap rotates toward the target, not away.
/// Both vectors must be non-zero.
pub fn classify(velocity: &Vec2, to_target: &Vec2, tolerance: f64) -> Alignment {
    let angle = to_target.angle_between(velocity);
    if angle > tolerance {
        Alignment::Turn
    } else if velocity.cross(to_target) >= 0.0 {
        Alignment::Aligned(angle)
    } else {
        Alignment::Aligned(-angle)
    }
}

/// One-time orbit-entry course correction.
///
/// On first entering the capture radius the commanded point is offset by a
/// vector perpendicular to `to_target` with magnitude `rotation_radius`,
/// anticipating the true orbit circle. Solving
/// `A·B = 0, |A| = R` for the offset A gives `ay = R / sqrt(1 + k²)`,
/// `ax = ay·k` with `k = B.y / B.x`; the sign depends on the side of
/// approach. Returns `None` for the degenerate vertical approach
/// (`to_target.x == 0`), which applies no correction.
pub fn corrected_orbit_target(
    target: &Vec2,
    to_target: &Vec2,
    rotation_radius: f64,
) -> Option<Vec2> {
    if to_target.x == 0.0 {
        return None;
    }
    let k = to_target.y / to_target.x;
    let ay = rotation_radius / (1.0 + k * k).sqrt();
    let ax = ay * k;
    if to_target.x > 0.0 {
        Some(Vec2::new(target.x + ax, target.y - ay))
    } else {
        Some(Vec2::new(target.x - ax, target.y + ay))
    }
}
