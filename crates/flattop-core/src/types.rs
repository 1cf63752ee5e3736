//! Fundamental geometric and simulation types.

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// 2D vector in simulation space. Value type: arithmetic produces new
/// vectors, nothing mutates in place except `+=` on an owned value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// 2×2 rotation matrix. Built from an angle; applying it to a vector
/// matches direct angle-based rotation exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, 0 = +X, CCW).
    pub fn from_heading(heading: f64) -> Self {
        Self {
            x: heading.cos(),
            y: heading.sin(),
        }
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product. Positive when `other` lies
    /// counterclockwise of `self`; used to pick a turn direction.
    pub fn cross(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Apply a 2×2 rotation matrix.
    pub fn rotated(&self, m: &Mat2) -> Vec2 {
        Vec2 {
            x: m.m00 * self.x + m.m01 * self.y,
            y: m.m10 * self.x + m.m11 * self.y,
        }
    }

    /// True when both components lie strictly inside (-EPSILON, EPSILON).
    pub fn is_near_zero(&self) -> bool {
        self.x < EPSILON && self.x > -EPSILON && self.y < EPSILON && self.y > -EPSILON
    }

    /// Unsigned angle between two vectors, in [0, π].
    ///
    /// The normalized dot product is clamped to [-1, 1] before `acos` so
    /// floating-point overshoot on (anti)parallel vectors cannot produce
    /// NaN. Undefined if either operand is the zero vector — callers guard.
    pub fn angle_between(&self, other: &Vec2) -> f64 {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        cos.clamp(-1.0, 1.0).acos()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mat2 {
    /// Counterclockwise rotation by `angle` radians.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
        }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
