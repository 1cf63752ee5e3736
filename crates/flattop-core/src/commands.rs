//! Player input vocabulary: movement keys, mouse buttons, and the
//! serde-tagged command enum the host feeds to the simulation.

use serde::{Deserialize, Serialize};

/// The four ship movement keys. The set is closed — no key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Mouse button discriminator for world-space clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Commands an orbit target for every airborne aircraft.
    Primary,
    /// Launches the next ready aircraft.
    Secondary,
}

/// Held state of the four movement keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Record a press or release of one key.
    pub fn set(&mut self, key: Direction, held: bool) {
        match key {
            Direction::Forward => self.forward = held,
            Direction::Backward => self.backward = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }
}

/// All input the host can deliver to the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputCommand {
    KeyPressed { key: Direction },
    KeyReleased { key: Direction },
    /// Pointer click, already converted to world space by the host.
    Click {
        x: f64,
        y: f64,
        button: MouseButton,
    },
    /// Shut the host loop down.
    Quit,
}
