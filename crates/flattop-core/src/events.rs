//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

/// Feedback events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An aircraft left the deck.
    AircraftLaunched { slot: usize },
    /// An aircraft returned and docked; its reload clock started.
    AircraftDocked { slot: usize },
    /// A primary click commanded an orbit target.
    TargetAssigned { x: f64, y: f64 },
}
