//! The rendering/placement collaborator boundary.
//!
//! The core never talks to a window or a renderer directly: it is handed a
//! `Frontend` implementation and reports entity poses through it once per
//! tick. `RecordingFrontend` is the headless double used by tests and the
//! stdio host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Opaque handle to a visible model, issued by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(pub u64);

/// Everything the simulation needs from the outside world.
pub trait Frontend {
    /// Create the ship's visible model.
    fn create_ship_model(&mut self) -> ModelId;
    /// Create one aircraft's visible model.
    fn create_aircraft_model(&mut self) -> ModelId;
    /// Release a model handle.
    fn destroy_model(&mut self, id: ModelId);
    /// Report an entity pose. Called once per tick per visible entity.
    fn place_model(&mut self, id: ModelId, x: f64, y: f64, heading: f64);
    /// Drop a visual marker at a commanded target point. Cosmetic only.
    fn place_marker(&mut self, x: f64, y: f64);
}

/// Frontend double that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    next_id: u64,
    /// Live handles and their most recent pose (if placed).
    pub live: HashMap<ModelId, Option<(f64, f64, f64)>>,
    /// Marker points in click order.
    pub markers: Vec<(f64, f64)>,
    pub ships_created: u32,
    pub aircraft_created: u32,
    pub models_destroyed: u32,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently live model handles.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Most recent pose reported for `id`, if any.
    pub fn last_pose(&self, id: ModelId) -> Option<(f64, f64, f64)> {
        self.live.get(&id).copied().flatten()
    }

    fn issue(&mut self) -> ModelId {
        let id = ModelId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, None);
        id
    }
}

impl Frontend for RecordingFrontend {
    fn create_ship_model(&mut self) -> ModelId {
        self.ships_created += 1;
        self.issue()
    }

    fn create_aircraft_model(&mut self) -> ModelId {
        self.aircraft_created += 1;
        self.issue()
    }

    fn destroy_model(&mut self, id: ModelId) {
        let removed = self.live.remove(&id);
        debug_assert!(removed.is_some(), "destroying unknown model {id:?}");
        self.models_destroyed += 1;
    }

    fn place_model(&mut self, id: ModelId, x: f64, y: f64, heading: f64) {
        if let Some(pose) = self.live.get_mut(&id) {
            *pose = Some((x, y, heading));
        }
    }

    fn place_marker(&mut self, x: f64, y: f64) {
        self.markers.push((x, y));
    }
}
