//! Headless simulation engine for FLATTOP.
//!
//! Owns the ship and its aircraft fleet, advances them tick by tick,
//! and produces `SimSnapshot`s. Rendering and input plumbing live behind
//! the injected `Frontend` trait, enabling deterministic testing.

pub mod aircraft;
pub mod engine;
pub mod frontend;
pub mod profile;
pub mod ship;
pub mod snapshot;
pub mod steering;

pub use engine::Simulation;
pub use flattop_core as core;

#[cfg(test)]
mod tests;
