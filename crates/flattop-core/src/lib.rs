//! Core types and definitions for the FLATTOP carrier air wing simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, constants, input commands, flight phases, state snapshots,
//! and events. It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
