//! Headless stdio host for the FLATTOP simulation.
//!
//! Reads JSON input commands line by line on stdin, runs the engine at a
//! fixed 30Hz, and writes one JSON snapshot per tick to stdout.

pub mod game_loop;
pub mod reader;
