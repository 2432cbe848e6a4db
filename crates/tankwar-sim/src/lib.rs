//! Simulation engine for TANKWAR.
//!
//! Owns the hecs ECS world, runs systems once per frame at a fixed tick
//! rate, and produces MatchSnapshots for the frontend.

pub mod engine;
pub mod scoring;
pub mod systems;
pub mod world_setup;

pub use engine::MatchEngine;
pub use tankwar_core as core;

#[cfg(test)]
mod tests;
