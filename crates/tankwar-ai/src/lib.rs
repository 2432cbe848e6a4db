//! Enemy AI for TANKWAR.
//!
//! Implements the scripted chase controller: periodic retargeting toward the
//! player and periodic fire attempts. Pure decision functions, no ECS.

pub mod chase;

pub use tankwar_core as core;
