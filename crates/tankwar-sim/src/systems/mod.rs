//! ECS systems that operate on the match world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

pub mod bonuses;
pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod status;
