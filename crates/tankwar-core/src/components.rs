//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Every entity also carries a [`Position`](crate::types::Position).

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rgb;

/// Tank state shared by the player and the enemies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub facing: Direction,
    /// Last requested movement vector, whether or not it was accepted.
    pub last_dx: f64,
    pub last_dy: f64,
    pub health: i32,
    /// Rounds available, 0..=max ammo.
    pub ammo: u32,
    /// Time of the last shot or reload step (ms). Fire and reload share it.
    pub last_fire_ms: u64,
    /// One-shot absorber for the next damage event.
    pub shield: bool,
    pub invulnerable: bool,
    pub invulnerable_since_ms: u64,
}

/// Who drives a tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    /// Driven by the input collaborator.
    Player,
    /// Walks straight at the player and fires on a timer.
    ScriptedChase(ChaseTimers),
}

/// Timer state of the scripted chase controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaseTimers {
    /// Last time the enemy recomputed its heading and moved (ms).
    pub last_retarget_ms: u64,
    /// Last time the enemy attempted to fire (ms).
    pub last_volley_ms: u64,
}

/// Projectile. Direction is fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub direction: Direction,
    pub side: Side,
    pub radius: f64,
}

/// Bonus pickup waiting on the map.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bonus {
    pub kind: BonusKind,
}

/// Static, impassable map block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}
