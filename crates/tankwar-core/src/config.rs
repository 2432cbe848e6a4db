//! Immutable match configuration handed to the engine at session start.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Aabb;

/// Every tunable the simulation reads. Built once per session and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// RNG seed for map generation and bonus kinds. Same seed = same match.
    pub seed: u64,
    pub arena_width: f64,
    pub arena_height: f64,
    pub tank_size: f64,
    pub tank_speed: f64,
    pub tank_max_health: i32,
    pub tank_max_ammo: u32,
    pub fire_cooldown_ms: u64,
    pub bullet_speed: f64,
    pub bullet_radius: f64,
    pub bullet_damage: i32,
    pub bonus_size: f64,
    pub bonus_count: usize,
    pub invulnerability_duration_ms: u64,
    pub obstacle_size: f64,
    pub ai_retarget_period_ms: u64,
    pub ai_fire_period_ms: u64,
    pub enemy_kill_score: u32,
    pub bonus_pickup_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            tank_size: TANK_SIZE,
            tank_speed: TANK_SPEED,
            tank_max_health: TANK_MAX_HEALTH,
            tank_max_ammo: TANK_MAX_AMMO,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_damage: BULLET_DAMAGE,
            bonus_size: BONUS_SIZE,
            bonus_count: BONUS_COUNT,
            invulnerability_duration_ms: INVULNERABILITY_DURATION_MS,
            obstacle_size: OBSTACLE_SIZE,
            ai_retarget_period_ms: AI_RETARGET_PERIOD_MS,
            ai_fire_period_ms: AI_FIRE_PERIOD_MS,
            enemy_kill_score: ENEMY_KILL_SCORE,
            bonus_pickup_score: BONUS_PICKUP_SCORE,
        }
    }
}

impl MatchConfig {
    /// Whole arena as a bounding box.
    pub fn arena(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.arena_width, self.arena_height)
    }

    /// Highest legal top-left x for a tank.
    pub fn max_tank_x(&self) -> f64 {
        self.arena_width - self.tank_size
    }

    /// Highest legal top-left y for a tank.
    pub fn max_tank_y(&self) -> f64 {
        self.arena_height - self.tank_size
    }
}
