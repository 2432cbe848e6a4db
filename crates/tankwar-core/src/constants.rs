//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind [`MatchConfig`](crate::config::MatchConfig);
//! systems read the config, not these constants.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- Arena ---

pub const ARENA_WIDTH: f64 = 1280.0;
pub const ARENA_HEIGHT: f64 = 720.0;

// --- Tanks ---

/// Tanks are square.
pub const TANK_SIZE: f64 = 40.0;

/// Displacement per resolver call for a unit intent.
pub const TANK_SPEED: f64 = 2.0;

pub const TANK_MAX_HEALTH: i32 = 15;

pub const TANK_MAX_AMMO: u32 = 5;

/// Minimum time between shots, and between reload steps (ms).
pub const FIRE_COOLDOWN_MS: u64 = 2000;

// --- Bullets ---

pub const BULLET_SPEED: f64 = 5.0;
pub const BULLET_RADIUS: f64 = 5.0;
pub const BULLET_DAMAGE: i32 = 1;

// --- Bonuses ---

pub const BONUS_SIZE: f64 = 20.0;
pub const BONUS_COUNT: usize = 5;
pub const INVULNERABILITY_DURATION_MS: u64 = 10_000;

// --- Obstacles ---

pub const OBSTACLE_SIZE: f64 = 80.0;

// --- Enemy AI ---

/// Period between chase retargets (ms).
pub const AI_RETARGET_PERIOD_MS: u64 = 1000;

/// Period between fire attempts (ms).
pub const AI_FIRE_PERIOD_MS: u64 = 2000;

// --- Scoring ---

pub const ENEMY_KILL_SCORE: u32 = 1000;
pub const BONUS_PICKUP_SCORE: u32 = 100;

// --- Spawn resolution ---

/// Grid step of the spawn ring search.
pub const SPAWN_SEARCH_STEP: i32 = 50;

/// Exclusive upper bound of the ring search offset.
pub const SPAWN_SEARCH_RADIUS: i32 = 300;
