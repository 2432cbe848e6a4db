//! Obstacle placement rules, one per map.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use tankwar_core::config::MatchConfig;
use tankwar_core::enums::MapId;
use tankwar_core::layout::ObstacleSpec;
use tankwar_core::types::{Position, Rgb};

use crate::catalog;

/// Probability that an Underground Storage grid cell holds an obstacle.
const STORAGE_FILL_CHANCE: f64 = 0.6;

/// Number of scattered obstacles on Castle Lawn.
const LAWN_OBSTACLE_COUNT: usize = 8;

/// Margin kept clear along the arena edges on Castle Lawn.
const LAWN_EDGE_MARGIN: i64 = 50;

/// Half-extent of the clear zone around the arena center on Castle Lawn.
const LAWN_CENTER_CLEARANCE: i64 = 150;

/// Give up on a rejection-sampled position after this many draws.
pub(crate) const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Generate the obstacle set for `map`.
pub fn generate(map: MapId, config: &MatchConfig, rng: &mut ChaCha8Rng) -> Vec<ObstacleSpec> {
    let color = catalog::definition(map).obstacle_color;
    match map {
        MapId::UndergroundStorage => storage_grid(config, color, rng),
        MapId::CastleLawn => lawn_scatter(config, color, rng),
        MapId::BesiegedCity => city_streets(config, color),
    }
}

/// Regular grid, each cell filled with a fixed probability.
fn storage_grid(config: &MatchConfig, color: Rgb, rng: &mut ChaCha8Rng) -> Vec<ObstacleSpec> {
    let (w, h) = int_dims(config);
    let mut obstacles = Vec::new();
    for x in (200..w - 200).step_by(200) {
        for y in (150..h - 150).step_by(150) {
            if rng.gen_bool(STORAGE_FILL_CHANCE) {
                obstacles.push(obstacle_at(x, y, color));
            }
        }
    }
    obstacles
}

/// Uniform scatter that keeps away from the arena center.
fn lawn_scatter(config: &MatchConfig, color: Rgb, rng: &mut ChaCha8Rng) -> Vec<ObstacleSpec> {
    let (w, h) = int_dims(config);
    let size = config.obstacle_size as i64;
    let max_x = w - LAWN_EDGE_MARGIN - size;
    let max_y = h - LAWN_EDGE_MARGIN - size;
    if max_x < LAWN_EDGE_MARGIN || max_y < LAWN_EDGE_MARGIN {
        return Vec::new();
    }

    let (cx, cy) = (w / 2, h / 2);
    let mut obstacles = Vec::with_capacity(LAWN_OBSTACLE_COUNT);
    for _ in 0..LAWN_OBSTACLE_COUNT {
        let placed = (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
            let x = rng.gen_range(LAWN_EDGE_MARGIN..=max_x);
            let y = rng.gen_range(LAWN_EDGE_MARGIN..=max_y);
            let near_center =
                (x - cx).abs() <= LAWN_CENTER_CLEARANCE && (y - cy).abs() <= LAWN_CENTER_CLEARANCE;
            (!near_center).then_some((x, y))
        });
        match placed {
            Some((x, y)) => obstacles.push(obstacle_at(x, y, color)),
            None => debug!("No room for a scattered obstacle, skipping"),
        }
    }
    obstacles
}

/// Street pattern on a coarse grid plus a fountain in the middle.
fn city_streets(config: &MatchConfig, color: Rgb) -> Vec<ObstacleSpec> {
    let (w, h) = int_dims(config);
    let size = config.obstacle_size as i64;
    let mut obstacles = Vec::new();
    for x in (50..w - 50).step_by(250) {
        for y in (50..h - 50).step_by(200) {
            if x % 500 == 50 || y % 400 == 50 {
                obstacles.push(obstacle_at(x, y, color));
            }
        }
    }
    obstacles.push(obstacle_at(w / 2 - size, h / 2 - size, Rgb::FOUNTAIN));
    obstacles
}

fn obstacle_at(x: i64, y: i64, color: Rgb) -> ObstacleSpec {
    ObstacleSpec {
        position: Position::new(x as f64, y as f64),
        color,
    }
}

fn int_dims(config: &MatchConfig) -> (i64, i64) {
    (config.arena_width as i64, config.arena_height as i64)
}
