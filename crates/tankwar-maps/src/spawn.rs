//! Spawn validation and the outward ring search used when a desired spawn
//! point sits inside an obstacle.

use tracing::debug;

use tankwar_core::config::MatchConfig;
use tankwar_core::constants::{SPAWN_SEARCH_RADIUS, SPAWN_SEARCH_STEP};
use tankwar_core::layout::ObstacleSpec;
use tankwar_core::types::Position;

/// True if a `size` x `size` box at `position` overlaps no obstacle.
pub fn is_position_valid(
    position: Position,
    size: f64,
    obstacles: &[ObstacleSpec],
    config: &MatchConfig,
) -> bool {
    let candidate = position.box_of(size, size);
    obstacles.iter().all(|obstacle| {
        !candidate.intersects(
            &obstacle
                .position
                .box_of(config.obstacle_size, config.obstacle_size),
        )
    })
}

/// Resolve a tank spawn point.
///
/// A valid `desired` point is returned as is. Otherwise cells on a 50 px grid
/// are scanned outward in growing squares (x outer, y inner) and the first
/// in-arena, obstacle-free cell wins. `None` if the search is exhausted.
pub fn resolve_spawn(
    desired: Position,
    obstacles: &[ObstacleSpec],
    config: &MatchConfig,
) -> Option<Position> {
    if is_position_valid(desired, config.tank_size, obstacles, config) {
        return Some(desired);
    }

    for offset in (0..SPAWN_SEARCH_RADIUS).step_by(SPAWN_SEARCH_STEP as usize) {
        let offset = offset as f64;
        for x in grid_span(desired.x, offset) {
            for y in grid_span(desired.y, offset) {
                let candidate = Position::new(x, y);
                if in_arena(candidate, config)
                    && is_position_valid(candidate, config.tank_size, obstacles, config)
                {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Player spawn: falls back to the desired point when the search fails.
pub fn resolve_player_spawn(
    desired: Position,
    obstacles: &[ObstacleSpec],
    config: &MatchConfig,
) -> Position {
    resolve_spawn(desired, obstacles, config).unwrap_or_else(|| {
        debug!(x = desired.x, y = desired.y, "Player spawn search failed, keeping desired point");
        desired
    })
}

/// Enemy spawns: unresolvable points are dropped, and the result is
/// truncated to `count`.
pub fn resolve_enemy_spawns(
    desired: &[Position],
    count: usize,
    obstacles: &[ObstacleSpec],
    config: &MatchConfig,
) -> Vec<Position> {
    let mut resolved: Vec<Position> = desired
        .iter()
        .filter_map(|&spawn| resolve_spawn(spawn, obstacles, config))
        .collect();
    resolved.truncate(count);
    if resolved.len() < count {
        debug!(
            wanted = count,
            resolved = resolved.len(),
            "Enemy roster truncated by spawn resolution"
        );
    }
    resolved
}

/// `center - offset ..= center + offset` in search-step increments.
fn grid_span(center: f64, offset: f64) -> impl Iterator<Item = f64> {
    let step = SPAWN_SEARCH_STEP as f64;
    let cells = (2.0 * offset / step) as i64;
    (0..=cells).map(move |i| center - offset + i as f64 * step)
}

fn in_arena(position: Position, config: &MatchConfig) -> bool {
    (0.0..=config.max_tank_x()).contains(&position.x)
        && (0.0..=config.max_tank_y()).contains(&position.y)
}
