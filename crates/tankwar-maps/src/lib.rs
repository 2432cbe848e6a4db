//! Map generation for TANKWAR.
//!
//! Turns a [`MapId`] and a seeded RNG into a [`MatchLayout`]: obstacle
//! placement, resolved player/enemy spawns and bonus placement.

pub mod bonuses;
pub mod catalog;
pub mod obstacles;
pub mod spawn;

use rand_chacha::ChaCha8Rng;
use tracing::info;

use tankwar_core::config::MatchConfig;
use tankwar_core::enums::MapId;
use tankwar_core::layout::MatchLayout;

pub use tankwar_core as core;

/// Generate the full starting layout for `map`.
///
/// RNG draws happen in a fixed order (obstacles, then bonuses), so the same
/// seed always yields the same layout.
pub fn build_layout(map: MapId, config: &MatchConfig, rng: &mut ChaCha8Rng) -> MatchLayout {
    let definition = catalog::definition(map);
    let obstacles = obstacles::generate(map, config, rng);

    let player_spawn =
        spawn::resolve_player_spawn(catalog::player_spawn(map, config), &obstacles, config);
    let enemy_spawns = spawn::resolve_enemy_spawns(
        &catalog::enemy_spawns(map, config),
        definition.enemy_count,
        &obstacles,
        config,
    );

    let bonuses = bonuses::place(config, &obstacles, rng);

    info!(
        map = map.display_name(),
        obstacles = obstacles.len(),
        enemies = enemy_spawns.len(),
        bonuses = bonuses.len(),
        "Layout generated"
    );

    MatchLayout {
        map: Some(map),
        player_spawn,
        enemy_spawns,
        obstacles,
        bonuses,
    }
}
