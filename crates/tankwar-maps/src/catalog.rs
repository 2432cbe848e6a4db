//! Static per-map definitions: colors, backgrounds, enemy counts and
//! desired spawn points.

use tankwar_core::config::MatchConfig;
use tankwar_core::enums::MapId;
use tankwar_core::types::{Position, Rgb};

/// Background shown behind the map menu.
pub const MENU_BACKGROUND: &str = "background.jpg";

/// Fixed properties of one selectable map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapDefinition {
    pub id: MapId,
    pub obstacle_color: Rgb,
    /// Background image file name, resolved by the asset loader.
    pub background: &'static str,
    pub enemy_count: usize,
}

pub fn definition(map: MapId) -> MapDefinition {
    match map {
        MapId::UndergroundStorage => MapDefinition {
            id: map,
            obstacle_color: Rgb::DARK_GRAY,
            background: "Underground_Storage.jpg",
            enemy_count: 3,
        },
        MapId::CastleLawn => MapDefinition {
            id: map,
            obstacle_color: Rgb::LIGHT_GRAY,
            background: "Castle_Lawn.jpg",
            enemy_count: 4,
        },
        MapId::BesiegedCity => MapDefinition {
            id: map,
            obstacle_color: Rgb::CANYON,
            background: "Besieged_City.jpg",
            enemy_count: 6,
        },
    }
}

/// Desired (unresolved) player spawn.
pub fn player_spawn(map: MapId, config: &MatchConfig) -> Position {
    let (_w, h) = dims(config);
    match map {
        MapId::UndergroundStorage => Position::new(100.0, 100.0),
        MapId::CastleLawn => Position::new(100.0, half(h)),
        MapId::BesiegedCity => Position::new(100.0, h - 100.0),
    }
}

/// Desired (unresolved) enemy spawns, in roster order.
pub fn enemy_spawns(map: MapId, config: &MatchConfig) -> Vec<Position> {
    let (w, h) = dims(config);
    match map {
        MapId::UndergroundStorage => (0..3)
            .map(|i| {
                let step = 100.0 * i as f64;
                Position::new(w - 150.0 - step, h - 150.0 - step)
            })
            .collect(),
        MapId::CastleLawn => vec![
            Position::new(w - 150.0, 100.0),
            Position::new(w - 150.0, h - 150.0),
            Position::new(half(w), 100.0),
            Position::new(half(w), h - 150.0),
        ],
        MapId::BesiegedCity => vec![
            Position::new(w - 150.0, 100.0),
            Position::new(w - 150.0, half(h)),
            Position::new(w - 150.0, h - 150.0),
            Position::new(half(w), 100.0),
            Position::new((w / 4.0).floor(), 100.0),
            Position::new(half(w), h - 150.0),
        ],
    }
}

fn dims(config: &MatchConfig) -> (f64, f64) {
    (config.arena_width, config.arena_height)
}

/// Integer half, so odd arena sizes still land on whole pixels.
fn half(v: f64) -> f64 {
    (v / 2.0).floor()
}
