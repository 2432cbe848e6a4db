//! Match layout: everything the engine needs to populate a fresh world.
//!
//! Produced by the map generator (or by hand in tests) and consumed once
//! when a match starts.

use serde::{Deserialize, Serialize};

use crate::enums::{BonusKind, MapId};
use crate::types::{Position, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub position: Position,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BonusSpec {
    pub position: Position,
    pub kind: BonusKind,
}

/// Resolved starting state of a match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchLayout {
    /// Map the layout was generated from, if any.
    pub map: Option<MapId>,
    pub player_spawn: Position,
    /// Already resolved against obstacles and truncated to the enemy count.
    pub enemy_spawns: Vec<Position>,
    pub obstacles: Vec<ObstacleSpec>,
    pub bonuses: Vec<BonusSpec>,
}
