//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Facing of a tank and travel direction of a bullet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this direction in arena space (y grows down).
    pub fn unit(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Which side an entity fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Bonus pickup types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Placed and drawn, but picking it up has no effect.
    ExplosiveBullet,
    /// Absorbs the next damage event.
    Shield,
    /// Full damage immunity for a fixed duration.
    Invulnerability,
}

impl BonusKind {
    pub const ALL: [BonusKind; 3] = [
        BonusKind::ExplosiveBullet,
        BonusKind::Shield,
        BonusKind::Invulnerability,
    ];
}

/// Map selection offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapId {
    /// Grid of randomly-present obstacles.
    UndergroundStorage,
    /// Scattered obstacles that keep clear of the center.
    CastleLawn,
    /// Street pattern with a fountain in the middle.
    BesiegedCity,
}

impl MapId {
    pub const ALL: [MapId; 3] = [
        MapId::UndergroundStorage,
        MapId::CastleLawn,
        MapId::BesiegedCity,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            MapId::UndergroundStorage => "Underground Storage",
            MapId::CastleLawn => "Castle Lawn",
            MapId::BesiegedCity => "Besieged City",
        }
    }
}

/// Match phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Active,
    Victory,
    Defeat,
}

impl MatchPhase {
    pub fn is_over(self) -> bool {
        !matches!(self, MatchPhase::Active)
    }
}

/// How an incoming damage event was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// Target was invulnerable; nothing changed.
    Ignored,
    /// Shield consumed, health untouched.
    ShieldAbsorbed,
    /// Health reduced.
    Damaged,
}
