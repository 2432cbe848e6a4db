//! Match state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MatchEvent;
use crate::types::{Position, Rgb, SimTime};

/// Complete match state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub map: Option<MapId>,
    pub player: Option<TankView>,
    /// Active enemy roster, ordered by entity id.
    pub enemies: Vec<TankView>,
    pub bullets: Vec<BulletView>,
    pub bonuses: Vec<BonusView>,
    pub obstacles: Vec<ObstacleView>,
    pub events: Vec<MatchEvent>,
    pub score: ScoreView,
}

/// A tank as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankView {
    pub id: u32,
    pub position: Position,
    pub facing: Direction,
    pub health: i32,
    pub ammo: u32,
    pub shield: bool,
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    /// Center of the bullet.
    pub position: Position,
    pub radius: f64,
    pub direction: Direction,
    pub side: Side,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusView {
    pub position: Position,
    pub kind: BonusKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub bonuses_collected: u32,
    pub enemies_destroyed: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
    pub elapsed_secs: f64,
}

/// What the results screen receives when a match ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub victory: bool,
    pub elapsed_secs: f64,
    pub bonuses_collected: u32,
    pub score: u32,
}
