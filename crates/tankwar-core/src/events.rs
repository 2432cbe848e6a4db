//! Events emitted by the simulation for UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Things that happened during a tick, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A tank fired a bullet.
    ShotFired {
        side: Side,
        origin: Position,
        direction: Direction,
    },
    /// A bullet hit an obstacle and was destroyed.
    BulletBlocked { side: Side, position: Position },
    /// A bullet struck a tank.
    TankHit {
        /// Side of the tank that was hit.
        target: Side,
        outcome: HitOutcome,
        health: i32,
    },
    /// An enemy tank reached zero health and left the roster.
    EnemyDestroyed { position: Position, score_awarded: u32 },
    /// The player picked up a bonus.
    BonusCollected { kind: BonusKind, position: Position },
    /// The player's invulnerability window closed.
    InvulnerabilityExpired,
    /// One round was reloaded into the player's tank.
    AmmoReloaded { ammo: u32 },
    /// The match reached a terminal state.
    MatchEnded { victory: bool },
}
