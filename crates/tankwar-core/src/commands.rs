//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, before any
//! other system runs.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// One movement-resolver call with this intent.
    Move { dx: f64, dy: f64 },
    /// Attempt to fire through the cooldown/ammo gate.
    Fire,
}

/// Key-state snapshot read once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl InputSnapshot {
    /// Translate held keys into commands. Each held direction is its own
    /// move, in the order up, down, left, right; fire comes last.
    pub fn to_commands(&self) -> Vec<PlayerCommand> {
        let mut commands = Vec::with_capacity(5);
        if self.up {
            commands.push(PlayerCommand::Move { dx: 0.0, dy: -1.0 });
        }
        if self.down {
            commands.push(PlayerCommand::Move { dx: 0.0, dy: 1.0 });
        }
        if self.left {
            commands.push(PlayerCommand::Move { dx: -1.0, dy: 0.0 });
        }
        if self.right {
            commands.push(PlayerCommand::Move { dx: 1.0, dy: 0.0 });
        }
        if self.fire {
            commands.push(PlayerCommand::Fire);
        }
        commands
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right || self.fire)
    }
}
