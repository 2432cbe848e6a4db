//! Scripted chase controller.
//!
//! Two independent timers per enemy. The retarget timer points the enemy at
//! the player's current position and requests one move; the fire timer
//! requests a shot along whatever direction the enemy already faces.
//! There is no pathfinding: an enemy blocked by an obstacle keeps requesting
//! the same blocked heading.

use glam::DVec2;

use tankwar_core::components::ChaseTimers;
use tankwar_core::types::Position;

/// Input to the chase controller for a single enemy.
pub struct ChaseContext {
    pub now_ms: u64,
    pub timers: ChaseTimers,
    pub position: Position,
    /// The player tank's position.
    pub target: Position,
    pub retarget_period_ms: u64,
    pub fire_period_ms: u64,
}

/// Output from the chase controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseDecision {
    pub timers: ChaseTimers,
    /// Normalized heading for one resolver call, if the retarget timer fired.
    pub heading: Option<DVec2>,
    /// Whether to attempt a shot this tick.
    pub fire: bool,
}

/// Evaluate both timers for one enemy. A timer fires once strictly more than
/// its period has elapsed since it last fired.
pub fn evaluate(ctx: &ChaseContext) -> ChaseDecision {
    let mut timers = ctx.timers;

    let heading = if ctx.now_ms.saturating_sub(timers.last_retarget_ms) > ctx.retarget_period_ms {
        timers.last_retarget_ms = ctx.now_ms;
        Some(heading_toward(ctx.position, ctx.target))
    } else {
        None
    };

    let fire = ctx.now_ms.saturating_sub(timers.last_volley_ms) > ctx.fire_period_ms;
    if fire {
        timers.last_volley_ms = ctx.now_ms;
    }

    ChaseDecision {
        timers,
        heading,
        fire,
    }
}

/// Unit vector from `from` toward `to`; zero when the two coincide.
pub fn heading_toward(from: Position, to: Position) -> DVec2 {
    (to.to_vec() - from.to_vec()).normalize_or_zero()
}
