//! Enemy AI system: runs the chase controller for every enemy each tick.
//!
//! Calls the chase logic from tankwar-ai to decide moves and shots, then
//! applies them through the movement resolver and the fire gate. Enemies
//! are processed in roster order; each sees the moves made before it.

use hecs::{Entity, World};

use tankwar_core::components::Controller;
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::Side;
use tankwar_core::events::MatchEvent;
use tankwar_core::types::Position;

use tankwar_ai::chase::{evaluate, ChaseContext};

use crate::systems::{combat, movement};

/// Run the chase controller for every enemy. The target is looked up fresh
/// from `player` each call.
pub fn run(
    world: &mut World,
    player: Entity,
    now_ms: u64,
    config: &MatchConfig,
    events: &mut Vec<MatchEvent>,
) {
    let Ok(target) = world.get::<&Position>(player).map(|p| *p) else {
        return;
    };

    let mut enemies: Vec<Entity> = world
        .query::<&Controller>()
        .iter()
        .filter(|(_, controller)| matches!(controller, Controller::ScriptedChase(_)))
        .map(|(entity, _)| entity)
        .collect();
    enemies.sort_by_key(|entity| entity.id());

    for enemy in enemies {
        let Ok((position, controller)) =
            world.query_one_mut::<(&Position, &mut Controller)>(enemy)
        else {
            continue;
        };
        let Controller::ScriptedChase(timers) = controller else {
            continue;
        };

        let decision = evaluate(&ChaseContext {
            now_ms,
            timers: *timers,
            position: *position,
            target,
            retarget_period_ms: config.ai_retarget_period_ms,
            fire_period_ms: config.ai_fire_period_ms,
        });
        *timers = decision.timers;

        if let Some(heading) = decision.heading {
            movement::resolve_move(world, enemy, heading.x, heading.y, config);
        }
        if decision.fire {
            combat::try_fire(world, enemy, Side::Enemy, now_ms, config, events);
        }
    }
}
