//! Entity spawn factories for setting up the match world.
//!
//! Creates obstacles, the player tank, enemy tanks and bonuses from a
//! resolved [`MatchLayout`].

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::Direction;
use tankwar_core::layout::MatchLayout;
use tankwar_core::types::Position;

/// Populate an empty world. Returns the player entity.
///
/// Obstacles are spawned first, then the player, then enemies in roster
/// order, then bonuses. Entity ids therefore follow roster order.
pub fn setup_match(
    world: &mut World,
    layout: &MatchLayout,
    config: &MatchConfig,
    now_ms: u64,
) -> Entity {
    for obstacle in &layout.obstacles {
        world.spawn((
            obstacle.position,
            Obstacle {
                width: config.obstacle_size,
                height: config.obstacle_size,
                color: obstacle.color,
            },
        ));
    }

    let player = spawn_tank(
        world,
        layout.player_spawn,
        Controller::Player,
        config,
        now_ms,
    );

    for spawn in &layout.enemy_spawns {
        spawn_enemy(world, *spawn, config, now_ms);
    }

    for bonus in &layout.bonuses {
        world.spawn((bonus.position, Bonus { kind: bonus.kind }));
    }

    player
}

/// Spawn a scripted-chase enemy whose timers start at `now_ms`.
pub fn spawn_enemy(
    world: &mut World,
    position: Position,
    config: &MatchConfig,
    now_ms: u64,
) -> Entity {
    let timers = ChaseTimers {
        last_retarget_ms: now_ms,
        last_volley_ms: now_ms,
    };
    spawn_tank(
        world,
        position,
        Controller::ScriptedChase(timers),
        config,
        now_ms,
    )
}

/// Fresh tank: full health and ammo, facing up, fire cooldown running from
/// `now_ms`.
pub fn spawn_tank(
    world: &mut World,
    position: Position,
    controller: Controller,
    config: &MatchConfig,
    now_ms: u64,
) -> Entity {
    let tank = Tank {
        facing: Direction::Up,
        last_dx: 0.0,
        last_dy: 0.0,
        health: config.tank_max_health,
        ammo: config.tank_max_ammo,
        last_fire_ms: now_ms,
        shield: false,
        invulnerable: false,
        invulnerable_since_ms: 0,
    };
    world.spawn((position, tank, controller))
}
