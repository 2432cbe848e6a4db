//! Movement and collision resolver for tanks.
//!
//! One call moves one tank by one step of `intent * tank_speed`. The whole
//! step is rejected if the candidate box overlaps any obstacle or any other
//! tank; an accepted step is clamped to the arena per axis. Facing and the
//! last movement vector are updated whether or not the step is accepted.

use hecs::{Entity, World};

use tankwar_core::components::{Obstacle, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::Direction;
use tankwar_core::types::{Aabb, Position};

/// Facing after a move request. Horizontal sign picks left/right, then the
/// vertical sign picks up/down and wins. Zero components leave that part
/// of the facing alone.
pub fn facing_for(current: Direction, dx: f64, dy: f64) -> Direction {
    let mut facing = current;
    if dx > 0.0 {
        facing = Direction::Right;
    } else if dx < 0.0 {
        facing = Direction::Left;
    }
    if dy > 0.0 {
        facing = Direction::Down;
    } else if dy < 0.0 {
        facing = Direction::Up;
    }
    facing
}

/// Clamp a top-left tank position into the arena.
pub fn clamp_to_arena(position: Position, config: &MatchConfig) -> Position {
    Position::new(
        position.x.clamp(0.0, config.max_tank_x().max(0.0)),
        position.y.clamp(0.0, config.max_tank_y().max(0.0)),
    )
}

/// Resolve one movement request for `mover`. Returns whether the step was
/// accepted. Entities without a tank are ignored.
pub fn resolve_move(
    world: &mut World,
    mover: Entity,
    dx: f64,
    dy: f64,
    config: &MatchConfig,
) -> bool {
    let Ok(current) = world.get::<&Position>(mover).map(|p| *p) else {
        return false;
    };

    let candidate = Position::new(
        current.x + dx * config.tank_speed,
        current.y + dy * config.tank_speed,
    );
    let candidate_box = candidate.box_of(config.tank_size, config.tank_size);
    let blocked = hits_obstacle(world, &candidate_box)
        || hits_other_tank(world, mover, &candidate_box, config);

    match world.get::<&mut Tank>(mover) {
        Ok(mut tank) => {
            tank.facing = facing_for(tank.facing, dx, dy);
            tank.last_dx = dx;
            tank.last_dy = dy;
        }
        Err(_) => return false,
    }

    if blocked {
        return false;
    }

    if let Ok(mut position) = world.get::<&mut Position>(mover) {
        *position = clamp_to_arena(candidate, config);
    }
    true
}

fn hits_obstacle(world: &World, candidate: &Aabb) -> bool {
    world
        .query::<(&Position, &Obstacle)>()
        .iter()
        .any(|(_, (pos, obstacle))| {
            candidate.intersects(&pos.box_of(obstacle.width, obstacle.height))
        })
}

fn hits_other_tank(world: &World, mover: Entity, candidate: &Aabb, config: &MatchConfig) -> bool {
    world
        .query::<(&Position, &Tank)>()
        .iter()
        .filter(|(entity, _)| *entity != mover)
        .any(|(_, (pos, _))| candidate.intersects(&pos.box_of(config.tank_size, config.tank_size)))
}
