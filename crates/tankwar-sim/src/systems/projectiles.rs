//! Projectile system: advances one side's bullets and resolves their hits.
//!
//! Per bullet, in entity order: advance one step, then obstacle check (bullet
//! removed, nothing else), then the first intersecting opposing tank takes
//! damage and the bullet is removed. An enemy brought to zero health leaves
//! the target list at once, so later bullets in the same pass cannot hit it.

use glam::DVec2;
use hecs::{Entity, World};
use tracing::info;

use tankwar_core::components::{Bullet, Controller, Obstacle, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::Side;
use tankwar_core::events::MatchEvent;
use tankwar_core::types::{Aabb, Position};

use crate::scoring::ScoreState;
use crate::systems::{cleanup, combat};

/// Advance and resolve every bullet fired by `side`.
pub fn run(
    world: &mut World,
    side: Side,
    config: &MatchConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    let obstacles = obstacle_boxes(world);
    let mut targets = target_tanks(world, side.opponent(), config);

    let mut bullets: Vec<(Entity, Bullet)> = world
        .query::<&Bullet>()
        .iter()
        .filter(|(_, bullet)| bullet.side == side)
        .map(|(entity, bullet)| (entity, *bullet))
        .collect();
    bullets.sort_by_key(|(entity, _)| entity.id());

    for (entity, bullet) in bullets {
        let Some(position) = advance(world, entity, &bullet, config) else {
            continue;
        };
        let bullet_box = position.centered_box(bullet.radius);

        if obstacles.iter().any(|o| bullet_box.intersects(o)) {
            events.push(MatchEvent::BulletBlocked { side, position });
            despawn_buffer.push(entity);
            continue;
        }

        let Some(index) = targets
            .iter()
            .position(|(_, target_box)| bullet_box.intersects(target_box))
        else {
            continue;
        };
        despawn_buffer.push(entity);

        let target = targets[index].0;
        let Ok(mut tank) = world.get::<&mut Tank>(target) else {
            continue;
        };
        let outcome = combat::apply_damage(&mut tank, config.bullet_damage);
        let health = tank.health;
        drop(tank);
        events.push(MatchEvent::TankHit {
            target: side.opponent(),
            outcome,
            health,
        });

        if side.opponent() == Side::Enemy && health <= 0 {
            let (_, target_box) = targets.remove(index);
            // Immediate removal; the player tank is never despawned.
            let _ = world.despawn(target);
            score.enemies_destroyed += 1;
            score.score += config.enemy_kill_score;
            let at = Position::new(target_box.x, target_box.y);
            info!(x = at.x, y = at.y, "Enemy destroyed");
            events.push(MatchEvent::EnemyDestroyed {
                position: at,
                score_awarded: config.enemy_kill_score,
            });
        }
    }

    cleanup::flush(world, despawn_buffer);
}

/// Move a bullet one step along its fixed direction and return its new center.
fn advance(world: &mut World, entity: Entity, bullet: &Bullet, config: &MatchConfig) -> Option<Position> {
    let mut position = world.get::<&mut Position>(entity).ok()?;
    let step = DVec2::from(bullet.direction.unit()) * config.bullet_speed;
    *position = Position::from(position.to_vec() + step);
    Some(*position)
}

fn obstacle_boxes(world: &World) -> Vec<Aabb> {
    world
        .query::<(&Position, &Obstacle)>()
        .iter()
        .map(|(_, (pos, obstacle))| pos.box_of(obstacle.width, obstacle.height))
        .collect()
}

/// Tanks on `side`, in roster (entity id) order.
fn target_tanks(world: &World, side: Side, config: &MatchConfig) -> Vec<(Entity, Aabb)> {
    let mut targets: Vec<(Entity, Aabb)> = world
        .query::<(&Position, &Tank, &Controller)>()
        .iter()
        .filter(|(_, (_, _, controller))| controller_side(controller) == side)
        .map(|(entity, (pos, _, _))| (entity, pos.box_of(config.tank_size, config.tank_size)))
        .collect();
    targets.sort_by_key(|(entity, _)| entity.id());
    targets
}

pub fn controller_side(controller: &Controller) -> Side {
    match controller {
        Controller::Player => Side::Player,
        Controller::ScriptedChase(_) => Side::Enemy,
    }
}
