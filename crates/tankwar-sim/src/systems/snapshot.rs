//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only; it never modifies the world. Every list is
//! ordered by entity id so equal worlds produce equal snapshots.

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::enums::*;
use tankwar_core::events::MatchEvent;
use tankwar_core::state::*;
use tankwar_core::types::{Position, SimTime};

use crate::scoring::ScoreState;

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    map: Option<MapId>,
    player: Entity,
    events: Vec<MatchEvent>,
    score: &ScoreState,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        map,
        player: build_player(world, player),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        bonuses: build_bonuses(world),
        obstacles: build_obstacles(world),
        events,
        score: score.view(time),
    }
}

fn tank_view(entity: Entity, pos: &Position, tank: &Tank) -> TankView {
    TankView {
        id: entity.id(),
        position: *pos,
        facing: tank.facing,
        health: tank.health,
        ammo: tank.ammo,
        shield: tank.shield,
        invulnerable: tank.invulnerable,
    }
}

fn build_player(world: &World, player: Entity) -> Option<TankView> {
    let mut query = world.query_one::<(&Position, &Tank)>(player).ok()?;
    query.get().map(|(pos, tank)| tank_view(player, pos, tank))
}

fn build_enemies(world: &World) -> Vec<TankView> {
    let mut enemies: Vec<TankView> = world
        .query::<(&Position, &Tank, &Controller)>()
        .iter()
        .filter(|(_, (_, _, controller))| matches!(controller, Controller::ScriptedChase(_)))
        .map(|(entity, (pos, tank, _))| tank_view(entity, pos, tank))
        .collect();
    enemies.sort_by_key(|t| t.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    let mut bullets: Vec<(u32, BulletView)> = world
        .query::<(&Position, &Bullet)>()
        .iter()
        .map(|(entity, (pos, bullet))| {
            (
                entity.id(),
                BulletView {
                    position: *pos,
                    radius: bullet.radius,
                    direction: bullet.direction,
                    side: bullet.side,
                },
            )
        })
        .collect();
    bullets.sort_by_key(|(id, _)| *id);
    bullets.into_iter().map(|(_, view)| view).collect()
}

fn build_bonuses(world: &World) -> Vec<BonusView> {
    let mut bonuses: Vec<(u32, BonusView)> = world
        .query::<(&Position, &Bonus)>()
        .iter()
        .map(|(entity, (pos, bonus))| {
            (
                entity.id(),
                BonusView {
                    position: *pos,
                    kind: bonus.kind,
                },
            )
        })
        .collect();
    bonuses.sort_by_key(|(id, _)| *id);
    bonuses.into_iter().map(|(_, view)| view).collect()
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<(u32, ObstacleView)> = world
        .query::<(&Position, &Obstacle)>()
        .iter()
        .map(|(entity, (pos, obstacle))| {
            (
                entity.id(),
                ObstacleView {
                    position: *pos,
                    width: obstacle.width,
                    height: obstacle.height,
                    color: obstacle.color,
                },
            )
        })
        .collect();
    obstacles.sort_by_key(|(id, _)| *id);
    obstacles.into_iter().map(|(_, view)| view).collect()
}
