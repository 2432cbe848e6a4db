//! Bonus pickup system. Only the player tank collects bonuses.

use hecs::{Entity, World};
use tracing::debug;

use tankwar_core::components::{Bonus, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::BonusKind;
use tankwar_core::events::MatchEvent;
use tankwar_core::types::Position;

use crate::scoring::ScoreState;
use crate::systems::{cleanup, combat};

pub fn run(
    world: &mut World,
    player: Entity,
    now_ms: u64,
    config: &MatchConfig,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    let Ok(player_box) = world
        .get::<&Position>(player)
        .map(|p| p.box_of(config.tank_size, config.tank_size))
    else {
        return;
    };

    let mut collected: Vec<(Entity, Position, BonusKind)> = world
        .query::<(&Position, &Bonus)>()
        .iter()
        .filter(|(_, (pos, _))| {
            player_box.intersects(&pos.box_of(config.bonus_size, config.bonus_size))
        })
        .map(|(entity, (pos, bonus))| (entity, *pos, bonus.kind))
        .collect();
    collected.sort_by_key(|(entity, _, _)| entity.id());

    for (entity, position, kind) in collected {
        if let Ok(mut tank) = world.get::<&mut Tank>(player) {
            match kind {
                BonusKind::Shield => tank.shield = true,
                BonusKind::Invulnerability => combat::grant_invulnerability(&mut tank, now_ms),
                BonusKind::ExplosiveBullet => {}
            }
        }
        score.bonuses_collected += 1;
        score.score += config.bonus_pickup_score;
        debug!(?kind, "Bonus collected");
        events.push(MatchEvent::BonusCollected { kind, position });
        despawn_buffer.push(entity);
    }

    cleanup::flush(world, despawn_buffer);
}
