//! Timed status effects on the player tank: invulnerability expiry and ammo
//! reload. Enemies never reload and never hold bonuses.

use hecs::{Entity, World};

use tankwar_core::components::Tank;
use tankwar_core::config::MatchConfig;
use tankwar_core::events::MatchEvent;

use crate::systems::combat;

pub fn run(
    world: &mut World,
    player: Entity,
    now_ms: u64,
    config: &MatchConfig,
    events: &mut Vec<MatchEvent>,
) {
    let Ok(mut tank) = world.get::<&mut Tank>(player) else {
        return;
    };

    if combat::update_invulnerability(&mut tank, now_ms, config) {
        events.push(MatchEvent::InvulnerabilityExpired);
    }
    if combat::reload(&mut tank, now_ms, config) {
        events.push(MatchEvent::AmmoReloaded { ammo: tank.ammo });
    }
}
