//! Cleanup system: removes bullets that have left the arena and flushes the
//! despawn buffer.

use hecs::{Entity, World};

use tankwar_core::components::Bullet;
use tankwar_core::config::MatchConfig;
use tankwar_core::types::Position;

/// Remove bullets whose box no longer touches the arena.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, config: &MatchConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    let arena = config.arena();
    for (entity, (pos, bullet)) in world.query_mut::<(&Position, &Bullet)>() {
        if !pos.centered_box(bullet.radius).intersects(&arena) {
            despawn_buffer.push(entity);
        }
    }

    flush(world, despawn_buffer);
}

/// Despawn everything collected in the buffer.
pub fn flush(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
