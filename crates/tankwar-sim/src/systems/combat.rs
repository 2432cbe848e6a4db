//! Combat rules: fire gating, reload, damage resolution and the
//! invulnerability timer.

use glam::DVec2;
use hecs::{Entity, World};

use tankwar_core::components::{Bullet, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::{HitOutcome, Side};
use tankwar_core::events::MatchEvent;
use tankwar_core::types::Position;

/// Whether the fire gate is open: cooldown strictly elapsed and ammo left.
pub fn can_fire(tank: &Tank, now_ms: u64, config: &MatchConfig) -> bool {
    now_ms.saturating_sub(tank.last_fire_ms) > config.fire_cooldown_ms && tank.ammo > 0
}

/// Attempt a shot from `shooter`. On success one round is spent, the
/// cooldown restarts and a bullet spawns at the tank's center heading the
/// way the tank faces.
pub fn try_fire(
    world: &mut World,
    shooter: Entity,
    side: Side,
    now_ms: u64,
    config: &MatchConfig,
    events: &mut Vec<MatchEvent>,
) -> bool {
    let origin = match world.query_one_mut::<(&Position, &mut Tank)>(shooter) {
        Ok((position, tank)) => {
            if !can_fire(tank, now_ms, config) {
                return false;
            }
            tank.ammo -= 1;
            tank.last_fire_ms = now_ms;
            let center = position.to_vec() + DVec2::splat(config.tank_size / 2.0);
            (Position::from(center), tank.facing)
        }
        Err(_) => return false,
    };

    let (position, direction) = origin;
    world.spawn((
        position,
        Bullet {
            direction,
            side,
            radius: config.bullet_radius,
        },
    ));
    events.push(MatchEvent::ShotFired {
        side,
        origin: position,
        direction,
    });
    true
}

/// Load one round if below capacity and the cooldown has strictly elapsed.
/// Shares the fire timestamp, so a reload and a shot cannot both come out
/// of the same cooldown interval.
pub fn reload(tank: &mut Tank, now_ms: u64, config: &MatchConfig) -> bool {
    if tank.ammo < config.tank_max_ammo
        && now_ms.saturating_sub(tank.last_fire_ms) > config.fire_cooldown_ms
    {
        tank.ammo += 1;
        tank.last_fire_ms = now_ms;
        return true;
    }
    false
}

/// Resolve one damage event. Invulnerability ignores it entirely (shield
/// untouched); otherwise a shield absorbs it; otherwise health drops.
pub fn apply_damage(tank: &mut Tank, damage: i32) -> HitOutcome {
    if tank.invulnerable {
        HitOutcome::Ignored
    } else if tank.shield {
        tank.shield = false;
        HitOutcome::ShieldAbsorbed
    } else {
        tank.health -= damage;
        HitOutcome::Damaged
    }
}

/// Grant invulnerability starting at `now_ms`. A repeat grant restarts the window.
pub fn grant_invulnerability(tank: &mut Tank, now_ms: u64) {
    tank.invulnerable = true;
    tank.invulnerable_since_ms = now_ms;
}

/// Clear invulnerability once strictly more than the duration has passed.
/// Returns true on the tick it expires.
pub fn update_invulnerability(tank: &mut Tank, now_ms: u64, config: &MatchConfig) -> bool {
    if tank.invulnerable
        && now_ms.saturating_sub(tank.invulnerable_since_ms) > config.invulnerability_duration_ms
    {
        tank.invulnerable = false;
        return true;
    }
    false
}
