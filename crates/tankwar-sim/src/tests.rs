//! Tests for the match engine, movement resolver, combat and pickup systems.

use hecs::Entity;

use tankwar_core::commands::{InputSnapshot, PlayerCommand};
use tankwar_core::components::{Bullet, Controller, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::*;
use tankwar_core::events::MatchEvent;
use tankwar_core::layout::{BonusSpec, MatchLayout, ObstacleSpec};
use tankwar_core::state::MatchSnapshot;
use tankwar_core::types::{Position, Rgb};

use crate::engine::MatchEngine;
use crate::systems::{combat, movement};

/// First tick whose clock is strictly past the default 2000 ms cooldown.
const WARMUP_TICKS: usize = 121;

/// Far corner where a parked enemy keeps the match from ending.
const PARKED_ENEMY: (f64, f64) = (1000.0, 600.0);

// ---- Helpers ----

/// Enemies never retarget or fire.
fn quiet_config() -> MatchConfig {
    MatchConfig {
        ai_retarget_period_ms: u64::MAX,
        ai_fire_period_ms: u64::MAX,
        ..Default::default()
    }
}

/// Quiet enemies, and the player may fire on every tick after the first.
fn fast_fire_config() -> MatchConfig {
    MatchConfig {
        fire_cooldown_ms: 0,
        ..quiet_config()
    }
}

fn layout(player: (f64, f64), enemies: &[(f64, f64)]) -> MatchLayout {
    MatchLayout {
        map: None,
        player_spawn: Position::new(player.0, player.1),
        enemy_spawns: enemies
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect(),
        obstacles: Vec::new(),
        bonuses: Vec::new(),
    }
}

fn with_obstacle(mut layout: MatchLayout, x: f64, y: f64) -> MatchLayout {
    layout.obstacles.push(ObstacleSpec {
        position: Position::new(x, y),
        color: Rgb::DARK_GRAY,
    });
    layout
}

fn with_bonus(mut layout: MatchLayout, x: f64, y: f64, kind: BonusKind) -> MatchLayout {
    layout.bonuses.push(BonusSpec {
        position: Position::new(x, y),
        kind,
    });
    layout
}

fn player_tank(engine: &MatchEngine) -> Tank {
    let tank = engine.world().get::<&Tank>(engine.player()).unwrap();
    (*tank).clone()
}

fn player_position(engine: &MatchEngine) -> Position {
    *engine.world().get::<&Position>(engine.player()).unwrap()
}

fn enemies(engine: &MatchEngine) -> Vec<Entity> {
    let mut enemies: Vec<Entity> = engine
        .world()
        .query::<&Controller>()
        .iter()
        .filter(|(_, c)| matches!(c, Controller::ScriptedChase(_)))
        .map(|(e, _)| e)
        .collect();
    enemies.sort_by_key(|e| e.id());
    enemies
}

fn set_health(engine: &mut MatchEngine, entity: Entity, health: i32) {
    engine.world_mut().get::<&mut Tank>(entity).unwrap().health = health;
}

fn spawn_bullet(engine: &mut MatchEngine, x: f64, y: f64, direction: Direction, side: Side) {
    engine.world_mut().spawn((
        Position::new(x, y),
        Bullet {
            direction,
            side,
            radius: 5.0,
        },
    ));
}

fn run_idle(engine: &mut MatchEngine, ticks: usize) -> MatchSnapshot {
    let mut snap = engine.tick();
    for _ in 1..ticks {
        snap = engine.tick();
    }
    snap
}

fn tick_with(engine: &mut MatchEngine, command: PlayerCommand) -> MatchSnapshot {
    engine.queue_command(command);
    engine.tick()
}

// ---- Movement resolver ----

#[test]
fn test_facing_vertical_wins() {
    assert_eq!(movement::facing_for(Direction::Up, 1.0, 1.0), Direction::Down);
    assert_eq!(movement::facing_for(Direction::Up, -0.6, -0.8), Direction::Up);
    assert_eq!(movement::facing_for(Direction::Up, -0.6, 0.0), Direction::Left);
    assert_eq!(movement::facing_for(Direction::Right, 0.0, 0.0), Direction::Right);
}

#[test]
fn test_accepted_move() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[PARKED_ENEMY]));
    tick_with(&mut engine, PlayerCommand::Move { dx: 0.0, dy: 1.0 });
    assert_eq!(player_position(&engine), Position::new(100.0, 102.0));
    assert_eq!(player_tank(&engine).facing, Direction::Down);
}

#[test]
fn test_rejected_move_keeps_position_updates_facing() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_obstacle(layout((100.0, 100.0), &[PARKED_ENEMY]), 141.0, 100.0),
    );
    tick_with(&mut engine, PlayerCommand::Move { dx: 1.0, dy: 0.0 });
    let tank = player_tank(&engine);
    assert_eq!(player_position(&engine), Position::new(100.0, 100.0));
    assert_eq!(tank.facing, Direction::Right);
    assert_eq!((tank.last_dx, tank.last_dy), (1.0, 0.0));
}

#[test]
fn test_move_touching_obstacle_edge_allowed() {
    // Candidate box ends at x=142, obstacle starts at x=142.
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_obstacle(layout((100.0, 100.0), &[PARKED_ENEMY]), 142.0, 100.0),
    );
    tick_with(&mut engine, PlayerCommand::Move { dx: 1.0, dy: 0.0 });
    assert_eq!(player_position(&engine), Position::new(102.0, 100.0));
}

#[test]
fn test_other_tank_blocks_move() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[(141.0, 100.0)]));
    tick_with(&mut engine, PlayerCommand::Move { dx: 1.0, dy: 0.0 });
    assert_eq!(player_position(&engine), Position::new(100.0, 100.0));
}

#[test]
fn test_move_clamped_to_arena() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((0.0, 0.0), &[PARKED_ENEMY]));
    tick_with(&mut engine, PlayerCommand::Move { dx: -1.0, dy: 0.0 });
    assert_eq!(player_position(&engine), Position::new(0.0, 0.0));
    assert_eq!(player_tank(&engine).facing, Direction::Left);

    let mut engine = MatchEngine::new(quiet_config(), &layout((1239.0, 679.0), &[PARKED_ENEMY]));
    engine.queue_commands(InputSnapshot {
        right: true,
        down: true,
        ..Default::default()
    }
    .to_commands());
    engine.tick();
    assert_eq!(player_position(&engine), Position::new(1240.0, 680.0));
    // Down and right are separate calls; the later one sets the facing.
    assert_eq!(player_tank(&engine).facing, Direction::Right);
}

#[test]
fn test_each_held_key_is_own_step() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[PARKED_ENEMY]));
    engine.queue_commands(InputSnapshot {
        up: true,
        left: true,
        ..Default::default()
    }
    .to_commands());
    engine.tick();
    assert_eq!(player_position(&engine), Position::new(98.0, 98.0));
    assert_eq!(player_tank(&engine).facing, Direction::Left);
}

// ---- Combat rules ----

fn fresh_tank() -> Tank {
    Tank {
        facing: Direction::Up,
        last_dx: 0.0,
        last_dy: 0.0,
        health: 15,
        ammo: 5,
        last_fire_ms: 0,
        shield: false,
        invulnerable: false,
        invulnerable_since_ms: 0,
    }
}

#[test]
fn test_shield_absorbs_exactly_one_hit() {
    let mut tank = fresh_tank();
    tank.shield = true;
    assert_eq!(combat::apply_damage(&mut tank, 1), HitOutcome::ShieldAbsorbed);
    assert_eq!(tank.health, 15);
    assert!(!tank.shield);
    assert_eq!(combat::apply_damage(&mut tank, 1), HitOutcome::Damaged);
    assert_eq!(tank.health, 14);
}

#[test]
fn test_invulnerable_ignores_damage_and_keeps_shield() {
    let mut tank = fresh_tank();
    tank.shield = true;
    tank.invulnerable = true;
    for _ in 0..5 {
        assert_eq!(combat::apply_damage(&mut tank, 1), HitOutcome::Ignored);
    }
    assert_eq!(tank.health, 15);
    assert!(tank.shield);
}

#[test]
fn test_fire_gate_is_strict() {
    let config = MatchConfig::default();
    let tank = fresh_tank();
    assert!(!combat::can_fire(&tank, 2000, &config));
    assert!(combat::can_fire(&tank, 2001, &config));
    let empty = Tank { ammo: 0, ..fresh_tank() };
    assert!(!combat::can_fire(&empty, 10_000, &config));
}

#[test]
fn test_reload_caps_at_max() {
    let config = MatchConfig::default();
    let mut tank = fresh_tank();
    assert!(!combat::reload(&mut tank, 5000, &config));
    assert_eq!(tank.ammo, 5);

    tank.ammo = 3;
    assert!(combat::reload(&mut tank, 5000, &config));
    assert_eq!(tank.ammo, 4);
    assert_eq!(tank.last_fire_ms, 5000);
    // Cooldown restarted by the reload.
    assert!(!combat::reload(&mut tank, 6000, &config));
}

#[test]
fn test_invulnerability_window() {
    let config = MatchConfig::default();
    let mut tank = fresh_tank();
    combat::grant_invulnerability(&mut tank, 1000);
    assert!(!combat::update_invulnerability(&mut tank, 11_000, &config));
    assert!(tank.invulnerable);
    assert!(combat::update_invulnerability(&mut tank, 11_001, &config));
    assert!(!tank.invulnerable);
}

// ---- Firing through the engine ----

#[test]
fn test_first_shot_waits_for_cooldown() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 300.0), &[PARKED_ENEMY]));
    for _ in 0..WARMUP_TICKS {
        let snap = tick_with(&mut engine, PlayerCommand::Fire);
        assert!(snap.bullets.is_empty());
    }
    let snap = tick_with(&mut engine, PlayerCommand::Fire);
    assert_eq!(snap.bullets.len(), 1);
    assert_eq!(snap.bullets[0].direction, Direction::Up);
    assert_eq!(snap.bullets[0].side, Side::Player);
    assert_eq!(player_tank(&engine).ammo, 4);
    assert_eq!(engine.score().shots_fired, 1);
}

#[test]
fn test_bullet_spawns_at_tank_center() {
    let mut engine = MatchEngine::new(fast_fire_config(), &layout((100.0, 300.0), &[PARKED_ENEMY]));
    engine.tick();
    let snap = tick_with(&mut engine, PlayerCommand::Fire);
    let shot = snap
        .events
        .iter()
        .find_map(|e| match e {
            MatchEvent::ShotFired { origin, .. } => Some(*origin),
            _ => None,
        })
        .unwrap();
    assert_eq!(shot, Position::new(120.0, 320.0));
    // Advanced once in the same tick.
    assert_eq!(snap.bullets[0].position, Position::new(120.0, 315.0));
}

#[test]
fn test_player_hits_enemy_above() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[(100.0, 60.0)]));
    run_idle(&mut engine, WARMUP_TICKS);
    engine.queue_command(PlayerCommand::Fire);

    let mut hit = None;
    for _ in 0..10 {
        let snap = engine.tick();
        hit = hit.or(snap.events.iter().find_map(|e| match e {
            MatchEvent::TankHit {
                target: Side::Enemy,
                outcome,
                health,
            } => Some((*outcome, *health)),
            _ => None,
        }));
        if hit.is_some() {
            assert!(snap.bullets.is_empty(), "bullet removed on hit");
            break;
        }
    }
    assert_eq!(hit, Some((HitOutcome::Damaged, 14)));
    assert_eq!(snap_enemy_health(&engine), vec![14]);
}

fn snap_enemy_health(engine: &MatchEngine) -> Vec<i32> {
    enemies(engine)
        .into_iter()
        .map(|e| engine.world().get::<&Tank>(e).unwrap().health)
        .collect()
}

#[test]
fn test_fire_and_reload_never_share_a_tick() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 300.0), &[PARKED_ENEMY]));
    let mut shots = 0;
    let mut reloads = 0;
    for _ in 0..3000 {
        let snap = tick_with(&mut engine, PlayerCommand::Fire);
        let fired = snap
            .events
            .iter()
            .any(|e| matches!(e, MatchEvent::ShotFired { side: Side::Player, .. }));
        let reloaded = snap
            .events
            .iter()
            .any(|e| matches!(e, MatchEvent::AmmoReloaded { .. }));
        assert!(!(fired && reloaded));
        shots += fired as u32;
        reloads += reloaded as u32;
        let ammo = player_tank(&engine).ammo;
        assert!(ammo <= 5);
    }
    assert!(shots >= 5);
    assert!(reloads >= 1);
}

#[test]
fn test_ammo_never_exceeds_bounds_with_fast_fire() {
    let mut engine = MatchEngine::new(fast_fire_config(), &layout((100.0, 300.0), &[PARKED_ENEMY]));
    for _ in 0..50 {
        tick_with(&mut engine, PlayerCommand::Fire);
        assert!(player_tank(&engine).ammo <= 5);
    }
    // Drained after five consecutive shots, then alternates reload/shot.
    assert!(player_tank(&engine).ammo <= 1);
}

// ---- Projectiles ----

#[test]
fn test_bullet_blocked_by_obstacle() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_obstacle(layout((100.0, 500.0), &[PARKED_ENEMY]), 320.0, 100.0),
    );
    spawn_bullet(&mut engine, 300.0, 120.0, Direction::Right, Side::Player);

    for expected_x in [305.0, 310.0, 315.0] {
        let snap = engine.tick();
        assert_eq!(snap.bullets.len(), 1);
        assert_eq!(snap.bullets[0].position, Position::new(expected_x, 120.0));
        assert_eq!(snap.bullets[0].direction, Direction::Right);
    }

    let snap = engine.tick();
    assert!(snap.bullets.is_empty());
    assert!(snap.events.contains(&MatchEvent::BulletBlocked {
        side: Side::Player,
        position: Position::new(320.0, 120.0),
    }));
}

#[test]
fn test_bullet_leaving_arena_is_removed() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((600.0, 300.0), &[PARKED_ENEMY]));
    spawn_bullet(&mut engine, 3.0, 100.0, Direction::Left, Side::Player);
    assert_eq!(engine.tick().bullets.len(), 1);
    assert!(engine.tick().bullets.is_empty());
}

#[test]
fn test_bullets_do_not_hit_own_side() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[PARKED_ENEMY]));
    spawn_bullet(&mut engine, 120.0, 125.0, Direction::Down, Side::Player);
    engine.tick();
    assert_eq!(player_tank(&engine).health, 15);
}

#[test]
fn test_killed_enemy_removed_same_tick() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &layout((100.0, 100.0), &[(100.0, 60.0), PARKED_ENEMY]),
    );
    let target = enemies(&engine)[0];
    set_health(&mut engine, target, 1);

    // Two bullets that both reach the enemy on this tick.
    spawn_bullet(&mut engine, 120.0, 103.0, Direction::Up, Side::Player);
    spawn_bullet(&mut engine, 120.0, 103.0, Direction::Up, Side::Player);
    let snap = engine.tick();

    assert_eq!(snap.enemies.len(), 1);
    assert!(!engine.world().contains(target));
    assert_eq!(snap.bullets.len(), 1, "second bullet had nothing left to hit");
    assert_eq!(engine.score().enemies_destroyed, 1);
    assert_eq!(engine.score().score, 1000);
    let destroyed = snap
        .events
        .iter()
        .filter(|e| matches!(e, MatchEvent::EnemyDestroyed { .. }))
        .count();
    assert_eq!(destroyed, 1);
}

#[test]
fn test_shield_then_damage_through_engine() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[PARKED_ENEMY]));
    let player = engine.player();
    engine.world_mut().get::<&mut Tank>(player).unwrap().shield = true;

    spawn_bullet(&mut engine, 120.0, 97.0, Direction::Down, Side::Enemy);
    let snap = engine.tick();
    assert!(snap.bullets.is_empty());
    assert_eq!(player_tank(&engine).health, 15);
    assert!(!player_tank(&engine).shield);

    spawn_bullet(&mut engine, 120.0, 97.0, Direction::Down, Side::Enemy);
    engine.tick();
    assert_eq!(player_tank(&engine).health, 14);
}

// ---- Terminal conditions ----

#[test]
fn test_three_enemies_destroyed_is_victory() {
    let mut engine = MatchEngine::new(
        fast_fire_config(),
        &layout((100.0, 300.0), &[(100.0, 200.0), (100.0, 100.0), (100.0, 0.0)]),
    );
    for enemy in enemies(&engine) {
        set_health(&mut engine, enemy, 1);
    }

    let mut last = None;
    for _ in 0..300 {
        let snap = tick_with(&mut engine, PlayerCommand::Fire);
        if snap.phase.is_over() {
            last = Some(snap);
            break;
        }
    }
    let snap = last.expect("match should end");
    assert_eq!(snap.phase, MatchPhase::Victory);
    assert!(snap.enemies.is_empty());
    assert!(snap.events.contains(&MatchEvent::MatchEnded { victory: true }));

    let outcome = engine.outcome().unwrap();
    assert!(outcome.victory);
    assert_eq!(outcome.score, 3000);
    assert_eq!(engine.score().enemies_destroyed, 3);
}

#[test]
fn test_player_health_to_zero_is_defeat() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[PARKED_ENEMY]));
    let mut previous = player_tank(&engine).health;
    assert_eq!(previous, 15);

    for _ in 0..15 {
        assert_eq!(engine.phase(), MatchPhase::Active);
        spawn_bullet(&mut engine, 120.0, 97.0, Direction::Down, Side::Enemy);
        engine.tick();
        let health = player_tank(&engine).health;
        assert_eq!(health, previous - 1);
        previous = health;
    }

    assert_eq!(previous, 0);
    assert_eq!(engine.phase(), MatchPhase::Defeat);
    let outcome = engine.outcome().unwrap();
    assert!(!outcome.victory);
}

#[test]
fn test_victory_checked_before_defeat() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[(100.0, 60.0)]));
    let player = engine.player();
    let enemy = enemies(&engine)[0];
    set_health(&mut engine, player, 1);
    set_health(&mut engine, enemy, 1);

    spawn_bullet(&mut engine, 120.0, 103.0, Direction::Up, Side::Player);
    spawn_bullet(&mut engine, 120.0, 97.0, Direction::Down, Side::Enemy);
    engine.tick();

    assert_eq!(player_tank(&engine).health, 0);
    assert_eq!(engine.phase(), MatchPhase::Victory);
}

#[test]
fn test_terminal_state_is_frozen() {
    let mut engine = MatchEngine::new(quiet_config(), &layout((100.0, 100.0), &[]));
    let snap = engine.tick();
    assert_eq!(snap.phase, MatchPhase::Victory);

    let a = tick_with(&mut engine, PlayerCommand::Move { dx: 1.0, dy: 0.0 });
    let b = tick_with(&mut engine, PlayerCommand::Fire);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
    assert_eq!(player_position(&engine), Position::new(100.0, 100.0));
    assert_eq!(a.time, snap.time);
    assert!(a.events.is_empty());
}

// ---- Bonuses and status timers ----

#[test]
fn test_shield_bonus_pickup() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_bonus(layout((100.0, 100.0), &[PARKED_ENEMY]), 110.0, 110.0, BonusKind::Shield),
    );
    let snap = engine.tick();
    assert!(player_tank(&engine).shield);
    assert!(snap.bonuses.is_empty());
    assert_eq!(snap.score.bonuses_collected, 1);
    assert_eq!(snap.score.score, 100);
    assert!(snap.events.contains(&MatchEvent::BonusCollected {
        kind: BonusKind::Shield,
        position: Position::new(110.0, 110.0),
    }));
}

#[test]
fn test_explosive_bonus_has_no_effect() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_bonus(
            layout((100.0, 100.0), &[PARKED_ENEMY]),
            110.0,
            110.0,
            BonusKind::ExplosiveBullet,
        ),
    );
    let snap = engine.tick();
    let tank = player_tank(&engine);
    assert!(!tank.shield && !tank.invulnerable);
    assert_eq!(tank.health, 15);
    assert_eq!(snap.score.bonuses_collected, 1);
}

#[test]
fn test_enemies_never_collect_bonuses() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_bonus(
            layout((100.0, 100.0), &[PARKED_ENEMY]),
            1010.0,
            610.0,
            BonusKind::Shield,
        ),
    );
    let snap = engine.tick();
    assert_eq!(snap.bonuses.len(), 1);
    assert_eq!(snap.score.bonuses_collected, 0);
}

#[test]
fn test_invulnerability_bonus_expires() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_bonus(
            layout((100.0, 100.0), &[PARKED_ENEMY]),
            110.0,
            110.0,
            BonusKind::Invulnerability,
        ),
    );
    // Picked up at 0 ms; still active at exactly 10000 ms (tick 600).
    run_idle(&mut engine, 601);
    assert!(player_tank(&engine).invulnerable);

    let snap = engine.tick();
    assert!(!player_tank(&engine).invulnerable);
    assert!(snap.events.contains(&MatchEvent::InvulnerabilityExpired));
}

#[test]
fn test_invulnerable_player_takes_no_damage() {
    let mut engine = MatchEngine::new(
        quiet_config(),
        &with_bonus(
            layout((100.0, 100.0), &[PARKED_ENEMY]),
            110.0,
            110.0,
            BonusKind::Invulnerability,
        ),
    );
    engine.tick();
    spawn_bullet(&mut engine, 120.0, 97.0, Direction::Down, Side::Enemy);
    let snap = engine.tick();
    assert_eq!(player_tank(&engine).health, 15);
    assert!(snap.bullets.is_empty(), "bullet still consumed");
    assert!(snap.events.contains(&MatchEvent::TankHit {
        target: Side::Player,
        outcome: HitOutcome::Ignored,
        health: 15,
    }));
}

// ---- Enemy AI ----

#[test]
fn test_enemy_retargets_after_one_second() {
    let mut engine = MatchEngine::new(MatchConfig::default(), &layout((100.0, 100.0), &[(600.0, 100.0)]));
    // Ticks 0..=60 cover 0..=1000 ms.
    let snap = run_idle(&mut engine, 61);
    assert_eq!(snap.enemies[0].position, Position::new(600.0, 100.0));

    let snap = engine.tick();
    assert_eq!(snap.enemies[0].position, Position::new(598.0, 100.0));
    assert_eq!(snap.enemies[0].facing, Direction::Left);
}

#[test]
fn test_enemy_fires_after_two_seconds() {
    let mut engine = MatchEngine::new(MatchConfig::default(), &layout((100.0, 100.0), &[(600.0, 100.0)]));
    for _ in 0..WARMUP_TICKS {
        let snap = engine.tick();
        assert!(snap.bullets.is_empty());
    }
    let snap = engine.tick();
    assert_eq!(snap.bullets.len(), 1);
    assert_eq!(snap.bullets[0].side, Side::Enemy);
    assert_eq!(snap.bullets[0].direction, Direction::Left);
    assert_eq!(snap.enemies[0].ammo, 4);
}

#[test]
fn test_enemies_never_reload() {
    let mut engine = MatchEngine::new(MatchConfig::default(), &layout((100.0, 100.0), &[(1200.0, 600.0)]));
    // Long enough for five shots and several would-be reload windows.
    let snap = run_idle(&mut engine, 60 * 20);
    assert_eq!(snap.enemies[0].ammo, 0);
}

// ---- Full matches ----

fn scripted_input(tick: usize) -> InputSnapshot {
    InputSnapshot {
        up: tick % 7 < 2,
        down: tick % 11 < 3,
        left: tick % 5 == 0,
        right: tick % 3 == 0,
        fire: tick % 13 == 0,
    }
}

#[test]
fn test_determinism_same_seed() {
    let config = MatchConfig {
        seed: 12345,
        ..Default::default()
    };
    let mut engine_a = MatchEngine::for_map(config.clone(), MapId::CastleLawn);
    let mut engine_b = MatchEngine::for_map(config, MapId::CastleLawn);

    for tick in 0..600 {
        let input = scripted_input(tick);
        engine_a.queue_commands(input.to_commands());
        engine_b.queue_commands(input.to_commands());

        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_different_seeds_different_maps() {
    let mut a = MatchEngine::for_map(
        MatchConfig {
            seed: 111,
            ..Default::default()
        },
        MapId::CastleLawn,
    );
    let mut b = MatchEngine::for_map(
        MatchConfig {
            seed: 222,
            ..Default::default()
        },
        MapId::CastleLawn,
    );
    let obstacles_a = serde_json::to_string(&a.tick().obstacles).unwrap();
    let obstacles_b = serde_json::to_string(&b.tick().obstacles).unwrap();
    assert_ne!(obstacles_a, obstacles_b);
}

#[test]
fn test_besieged_city_roster() {
    let mut engine = MatchEngine::for_map(MatchConfig::default(), MapId::BesiegedCity);
    let snap = engine.tick();
    assert_eq!(snap.map, Some(MapId::BesiegedCity));
    assert_eq!(snap.enemies.len(), 6);
    assert_eq!(snap.obstacles.len(), 17);
    assert_eq!(snap.score.enemies_total, 6);
    assert_eq!(
        snap.bonuses.len() + snap.score.bonuses_collected as usize,
        5
    );
}

#[test]
fn test_long_match_invariants() {
    for map in MapId::ALL {
        let mut engine = MatchEngine::for_map(MatchConfig::default(), map);
        let mut previous_health = player_tank(&engine).health;
        let mut previous_enemy_health: Vec<(u32, i32)> = Vec::new();

        for tick in 0..3600 {
            engine.queue_commands(scripted_input(tick).to_commands());
            let snap = engine.tick();
            let player = snap.player.as_ref().unwrap();

            assert!(player.health <= previous_health);
            previous_health = player.health;
            assert!(player.ammo <= 5);
            assert!(player.position.x >= 0.0 && player.position.x <= 1240.0);
            assert!(player.position.y >= 0.0 && player.position.y <= 680.0);

            for enemy in &snap.enemies {
                assert!(enemy.health > 0, "dead enemies leave the roster");
                if let Some((_, prev)) = previous_enemy_health.iter().find(|(id, _)| *id == enemy.id) {
                    assert!(enemy.health <= *prev);
                }
            }
            previous_enemy_health = snap.enemies.iter().map(|e| (e.id, e.health)).collect();

            if snap.phase.is_over() {
                break;
            }
        }
    }
}
