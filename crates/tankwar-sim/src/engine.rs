//! Match engine: the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, applies player commands, runs all
//! systems in a fixed order, and produces `MatchSnapshot`s. Completely
//! headless (no frontend dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tankwar_core::commands::PlayerCommand;
use tankwar_core::components::{Controller, Tank};
use tankwar_core::config::MatchConfig;
use tankwar_core::enums::{MapId, MatchPhase, Side};
use tankwar_core::events::MatchEvent;
use tankwar_core::layout::MatchLayout;
use tankwar_core::state::{MatchOutcome, MatchSnapshot};
use tankwar_core::types::SimTime;

use crate::scoring::ScoreState;
use crate::systems;
use crate::world_setup;

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    world: World,
    config: MatchConfig,
    time: SimTime,
    phase: MatchPhase,
    map: Option<MapId>,
    player: Entity,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<MatchEvent>,
    score: ScoreState,
}

impl MatchEngine {
    /// Start a match from an already-resolved layout.
    pub fn new(config: MatchConfig, layout: &MatchLayout) -> Self {
        let mut world = World::new();
        let time = SimTime::default();
        let player = world_setup::setup_match(&mut world, layout, &config, time.elapsed_ms);
        let score = ScoreState {
            enemies_total: layout.enemy_spawns.len() as u32,
            ..Default::default()
        };

        info!(
            map = ?layout.map,
            enemies = score.enemies_total,
            seed = config.seed,
            "Match started"
        );

        Self {
            world,
            config,
            time,
            phase: MatchPhase::Active,
            map: layout.map,
            player,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score,
        }
    }

    /// Generate the layout for `map` from `config.seed` and start a match on it.
    pub fn for_map(config: MatchConfig, map: MapId) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let layout = tankwar_maps::build_layout(map, &config, &mut rng);
        Self::new(config, &layout)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    ///
    /// Once the match is over the world is frozen: queued commands are
    /// discarded and the same state is reported again.
    pub fn tick(&mut self) -> MatchSnapshot {
        if self.phase == MatchPhase::Active {
            self.process_commands();
            self.run_systems();
            self.time.advance();
            self.check_outcome();
        } else {
            self.command_queue.clear();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.map,
            self.player,
            events,
            &self.score,
        )
    }

    /// Get the current match phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player tank entity. Never despawned.
    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Results-screen summary, once the match is over.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        if !self.phase.is_over() {
            return None;
        }
        Some(MatchOutcome {
            victory: self.phase == MatchPhase::Victory,
            elapsed_secs: self.time.elapsed_secs(),
            bonuses_collected: self.score.bonuses_collected,
            score: self.score.score,
        })
    }

    /// Mutable world access for tests that stage exact situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands, in order.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { dx, dy } => {
                systems::movement::resolve_move(
                    &mut self.world,
                    self.player,
                    dx,
                    dy,
                    &self.config,
                );
            }
            PlayerCommand::Fire => {
                let fired = systems::combat::try_fire(
                    &mut self.world,
                    self.player,
                    Side::Player,
                    self.time.elapsed_ms,
                    &self.config,
                    &mut self.events,
                );
                if fired {
                    self.score.shots_fired += 1;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.time.elapsed_ms;
        // 1. Enemy AI (move, then fire)
        systems::enemy_ai::run(
            &mut self.world,
            self.player,
            now_ms,
            &self.config,
            &mut self.events,
        );
        // 2. Player bullets vs obstacles and enemies
        systems::projectiles::run(
            &mut self.world,
            Side::Player,
            &self.config,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 3. Enemy bullets vs obstacles and the player
        systems::projectiles::run(
            &mut self.world,
            Side::Enemy,
            &self.config,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 4. Cleanup (bullets that left the arena)
        systems::cleanup::run(&mut self.world, &self.config, &mut self.despawn_buffer);
        // 5. Bonus pickup
        systems::bonuses::run(
            &mut self.world,
            self.player,
            now_ms,
            &self.config,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 6. Invulnerability expiry and reload
        systems::status::run(
            &mut self.world,
            self.player,
            now_ms,
            &self.config,
            &mut self.events,
        );
    }

    /// Victory when no enemy is left, else defeat when the player is down.
    fn check_outcome(&mut self) {
        let enemies_left = self
            .world
            .query::<&Controller>()
            .iter()
            .filter(|(_, controller)| matches!(controller, Controller::ScriptedChase(_)))
            .count();

        let player_down = self
            .world
            .get::<&Tank>(self.player)
            .map(|tank| tank.health <= 0)
            .unwrap_or(true);

        self.phase = if enemies_left == 0 {
            MatchPhase::Victory
        } else if player_down {
            MatchPhase::Defeat
        } else {
            return;
        };

        let victory = self.phase == MatchPhase::Victory;
        info!(
            victory,
            score = self.score.score,
            bonuses = self.score.bonuses_collected,
            elapsed_secs = self.time.elapsed_secs(),
            "Match ended"
        );
        self.events.push(MatchEvent::MatchEnded { victory });
    }
}
