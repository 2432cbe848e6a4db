//! Session loop: name prompt, map menu, fixed-rate match loop, results,
//! back to the menu.
//!
//! The engine is created per match from the chosen map and a fresh seed.
//! Input is read once per frame and turned into commands before the tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{info, warn};

use tankwar_core::config::MatchConfig;
use tankwar_core::constants::TICK_RATE;
use tankwar_core::state::MatchOutcome;
use tankwar_sim::engine::MatchEngine;

use crate::frontend::{normalize_player_name, Frontend, InputSource, Renderer};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Whether the loop sleeps to hold the tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    RealTime,
    /// Run ticks back to back (tests, headless runs).
    Unpaced,
}

/// How a single match loop ended.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchExit {
    Finished(MatchOutcome),
    Quit,
}

/// Run menus and matches until the player quits.
pub fn run_session<F: Frontend>(frontend: &mut F, base: &MatchConfig, pacing: Pacing) -> Result<()> {
    let Some(raw_name) = frontend.player_name()? else {
        return Ok(());
    };
    let player_name = normalize_player_name(&raw_name);
    info!(player = %player_name, "Session started");

    while let Some(map) = frontend.choose_map()? {
        let (arena_width, arena_height) = frontend.arena_size();
        let config = MatchConfig {
            seed: rand::random(),
            arena_width,
            arena_height,
            ..base.clone()
        };
        let mut engine = MatchEngine::for_map(config, map);
        frontend.begin_match(&player_name, map);

        match run_match(frontend, &mut engine, pacing)? {
            MatchExit::Quit => {
                info!("Quit during match");
                return Ok(());
            }
            MatchExit::Finished(outcome) => {
                frontend.show_results(&player_name, &outcome)?;
            }
        }
    }

    info!("Session ended");
    Ok(())
}

/// Drive one match to its end or until quit. Quit is checked at the top of
/// every iteration, before the tick.
pub fn run_match<F: Renderer + InputSource>(
    frontend: &mut F,
    engine: &mut MatchEngine,
    pacing: Pacing,
) -> Result<MatchExit> {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Read input
        let frame = frontend.poll()?;
        if frame.quit {
            return Ok(MatchExit::Quit);
        }
        if !frame.input.is_idle() {
            engine.queue_commands(frame.input.to_commands());
        }

        // 2. Advance one tick
        let tick_start = Instant::now();
        let snapshot = engine.tick();
        let tick_elapsed = tick_start.elapsed();
        if tick_elapsed > TICK_DURATION {
            warn!(
                tick = snapshot.time.tick,
                elapsed_ms = tick_elapsed.as_secs_f64() * 1000.0,
                "Tick exceeded its budget"
            );
        }

        // 3. Draw
        frontend.present(&snapshot)?;

        if let Some(outcome) = engine.outcome() {
            return Ok(MatchExit::Finished(outcome));
        }

        // 4. Sleep until next tick
        if pacing == Pacing::RealTime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind; reset to avoid a catch-up spiral
                next_tick_time = now;
            }
        }
    }
}
