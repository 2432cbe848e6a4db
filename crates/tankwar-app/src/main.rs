use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tankwar_app::assets::{AssetStore, SPRITES_DIR};
use tankwar_app::game_loop::{self, Pacing};
use tankwar_app::terminal::TerminalFrontend;
use tankwar_core::config::MatchConfig;

const LOG_FILE: &str = "tankwar.log";

/// Log to a file; the terminal belongs to the game.
fn init_tracing() -> Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

fn main() -> Result<()> {
    let log_path = init_tracing()?;
    info!(log = %log_path.display(), "TANKWAR starting");

    let mut frontend = TerminalFrontend::start(AssetStore::new(SPRITES_DIR))
        .context("Failed to set up the terminal")?;
    let result = game_loop::run_session(&mut frontend, &MatchConfig::default(), Pacing::RealTime);
    drop(frontend);

    if let Err(err) = &result {
        tracing::error!(error = %err, "Session aborted");
    }
    result
}
