//! Collaborator traits between the session loop and whatever draws the game
//! and reads the keyboard.

use anyhow::Result;

use tankwar_core::commands::InputSnapshot;
use tankwar_core::enums::MapId;
use tankwar_core::state::{MatchOutcome, MatchSnapshot};

/// Name used when the player leaves the name prompt empty.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// One frame of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub input: InputSnapshot,
    /// Ends the session at the top of the next loop iteration.
    pub quit: bool,
}

/// Draws the match.
pub trait Renderer {
    /// Logical arena size the renderer draws, in arena units.
    fn arena_size(&self) -> (f64, f64);

    /// Called once before the first frame of every match.
    fn begin_match(&mut self, player_name: &str, map: MapId);

    fn present(&mut self, snapshot: &MatchSnapshot) -> Result<()>;
}

/// Reads the keyboard once per frame.
pub trait InputSource {
    fn poll(&mut self) -> Result<InputFrame>;
}

/// Name prompt and map selection. `None` means the player quit.
pub trait MapMenu {
    fn player_name(&mut self) -> Result<Option<String>>;

    fn choose_map(&mut self) -> Result<Option<MapId>>;
}

/// End-of-match summary. Blocks until acknowledged.
pub trait ResultsScreen {
    fn show_results(&mut self, player_name: &str, outcome: &MatchOutcome) -> Result<()>;
}

/// Everything the session loop needs from a frontend.
pub trait Frontend: Renderer + InputSource + MapMenu + ResultsScreen {}

impl<T: Renderer + InputSource + MapMenu + ResultsScreen> Frontend for T {}

/// Trimmed player name, or the default when nothing was typed.
pub fn normalize_player_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}
