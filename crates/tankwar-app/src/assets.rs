//! Sprite lookup under the sprites directory.
//!
//! Images are not decoded; the terminal frontend only needs to know whether a
//! sprite is present and what size it is drawn at. A missing file is never
//! fatal: a solid red placeholder of the expected size stands in for it.

use std::path::PathBuf;

use tracing::warn;

use tankwar_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, TANK_SIZE};
use tankwar_core::enums::MapId;
use tankwar_core::types::Rgb;
use tankwar_maps::catalog;

/// Directory sprites are read from, relative to the working directory.
pub const SPRITES_DIR: &str = "Sprites";

pub const PLAYER_TANK: &str = "tank.png";
pub const ENEMY_TANK: &str = "bot.png";

/// Where a sprite's pixels come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteSource {
    File(PathBuf),
    /// Solid fill used when the file is missing.
    Placeholder(Rgb),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub source: SpriteSource,
}

impl Sprite {
    /// Solid color of a placeholder, if this is one.
    pub fn placeholder_color(&self) -> Option<Rgb> {
        match self.source {
            SpriteSource::Placeholder(color) => Some(color),
            SpriteSource::File(_) => None,
        }
    }
}

/// Resolves sprite names against a root directory.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Look up `name`, substituting a red placeholder if it does not exist.
    pub fn load(&self, name: &str, width: u32, height: u32) -> Sprite {
        let path = self.root.join(name);
        let source = if path.is_file() {
            SpriteSource::File(path)
        } else {
            warn!(path = %path.display(), "Missing sprite, using placeholder");
            SpriteSource::Placeholder(Rgb::RED)
        };
        Sprite {
            width,
            height,
            source,
        }
    }

    pub fn player_tank(&self) -> Sprite {
        self.load(PLAYER_TANK, TANK_SIZE as u32, TANK_SIZE as u32)
    }

    pub fn enemy_tank(&self) -> Sprite {
        self.load(ENEMY_TANK, TANK_SIZE as u32, TANK_SIZE as u32)
    }

    /// Full-arena background for a map, or the menu background for `None`.
    pub fn background(&self, map: Option<MapId>) -> Sprite {
        let name = match map {
            Some(map) => catalog::definition(map).background,
            None => catalog::MENU_BACKGROUND,
        };
        self.load(name, ARENA_WIDTH as u32, ARENA_HEIGHT as u32)
    }
}
