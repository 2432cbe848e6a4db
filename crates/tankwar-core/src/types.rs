//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels). x grows right, y grows down.
///
/// For tanks, bonuses and obstacles this is the top-left corner of the
/// bounding box; for bullets it is the center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Bounding box of a `width` x `height` entity anchored at this top-left corner.
    pub fn box_of(&self, width: f64, height: f64) -> Aabb {
        Aabb::new(self.x, self.y, width, height)
    }

    /// Bounding box of a square entity centered on this position.
    pub fn centered_box(&self, half_extent: f64) -> Aabb {
        Aabb::new(
            self.x - half_extent,
            self.y - half_extent,
            half_extent * 2.0,
            half_extent * 2.0,
        )
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap test. Boxes that only share an edge do not intersect,
    /// and an empty box intersects nothing.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0
        {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Display color, cosmetic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const DARK_GRAY: Rgb = Rgb(50, 50, 50);
    pub const LIGHT_GRAY: Rgb = Rgb(180, 180, 180);
    pub const CANYON: Rgb = Rgb(139, 69, 19);
    pub const FOUNTAIN: Rgb = Rgb(200, 200, 200);
}

/// Simulation time tracking.
///
/// Milliseconds are derived from the tick count rather than accumulated, so
/// timers never drift by more than one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: u64,
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / crate::constants::TICK_RATE as u64;
    }

    /// Elapsed simulation time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}
