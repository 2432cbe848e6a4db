//! Running score state tracked by the engine.
//!
//! Stored on `MatchEngine`, NOT as ECS entities.

use tankwar_core::state::ScoreView;
use tankwar_core::types::SimTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub bonuses_collected: u32,
    pub enemies_destroyed: u32,
    /// Roster size at match start.
    pub enemies_total: u32,
    /// Shots fired by the player.
    pub shots_fired: u32,
}

impl ScoreState {
    pub fn view(&self, time: &SimTime) -> ScoreView {
        ScoreView {
            score: self.score,
            bonuses_collected: self.bonuses_collected,
            enemies_destroyed: self.enemies_destroyed,
            enemies_total: self.enemies_total,
            shots_fired: self.shots_fired,
            elapsed_secs: time.elapsed_secs(),
        }
    }
}
