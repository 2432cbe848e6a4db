//! Random bonus placement.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use tankwar_core::config::MatchConfig;
use tankwar_core::enums::BonusKind;
use tankwar_core::layout::{BonusSpec, ObstacleSpec};
use tankwar_core::types::Position;

use crate::obstacles::MAX_PLACEMENT_ATTEMPTS;
use crate::spawn::is_position_valid;

/// Place `config.bonus_count` bonuses at uniformly random, obstacle-free
/// positions. Each kind is drawn uniformly.
pub fn place(
    config: &MatchConfig,
    obstacles: &[ObstacleSpec],
    rng: &mut ChaCha8Rng,
) -> Vec<BonusSpec> {
    let max_x = (config.arena_width - config.bonus_size) as i64;
    let max_y = (config.arena_height - config.bonus_size) as i64;
    if max_x < 0 || max_y < 0 {
        return Vec::new();
    }

    let mut bonuses = Vec::with_capacity(config.bonus_count);
    for _ in 0..config.bonus_count {
        let position = (0..MAX_PLACEMENT_ATTEMPTS).find_map(|_| {
            let candidate = Position::new(
                rng.gen_range(0..=max_x) as f64,
                rng.gen_range(0..=max_y) as f64,
            );
            is_position_valid(candidate, config.bonus_size, obstacles, config)
                .then_some(candidate)
        });
        let Some(position) = position else {
            debug!("No free cell for a bonus, skipping");
            continue;
        };
        let kind = BonusKind::ALL[rng.gen_range(0..BonusKind::ALL.len())];
        bonuses.push(BonusSpec { position, kind });
    }
    bonuses
}
