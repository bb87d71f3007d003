//! Word-list spawner
//!
//! Emits one obstacle per spawn-interval boundary, consuming the level's word
//! list strictly in order. Exhausting the list means "all words dispatched",
//! which is not the same as all words completed - dispatched words still have
//! to be matched.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::config::LevelConfig;
use crate::consts::{OBSTACLE_ASSET_COUNT, SPAWN_EDGE};

/// Cursor into the level's word list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    next_index: usize,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once every word has been turned into an obstacle
    pub fn all_dispatched(&self, config: &LevelConfig) -> bool {
        self.next_index >= config.words.len()
    }

    /// Words not yet dispatched
    pub fn remaining(&self, config: &LevelConfig) -> usize {
        config.words.len().saturating_sub(self.next_index)
    }

    /// Consume the next word and build its obstacle at the spawn edge.
    ///
    /// The sprite index is the only random choice in the engine; it is
    /// cosmetic and drawn from the session's seeded RNG.
    pub fn spawn_next(&mut self, config: &LevelConfig, rng: &mut Pcg32, id: u32) -> Option<Obstacle> {
        let word = config.words.get(self.next_index)?.clone();
        self.next_index += 1;
        Some(Obstacle {
            id,
            word,
            position: SPAWN_EDGE,
            asset: rng.random_range(0..OBSTACLE_ASSET_COUNT),
        })
    }

    /// Reset to the first word (retry)
    pub fn rearm(&mut self) {
        self.next_index = 0;
    }
}
