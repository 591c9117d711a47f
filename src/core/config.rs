//! Game configuration.
//!
//! The table layout is fixed: 7 play columns dealt 7 cards deep, 7 reserve
//! slots and 4 base columns. What a caller configures is where the
//! randomness comes from.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of play columns.
pub const PLAY_COLUMNS: usize = 7;

/// Number of single-card reserve columns.
pub const RESERVE_COLUMNS: usize = 7;

/// Number of base (foundation) columns.
pub const BASE_COLUMNS: usize = 4;

/// Cards dealt into each play column at the start of a game.
pub const PLAY_DEPTH: usize = 7;

/// Configuration for a game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Shuffle seed. `None` draws one from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
