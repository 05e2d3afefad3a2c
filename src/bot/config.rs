//! Bot configuration parameters.

use serde::{Deserialize, Serialize};

use crate::moves::MoveGenConfig;

/// Bot configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Candidates kept after validation, before scoring.
    pub max_candidates: usize,

    /// Soft wall-clock budget in milliseconds.
    /// Checked between phases; a running phase always completes.
    pub time_limit_ms: u64,

    /// Candidate generation settings.
    pub move_gen: MoveGenConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_candidates: 200,
            time_limit_ms: 2_000,
            move_gen: MoveGenConfig::default(),
        }
    }
}

impl BotConfig {
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    #[must_use]
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    #[must_use]
    pub fn with_move_gen(mut self, move_gen: MoveGenConfig) -> Self {
        self.move_gen = move_gen;
        self
    }
}
