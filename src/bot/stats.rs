//! Per-decision diagnostics.

use serde::{Deserialize, Serialize};

/// How many candidates survived each phase of one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStats {
    pub generated: usize,
    pub after_lock_filter: usize,
    pub after_validation: usize,
    pub after_truncation: usize,
    /// Candidates left after the strategy's score and key-letter filters.
    pub ranked: usize,
    /// The soft budget ran out before scoring.
    pub budget_exceeded: bool,
}

impl DecisionStats {
    /// Fraction of generated candidates that passed validation.
    #[must_use]
    pub fn validity_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.after_validation as f64 / self.generated as f64
        }
    }
}
