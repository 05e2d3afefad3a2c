//! Word diffing and move scoring.
//!
//! - [`analyze`]: multiset-aware diff between two words
//! - [`describe_move`]: the same diff as descriptive [`TurnAction`](crate::core::TurnAction)s
//! - [`score`]: points for a move, as a [`ScoringBreakdown`]

pub mod diff;
pub mod engine;

pub use diff::{analyze, describe_move, retains_locked, LetterBag, WordDiff};
pub use engine::{score, score_diff, ScoringBreakdown};
