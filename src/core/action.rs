//! Turn actions and the turn audit trail.
//!
//! A [`TurnAction`] describes one letter-level operation of a move
//! ("add S at 3"). It is descriptive, not an instruction: the orchestrator
//! applies whole words, and actions are derived afterwards for display and
//! history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use super::word::Word;
use crate::scoring::ScoringBreakdown;

/// Kind of letter-level operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Add,
    Remove,
    Rearrange,
    Substitute,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Rearrange => "rearrange",
            Self::Substitute => "substitute",
        };
        f.write_str(name)
    }
}

/// One descriptive letter operation.
///
/// `letter` is the letter introduced (Add, Substitute) or dropped (Remove);
/// it is `None` for Rearrange. `position` indexes the new word for Add and
/// Substitute and the old word for Remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnAction {
    pub kind: ActionKind,
    pub letter: Option<char>,
    pub position: Option<usize>,
}

impl TurnAction {
    #[must_use]
    pub fn add(letter: char, position: usize) -> Self {
        Self {
            kind: ActionKind::Add,
            letter: Some(letter),
            position: Some(position),
        }
    }

    #[must_use]
    pub fn remove(letter: char, position: usize) -> Self {
        Self {
            kind: ActionKind::Remove,
            letter: Some(letter),
            position: Some(position),
        }
    }

    #[must_use]
    pub fn substitute(letter: char, position: usize) -> Self {
        Self {
            kind: ActionKind::Substitute,
            letter: Some(letter),
            position: Some(position),
        }
    }

    #[must_use]
    pub fn rearrange() -> Self {
        Self {
            kind: ActionKind::Rearrange,
            letter: None,
            position: None,
        }
    }
}

/// Actions making up a single move. Almost always one or two.
pub type TurnActions = SmallVec<[TurnAction; 2]>;

/// Append-only audit entry for an applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number the move was played on (starts at 1).
    pub turn_number: u32,
    pub player: PlayerId,
    pub previous_word: Word,
    pub new_word: Word,
    pub actions: TurnActions,
    pub score_breakdown: ScoringBreakdown,
    /// Milliseconds, from the orchestrator's clock.
    pub timestamp: u64,
}
