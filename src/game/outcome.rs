//! Final result of a game.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap, TiePolicy};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Tied leaders under [`TiePolicy::Draw`].
    Draw,
    /// Tied leaders under [`TiePolicy::Shared`].
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}

/// Decide the result from final scores.
///
/// The player with the strictly highest score wins. Ties for the lead are
/// settled by `policy`.
#[must_use]
pub fn resolve_outcome(players: &PlayerMap<Player>, policy: TiePolicy) -> GameResult {
    let top = players.values().map(|p| p.score).max().unwrap_or(0);
    let leaders: Vec<PlayerId> = players
        .iter()
        .filter(|(_, p)| p.score == top)
        .map(|(id, _)| id)
        .collect();

    match (leaders.as_slice(), policy) {
        ([only], _) => GameResult::Winner(*only),
        (_, TiePolicy::Draw) => GameResult::Draw,
        ([first, ..], TiePolicy::FirstInTurnOrder) => GameResult::Winner(*first),
        (_, TiePolicy::Shared) => GameResult::Winners(leaders),
        ([], TiePolicy::FirstInTurnOrder) => GameResult::Draw,
    }
}
