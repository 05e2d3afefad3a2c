//! Game state.
//!
//! `GameState` is plain data owned by exactly one
//! [`GameOrchestrator`](crate::game::GameOrchestrator). Reads are public;
//! mutation is crate-private and goes through the orchestrator's operations.
//!
//! Uses `im` persistent structures so snapshots for persistence or undo are
//! O(1) clones.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::config::{GameConfig, TiePolicy};
use super::error::PersistenceError;
use super::player::{Player, PlayerId, PlayerMap};
use super::word::Word;
use crate::game::GameResult;

/// Lifecycle status. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Waiting,
    Playing,
    Finished,
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Word currently in play.
    pub(crate) current_word: Word,

    /// Active bonus letters. Consumed on first scoring use.
    pub(crate) key_letters: OrdSet<char>,

    /// Letters every move must keep.
    pub(crate) locked_letters: OrdSet<char>,

    pub(crate) players: PlayerMap<Player>,

    /// Seat whose move it is.
    pub(crate) current_player: PlayerId,

    /// Turn counter, starting at 1. The game finishes once it exceeds `max_turns`.
    pub(crate) current_turn: u32,

    pub(crate) max_turns: u32,

    pub(crate) status: GameStatus,

    pub(crate) turn_history: Vector<TurnRecord>,

    /// Seed word plus every word played, for the no-repeat rule.
    pub(crate) used_words: OrdSet<Word>,

    pub(crate) tie_policy: TiePolicy,

    pub(crate) allow_slang: bool,

    pub(crate) check_length: bool,

    /// Set exactly when `status` becomes `Finished`.
    pub(crate) outcome: Option<GameResult>,
}

impl GameState {
    /// Fresh state in `Waiting` from a validated config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let players = PlayerMap::new(config.players.len(), |id| {
            let seat = &config.players[id.index()];
            Player::new(id, seat.name.clone(), seat.kind)
        });

        Self {
            current_word: config.initial_word.clone(),
            key_letters: config.key_letters.iter().map(|c| c.to_ascii_uppercase()).collect(),
            locked_letters: config.locked_letters.iter().map(|c| c.to_ascii_uppercase()).collect(),
            players,
            current_player: PlayerId::new(0),
            current_turn: 1,
            max_turns: config.max_turns,
            status: GameStatus::Waiting,
            turn_history: Vector::new(),
            used_words: OrdSet::unit(config.initial_word.clone()),
            tie_policy: config.tie_policy,
            allow_slang: config.allow_slang,
            check_length: config.check_length,
            outcome: None,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn current_word(&self) -> &Word {
        &self.current_word
    }

    #[must_use]
    pub fn key_letters(&self) -> &OrdSet<char> {
        &self.key_letters
    }

    #[must_use]
    pub fn locked_letters(&self) -> &OrdSet<char> {
        &self.locked_letters
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    #[must_use]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub fn score(&self, id: PlayerId) -> u32 {
        self.players[id].score
    }

    #[must_use]
    pub fn turn_history(&self) -> &Vector<TurnRecord> {
        &self.turn_history
    }

    #[must_use]
    pub fn is_word_used(&self, word: &Word) -> bool {
        self.used_words.contains(word)
    }

    #[must_use]
    pub fn tie_policy(&self) -> TiePolicy {
        self.tie_policy
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameResult> {
        self.outcome.as_ref()
    }

    /// The single winner, if the game finished with one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Some(GameResult::Winner(id)) => Some(id),
            _ => None,
        }
    }

    /// Check the invariants a state built by [`GameState::from_config`] holds.
    ///
    /// States from storage skip the constructor, so they are checked before
    /// being played on.
    pub fn check(&self) -> Result<(), PersistenceError> {
        let invalid = |msg: String| Err(PersistenceError::InvalidState(msg));

        let count = self.players.player_count();
        if count == 0 || count > 255 {
            return invalid(format!("roster has {count} players"));
        }
        if let Some((seat, player)) = self.players.iter().find(|(seat, p)| p.id != *seat) {
            return invalid(format!("seat {} holds player id {}", seat.0, player.id.0));
        }
        if self.current_player.index() >= count {
            return invalid(format!(
                "current player {} outside roster of {count}",
                self.current_player.0
            ));
        }
        if self.max_turns == 0 {
            return invalid("max_turns is 0".to_string());
        }
        if (self.status == GameStatus::Finished) != self.outcome.is_some() {
            return invalid(format!("status {:?} with outcome {:?}", self.status, self.outcome));
        }
        if let Some(missing) = self
            .locked_letters
            .iter()
            .find(|&&c| !self.current_word.contains_letter(c))
        {
            return invalid(format!("locked letter {missing} not in {}", self.current_word));
        }
        Ok(())
    }

    // === Snapshot codec ===

    /// Encode with bincode, for byte-oriented storage adapters.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        bincode::serialize(self).map_err(|e| PersistenceError::Encode(e.to_string()))
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        bincode::deserialize(bytes).map_err(|e| PersistenceError::Decode(e.to_string()))
    }
}
