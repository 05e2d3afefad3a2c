//! State-change notifications.
//!
//! The orchestrator collects events while it mutates state and publishes
//! them only once the mutation is complete. Observers never run inside a
//! state change: each subscriber gets its own `mpsc` receiver and drains it
//! whenever it likes.
//!
//! Event order for one applied move is always `WordChanged`,
//! `LettersUpdated` (only if key letters were consumed), `TurnCompleted`,
//! then `GameFinished` if that move ended the game.

use std::sync::mpsc::{channel, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, TurnRecord, Word};

use super::outcome::GameResult;

/// A state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted {
        word: Word,
        first_player: PlayerId,
    },
    WordChanged {
        previous: Word,
        current: Word,
        player: PlayerId,
    },
    /// Active key/locked letters after a change.
    LettersUpdated {
        key_letters: Vec<char>,
        locked_letters: Vec<char>,
        consumed: Vec<char>,
    },
    TurnCompleted {
        record: TurnRecord,
        next_player: PlayerId,
    },
    PlayerSwitched {
        from: PlayerId,
        to: PlayerId,
    },
    GameFinished {
        outcome: GameResult,
        /// Final scores in seat order.
        scores: Vec<u32>,
    },
}

impl GameEvent {
    /// Short name, for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GameStarted { .. } => "game_started",
            Self::WordChanged { .. } => "word_changed",
            Self::LettersUpdated { .. } => "letters_updated",
            Self::TurnCompleted { .. } => "turn_completed",
            Self::PlayerSwitched { .. } => "player_switched",
            Self::GameFinished { .. } => "game_finished",
        }
    }
}

/// Fan-out of events to any number of receivers.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<GameEvent>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber. Dropping the receiver unsubscribes.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Number of live subscribers (as of the last publish).
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver events in order to every subscriber, pruning dropped ones.
    pub fn publish(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            tracing::trace!(event = event.name(), "publishing");
            self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        }
    }
}
