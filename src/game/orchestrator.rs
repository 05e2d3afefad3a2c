//! Turn orchestrator: the game state machine.
//!
//! ```text
//! Waiting --start()--> Playing --last turn / finish_game()--> Finished
//! ```
//!
//! `Finished` is terminal. Moves go through two steps: [`attempt_move`]
//! checks a word without touching state, [`apply_move`] commits a checked
//! attempt. [`submit_word`] does both.
//!
//! [`attempt_move`]: GameOrchestrator::attempt_move
//! [`apply_move`]: GameOrchestrator::apply_move
//! [`submit_word`]: GameOrchestrator::submit_word

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bot::{BotDecision, BotEngine};
use crate::core::{
    Clock, ConfigError, GameConfig, GameRng, GameState, GameStatus, PersistenceError, PlayerId,
    PlayerKind, ReasonCode, SystemClock, TurnRecord, Word,
};
use crate::dictionary::{validate, ValidationOptions, WordSource};
use crate::scoring::{describe_move, retains_locked, score, ScoringBreakdown};

use super::events::{EventBus, GameEvent};
use super::outcome::{resolve_outcome, GameResult};

/// Result of checking a word, without applying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAttempt {
    /// Acting player.
    pub player: PlayerId,
    /// Word in play when the attempt was made.
    pub previous_word: Word,
    /// Normalized proposed word.
    pub word: Word,
    /// Turn the attempt was made on.
    pub turn: u32,
    /// `Some` exactly when the move cannot be applied.
    pub reason: Option<ReasonCode>,
    /// Prospective points; `Some` exactly when the move can be applied.
    pub breakdown: Option<ScoringBreakdown>,
}

impl MoveAttempt {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    /// User-facing rejection message.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.reason.map(ReasonCode::message)
    }
}

/// What happened on a bot's turn.
#[derive(Clone, Debug, PartialEq)]
pub struct BotTurn {
    pub decision: BotDecision,
    /// `None` if the bot found no move and passed.
    pub record: Option<TurnRecord>,
}

/// Owns one game's state and enforces its rules.
pub struct GameOrchestrator {
    state: GameState,
    lexicon: Arc<dyn WordSource>,
    clock: Arc<dyn Clock>,
    events: EventBus,
}

impl std::fmt::Debug for GameOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameOrchestrator")
            .field("state", &self.state)
            .field("subscribers", &self.events.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl GameOrchestrator {
    /// Create a game in `Waiting` from a config.
    pub fn new(config: &GameConfig, lexicon: Arc<dyn WordSource>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_state(GameState::from_config(config), lexicon))
    }

    /// Resume from an existing state (for example one loaded from storage).
    ///
    /// The state is checked first; an inconsistent one is refused rather
    /// than played on.
    pub fn from_state(state: GameState, lexicon: Arc<dyn WordSource>) -> Result<Self, PersistenceError> {
        state.check()?;
        Ok(Self::with_state(state, lexicon))
    }

    fn with_state(state: GameState, lexicon: Arc<dyn WordSource>) -> Self {
        Self {
            state,
            lexicon,
            clock: Arc::new(SystemClock),
            events: EventBus::new(),
        }
    }

    /// Set the clock used for turn timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Receive every event published from now on.
    pub fn subscribe(&mut self) -> Receiver<GameEvent> {
        self.events.subscribe()
    }

    // === Lifecycle ===

    /// Waiting → Playing.
    pub fn start(&mut self) -> Result<(), ReasonCode> {
        if self.state.status != GameStatus::Waiting {
            return Err(ReasonCode::GameNotActive);
        }
        self.state.status = GameStatus::Playing;
        info!(word = %self.state.current_word, players = self.state.player_count(), "game started");

        self.events.publish([GameEvent::GameStarted {
            word: self.state.current_word.clone(),
            first_player: self.state.current_player,
        }]);
        Ok(())
    }

    /// End the game now and settle the result. Only valid while playing.
    pub fn finish_game(&mut self) -> Result<GameResult, ReasonCode> {
        if self.state.status != GameStatus::Playing {
            return Err(ReasonCode::GameNotActive);
        }
        let event = self.finish();
        self.events.publish([event]);
        self.state.outcome.clone().ok_or(ReasonCode::GameNotActive)
    }

    /// Discard the current game and start over (in `Waiting`) from `config`.
    ///
    /// Subscribers stay attached.
    pub fn reset(&mut self, config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.state = GameState::from_config(config);
        debug!(word = %self.state.current_word, "game reset");
        Ok(())
    }

    /// Pass play to the next seat without a move.
    pub fn switch_player(&mut self) -> Result<PlayerId, ReasonCode> {
        if self.state.status != GameStatus::Playing {
            return Err(ReasonCode::GameNotActive);
        }
        let from = self.state.current_player;
        let to = from.next(self.state.player_count());
        self.state.current_player = to;

        self.events.publish([GameEvent::PlayerSwitched { from, to }]);
        Ok(to)
    }

    // === Moves ===

    /// Check `word` as the current player's move. Does not change state.
    #[must_use]
    pub fn attempt_move(&self, word: &str) -> MoveAttempt {
        let state = &self.state;
        let player = state.current_player;
        let mut attempt = MoveAttempt {
            player,
            previous_word: state.current_word.clone(),
            word: Word::new(word),
            turn: state.current_turn,
            reason: None,
            breakdown: None,
        };

        if state.status != GameStatus::Playing {
            attempt.reason = Some(ReasonCode::GameNotActive);
            return attempt;
        }

        let options = ValidationOptions {
            is_bot: state.players[player].kind == PlayerKind::Bot,
            previous_word: Some(&state.current_word),
            allow_slang: state.allow_slang,
            check_length: state.check_length,
        };
        let validation = validate(self.lexicon.as_ref(), word, &options);
        attempt.word = validation.normalized_word;

        attempt.reason = if let Some(reason) = validation.reason {
            Some(reason)
        } else if state.is_word_used(&attempt.word) {
            Some(ReasonCode::AlreadyUsed)
        } else if !retains_locked(&attempt.word, state.locked_letters.iter()) {
            Some(ReasonCode::LockedLetterRemoved)
        } else {
            None
        };

        if attempt.reason.is_none() {
            attempt.breakdown = Some(score(
                &state.current_word,
                &attempt.word,
                state.key_letters.iter(),
            ));
        }
        attempt
    }

    /// Commit a checked attempt.
    ///
    /// Leaves state untouched and returns the reason if the game is not
    /// playing, the attempt was rejected, or the board moved on since it was
    /// made.
    pub fn apply_move(&mut self, attempt: &MoveAttempt) -> Result<TurnRecord, ReasonCode> {
        if self.state.status != GameStatus::Playing {
            return Err(ReasonCode::GameNotActive);
        }
        if let Some(reason) = attempt.reason {
            return Err(reason);
        }
        let breakdown = attempt.breakdown.clone().ok_or(ReasonCode::StaleAttempt)?;
        if attempt.player != self.state.current_player
            || attempt.turn != self.state.current_turn
            || attempt.previous_word != self.state.current_word
        {
            return Err(ReasonCode::StaleAttempt);
        }

        let mut pending = Vec::with_capacity(4);
        let state = &mut self.state;
        let player = attempt.player;

        let record = TurnRecord {
            turn_number: state.current_turn,
            player,
            previous_word: state.current_word.clone(),
            new_word: attempt.word.clone(),
            actions: describe_move(&state.current_word, &attempt.word),
            score_breakdown: breakdown,
            timestamp: self.clock.now_ms(),
        };

        state.current_word = attempt.word.clone();
        state.used_words.insert(attempt.word.clone());
        state.players[player].score += record.score_breakdown.total;
        for letter in &record.score_breakdown.consumed_key_letters {
            state.key_letters.remove(letter);
        }
        state.turn_history.push_back(record.clone());
        state.current_player = player.next(state.player_count());
        state.current_turn += 1;

        pending.push(GameEvent::WordChanged {
            previous: record.previous_word.clone(),
            current: record.new_word.clone(),
            player,
        });
        if !record.score_breakdown.consumed_key_letters.is_empty() {
            pending.push(GameEvent::LettersUpdated {
                key_letters: state.key_letters.iter().copied().collect(),
                locked_letters: state.locked_letters.iter().copied().collect(),
                consumed: record.score_breakdown.consumed_key_letters.to_vec(),
            });
        }
        pending.push(GameEvent::TurnCompleted {
            record: record.clone(),
            next_player: state.current_player,
        });

        debug!(
            turn = record.turn_number,
            player = %player,
            from = %record.previous_word,
            to = %record.new_word,
            points = record.score_breakdown.total,
            "move applied"
        );

        if self.state.current_turn > self.state.max_turns {
            pending.push(self.finish());
        }

        self.events.publish(pending);
        Ok(record)
    }

    /// Attempt and, if valid, apply.
    pub fn submit_word(&mut self, word: &str) -> Result<TurnRecord, ReasonCode> {
        let attempt = self.attempt_move(word);
        self.apply_move(&attempt)
    }

    /// Let the bot in the current seat move. A bot without a move passes.
    pub fn play_bot_turn(&mut self, bot: &BotEngine, rng: &mut GameRng) -> Result<BotTurn, ReasonCode> {
        if self.state.status != GameStatus::Playing {
            return Err(ReasonCode::GameNotActive);
        }
        if !self.state.current_player().is_bot() {
            return Err(ReasonCode::NotYourTurn);
        }

        let request = bot
            .request()
            .with_key_letters(self.state.key_letters.iter().copied())
            .with_locked_letters(self.state.locked_letters.iter().copied())
            .with_excluded_words(self.state.used_words.iter().cloned());
        let decision = bot.generate_bot_move(&self.state.current_word, &request, rng);

        let record = match &decision.best {
            Some(best) => {
                let attempt = self.attempt_move(best.word.as_str());
                match self.apply_move(&attempt) {
                    Ok(record) => Some(record),
                    Err(reason) => {
                        warn!(word = %best.word, %reason, "bot move rejected, passing");
                        None
                    }
                }
            }
            None => None,
        };

        if record.is_none() {
            self.switch_player()?;
        }
        Ok(BotTurn { decision, record })
    }

    /// Settle the outcome and mark the game finished. Returns the event to publish.
    fn finish(&mut self) -> GameEvent {
        let outcome = resolve_outcome(&self.state.players, self.state.tie_policy);
        self.state.status = GameStatus::Finished;
        self.state.outcome = Some(outcome.clone());
        info!(?outcome, "game finished");

        GameEvent::GameFinished {
            outcome,
            scores: self.state.players.values().map(|p| p.score).collect(),
        }
    }
}
