//! Pluggable state persistence.
//!
//! Storage backends implement [`StateStore`]. The orchestrator only needs
//! load and save by key; a backend that stores bytes can use
//! [`GameState::to_bytes`] / [`GameState::from_bytes`].
//!
//! A failed load, or a loaded state that fails [`GameState::check`], falls
//! back to a fresh game (logged). A failed save is returned to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::core::{ConfigError, GameConfig, GameState, PersistenceError};
use crate::dictionary::WordSource;

use super::orchestrator::GameOrchestrator;

/// Async key-value storage for game state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load a saved state. `Ok(None)` if nothing is stored under `key`.
    async fn load_state(&self, key: &str) -> Result<Option<GameState>, PersistenceError>;

    /// Save `state` under `key`, replacing any previous value.
    async fn save_state(&self, key: &str, state: &GameState) -> Result<(), PersistenceError>;
}

impl GameOrchestrator {
    /// Resume the game stored under `key`, or start fresh from `config`.
    ///
    /// Load failures and inconsistent saved states are logged and treated as
    /// "nothing stored". Only an invalid `config` is an error.
    pub async fn restore<S>(
        store: &S,
        key: &str,
        config: &GameConfig,
        lexicon: Arc<dyn WordSource>,
    ) -> Result<Self, ConfigError>
    where
        S: StateStore + ?Sized,
    {
        let loaded = match store.load_state(key).await {
            Ok(loaded) => loaded,
            Err(err) => {
                warn!(key, error = %err, "failed to load saved game, starting fresh");
                None
            }
        };

        let Some(state) = loaded else {
            debug!(key, "no saved game, starting fresh");
            return Self::new(config, lexicon);
        };

        let turn = state.current_turn();
        match Self::from_state(state, Arc::clone(&lexicon)) {
            Ok(game) => {
                debug!(key, turn, "restored saved game");
                Ok(game)
            }
            Err(err) => {
                warn!(key, error = %err, "saved game is unusable, starting fresh");
                Self::new(config, lexicon)
            }
        }
    }

    /// Save the current state under `key`.
    pub async fn persist<S>(&self, store: &S, key: &str) -> Result<(), PersistenceError>
    where
        S: StateStore + ?Sized,
    {
        store.save_state(key, self.state()).await?;
        debug!(key, turn = self.state().current_turn(), "game saved");
        Ok(())
    }
}
