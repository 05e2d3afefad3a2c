//! Core engine types: words, players, state, records, RNG, clock, configuration.
//!
//! Everything here is shared by the higher layers (validation, scoring, move
//! generation, bot, orchestrator) and carries no game rules of its own.

pub mod word;
pub mod player;
pub mod rng;
pub mod clock;
pub mod config;
pub mod error;
pub mod action;
pub mod state;

pub use word::Word;
pub use player::{Player, PlayerId, PlayerKind, PlayerMap};
pub use rng::GameRng;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, PlayerConfig, TiePolicy};
pub use error::{ConfigError, PersistenceError, ReasonCode};
pub use action::{ActionKind, TurnAction, TurnActions, TurnRecord};
pub use state::{GameState, GameStatus};
