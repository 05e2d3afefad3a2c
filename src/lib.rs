//! # wordmorph
//!
//! Rules engine for a turn-based word-transformation game. Players take
//! turns changing a shared word by adding, removing, substituting, or
//! rearranging letters, and score points for each change.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, injected I/O**: the lexicon, clock, random source and
//!    storage are all passed in. Nothing here touches the network or disk.
//!
//! 2. **One owner per game**: a [`GameOrchestrator`] owns its state outright.
//!    Observers subscribe to events, published after each state change.
//!
//! 3. **Deterministic when seeded**: all randomness comes from a caller-owned
//!    [`GameRng`], so bot decisions replay exactly in tests.
//!
//! ## Modules
//!
//! - `core`: words, players, state, turn records, RNG, clock, configuration
//! - `dictionary`: lexicon and word validation
//! - `scoring`: word diffing and point calculation
//! - `moves`: candidate move generation
//! - `bot`: computer opponent and personalities
//! - `game`: turn orchestration, events, outcome, persistence
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use wordmorph::{GameConfig, GameOrchestrator, Lexicon, PlayerConfig};
//!
//! let lexicon = Arc::new(Lexicon::from_words(["cat", "cats", "scat"]));
//! let config = GameConfig::new("cat", 4, vec![PlayerConfig::human("Ann"), PlayerConfig::human("Ben")]);
//!
//! let mut game = GameOrchestrator::new(&config, lexicon).unwrap();
//! game.start().unwrap();
//!
//! let record = game.submit_word("cats").unwrap();
//! assert_eq!(record.score_breakdown.total, 1);
//! assert_eq!(game.state().current_word().as_str(), "CATS");
//! ```

pub mod core;
pub mod dictionary;
pub mod scoring;
pub mod moves;
pub mod bot;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, Clock, GameConfig, GameRng, GameState, GameStatus, ManualClock, Player,
    PlayerConfig, PlayerId, PlayerKind, ReasonCode, SystemClock, TiePolicy, TurnAction,
    TurnRecord, Word,
};

pub use crate::dictionary::{validate, Lexicon, ValidationOptions, ValidationResult, WordSource};

pub use crate::scoring::{analyze, score, ScoringBreakdown, WordDiff};

pub use crate::moves::{GeneratedMoves, MoveCandidate, MoveGenerator};

pub use crate::bot::{BotConfig, BotDecision, BotEngine, BotMove, BotRequest, Personality};

pub use crate::game::{GameEvent, GameOrchestrator, GameResult, MoveAttempt, StateStore};
