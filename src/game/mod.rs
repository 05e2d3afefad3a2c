//! Game session: orchestration, events, outcome, and persistence.

mod events;
mod orchestrator;
mod outcome;
mod persistence;

pub use events::{EventBus, GameEvent};
pub use orchestrator::{BotTurn, GameOrchestrator, MoveAttempt};
pub use outcome::{resolve_outcome, GameResult};
pub use persistence::StateStore;
