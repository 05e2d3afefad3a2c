//! Computer opponent.
//!
//! [`BotEngine`] turns the current word into a ranked list of legal moves.
//! How it ranks and filters them is decided by a [`BotStrategy`]; the five
//! built-in [`Personality`] presets cover trainer through boss.

mod config;
mod engine;
mod stats;
mod strategy;

pub use config::BotConfig;
pub use engine::{confidence, BotDecision, BotEngine, BotMove, BotRequest};
pub use stats::DecisionStats;
pub use strategy::{BotStrategy, KeyLetterPolicy, Personality, ValidationMode};
