//! Move generation.
//!
//! [`MoveGenerator`] turns a word into [`MoveCandidate`]s grouped by
//! operation. Candidates are raw: the bot filters, validates, and scores them.

mod generator;

pub use generator::{
    GeneratedMoves, MoveCandidate, MoveGenConfig, MoveGenError, MoveGenerator, ALPHABET,
};
