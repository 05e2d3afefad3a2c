//! Error taxonomy.
//!
//! Gameplay rejections are plain values ([`ReasonCode`]) carried inside
//! results; they are never raised as `Err` from validation. The `thiserror`
//! types below cover configuration and persistence failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable reason a word or move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    EmptyWord,
    InvalidCharacters,
    TooShort,
    LengthChangeTooLarge,
    NotInDictionary,
    AlreadyUsed,
    GameNotActive,
    LockedLetterRemoved,
    /// The attempt was computed against a word or player that is no longer current.
    StaleAttempt,
    NotYourTurn,
}

impl ReasonCode {
    /// Stable code string, as serialized.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyWord => "EMPTY_WORD",
            Self::InvalidCharacters => "INVALID_CHARACTERS",
            Self::TooShort => "TOO_SHORT",
            Self::LengthChangeTooLarge => "LENGTH_CHANGE_TOO_LARGE",
            Self::NotInDictionary => "NOT_IN_DICTIONARY",
            Self::AlreadyUsed => "ALREADY_USED",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::LockedLetterRemoved => "LOCKED_LETTER_REMOVED",
            Self::StaleAttempt => "STALE_ATTEMPT",
            Self::NotYourTurn => "NOT_YOUR_TURN",
        }
    }

    /// Short user-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyWord => "Please enter a word.",
            Self::InvalidCharacters => "Words may only contain letters.",
            Self::TooShort => "Words must be at least 3 letters long.",
            Self::LengthChangeTooLarge => "You can only add or remove one letter at a time.",
            Self::NotInDictionary => "That word is not in the dictionary.",
            Self::AlreadyUsed => "That word has already been played.",
            Self::GameNotActive => "The game is not in progress.",
            Self::LockedLetterRemoved => "Locked letters must stay in the word.",
            Self::StaleAttempt => "The board changed since this move was checked.",
            Self::NotYourTurn => "It is not your turn.",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Invalid game or engine configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("roster is empty")]
    NoPlayers,
    #[error("roster has {0} players, at most 255 are supported")]
    TooManyPlayers(usize),
    #[error("max_turns must be at least 1")]
    ZeroTurns,
    #[error("initial word {0:?} is empty or contains non-letters")]
    InvalidInitialWord(String),
    #[error("letter {0:?} is not A-Z")]
    InvalidLetter(char),
    #[error("locked letter {0:?} is not in the initial word")]
    LockedLetterMissing(char),
    #[error("could not parse configuration: {0}")]
    Parse(String),
}

/// Failure at the persistence boundary.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("could not encode game state: {0}")]
    Encode(String),
    #[error("could not decode game state: {0}")]
    Decode(String),
    #[error("stored game state is inconsistent: {0}")]
    InvalidState(String),
}
