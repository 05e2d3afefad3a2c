//! Session configuration.
//!
//! A game is created from a [`GameConfig`]: seed word, turn limit, roster,
//! starting key/locked letters, and rule switches. Configs are plain serde
//! data so adapters can load them from JSON; call [`GameConfig::validate`]
//! (the orchestrator does) before use.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerKind;
use super::word::Word;

/// How a final score tie is resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Tied leaders means nobody wins.
    #[default]
    Draw,
    /// The tied leader earliest in seat order wins.
    FirstInTurnOrder,
    /// All tied leaders share the win.
    Shared,
}

/// One seat in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub kind: PlayerKind,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn bot(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Bot,
        }
    }
}

/// Complete configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed word. Trusted: it is not dictionary-checked.
    pub initial_word: Word,

    /// Number of moves after which the game finishes.
    pub max_turns: u32,

    /// Roster in turn order.
    pub players: Vec<PlayerConfig>,

    /// Bonus letters active at the start.
    pub key_letters: Vec<char>,

    /// Letters that must survive every move.
    pub locked_letters: Vec<char>,

    pub tie_policy: TiePolicy,

    /// Accept slang words for human moves.
    pub allow_slang: bool,

    /// Enforce the minimum length and the one-letter length delta.
    pub check_length: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_word: Word::new("CAT"),
            max_turns: 10,
            players: vec![PlayerConfig::human("Player"), PlayerConfig::bot("Bot")],
            key_letters: Vec::new(),
            locked_letters: Vec::new(),
            tie_policy: TiePolicy::default(),
            allow_slang: false,
            check_length: true,
        }
    }
}

impl GameConfig {
    /// A config with the given seed word, turn limit, and roster.
    pub fn new(initial_word: impl AsRef<str>, max_turns: u32, players: Vec<PlayerConfig>) -> Self {
        Self {
            initial_word: Word::new(initial_word),
            max_turns,
            players,
            ..Self::default()
        }
    }

    /// Parse from JSON. Missing fields fall back to [`GameConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_key_letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.key_letters = letters.into_iter().map(|c| c.to_ascii_uppercase()).collect();
        self
    }

    #[must_use]
    pub fn with_locked_letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.locked_letters = letters.into_iter().map(|c| c.to_ascii_uppercase()).collect();
        self
    }

    #[must_use]
    pub fn with_tie_policy(mut self, policy: TiePolicy) -> Self {
        self.tie_policy = policy;
        self
    }

    #[must_use]
    pub fn with_slang(mut self, allow: bool) -> Self {
        self.allow_slang = allow;
        self
    }

    #[must_use]
    pub fn with_length_checks(mut self, check: bool) -> Self {
        self.check_length = check;
        self
    }

    /// Check the config is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurns);
        }
        if !self.initial_word.is_alphabetic() {
            return Err(ConfigError::InvalidInitialWord(self.initial_word.to_string()));
        }
        if let Some(&bad) = self
            .key_letters
            .iter()
            .chain(self.locked_letters.iter())
            .find(|c| !c.is_ascii_alphabetic())
        {
            return Err(ConfigError::InvalidLetter(bad));
        }
        if let Some(&missing) = self
            .locked_letters
            .iter()
            .find(|&&c| !self.initial_word.contains_letter(c))
        {
            return Err(ConfigError::LockedLetterMissing(missing));
        }
        Ok(())
    }
}
