//! Bot personalities.
//!
//! Every personality shares the same generator and scorer. They differ only
//! in how candidates are validated, which point totals they are willing to
//! play, and what they do about key letters. [`BotStrategy`] is the seam;
//! [`Personality`] provides the five stock bots.

use serde::{Deserialize, Serialize};

/// How candidate words are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Same rules as a human move.
    #[default]
    Fair,
    /// Bot rules: validation is bypassed.
    Privileged,
}

/// What the bot does with active key letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyLetterPolicy {
    /// Score as if there were no key letters.
    Ignore,
    /// Never play a move that uses a key letter.
    Avoid,
    /// Score key letters normally.
    #[default]
    Allow,
    /// Rank moves using a key letter above all others.
    Prioritize,
}

/// Decision policy for a bot personality.
pub trait BotStrategy: Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    fn validation_mode(&self) -> ValidationMode;

    /// Accept slang words in `Fair` mode.
    fn allow_slang(&self) -> bool {
        false
    }

    fn key_letter_policy(&self) -> KeyLetterPolicy;

    /// Is a move worth `total` points acceptable to this bot?
    fn accepts_score(&self, total: u32) -> bool;
}

/// Stock personality: a validation mode, a point range, and a key-letter policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub name: String,
    pub mode: ValidationMode,
    pub allow_slang: bool,
    pub min_score: u32,
    /// `None` for no upper bound.
    pub max_score: Option<u32>,
    pub key_letters: KeyLetterPolicy,
}

impl Personality {
    /// Plays single-point moves and leaves key letters for the player.
    #[must_use]
    pub fn trainer() -> Self {
        Self {
            name: "Trainer".to_string(),
            mode: ValidationMode::Fair,
            allow_slang: false,
            min_score: 0,
            max_score: Some(1),
            key_letters: KeyLetterPolicy::Avoid,
        }
    }

    #[must_use]
    pub fn easy() -> Self {
        Self {
            name: "Easy".to_string(),
            mode: ValidationMode::Fair,
            allow_slang: false,
            min_score: 0,
            max_score: Some(2),
            key_letters: KeyLetterPolicy::Ignore,
        }
    }

    #[must_use]
    pub fn medium() -> Self {
        Self {
            name: "Medium".to_string(),
            mode: ValidationMode::Fair,
            allow_slang: false,
            min_score: 0,
            max_score: Some(3),
            key_letters: KeyLetterPolicy::Allow,
        }
    }

    #[must_use]
    pub fn hard() -> Self {
        Self {
            name: "Hard".to_string(),
            mode: ValidationMode::Fair,
            allow_slang: true,
            min_score: 0,
            max_score: None,
            key_letters: KeyLetterPolicy::Prioritize,
        }
    }

    #[must_use]
    pub fn boss() -> Self {
        Self {
            name: "Boss".to_string(),
            mode: ValidationMode::Privileged,
            allow_slang: true,
            min_score: 2,
            max_score: None,
            key_letters: KeyLetterPolicy::Prioritize,
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::medium()
    }
}

impl BotStrategy for Personality {
    fn name(&self) -> &str {
        &self.name
    }

    fn validation_mode(&self) -> ValidationMode {
        self.mode
    }

    fn allow_slang(&self) -> bool {
        self.allow_slang
    }

    fn key_letter_policy(&self) -> KeyLetterPolicy {
        self.key_letters
    }

    fn accepts_score(&self, total: u32) -> bool {
        total >= self.min_score && self.max_score.map_or(true, |max| total <= max)
    }
}
