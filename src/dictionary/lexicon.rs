//! Word data.
//!
//! The validator never owns word lists. It is handed a [`WordSource`], built
//! once and then shared read-only (typically behind an `Arc`) by every
//! session in the process.

use rustc_hash::FxHashSet;
use serde::Deserialize;

use crate::core::ConfigError;

/// Read-only word membership queries.
///
/// Arguments are normalized (trimmed, uppercase) words.
pub trait WordSource: Send + Sync {
    /// Is the word in the primary lexicon?
    fn has_word(&self, word: &str) -> bool;

    /// Is the word in the slang list?
    fn is_slang(&self, word: &str) -> bool;

    /// Is the word profane? Only drives display, never validity.
    fn is_profane(&self, word: &str) -> bool;
}

/// Immutable in-memory lexicon.
///
/// ## Example
///
/// ```
/// use wordmorph::dictionary::{Lexicon, WordSource};
///
/// let lexicon = Lexicon::from_words(["cat", "cats", "bat"]).with_slang(["yeet"]);
/// assert!(lexicon.has_word("CATS"));
/// assert!(lexicon.is_slang("YEET"));
/// assert!(!lexicon.has_word("YEET"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    slang: FxHashSet<String>,
    profanity: FxHashSet<String>,
}

/// Bundled JSON layout: `{"words": [...], "slang": [...], "profanity": [...]}`.
#[derive(Deserialize)]
struct LexiconBundle {
    #[serde(alias = "enable")]
    words: Vec<String>,
    #[serde(default)]
    slang: Vec<String>,
    #[serde(default)]
    profanity: Vec<String>,
}

fn normalize_all<I, S>(words: I) -> FxHashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .collect()
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the primary word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize_all(words),
            ..Self::default()
        }
    }

    /// Build from newline-separated text. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines().filter(|l| !l.trim_start().starts_with('#')))
    }

    /// Build from a bundled JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let bundle: LexiconBundle =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self::from_words(bundle.words)
            .with_slang(bundle.slang)
            .with_profanity(bundle.profanity))
    }

    /// Set the slang list.
    #[must_use]
    pub fn with_slang<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.slang = normalize_all(words);
        self
    }

    /// Set the profanity list.
    #[must_use]
    pub fn with_profanity<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.profanity = normalize_all(words);
        self
    }

    /// Number of words in the primary list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Lexicon {
    fn has_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn is_slang(&self, word: &str) -> bool {
        self.slang.contains(word)
    }

    fn is_profane(&self, word: &str) -> bool {
        self.profanity.contains(word)
    }
}
