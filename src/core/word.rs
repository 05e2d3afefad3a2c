//! Normalized word value.
//!
//! Every word that flows through the engine is trimmed and uppercased once,
//! at construction. Nothing downstream ever sees a lowercase letter, so
//! comparisons are plain string equality.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// An immutable, normalized (trimmed, uppercase) word.
///
/// Construction never fails: legality is decided by the validator, not here.
/// A `Word` may therefore hold characters that are not letters; use
/// [`Word::is_alphabetic`] to check.
///
/// ```
/// use wordmorph::core::Word;
///
/// let word = Word::new("  cat ");
/// assert_eq!(word.as_str(), "CAT");
/// assert_eq!(word.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a word, normalizing it.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().trim().to_uppercase())
    }

    /// Build a word from letters that are already uppercase.
    pub(crate) fn from_letters(letters: &[char]) -> Self {
        Self(letters.iter().collect())
    }

    /// The normalized text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every character is an ASCII letter.
    #[must_use]
    pub fn is_alphabetic(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// The characters of the word, in order.
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.0.chars().collect()
    }

    /// Check whether the word contains a letter (case-insensitive).
    #[must_use]
    pub fn contains_letter(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.0.chars().any(|c| c == letter)
    }

    /// Per-letter frequency map.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for c in self.0.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
