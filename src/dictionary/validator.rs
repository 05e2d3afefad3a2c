//! Word validation.
//!
//! Rules are checked in a fixed order and the first failure wins:
//!
//! 1. blank input → `EmptyWord`
//! 2. bot move → accepted, nothing else is checked
//! 3. non-letters → `InvalidCharacters`
//! 4. shorter than [`MIN_WORD_LENGTH`] → `TooShort`
//! 5. length differs from the previous word by more than one → `LengthChangeTooLarge`
//! 6. not in the lexicon (nor in slang, when slang is allowed) → `NotInDictionary`
//!
//! Rules 4 and 5 only apply when `check_length` is set.

use serde::{Deserialize, Serialize};

use crate::core::{ReasonCode, Word};

use super::lexicon::WordSource;

/// Shortest playable word.
pub const MIN_WORD_LENGTH: usize = 3;

/// Context for a validation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationOptions<'a> {
    pub is_bot: bool,
    pub previous_word: Option<&'a Word>,
    pub allow_slang: bool,
    pub check_length: bool,
}

impl Default for ValidationOptions<'_> {
    fn default() -> Self {
        Self {
            is_bot: false,
            previous_word: None,
            allow_slang: false,
            check_length: true,
        }
    }
}

impl<'a> ValidationOptions<'a> {
    /// Human-move rules against `previous`.
    #[must_use]
    pub fn human(previous: &'a Word) -> Self {
        Self {
            previous_word: Some(previous),
            ..Self::default()
        }
    }

    /// Bot-move rules (everything but emptiness bypassed).
    #[must_use]
    pub fn bot() -> Self {
        Self {
            is_bot: true,
            ..Self::default()
        }
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
}

/// Outcome of validating one word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: Option<ReasonCode>,
    pub normalized_word: Word,
    /// Replacement text for display. The core never sets it.
    pub display_override: Option<String>,
    /// Profanity flag for display adapters. Never affects `is_valid`.
    pub is_profane: bool,
}

impl ValidationResult {
    fn accept(word: Word, is_profane: bool) -> Self {
        Self {
            is_valid: true,
            reason: None,
            normalized_word: word,
            display_override: None,
            is_profane,
        }
    }

    fn reject(word: Word, reason: ReasonCode, is_profane: bool) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason),
            normalized_word: word,
            display_override: None,
            is_profane,
        }
    }

    /// User-facing message for a rejection.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.reason.map(ReasonCode::message)
    }
}

/// Validate a word against the lexicon.
///
/// ```
/// use wordmorph::core::{ReasonCode, Word};
/// use wordmorph::dictionary::{validate, Lexicon, ValidationOptions};
///
/// let lexicon = Lexicon::from_words(["cat", "cats"]);
/// let previous = Word::new("cat");
///
/// let ok = validate(&lexicon, "cats", &ValidationOptions::human(&previous));
/// assert!(ok.is_valid);
///
/// let bad = validate(&lexicon, "c@ts", &ValidationOptions::human(&previous));
/// assert_eq!(bad.reason, Some(ReasonCode::InvalidCharacters));
/// ```
pub fn validate<W>(lexicon: &W, word: &str, options: &ValidationOptions<'_>) -> ValidationResult
where
    W: WordSource + ?Sized,
{
    let normalized = Word::new(word);
    let is_profane = !normalized.is_empty() && lexicon.is_profane(normalized.as_str());

    if normalized.is_empty() {
        return ValidationResult::reject(normalized, ReasonCode::EmptyWord, false);
    }

    if options.is_bot {
        return ValidationResult::accept(normalized, is_profane);
    }

    if !normalized.is_alphabetic() {
        return ValidationResult::reject(normalized, ReasonCode::InvalidCharacters, is_profane);
    }

    if options.check_length {
        let len = normalized.len();
        if len < MIN_WORD_LENGTH {
            return ValidationResult::reject(normalized, ReasonCode::TooShort, is_profane);
        }
        if let Some(previous) = options.previous_word {
            if len.abs_diff(previous.len()) > 1 {
                return ValidationResult::reject(
                    normalized,
                    ReasonCode::LengthChangeTooLarge,
                    is_profane,
                );
            }
        }
    }

    let text = normalized.as_str();
    let known = lexicon.has_word(text) || (options.allow_slang && lexicon.is_slang(text));
    if !known {
        return ValidationResult::reject(normalized, ReasonCode::NotInDictionary, is_profane);
    }

    ValidationResult::accept(normalized, is_profane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Lexicon;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "cats", "bat", "at", "scatter"])
            .with_slang(["yeet"])
            .with_profanity(["bat"])
    }

    #[test]
    fn test_empty_word() {
        let lex = lexicon();
        for input in ["", "   ", "\t\n"] {
            let result = validate(&lex, input, &ValidationOptions::default());
            assert_eq!(result.reason, Some(ReasonCode::EmptyWord));
        }
        let bot = validate(&lex, "", &ValidationOptions::bot());
        assert_eq!(bot.reason, Some(ReasonCode::EmptyWord));
    }

    #[test]
    fn test_bot_bypass() {
        let lex = lexicon();
        let result = validate(&lex, "zz9", &ValidationOptions::bot());
        assert!(result.is_valid);
        assert_eq!(result.normalized_word.as_str(), "ZZ9");
    }

    #[test]
    fn test_rule_order() {
        let lex = lexicon();
        let previous = Word::new("cat");

        // Invalid characters beat length.
        let r = validate(&lex, "a1", &ValidationOptions::human(&previous));
        assert_eq!(r.reason, Some(ReasonCode::InvalidCharacters));

        // Too short beats dictionary.
        let r = validate(&lex, "at", &ValidationOptions::human(&previous));
        assert_eq!(r.reason, Some(ReasonCode::TooShort));

        // Length delta beats dictionary.
        let r = validate(&lex, "scatter", &ValidationOptions::human(&previous));
        assert_eq!(r.reason, Some(ReasonCode::LengthChangeTooLarge));

        let r = validate(&lex, "dog", &ValidationOptions::human(&previous));
        assert_eq!(r.reason, Some(ReasonCode::NotInDictionary));
        assert_eq!(r.message(), Some(ReasonCode::NotInDictionary.message()));
    }

    #[test]
    fn test_length_checks_disabled() {
        let lex = lexicon();
        let previous = Word::new("cat");
        let options = ValidationOptions::human(&previous).with_length_checks(false);

        assert!(validate(&lex, "at", &options).is_valid);
        assert!(validate(&lex, "scatter", &options).is_valid);
    }

    #[test]
    fn test_slang() {
        let lex = lexicon();
        let strict = ValidationOptions::default();
        assert_eq!(
            validate(&lex, "yeet", &strict).reason,
            Some(ReasonCode::NotInDictionary)
        );
        assert!(validate(&lex, "yeet", &strict.with_slang(true)).is_valid);
    }

    #[test]
    fn test_profanity_does_not_affect_validity() {
        let lex = lexicon();
        let result = validate(&lex, "bat", &ValidationOptions::default());
        assert!(result.is_valid);
        assert!(result.is_profane);
        assert!(result.display_override.is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let lex = lexicon();
        let previous = Word::new("cat");
        let options = ValidationOptions::human(&previous);
        assert_eq!(validate(&lex, "Cats", &options), validate(&lex, "CATS", &options));
        assert_eq!(validate(&lex, " cats ", &options).normalized_word.as_str(), "CATS");
    }
}
