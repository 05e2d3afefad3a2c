//! Dictionary and validation service.
//!
//! - [`WordSource`]: read-only lexicon queries, injected by the caller
//! - [`Lexicon`]: the in-memory `WordSource`
//! - [`validate`]: the ordered rule check producing a [`ValidationResult`]

mod lexicon;
mod validator;

pub use lexicon::{Lexicon, WordSource};
pub use validator::{validate, ValidationOptions, ValidationResult, MIN_WORD_LENGTH};
