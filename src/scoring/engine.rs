//! Point scoring for a single move.
//!
//! | component          | points                                         |
//! |--------------------|------------------------------------------------|
//! | add                | 1 per letter instance gained                   |
//! | remove             | 1 per letter instance lost                     |
//! | rearrange          | 1 flat, however many positions moved           |
//! | key letter         | 1 per active key letter the move introduces    |
//!
//! A key letter already in the word earns nothing, even if the move adds
//! another instance of it. Locked letters are not scored; moves dropping
//! them are filtered out before they get here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Word;

use super::diff::{analyze, WordDiff};

/// Points awarded for one move. `total` is always the sum of the parts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub add_points: u32,
    pub remove_points: u32,
    pub rearrange_bonus: u32,
    pub key_letter_bonus: u32,
    pub total: u32,
    /// Key letters this move used up, sorted.
    pub consumed_key_letters: SmallVec<[char; 2]>,
}

impl ScoringBreakdown {
    /// True if any key letter bonus was earned.
    #[must_use]
    pub fn uses_key_letter(&self) -> bool {
        self.key_letter_bonus > 0
    }
}

/// Score the move `from → to` against the active key letters.
///
/// Locked letters are not an input: callers reject moves that drop one
/// (see [`retains_locked`](super::retains_locked)) before scoring.
///
/// ```
/// use wordmorph::core::Word;
/// use wordmorph::scoring::score;
///
/// let plain = score(&Word::new("cat"), &Word::new("cats"), &[]);
/// assert_eq!(plain.total, 1);
///
/// let keyed = score(&Word::new("cat"), &Word::new("cats"), &['S']);
/// assert_eq!(keyed.total, 2);
/// ```
pub fn score<'a>(
    from: &Word,
    to: &Word,
    key_letters: impl IntoIterator<Item = &'a char>,
) -> ScoringBreakdown {
    score_diff(&analyze(from, to), key_letters)
}

/// Score an already-computed diff.
pub fn score_diff<'a>(
    diff: &WordDiff,
    key_letters: impl IntoIterator<Item = &'a char>,
) -> ScoringBreakdown {
    let add_points = diff.added.len() as u32;
    let remove_points = diff.removed.len() as u32;
    let rearrange_bonus = u32::from(diff.rearranged);

    let mut consumed: SmallVec<[char; 2]> = key_letters
        .into_iter()
        .map(char::to_ascii_uppercase)
        .filter(|&k| diff.introduces(k))
        .collect();
    consumed.sort_unstable();
    consumed.dedup();

    let key_letter_bonus = consumed.len() as u32;

    ScoringBreakdown {
        add_points,
        remove_points,
        rearrange_bonus,
        key_letter_bonus,
        total: add_points + remove_points + rearrange_bonus + key_letter_bonus,
        consumed_key_letters: consumed,
    }
}
