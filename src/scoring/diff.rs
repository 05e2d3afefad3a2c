//! Letter-level diff between two words.
//!
//! Counts are compared per letter (multisets, not sets), so repeated letters
//! behave: `LETTER → LETTERS` adds one `S`, `LETTER → LETTE` removes one `R`.
//!
//! A move is a *rearrangement* when the letters the two words share do not
//! appear in the same relative order. Concretely: the longest common
//! subsequence is shorter than the shared multiset. `CAT → ACT` and
//! `CAT → TACE` are rearrangements; `CAT → CATS` and `CAT → BAT` are not.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{TurnAction, TurnActions, Word};

/// Sorted multiset of letters.
pub type LetterBag = SmallVec<[char; 4]>;

/// Result of [`analyze`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiff {
    /// Letters gained, one entry per instance, sorted.
    pub added: LetterBag,
    /// Letters lost, one entry per instance, sorted.
    pub removed: LetterBag,
    /// Distinct letters absent from the old word and present in the new one, sorted.
    pub introduced: LetterBag,
    /// Shared letters changed relative order.
    pub rearranged: bool,
}

impl WordDiff {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && !self.rearranged
    }

    /// True if `letter` was not in the old word at all and is in the new one.
    #[must_use]
    pub fn introduces(&self, letter: char) -> bool {
        self.introduced.contains(&letter)
    }
}

/// Compare two words letter by letter.
///
/// ```
/// use wordmorph::core::Word;
/// use wordmorph::scoring::analyze;
///
/// let diff = analyze(&Word::new("letter"), &Word::new("letters"));
/// assert_eq!(diff.added.as_slice(), &['S']);
/// assert!(diff.removed.is_empty());
/// assert!(!diff.rearranged);
/// ```
#[must_use]
pub fn analyze(from: &Word, to: &Word) -> WordDiff {
    let from_counts = from.letter_counts();
    let to_counts = to.letter_counts();

    let mut added = LetterBag::new();
    let mut removed = LetterBag::new();
    let mut introduced = LetterBag::new();
    let mut shared = 0usize;

    let letters: FxHashSet<char> = from_counts.keys().chain(to_counts.keys()).copied().collect();
    for letter in letters {
        let before = from_counts.get(&letter).copied().unwrap_or(0);
        let after = to_counts.get(&letter).copied().unwrap_or(0);
        shared += before.min(after);
        if before == 0 && after > 0 {
            introduced.push(letter);
        }
        if after > before {
            added.extend(std::iter::repeat(letter).take(after - before));
        } else if before > after {
            removed.extend(std::iter::repeat(letter).take(before - after));
        }
    }
    added.sort_unstable();
    removed.sort_unstable();
    introduced.sort_unstable();

    let (from_letters, to_letters) = (from.letters(), to.letters());
    let rearranged = shared > 0 && lcs_table(&from_letters, &to_letters)[from_letters.len()][to_letters.len()] < shared;

    WordDiff {
        added,
        removed,
        introduced,
        rearranged,
    }
}

fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp
}

/// Positions in `a` and `b` that take part in one longest common subsequence.
fn lcs_matches(a: &[char], b: &[char]) -> (Vec<bool>, Vec<bool>) {
    let dp = lcs_table(a, b);
    let mut in_a = vec![false; a.len()];
    let mut in_b = vec![false; b.len()];
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        if a[i - 1] == b[j - 1] {
            in_a[i - 1] = true;
            in_b[j - 1] = true;
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    (in_a, in_b)
}

/// Describe a move as letter operations.
///
/// A same-length move differing in exactly one position is a single
/// substitution. Otherwise removals (positions in `from`) come first, then
/// additions (positions in `to`), then one rearrange entry if applicable.
#[must_use]
pub fn describe_move(from: &Word, to: &Word) -> TurnActions {
    let mut actions = TurnActions::new();
    if from == to {
        return actions;
    }

    let (a, b) = (from.letters(), to.letters());

    if a.len() == b.len() {
        let mut differing = a.iter().zip(&b).enumerate().filter(|(_, (x, y))| x != y);
        if let (Some((pos, (_, &letter))), None) = (differing.next(), differing.next()) {
            actions.push(TurnAction::substitute(letter, pos));
            return actions;
        }
    }

    let diff = analyze(from, to);
    let (kept_a, kept_b) = lcs_matches(&a, &b);

    let mut to_remove = diff.removed.clone();
    for (pos, &letter) in a.iter().enumerate() {
        if kept_a[pos] {
            continue;
        }
        if let Some(idx) = to_remove.iter().position(|&c| c == letter) {
            to_remove.remove(idx);
            actions.push(TurnAction::remove(letter, pos));
        }
    }

    let mut to_add = diff.added.clone();
    for (pos, &letter) in b.iter().enumerate() {
        if kept_b[pos] {
            continue;
        }
        if let Some(idx) = to_add.iter().position(|&c| c == letter) {
            to_add.remove(idx);
            actions.push(TurnAction::add(letter, pos));
        }
    }

    if diff.rearranged {
        actions.push(TurnAction::rearrange());
    }
    actions
}

/// True if `word` still contains every letter in `locked`.
pub fn retains_locked<'a>(word: &Word, locked: impl IntoIterator<Item = &'a char>) -> bool {
    locked.into_iter().all(|&c| word.contains_letter(c))
}
