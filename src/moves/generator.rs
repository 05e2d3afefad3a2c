//! Candidate move enumeration.
//!
//! For a word of length `n`:
//!
//! - add: every letter at every insertion point, `26 * (n + 1)` candidates
//! - remove: every position, `n` candidates
//! - substitute: every position with each of the 25 other letters, `25 * n`
//! - rearrange: a bounded sample, see below
//!
//! Add/remove/substitute are exhaustive and may contain the same word more
//! than once (inserting `A` before or after an existing `A`). Rearrangement
//! cannot be exhaustive (`n!` permutations), so it is a deduplicated sample
//! of at most `rearrange_sample_size` words built from adjacent swaps, then
//! alternating random pair swaps and full shuffles. It never contains the
//! original word. Reachability of any particular anagram is probabilistic.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::{ActionKind, GameRng, Word};

/// The 26-letter alphabet used for insertion and substitution.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Generator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveGenConfig {
    /// Cap on sampled rearrangements.
    pub rearrange_sample_size: usize,

    /// Random swap/shuffle attempts per sample slot before giving up.
    /// Short words have few distinct anagrams; this bounds the search.
    pub rearrange_attempt_factor: usize,

    /// Longest word the generator will enumerate.
    pub max_word_length: usize,
}

impl Default for MoveGenConfig {
    fn default() -> Self {
        Self {
            rearrange_sample_size: 50,
            rearrange_attempt_factor: 4,
            max_word_length: 32,
        }
    }
}

impl MoveGenConfig {
    #[must_use]
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.rearrange_sample_size = size;
        self
    }

    #[must_use]
    pub fn with_max_word_length(mut self, len: usize) -> Self {
        self.max_word_length = len;
        self
    }
}

/// Generation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveGenError {
    #[error("word has {len} letters, generator limit is {max}")]
    WordTooLong { len: usize, max: usize },
}

/// A proposed next word. Not yet validated or scored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub word: Word,
    pub kind: ActionKind,
    /// Human-readable steps that produced the word.
    pub trace: Vec<String>,
}

impl MoveCandidate {
    fn new(letters: &[char], kind: ActionKind, step: String) -> Self {
        Self {
            word: Word::from_letters(letters),
            kind,
            trace: vec![step],
        }
    }
}

/// Candidates grouped by operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMoves {
    pub add: Vec<MoveCandidate>,
    pub remove: Vec<MoveCandidate>,
    pub substitute: Vec<MoveCandidate>,
    pub rearrange: Vec<MoveCandidate>,
}

impl GeneratedMoves {
    /// Total number of candidates across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.add.len() + self.remove.len() + self.substitute.len() + self.rearrange.len()
    }

    /// All candidates, in add, remove, substitute, rearrange order.
    pub fn into_all(self) -> impl Iterator<Item = MoveCandidate> {
        self.add
            .into_iter()
            .chain(self.remove)
            .chain(self.substitute)
            .chain(self.rearrange)
    }
}

/// Enumerates candidate moves from a word.
#[derive(Clone, Debug, Default)]
pub struct MoveGenerator {
    config: MoveGenConfig,
}

impl MoveGenerator {
    #[must_use]
    pub fn new(config: MoveGenConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MoveGenConfig {
        &self.config
    }

    /// Generate every candidate group for `current`.
    pub fn generate(&self, current: &Word, rng: &mut GameRng) -> Result<GeneratedMoves, MoveGenError> {
        let letters = self.checked_letters(current)?;

        let moves = GeneratedMoves {
            add: add_moves(&letters),
            remove: remove_moves(&letters),
            substitute: substitute_moves(&letters),
            rearrange: self.sample_rearrangements(&letters, rng),
        };
        debug!(
            word = %current,
            add = moves.add.len(),
            remove = moves.remove.len(),
            substitute = moves.substitute.len(),
            rearrange = moves.rearrange.len(),
            "generated candidates"
        );
        Ok(moves)
    }

    /// Only the deterministic groups (no rearrangement sampling).
    pub fn generate_edits(&self, current: &Word) -> Result<GeneratedMoves, MoveGenError> {
        let letters = self.checked_letters(current)?;
        Ok(GeneratedMoves {
            add: add_moves(&letters),
            remove: remove_moves(&letters),
            substitute: substitute_moves(&letters),
            rearrange: Vec::new(),
        })
    }

    fn checked_letters(&self, current: &Word) -> Result<Vec<char>, MoveGenError> {
        let letters = current.letters();
        if letters.len() > self.config.max_word_length {
            return Err(MoveGenError::WordTooLong {
                len: letters.len(),
                max: self.config.max_word_length,
            });
        }
        Ok(letters)
    }

    /// Bounded, deduplicated sample of anagrams of `letters`.
    pub fn sample_rearrangements(&self, letters: &[char], rng: &mut GameRng) -> Vec<MoveCandidate> {
        let cap = self.config.rearrange_sample_size;
        let mut out = Vec::new();
        if letters.len() < 2 || cap == 0 {
            return out;
        }

        let mut seen: FxHashSet<Vec<char>> = FxHashSet::default();
        seen.insert(letters.to_vec());

        let mut push = |candidate: Vec<char>, step: String, out: &mut Vec<MoveCandidate>| {
            if seen.insert(candidate.clone()) {
                out.push(MoveCandidate::new(&candidate, ActionKind::Rearrange, step));
            }
        };

        for i in 0..letters.len() - 1 {
            if out.len() >= cap {
                return out;
            }
            let mut swapped = letters.to_vec();
            swapped.swap(i, i + 1);
            let step = format!("swap {}@{} with {}@{}", letters[i], i, letters[i + 1], i + 1);
            push(swapped, step, &mut out);
        }

        let attempts = cap.saturating_mul(self.config.rearrange_attempt_factor);
        for attempt in 0..attempts {
            if out.len() >= cap {
                break;
            }
            let mut candidate = letters.to_vec();
            let step = if attempt % 2 == 0 {
                let i = rng.gen_range_usize(0..letters.len());
                let mut j = rng.gen_range_usize(0..letters.len() - 1);
                if j >= i {
                    j += 1;
                }
                candidate.swap(i, j);
                format!("swap {}@{} with {}@{}", letters[i], i, letters[j], j)
            } else {
                rng.shuffle(&mut candidate);
                "shuffle all letters".to_string()
            };
            push(candidate, step, &mut out);
        }
        out
    }
}

fn add_moves(letters: &[char]) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(ALPHABET.len() * (letters.len() + 1));
    for pos in 0..=letters.len() {
        for &letter in &ALPHABET {
            let mut next = Vec::with_capacity(letters.len() + 1);
            next.extend_from_slice(&letters[..pos]);
            next.push(letter);
            next.extend_from_slice(&letters[pos..]);
            out.push(MoveCandidate::new(&next, ActionKind::Add, format!("insert {letter} at {pos}")));
        }
    }
    out
}

fn remove_moves(letters: &[char]) -> Vec<MoveCandidate> {
    (0..letters.len())
        .map(|pos| {
            let mut next = letters.to_vec();
            let removed = next.remove(pos);
            MoveCandidate::new(&next, ActionKind::Remove, format!("remove {removed} at {pos}"))
        })
        .collect()
}

fn substitute_moves(letters: &[char]) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(letters.len() * (ALPHABET.len() - 1));
    for (pos, &old) in letters.iter().enumerate() {
        for &letter in ALPHABET.iter().filter(|&&c| c != old) {
            let mut next = letters.to_vec();
            next[pos] = letter;
            out.push(MoveCandidate::new(
                &next,
                ActionKind::Substitute,
                format!("replace {old} with {letter} at {pos}"),
            ));
        }
    }
    out
}
