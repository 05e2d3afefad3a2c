//! Greedy one-ply bot.
//!
//! Pipeline for one decision:
//!
//! 1. generate every candidate from the current word
//! 2. drop candidates missing a locked letter
//! 3. keep valid words (fair or privileged rules), minus repeats
//! 4. truncate to `max_candidates`
//! 5. score the survivors and apply the personality's filters
//! 6. attach a confidence heuristic
//! 7. sort by score, then confidence (stable, so ties keep generation order)
//! 8. pick the first
//!
//! The time budget is soft: it is checked between phases, never inside one,
//! so a long word can overrun it. If it has run out before scoring, there is
//! no move. Generation failures also produce no move; they are logged and
//! never returned to the caller.

use std::cmp::Ordering;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ActionKind, Clock, GameRng, SystemClock, Word};
use crate::dictionary::{validate, ValidationOptions, WordSource};
use crate::moves::{MoveCandidate, MoveGenError, MoveGenerator};
use crate::scoring::{retains_locked, score, ScoringBreakdown};

use super::config::BotConfig;
use super::stats::DecisionStats;
use super::strategy::{BotStrategy, KeyLetterPolicy, Personality, ValidationMode};

/// Inputs for one decision besides the current word.
///
/// Built from a [`BotConfig`] so the limits are never left at zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotRequest {
    pub key_letters: Vec<char>,
    pub locked_letters: Vec<char>,
    /// Words the bot must not play (already used this game).
    pub excluded_words: FxHashSet<Word>,
    pub max_candidates: usize,
    pub time_limit_ms: u64,
}

impl BotRequest {
    /// A request with the limits from `config` and no letters.
    #[must_use]
    pub fn new(config: &BotConfig) -> Self {
        Self {
            key_letters: Vec::new(),
            locked_letters: Vec::new(),
            excluded_words: FxHashSet::default(),
            max_candidates: config.max_candidates,
            time_limit_ms: config.time_limit_ms,
        }
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
    pub fn with_excluded_words(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.excluded_words = words.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    #[must_use]
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

/// A scored, explained candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotMove {
    pub word: Word,
    pub kind: ActionKind,
    pub score: u32,
    /// Heuristic in `[0, 1]`.
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub breakdown: ScoringBreakdown,
}

/// Result of [`BotEngine::generate_bot_move`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BotDecision {
    /// The chosen move, if any.
    pub best: Option<BotMove>,
    /// Ranked candidates, best first. Never more than `max_candidates`.
    pub candidates: Vec<BotMove>,
    pub processing_time_ms: u64,
    pub total_candidates_generated: usize,
    pub stats: DecisionStats,
}

/// Confidence heuristic.
///
/// 0.5 base, plus 0.1 per point up to 0.3, plus 0.2 for using a key letter,
/// plus 0.1 when the resulting word has 4 to 6 letters; clamped to `[0, 1]`.
#[must_use]
pub fn confidence(breakdown: &ScoringBreakdown, word_len: usize) -> f64 {
    let mut value = 0.5 + (0.1 * f64::from(breakdown.total)).min(0.3);
    if breakdown.uses_key_letter() {
        value += 0.2;
    }
    if (4..=6).contains(&word_len) {
        value += 0.1;
    }
    value.clamp(0.0, 1.0)
}

/// Bot decision engine.
///
/// Owns a shared lexicon, the move generator, a personality, and a clock.
/// Holds no per-game state: the same engine can serve many sessions.
pub struct BotEngine {
    lexicon: Arc<dyn WordSource>,
    generator: MoveGenerator,
    config: BotConfig,
    strategy: Box<dyn BotStrategy>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for BotEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotEngine")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish_non_exhaustive()
    }
}

impl BotEngine {
    /// Create an engine with the default (medium) personality and system clock.
    pub fn new(lexicon: Arc<dyn WordSource>, config: BotConfig) -> Self {
        Self {
            lexicon,
            generator: MoveGenerator::new(config.move_gen.clone()),
            config,
            strategy: Box::new(Personality::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Set the personality.
    #[must_use]
    pub fn with_strategy<S: BotStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Set the clock used for the time budget.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    #[must_use]
    pub fn strategy(&self) -> &dyn BotStrategy {
        self.strategy.as_ref()
    }

    /// A request pre-filled with this engine's limits.
    #[must_use]
    pub fn request(&self) -> BotRequest {
        BotRequest::new(&self.config)
    }

    /// Choose a move from `current`. Never fails; "no move" is `best: None`.
    pub fn generate_bot_move(
        &self,
        current: &Word,
        request: &BotRequest,
        rng: &mut GameRng,
    ) -> BotDecision {
        let start = self.clock.now_ms();

        match self.decide(current, request, rng, start) {
            Ok(decision) => decision,
            Err(err) => {
                warn!(word = %current, error = %err, bot = self.strategy.name(), "bot decision failed");
                BotDecision {
                    processing_time_ms: self.elapsed(start),
                    ..BotDecision::default()
                }
            }
        }
    }

    fn decide(
        &self,
        current: &Word,
        request: &BotRequest,
        rng: &mut GameRng,
        start: u64,
    ) -> Result<BotDecision, MoveGenError> {
        let mut stats = DecisionStats::default();

        // === GENERATE ===
        let moves = self.generator.generate(current, rng)?;
        stats.generated = moves.total();
        if self.over_budget(start, request) {
            return Ok(self.out_of_time(stats, start));
        }

        // === LOCKED LETTERS ===
        let retained: Vec<MoveCandidate> = moves
            .into_all()
            .filter(|c| retains_locked(&c.word, &request.locked_letters))
            .collect();
        stats.after_lock_filter = retained.len();
        if self.over_budget(start, request) {
            return Ok(self.out_of_time(stats, start));
        }

        // === VALIDATE ===
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut valid: Vec<MoveCandidate> = retained
            .into_iter()
            .filter(|c| {
                c.word != *current
                    && !request.excluded_words.contains(&c.word)
                    && self.is_valid(current, &c.word)
                    && seen.insert(c.word.clone())
            })
            .collect();
        stats.after_validation = valid.len();

        // === TRUNCATE ===
        valid.truncate(request.max_candidates);
        stats.after_truncation = valid.len();
        if self.over_budget(start, request) {
            return Ok(self.out_of_time(stats, start));
        }

        // === SCORE & FILTER ===
        let policy = self.strategy.key_letter_policy();
        let scoring_keys: &[char] = match policy {
            KeyLetterPolicy::Ignore => &[],
            _ => &request.key_letters,
        };
        let mut ranked: Vec<BotMove> = valid
            .into_iter()
            .map(|c| evaluate(current, c, scoring_keys))
            .filter(|m| self.strategy.accepts_score(m.score))
            .filter(|m| policy != KeyLetterPolicy::Avoid || !m.breakdown.uses_key_letter())
            .collect();
        stats.ranked = ranked.len();

        // === RANK ===
        let prioritize = policy == KeyLetterPolicy::Prioritize;
        ranked.sort_by(|a, b| {
            let key_a = prioritize && a.breakdown.uses_key_letter();
            let key_b = prioritize && b.breakdown.uses_key_letter();
            key_b
                .cmp(&key_a)
                .then_with(|| b.score.cmp(&a.score))
                .then_with(|| b.confidence.partial_cmp(&a.confidence).unwrap_or(Ordering::Equal))
        });

        let best = ranked.first().cloned();
        let processing_time_ms = self.elapsed(start);
        debug!(
            word = %current,
            bot = self.strategy.name(),
            chosen = best.as_ref().map(|m| m.word.as_str()),
            score = best.as_ref().map(|m| m.score),
            candidates = ranked.len(),
            elapsed_ms = processing_time_ms,
            "bot decision"
        );

        Ok(BotDecision {
            best,
            candidates: ranked,
            processing_time_ms,
            total_candidates_generated: stats.generated,
            stats,
        })
    }

    fn is_valid(&self, current: &Word, candidate: &Word) -> bool {
        let options = match self.strategy.validation_mode() {
            ValidationMode::Fair => {
                ValidationOptions::human(current).with_slang(self.strategy.allow_slang())
            }
            ValidationMode::Privileged => ValidationOptions::bot(),
        };
        validate(self.lexicon.as_ref(), candidate.as_str(), &options).is_valid
    }

    fn elapsed(&self, start: u64) -> u64 {
        self.clock.now_ms().saturating_sub(start)
    }

    fn over_budget(&self, start: u64, request: &BotRequest) -> bool {
        self.elapsed(start) > request.time_limit_ms
    }

    fn out_of_time(&self, mut stats: DecisionStats, start: u64) -> BotDecision {
        stats.budget_exceeded = true;
        let processing_time_ms = self.elapsed(start);
        debug!(
            bot = self.strategy.name(),
            elapsed_ms = processing_time_ms,
            "bot time budget exceeded before scoring"
        );
        BotDecision {
            best: None,
            candidates: Vec::new(),
            processing_time_ms,
            total_candidates_generated: stats.generated,
            stats,
        }
    }
}

fn evaluate(current: &Word, candidate: MoveCandidate, key_letters: &[char]) -> BotMove {
    let breakdown = score(current, &candidate.word, key_letters);
    let confidence = confidence(&breakdown, candidate.word.len());

    let mut reasoning = candidate.trace;
    reasoning.push(format!(
        "{} points: {} added, {} removed, {} rearrange, {} key letter",
        breakdown.total,
        breakdown.add_points,
        breakdown.remove_points,
        breakdown.rearrange_bonus,
        breakdown.key_letter_bonus,
    ));
    if breakdown.uses_key_letter() {
        let letters: String = breakdown.consumed_key_letters.iter().collect();
        reasoning.push(format!("uses key letter {letters}"));
    }

    BotMove {
        word: candidate.word,
        kind: candidate.kind,
        score: breakdown.total,
        confidence,
        reasoning,
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use crate::dictionary::Lexicon;

    fn lexicon() -> Arc<dyn WordSource> {
        Arc::new(Lexicon::from_words([
            "cat", "cats", "bat", "act", "scat", "coat", "cast", "at", "cut",
        ]))
    }

    fn engine() -> BotEngine {
        BotEngine::new(lexicon(), BotConfig::default())
            .with_clock(Arc::new(ManualClock::new(0)))
            .with_strategy(Personality::hard())
    }

    #[test]
    fn test_confidence() {
        let mut b = ScoringBreakdown {
            total: 1,
            ..ScoringBreakdown::default()
        };
        assert!((confidence(&b, 3) - 0.6).abs() < 1e-9);
        assert!((confidence(&b, 4) - 0.7).abs() < 1e-9);

        b.total = 10;
        assert!((confidence(&b, 3) - 0.8).abs() < 1e-9);

        b.key_letter_bonus = 1;
        b.consumed_key_letters.push('S');
        assert!((confidence(&b, 5) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_request_uses_config_limits() {
        let request = BotRequest::new(&BotConfig::default());
        assert_eq!(request.max_candidates, 200);
        assert_eq!(request.time_limit_ms, 2_000);
        assert!(request.key_letters.is_empty());
        assert!(request.excluded_words.is_empty());

        let config = BotConfig::default().with_max_candidates(5).with_time_limit_ms(10);
        let request = BotEngine::new(lexicon(), config).request();
        assert_eq!((request.max_candidates, request.time_limit_ms), (5, 10));
    }

    #[test]
    fn test_picks_highest_score() {
        let engine = engine();
        let current = Word::new("cat");
        let decision = engine.generate_bot_move(&current, &engine.request(), &mut GameRng::new(1));

        let best = decision.best.unwrap();
        // SCAT/CATS/COAT/CAST... all 1 point except rearrange+add words.
        assert!(decision.candidates.iter().all(|m| m.score <= best.score));
        assert!(!best.reasoning.is_empty());
        assert!(decision.total_candidates_generated > 0);
    }

    #[test]
    fn test_prioritizes_key_letter() {
        let engine = engine();
        let request = engine.request().with_key_letters(['s']);
        let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

        let best = decision.best.unwrap();
        assert!(best.breakdown.uses_key_letter());
        assert!(best.word.contains_letter('S'));
    }

    #[test]
    fn test_avoid_policy_skips_key_letters() {
        let engine = engine().with_strategy(Personality::trainer());
        let request = engine.request().with_key_letters(['S']);
        let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

        assert!(decision.candidates.iter().all(|m| !m.breakdown.uses_key_letter()));
        assert!(decision.candidates.iter().all(|m| m.score <= 1));
    }

    #[test]
    fn test_excluded_words_not_played() {
        let engine = engine();
        let request = engine
            .request()
            .with_excluded_words([Word::new("cats"), Word::new("scat")]);
        let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

        assert!(decision
            .candidates
            .iter()
            .all(|m| m.word.as_str() != "CATS" && m.word.as_str() != "SCAT"));
    }

    #[test]
    fn test_no_duplicate_candidates() {
        let engine = engine();
        let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(3));
        let unique: FxHashSet<_> = decision.candidates.iter().map(|m| m.word.clone()).collect();
        assert_eq!(unique.len(), decision.candidates.len());
    }

    #[test]
    fn test_budget_exceeded_returns_no_move() {
        let engine = engine().with_clock(Arc::new(ManualClock::stepping(0, 100)));
        let request = engine.request().with_time_limit_ms(50);
        let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

        assert!(decision.best.is_none());
        assert!(decision.candidates.is_empty());
        assert!(decision.stats.budget_exceeded);
        assert!(decision.total_candidates_generated > 0);
    }

    #[test]
    fn test_generation_error_becomes_no_move() {
        let config = BotConfig::default()
            .with_move_gen(crate::moves::MoveGenConfig::default().with_max_word_length(2));
        let engine = BotEngine::new(lexicon(), config).with_clock(Arc::new(ManualClock::new(0)));
        let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

        assert!(decision.best.is_none());
        assert_eq!(decision.total_candidates_generated, 0);
    }

    #[test]
    fn test_privileged_mode_skips_dictionary() {
        let engine = engine().with_strategy(Personality::boss());
        let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

        let best = decision.best.unwrap();
        assert!(best.score >= 2);
    }
}
