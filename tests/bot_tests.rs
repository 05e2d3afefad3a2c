//! Bot decision engine tests.
//!
//! All engines use a fixed clock and seeded RNG so decisions are reproducible.

use std::sync::Arc;

use wordmorph::bot::{BotConfig, BotEngine, BotStrategy, KeyLetterPolicy, Personality, ValidationMode};
use wordmorph::core::{GameRng, ManualClock, Word};
use wordmorph::dictionary::{Lexicon, WordSource};

const WORDS: &[&str] = &[
    "cat", "cats", "scat", "cast", "act", "acts", "coat", "coats", "taco", "tacos", "bat", "bats",
    "tab", "tabs", "hat", "hats", "mat", "mats", "rat", "rats", "cut", "cot", "car", "cab",
];

fn lexicon() -> Arc<dyn WordSource> {
    Arc::new(Lexicon::from_words(WORDS.iter().copied()).with_slang(["cay"]))
}

fn engine(personality: Personality) -> BotEngine {
    BotEngine::new(lexicon(), BotConfig::default())
        .with_clock(Arc::new(ManualClock::new(0)))
        .with_strategy(personality)
}

// ============================================================================
// Pipeline guarantees
// ============================================================================

#[test]
fn test_locked_letters_never_dropped() {
    let engine = engine(Personality::hard());
    let request = engine.request().with_locked_letters(['c', 't']);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(5));

    assert!(!decision.candidates.is_empty());
    for candidate in &decision.candidates {
        assert!(candidate.word.contains_letter('C'), "{}", candidate.word);
        assert!(candidate.word.contains_letter('T'), "{}", candidate.word);
    }
}

#[test]
fn test_at_most_max_candidates() {
    let engine = engine(Personality::boss());
    let request = engine.request().with_max_candidates(7);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

    assert!(decision.candidates.len() <= 7);
    assert_eq!(decision.stats.after_truncation, 7);
    assert!(decision.total_candidates_generated > 7);
}

#[test]
fn test_candidates_sorted_by_score_then_confidence() {
    let engine = engine(Personality::medium());
    let request = engine.request().with_key_letters(['S']);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(11));

    for pair in decision.candidates.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.score > b.score || (a.score == b.score && a.confidence >= b.confidence));
    }
    assert_eq!(decision.best.as_ref(), decision.candidates.first());
}

#[test]
fn test_same_seed_same_decision() {
    let engine = engine(Personality::hard());
    let request = engine.request().with_key_letters(['S', 'O']);
    let word = Word::new("coat");

    let a = engine.generate_bot_move(&word, &request, &mut GameRng::new(99));
    let b = engine.generate_bot_move(&word, &request, &mut GameRng::new(99));
    assert_eq!(a, b);
}

#[test]
fn test_fair_bot_only_plays_dictionary_words() {
    let engine = engine(Personality::medium());
    let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

    let lex = Lexicon::from_words(WORDS.iter().copied());
    assert!(decision.candidates.iter().all(|m| lex.has_word(m.word.as_str())));
    assert!(decision.candidates.iter().all(|m| m.word.as_str() != "CAT"));
}

#[test]
fn test_slang_only_for_slang_personalities() {
    let medium = engine(Personality::medium());
    let hard = engine(Personality::hard());
    let word = Word::new("cat");

    let plays_cay = |e: &BotEngine| {
        e.generate_bot_move(&word, &e.request(), &mut GameRng::new(1))
            .candidates
            .iter()
            .any(|m| m.word.as_str() == "CAY")
    };
    assert!(!plays_cay(&medium));
    assert!(plays_cay(&hard));
}

// ============================================================================
// Personalities
// ============================================================================

#[test]
fn test_personality_presets() {
    let trainer = Personality::trainer();
    assert_eq!(trainer.key_letter_policy(), KeyLetterPolicy::Avoid);
    assert!(trainer.accepts_score(1));
    assert!(!trainer.accepts_score(2));

    let easy = Personality::easy();
    assert_eq!(easy.key_letter_policy(), KeyLetterPolicy::Ignore);
    assert!(!easy.accepts_score(3));

    let medium = Personality::default();
    assert_eq!(medium.name(), "Medium");
    assert!(medium.accepts_score(3));
    assert!(!medium.accepts_score(4));

    let hard = Personality::hard();
    assert!(hard.allow_slang());
    assert!(hard.accepts_score(10));

    let boss = Personality::boss();
    assert_eq!(boss.validation_mode(), ValidationMode::Privileged);
    assert!(!boss.accepts_score(1));
}

#[test]
fn test_trainer_plays_one_point_moves() {
    let engine = engine(Personality::trainer());
    let request = engine.request().with_key_letters(['S']);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

    assert!(decision.best.is_some());
    assert!(decision.candidates.iter().all(|m| m.score <= 1));
    assert!(decision.candidates.iter().all(|m| !m.breakdown.uses_key_letter()));
}

#[test]
fn test_easy_ignores_key_letters() {
    let engine = engine(Personality::easy());
    let request = engine.request().with_key_letters(['S']);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

    assert!(decision.candidates.iter().all(|m| m.breakdown.key_letter_bonus == 0));
    assert!(decision.candidates.iter().any(|m| m.word.as_str() == "CATS"));
}

#[test]
fn test_hard_prefers_key_letter_moves() {
    let engine = engine(Personality::hard());
    let request = engine.request().with_key_letters(['H']);
    let decision = engine.generate_bot_move(&Word::new("cat"), &request, &mut GameRng::new(1));

    let best = decision.best.unwrap();
    assert!(best.breakdown.consumed_key_letters.contains(&'H'));
}

#[test]
fn test_boss_plays_unlisted_words() {
    let engine = engine(Personality::boss());
    let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

    let lex = Lexicon::from_words(WORDS.iter().copied());
    assert!(decision.candidates.iter().all(|m| m.score >= 2));
    assert!(decision.candidates.iter().any(|m| !lex.has_word(m.word.as_str())));
}

// ============================================================================
// Budget
// ============================================================================

#[test]
fn test_budget_exceeded_gives_no_move() {
    let engine = BotEngine::new(lexicon(), BotConfig::default().with_time_limit_ms(10))
        .with_clock(Arc::new(ManualClock::stepping(0, 25)));
    let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

    assert!(decision.best.is_none());
    assert!(decision.stats.budget_exceeded);
}

#[test]
fn test_generous_budget_finds_move() {
    let engine = BotEngine::new(lexicon(), BotConfig::default())
        .with_clock(Arc::new(ManualClock::stepping(0, 1)));
    let decision = engine.generate_bot_move(&Word::new("cat"), &engine.request(), &mut GameRng::new(1));

    assert!(decision.best.is_some());
    assert!(!decision.stats.budget_exceeded);
    assert!(decision.processing_time_ms > 0);
}
