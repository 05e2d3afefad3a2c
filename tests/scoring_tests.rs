//! Scoring and diff tests against worked examples.
//!
//! These cover the interaction between the diff analyzer and the scorer;
//! per-function edge cases live in the module unit tests.

use wordmorph::core::{ActionKind, Word};
use wordmorph::scoring::{analyze, describe_move, retains_locked, score, score_diff};

fn w(text: &str) -> Word {
    Word::new(text)
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_add_letter_with_and_without_key() {
    assert_eq!(score(&w("CAT"), &w("CATS"), &[]).total, 1);
    assert_eq!(score(&w("CAT"), &w("CATS"), &['S']).total, 2);
}

#[test]
fn test_substitution_with_key_letter() {
    let b = score(&w("CAT"), &w("BAT"), &['B']);
    assert_eq!(b.add_points, 1);
    assert_eq!(b.remove_points, 1);
    assert_eq!(b.rearrange_bonus, 0);
    assert_eq!(b.key_letter_bonus, 1);
    assert_eq!(b.total, 3);
    assert_eq!(b.consumed_key_letters.as_slice(), &['B']);
}

#[test]
fn test_rearrange_plus_add_with_key_letter() {
    let b = score(&w("CAT"), &w("TACE"), &['E']);
    assert_eq!(b.add_points, 1);
    assert_eq!(b.rearrange_bonus, 1);
    assert_eq!(b.key_letter_bonus, 1);
    assert_eq!(b.total, 3);
}

#[test]
fn test_repeated_letters_use_counts() {
    let d = analyze(&w("LETTER"), &w("LETTERS"));
    assert_eq!(d.added.as_slice(), &['S']);
    assert!(d.removed.is_empty());
    assert!(!d.rearranged);

    let d = analyze(&w("LETTER"), &w("LETER"));
    assert_eq!(d.removed.as_slice(), &['T']);
}

// ============================================================================
// Key letter rules
// ============================================================================

#[test]
fn test_key_letter_already_present_earns_nothing() {
    // A is in both words; no instance was added.
    let b = score(&w("CAT"), &w("CATS"), &['A']);
    assert_eq!(b.key_letter_bonus, 0);
    assert_eq!(b.total, 1);
}

#[test]
fn test_extra_instance_of_present_key_letter_earns_nothing() {
    let b = score(&w("CAT"), &w("CATA"), &['A']);
    assert_eq!(b.key_letter_bonus, 0);
    assert_eq!(b.total, 1);
    assert!(!b.uses_key_letter());

    let b = score(&w("CAT"), &w("TACT"), &['T']);
    assert_eq!(b.key_letter_bonus, 0);
    assert_eq!(b.total, 2); // add T + rearrange
}

#[test]
fn test_key_letter_new_to_word_earns_bonus() {
    let b = score(&w("CAT"), &w("CHAT"), &['H', 'A']);
    assert_eq!(b.key_letter_bonus, 1);
    assert_eq!(b.consumed_key_letters.as_slice(), &['H']);
}

#[test]
fn test_key_letters_case_insensitive_and_deduped() {
    let b = score(&w("CAT"), &w("CATS"), &['s', 'S']);
    assert_eq!(b.key_letter_bonus, 1);
    assert_eq!(b.consumed_key_letters.as_slice(), &['S']);
}

// ============================================================================
// Rearrangement
// ============================================================================

#[test]
fn test_rearrange_bonus_is_flat() {
    let b = score(&w("STARE"), &w("TEARS"), &[]);
    assert_eq!(b.rearrange_bonus, 1);
    assert_eq!(b.total, 1);

    let b = score(&w("ABCDEF"), &w("FEDCBA"), &[]);
    assert_eq!(b.total, 1);
}

#[test]
fn test_identical_words_score_zero() {
    let d = analyze(&w("CAT"), &w("cat"));
    assert!(d.is_empty());
    assert_eq!(score_diff(&d, &['C']).total, 0);
}

#[test]
fn test_total_is_sum_of_parts() {
    for (from, to) in [("CAT", "CATS"), ("CAT", "TACE"), ("STONE", "NOTES"), ("BAT", "TUB")] {
        let b = score(&w(from), &w(to), &['S', 'E', 'U']);
        assert_eq!(
            b.total,
            b.add_points + b.remove_points + b.rearrange_bonus + b.key_letter_bonus,
            "{from} -> {to}"
        );
    }
}

// ============================================================================
// Move description and locked letters
// ============================================================================

#[test]
fn test_describe_single_substitution() {
    let actions = describe_move(&w("CAT"), &w("BAT"));
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind, ActionKind::Substitute);
    assert_eq!(actions[0].letter, Some('B'));
    assert_eq!(actions[0].position, Some(0));
}

#[test]
fn test_describe_add_and_rearrange() {
    let actions = describe_move(&w("CAT"), &w("TACE"));
    let kinds: Vec<_> = actions.iter().map(|a| a.kind).collect();
    assert!(kinds.contains(&ActionKind::Add));
    assert_eq!(kinds.last(), Some(&ActionKind::Rearrange));
}

#[test]
fn test_retains_locked() {
    assert!(retains_locked(&w("CATS"), &['A', 'T']));
    assert!(!retains_locked(&w("CAS"), &['A', 'T']));
    assert!(retains_locked(&w("CAT"), &[]));
}
