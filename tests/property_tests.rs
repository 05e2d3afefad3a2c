//! Property-based tests for validation, scoring, and generation.

use proptest::prelude::*;
use wordmorph::core::{GameRng, ReasonCode, Word};
use wordmorph::dictionary::{validate, Lexicon, ValidationOptions};
use wordmorph::moves::{MoveGenConfig, MoveGenerator, ALPHABET};
use wordmorph::scoring::{analyze, score};

fn word_strategy(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), min..=max)
        .prop_map(|letters| letters.into_iter().collect())
}

/// Flip the case of every other character.
fn mixed_case(text: &str) -> String {
    text.chars()
        .enumerate()
        .map(|(i, c)| if i % 2 == 0 { c.to_ascii_lowercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_validation_is_case_insensitive(word in word_strategy(1, 8), prev in word_strategy(3, 8)) {
        let lexicon = Lexicon::from_words([word.as_str()]);
        let previous = Word::new(&prev);
        let options = ValidationOptions::human(&previous);

        let upper = validate(&lexicon, &word, &options);
        let mixed = validate(&lexicon, &mixed_case(&word), &options);
        prop_assert_eq!(upper.is_valid, mixed.is_valid);
        prop_assert_eq!(upper.reason, mixed.reason);
        prop_assert_eq!(upper.normalized_word, mixed.normalized_word);
    }

    #[test]
    fn prop_length_delta_rule(word in word_strategy(3, 10), prev in word_strategy(3, 10)) {
        let lexicon = Lexicon::from_words([word.as_str()]);
        let previous = Word::new(&prev);
        let result = validate(&lexicon, &word, &ValidationOptions::human(&previous));

        let too_large = word.len().abs_diff(prev.len()) > 1;
        prop_assert_eq!(result.reason == Some(ReasonCode::LengthChangeTooLarge), too_large);
        prop_assert_eq!(result.is_valid, !too_large);
    }

    #[test]
    fn prop_bots_bypass_everything_but_emptiness(word in "[a-z0-9 ]{1,12}") {
        let lexicon = Lexicon::new();
        let result = validate(&lexicon, &word, &ValidationOptions::bot());
        prop_assert_eq!(result.is_valid, !word.trim().is_empty());
    }

    #[test]
    fn prop_score_total_is_sum(from in word_strategy(1, 8), to in word_strategy(1, 8), keys in word_strategy(0, 3)) {
        let keys: Vec<char> = keys.chars().collect();
        let b = score(&Word::new(&from), &Word::new(&to), &keys);
        prop_assert_eq!(b.total, b.add_points + b.remove_points + b.rearrange_bonus + b.key_letter_bonus);
        prop_assert!(b.rearrange_bonus <= 1);
        prop_assert!(b.key_letter_bonus as usize <= keys.len());
    }

    #[test]
    fn prop_diff_balances_letter_counts(from in word_strategy(1, 8), to in word_strategy(1, 8)) {
        let d = analyze(&Word::new(&from), &Word::new(&to));
        prop_assert_eq!(from.len() + d.added.len(), to.len() + d.removed.len());
    }

    #[test]
    fn prop_generator_group_sizes(word in word_strategy(1, 10), seed in any::<u64>()) {
        let generator = MoveGenerator::new(MoveGenConfig::default().with_sample_size(20));
        let w = Word::new(&word);
        let moves = generator.generate(&w, &mut GameRng::new(seed)).unwrap();

        prop_assert_eq!(moves.add.len(), 26 * (word.len() + 1));
        prop_assert_eq!(moves.remove.len(), word.len());
        prop_assert_eq!(moves.substitute.len(), 25 * word.len());
        prop_assert!(moves.rearrange.len() <= 20);
        prop_assert!(moves.rearrange.iter().all(|c| c.word != w));
    }
}
