//! Property-based tests for word analysis.
//!
//! Verifies counting and masking over arbitrary words, and that sanitizing
//! never produces a suite that breaks its invariants.

use proptest::prelude::*;
use vocon_words::{
    PLACEHOLDER, VowelRule, WordsSuite, contains_latin_letter, count_consonants, count_vowels,
    mask_word, sanitize_words_suite,
};

fn rule_strategy() -> impl Strategy<Value = VowelRule> {
    prop_oneof![Just(VowelRule::IncludeY), Just(VowelRule::ExcludeY)]
}

proptest! {
    #[test]
    fn prop_letters_split_into_vowels_and_consonants(word in "[a-zA-Z]{0,32}") {
        prop_assert_eq!(count_vowels(&word) + count_consonants(&word), word.len());
    }

    #[test]
    fn prop_split_holds_for_every_rule(word in "[a-zA-Z]{0,32}", rule in rule_strategy()) {
        prop_assert_eq!(rule.count_vowels(&word) + rule.count_consonants(&word), word.len());
    }

    #[test]
    fn prop_counts_ignore_non_letters(word in "[a-z]{0,16}", noise in "[0-9 ,.!?-]{0,16}") {
        let noisy = format!("{noise}{word}{noise}");
        prop_assert_eq!(count_vowels(&noisy), count_vowels(&word));
        prop_assert_eq!(count_consonants(&noisy), count_consonants(&word));
    }

    #[test]
    fn prop_mask_preserves_length(word in ".{0,32}") {
        let masked = mask_word(&word);
        prop_assert_eq!(masked.chars().count(), word.chars().count());
        prop_assert!(masked.chars().all(|c| c == PLACEHOLDER));
    }

    #[test]
    fn prop_sanitized_suite_holds_invariants(
        rounds in prop::collection::vec(prop::collection::vec("[a-z0-9]{0,6}", 0..5), 0..5)
    ) {
        let suite = sanitize_words_suite(rounds);
        prop_assert!(!suite.is_empty());
        for round in suite.rounds() {
            prop_assert!(!round.is_empty());
            prop_assert!(round.iter().all(|w| contains_latin_letter(w)));
        }
        prop_assert!(WordsSuite::try_from_rounds(suite.rounds().to_vec()).is_ok());
    }
}
