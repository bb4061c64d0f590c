//! Word analysis for the vowels-consonants game.
//!
//! Pure, stateless helpers shared by the round engine and the word-list
//! loader. Nothing in this crate fails: malformed input yields `0`, `false`
//! or the default suite.
//!
//! # Components
//!
//! - [`VowelRule`]: which letters count as vowels, with counting and masking
//! - [`WordsSuite`]: validated rounds of words, plus parsing and sanitizing

#![forbid(unsafe_code)]

mod analyzer;
mod suite;

pub use analyzer::{
    PLACEHOLDER, VowelRule, contains_latin_letter, count_consonants, count_vowels, is_numeric,
    mask_word, parse_number,
};
pub use suite::{SuiteError, WordsSuite, parse_words_suite, sanitize_words_suite};
