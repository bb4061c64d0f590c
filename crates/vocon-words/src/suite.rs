//! Word suites: the rounds a game draws from.
//!
//! A [`WordsSuite`] always holds at least one round, every round holds at
//! least one word, and every word has at least one basic Latin letter. The
//! only ways to build one are [`WordsSuite::try_from_rounds`],
//! [`sanitize_words_suite`] and [`WordsSuite::default`].

use thiserror::Error;

use crate::contains_latin_letter;

const DEFAULT_ROUNDS: [[&str; 6]; 3] = [
    ["coal", "attention", "deliberation", "evasion", "relation", "vagary"],
    ["drain", "moisture", "surprise", "glove", "fatherhood", "exposition"],
    ["testimony", "attention", "affliction", "absence", "instructor", "statement"],
];

/// Errors building a [`WordsSuite`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuiteError {
    /// Suite is empty, or a round has no usable word.
    #[error("degenerate words suite: {reason}")]
    Degenerate {
        /// What made the suite unusable.
        reason: &'static str,
    },
}

/// Validated, immutable sequence of rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordsSuite {
    rounds: Vec<Vec<String>>,
}

impl WordsSuite {
    /// Build a suite, rejecting anything that breaks the suite invariants.
    pub fn try_from_rounds(rounds: Vec<Vec<String>>) -> Result<Self, SuiteError> {
        if rounds.is_empty() {
            return Err(SuiteError::Degenerate { reason: "no rounds" });
        }
        if rounds.iter().any(Vec::is_empty) {
            return Err(SuiteError::Degenerate { reason: "round without words" });
        }
        if rounds.iter().flatten().any(|word| !contains_latin_letter(word)) {
            return Err(SuiteError::Degenerate { reason: "word without latin letters" });
        }
        Ok(Self { rounds })
    }

    /// Number of rounds. Never zero.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Words of round `index`. `None` if out of range.
    pub fn round(&self, index: usize) -> Option<&[String]> {
        self.rounds.get(index).map(Vec::as_slice)
    }

    /// All rounds in order.
    pub fn rounds(&self) -> &[Vec<String>] {
        &self.rounds
    }
}

impl Default for WordsSuite {
    fn default() -> Self {
        let rounds = DEFAULT_ROUNDS
            .iter()
            .map(|round| round.iter().map(|w| (*w).to_string()).collect())
            .collect();
        Self { rounds }
    }
}

/// Drop unusable words and empty rounds, falling back to the default suite.
///
/// Words without a basic Latin letter are removed, then rounds left without
/// words are removed. If nothing survives, the built-in suite is returned.
pub fn sanitize_words_suite(rounds: Vec<Vec<String>>) -> WordsSuite {
    let rounds: Vec<Vec<String>> = rounds
        .into_iter()
        .map(|round| round.into_iter().filter(|w| contains_latin_letter(w)).collect::<Vec<_>>())
        .filter(|round| !round.is_empty())
        .collect();

    match WordsSuite::try_from_rounds(rounds) {
        Ok(suite) => suite,
        Err(e) => {
            tracing::debug!("falling back to default words suite: {e}");
            WordsSuite::default()
        },
    }
}

/// Parse newline-separated rounds of comma-separated words.
///
/// Words are trimmed and blank entries skipped. Blank lines produce empty
/// rounds, which [`sanitize_words_suite`] later drops.
pub fn parse_words_suite(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rounds(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter().map(|r| r.iter().map(|w| (*w).to_string()).collect()).collect()
    }

    #[test]
    fn default_suite_is_valid() {
        let suite = WordsSuite::default();
        assert_eq!(suite.len(), 3);
        assert_eq!(suite.round(0).and_then(<[String]>::first).map(String::as_str), Some("coal"));
        assert!(WordsSuite::try_from_rounds(suite.rounds().to_vec()).is_ok());
    }

    #[test]
    fn empty_round_falls_back_to_default() {
        assert_eq!(sanitize_words_suite(vec![vec![]]), WordsSuite::default());
        assert_eq!(sanitize_words_suite(vec![]), WordsSuite::default());
    }

    #[test]
    fn non_latin_words_are_dropped() {
        let suite = sanitize_words_suite(rounds(&[&["abc", "123"]]));
        assert_eq!(suite.rounds(), rounds(&[&["abc"]]).as_slice());
    }

    #[test]
    fn rounds_without_survivors_are_dropped() {
        let suite = sanitize_words_suite(rounds(&[&["42", "!!"], &["word"]]));
        assert_eq!(suite.rounds(), rounds(&[&["word"]]).as_slice());
    }

    #[test]
    fn all_numeric_suite_falls_back() {
        assert_eq!(sanitize_words_suite(rounds(&[&["1"], &["2"]])), WordsSuite::default());
    }

    #[test]
    fn try_from_rounds_rejects_degenerate_input() {
        assert!(matches!(
            WordsSuite::try_from_rounds(vec![]),
            Err(SuiteError::Degenerate { reason: "no rounds" })
        ));
        assert!(WordsSuite::try_from_rounds(rounds(&[&["ok"], &[]])).is_err());
        assert!(WordsSuite::try_from_rounds(rounds(&[&["ok", "7"]])).is_err());
    }

    #[test]
    fn parses_lines_and_commas() {
        let parsed = parse_words_suite("coal, glove ,drain\n\nsky,,\n");
        assert_eq!(parsed, rounds(&[&["coal", "glove", "drain"], &[], &["sky"]]));
    }

    #[test]
    fn parsed_text_sanitizes_into_suite() {
        let suite = sanitize_words_suite(parse_words_suite("one,two\n3,4\nthree"));
        assert_eq!(suite.len(), 2);
        assert_eq!(suite.round(1), Some(["three".to_string()].as_slice()));
    }
}
