//! Letter classification and counting.
//!
//! Only the basic Latin alphabet (`a-z`, `A-Z`) counts as letters. Digits,
//! punctuation and non-ASCII letters are neither vowels nor consonants.

/// Character used to hide a word's letters.
pub const PLACEHOLDER: char = '-';

/// Rule deciding which letters count as vowels.
///
/// Historical variants of the game disagree on `y`. The default treats it as
/// a vowel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VowelRule {
    /// Vowels are `a, e, i, o, u, y`.
    #[default]
    IncludeY,
    /// Vowels are `a, e, i, o, u`; `y` is a consonant.
    ExcludeY,
}

impl VowelRule {
    /// Whether `c` is a vowel under this rule (case-insensitive).
    pub fn is_vowel(self, c: char) -> bool {
        match c.to_ascii_lowercase() {
            'a' | 'e' | 'i' | 'o' | 'u' => true,
            'y' => self == Self::IncludeY,
            _ => false,
        }
    }

    /// Number of vowels in `word`.
    pub fn count_vowels(self, word: &str) -> usize {
        word.chars().filter(|&c| c.is_ascii_alphabetic() && self.is_vowel(c)).count()
    }

    /// Number of basic Latin letters in `word` that are not vowels.
    pub fn count_consonants(self, word: &str) -> usize {
        word.chars().filter(|&c| c.is_ascii_alphabetic() && !self.is_vowel(c)).count()
    }
}

/// Number of vowels in `word` under the default [`VowelRule`].
pub fn count_vowels(word: &str) -> usize {
    VowelRule::default().count_vowels(word)
}

/// Number of consonants in `word` under the default [`VowelRule`].
pub fn count_consonants(word: &str) -> usize {
    VowelRule::default().count_consonants(word)
}

/// Replace every character of `word` with [`PLACEHOLDER`].
///
/// The result has the same number of characters as `word`.
pub fn mask_word(word: &str) -> String {
    word.chars().map(|_| PLACEHOLDER).collect()
}

/// Whether `word` has at least one basic Latin letter.
pub fn contains_latin_letter(word: &str) -> bool {
    word.chars().any(|c| c.is_ascii_alphabetic())
}

/// Parse `text` as a finite number.
///
/// Surrounding whitespace is ignored. `NaN`, infinities and empty input give
/// `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether `text` parses as a finite number.
pub fn is_numeric(text: &str) -> bool {
    parse_number(text).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_is_a_vowel_by_default() {
        assert_eq!(count_vowels("sky"), 1);
        assert_eq!(count_consonants("sky"), 2);
    }

    #[test]
    fn y_is_a_consonant_when_excluded() {
        let rule = VowelRule::ExcludeY;
        assert_eq!(rule.count_vowels("sky"), 0);
        assert_eq!(rule.count_consonants("sky"), 3);
    }

    #[test]
    fn empty_word_has_no_letters() {
        assert_eq!(count_vowels(""), 0);
        assert_eq!(count_consonants(""), 0);
    }

    #[test]
    fn counting_is_case_insensitive() {
        assert_eq!(count_vowels("COAL"), 2);
        assert_eq!(count_consonants("CoAl"), 2);
    }

    #[test]
    fn non_letters_never_count() {
        assert_eq!(count_vowels("a1-e é"), 2);
        assert_eq!(count_consonants("b2 c!ñ"), 2);
    }

    #[test]
    fn mask_keeps_character_length() {
        assert_eq!(mask_word("coal"), "----");
        assert_eq!(mask_word(""), "");
        assert_eq!(mask_word("né").chars().count(), 2);
    }

    #[test]
    fn latin_letter_detection() {
        assert!(contains_latin_letter("abc"));
        assert!(contains_latin_letter("1a2"));
        assert!(!contains_latin_letter("123"));
        assert!(!contains_latin_letter("ёж"));
        assert!(!contains_latin_letter(""));
    }

    #[test]
    fn numeric_parsing() {
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number(" 2.0 "), Some(2.0));
        assert_eq!(parse_number("-1.5"), Some(-1.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert!(is_numeric("4"));
        assert!(!is_numeric("4s"));
    }
}
