//! Observable round state types.
//!
//! This module defines the data structures that represent the engine's view
//! of the game, such as [`RoundState`] and [`Phase`].
//!
//! These structures serve as the "View Model" for the presentation layer:
//! everything a frame needs is readable from here, and every mutation goes
//! through the transition methods below or through [`crate::App`].

use std::fmt;

/// Top-level engine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Splash banner before the first round.
    Banner,
    /// No round running (before the first round or after one ended).
    Idle,
    /// A round is in progress.
    Running,
    /// Idle, editing the speed value.
    ChangingSpeed,
}

impl Phase {
    /// A round is in progress.
    pub fn is_running(self) -> bool {
        self == Self::Running
    }

    /// No round is running and configuration may change.
    pub fn is_over(self) -> bool {
        matches!(self, Self::Idle | Self::ChangingSpeed)
    }
}

/// Which count the player is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// Number of vowels.
    Vowels,
    /// Number of consonants.
    Consonants,
}

impl Subject {
    /// The other subject.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Vowels => Self::Consonants,
            Self::Consonants => Self::Vowels,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vowels => f.write_str("VOWELS"),
            Self::Consonants => f.write_str("CONSONANTS"),
        }
    }
}

/// Validation state of one answer field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// Not answered yet for this word.
    #[default]
    Waiting,
    /// Last submission was wrong.
    Wrong,
    /// Answered correctly.
    Correct,
}

/// Text and validation state of one answer field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerField {
    /// Validation state.
    pub state: FieldState,
    /// Current answer text.
    pub text: String,
}

impl AnswerField {
    fn reset(&mut self) {
        self.state = FieldState::Waiting;
        self.text.clear();
    }
}

/// State of the round in progress (or the last one played).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Words of this round, in order.
    pub words: Vec<String>,
    /// Index of the current word in `words`.
    pub word_index: usize,
    /// Columns the current word has scrolled from the left edge.
    pub scroll_offset: usize,
    /// Subject the player is answering.
    pub subject: Subject,
    /// Vowel answer field.
    pub vowels: AnswerField,
    /// Consonant answer field.
    pub consonants: AnswerField,
    /// Words solved this round.
    pub score: u32,
}

impl RoundState {
    /// Fresh round over `words`.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            word_index: 0,
            scroll_offset: 0,
            subject: Subject::Vowels,
            vowels: AnswerField::default(),
            consonants: AnswerField::default(),
            score: 0,
        }
    }

    /// Word currently on screen. Empty only for a round without words.
    pub fn current_word(&self) -> &str {
        self.words.get(self.word_index).map_or("", String::as_str)
    }

    /// Whether the current word is the last of the round.
    pub fn is_last_word(&self) -> bool {
        self.word_index.saturating_add(1) >= self.words.len()
    }

    /// Answer field for `subject`.
    pub fn field(&self, subject: Subject) -> &AnswerField {
        match subject {
            Subject::Vowels => &self.vowels,
            Subject::Consonants => &self.consonants,
        }
    }

    /// Mutable answer field for `subject`.
    pub fn field_mut(&mut self, subject: Subject) -> &mut AnswerField {
        match subject {
            Subject::Vowels => &mut self.vowels,
            Subject::Consonants => &mut self.consonants,
        }
    }

    /// Both subjects answered correctly; the word awaits its transition.
    pub fn is_solved(&self) -> bool {
        self.vowels.state == FieldState::Correct && self.consonants.state == FieldState::Correct
    }

    /// Whether the word has run past a display `width` columns wide.
    ///
    /// Escapes once `offset + word length + margin` is strictly greater than
    /// the width.
    pub fn escapes(&self, width: u16, margin: usize) -> bool {
        let right_edge = self
            .scroll_offset
            .saturating_add(self.current_word().chars().count())
            .saturating_add(margin);
        right_edge > usize::from(width)
    }

    /// Move to the next word, resetting scroll, fields and subject.
    pub fn advance_word(&mut self) {
        self.word_index = self.word_index.saturating_add(1);
        self.scroll_offset = 0;
        self.subject = Subject::Vowels;
        self.vowels.reset();
        self.consonants.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(words: &[&str]) -> RoundState {
        RoundState::new(words.iter().map(|w| (*w).to_string()).collect())
    }

    #[test]
    fn escape_boundary_is_strict() {
        let mut state = round(&["coal"]);

        // 6 + 4 + 3 == 13: still on screen
        state.scroll_offset = 6;
        assert!(!state.escapes(13, 3));

        state.scroll_offset = 7;
        assert!(state.escapes(13, 3));
    }

    #[test]
    fn advance_resets_word_state() {
        let mut state = round(&["coal", "glove"]);
        state.scroll_offset = 9;
        state.subject = Subject::Consonants;
        state.vowels = AnswerField { state: FieldState::Correct, text: "2".into() };
        state.consonants = AnswerField { state: FieldState::Wrong, text: "9".into() };
        state.score = 1;

        state.advance_word();

        assert_eq!(state.current_word(), "glove");
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.subject, Subject::Vowels);
        assert_eq!(state.vowels, AnswerField::default());
        assert_eq!(state.consonants, AnswerField::default());
        assert_eq!(state.score, 1);
        assert!(state.is_last_word());
    }

    #[test]
    fn other_subject_is_an_involution() {
        assert_eq!(Subject::Vowels.other(), Subject::Consonants);
        assert_eq!(Subject::Vowels.other().other(), Subject::Vowels);
    }

    #[test]
    fn phase_flags() {
        assert!(Phase::Running.is_running());
        assert!(!Phase::Running.is_over());
        assert!(Phase::Idle.is_over());
        assert!(Phase::ChangingSpeed.is_over());
        assert!(!Phase::Banner.is_over());
        assert!(!Phase::Banner.is_running());
    }
}
