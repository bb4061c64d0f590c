//! Round engine state machine.
//!
//! This module defines the [`App`] state machine, which manages the game
//! completely decoupled from the terminal and from real time.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! Timing is requested through actions (`StartTicker`, `Schedule`) and comes
//! back as events (`Tick`, `Timer`).
//!
//! # Responsibilities
//!
//! - Draws rounds from the words suite without repeats inside a cycle.
//! - Scrolls the current word and lets it escape past the display width.
//! - Validates vowel and consonant answers and keeps the score.
//! - Owns the configuration mutators used between rounds.
//!
//! # Generations
//!
//! Every round start and every word advance bumps a generation counter. A
//! solved word schedules [`Timer::CompleteWord`] tagged with the generation
//! that was current when it was solved; if the generation has moved on by the
//! time the timer fires, the timer is ignored.

use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use vocon_words::{WordsSuite, is_numeric, mask_word, parse_number};

use crate::{
    AppAction, AppError, AppEvent, FieldState, GameConfig, KeyInput, Phase, RoundPool, RoundState,
    Speed, Subject, Timer,
};

/// Columns kept free to the right of the word before it escapes.
pub const ESCAPE_MARGIN: usize = 3;

/// How long the splash banner stays up.
pub const BANNER_DURATION: Duration = Duration::from_millis(1900);

/// Pause after a solved word so the success indicator is visible.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(300);

const SPEED_ERROR_MESSAGE: &str = "Wrong speed value";

/// Round engine state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Current phase.
    phase: Phase,
    /// Game settings.
    config: GameConfig,
    /// Rounds to draw from.
    suite: WordsSuite,
    /// Round indices not yet played in this cycle.
    pool: RoundPool,
    /// Randomness for round selection.
    rng: StdRng,
    /// Round in progress, or the last one played.
    round: RoundState,
    /// Identity of the current word within the current round.
    generation: u64,
    /// Rounds started so far.
    rounds_played: u32,
    /// Speed text being edited.
    speed_input: String,
    /// Error shown to the player. `None` if no error.
    error_message: Option<String>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create an App with OS-seeded round selection.
    pub fn new(config: GameConfig, suite: WordsSuite) -> Self {
        Self::with_rng(config, suite, StdRng::from_os_rng())
    }

    /// Create an App with deterministic round selection.
    pub fn with_seed(config: GameConfig, suite: WordsSuite, seed: u64) -> Self {
        Self::with_rng(config, suite, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, suite: WordsSuite, rng: StdRng) -> Self {
        let pool = RoundPool::new(suite.len());
        let round = RoundState::new(suite.round(0).map(<[String]>::to_vec).unwrap_or_default());
        let speed_input = config.speed.to_string();

        Self {
            phase: Phase::Idle,
            config,
            suite,
            pool,
            rng,
            round,
            generation: 0,
            rounds_played: 0,
            speed_input,
            error_message: None,
            terminal_size: (80, 24),
        }
    }

    /// Leave the initial idle phase: show the banner or start playing.
    pub fn start(&mut self) -> Vec<AppAction> {
        if self.config.show_banner {
            self.phase = Phase::Banner;
            vec![
                AppAction::Schedule { delay: BANNER_DURATION, timer: Timer::DismissBanner },
                AppAction::Render,
            ]
        } else {
            self.start_new_round()
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => self.tick(),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Timer(timer) => self.handle_timer(timer),
        }
    }

    /// Start a round drawn from the pool.
    ///
    /// Resets score, word index, scroll and both answer fields, cancels any
    /// pending deferred timer and starts the ticker.
    pub fn start_new_round(&mut self) -> Vec<AppAction> {
        let words = self
            .pool
            .draw(&mut self.rng)
            .and_then(|index| self.suite.round(index))
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        self.round = RoundState::new(words);
        self.generation = self.generation.wrapping_add(1);
        self.rounds_played = self.rounds_played.saturating_add(1);
        self.phase = Phase::Running;
        self.error_message = None;

        tracing::info!(
            round = self.rounds_played,
            words = self.round.words.len(),
            interval = ?self.config.tick_interval(),
            "round started"
        );

        vec![
            AppAction::CancelTimers,
            AppAction::StartTicker { interval: self.config.tick_interval() },
            AppAction::Render,
        ]
    }

    /// Advance the scroll by one column, or let the word escape.
    ///
    /// Ignored outside a round and while a solved word awaits its transition.
    pub fn tick(&mut self) -> Vec<AppAction> {
        if !self.phase.is_running() || self.round.is_solved() {
            return vec![];
        }

        if self.round.escapes(self.terminal_size.0, ESCAPE_MARGIN) {
            tracing::debug!(word = self.round.current_word(), "word escaped");
            return self.complete_word();
        }

        self.round.scroll_offset = self.round.scroll_offset.saturating_add(1);
        vec![AppAction::Render]
    }

    /// Check `text` against the true count for `subject` in the current word.
    ///
    /// A correct answer marks the field and either moves focus to the other
    /// subject or, if both are now correct, scores the word and schedules the
    /// transition. A wrong or non-numeric answer only marks the field.
    pub fn submit_answer(&mut self, subject: Subject, text: &str) -> Vec<AppAction> {
        if !self.phase.is_running() || self.round.is_solved() {
            return vec![];
        }

        let rule = self.config.vowel_rule;
        let word = self.round.current_word();
        let expected = match subject {
            Subject::Vowels => rule.count_vowels(word),
            Subject::Consonants => rule.count_consonants(word),
        };
        let correct = parse_number(text).is_some_and(|n| (n - expected as f64).abs() < f64::EPSILON);

        let field = self.round.field_mut(subject);
        field.text = text.to_string();

        if !correct {
            field.state = FieldState::Wrong;
            return vec![AppAction::Render];
        }

        field.state = FieldState::Correct;

        if self.round.field(subject.other()).state == FieldState::Correct {
            self.round.score = self.round.score.saturating_add(1);
            tracing::debug!(
                word = self.round.current_word(),
                score = self.round.score,
                "word solved"
            );
            return vec![
                AppAction::Schedule {
                    delay: ADVANCE_DELAY,
                    timer: Timer::CompleteWord { generation: self.generation },
                },
                AppAction::Render,
            ];
        }

        self.round.subject = subject.other();
        vec![AppAction::Render]
    }

    /// Submit the vowel count.
    pub fn submit_vowel_answer(&mut self, text: &str) -> Vec<AppAction> {
        self.submit_answer(Subject::Vowels, text)
    }

    /// Submit the consonant count.
    pub fn submit_consonant_answer(&mut self, text: &str) -> Vec<AppAction> {
        self.submit_answer(Subject::Consonants, text)
    }

    /// Replace the answer text of `subject`.
    ///
    /// Ignored while the word is solved and waiting for its transition.
    pub fn change_answer_text(&mut self, subject: Subject, text: impl Into<String>) -> Vec<AppAction> {
        if !self.phase.is_running() || self.round.is_solved() {
            return vec![];
        }
        self.round.field_mut(subject).text = text.into();
        vec![AppAction::Render]
    }

    /// Swap the active subject without touching either field's state.
    pub fn toggle_focus(&mut self) -> Vec<AppAction> {
        if !self.phase.is_running() {
            return vec![];
        }
        self.round.subject = self.round.subject.other();
        vec![AppAction::Render]
    }

    /// Flip the complication setting. Only allowed between rounds.
    pub fn toggle_complication(&mut self) -> Result<Vec<AppAction>, AppError> {
        self.require_over("toggle complication")?;
        self.config.complication = !self.config.complication;
        tracing::debug!(enabled = self.config.complication, "complication toggled");
        Ok(vec![AppAction::Render])
    }

    /// Enter the speed editing sub-state. Only allowed between rounds.
    pub fn request_speed_change(&mut self) -> Result<Vec<AppAction>, AppError> {
        self.require_over("change speed")?;
        self.phase = Phase::ChangingSpeed;
        self.speed_input = self.config.speed.to_string();
        self.error_message = None;
        Ok(vec![AppAction::Render])
    }

    /// Replace the speed text being edited.
    ///
    /// A shown error clears as soon as the text becomes numeric.
    pub fn change_speed_text(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        if self.phase != Phase::ChangingSpeed {
            return vec![];
        }
        self.speed_input = text.into();
        if self.error_message.is_some() && is_numeric(&self.speed_input) {
            self.error_message = None;
        }
        vec![AppAction::Render]
    }

    /// Parse `text` as the new speed and apply it.
    ///
    /// On failure the previous speed stays in effect, the player sees an
    /// error message and the editor stays open.
    pub fn apply_speed_change(&mut self, text: &str) -> Result<Vec<AppAction>, AppError> {
        self.require_over("change speed")?;

        match text.parse::<Speed>() {
            Ok(speed) => {
                self.config.speed = speed;
                self.speed_input = speed.to_string();
                self.error_message = None;
                self.phase = Phase::Idle;
                tracing::info!(%speed, interval = ?speed.tick_interval(), "speed changed");
                Ok(vec![AppAction::Render])
            },
            Err(e) => {
                tracing::debug!("rejected speed change: {e}");
                self.error_message = Some(SPEED_ERROR_MESSAGE.to_string());
                Err(e)
            },
        }
    }

    /// Leave the speed editor without changing the speed.
    pub fn cancel_speed_change(&mut self) -> Vec<AppAction> {
        if self.phase != Phase::ChangingSpeed {
            return vec![];
        }
        self.phase = Phase::Idle;
        self.error_message = None;
        self.speed_input = self.config.speed.to_string();
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    fn require_over(&self, operation: &'static str) -> Result<(), AppError> {
        if self.phase.is_over() {
            Ok(())
        } else {
            Err(AppError::InvalidPhase { phase: self.phase, operation })
        }
    }

    fn handle_timer(&mut self, timer: Timer) -> Vec<AppAction> {
        match timer {
            Timer::DismissBanner if self.phase == Phase::Banner => self.dismiss_banner(),
            Timer::DismissBanner => vec![],
            Timer::CompleteWord { generation } => {
                if generation != self.generation || !self.phase.is_running() {
                    tracing::debug!(
                        stale = generation,
                        current = self.generation,
                        "ignoring stale word transition"
                    );
                    return vec![];
                }
                self.complete_word()
            },
        }
    }

    fn dismiss_banner(&mut self) -> Vec<AppAction> {
        tracing::debug!("banner dismissed");
        self.start_new_round()
    }

    /// Move past the current word: next word, or end of round on the last.
    fn complete_word(&mut self) -> Vec<AppAction> {
        if self.round.is_last_word() {
            return self.finish_round();
        }
        self.round.advance_word();
        self.generation = self.generation.wrapping_add(1);
        vec![AppAction::Render]
    }

    fn finish_round(&mut self) -> Vec<AppAction> {
        self.phase = Phase::Idle;
        tracing::info!(score = self.round.score, words = self.round.words.len(), "round over");
        vec![AppAction::StopTicker, AppAction::Render]
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match self.phase {
            Phase::Banner => match key {
                KeyInput::Esc => self.quit(),
                _ => self.dismiss_banner(),
            },
            Phase::Running => self.handle_round_key(key),
            Phase::Idle => self.handle_idle_key(key),
            Phase::ChangingSpeed => self.handle_speed_key(key),
        }
    }

    fn handle_round_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let subject = self.round.subject;
        let mut text = self.round.field(subject).text.clone();

        match key {
            KeyInput::Char(c) if !c.is_control() => {
                text.push(c);
                self.change_answer_text(subject, text)
            },
            KeyInput::Backspace => {
                if text.pop().is_none() {
                    return vec![];
                }
                self.change_answer_text(subject, text)
            },
            KeyInput::Enter => {
                if text.is_empty() {
                    return vec![];
                }
                self.submit_answer(subject, &text)
            },
            KeyInput::Tab => self.toggle_focus(),
            KeyInput::Esc => self.quit(),
            KeyInput::Char(_) => vec![],
        }
    }

    fn handle_idle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char('n') => self.start_new_round(),
            KeyInput::Char('s') => self.request_speed_change().unwrap_or_else(Self::rejected),
            KeyInput::Char('t') => self.toggle_complication().unwrap_or_else(Self::rejected),
            KeyInput::Char('q') | KeyInput::Esc => self.quit(),
            _ => vec![],
        }
    }

    fn handle_speed_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let mut text = self.speed_input.clone();

        match key {
            KeyInput::Char(c) if !c.is_control() => {
                text.push(c);
                self.change_speed_text(text)
            },
            KeyInput::Backspace => {
                if text.pop().is_none() {
                    return vec![];
                }
                self.change_speed_text(text)
            },
            KeyInput::Enter => match self.apply_speed_change(&text) {
                Ok(actions) => actions,
                Err(AppError::InvalidSpeedValue { .. }) => vec![AppAction::Render],
                Err(e) => Self::rejected(e),
            },
            KeyInput::Esc => self.cancel_speed_change(),
            KeyInput::Tab | KeyInput::Char(_) => vec![],
        }
    }

    fn rejected(err: AppError) -> Vec<AppAction> {
        tracing::debug!("ignored key: {err}");
        vec![]
    }

    /// Whether the word is shown at `offset` while complication is on.
    ///
    /// Visible when the offset is divisible by 5, by both 3 and 2, or by both
    /// 4 and 5 (already covered by 5).
    fn visible_at(offset: usize) -> bool {
        offset % 5 == 0 || offset % 6 == 0
    }

    /// Word as it should appear on screen.
    ///
    /// ASCII upper-cased so the width matches the original word, or masked with placeholders when complication is on and
    /// the scroll offset hides it.
    pub fn displayed_word(&self) -> String {
        let word = self.round.current_word();
        if self.config.complication && !Self::visible_at(self.round.scroll_offset) {
            mask_word(word)
        } else {
            word.to_ascii_uppercase()
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// A round is in progress.
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// No round is running.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Round in progress, or the last one played.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Score of the current (or last) round.
    pub fn score(&self) -> u32 {
        self.round.score
    }

    /// Game settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Identity of the current word within the current round.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rounds started so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Speed text being edited.
    pub fn speed_input(&self) -> &str {
        &self.speed_input
    }

    /// Error shown to the player. `None` if no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
