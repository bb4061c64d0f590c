//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use proptest::prelude::*;
use vocon_app::{App, AppAction, AppEvent, FieldState, GameConfig, KeyInput, Timer};
use vocon_words::WordsSuite;

/// Generate random key presses.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => prop::char::range('0', '9').prop_map(KeyInput::Char),
        1 => prop::sample::select(vec!['n', 's', 't', 'x', '.', '-']).prop_map(KeyInput::Char),
        2 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Tab),
    ]
}

/// Generate random app events. Esc is left out so sequences never quit.
fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        4 => Just(AppEvent::Tick),
        1 => (1u16..120, 1u16..50).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        4 => key_strategy().prop_map(AppEvent::Key),
        1 => Just(AppEvent::Timer(Timer::DismissBanner)),
        1 => (0u64..8).prop_map(|generation| AppEvent::Timer(Timer::CompleteWord { generation })),
    ]
}

fn default_suite() -> WordsSuite {
    WordsSuite::default()
}

/// Check invariants that must hold after every event.
fn check_invariants(app: &App) -> Result<(), TestCaseError> {
    let round = app.round();

    prop_assert!(!(app.is_running() && app.is_over()));
    prop_assert!(round.word_index < round.words.len().max(1));
    prop_assert!(round.score as usize <= round.word_index + 1);

    if app.is_running() {
        prop_assert!(
            !(round.vowels.state == FieldState::Correct
                && round.consonants.state == FieldState::Correct
                && round.score == 0),
            "solved word must have scored"
        );
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_app_invariants_hold(events in prop::collection::vec(event_strategy(), 0..200)) {
        let mut app = App::with_seed(GameConfig::default(), default_suite(), 7);
        let _ = app.start();

        for event in events {
            let actions = app.handle(event);
            prop_assert!(!actions.contains(&AppAction::Quit));
            check_invariants(&app)?;
        }
    }

    #[test]
    fn prop_score_never_decreases_within_round(
        events in prop::collection::vec(event_strategy(), 0..200)
    ) {
        let config = GameConfig { show_banner: false, ..GameConfig::default() };
        let mut app = App::with_seed(config, default_suite(), 11);
        let _ = app.start();
        let mut rounds = app.rounds_played();
        let mut score = app.score();

        for event in events {
            let _ = app.handle(event);
            if app.rounds_played() == rounds {
                prop_assert!(app.score() >= score);
            }
            rounds = app.rounds_played();
            score = app.score();
        }
    }

    #[test]
    fn prop_toggle_focus_twice_is_identity(
        events in prop::collection::vec(event_strategy(), 0..50)
    ) {
        let config = GameConfig { show_banner: false, ..GameConfig::default() };
        let mut app = App::with_seed(config, default_suite(), 3);
        let _ = app.start();
        for event in events {
            let _ = app.handle(event);
        }

        let before = app.round().clone();
        let _ = app.toggle_focus();
        let _ = app.toggle_focus();
        prop_assert_eq!(app.round(), &before);
    }

    #[test]
    fn prop_stale_transitions_never_advance(
        generation in 0u64..1000,
        ticks in 0usize..40
    ) {
        let config = GameConfig { show_banner: false, ..GameConfig::default() };
        let mut app = App::with_seed(config, default_suite(), 5);
        let _ = app.start();
        for _ in 0..ticks {
            let _ = app.handle(AppEvent::Tick);
        }
        prop_assume!(generation != app.generation());

        let before = app.round().clone();
        let actions = app.handle(AppEvent::Timer(Timer::CompleteWord { generation }));

        prop_assert!(actions.is_empty());
        prop_assert_eq!(app.round(), &before);
    }
}
