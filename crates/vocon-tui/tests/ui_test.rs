//! Rendering tests against ratatui's `TestBackend`.

use ratatui::{Terminal, backend::TestBackend};
use vocon_app::{App, AppEvent, GameConfig, Timer};
use vocon_tui::ui;
use vocon_words::WordsSuite;

const WIDTH: u16 = 70;
const HEIGHT: u16 = 12;

/// Render `app` and return the screen as one string per row.
fn screen(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer[(x, y)].symbol()).collect::<String>())
        .collect()
}

fn contains(screen: &[String], text: &str) -> bool {
    screen.iter().any(|row| row.contains(text))
}

fn coal_app(config: GameConfig) -> App {
    let suite = WordsSuite::try_from_rounds(vec![vec!["coal".to_string()]]).unwrap();
    let mut app = App::with_seed(config, suite, 1);
    let _ = app.handle(AppEvent::Resize(WIDTH, HEIGHT));
    let _ = app.start();
    app
}

fn playing() -> App {
    coal_app(GameConfig { show_banner: false, ..GameConfig::default() })
}

#[test]
fn banner_shows_title() {
    let app = coal_app(GameConfig::default());
    let rows = screen(&app);

    assert!(contains(&rows, "V O W E L S - C O N S O N A N T S"));
    assert!(contains(&rows, "Count them up"));
}

#[test]
fn round_shows_score_word_and_fields() {
    let app = playing();
    let rows = screen(&app);

    assert!(rows[0].starts_with("Score: 0"));
    assert!(rows[2].starts_with("COAL"));
    assert!(contains(&rows, "VOWELS: _"));
    assert!(contains(&rows, "CONSONANTS: "));
    assert!(contains(&rows, "Playing"));
}

#[test]
fn word_moves_with_scroll_offset() {
    let mut app = playing();
    for _ in 0..5 {
        let _ = app.handle(AppEvent::Tick);
    }
    let rows = screen(&app);

    assert!(rows[2].starts_with("     COAL"));
}

#[test]
fn complication_masks_word() {
    let mut app =
        coal_app(GameConfig { show_banner: false, complication: true, ..GameConfig::default() });
    let _ = app.handle(AppEvent::Tick);
    let rows = screen(&app);

    assert!(rows[2].starts_with(" ----"));
}

#[test]
fn answer_markers_follow_field_state() {
    let mut app = playing();
    let _ = app.submit_vowel_answer("2");
    let _ = app.submit_consonant_answer("5");
    let rows = screen(&app);

    assert!(contains(&rows, "VOWELS: 2 ok"));
    assert!(contains(&rows, "CONSONANTS: 5_ x"));
}

#[test]
fn summary_shows_result_and_keys() {
    let mut app = playing();
    let _ = app.submit_vowel_answer("2");
    let _ = app.submit_consonant_answer("2");
    let _ = app.handle(AppEvent::Timer(Timer::CompleteWord {
        generation: app.generation(),
    }));
    let rows = screen(&app);

    assert!(contains(&rows, "Game is over"));
    assert!(contains(&rows, "Result: 1 of 1"));
    assert!(contains(&rows, "n - start a new round"));
    assert!(contains(&rows, "toggle `complicate` setting (current: disabled)"));
    assert!(contains(&rows, "Paused"));
}

#[test]
fn speed_editor_shows_error() {
    let mut app = playing();
    let _ = app.handle(AppEvent::Resize(4, HEIGHT));
    let _ = app.handle(AppEvent::Tick);
    let _ = app.request_speed_change();
    let _ = app.change_speed_text("abc");
    let _ = app.apply_speed_change("abc");
    let rows = screen(&app);

    assert!(rows[0].starts_with("Wrong speed value"));
    assert!(rows[1].starts_with("New speed: abc_"));
}
