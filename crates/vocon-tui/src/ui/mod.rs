//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod banner;
mod round;
mod speed;
mod status;
mod summary;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use vocon_app::Phase;

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let area = frame.area();

    if app.phase() == Phase::Banner {
        banner::render(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.phase() {
        Phase::Running => round::render(frame, app, *main_area),
        Phase::Idle => summary::render(frame, app, *main_area),
        Phase::ChangingSpeed => speed::render(frame, app, *main_area),
        Phase::Banner => {},
    }
    status::render(frame, app, *status_area);
}
