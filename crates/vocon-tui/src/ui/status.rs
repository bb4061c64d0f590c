//! Status bar
//!
//! Displays the current settings and how many rounds were played.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.config();

    let mode = if app.is_running() {
        Span::styled("Playing", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Paused", Style::default().fg(Color::Yellow))
    };

    let settings = format!(
        " | Speed: {} | Complicate: {} | Rounds: {}",
        config.speed,
        if config.complication { "on" } else { "off" },
        app.rounds_played()
    );

    let status_line = Line::from(vec![
        Span::raw(" "),
        mode,
        Span::styled(settings, Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
