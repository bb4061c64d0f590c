//! Speed editor

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vocon_app::App;

/// Render the speed editor with any validation error above it.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let error = app.error_message().map_or_else(Line::default, |message| {
        Line::styled(message.to_string(), Style::default().fg(Color::Red))
    });

    let lines = vec![
        error,
        Line::from(vec![
            Span::raw("New speed: "),
            Span::styled(format!("{}_", app.speed_input()), Style::default().fg(Color::Yellow)),
        ]),
        Line::styled("Enter to apply, Esc to cancel", Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
