//! Round over
//!
//! Result of the last round and the keys available between rounds.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vocon_app::App;

/// Render the summary view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let complication = if app.config().complication { "enabled" } else { "disabled" };

    let lines = vec![
        Line::from("Game is over"),
        Line::from(vec![
            Span::styled("Result:", Style::default().fg(Color::Green)),
            Span::raw(format!(" {} of {}", app.score(), app.round().words.len())),
        ]),
        Line::default(),
        Line::from("Press:"),
        key_line('n', Color::Green, "start a new round".to_string()),
        key_line('s', Color::Cyan, "change game speed".to_string()),
        key_line(
            't',
            Color::Magenta,
            format!("toggle `complicate` setting (current: {complication})"),
        ),
        key_line('q', Color::Red, "quit".to_string()),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn key_line(key: char, color: Color, description: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(key.to_string(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!(" - {description}")),
    ])
}
