//! Round in progress
//!
//! Score, the scrolling word and both answer fields.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use vocon_app::{App, FieldState, Subject};

/// Render the round view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let round = app.round();
    let padding = " ".repeat(round.scroll_offset);

    let lines = vec![
        Line::from(format!("Score: {}", app.score())),
        Line::default(),
        Line::from(vec![
            Span::raw(padding),
            Span::styled(app.displayed_word(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
        Line::default(),
        Line::from(
            [Subject::Vowels, Subject::Consonants]
                .into_iter()
                .flat_map(|subject| answer_spans(app, subject))
                .collect::<Vec<_>>(),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// Label, text and validation marker for one answer field.
fn answer_spans(app: &App, subject: Subject) -> Vec<Span<'static>> {
    let round = app.round();
    let field = round.field(subject);
    let active = round.subject == subject;

    let label_style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let (marker, marker_style) = match field.state {
        FieldState::Waiting => ("", Style::default()),
        FieldState::Wrong => (" x", Style::default().fg(Color::Red)),
        FieldState::Correct => (" ok", Style::default().fg(Color::Green)),
    };
    let caret = if active { "_" } else { "" };

    vec![
        Span::styled(format!("{subject}: "), label_style),
        Span::raw(format!("{}{caret}", field.text)),
        Span::styled(marker, marker_style),
        Span::raw("   "),
    ]
}
