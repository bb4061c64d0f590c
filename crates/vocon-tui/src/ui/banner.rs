//! Splash banner

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "V O W E L S - C O N S O N A N T S";
const SUBTITLE: &str = "Count them up";
const BANNER_HEIGHT: u16 = 6;

/// Render the banner centered in `area`.
pub fn render(frame: &mut Frame, area: Rect) {
    let [banner_area] =
        Layout::vertical([Constraint::Length(BANNER_HEIGHT)]).flex(Flex::Center).areas(area);

    let lines = vec![
        Line::default(),
        Line::styled(TITLE, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Line::default(),
        Line::styled(SUBTITLE, Style::default().fg(Color::Cyan)),
    ];

    let paragraph = Paragraph::new(lines).centered().block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, banner_area);
}
