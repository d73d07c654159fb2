use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use streakgrid::models::TimePeriod;

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, today: NaiveDate, period: TimePeriod, pinned: bool) {
    let date_str = today.format("%A, %b %d, %Y").to_string();

    let mut spans = vec![
        Span::styled("streakgrid", theme::accent().add_modifier(Modifier::BOLD)),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(date_str, theme::bold()),
    ];
    if pinned {
        spans.push(Span::styled(" (pinned)", theme::amber()));
    }
    spans.push(Span::styled("  ·  ", theme::dim()));
    spans.push(Span::styled(format!("{} view", period), theme::dim()));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::base());

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
