use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use streakgrid::models::{CalendarGrid, VisitStats};

use crate::tui::theme;

const BAR_LEN: usize = 16;
/// Streak length that fills the bar.
const BAR_FULL_DAYS: f64 = 30.0;

pub fn render(frame: &mut Frame, area: Rect, stats: &VisitStats, grid: &CalendarGrid) {
    let block = Block::default()
        .title(Span::styled(" Streak ", theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let ratio = (stats.current as f64 / BAR_FULL_DAYS).min(1.0);
    let filled = (ratio * BAR_LEN as f64).round() as usize;
    let empty = BAR_LEN.saturating_sub(filled);

    let current_style = if stats.current > 0 {
        theme::visited().add_modifier(Modifier::BOLD)
    } else {
        theme::dim()
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Current   ", theme::dim()),
            Span::styled(format!("{} days", stats.current), current_style),
        ]),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled("█".repeat(filled), theme::visited()),
            Span::styled("░".repeat(empty), theme::dim()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Longest   ", theme::dim()),
            Span::styled(format!("{} days", stats.longest), theme::bold()),
        ]),
        Line::from(vec![
            Span::styled("  Total     ", theme::dim()),
            Span::styled(format!("{} visits", stats.total), theme::bold()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  This {}  ", grid.period.as_str()), theme::dim()),
            Span::styled(
                format!("{}/{}", grid.visited_count(), grid.elapsed_count()),
                theme::amber(),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
