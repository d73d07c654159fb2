use chrono::Datelike;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use streakgrid::models::{CalendarGrid, DayCell, TimePeriod};

use crate::tui::theme;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn render(frame: &mut Frame, area: Rect, grid: &CalendarGrid, show_future: bool) {
    let title = grid
        .title
        .clone()
        .unwrap_or_else(|| "This week".to_string());

    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), theme::accent()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut lines = vec![Line::from("")];
    lines.extend(grid_lines(grid, show_future));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Week view lays the seven days out horizontally; month and year use
/// weekday rows by week columns.
pub fn grid_lines(grid: &CalendarGrid, show_future: bool) -> Vec<Line<'static>> {
    match grid.period {
        TimePeriod::Week => week_lines(grid, show_future),
        TimePeriod::Month | TimePeriod::Year => column_lines(grid, show_future),
    }
}

fn week_lines(grid: &CalendarGrid, show_future: bool) -> Vec<Line<'static>> {
    let mut names = vec![Span::raw("  ")];
    let mut dots = vec![Span::raw("  ")];
    let mut dates = vec![Span::raw("  ")];

    if let Some(column) = grid.columns.first() {
        for (row, cell) in column.iter().enumerate() {
            names.push(Span::styled(format!("{:<6}", WEEKDAYS[row]), theme::dim()));
            let (glyph, style) = glyph(cell.as_ref(), show_future);
            dots.push(Span::styled(format!("{:<6}", glyph), style));
            let day = cell
                .map(|c| format!("{:<6}", c.date.format("%d %b").to_string()))
                .unwrap_or_else(|| " ".repeat(6));
            dates.push(Span::styled(day, theme::dim()));
        }
    }

    vec![Line::from(names), Line::from(dots), Line::from(dates)]
}

fn column_lines(grid: &CalendarGrid, show_future: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(8);
    let cell_width = if grid.period == TimePeriod::Year { 2 } else { 3 };

    if grid.period == TimePeriod::Year {
        let mut label = String::new();
        for (col, name) in grid.labels.iter().enumerate() {
            let pos = col * cell_width;
            if name.is_empty() || label.len() > pos {
                continue;
            }
            label.push_str(&" ".repeat(pos - label.len()));
            label.push_str(name.get(..3).unwrap_or(name.as_str()));
        }
        lines.push(Line::from(Span::styled(format!("      {}", label), theme::dim())));
    }

    for (row, weekday) in WEEKDAYS.iter().enumerate() {
        let mut spans = vec![Span::styled(format!("  {} ", weekday), theme::dim())];
        for column in &grid.columns {
            let cell = column[row].as_ref();
            let (text, style) = if grid.period == TimePeriod::Month {
                let (_, style) = glyph(cell, show_future);
                let text = match cell {
                    Some(c) if show_future || !c.future => format!("{:>2}", c.date.day()),
                    _ => "  ".to_string(),
                };
                (text, style)
            } else {
                let (g, style) = glyph(cell, show_future);
                (g.to_string(), style)
            };
            spans.push(Span::styled(format!("{:<width$}", text, width = cell_width), style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn glyph(cell: Option<&DayCell>, show_future: bool) -> (&'static str, ratatui::style::Style) {
    match cell {
        None => (" ", theme::dim()),
        Some(c) if c.future => {
            if show_future {
                ("·", theme::upcoming())
            } else {
                (" ", theme::dim())
            }
        }
        Some(c) if c.visited => ("■", theme::visited()),
        Some(_) => ("■", theme::missed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use streakgrid::calendar::GridComposer;
    use streakgrid::models::VisitSet;

    fn grid(period: TimePeriod) -> CalendarGrid {
        let visits = VisitSet::from_strings(["2024-03-04"]);
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        GridComposer::new(&visits, today).compose(period)
    }

    #[test]
    fn week_view_is_three_lines() {
        let lines = grid_lines(&grid(TimePeriod::Week), true);
        assert_eq!(lines.len(), 3);
        // leading gutter plus seven days
        assert_eq!(lines[1].spans.len(), 8);
        assert_eq!(lines[1].spans[1].style, theme::visited());
    }

    #[test]
    fn year_view_has_month_label_row() {
        let lines = grid_lines(&grid(TimePeriod::Year), true);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].spans[0].content.trim_start().starts_with("Jan"));
    }

    #[test]
    fn month_view_has_one_span_per_column() {
        let g = grid(TimePeriod::Month);
        let lines = grid_lines(&g, true);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].spans.len(), g.columns.len() + 1);
    }
}
