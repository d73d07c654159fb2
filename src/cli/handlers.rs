use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use streakgrid::calendar::{days_in_period, format_date, GridComposer, StreakCalculator};
use streakgrid::config::AppConfig;
use streakgrid::models::{CalendarGrid, DayCell, TimePeriod, VisitSet};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";
const RESET: &str = "\x1b[0m";

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// ─── Init ────────────────────────────────────────────────────────────────────

pub fn handle_init(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path()?;
    if path.exists() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }
    let written = config.save()?;
    println_colored!(GREEN, "  ✓ Wrote {}", written.display());
    Ok(())
}

// ─── Stats ───────────────────────────────────────────────────────────────────

pub fn handle_stats(visits: &VisitSet, today: NaiveDate, json: bool) -> Result<()> {
    let stats = StreakCalculator::new(visits, today).stats();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("Serializing stats")?
        );
        return Ok(());
    }

    println!();
    println_colored!(GOLD, "  Visits as of {}", format_date(today));
    println!();
    if stats.current > 0 {
        println_colored!(GREEN, "  Current streak:  {} {}", stats.current, days(stats.current));
    } else {
        println_colored!(DIM, "  Current streak:  0 days");
    }
    println_colored!(BOLD, "  Longest streak:  {} {}", stats.longest, days(stats.longest));
    println_colored!(BOLD, "  Total visits:    {}", stats.total);
    println!();
    Ok(())
}

// ─── Grid ────────────────────────────────────────────────────────────────────

pub fn handle_grid(
    visits: &VisitSet,
    today: NaiveDate,
    period: TimePeriod,
    show_future: bool,
    json: bool,
) -> Result<()> {
    let grid = GridComposer::new(visits, today).compose(period);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&grid).context("Serializing grid")?
        );
        return Ok(());
    }

    println!();
    let heading = grid
        .title
        .clone()
        .unwrap_or_else(|| format!("Week of {}", first_date(&grid).map(format_date).unwrap_or_default()));
    println_colored!(GOLD, "  {}", heading);
    println!();

    for line in grid_text(&grid, show_future) {
        println!("{}", line);
    }

    println!();
    println_colored!(
        DIM,
        "  {}/{} days visited so far  (■ visited, □ missed, · upcoming)",
        grid.visited_count(),
        grid.elapsed_count()
    );
    println!();
    Ok(())
}

/// Text rows for a grid: an optional month-label row, then one row per weekday.
pub fn grid_text(grid: &CalendarGrid, show_future: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);

    if grid.period == TimePeriod::Year {
        lines.push(format!("      {}", label_row(&grid.labels)));
    }

    for (row, weekday) in WEEKDAY_LABELS.iter().enumerate() {
        let mut line = format!("  {} ", weekday);
        for column in &grid.columns {
            line.push_str(&cell_text(column[row].as_ref(), grid.period, show_future));
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

fn cell_text(cell: Option<&DayCell>, period: TimePeriod, show_future: bool) -> String {
    let Some(cell) = cell else {
        return if period == TimePeriod::Year {
            "  ".to_string()
        } else {
            "   ".to_string()
        };
    };

    let glyph = match period {
        TimePeriod::Year => match (cell.visited, cell.future) {
            (_, true) => "·".to_string(),
            (true, _) => "■".to_string(),
            _ => "□".to_string(),
        },
        _ => format!("{:>2}", cell.date.day()),
    };

    let color = if cell.future {
        if !show_future {
            let width = if period == TimePeriod::Year { 2 } else { 3 };
            return " ".repeat(width);
        }
        DIM
    } else if cell.visited {
        GREEN
    } else {
        AMBER
    };

    format!("{}{}{} ", color, glyph, RESET)
}

/// Abbreviated month names placed over the column where each month begins.
fn label_row(labels: &[String]) -> String {
    let mut line = String::new();
    for (col, label) in labels.iter().enumerate() {
        let pos = col * 2;
        if label.is_empty() || line.len() > pos {
            continue;
        }
        line.push_str(&" ".repeat(pos - line.len()));
        line.push_str(label.get(..3).unwrap_or(label.as_str()));
    }
    line
}

fn first_date(grid: &CalendarGrid) -> Option<NaiveDate> {
    grid.cells().next().map(|c| c.date)
}

fn days(n: u32) -> &'static str {
    if n == 1 { "day" } else { "days" }
}

// ─── Days ────────────────────────────────────────────────────────────────────

pub fn handle_days(today: NaiveDate, period: TimePeriod) -> Result<()> {
    for date in days_in_period(period, today) {
        println!("{}", format_date(date));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn year_text_has_label_row_and_seven_weekdays() {
        let grid = GridComposer::new(&VisitSet::new(), today()).compose(TimePeriod::Year);
        let lines = grid_text(&grid, true);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].trim_start().starts_with("Jan"));
        assert!(lines[1].starts_with("  Mon"));
        assert!(lines[7].starts_with("  Sun"));
    }

    #[test]
    fn month_text_shows_day_numbers() {
        let visits = VisitSet::from_strings(["2024-03-01"]);
        let grid = GridComposer::new(&visits, today()).compose(TimePeriod::Month);
        let lines = grid_text(&grid, true);
        assert_eq!(lines.len(), 7);
        // 2024-03-01 is a Friday
        assert!(lines[4].contains(&format!("{} 1{}", GREEN, RESET)));
        assert!(lines[6].contains("31"));
    }

    #[test]
    fn hidden_future_cells_are_blank() {
        let grid = GridComposer::new(&VisitSet::new(), today()).compose(TimePeriod::Month);
        let lines = grid_text(&grid, false);
        assert!(!lines.iter().any(|l| l.contains("31")));
    }

    #[test]
    fn labels_skip_when_they_would_overlap() {
        let labels = vec![
            "January".to_string(),
            "February".to_string(),
            String::new(),
            "March".to_string(),
        ];
        assert_eq!(label_row(&labels), "Jan   Mar");
    }
}
