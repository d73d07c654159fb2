use chrono::NaiveDate;
use serde::Serialize;

use crate::models::TimePeriod;

/// One calendar square. Never both `visited` and `future`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub visited: bool,
    pub future: bool,
}

/// Seven rows, Monday first. `None` is padding outside the period.
pub type WeekColumn = [Option<DayCell>; 7];

pub const EMPTY_COLUMN: WeekColumn = [None; 7];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGrid {
    pub period: TimePeriod,
    pub title: Option<String>,
    pub columns: Vec<WeekColumn>,
    /// One label per column for the year view; empty for week and month.
    pub labels: Vec<String>,
}

impl CalendarGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.columns.iter().flat_map(|col| col.iter().flatten())
    }

    pub fn visited_count(&self) -> usize {
        self.cells().filter(|c| c.visited).count()
    }

    /// Cells in the period up to and including the reference date.
    pub fn elapsed_count(&self) -> usize {
        self.cells().filter(|c| !c.future).count()
    }
}
