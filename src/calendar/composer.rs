//! Lays day cells out as weekday rows by week columns.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashSet;

use crate::calendar::dates::{day_of_week, days_in_period, is_future, month_key, month_name};
use crate::models::{CalendarGrid, DayCell, EMPTY_COLUMN, TimePeriod, VisitSet, WeekColumn};

pub struct GridComposer<'a> {
    visits: &'a VisitSet,
    today: NaiveDate,
}

impl<'a> GridComposer<'a> {
    pub fn new(visits: &'a VisitSet, today: NaiveDate) -> Self {
        Self { visits, today }
    }

    pub fn cell(&self, date: NaiveDate) -> DayCell {
        let future = is_future(date, self.today);
        DayCell {
            date,
            visited: !future && self.visits.contains(date),
            future,
        }
    }

    /// Build the grid for `period`, anchored on this composer's reference date.
    pub fn compose(&self, period: TimePeriod) -> CalendarGrid {
        let days = days_in_period(period, self.today);
        log::debug!(
            "Composing {} grid for {} ({} days)",
            period.as_str(),
            self.today,
            days.len()
        );

        match period {
            TimePeriod::Week => CalendarGrid {
                period,
                title: None,
                columns: self.week_columns(&days),
                labels: Vec::new(),
            },
            TimePeriod::Month => CalendarGrid {
                period,
                title: Some(format!(
                    "{} {}",
                    month_name(&month_key(self.today)),
                    self.today.year()
                )),
                columns: self.continuous_columns(&days),
                labels: Vec::new(),
            },
            TimePeriod::Year => {
                let columns = self.continuous_columns(&days);
                let labels = year_labels(&columns);
                CalendarGrid {
                    period,
                    title: Some(self.today.year().to_string()),
                    columns,
                    labels,
                }
            }
        }
    }

    /// A single Monday-to-Sunday column for the week containing the first day.
    pub fn week_columns(&self, days: &[NaiveDate]) -> Vec<WeekColumn> {
        let Some(&first) = days.first() else {
            return vec![EMPTY_COLUMN];
        };

        let monday = first - Duration::days(day_of_week(first) as i64);
        let mut column = EMPTY_COLUMN;
        for (row, slot) in column.iter_mut().enumerate() {
            *slot = Some(self.cell(monday + Duration::days(row as i64)));
        }
        vec![column]
    }

    /// Continuous week columns. A column closes after each Sunday; the
    /// first is padded before day one's weekday, and a trailing partial
    /// column is kept only if it holds a day.
    pub fn continuous_columns(&self, days: &[NaiveDate]) -> Vec<WeekColumn> {
        if days.is_empty() {
            return vec![EMPTY_COLUMN];
        }

        let mut columns = Vec::with_capacity(days.len() / 7 + 2);
        let mut column = EMPTY_COLUMN;
        for &date in days {
            let row = day_of_week(date) as usize;
            column[row] = Some(self.cell(date));
            if row == 6 {
                columns.push(column);
                column = EMPTY_COLUMN;
            }
        }
        if column.iter().any(Option::is_some) {
            columns.push(column);
        }
        columns
    }
}

/// Month name on the first column where each `YYYY-MM` appears, empty elsewhere.
pub fn year_labels(columns: &[WeekColumn]) -> Vec<String> {
    let mut seen = HashSet::new();
    columns
        .iter()
        .map(|column| {
            let mut label = String::new();
            for cell in column.iter().flatten() {
                let key = month_key(cell.date);
                if seen.insert(key.clone()) && label.is_empty() {
                    label = month_name(&key).to_string();
                }
            }
            label
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn week_grid_runs_monday_to_sunday() {
        let v = VisitSet::from_strings(["2024-03-05"]);
        let grid = GridComposer::new(&v, d("2024-03-06")).compose(TimePeriod::Week);

        assert_eq!(grid.columns.len(), 1);
        assert!(grid.title.is_none());
        let col = grid.columns[0];
        assert_eq!(col[0].unwrap().date, d("2024-03-04"));
        assert_eq!(col[6].unwrap().date, d("2024-03-10"));
        assert!(col[1].unwrap().visited);
        assert!(!col[2].unwrap().future);
        assert!(col[3].unwrap().future);
    }

    #[test]
    fn empty_day_list_degrades_to_placeholder_column() {
        let v = VisitSet::new();
        let composer = GridComposer::new(&v, d("2024-03-06"));
        assert_eq!(composer.week_columns(&[]), vec![EMPTY_COLUMN]);
        assert_eq!(composer.continuous_columns(&[]), vec![EMPTY_COLUMN]);
    }

    #[test]
    fn month_grid_pads_first_column_and_keeps_partial_tail() {
        // March 2024 starts on a Friday and ends on a Sunday
        let v = VisitSet::new();
        let grid = GridComposer::new(&v, d("2024-03-15")).compose(TimePeriod::Month);

        assert_eq!(grid.title.as_deref(), Some("March 2024"));
        assert_eq!(grid.columns.len(), 5);
        assert!(grid.columns[0][..4].iter().all(Option::is_none));
        assert_eq!(grid.columns[0][4].unwrap().date, d("2024-03-01"));
        assert_eq!(grid.columns[4][6].unwrap().date, d("2024-03-31"));
        assert_eq!(grid.cells().count(), 31);

        // April 2024 ends on a Tuesday: trailing column is partial
        let grid = GridComposer::new(&v, d("2024-04-01")).compose(TimePeriod::Month);
        let last = grid.columns.last().unwrap();
        assert_eq!(last[1].unwrap().date, d("2024-04-30"));
        assert!(last[2..].iter().all(Option::is_none));
    }

    #[test]
    fn future_cells_are_never_visited() {
        let v = VisitSet::from_strings(["2024-03-10", "2024-03-20", "2024-03-21"]);
        let grid = GridComposer::new(&v, d("2024-03-15")).compose(TimePeriod::Month);

        for cell in grid.cells() {
            assert!(!(cell.visited && cell.future));
            assert_eq!(cell.future, cell.date > d("2024-03-15"));
        }
        assert_eq!(grid.visited_count(), 1);
        assert_eq!(grid.elapsed_count(), 15);
    }

    #[test]
    fn year_labels_mark_first_column_of_each_month() {
        let v = VisitSet::new();
        let grid = GridComposer::new(&v, d("2024-06-01")).compose(TimePeriod::Year);

        assert_eq!(grid.title.as_deref(), Some("2024"));
        assert_eq!(grid.labels.len(), grid.columns.len());
        assert_eq!(grid.cells().count(), 366);

        let named: Vec<&str> = grid
            .labels
            .iter()
            .filter(|l| !l.is_empty())
            .map(String::as_str)
            .collect();
        assert_eq!(named.len(), 12);
        assert_eq!(named[0], "January");
        assert_eq!(named[11], "December");

        // 2024-01-29 (Mon) through 2024-02-04 (Sun) is the fifth column
        assert_eq!(grid.labels[4], "February");
        assert_eq!(grid.columns[4][3].unwrap().date, d("2024-02-01"));
    }

    #[test]
    fn every_cell_sits_on_its_weekday_row() {
        let v = VisitSet::new();
        let grid = GridComposer::new(&v, d("2023-11-11")).compose(TimePeriod::Year);
        for column in &grid.columns {
            for (row, cell) in column.iter().enumerate() {
                if let Some(cell) = cell {
                    assert_eq!(day_of_week(cell.date) as usize, row);
                }
            }
        }
    }
}
