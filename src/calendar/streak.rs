use chrono::NaiveDate;

use crate::models::{VisitSet, VisitStats};

/// Streak statistics over a visit set, relative to a fixed reference date.
pub struct StreakCalculator<'a> {
    visits: &'a VisitSet,
    today: NaiveDate,
}

impl<'a> StreakCalculator<'a> {
    pub fn new(visits: &'a VisitSet, today: NaiveDate) -> Self {
        Self { visits, today }
    }

    pub fn total_visits(&self) -> u32 {
        self.visits.len() as u32
    }

    /// Consecutive visited days ending today, or ending yesterday when
    /// today has no visit yet.
    pub fn current_streak(&self) -> u32 {
        let mut check_date = if self.visits.contains(self.today) {
            self.today
        } else {
            match self.today.pred_opt() {
                Some(yesterday) => yesterday,
                None => return 0,
            }
        };

        let mut current = 0u32;
        while self.visits.contains(check_date) {
            current += 1;
            match check_date.pred_opt() {
                Some(prev) => check_date = prev,
                None => break,
            }
        }
        current
    }

    /// Longest run of consecutive dates anywhere in the history.
    pub fn longest_streak(&self) -> u32 {
        let mut best = 0u32;
        let mut run = 0u32;
        let mut prev: Option<NaiveDate> = None;

        // VisitSet iterates ascending and deduplicated
        for date in self.visits.iter() {
            run = match prev {
                Some(p) if p.succ_opt() == Some(date) => run + 1,
                _ => 1,
            };
            best = best.max(run);
            prev = Some(date);
        }
        best
    }

    pub fn stats(&self) -> VisitStats {
        VisitStats {
            current: self.current_streak(),
            longest: self.longest_streak(),
            total: self.total_visits(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::dates::parse_date;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn visits(dates: &[&str]) -> VisitSet {
        VisitSet::from_strings(dates.iter().copied())
    }

    #[test]
    fn empty_set_has_no_streaks() {
        let v = VisitSet::new();
        let calc = StreakCalculator::new(&v, d("2024-03-10"));
        assert_eq!(calc.stats(), VisitStats::default());
    }

    #[test]
    fn current_streak_counts_through_today() {
        let v = visits(&["2024-03-09", "2024-03-10"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-10")).current_streak(), 2);
    }

    #[test]
    fn current_streak_survives_until_today_is_over() {
        let v = visits(&["2024-03-09"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-10")).current_streak(), 1);

        let v = visits(&["2024-03-08", "2024-03-09"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-10")).current_streak(), 2);
    }

    #[test]
    fn current_streak_breaks_on_gap() {
        let v = visits(&["2024-03-08", "2024-03-10"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-10")).current_streak(), 1);

        // Neither today nor yesterday
        let v = visits(&["2024-03-07", "2024-03-08"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-10")).current_streak(), 0);
    }

    #[test]
    fn current_streak_crosses_month_and_leap_day() {
        let v = visits(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-03-01")).current_streak(), 3);
    }

    #[test]
    fn longest_streak_finds_best_run_in_unsorted_input() {
        let v = visits(&["2024-01-04", "2024-01-02", "2024-01-01"]);
        assert_eq!(StreakCalculator::new(&v, d("2024-06-01")).longest_streak(), 2);

        let v = visits(&[
            "2023-12-30",
            "2023-12-31",
            "2024-01-01",
            "2024-01-02",
            "2024-02-10",
            "2024-02-11",
        ]);
        assert_eq!(StreakCalculator::new(&v, d("2024-02-11")).longest_streak(), 4);
    }

    #[test]
    fn longest_is_never_below_current() {
        let v = visits(&["2024-03-01", "2024-03-08", "2024-03-09", "2024-03-10"]);
        let calc = StreakCalculator::new(&v, d("2024-03-10"));
        assert_eq!(calc.current_streak(), 3);
        assert!(calc.longest_streak() >= calc.current_streak());
        assert_eq!(calc.total_visits(), 4);
    }
}
