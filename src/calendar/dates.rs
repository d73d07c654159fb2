//! Calendar arithmetic over local `YYYY-MM-DD` dates.
//!
//! Every function that needs "today" takes it as a parameter. Only
//! [`today_local`] reads the wall clock; callers sample it once per
//! computation and pass the result down.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::TimePeriod;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `YYYY-MM`
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Monday = 0 … Sunday = 6.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Full English month name for a `YYYY-MM` key.
pub fn month_name(key: &str) -> &'static str {
    key.split('-')
        .nth(1)
        .and_then(|m| m.parse::<usize>().ok())
        .filter(|m| (1..=12).contains(m))
        .map(|m| MONTH_NAMES[m - 1])
        .unwrap_or("Unknown")
}

/// Length of `month` (1-12) in `year`, leap years included.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_of_week(date) as i64)
}

pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// The dates a period covers around `today`, ascending. Recomputed on every call.
pub fn days_in_period(period: TimePeriod, today: NaiveDate) -> Vec<NaiveDate> {
    match period {
        TimePeriod::Week => consecutive(week_start(today), 7),
        TimePeriod::Month => {
            let first = today - Duration::days(today.day0() as i64);
            consecutive(first, days_in_month(today.year(), today.month()))
        }
        TimePeriod::Year => {
            let first = today - Duration::days(today.ordinal0() as i64);
            let len = (1..=12).map(|m| days_in_month(today.year(), m)).sum();
            consecutive(first, len)
        }
    }
}

fn consecutive(start: NaiveDate, len: u32) -> Vec<NaiveDate> {
    start.iter_days().take(len as usize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn day_of_week_is_monday_based() {
        assert_eq!(day_of_week(d("2024-03-04")), 0); // Monday
        assert_eq!(day_of_week(d("2024-03-09")), 5);
        assert_eq!(day_of_week(d("2024-03-10")), 6); // Sunday
    }

    #[test]
    fn month_name_from_key() {
        assert_eq!(month_name("2024-01"), "January");
        assert_eq!(month_name("2023-12"), "December");
        assert_eq!(month_name("2023-13"), "Unknown");
        assert_eq!(month_name(&month_key(d("2024-09-30"))), "September");
    }

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }

    #[test]
    fn week_period_is_seven_days_from_monday() {
        // Sunday: the week still starts on the preceding Monday
        let days = days_in_period(TimePeriod::Week, d("2024-03-10"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], d("2024-03-04"));
        assert_eq!(days[6], d("2024-03-10"));

        // Week crossing a year boundary
        let days = days_in_period(TimePeriod::Week, d("2025-01-01"));
        assert_eq!(days[0], d("2024-12-30"));
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day_of_week(*day), i as u32);
        }
    }

    #[test]
    fn month_period_covers_whole_month() {
        let days = days_in_period(TimePeriod::Month, d("2024-02-15"));
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&d("2024-02-01")));
        assert_eq!(days.last(), Some(&d("2024-02-29")));

        assert_eq!(days_in_period(TimePeriod::Month, d("2023-02-01")).len(), 28);
        assert_eq!(days_in_period(TimePeriod::Month, d("2024-04-30")).len(), 30);
    }

    #[test]
    fn year_period_covers_jan_to_dec() {
        let days = days_in_period(TimePeriod::Year, d("2024-07-04"));
        assert_eq!(days.len(), 366);
        assert_eq!(days.first(), Some(&d("2024-01-01")));
        assert_eq!(days.last(), Some(&d("2024-12-31")));
        assert_eq!(days_in_period(TimePeriod::Year, d("2023-12-31")).len(), 365);
    }

    #[test]
    fn future_is_strictly_after_today() {
        let today = d("2024-03-10");
        assert!(!is_future(today, today));
        assert!(is_future(d("2024-03-11"), today));
        assert!(!is_future(d("2023-12-31"), today));
    }
}
