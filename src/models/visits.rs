use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::calendar::dates::parse_date;

/// Distinct visit dates, owned by the caller. Insertion order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitSet {
    dates: BTreeSet<NaiveDate>,
}

impl VisitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `YYYY-MM-DD` strings. Unparseable entries are skipped.
    pub fn from_strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for item in items {
            let raw = item.as_ref();
            match parse_date(raw) {
                Some(date) => {
                    set.insert(date);
                }
                None => log::warn!("Skipping malformed visit date {:?}", raw),
            }
        }
        set
    }

    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Ascending.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }
}

impl FromIterator<NaiveDate> for VisitSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
