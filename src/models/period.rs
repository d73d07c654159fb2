use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl TimePeriod {
    pub fn all() -> Vec<TimePeriod> {
        vec![TimePeriod::Week, TimePeriod::Month, TimePeriod::Year]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimePeriod::Week => "week",
            TimePeriod::Month => "month",
            TimePeriod::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimePeriod::Week => "Week",
            TimePeriod::Month => "Month",
            TimePeriod::Year => "Year",
        }
    }

    /// Cycle order used by the dashboard's Tab key.
    pub fn next(&self) -> TimePeriod {
        match self {
            TimePeriod::Week => TimePeriod::Month,
            TimePeriod::Month => TimePeriod::Year,
            TimePeriod::Year => TimePeriod::Week,
        }
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TimePeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "w" => Ok(TimePeriod::Week),
            "month" | "m" => Ok(TimePeriod::Month),
            "year" | "y" => Ok(TimePeriod::Year),
            _ => Err(anyhow::anyhow!("Unknown time period: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_shorthands() {
        assert_eq!("week".parse::<TimePeriod>().unwrap(), TimePeriod::Week);
        assert_eq!("Month".parse::<TimePeriod>().unwrap(), TimePeriod::Month);
        assert_eq!("y".parse::<TimePeriod>().unwrap(), TimePeriod::Year);
        assert!("fortnight".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn next_cycles_through_every_period() {
        let mut p = TimePeriod::Week;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(p);
            p = p.next();
        }
        assert_eq!(seen, TimePeriod::all());
        assert_eq!(p, TimePeriod::Week);
    }
}
