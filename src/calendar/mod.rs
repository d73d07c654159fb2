pub mod composer;
pub mod dates;
pub mod streak;

pub use composer::GridComposer;
pub use dates::{
    day_of_week, days_in_month, days_in_period, format_date, is_future, month_key, month_name,
    parse_date, today_local, DATE_FORMAT,
};
pub use streak::StreakCalculator;
