pub mod grid;
pub mod period;
pub mod stats;
pub mod visits;

pub use grid::{CalendarGrid, DayCell, EMPTY_COLUMN, WeekColumn};
pub use period::TimePeriod;
pub use stats::VisitStats;
pub use visits::VisitSet;
