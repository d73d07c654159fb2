pub mod calendar;
pub mod header;
pub mod statusbar;
pub mod streak;
