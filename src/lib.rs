//! Visit streaks and calendar grids.
//!
//! [`calendar`] holds the pure date, streak and grid logic. Everything
//! that needs "today" takes it as an argument. [`store`] and [`config`]
//! are the read-only edges the binary uses to feed it.

pub mod calendar;
pub mod config;
pub mod models;
pub mod store;
