use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use streakgrid::models::TimePeriod;

#[derive(Parser, Debug)]
#[command(name = "streakgrid", version, author, about = "Visit streaks and a contribution-style calendar grid")]
pub struct Cli {
    /// Visit file to read (one YYYY-MM-DD per line, or a .json array)
    #[arg(long, global = true)]
    pub visits: Option<PathBuf>,
    /// Use this date as today (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show current streak, longest streak and total visits
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Draw the calendar grid for a period
    Grid {
        /// week, month or year (defaults to the configured period)
        #[arg(long, short)]
        period: Option<TimePeriod>,
        /// Print the grid structure as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every date in a period
    Days {
        /// week, month or year (defaults to the configured period)
        #[arg(long, short)]
        period: Option<TimePeriod>,
    },
    /// Write a default config file
    Init,
}
