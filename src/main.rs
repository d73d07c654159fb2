mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers;
use streakgrid::calendar::today_local;
use streakgrid::config::AppConfig;
use streakgrid::store::load_visits;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    if let Some(Commands::Init) = cli.command {
        return handlers::handle_init(&config);
    }

    let visits_path = match &cli.visits {
        Some(path) => path.clone(),
        None => config.visits_path()?,
    };
    let visits = load_visits(&visits_path)?;

    // Sampled once so every figure below agrees on the date
    let today = cli.today.unwrap_or_else(today_local);
    let default_period = config.display.default_period;

    match cli.command {
        Some(Commands::Stats { json }) => {
            handlers::handle_stats(&visits, today, json)?;
        }
        Some(Commands::Grid { period, json }) => {
            handlers::handle_grid(
                &visits,
                today,
                period.unwrap_or(default_period),
                config.display.show_future,
                json,
            )?;
        }
        Some(Commands::Days { period }) => {
            handlers::handle_days(today, period.unwrap_or(default_period))?;
        }
        Some(Commands::Init) => unreachable!(),
        // No subcommand → launch the dashboard
        None => {
            tui::app::run(config, visits_path, visits, cli.today)?;
        }
    }

    Ok(())
}
