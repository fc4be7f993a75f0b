use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod platform;

use platform::{config, logging::LogDestination, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "scrape_app")]
#[command(version)]
#[command(about = "Simulated equipment property scraping dashboard", long_about = None)]
struct Cli {
    /// Equipment name, e.g. "Diesel Generator".
    #[arg(long)]
    equipment: String,

    /// Model number, e.g. "XG-2000".
    #[arg(long)]
    model: String,

    /// RON file with timer and logging settings.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Length of one simulated time unit.
    #[arg(long, value_name = "MS")]
    time_unit_ms: Option<u64>,

    /// Print each frame as a JSON view model instead of text.
    #[arg(long)]
    json: bool,

    /// Show the step and property panels.
    #[arg(long)]
    details: bool,

    /// Property to select for a re-run once the simulation stops (repeatable).
    #[arg(long = "rerun", value_name = "NAME")]
    rerun: Vec<String>,

    #[arg(long, value_enum)]
    log: Option<LogDestination>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => config::AppConfig::default(),
    };
    if let Some(ms) = cli.time_unit_ms {
        config.time_unit_ms = ms;
    }
    if let Some(log) = cli.log {
        config.log = log;
    }

    platform::run_app(RunOptions {
        equipment_name: cli.equipment,
        model_number: cli.model,
        config,
        json: cli.json,
        show_details: cli.details,
        rerun: cli.rerun,
    })
}
