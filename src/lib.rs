//! helferlist library root.
//!
//! Turns the materialized helper data of an event (jobs, shifts, helpers)
//! into downloadable helper lists: one worksheet per job as xlsx, or a
//! paginated PDF. The export functions write into any `std::io::Write`,
//! the CLI around them reads event data from JSON or YAML files.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod errors;
pub mod export;
pub mod models;
pub mod telemetry;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let config_path = config_path(cli);

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(&config_path, *force),
        Commands::Config {
            print_config,
            check,
        } => cli::commands::config::handle(cfg, &config_path, *print_config, *check),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Stats { input } => cli::commands::stats::handle(input),
    }
}

fn config_path(cli: &Cli) -> std::path::PathBuf {
    cli.config.clone().unwrap_or_else(Config::config_file)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // configuration is loaded once and passed down
    let cfg = Config::load(&config_path(&cli))?;

    if let Err(e) = telemetry::init(&cfg) {
        ui::messages::warning(e);
    }

    dispatch(&cli, &cfg)
}
