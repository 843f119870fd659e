//! kintai-checker library root.
//! Exposes the CLI parser, the check engine and the I/O collaborators.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher. Returns the process exit status.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<i32> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli).map(|_| 0),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg).map(|_| 0),
        Commands::Check { .. } => cli::commands::check::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<i32> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging before anything can fail
    logging::init_logging(logging::level_from_flags(cli.verbose, cli.quiet));

    // 3️⃣ load config ONCE; a broken file only blocks commands that read it
    let cfg = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) if cli.command.repairs_config() => {
            warning(format!("{e}; continuing with defaults"));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
