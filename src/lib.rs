//! punchsheet library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reconciliation modules (import, slots, durations, breaks, punctuality).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Fix { .. } => cli::commands::fix::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Sectors => cli::commands::sectors::handle(cfg),
    }
}

/// Entry point called by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once (--config or the default path)
    let cfg = Config::load_from(&cli.config_path())?;

    // 3️⃣ hand over to the dispatcher
    dispatch(&cli, &cfg)
}
