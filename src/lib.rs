//! GeoTimbra library root.
//! Exposes the CLI parser, the async run() entry point and the internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod location;
pub mod models;
pub mod screens;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg).await,
        Commands::Clock { .. } => cli::commands::clock::handle(cli, cfg).await,
        Commands::Timesheet { .. } => cli::commands::timesheet::handle(cli, cfg).await,
        Commands::Detail { .. } => cli::commands::detail::handle(cli, cfg).await,
        Commands::App => cli::commands::app::handle(cli, cfg).await,
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg).await,
        Commands::Import { .. } => cli::commands::import::handle(cli, cfg).await,
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode ignores the user's configuration and skips the simulated latency
    let mut cfg = if cli.test {
        Config {
            latency_ms: 0,
            status_latency_ms: 0,
            ..Config::default()
        }
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg).await
}
