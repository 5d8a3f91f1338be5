//! timecard library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules: the session state machine (`core`), the record store (`store`),
//! the data model (`models`) and the git probe (`git`).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod git;
pub mod models;
pub mod store;
pub mod ui;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(cfg, *force),
        Commands::Start => cli::commands::start::handle(cfg),
        Commands::Checkpoint { label } => cli::commands::checkpoint::handle(cfg, label),
        Commands::End => cli::commands::end::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::from_cli(&cli)?;
    dispatch(&cli, &cfg)
}
