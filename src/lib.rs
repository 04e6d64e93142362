//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the
//! aggregation, report and API modules behind it.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Session;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, session: &Session) -> AppResult<()> {
    let cmd = &cli.command;
    match cmd {
        Commands::Init { .. } => commands::init::handle(cmd, session),
        Commands::Config { .. } => commands::config::handle(cmd, session),
        Commands::Login { .. } => commands::login::handle(cmd, session),
        Commands::Logout => commands::login::logout(session),
        Commands::Clock { .. } => commands::clock::handle(cmd, session),
        Commands::History { .. } => commands::history::handle(cmd, session),
        Commands::Employees { .. } => commands::directory::employees(cmd, session),
        Commands::Holidays => commands::directory::holidays(session),
        Commands::Leave { .. } => commands::leave::handle(cmd, session),
        Commands::EditLog { .. } => commands::edit_log::handle(cmd, session),
        Commands::Matrix { .. } => commands::matrix::handle(cmd, session),
        Commands::Report { .. } => commands::report::handle(cmd, session),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // load config once
    let cfg_path = Config::config_file(cli.config.as_deref());
    let cfg = Config::load(&cfg_path)?;
    let session = Session::new(cfg, cfg_path, cli.tz.as_deref())?;
    debug!(
        "config {} · zone {}",
        session.cfg_path.display(),
        session.zone
    );

    dispatch(&cli, &session)
}
