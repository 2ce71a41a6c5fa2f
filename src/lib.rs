//! coursedesk library root.
//! Exposes the CLI parser, the `run()` entry point and the view/store modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::AddCourse { .. } | Commands::AddStudent { .. } => {
            commands::seed::handle(&cli.command, cfg)
        }
        Commands::Mark { .. } => commands::mark::handle(cli, cfg),
        Commands::Catalog { .. } => commands::catalog::handle(cli, cfg),
        Commands::Enroll { .. } => commands::enroll::handle(cli, cfg),
        Commands::Courses { .. } => commands::courses::handle(cli, cfg),
        Commands::Drop { .. } => commands::drop::handle(cli, cfg),
        Commands::Show { .. } => commands::show::handle(cli, cfg),
        Commands::Export { .. } => commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and then overridden from the command line
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
