use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::prompt::LinePrompt;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let mut store = open_store(cli, cfg)?;
        ExportLogic::export(
            &mut store,
            cfg.at_risk_threshold,
            *format,
            file,
            *force,
            &mut LinePrompt::stdin(),
        )?;
    }
    Ok(())
}
