use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::confirm::{AssumeYes, Confirm};
use crate::core::enrolled::{DropOutcome, EnrollmentView};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::LinePrompt;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Drop { course_id, yes } = &cli.command {
        let mut store = open_store(cli, cfg)?;
        let mut view = EnrollmentView::load(&mut store, cfg.at_risk_threshold)?;

        let mut confirm: Box<dyn Confirm> = if *yes {
            Box::new(AssumeYes)
        } else {
            Box::new(LinePrompt::stdin())
        };

        match view.drop_course(course_id, confirm.as_mut())? {
            DropOutcome::Dropped => success(format!("Dropped {}.", course_id)),
            DropOutcome::Cancelled => info("Operation cancelled."),
        }
    }

    Ok(())
}
