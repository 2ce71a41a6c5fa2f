use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::catalog::CatalogView;
use crate::errors::AppResult;
use crate::ui::messages::success;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Enroll { course_id } = &cli.command {
        let mut store = open_store(cli, cfg)?;
        let mut view = CatalogView::load(&mut store)?;

        view.enroll(course_id)?;
        success(format!("Enrolled in {}.", course_id));
    }

    Ok(())
}
