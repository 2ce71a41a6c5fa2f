use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::enrolled::EnrollmentView;
use crate::core::search::SearchTerm;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::print_enrolled;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Courses { search } = &cli.command {
        let mut store = open_store(cli, cfg)?;
        let view = EnrollmentView::load(&mut store, cfg.at_risk_threshold)?;

        header("My Courses", "View and manage your enrolled courses");

        let term = SearchTerm::from(search.as_deref());
        print_enrolled(&view.results(&term));
    }

    Ok(())
}
