use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::catalog::CatalogView;
use crate::core::search::SearchTerm;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::print_catalog;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Catalog { search } = &cli.command {
        let mut store = open_store(cli, cfg)?;
        let view = CatalogView::load(&mut store)?;

        header(
            "Available Courses",
            format!(
                "Courses open for enrollment in {}",
                view.student().department
            ),
        );

        let term = SearchTerm::from(search.as_deref());
        print_catalog(&view.results(&term), &cfg.description_placeholder);
    }

    Ok(())
}
