use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::store::{CourseStore, SessionContext};
use crate::errors::{AppError, AppResult};
use crate::ui::render::print_course_details;

use super::open_store;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { course_id } = &cli.command {
        let store = open_store(cli, cfg)?;
        let student = store.current_student()?;

        let course = store
            .list_courses()?
            .into_iter()
            .find(|c| &c.id == course_id)
            .ok_or_else(|| AppError::CourseNotFound(course_id.clone()))?;

        print_course_details(
            &course,
            &student,
            &cfg.description_placeholder,
            cfg.at_risk_threshold,
        );
    }

    Ok(())
}
