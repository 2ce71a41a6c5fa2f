//! `add-course` / `add-student`: populate the catalog and the roster.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::Course;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddCourse {
            id,
            name,
            code,
            department,
            faculty,
            description,
            semester,
            credits,
            capacity,
        } => {
            let course = Course {
                id: id.clone(),
                name: name.clone(),
                code: code.clone().unwrap_or_else(|| id.clone()),
                department: department.clone(),
                faculty: faculty.clone(),
                description: description.clone(),
                semester: *semester,
                credits: *credits,
                capacity: *capacity,
            };

            let pool = DbPool::open(&cfg.database)?;
            queries::insert_course(&pool.conn, &course)?;
            audit_quiet(
                &pool.conn,
                "add_course",
                &course.id,
                &format!("{} ({}) for {}", course.name, course.code, course.department),
            );
            success(format!("Course {} added.", course.code));
        }

        Commands::AddStudent {
            id,
            name,
            department,
        } => {
            let pool = DbPool::open(&cfg.database)?;
            queries::insert_student(&pool.conn, id, name, department)?;
            audit_quiet(
                &pool.conn,
                "add_student",
                id,
                &format!("{} ({})", name, department),
            );
            success(format!("Student {} added.", id));
        }

        _ => {}
    }

    Ok(())
}
