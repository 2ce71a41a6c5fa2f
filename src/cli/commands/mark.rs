use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::attendance::AttendanceSummary;
use crate::core::store::SessionContext;
use crate::db::log::audit_quiet;
use crate::db::queries;
use crate::errors::{AppError, AppResult, RejectReason};
use crate::models::AttendanceRecord;
use crate::ui::messages::success;
use crate::utils::date;

use super::open_store;

/// Record one attendance session for the active student.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        course_id,
        date: date_str,
        present,
        ..
    } = &cli.command
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let store = open_store(cli, cfg)?;
        let student = store.current_student()?;
        let conn = &store.pool().conn;

        if queries::find_course(conn, course_id)?.is_none() {
            return Err(AppError::CourseNotFound(course_id.clone()));
        }
        if !student.is_enrolled(course_id) {
            return Err(AppError::MutationRejected(RejectReason::NotEnrolled));
        }

        let record = AttendanceRecord::new(course_id, d, *present);
        queries::insert_attendance(conn, &student.id, &record)?;

        let mark = if *present { "present" } else { "absent" };
        audit_quiet(
            conn,
            "mark",
            course_id,
            &format!("{} {} on {}", student.id, mark, record.date_str()),
        );

        let summary = AttendanceSummary::for_course(&store.current_student()?, course_id);
        success(format!(
            "Marked {} for {} on {} (attendance now {}%).",
            mark,
            course_id,
            record.date_str(),
            summary.percent
        ));
    }

    Ok(())
}
