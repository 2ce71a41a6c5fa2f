//! SQLite-backed implementation of the store and session seams.

use crate::core::store::{CourseStore, SessionContext};
use crate::db::log::audit_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult, RejectReason};
use crate::models::{Course, Student};

pub struct SqliteStore {
    pool: DbPool,
    student_id: String,
}

impl SqliteStore {
    pub fn new(pool: DbPool, student_id: &str) -> Self {
        Self {
            pool,
            student_id: student_id.to_string(),
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl CourseStore for SqliteStore {
    fn list_courses(&self) -> AppResult<Vec<Course>> {
        queries::load_courses(&self.pool.conn)
    }

    fn enroll(&mut self, student_id: &str, course_id: &str) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;

        if !queries::student_exists(&tx, student_id)? {
            return Err(AppError::StudentNotFound(student_id.to_string()));
        }

        let course = queries::find_course(&tx, course_id)?
            .ok_or(AppError::MutationRejected(RejectReason::UnknownCourse))?;

        if queries::is_enrolled(&tx, student_id, course_id)? {
            return Err(AppError::MutationRejected(RejectReason::AlreadyEnrolled));
        }

        if let Some(cap) = course.capacity
            && queries::count_enrolled(&tx, course_id)? >= cap
        {
            return Err(AppError::MutationRejected(RejectReason::CourseFull));
        }

        queries::insert_enrollment(&tx, student_id, course_id)?;
        audit_quiet(
            &tx,
            "enroll",
            course_id,
            &format!("{} enrolled in {} ({})", student_id, course.name, course.code),
        );

        tx.commit()?;
        Ok(())
    }

    fn unenroll(&mut self, student_id: &str, course_id: &str) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;

        if queries::delete_enrollment(&tx, student_id, course_id)? == 0 {
            return Err(AppError::MutationRejected(RejectReason::NotEnrolled));
        }

        audit_quiet(
            &tx,
            "drop",
            course_id,
            &format!("{} dropped {}", student_id, course_id),
        );

        tx.commit()?;
        Ok(())
    }
}

impl SessionContext for SqliteStore {
    fn current_student(&self) -> AppResult<Student> {
        queries::load_student(&self.pool.conn, &self.student_id)?
            .ok_or_else(|| AppError::StudentNotFound(self.student_id.clone()))
    }
}
