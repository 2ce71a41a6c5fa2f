//! The seams between the views and whatever holds the data.
//!
//! The views only ever talk to these two traits; `db::store::SqliteStore`
//! implements both for the CLI.

use crate::errors::AppResult;
use crate::models::{Course, Student};

/// Catalog access plus the two enrollment mutations.
pub trait CourseStore {
    /// All courses, in the store's canonical order.
    fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Enroll a student. Fails with `AppError::MutationRejected` when the
    /// store refuses (unknown course, already enrolled, course full).
    fn enroll(&mut self, student_id: &str, course_id: &str) -> AppResult<()>;

    /// Drop a course. Fails with `AppError::MutationRejected` when the pair
    /// is not enrolled.
    fn unenroll(&mut self, student_id: &str, course_id: &str) -> AppResult<()>;
}

/// Identity of whoever is using the desk right now.
pub trait SessionContext {
    fn current_student(&self) -> AppResult<Student>;
}
