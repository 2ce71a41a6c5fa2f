//! Unified application error type.
//! Every layer (db, core, cli, export) returns AppError so that the
//! dispatcher can report failures in one place.

use std::fmt;
use std::io;
use thiserror::Error;

/// Why the store (or a view, before reaching the store) refused a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    AlreadyEnrolled,
    NotEnrolled,
    CourseFull,
    UnknownCourse,
    NotEligible,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            RejectReason::AlreadyEnrolled => "already enrolled in this course",
            RejectReason::NotEnrolled => "not enrolled in this course (already dropped?)",
            RejectReason::CourseFull => "course is full",
            RejectReason::UnknownCourse => "course does not exist",
            RejectReason::NotEligible => "course is not open to your department",
        };
        f.write_str(msg)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Session / lookup
    // ---------------------------
    #[error("No active student: set `student_id` in the config or pass --student")]
    NoActiveStudent,

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    // ---------------------------
    // Mutations
    // ---------------------------
    #[error("Request rejected: {0}")]
    MutationRejected(RejectReason),

    #[error("A request for student {student} / course {course} is already pending")]
    MutationPending { student: String, course: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
