//! Enrolled-courses view: search, attendance and dropping.

use crate::core::attendance::{AttendanceStatus, AttendanceSummary};
use crate::core::confirm::Confirm;
use crate::core::listing::Listing;
use crate::core::pending::PendingMutations;
use crate::core::search::SearchTerm;
use crate::core::store::{CourseStore, SessionContext};
use crate::errors::{AppError, AppResult, RejectReason};
use crate::models::{Course, Student};

/// Enrolled courses in the original collection order.
pub fn enrolled_courses<'a>(
    courses: &'a [Course],
    student: &'a Student,
) -> impl Iterator<Item = &'a Course> + 'a {
    courses.iter().filter(move |c| student.is_enrolled(&c.id))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledEntry<'a> {
    pub course: &'a Course,
    pub attendance: AttendanceSummary,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Dropped,
    Cancelled,
}

pub fn drop_prompt(course: &Course) -> String {
    format!(
        "Are you sure you want to drop {} ({})? This action cannot be undone.",
        course.name, course.code
    )
}

pub struct EnrollmentView<'s, S> {
    store: &'s mut S,
    courses: Vec<Course>,
    student: Student,
    threshold: u8,
    pending: PendingMutations,
}

impl<'s, S: CourseStore + SessionContext> EnrollmentView<'s, S> {
    pub fn load(store: &'s mut S, threshold: u8) -> AppResult<Self> {
        let courses = store.list_courses()?;
        let student = store.current_student()?;
        Ok(Self {
            store,
            courses,
            student,
            threshold,
            pending: PendingMutations::new(),
        })
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn attendance(&self, course_id: &str) -> AttendanceSummary {
        AttendanceSummary::for_course(&self.student, course_id)
    }

    pub fn results(&self, term: &SearchTerm) -> Listing<EnrolledEntry<'_>> {
        let enrolled: Vec<&Course> = enrolled_courses(&self.courses, &self.student).collect();
        let subset_len = enrolled.len();

        let entries = enrolled
            .into_iter()
            .filter(|c| term.matches(c))
            .map(|course| {
                let attendance = self.attendance(&course.id);
                EnrolledEntry {
                    course,
                    attendance,
                    status: attendance.status(self.threshold),
                }
            })
            .collect();

        Listing::from_filtered(subset_len, entries)
    }

    /// Drops a course after `confirm` approves. A declined confirmation
    /// issues no request and is not an error.
    pub fn drop_course(
        &mut self,
        course_id: &str,
        confirm: &mut dyn Confirm,
    ) -> AppResult<DropOutcome> {
        let course = enrolled_courses(&self.courses, &self.student)
            .find(|c| c.id == course_id)
            .ok_or(AppError::MutationRejected(RejectReason::NotEnrolled))?;

        if !confirm.confirm(&drop_prompt(course)) {
            return Ok(DropOutcome::Cancelled);
        }

        let student_id = self.student.id.clone();
        let store = &mut *self.store;
        let outcome = self.pending.run(&student_id, course_id, || {
            store.unenroll(&student_id, course_id)
        });

        self.student = self.store.current_student()?;
        outcome.map(|_| DropOutcome::Dropped)
    }
}
