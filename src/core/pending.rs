//! Per-pair de-duplication of enrollment mutations still in flight.

use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct PendingMutations {
    in_flight: HashSet<(String, String)>,
}

impl PendingMutations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the pair as in flight, or fails if it already is.
    pub fn begin(&mut self, student_id: &str, course_id: &str) -> AppResult<()> {
        let key = (student_id.to_string(), course_id.to_string());
        if !self.in_flight.insert(key) {
            return Err(AppError::MutationPending {
                student: student_id.to_string(),
                course: course_id.to_string(),
            });
        }
        Ok(())
    }

    pub fn settle(&mut self, student_id: &str, course_id: &str) {
        self.in_flight
            .remove(&(student_id.to_string(), course_id.to_string()));
    }

    pub fn is_pending(&self, student_id: &str, course_id: &str) -> bool {
        self.in_flight
            .contains(&(student_id.to_string(), course_id.to_string()))
    }

    /// Runs `request` for the pair; the pair is released whatever the outcome.
    pub fn run<T>(
        &mut self,
        student_id: &str,
        course_id: &str,
        request: impl FnOnce() -> AppResult<T>,
    ) -> AppResult<T> {
        self.begin(student_id, course_id)?;
        let result = request();
        self.settle(student_id, course_id);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RejectReason;

    #[test]
    fn second_request_for_same_pair_is_refused() {
        let mut p = PendingMutations::new();
        p.begin("s1", "CS101").unwrap();

        let err = p.begin("s1", "CS101").unwrap_err();
        assert!(matches!(err, AppError::MutationPending { .. }));

        // other pairs are independent
        p.begin("s1", "CS102").unwrap();
        p.begin("s2", "CS101").unwrap();

        p.settle("s1", "CS101");
        assert!(!p.is_pending("s1", "CS101"));
        p.begin("s1", "CS101").unwrap();
    }

    #[test]
    fn run_releases_pair_on_failure() {
        let mut p = PendingMutations::new();

        let r: AppResult<()> = p.run("s1", "CS101", || {
            Err(AppError::MutationRejected(RejectReason::CourseFull))
        });
        assert!(r.is_err());
        assert!(!p.is_pending("s1", "CS101"));

        let r = p.run("s1", "CS101", || Ok(42));
        assert_eq!(r.unwrap(), 42);
    }
}
