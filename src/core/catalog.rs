//! Catalog view: courses the current student can still enroll in.

use crate::core::listing::Listing;
use crate::core::pending::PendingMutations;
use crate::core::search::SearchTerm;
use crate::core::store::{CourseStore, SessionContext};
use crate::errors::{AppError, AppResult, RejectReason};
use crate::models::{Course, Student};

/// Same department as the student, not already enrolled.
pub fn is_eligible(course: &Course, student: &Student) -> bool {
    course.department == student.department && !student.is_enrolled(&course.id)
}

/// Eligible courses in the original collection order.
pub fn eligible_courses<'a>(
    courses: &'a [Course],
    student: &'a Student,
) -> impl Iterator<Item = &'a Course> + 'a {
    courses.iter().filter(move |c| is_eligible(c, student))
}

pub struct CatalogView<'s, S> {
    store: &'s mut S,
    courses: Vec<Course>,
    student: Student,
    pending: PendingMutations,
}

impl<'s, S: CourseStore + SessionContext> CatalogView<'s, S> {
    pub fn load(store: &'s mut S) -> AppResult<Self> {
        let courses = store.list_courses()?;
        let student = store.current_student()?;
        Ok(Self {
            store,
            courses,
            student,
            pending: PendingMutations::new(),
        })
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Recomputed from the current snapshot on every call.
    pub fn results(&self, term: &SearchTerm) -> Listing<&Course> {
        let eligible: Vec<&Course> = eligible_courses(&self.courses, &self.student).collect();
        let subset_len = eligible.len();
        let matching = eligible.into_iter().filter(|c| term.matches(c)).collect();

        Listing::from_filtered(subset_len, matching)
    }

    /// Requests enrollment, then reloads the student so the snapshot reflects
    /// the store whether the request succeeded or not.
    pub fn enroll(&mut self, course_id: &str) -> AppResult<()> {
        if let Some(course) = self.courses.iter().find(|c| c.id == course_id) {
            if self.student.is_enrolled(course_id) {
                return Err(AppError::MutationRejected(RejectReason::AlreadyEnrolled));
            }
            if course.department != self.student.department {
                return Err(AppError::MutationRejected(RejectReason::NotEligible));
            }
        }

        let student_id = self.student.id.clone();
        let store = &mut *self.store;
        let outcome = self
            .pending
            .run(&student_id, course_id, || store.enroll(&student_id, course_id));

        self.student = self.store.current_student()?;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;
    use crate::models::course::sample;

    fn catalog() -> Vec<Course> {
        vec![
            sample("CS101", "Intro to Programming", "CS", "Dr. Hopper"),
            sample("CS102", "Data Structures", "CS", "Dr. Knuth"),
            sample("MATH201", "Linear Algebra", "MATH", "Dr. Noether"),
        ]
    }

    fn ids(listing: &Listing<&Course>) -> Vec<String> {
        listing.items().iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn eligible_is_same_department_and_not_enrolled() {
        let mut store = MemoryStore::new("CS", catalog()).with_enrolled(&["CS101"]);
        let view = CatalogView::load(&mut store).unwrap();

        assert_eq!(ids(&view.results(&SearchTerm::new(""))), vec!["CS102"]);
    }

    #[test]
    fn eligibility_property_holds_for_every_course() {
        let mut store = MemoryStore::new("CS", catalog()).with_enrolled(&["CS101", "MATH201"]);
        let view = CatalogView::load(&mut store).unwrap();
        let listed = ids(&view.results(&SearchTerm::default()));

        for c in catalog() {
            let expected = c.department == "CS" && c.id != "CS101" && c.id != "MATH201";
            assert_eq!(listed.contains(&c.id), expected, "course {}", c.id);
        }
    }

    #[test]
    fn preserves_collection_order() {
        let mut courses = catalog();
        courses.push(sample("CS050", "Bootcamp", "CS", "Dr. Ritchie"));
        let mut store = MemoryStore::new("CS", courses);
        let view = CatalogView::load(&mut store).unwrap();

        assert_eq!(
            ids(&view.results(&SearchTerm::default())),
            vec!["CS101", "CS102", "CS050"]
        );
    }

    #[test]
    fn search_filters_eligible_subset() {
        let mut store = MemoryStore::new("CS", catalog());
        let view = CatalogView::load(&mut store).unwrap();

        assert_eq!(ids(&view.results(&SearchTerm::new("knuth"))), vec!["CS102"]);
        // MATH201 is not eligible even though it matches
        assert_eq!(view.results(&SearchTerm::new("algebra")), Listing::NoMatches);
    }

    #[test]
    fn empty_department_is_no_courses() {
        let mut store = MemoryStore::new("BIO", catalog());
        let view = CatalogView::load(&mut store).unwrap();

        assert_eq!(view.results(&SearchTerm::new("")), Listing::NoCourses);
        assert_eq!(view.results(&SearchTerm::new("zzz")), Listing::NoCourses);
    }

    #[test]
    fn enroll_moves_course_out_of_catalog() {
        let mut store = MemoryStore::new("CS", catalog());
        {
            let mut view = CatalogView::load(&mut store).unwrap();
            view.enroll("CS102").unwrap();

            assert!(view.student().is_enrolled("CS102"));
            assert_eq!(ids(&view.results(&SearchTerm::default())), vec!["CS101"]);
        }
        assert_eq!(store.calls, vec![("enroll", "CS102".to_string())]);
    }

    #[test]
    fn other_department_is_rejected_without_store_call() {
        let mut store = MemoryStore::new("CS", catalog());
        {
            let mut view = CatalogView::load(&mut store).unwrap();
            let err = view.enroll("MATH201").unwrap_err();
            assert!(matches!(
                err,
                AppError::MutationRejected(RejectReason::NotEligible)
            ));
        }
        assert!(store.calls.is_empty());
    }

    #[test]
    fn rejected_enroll_leaves_snapshot_untouched() {
        let mut store = MemoryStore::new("CS", catalog());
        store.reject_next = Some(RejectReason::CourseFull);
        {
            let mut view = CatalogView::load(&mut store).unwrap();
            let err = view.enroll("CS101").unwrap_err();
            assert!(matches!(err, AppError::MutationRejected(RejectReason::CourseFull)));

            assert!(!view.student().is_enrolled("CS101"));
            assert_eq!(
                ids(&view.results(&SearchTerm::default())),
                vec!["CS101", "CS102"]
            );
        }
        assert_eq!(store.calls.len(), 1);
    }

    #[test]
    fn unknown_course_is_left_to_the_store() {
        let mut store = MemoryStore::new("CS", catalog());
        {
            let mut view = CatalogView::load(&mut store).unwrap();
            let err = view.enroll("NOPE").unwrap_err();
            assert!(matches!(
                err,
                AppError::MutationRejected(RejectReason::UnknownCourse)
            ));
        }
        assert_eq!(store.calls, vec![("enroll", "NOPE".to_string())]);
    }
}
