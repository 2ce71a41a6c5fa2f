use super::attendance::AttendanceRecord;
use std::collections::BTreeSet;

/// The student behind the current session, with everything the views need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub department: String,
    pub enrolled: BTreeSet<String>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Student {
    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.contains(course_id)
    }

    /// Attendance records belonging to one course, in recorded order.
    pub fn attendance_for<'a>(
        &'a self,
        course_id: &'a str,
    ) -> impl Iterator<Item = &'a AttendanceRecord> + 'a {
        self.attendance
            .iter()
            .filter(move |r| r.course_id == course_id)
    }
}
