//! Flat rows describing the enrolled courses, used by `export`.

use crate::core::enrolled::EnrolledEntry;
use crate::core::attendance::AttendanceStatus;
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CourseReportRow {
    pub course_id: String,
    pub code: String,
    pub name: String,
    pub faculty: String,
    pub department: String,
    pub semester: u32,
    pub credits: u32,
    pub attended: usize,
    pub sessions: usize,
    pub attendance_percent: u8,
    pub status: AttendanceStatus,
}

pub fn headers() -> [&'static str; 11] {
    [
        "course_id",
        "code",
        "name",
        "faculty",
        "department",
        "semester",
        "credits",
        "attended",
        "sessions",
        "attendance_percent",
        "status",
    ]
}

impl From<&EnrolledEntry<'_>> for CourseReportRow {
    fn from(e: &EnrolledEntry<'_>) -> Self {
        Self {
            course_id: e.course.id.clone(),
            code: e.course.code.clone(),
            name: e.course.name.clone(),
            faculty: e.course.faculty.clone(),
            department: e.course.department.clone(),
            semester: e.course.semester,
            credits: e.course.credits,
            attended: e.attendance.present,
            sessions: e.attendance.total,
            attendance_percent: e.attendance.percent,
            status: e.status,
        }
    }
}

impl CourseReportRow {
    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.course_id.clone(),
            self.code.clone(),
            self.name.clone(),
            self.faculty.clone(),
            self.department.clone(),
            self.semester.to_string(),
            self.credits.to_string(),
            self.attended.to_string(),
            self.sessions.to_string(),
            self.attendance_percent.to_string(),
            self.status.label().to_string(),
        ]
    }
}
