use chrono::NaiveDate;
use serde::Serialize;

/// One recorded session for a (student, course) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    pub course_id: String,
    pub date: NaiveDate, // ⇔ attendance.session_date (TEXT "YYYY-MM-DD")
    pub present: bool,
}

impl AttendanceRecord {
    pub fn new(course_id: &str, date: NaiveDate, present: bool) -> Self {
        Self {
            course_id: course_id.to_string(),
            date,
            present,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
