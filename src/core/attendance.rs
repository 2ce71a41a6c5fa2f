//! Attendance aggregation for a single (student, course) pair.

use crate::models::Student;
use serde::Serialize;

/// Attendance below this percentage is flagged as at risk.
pub const DEFAULT_AT_RISK_THRESHOLD: u8 = 75;

/// Integer percentage of `present` over `total`, rounded to nearest with
/// ties away from zero. Zero sessions yield 0.
pub fn percentage(present: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let present = present.min(total) as u64;
    let total = total as u64;

    // round(100 * p / n) == floor((200 * p + n) / (2 * n)) for p, n >= 0
    ((200 * present + total) / (2 * total)) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    AtRisk,
    Satisfactory,
}

impl AttendanceStatus {
    pub fn classify(percent: u8, threshold: u8) -> Self {
        if percent < threshold {
            AttendanceStatus::AtRisk
        } else {
            AttendanceStatus::Satisfactory
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::AtRisk => "at risk",
            AttendanceStatus::Satisfactory => "satisfactory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub total: usize,
    pub percent: u8,
}

impl AttendanceSummary {
    pub fn for_course(student: &Student, course_id: &str) -> Self {
        let (present, total) = student
            .attendance_for(course_id)
            .fold((0, 0), |(p, t), r| (p + usize::from(r.present), t + 1));

        Self {
            present,
            total,
            percent: percentage(present, total),
        }
    }

    pub fn status(&self, threshold: u8) -> AttendanceStatus {
        AttendanceStatus::classify(self.percent, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceRecord;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, n).unwrap()
    }

    #[test]
    fn no_sessions_is_zero() {
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn three_of_four_is_75() {
        assert_eq!(percentage(3, 4), 75);
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(3, 8), 38); // 37.5
        assert_eq!(percentage(5, 8), 63); // 62.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(4, 4), 100);
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(
            AttendanceStatus::classify(74, DEFAULT_AT_RISK_THRESHOLD),
            AttendanceStatus::AtRisk
        );
        assert_eq!(
            AttendanceStatus::classify(75, DEFAULT_AT_RISK_THRESHOLD),
            AttendanceStatus::Satisfactory
        );
        assert_eq!(
            AttendanceStatus::classify(0, DEFAULT_AT_RISK_THRESHOLD),
            AttendanceStatus::AtRisk
        );
    }

    #[test]
    fn summary_only_counts_the_requested_course() {
        let student = Student {
            id: "s1".into(),
            name: "Ada".into(),
            department: "CS".into(),
            enrolled: BTreeSet::from(["CS101".to_string(), "CS102".to_string()]),
            attendance: vec![
                AttendanceRecord::new("CS101", day(1), true),
                AttendanceRecord::new("CS101", day(2), true),
                AttendanceRecord::new("CS102", day(2), false),
                AttendanceRecord::new("CS101", day(3), false),
                AttendanceRecord::new("CS101", day(4), true),
            ],
        };

        let s = AttendanceSummary::for_course(&student, "CS101");
        assert_eq!((s.present, s.total, s.percent), (3, 4, 75));
        assert_eq!(s.status(75), AttendanceStatus::Satisfactory);

        let s = AttendanceSummary::for_course(&student, "CS102");
        assert_eq!((s.present, s.total, s.percent), (0, 1, 0));

        let s = AttendanceSummary::for_course(&student, "CS999");
        assert_eq!((s.present, s.total, s.percent), (0, 0, 0));
        assert_eq!(s.status(75), AttendanceStatus::AtRisk);
    }
}
