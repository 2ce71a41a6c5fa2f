use super::{ExportFormat, notify_export_success};
use crate::core::confirm::Confirm;
use crate::core::enrolled::EnrollmentView;
use crate::core::report::CourseReportRow;
use crate::core::search::SearchTerm;
use crate::core::store::{CourseStore, SessionContext};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Report rows for every enrolled course, in catalog order.
    pub fn rows<S: CourseStore + SessionContext>(
        store: &mut S,
        threshold: u8,
    ) -> AppResult<Vec<CourseReportRow>> {
        let view = EnrollmentView::load(store, threshold)?;
        let listing = view.results(&SearchTerm::default());
        Ok(listing.items().iter().map(CourseReportRow::from).collect())
    }

    /// Export the enrolled-course attendance report.
    ///
    /// `file` must be an absolute path; an existing file is only replaced
    /// with `force` or after `confirm` approves. Returns the row count.
    pub fn export<S: CourseStore + SessionContext>(
        store: &mut S,
        threshold: u8,
        format: ExportFormat,
        file: &str,
        force: bool,
        confirm: &mut dyn Confirm,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force, confirm)?;

        let rows = Self::rows(store, threshold)?;

        match format {
            ExportFormat::Csv => super::csv::write_csv(&path, &rows)?,
            ExportFormat::Json => super::json::write_json(&path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::confirm::AssumeYes;
    use crate::core::store::memory::MemoryStore;
    use crate::models::AttendanceRecord;
    use crate::models::course::sample;
    use chrono::NaiveDate;
    use std::env;
    use std::fs;

    struct Decline;
    impl Confirm for Decline {
        fn confirm(&mut self, _prompt: &str) -> bool {
            false
        }
    }

    fn store() -> MemoryStore {
        let d = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        MemoryStore::new(
            "CS",
            vec![
                sample("CS101", "Intro", "CS", "Dr. Hopper"),
                sample("CS102", "Data Structures", "CS", "Dr. Knuth"),
            ],
        )
        .with_enrolled(&["CS102"])
        .with_attendance(vec![
            AttendanceRecord::new("CS102", d, true),
            AttendanceRecord::new("CS102", d, false),
        ])
    }

    #[test]
    fn rows_describe_enrolled_courses() {
        let rows = ExportLogic::rows(&mut store(), 75).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].course_id, "CS102");
        assert_eq!((rows[0].attended, rows[0].sessions), (1, 2));
        assert_eq!(rows[0].attendance_percent, 50);
        assert_eq!(rows[0].to_record().last().unwrap(), "at risk");
    }

    #[test]
    fn relative_path_is_refused() {
        let err = ExportLogic::export(
            &mut store(),
            75,
            ExportFormat::Csv,
            "report.csv",
            true,
            &mut AssumeYes,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }

    #[test]
    fn existing_file_kept_when_declined() {
        let path = env::temp_dir().join("coursedesk_export_declined.json");
        fs::write(&path, "keep me").unwrap();

        let err = ExportLogic::export(
            &mut store(),
            75,
            ExportFormat::Json,
            &path.to_string_lossy(),
            false,
            &mut Decline,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        let n = ExportLogic::export(
            &mut store(),
            75,
            ExportFormat::Json,
            &path.to_string_lossy(),
            true,
            &mut Decline,
        )
        .unwrap();
        assert_eq!(n, 1);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json[0]["status"], "at_risk");
        fs::remove_file(&path).ok();
    }
}
