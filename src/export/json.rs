use crate::core::report::CourseReportRow;
use crate::errors::AppResult;
use std::path::Path;

/// Writes the enrolled-course report as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[CourseReportRow]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
