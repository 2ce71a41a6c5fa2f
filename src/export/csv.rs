use crate::core::report::{CourseReportRow, headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Writes the enrolled-course report as CSV.
pub fn write_csv(path: &Path, rows: &[CourseReportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(headers())?;
    for row in rows {
        wtr.write_record(row.to_record())?;
    }

    wtr.flush()?;
    Ok(())
}
