use crate::core::confirm::Confirm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// Checks that the export target may be created or overwritten.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → asks `confirm`
pub(crate) fn ensure_writable(path: &Path, force: bool, confirm: &mut dyn Confirm) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite?", path.display());
    if confirm.confirm(&prompt) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".into(),
        ))
    }
}
