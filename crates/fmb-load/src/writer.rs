//! # Report Writer
//!
//! Persists the rendered report. The destination directory is created
//! recursively when missing; an existing report file at the destination is
//! overwritten whole. The writer is the last pipeline stage, so a failure
//! anywhere earlier leaves a previous report untouched.

use std::path::Path;

use fmb_core::InventoryError;

/// Write `report` to `path`, creating the parent directory if needed.
///
/// # Errors
///
/// - [`InventoryError::DirectoryCreate`] when the parent directory cannot
///   be created.
/// - [`InventoryError::Write`] when the file itself cannot be written.
pub fn write_report(path: &Path, report: &str) -> Result<(), InventoryError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| InventoryError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    std::fs::write(path, report).map_err(|source| InventoryError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = report.len(), "wrote report");
    Ok(())
}
