//! # Document Loader
//!
//! Reads an FMB_load JSON document from disk. The loader only gets the
//! bytes into memory and decoded; schema gating happens afterwards in
//! [`crate::validate`].

use std::path::Path;

use serde_json::Value;

use fmb_core::InventoryError;

/// Load an inventory document from `path`.
///
/// Verifies the path exists, reads the full contents as UTF-8 text, and
/// decodes them as JSON. The result is untyped at this stage.
///
/// # Errors
///
/// - [`InventoryError::FileNotFound`] when the path does not exist.
/// - [`InventoryError::Read`] when the file exists but cannot be read.
/// - [`InventoryError::MalformedInput`] when the contents are not valid
///   JSON; carries the parser diagnostic.
pub fn load_document(path: &Path) -> Result<Value, InventoryError> {
    if !path.exists() {
        return Err(InventoryError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| InventoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read input document");

    serde_json::from_str(&text).map_err(|e| InventoryError::MalformedInput(e.to_string()))
}
