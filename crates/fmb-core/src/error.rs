//! # Inventory Error Types
//!
//! Structured errors for every stage of the FMB_load pipeline.
//! Uses `thiserror` for ergonomic error definitions with diagnostic context.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading, validating, rendering, and persisting an FMB_load
/// inventory document.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Input path does not exist.
    #[error("input file not found: {path}")]
    FileNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// Input exists but could not be read as UTF-8 text.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON.
    #[error("malformed JSON input: {0}")]
    MalformedInput(String),

    /// A required top-level field is absent.
    #[error("document is missing required field: {0}")]
    SchemaMissing(&'static str),

    /// A top-level field does not match its expected literal value.
    #[error("{field} mismatch: expected \"{expected}\", got \"{actual}\"")]
    SchemaMismatch {
        /// The top-level field that was compared.
        field: &'static str,
        /// The expected literal value.
        expected: &'static str,
        /// The value actually found in the document.
        actual: String,
    },

    /// The decoded value does not fit the typed document model.
    #[error("document does not match the FMB_load shape: {0}")]
    Document(String),

    /// Destination directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    DirectoryCreate {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Report could not be written.
    #[error("failed to write report {path}: {source}")]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
