//! # fmb-load — The FMB_load File Format
//!
//! Implements the four stages of the inventory report pipeline:
//!
//! 1. [`loader`] — read an FMB_load JSON document from disk into an
//!    untyped `serde_json::Value`, failing fast on a missing path or
//!    malformed JSON.
//! 2. [`validate`] — gate the decoded document on the expected schema
//!    identifier and version, plus a non-failing diagnostic sweep used by
//!    `fmb validate`.
//! 3. [`render`] — turn the typed document into the indented plain-text
//!    field report.
//! 4. [`writer`] — persist the report, creating the destination directory
//!    as needed.
//!
//! The stages run strictly in sequence; a failure in any stage aborts the
//! run before the writer executes, so a previous report file is never
//! partially overwritten.

pub mod loader;
pub mod render;
pub mod validate;
pub mod writer;

// Re-export the stage entry points for ergonomic imports.
pub use loader::load_document;
pub use render::render_document;
pub use validate::{check_schema, validate_document, ValidationReport};
pub use writer::write_report;

/// Schema identifier accepted by the pipeline.
pub const FMB_SCHEMA: &str = "FMB_load";

/// Schema version accepted by the pipeline.
pub const FMB_SCHEMA_VERSION: &str = "1.0";
