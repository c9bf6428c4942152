//! # Schema Validation
//!
//! Two layers of validation over a decoded document:
//!
//! 1. [`check_schema`] — the hard gate the render pipeline runs before
//!    anything else: `schema` and `version` must be present and equal the
//!    accepted literals exactly.
//! 2. [`validate_document`] — a non-failing diagnostic sweep used by
//!    `fmb validate`. Collects every problem into a [`ValidationReport`]
//!    instead of stopping at the first one; shape violations are errors,
//!    while entries the renderer would silently skip (parameters missing
//!    a mandatory field) are warnings.

use serde_json::Value;

use fmb_core::InventoryError;

use crate::{FMB_SCHEMA, FMB_SCHEMA_VERSION};

// ---------------------------------------------------------------------------
// Validation Report
// ---------------------------------------------------------------------------

/// Result of a diagnostic sweep over a decoded document.
#[derive(Debug)]
pub struct ValidationReport {
    /// Whether the document would be accepted by the render pipeline.
    pub is_valid: bool,
    /// Validation errors, if any.
    pub errors: Vec<String>,
    /// Validation warnings (non-fatal).
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a successful report.
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error. Marks the report as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning (does not affect validity).
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

// ---------------------------------------------------------------------------
// Schema Gate
// ---------------------------------------------------------------------------

/// Gate a decoded document on the expected schema identifier and version.
///
/// Pure predicate plus pass-through: the document is not mutated, and a
/// document that passes is treated as validated by the rest of the
/// pipeline.
///
/// # Errors
///
/// - [`InventoryError::SchemaMissing`] when `schema` or `version` is
///   absent.
/// - [`InventoryError::SchemaMismatch`] when either differs from the
///   accepted literal; the error carries both expected and actual values.
pub fn check_schema(document: &Value) -> Result<(), InventoryError> {
    expect_field(document, "schema", FMB_SCHEMA)?;
    expect_field(document, "version", FMB_SCHEMA_VERSION)
}

fn expect_field(
    document: &Value,
    field: &'static str,
    expected: &'static str,
) -> Result<(), InventoryError> {
    let value = document
        .get(field)
        .ok_or(InventoryError::SchemaMissing(field))?;
    // A non-string value can never equal the expected literal; report it
    // in its JSON text form.
    let actual = match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    };
    if actual != expected {
        return Err(InventoryError::SchemaMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Diagnostic Sweep
// ---------------------------------------------------------------------------

/// Sweep a decoded document and collect every problem found.
///
/// Checks, in order:
/// - the document is a JSON object;
/// - the schema/version gate ([`check_schema`]);
/// - each list section (`users`, `devices`, `species`, `parameters`,
///   `plots`) is an array when present, and its entries are objects;
/// - each plot's `trees` field is an array of objects when present;
/// - parameters carry `name`, `value`, and `type` (missing ones are
///   warnings — the renderer skips those entries).
pub fn validate_document(document: &Value) -> ValidationReport {
    let mut report = ValidationReport::ok();

    if !document.is_object() {
        report.add_error("document must be a JSON object".to_string());
        return report;
    }

    if let Err(e) = check_schema(document) {
        report.add_error(e.to_string());
    }

    for section in ["users", "devices", "species"] {
        check_object_list(&mut report, document.get(section), section);
    }

    match document.get("parameters") {
        None => {}
        Some(Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                if !entry.is_object() {
                    report.add_error(format!("parameters[{i}] is not an object"));
                    continue;
                }
                let incomplete: Vec<&str> = ["name", "value", "type"]
                    .into_iter()
                    .filter(|f| entry.get(f).map_or(true, Value::is_null))
                    .collect();
                if !incomplete.is_empty() {
                    report.add_warning(format!(
                        "parameters[{i}] is missing {} and will not be rendered",
                        incomplete.join(", ")
                    ));
                }
            }
        }
        Some(_) => report.add_error("parameters must be an array".to_string()),
    }

    match document.get("plots") {
        None => {}
        Some(Value::Array(plots)) => {
            for (i, plot) in plots.iter().enumerate() {
                if !plot.is_object() {
                    report.add_error(format!("plots[{i}] is not an object"));
                    continue;
                }
                match plot.get("trees") {
                    None => {}
                    Some(Value::Array(trees)) => {
                        for (j, tree) in trees.iter().enumerate() {
                            if !tree.is_object() {
                                report
                                    .add_error(format!("plots[{i}].trees[{j}] is not an object"));
                            }
                        }
                    }
                    Some(_) => {
                        report.add_error(format!("plots[{i}].trees must be an array"));
                    }
                }
            }
        }
        Some(_) => report.add_error("plots must be an array".to_string()),
    }

    report
}

fn check_object_list(report: &mut ValidationReport, value: Option<&Value>, section: &str) {
    match value {
        None => {}
        Some(Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                if !entry.is_object() {
                    report.add_error(format!("{section}[{i}] is not an object"));
                }
            }
        }
        Some(_) => report.add_error(format!("{section} must be an array")),
    }
}
