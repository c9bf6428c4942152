//! # FMB_load Document Model
//!
//! Typed model for the FMB_load inventory document — the single entity the
//! toolchain operates on. A document carries the schema header, three
//! schema-less list sections (users, devices, species), the configuration
//! parameters, and the georeferenced plots with their nested trees.
//!
//! ```text
//! InventoryDocument
//! ├── schema / version
//! ├── users / devices / species ([Record] — schema-less ordered mappings)
//! ├── parameters ([Parameter])
//! └── plots ([Plot])
//!     └── trees ([Tree])
//! ```
//!
//! ## Parsing
//!
//! [`InventoryDocument::from_value`] converts an already-decoded
//! `serde_json::Value` into the typed model. All collection fields default
//! to empty when absent; unknown top-level keys are ignored. Field values
//! inside records, parameters, plots, and trees stay as raw
//! [`serde_json::Value`]s so the report renders them verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InventoryError;

/// A schema-less entry in the users/devices/species sections.
///
/// Keys keep their document insertion order (`serde_json` is built with
/// `preserve_order`), so the report enumerates fields exactly as they
/// appear in the input file.
pub type Record = serde_json::Map<String, Value>;

/// A named configuration value with type metadata and optional
/// descriptive fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name.
    pub name: Option<Value>,
    /// Parameter value.
    pub value: Option<Value>,
    /// Declared value type (e.g. `"int"`).
    #[serde(rename = "type")]
    pub param_type: Option<Value>,
    /// Allowed values, free-form.
    pub allowed_values: Option<Value>,
    /// Default value, free-form.
    pub default_value: Option<Value>,
    /// Human-readable description.
    pub description: Option<Value>,
    /// Parameter grouping label.
    pub group: Option<Value>,
}

impl Parameter {
    /// Whether the parameter carries all three mandatory fields.
    ///
    /// Only renderable parameters appear in the report; a `null` field
    /// counts as absent.
    pub fn is_renderable(&self) -> bool {
        [&self.name, &self.value, &self.param_type]
            .iter()
            .all(|f| f.as_ref().is_some_and(|v| !v.is_null()))
    }
}

/// A georeferenced forest-inventory sampling unit containing zero or
/// more trees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Inventory campaign type.
    pub inventory_type: Option<Value>,
    /// Farm code.
    pub farm_cod: Option<Value>,
    /// Stand code.
    pub stand_cod: Option<Value>,
    /// Plot code.
    pub plot_cod: Option<Value>,
    /// Plot area.
    pub plot_area: Option<Value>,
    /// Plot type.
    pub plot_type: Option<Value>,
    /// Latitude of the plot center.
    pub latitude: Option<Value>,
    /// Longitude of the plot center.
    pub longitude: Option<Value>,
    /// Trees measured in this plot.
    #[serde(default)]
    pub trees: Vec<Tree>,
}

/// A single measured tree inside a plot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    /// Field-sheet line number.
    pub line: Option<Value>,
    /// Tree number within the line.
    pub tree: Option<Value>,
    /// Diameter measurement.
    pub diameter: Option<Value>,
    /// Height measurement.
    pub height: Option<Value>,
    /// Quality classification code.
    pub quality_code: Option<Value>,
    /// Whether the tree is dominant.
    pub dominant: Option<Value>,
}

/// The FMB_load inventory document.
///
/// Constructed once per run from the decoded input file and discarded
/// after rendering; the pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    /// Schema identifier; must equal `"FMB_load"` for the document to be
    /// accepted.
    pub schema: Option<String>,
    /// Schema version; must equal `"1.0"` for the document to be accepted.
    pub version: Option<String>,
    /// User records.
    #[serde(default)]
    pub users: Vec<Record>,
    /// Device records.
    #[serde(default)]
    pub devices: Vec<Record>,
    /// Species records.
    #[serde(default)]
    pub species: Vec<Record>,
    /// Configuration parameters.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Sampling plots.
    #[serde(default)]
    pub plots: Vec<Plot>,
}

impl InventoryDocument {
    /// Convert an already-decoded JSON value into the typed model.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Document`] when the value does not fit
    /// the FMB_load shape (e.g. a list section holding non-object
    /// entries, or a `trees` field that is not an array).
    pub fn from_value(value: &Value) -> Result<Self, InventoryError> {
        serde_json::from_value(value.clone())
            .map_err(|e| InventoryError::Document(e.to_string()))
    }
}
