//! # Report Rendering
//!
//! Deterministic, order-preserving construction of the plain-text field
//! report from a typed [`InventoryDocument`]. Rendering is a pure function
//! of the document: identical input yields byte-identical output.
//!
//! ## Layout
//!
//! - `Schema:` / `Version:` header lines when present.
//! - `Users:` / `Devices:` / `Species:` sections, only when non-empty;
//!   every record key renders as `  - <key>: <value>` in document
//!   insertion order.
//! - `Parameters:` and `Plots:` headers, always emitted. Parameters
//!   missing any of name/value/type are skipped; absent optional fields
//!   render as `N/A`. Plots emit their eight scalar fields
//!   unconditionally, then a nested `Trees:` block when non-empty.
//! - A 50-dash separator line closes each record, parameter, and tree.

use serde_json::Value;

use fmb_core::{InventoryDocument, Parameter, Plot, Record, Tree};

/// Width of the separator line emitted after each rendered entry.
const SEPARATOR_WIDTH: usize = 50;

/// Placeholder for absent (or `null`) labeled fields.
const MISSING: &str = "N/A";

/// Render the full report for a validated document.
pub fn render_document(document: &InventoryDocument) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(schema) = &document.schema {
        lines.push(format!("Schema: {schema}"));
    }
    if let Some(version) = &document.version {
        lines.push(format!("Version: {version}"));
    }

    render_records(&mut lines, "Users", &document.users);
    render_records(&mut lines, "Devices", &document.devices);
    render_records(&mut lines, "Species", &document.species);
    render_parameters(&mut lines, &document.parameters);
    render_plots(&mut lines, &document.plots);

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Render a schema-less list section. Absent or empty lists produce no
/// output, not even the section header.
fn render_records(lines: &mut Vec<String>, title: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }
    lines.push(format!("{title}:"));
    for record in records {
        for (key, value) in record {
            lines.push(format!("  - {key}: {}", display_value(value)));
        }
        lines.push(separator());
    }
}

fn render_parameters(lines: &mut Vec<String>, parameters: &[Parameter]) {
    lines.push("Parameters:".to_string());
    for param in parameters.iter().filter(|p| p.is_renderable()) {
        lines.push(format!("  Name: {}", labeled(&param.name)));
        lines.push(format!("  Value: {}", labeled(&param.value)));
        lines.push(format!("  Type: {}", labeled(&param.param_type)));
        lines.push(format!("  Allowed Values: {}", labeled(&param.allowed_values)));
        lines.push(format!("  Default Value: {}", labeled(&param.default_value)));
        lines.push(format!("  Description: {}", labeled(&param.description)));
        lines.push(format!("  Group: {}", labeled(&param.group)));
        lines.push(separator());
    }
}

fn render_plots(lines: &mut Vec<String>, plots: &[Plot]) {
    lines.push("Plots:".to_string());
    for plot in plots {
        lines.push(format!("  Inventory Type: {}", labeled(&plot.inventory_type)));
        lines.push(format!("  Farm Code: {}", labeled(&plot.farm_cod)));
        lines.push(format!("  Stand Code: {}", labeled(&plot.stand_cod)));
        lines.push(format!("  Plot Code: {}", labeled(&plot.plot_cod)));
        lines.push(format!("  Plot Area: {}", labeled(&plot.plot_area)));
        lines.push(format!("  Plot Type: {}", labeled(&plot.plot_type)));
        lines.push(format!("  Latitude: {}", labeled(&plot.latitude)));
        lines.push(format!("  Longitude: {}", labeled(&plot.longitude)));

        if !plot.trees.is_empty() {
            lines.push("  Trees:".to_string());
            for tree in &plot.trees {
                render_tree(lines, tree);
            }
        }
    }
}

fn render_tree(lines: &mut Vec<String>, tree: &Tree) {
    lines.push(format!("    Line: {}", labeled(&tree.line)));
    lines.push(format!("    Tree: {}", labeled(&tree.tree)));
    lines.push(format!("    Diameter: {}", labeled(&tree.diameter)));
    lines.push(format!("    Height: {}", labeled(&tree.height)));
    lines.push(format!("    Quality Code: {}", labeled(&tree.quality_code)));
    lines.push(format!("    Dominant: {}", labeled(&tree.dominant)));
    lines.push(separator());
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Display a scalar for a labeled field: absent and explicit `null` both
/// collapse to the `N/A` placeholder.
fn labeled(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING.to_string(),
        Some(v) => display_value(v),
    }
}

/// Display a JSON value verbatim: strings bare, numbers and booleans in
/// their JSON text form, composites as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> InventoryDocument {
        InventoryDocument::from_value(&value).unwrap()
    }

    #[test]
    fn minimal_document_with_one_parameter() {
        let report = render_document(&doc(json!({
            "schema": "FMB_load",
            "version": "1.0",
            "parameters": [{"name": "X", "value": "1", "type": "int"}]
        })));

        assert!(report.contains("Schema: FMB_load"));
        assert!(report.contains("Version: 1.0"));
        assert!(report.contains("Parameters:"));
        assert!(report.contains("Name: X"));
        assert!(report.contains("Value: 1"));
        assert!(report.contains("Type: int"));
        assert!(report.contains("Allowed Values: N/A"));
        assert!(report.contains("Default Value: N/A"));
        assert!(report.contains("Description: N/A"));
        assert!(report.contains("Group: N/A"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let document = doc(json!({
            "schema": "FMB_load",
            "version": "1.0",
            "users": [{"login": "ana", "role": "chief"}],
            "plots": [{"farmCod": "F01", "trees": [{"line": 1}]}]
        }));
        assert_eq!(render_document(&document), render_document(&document));
    }

    #[test]
    fn empty_sections_render_no_header_except_parameters_and_plots() {
        let report = render_document(&doc(json!({
            "schema": "FMB_load",
            "version": "1.0"
        })));
        assert!(!report.contains("Users:"));
        assert!(!report.contains("Devices:"));
        assert!(!report.contains("Species:"));
        assert!(report.contains("Parameters:"));
        assert!(report.contains("Plots:"));
    }

    #[test]
    fn missing_header_fields_render_no_header_lines() {
        let report = render_document(&doc(json!({})));
        assert!(!report.contains("Schema:"));
        assert!(!report.contains("Version:"));
        // The always-on sections are still there.
        assert!(report.starts_with("Parameters:\nPlots:\n"));
    }

    #[test]
    fn record_keys_render_in_insertion_order_with_dash_prefix() {
        let report = render_document(&doc(json!({
            "users": [{"zeta": "z", "alpha": "a"}]
        })));
        let zeta = report.find("  - zeta: z").unwrap();
        let alpha = report.find("  - alpha: a").unwrap();
        assert!(zeta < alpha, "keys must keep document order");
    }

    #[test]
    fn each_record_ends_with_a_separator() {
        let report = render_document(&doc(json!({
            "devices": [{"id": 1}, {"id": 2}]
        })));
        let separator = "-".repeat(50);
        assert_eq!(report.matches(&separator).count(), 2);
    }

    #[test]
    fn all_three_generic_sections_render_in_fixed_order() {
        let report = render_document(&doc(json!({
            "species": [{"code": "PT"}],
            "devices": [{"id": 9}],
            "users": [{"login": "rui"}]
        })));
        let users = report.find("Users:").unwrap();
        let devices = report.find("Devices:").unwrap();
        let species = report.find("Species:").unwrap();
        assert!(users < devices && devices < species);
    }

    #[test]
    fn incomplete_parameters_are_skipped() {
        let report = render_document(&doc(json!({
            "parameters": [
                {"name": "X", "value": "1"},
                {"name": "Y", "value": "2", "type": "int"}
            ]
        })));
        assert!(!report.contains("Name: X"));
        assert!(report.contains("Name: Y"));
    }

    #[test]
    fn plot_fields_render_unconditionally_with_na_fallback() {
        let report = render_document(&doc(json!({
            "plots": [{"farmCod": "F01"}]
        })));
        assert!(report.contains("  Farm Code: F01"));
        assert!(report.contains("  Inventory Type: N/A"));
        assert!(report.contains("  Latitude: N/A"));
        assert!(!report.contains("Trees:"));
    }

    #[test]
    fn tree_renders_all_six_fields_then_separator() {
        let report = render_document(&doc(json!({
            "plots": [{
                "farmCod": "F01",
                "trees": [{"line": 1, "tree": 2, "diameter": 30, "height": 15,
                           "qualityCode": "A", "dominant": true}]
            }]
        })));
        let expected = format!(
            "  Trees:\n    Line: 1\n    Tree: 2\n    Diameter: 30\n    Height: 15\n    Quality Code: A\n    Dominant: true\n{}",
            "-".repeat(50)
        );
        assert!(report.contains(&expected));
    }

    #[test]
    fn scalar_values_render_verbatim() {
        let report = render_document(&doc(json!({
            "users": [{"active": true, "count": 12, "ratio": 0.5, "note": null}]
        })));
        assert!(report.contains("  - active: true"));
        assert!(report.contains("  - count: 12"));
        assert!(report.contains("  - ratio: 0.5"));
        assert!(report.contains("  - note: null"));
    }

    #[test]
    fn composite_record_values_render_as_compact_json() {
        let report = render_document(&doc(json!({
            "devices": [{"tags": ["gps", "tablet"]}]
        })));
        assert!(report.contains(r#"  - tags: ["gps","tablet"]"#));
    }

    #[test]
    fn null_labeled_field_collapses_to_na() {
        let report = render_document(&doc(json!({
            "parameters": [{"name": "X", "value": "1", "type": "int",
                            "description": null}]
        })));
        assert!(report.contains("Description: N/A"));
    }

    #[test]
    fn report_ends_with_a_newline() {
        let report = render_document(&doc(json!({"schema": "FMB_load"})));
        assert!(report.ends_with('\n'));
        assert!(!report.ends_with("\n\n"));
    }
}
