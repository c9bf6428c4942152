//! # Render Subcommand
//!
//! The full pipeline: load the input document, gate it on the FMB_load
//! schema, render the plain-text field report, and persist it to the
//! configured output path.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use fmb_core::InventoryDocument;

/// Arguments for the `fmb render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the FMB_load JSON input document.
    pub input: PathBuf,

    /// Destination path for the rendered report.
    #[arg(long, short, default_value = crate::DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Execute the render subcommand.
pub fn run_render(args: &RenderArgs) -> Result<u8> {
    let value = fmb_load::load_document(&args.input)?;
    fmb_load::check_schema(&value)?;

    let document = InventoryDocument::from_value(&value)
        .with_context(|| format!("failed to interpret {}", args.input.display()))?;

    tracing::info!(
        users = document.users.len(),
        devices = document.devices.len(),
        species = document.species.len(),
        parameters = document.parameters.len(),
        plots = document.plots.len(),
        "document accepted"
    );

    let report = fmb_load::render_document(&document);
    fmb_load::write_report(&args.output, &report)?;

    println!("OK: report written to {}", args.output.display());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: PathBuf, output: PathBuf) -> RenderArgs {
        RenderArgs { input, output }
    }

    #[test]
    fn render_writes_the_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("resultado").join("report.txt");
        std::fs::write(
            &input,
            r#"{"schema": "FMB_load", "version": "1.0",
                "parameters": [{"name": "X", "value": "1", "type": "int"}]}"#,
        )
        .unwrap();

        let code = run_render(&args(input, output.clone())).unwrap();
        assert_eq!(code, 0);

        let report = std::fs::read_to_string(&output).unwrap();
        assert!(report.contains("Schema: FMB_load"));
        assert!(report.contains("Name: X"));
    }

    #[test]
    fn render_twice_overwrites_with_identical_content() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("report.txt");
        std::fs::write(
            &input,
            r#"{"schema": "FMB_load", "version": "1.0",
                "users": [{"login": "ana"}]}"#,
        )
        .unwrap();

        run_render(&args(input.clone(), output.clone())).unwrap();
        let first = std::fs::read_to_string(&output).unwrap();
        run_render(&args(input, output.clone())).unwrap();
        let second = std::fs::read_to_string(&output).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_rejects_wrong_schema_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("report.txt");
        std::fs::write(&input, r#"{"schema": "Other", "version": "1.0"}"#).unwrap();

        let err = run_render(&args(input, output.clone())).unwrap_err();
        assert!(format!("{err:#}").contains("FMB_load"));
        assert!(!output.exists());
    }

    #[test]
    fn render_rejects_missing_input_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.json");
        let output = dir.path().join("report.txt");

        let err = run_render(&args(input, output.clone())).unwrap_err();
        assert!(format!("{err:#}").contains("not found"));
        assert!(!output.exists());
    }

    #[test]
    fn render_rejects_out_of_shape_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        let output = dir.path().join("report.txt");
        std::fs::write(
            &input,
            r#"{"schema": "FMB_load", "version": "1.0", "users": ["bare"]}"#,
        )
        .unwrap();

        let err = run_render(&args(input, output.clone())).unwrap_err();
        assert!(format!("{err:#}").contains("interpret"));
        assert!(!output.exists());
    }
}
