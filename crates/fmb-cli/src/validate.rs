//! # Validate Subcommand
//!
//! Diagnostic sweep over an input document without rendering or writing
//! anything. Errors and warnings are printed individually; the exit code
//! reflects whether the render pipeline would accept the document.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

/// Arguments for the `fmb validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the FMB_load JSON input document.
    pub input: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when the document is valid, 1 when it is not.
/// Load failures (missing file, malformed JSON) are hard errors.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let value = fmb_load::load_document(&args.input)?;
    let report = fmb_load::validate_document(&value);

    for warning in &report.warnings {
        println!("warning: {warning}");
    }
    for error in &report.errors {
        eprintln!("error: {error}");
    }

    if report.is_valid {
        println!("OK: {} is a valid FMB_load document", args.input.display());
        Ok(0)
    } else {
        eprintln!(
            "{}: {} error(s), {} warning(s)",
            args.input.display(),
            report.errors.len(),
            report.warnings.len()
        );
        Ok(1)
    }
}
