//! # Dump Subcommand
//!
//! Pretty-printed JSON passthrough of the raw input document. Unlike
//! `render`, the dump deliberately skips the schema gate so any valid
//! JSON file can be inspected. Output goes to stdout unless `--output`
//! is given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

/// Arguments for the `fmb dump` subcommand.
#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Path to the JSON input document.
    pub input: PathBuf,

    /// Write the formatted document to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the dump subcommand.
pub fn run_dump(args: &DumpArgs) -> Result<u8> {
    let value = fmb_load::load_document(&args.input)?;
    let pretty =
        serde_json::to_string_pretty(&value).context("failed to format document as JSON")?;

    match &args.output {
        Some(path) => {
            fmb_load::write_report(path, &pretty)?;
            println!("OK: document written to {}", path.display());
        }
        None => println!("{pretty}"),
    }
    Ok(0)
}
