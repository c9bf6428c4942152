//! # fmb-cli — CLI for the FMB Toolchain
//!
//! Provides the `fmb` command-line interface over the FMB_load pipeline.
//!
//! ## Subcommands
//!
//! - `fmb render <input>` — Load, validate, render, and persist the
//!   plain-text field report.
//! - `fmb validate <input>` — Diagnostic sweep only; writes nothing.
//! - `fmb dump <input>` — Pretty-printed JSON passthrough of the raw
//!   document, skipping the schema gate.
//!
//! ```bash
//! fmb render field-data.json
//! fmb render field-data.json --output reports/march.txt
//! fmb validate field-data.json
//! fmb dump field-data.json
//! ```

pub mod dump;
pub mod render;
pub mod validate;

/// Default destination for rendered reports, relative to the working
/// directory.
pub const DEFAULT_OUTPUT_PATH: &str = "resultado/FMB_load_sample.txt";
