//! # fmb CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity flags select
//! the tracing filter level.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fmb_cli::dump::{run_dump, DumpArgs};
use fmb_cli::render::{run_render, RenderArgs};
use fmb_cli::validate::{run_validate, ValidateArgs};

/// FMB forest-inventory toolchain.
///
/// Reads FMB_load JSON field-data documents, validates them against the
/// expected schema, and renders indented plain-text field reports.
#[derive(Parser, Debug)]
#[command(name = "fmb", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate an input document and render it as a plain-text report.
    Render(RenderArgs),

    /// Check an input document against the FMB_load schema without
    /// writing anything.
    Validate(ValidateArgs),

    /// Pretty-print the raw JSON document without schema checks.
    Dump(DumpArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => run_render(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Dump(args) => run_dump(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
