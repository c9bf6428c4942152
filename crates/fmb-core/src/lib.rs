//! # fmb-core — Foundational Types for the FMB Toolchain
//!
//! Shared building blocks for the forest-inventory report pipeline:
//!
//! - [`document`] — the typed FMB_load document model (`InventoryDocument`
//!   and its nested `Record`/`Parameter`/`Plot`/`Tree` types).
//! - [`error`] — the [`InventoryError`] hierarchy covering every pipeline
//!   failure class, from a missing input file to a failed report write.
//!
//! The file-format pipeline itself (loading, schema gating, rendering,
//! writing) lives in the `fmb-load` crate; the `fmb` binary lives in
//! `fmb-cli`.

pub mod document;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use document::{InventoryDocument, Parameter, Plot, Record, Tree};
pub use error::InventoryError;
