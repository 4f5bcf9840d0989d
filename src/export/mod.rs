//! Export module for OnSplit
//!
//! Provides committed-ledger export functionality in multiple formats:
//! - CSV: Per-expense and per-share rows (spreadsheet-compatible)
//! - JSON: For machine-readable full ledger export
//! - YAML: For human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_expenses_csv, export_shares_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
