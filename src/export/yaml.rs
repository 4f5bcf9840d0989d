//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use crate::error::{OnSplitError, OnSplitResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> OnSplitResult<()> {
    let export = FullExport::from_storage(storage)?;

    // Add a header comment
    writeln!(writer, "# OnSplit Full Ledger Export")
        .map_err(|e| OnSplitError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| OnSplitError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| OnSplitError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| OnSplitError::Export(e.to_string()))?;

    // Serialize to YAML
    serde_yaml::to_writer(writer, &export).map_err(|e| OnSplitError::Export(e.to_string()))?;

    Ok(())
}
