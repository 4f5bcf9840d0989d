//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::{OnSplitError, OnSplitResult};
use crate::models::{Expense, Member};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All roster members
    pub members: Vec<Member>,

    /// All committed expenses
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of members
    pub member_count: usize,

    /// Total number of expenses
    pub expense_count: usize,
}

impl FullExport {
    /// Build an export snapshot from storage
    pub fn from_storage(storage: &Storage) -> OnSplitResult<Self> {
        let members = storage.roster.get_all()?;
        let expenses = storage.expenses.get_all()?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                member_count: members.len(),
                expense_count: expenses.len(),
            },
            members,
            expenses,
        })
    }
}

/// Export the full ledger to JSON format
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> OnSplitResult<()> {
    let export = FullExport::from_storage(storage)?;

    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| OnSplitError::Export(e.to_string()))?;

    Ok(())
}
