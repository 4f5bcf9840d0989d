//! Storage layer for OnSplit
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The draft store is a separate injectable seam so the wizard
//! controller can be tested without touching the filesystem.

pub mod draft;
pub mod expenses;
pub mod file_io;
pub mod roster;

pub use draft::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use roster::RosterRepository;

use crate::config::paths::OnSplitPaths;
use crate::error::OnSplitError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: OnSplitPaths,
    pub roster: RosterRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: OnSplitPaths) -> Result<Self, OnSplitError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            roster: RosterRepository::new(paths.members_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &OnSplitPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), OnSplitError> {
        self.roster.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), OnSplitError> {
        self.roster.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Create a draft store for the configured draft path
    pub fn draft_store(&self) -> FileDraftStore {
        FileDraftStore::new(self.paths.draft_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert_eq!(storage.roster.count().unwrap(), 0);
        assert_eq!(storage.expenses.count().unwrap(), 0);
    }
}
