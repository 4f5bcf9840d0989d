//! Draft persistence
//!
//! Exactly one in-progress draft is kept under a fixed path. Persistence
//! is best-effort: a corrupt or unreadable draft file hydrates as "no
//! draft" and write failures are swallowed, so the wizard session can
//! always continue in memory.

use std::fs;
use std::path::PathBuf;

use crate::error::{OnSplitError, OnSplitResult};
use crate::models::ExpenseDraft;

use super::file_io::write_json_atomic;

/// Persistence seam for the single in-progress draft
///
/// The surface is infallible on purpose: `load` treats corruption as
/// absence and `save`/`clear` degrade to a no-op on storage failure.
pub trait DraftStore {
    /// Return the previously saved draft, if any
    fn load(&self) -> Option<ExpenseDraft>;

    /// Overwrite the stored draft with `draft`
    fn save(&mut self, draft: &ExpenseDraft);

    /// Remove the stored draft; clearing an absent draft is a no-op
    fn clear(&mut self);
}

/// Draft store backed by a JSON file
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Create a store persisting to `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn try_load(&self) -> OnSplitResult<Option<ExpenseDraft>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            OnSplitError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let draft = serde_json::from_str(&contents).map_err(|e| {
            OnSplitError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        Ok(Some(draft))
    }

    fn try_save(&self, draft: &ExpenseDraft) -> OnSplitResult<()> {
        write_json_atomic(&self.path, draft)
    }

    fn try_clear(&self) -> OnSplitResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(OnSplitError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl DraftStore for FileDraftStore {
    fn load(&self) -> Option<ExpenseDraft> {
        // Corrupt or unreadable drafts start the wizard fresh
        self.try_load().ok().flatten()
    }

    fn save(&mut self, draft: &ExpenseDraft) {
        let _ = self.try_save(draft);
    }

    fn clear(&mut self) {
        let _ = self.try_clear();
    }
}

/// In-memory draft store for tests
///
/// Round-trips drafts through JSON so tests exercise the same
/// serialization path as the file store.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    saved: Option<String>,
}

impl MemoryDraftStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a draft
    pub fn with_draft(draft: &ExpenseDraft) -> Self {
        Self {
            saved: serde_json::to_string(draft).ok(),
        }
    }

    /// The raw persisted document, if any
    pub fn raw(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl DraftStore for MemoryDraftStore {
    fn load(&self) -> Option<ExpenseDraft> {
        self.saved
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    fn save(&mut self, draft: &ExpenseDraft) {
        if let Ok(json) = serde_json::to_string(draft) {
            self.saved = Some(json);
        }
    }

    fn clear(&mut self) {
        self.saved = None;
    }
}
