//! Path management for OnSplit
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `ONSPLIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/onsplit` or `~/.config/onsplit`
//! 3. Windows: `%APPDATA%\onsplit`

use std::path::PathBuf;

use crate::error::OnSplitError;

/// Manages all paths used by OnSplit
#[derive(Debug, Clone)]
pub struct OnSplitPaths {
    /// Base directory for all OnSplit data
    base_dir: PathBuf,
}

impl OnSplitPaths {
    /// Create a new OnSplitPaths instance
    ///
    /// Path resolution:
    /// 1. `ONSPLIT_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/onsplit` or `~/.config/onsplit`
    /// 3. Windows: `%APPDATA%\onsplit`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, OnSplitError> {
        let base_dir = if let Ok(custom) = std::env::var("ONSPLIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create OnSplitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/onsplit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/onsplit/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the wizard activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Get the path to the in-progress expense draft
    pub fn draft_file(&self) -> PathBuf {
        self.data_dir().join("draft.json")
    }

    /// Get the path to members.json (the roster)
    pub fn members_file(&self) -> PathBuf {
        self.data_dir().join("members.json")
    }

    /// Get the path to expenses.json (the committed ledger)
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/onsplit/)
    /// - Data directory (~/.config/onsplit/data/)
    pub fn ensure_directories(&self) -> Result<(), OnSplitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| OnSplitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| OnSplitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if OnSplit has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, OnSplitError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("onsplit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, OnSplitError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| OnSplitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("onsplit"))
}
