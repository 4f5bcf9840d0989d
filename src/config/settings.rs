//! User settings for OnSplit
//!
//! Manages user preferences including currency display, default split
//! method, and the commit retry policy.

use serde::{Deserialize, Serialize};

use super::paths::OnSplitPaths;
use crate::error::OnSplitError;
use crate::models::SplitMethod;

/// User settings for OnSplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Split method preselected when a new draft reaches the split step
    #[serde(default)]
    pub default_split_method: SplitMethod,

    /// Maximum settlement commit attempts (first try included)
    #[serde(default = "default_commit_max_attempts")]
    pub commit_max_attempts: u32,

    /// Base backoff between commit retries, doubled per attempt
    #[serde(default = "default_commit_retry_base_ms")]
    pub commit_retry_base_ms: u64,

    /// Simulated settlement latency for the local gateway
    #[serde(default = "default_settlement_delay_ms")]
    pub settlement_delay_ms: u64,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_commit_max_attempts() -> u32 {
    3
}

fn default_commit_retry_base_ms() -> u64 {
    200
}

fn default_settlement_delay_ms() -> u64 {
    300
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_split_method: SplitMethod::default(),
            commit_max_attempts: default_commit_max_attempts(),
            commit_retry_base_ms: default_commit_retry_base_ms(),
            settlement_delay_ms: default_settlement_delay_ms(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &OnSplitPaths) -> Result<Self, OnSplitError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| OnSplitError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                OnSplitError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &OnSplitPaths) -> Result<(), OnSplitError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| OnSplitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| OnSplitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.commit_max_attempts, 3);
        assert_eq!(settings.commit_retry_base_ms, 200);
        assert_eq!(settings.default_split_method, SplitMethod::Equal);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnSplitPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.commit_max_attempts = 5;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.commit_max_attempts, 5);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();

        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.schema_version, 1);
        assert_eq!(loaded.commit_max_attempts, 3);
    }
}
