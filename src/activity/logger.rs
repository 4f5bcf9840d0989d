//! Activity logger for the append-only wizard activity log
//!
//! Each entry is written as a single JSON line and flushed immediately.
//! Wizard callers treat logging as best-effort; the fallible surface is
//! still exposed for tooling that wants to read the log back.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{OnSplitError, OnSplitResult};

use super::entry::ActivityEntry;

/// Handles writing activity entries to the log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one entry.
pub struct ActivityLogger {
    /// Path to the activity log file
    log_path: PathBuf,
}

impl ActivityLogger {
    /// Create a new ActivityLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Log an activity entry
    ///
    /// Appends the entry as a JSON line and flushes immediately.
    pub fn log(&self, entry: &ActivityEntry) -> OnSplitResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| OnSplitError::Io(format!("Failed to open activity log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| OnSplitError::Json(format!("Failed to serialize activity entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| OnSplitError::Io(format!("Failed to write activity entry: {}", e)))?;

        file.flush()
            .map_err(|e| OnSplitError::Io(format!("Failed to flush activity log: {}", e)))?;

        Ok(())
    }

    /// Read all activity entries from the log file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> OnSplitResult<Vec<ActivityEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| OnSplitError::Io(format!("Failed to open activity log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                OnSplitError::Io(format!(
                    "Failed to read activity log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: ActivityEntry = serde_json::from_str(&line).map_err(|e| {
                OnSplitError::Json(format!(
                    "Failed to parse activity entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> OnSplitResult<Vec<ActivityEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Check if the activity log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the activity log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::entry::WizardEvent;
    use tempfile::TempDir;

    fn create_test_logger() -> (ActivityLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("activity.log");
        let logger = ActivityLogger::new(log_path);
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = ActivityEntry::now(WizardEvent::DraftStarted);

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, WizardEvent::DraftStarted);
    }

    #[test]
    fn test_multiple_entries_in_order() {
        let (logger, _temp) = create_test_logger();

        for attempt in 1..=3 {
            logger
                .log(&ActivityEntry::now(WizardEvent::SubmitAttempted { attempt }))
                .unwrap();
        }

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[2].event,
            WizardEvent::SubmitAttempted { attempt: 3 }
        );
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for attempt in 1..=10 {
            logger
                .log(&ActivityEntry::now(WizardEvent::SubmitAttempted { attempt }))
                .unwrap();
        }

        let recent = logger.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(
            recent[1].event,
            WizardEvent::SubmitAttempted { attempt: 10 }
        );
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_survives_reopen() {
        let (logger, temp) = create_test_logger();

        logger
            .log(&ActivityEntry::now(WizardEvent::DraftStarted))
            .unwrap();

        let logger2 = ActivityLogger::new(temp.path().join("activity.log"));
        let entries = logger2.read_all().unwrap();
        assert_eq!(entries.len(), 1);
    }
}
