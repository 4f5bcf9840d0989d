//! Activity entry data structures
//!
//! Defines the structure of wizard activity log entries: what happened,
//! to which step, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events the wizard emits over a draft's lifetime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WizardEvent {
    /// A fresh draft was started
    DraftStarted,
    /// A persisted draft was hydrated
    DraftResumed { step: String },
    /// A slice of the draft was updated
    SliceUpdated { step: String },
    /// Navigation moved forward
    StepAdvanced { from: String, to: String },
    /// Navigation moved backward
    SteppedBack { from: String, to: String },
    /// Navigation jumped to a visited step
    JumpedToStep { to: String },
    /// A step failed validation
    ValidationFailed { step: String, fields: Vec<String> },
    /// A settlement attempt was made
    SubmitAttempted { attempt: u32 },
    /// The settlement succeeded
    SubmitSucceeded { expense_id: String },
    /// The settlement failed after all attempts
    SubmitFailed { reason: String },
    /// The draft was abandoned via explicit cancel
    DraftCancelled,
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// What happened
    #[serde(flatten)]
    pub event: WizardEvent,
}

impl ActivityEntry {
    /// Create an entry stamped with the current time
    pub fn now(event: WizardEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_serialization() {
        let entry = ActivityEntry::now(WizardEvent::SliceUpdated {
            step: "details".to_string(),
        });
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["event"], "slice_updated");
        assert_eq!(json["step"], "details");
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_round_trip() {
        let entry = ActivityEntry::now(WizardEvent::StepAdvanced {
            from: "details".to_string(),
            to: "receipts".to_string(),
        });
        let json = serde_json::to_string(&entry).unwrap();
        let back: ActivityEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry.event, back.event);
    }
}
