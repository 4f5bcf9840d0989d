//! Receipt attachment records
//!
//! Only attachment metadata is ever persisted; the raw file bytes live in
//! memory for the current session and are stripped on serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ReceiptId;

/// A receipt attached to an in-progress expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier
    pub id: ReceiptId,

    /// Original file name
    pub name: String,

    /// Preview reference (source path or URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,

    /// Size of the attached file in bytes
    pub size_bytes: u64,

    /// When the receipt was attached
    pub attached_at: DateTime<Utc>,

    /// Raw file contents; never serialized
    #[serde(skip)]
    pub payload: Option<Vec<u8>>,
}

impl Receipt {
    /// Create a receipt record from attachment metadata
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            id: ReceiptId::new(),
            name: name.into(),
            preview: None,
            size_bytes,
            attached_at: Utc::now(),
            payload: None,
        }
    }

    /// Create a receipt carrying the file payload for this session
    pub fn with_payload(name: impl Into<String>, payload: Vec<u8>) -> Self {
        let mut receipt = Self::new(name, payload.len() as u64);
        receipt.payload = Some(payload);
        receipt
    }

    /// Set the preview reference
    pub fn preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_receipt() {
        let receipt = Receipt::new("dinner.jpg", 2048);
        assert_eq!(receipt.name, "dinner.jpg");
        assert_eq!(receipt.size_bytes, 2048);
        assert!(receipt.payload.is_none());
    }

    #[test]
    fn test_payload_sets_size() {
        let receipt = Receipt::with_payload("scan.png", vec![0u8; 100]);
        assert_eq!(receipt.size_bytes, 100);
        assert!(receipt.payload.is_some());
    }

    #[test]
    fn test_payload_stripped_on_serialization() {
        let receipt = Receipt::with_payload("scan.png", vec![1, 2, 3]).preview("scan.png");
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(!json.contains("payload"));

        let restored: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, receipt.id);
        assert_eq!(restored.size_bytes, 3);
        assert!(restored.payload.is_none());
    }
}
