//! Roster member model
//!
//! Members are supplied by the group-management side of the product; the
//! wizard only references them by id when computing shares.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// A member of the expense-splitting group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Display name
    pub name: String,

    /// Avatar reference (URL or local path)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// When the member was added to the roster
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    /// Create a new member with an avatar reference
    pub fn with_avatar(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        let mut member = Self::new(name);
        member.avatar = Some(avatar.into());
        member
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member() {
        let member = Member::new("Alice");
        assert_eq!(member.name, "Alice");
        assert!(member.avatar.is_none());
    }

    #[test]
    fn test_member_with_avatar() {
        let member = Member::with_avatar("Bob", "https://example.com/bob.png");
        assert_eq!(member.avatar.as_deref(), Some("https://example.com/bob.png"));
    }

    #[test]
    fn test_serialization_omits_absent_avatar() {
        let member = Member::new("Carol");
        let json = serde_json::to_string(&member).unwrap();
        assert!(!json.contains("avatar"));

        let deserialized: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(member.id, deserialized.id);
        assert_eq!(member.name, deserialized.name);
    }
}
