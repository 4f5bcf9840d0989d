//! Roster service
//!
//! Provides business logic for managing the member roster the wizard
//! splits expenses across.

use crate::error::{OnSplitError, OnSplitResult};
use crate::models::{Member, MemberId};
use crate::storage::Storage;

/// Service for roster management
pub struct RosterService<'a> {
    storage: &'a Storage,
}

impl<'a> RosterService<'a> {
    /// Create a new roster service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a member to the roster
    pub fn add(&self, name: &str, avatar: Option<String>) -> OnSplitResult<Member> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OnSplitError::Validation(
                "Member name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.roster.get_by_name(name)?.is_some() {
            return Err(OnSplitError::Duplicate {
                entity_type: "Member",
                identifier: name.to_string(),
            });
        }

        let mut member = Member::new(name);
        member.avatar = avatar;

        self.storage.roster.upsert(member.clone())?;
        self.storage.roster.save()?;

        Ok(member)
    }

    /// List all members, sorted by name
    pub fn list(&self) -> OnSplitResult<Vec<Member>> {
        self.storage.roster.get_all()
    }

    /// Resolve a member by name or id string
    pub fn resolve(&self, name_or_id: &str) -> OnSplitResult<Member> {
        if let Some(member) = self.storage.roster.get_by_name(name_or_id)? {
            return Ok(member);
        }

        if let Ok(id) = name_or_id.parse::<MemberId>() {
            if let Some(member) = self.storage.roster.get(id)? {
                return Ok(member);
            }
        }

        Err(OnSplitError::member_not_found(name_or_id))
    }

    /// Resolve several comma-separated names or ids to member ids
    pub fn resolve_many(&self, names_or_ids: &str) -> OnSplitResult<Vec<MemberId>> {
        names_or_ids
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| self.resolve(s).map(|m| m.id))
            .collect()
    }

    /// Remove a member from the roster
    pub fn remove(&self, name_or_id: &str) -> OnSplitResult<Member> {
        let member = self.resolve(name_or_id)?;
        self.storage.roster.delete(member.id)?;
        self.storage.roster.save()?;
        Ok(member)
    }
}
