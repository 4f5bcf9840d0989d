//! Member roster repository for JSON storage
//!
//! Manages loading and saving roster members to members.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::OnSplitError;
use crate::models::{Member, MemberId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable roster data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct RosterData {
    members: Vec<Member>,
}

/// Repository for roster persistence
pub struct RosterRepository {
    path: PathBuf,
    data: RwLock<HashMap<MemberId, Member>>,
}

impl RosterRepository {
    /// Create a new roster repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load members from disk
    pub fn load(&self) -> Result<(), OnSplitError> {
        let file_data: RosterData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for member in file_data.members {
            data.insert(member.id, member);
        }

        Ok(())
    }

    /// Save members to disk
    pub fn save(&self) -> Result<(), OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let file_data = RosterData { members };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> Result<Option<Member>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all members, sorted by name
    pub fn get_all(&self) -> Result<Vec<Member>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut members: Vec<_> = data.values().cloned().collect();
        members.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(members)
    }

    /// Get a member by exact name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Member>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let wanted = name.trim().to_lowercase();
        Ok(data
            .values()
            .find(|m| m.name.to_lowercase() == wanted)
            .cloned())
    }

    /// Insert or update a member
    pub fn upsert(&self, member: Member) -> Result<(), OnSplitError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(member.id, member);
        Ok(())
    }

    /// Delete a member
    pub fn delete(&self, id: MemberId) -> Result<bool, OnSplitError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count members
    pub fn count(&self) -> Result<usize, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
