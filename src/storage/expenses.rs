//! Committed-expense repository for JSON storage
//!
//! Manages the local expense ledger in expenses.json. Commits are
//! deduplicated by idempotency key so a retried settlement lands at
//! most once.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::OnSplitError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    expenses: Vec<Expense>,
}

/// Repository for committed-expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), OnSplitError> {
        let file_data: LedgerData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in file_data.expenses {
            data.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by_key(|e| e.committed_at);

        let file_data = LedgerData { expenses };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all expenses, most recent last
    pub fn get_all(&self) -> Result<Vec<Expense>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by_key(|e| e.committed_at);
        Ok(expenses)
    }

    /// Find an expense previously committed with this idempotency key
    pub fn find_by_idempotency_key(&self, key: Uuid) -> Result<Option<Expense>, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|e| e.idempotency_key == key)
            .cloned())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> Result<(), OnSplitError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, OnSplitError> {
        let data = self
            .data
            .read()
            .map_err(|e| OnSplitError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseDraft;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let repo = ExpenseRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_expense() -> Expense {
        let mut draft = ExpenseDraft::default();
        draft.expense_data.title = "Dinner".to_string();
        Expense::from_draft(&draft, Uuid::new_v4())
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample_expense();
        let id = expense.id;

        repo.upsert(expense).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.details.title, "Dinner");
    }

    #[test]
    fn test_find_by_idempotency_key() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample_expense();
        let key = expense.idempotency_key;
        repo.upsert(expense).unwrap();

        assert!(repo.find_by_idempotency_key(key).unwrap().is_some());
        assert!(repo.find_by_idempotency_key(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let expense = sample_expense();
        let id = expense.id;

        repo.upsert(expense).unwrap();
        repo.save().unwrap();

        let repo2 = ExpenseRepository::new(temp_dir.path().join("expenses.json"));
        repo2.load().unwrap();

        assert!(repo2.get(id).unwrap().is_some());
    }
}
