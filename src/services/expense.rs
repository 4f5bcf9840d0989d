//! Expense service
//!
//! Query layer over the committed-expense ledger.

use crate::error::{OnSplitError, OnSplitResult};
use crate::models::{Expense, ExpenseId};
use crate::storage::Storage;

/// Service for committed-expense queries
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List committed expenses, oldest first
    pub fn list(&self) -> OnSplitResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// List the most recent committed expenses, oldest of them first
    pub fn recent(&self, count: usize) -> OnSplitResult<Vec<Expense>> {
        let all = self.storage.expenses.get_all()?;
        let start = all.len().saturating_sub(count);
        Ok(all[start..].to_vec())
    }

    /// Look up an expense by id string
    pub fn get(&self, id: &str) -> OnSplitResult<Expense> {
        let parsed: ExpenseId = id
            .parse()
            .map_err(|_| OnSplitError::expense_not_found(id))?;

        self.storage
            .expenses
            .get(parsed)?
            .ok_or_else(|| OnSplitError::expense_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::OnSplitPaths;
    use crate::models::ExpenseDraft;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = OnSplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn commit_sample(storage: &Storage, title: &str) -> Expense {
        let mut draft = ExpenseDraft::default();
        draft.expense_data.title = title.to_string();
        let expense = Expense::from_draft(&draft, Uuid::new_v4());
        storage.expenses.upsert(expense.clone()).unwrap();
        storage.expenses.save().unwrap();
        expense
    }

    #[test]
    fn test_list_and_get() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = commit_sample(&storage, "Dinner");
        commit_sample(&storage, "Taxi");

        assert_eq!(service.list().unwrap().len(), 2);

        let found = service.get(&expense.id.as_uuid().to_string()).unwrap();
        assert_eq!(found.details.title, "Dinner");

        assert!(service.get("not-an-id").unwrap_err().is_not_found());
    }

    #[test]
    fn test_recent_takes_tail() {
        let (_temp, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        for i in 0..5 {
            commit_sample(&storage, &format!("Expense {}", i));
        }

        let recent = service.recent(2).unwrap();
        assert_eq!(recent.len(), 2);
    }
}
