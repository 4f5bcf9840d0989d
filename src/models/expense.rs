//! Committed expense records
//!
//! Built from a finalized draft at submit time and appended to the local
//! ledger by the settlement gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::draft::{ExpenseDetails, ExpenseDraft};
use super::ids::ExpenseId;
use super::line_item::LineItem;
use super::receipt::Receipt;
use super::split::SplitData;

/// A settled, committed expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Title, amount, category, date, currency
    pub details: ExpenseDetails,

    /// Per-member shares
    pub split: SplitData,

    /// Itemized rows, if the expense was itemized
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Receipt metadata carried over from the draft
    #[serde(default)]
    pub receipts: Vec<Receipt>,

    /// Settlement method id from the payment catalog
    pub payment_method: String,

    /// Key the gateway deduplicates commits on
    pub idempotency_key: Uuid,

    /// When the commit succeeded
    pub committed_at: DateTime<Utc>,
}

impl Expense {
    /// Build a committed expense from a finalized draft
    pub fn from_draft(draft: &ExpenseDraft, idempotency_key: Uuid) -> Self {
        Self {
            id: ExpenseId::new(),
            details: draft.expense_data.clone(),
            split: draft.split_data.clone(),
            items: draft.itemized_data.clone(),
            receipts: draft.receipts.clone(),
            payment_method: draft.payment_method.clone().unwrap_or_default(),
            idempotency_key,
            committed_at: Utc::now(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .details
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(f, "{} {} ({})", self.id, self.details.title, amount)
    }
}
