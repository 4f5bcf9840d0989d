//! The expense draft aggregate built across wizard steps
//!
//! The draft serializes to a single JSON document shaped
//! `{ expenseData, receipts, splitData, paymentMethod, itemizedData,
//! currentStep }`. Receipt payloads are stripped on serialization, so a
//! persisted draft never carries binary data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::{Currency, ExpenseCategory};
use super::ids::{LineItemId, ReceiptId};
use super::line_item::LineItem;
use super::money::Money;
use super::receipt::Receipt;
use super::split::SplitData;

/// The details slice of a draft (step 1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetails {
    /// Expense title
    #[serde(default)]
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Total expense amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,

    /// Expense category
    #[serde(default)]
    pub category: ExpenseCategory,

    /// Expense date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Denominating currency
    #[serde(default)]
    pub currency: Currency,
}

/// A shallow-merge patch for the details slice
///
/// `None` fields leave the current value untouched; `Some` fields
/// overwrite it.
#[derive(Debug, Clone, Default)]
pub struct DetailsPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<ExpenseCategory>,
    pub date: Option<NaiveDate>,
    pub currency: Option<Currency>,
}

impl DetailsPatch {
    /// Merge this patch into `details`
    pub fn apply_to(&self, details: &mut ExpenseDetails) {
        if let Some(title) = &self.title {
            details.title = title.clone();
        }
        if let Some(description) = &self.description {
            details.description = description.clone();
        }
        if let Some(amount) = self.amount {
            details.amount = Some(amount);
        }
        if let Some(category) = self.category {
            details.category = category;
        }
        if let Some(date) = self.date {
            details.date = Some(date);
        }
        if let Some(currency) = self.currency {
            details.currency = currency;
        }
    }

    /// Check whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.currency.is_none()
    }
}

/// The aggregate in-progress expense built across wizard steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    /// Step 1: title, amount, category, date, currency
    #[serde(default)]
    pub expense_data: ExpenseDetails,

    /// Step 2: attached receipts (metadata only once persisted)
    #[serde(default)]
    pub receipts: Vec<Receipt>,

    /// Step 3: how the total is divided across members
    #[serde(default)]
    pub split_data: SplitData,

    /// Step 5: selected payment method id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Step 4: itemized purchase rows
    #[serde(default)]
    pub itemized_data: Vec<LineItem>,

    /// 0-based index into the step registry
    #[serde(default)]
    pub current_step: usize,
}

impl ExpenseDraft {
    /// The expense total, if entered
    pub fn total_amount(&self) -> Option<Money> {
        self.expense_data.amount
    }

    /// Add a receipt attachment
    pub fn attach_receipt(&mut self, receipt: Receipt) {
        self.receipts.push(receipt);
    }

    /// Remove a receipt by id; returns whether one was removed
    pub fn remove_receipt(&mut self, id: ReceiptId) -> bool {
        let before = self.receipts.len();
        self.receipts.retain(|r| r.id != id);
        self.receipts.len() != before
    }

    /// Insert or replace a line item by id
    pub fn upsert_item(&mut self, item: LineItem) {
        if let Some(existing) = self.itemized_data.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.itemized_data.push(item);
        }
    }

    /// Remove a line item by id; returns whether one was removed
    pub fn remove_item(&mut self, id: LineItemId) -> bool {
        let before = self.itemized_data.len();
        self.itemized_data.retain(|i| i.id != id);
        self.itemized_data.len() != before
    }

    /// Find a line item by id
    pub fn find_item(&self, id: LineItemId) -> Option<&LineItem> {
        self.itemized_data.iter().find(|i| i.id == id)
    }
}
