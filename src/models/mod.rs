//! Core data models for OnSplit
//!
//! This module contains all the data structures that represent the
//! expense-splitting domain: members, money, drafts, splits, line items,
//! receipts, and committed expenses.

pub mod category;
pub mod draft;
pub mod expense;
pub mod ids;
pub mod line_item;
pub mod member;
pub mod money;
pub mod payment;
pub mod receipt;
pub mod split;

pub use category::{Currency, ExpenseCategory};
pub use draft::{DetailsPatch, ExpenseDetails, ExpenseDraft};
pub use expense::Expense;
pub use ids::{ExpenseId, LineItemId, MemberId, ReceiptId};
pub use line_item::{member_totals, unassigned_total, LineItem};
pub use member::Member;
pub use money::Money;
pub use payment::{PaymentKind, PaymentMethod};
pub use receipt::Receipt;
pub use split::{SplitData, SplitMethod, SplitShare, BALANCE_EPSILON_CENTS};
