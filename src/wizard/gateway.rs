//! Settlement gateway: the commit contract behind the wizard
//!
//! The wizard hands a finalized expense to a `SettlementGateway` and
//! never talks to storage or a network directly. The bundled local
//! gateway simulates settlement latency and appends to the on-disk
//! ledger, deduplicating by idempotency key so a retried commit lands
//! at most once.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::models::{Expense, ExpenseId};
use crate::storage::ExpenseRepository;

/// A finalized expense on its way to settlement
#[derive(Debug, Clone)]
pub struct CommitRequest {
    /// The expense to commit; carries the idempotency key
    pub expense: Expense,
}

/// Result of a successful commit
#[derive(Debug, Clone)]
pub struct CommitReceipt {
    /// Id of the committed expense
    pub expense_id: ExpenseId,

    /// User-facing success message
    pub message: String,

    /// When the commit was recorded
    pub committed_at: DateTime<Utc>,
}

/// Why a commit attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitError {
    /// The settlement backend refused the expense; retrying won't help
    Rejected(String),

    /// The settlement backend was unreachable; safe to retry
    Unavailable(String),
}

impl CommitError {
    /// Check whether another attempt can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl fmt::Display for CommitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(reason) => write!(f, "settlement rejected: {}", reason),
            Self::Unavailable(reason) => write!(f, "settlement unavailable: {}", reason),
        }
    }
}

impl std::error::Error for CommitError {}

/// The commit seam between the wizard and the settlement backend
pub trait SettlementGateway {
    /// Commit a finalized expense
    ///
    /// Implementations must be idempotent over the request's idempotency
    /// key: replaying a request that already committed returns the
    /// original receipt instead of committing twice.
    fn commit(&self, request: &CommitRequest) -> Result<CommitReceipt, CommitError>;
}

/// Retry policy for the submit loop
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, first try included
    pub max_attempts: u32,

    /// Backoff before the second attempt; doubles per retry
    pub base_backoff: Duration,
}

impl RetryPolicy {
    /// Build the policy from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            max_attempts: settings.commit_max_attempts.max(1),
            base_backoff: Duration::from_millis(settings.commit_retry_base_ms),
        }
    }

    /// Backoff before the attempt after `attempt` (1-based)
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.base_backoff * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Cooperative cancellation handle for an in-flight submit
///
/// Cloned tokens share state; cancelling any clone cancels the submit
/// before its next attempt.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Gateway that settles expenses into the local ledger
///
/// Stands in for a real settlement backend: sleeps for a configurable
/// latency, then appends to `expenses.json`.
pub struct LocalSettlementGateway<'a> {
    expenses: &'a ExpenseRepository,
    delay: Duration,
}

impl<'a> LocalSettlementGateway<'a> {
    /// Create a gateway over the given ledger with settlement latency
    pub fn new(expenses: &'a ExpenseRepository, delay: Duration) -> Self {
        Self { expenses, delay }
    }

    /// Create a gateway configured from user settings
    pub fn from_settings(expenses: &'a ExpenseRepository, settings: &Settings) -> Self {
        Self::new(expenses, Duration::from_millis(settings.settlement_delay_ms))
    }

    fn receipt_for(expense: &Expense) -> CommitReceipt {
        let amount = expense
            .details
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "-".to_string());
        CommitReceipt {
            expense_id: expense.id,
            message: format!(
                "Expense \"{}\" ({}) settled and shared with {} member(s)",
                expense.details.title,
                amount,
                expense.split.shares.len()
            ),
            committed_at: expense.committed_at,
        }
    }
}

impl SettlementGateway for LocalSettlementGateway<'_> {
    fn commit(&self, request: &CommitRequest) -> Result<CommitReceipt, CommitError> {
        // Replay: a request that already committed returns its receipt
        let existing = self
            .expenses
            .find_by_idempotency_key(request.expense.idempotency_key)
            .map_err(|e| CommitError::Unavailable(e.to_string()))?;
        if let Some(expense) = existing {
            return Ok(Self::receipt_for(&expense));
        }

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        self.expenses
            .upsert(request.expense.clone())
            .map_err(|e| CommitError::Unavailable(e.to_string()))?;
        self.expenses
            .save()
            .map_err(|e| CommitError::Unavailable(e.to_string()))?;

        Ok(Self::receipt_for(&request.expense))
    }
}
