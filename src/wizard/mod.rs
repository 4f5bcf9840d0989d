//! The expense-creation wizard
//!
//! A fixed six-step flow (details, receipts, split, items, payment,
//! review) over a single persisted draft. The controller owns all state
//! transitions; the step registry owns validation; the gateway owns the
//! settlement commit.

pub mod controller;
pub mod gateway;
pub mod steps;

pub use controller::{DraftUpdate, NextOutcome, WizardController, WizardPhase};
pub use gateway::{
    CancelToken, CommitError, CommitReceipt, CommitRequest, LocalSettlementGateway, RetryPolicy,
    SettlementGateway,
};
pub use steps::{by_ordinal, registry, step_count, FieldErrors, StepDefinition, StepId};
