//! Service layer for OnSplit
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, name resolution, and cross-entity operations.

pub mod expense;
pub mod roster;

pub use expense::ExpenseService;
pub use roster::RosterService;
