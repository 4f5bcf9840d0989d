//! OnSplit - Command-line expense splitting
//!
//! This library provides the core functionality for the OnSplit
//! application: a resumable multi-step wizard for creating shared
//! expenses, splitting them across a member roster, and settling them
//! into a local ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (members, money, drafts, splits, expenses)
//! - `storage`: JSON file storage layer and the injectable draft store
//! - `wizard`: Step registry, wizard controller, and settlement gateway
//! - `activity`: Append-only wizard activity log
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: Ledger export (CSV, JSON, YAML)
//!
//! # Example
//!
//! ```rust,ignore
//! use onsplit::storage::MemoryDraftStore;
//! use onsplit::wizard::WizardController;
//!
//! let controller = WizardController::new(MemoryDraftStore::new());
//! assert_eq!(controller.current_step().ordinal, 1);
//! ```

pub mod activity;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod wizard;

pub use error::OnSplitError;
