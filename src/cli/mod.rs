//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard and service layers.

pub mod expense;
pub mod export;
pub mod member;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use member::{handle_member_command, MemberCommands};
