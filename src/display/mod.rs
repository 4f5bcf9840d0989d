//! Display formatting for terminal output
//!
//! Provides utilities for formatting drafts, steps, and expenses for
//! terminal display.

pub mod draft;
pub mod expense;

pub use draft::{
    format_draft_summary, format_field_errors, format_items_table, format_split_table,
    format_step_header,
};
pub use expense::{format_expense_details, format_expense_list};
