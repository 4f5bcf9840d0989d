//! CSV Export functionality
//!
//! Exports committed expenses and per-member shares to CSV format.

use std::io::Write;

use crate::error::{OnSplitError, OnSplitResult};
use crate::storage::Storage;

/// Export all committed expenses to CSV, one row per expense
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> OnSplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "ID",
            "Date",
            "Title",
            "Category",
            "Currency",
            "Amount",
            "Payment Method",
            "Members",
            "Items",
        ])
        .map_err(|e| OnSplitError::Export(e.to_string()))?;

    let expenses = storage.expenses.get_all()?;
    for expense in expenses {
        let amount = expense
            .details
            .amount
            .map(|a| a.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.committed_at.format("%Y-%m-%d").to_string(),
                expense.details.title.clone(),
                expense.details.category.to_string(),
                expense.details.currency.to_string(),
                amount,
                expense.payment_method.clone(),
                expense.split.shares.len().to_string(),
                expense.items.len().to_string(),
            ])
            .map_err(|e| OnSplitError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| OnSplitError::Export(e.to_string()))?;
    Ok(())
}

/// Export per-member shares to CSV, one row per (expense, member)
pub fn export_shares_csv<W: Write>(storage: &Storage, writer: &mut W) -> OnSplitResult<()> {
    // Build the member-name lookup once
    let members = storage.roster.get_all()?;
    let names: std::collections::HashMap<_, _> =
        members.iter().map(|m| (m.id, m.name.clone())).collect();

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(["Expense ID", "Title", "Member", "Amount", "Percentage"])
        .map_err(|e| OnSplitError::Export(e.to_string()))?;

    let expenses = storage.expenses.get_all()?;
    for expense in expenses {
        for (member_id, share) in &expense.split.shares {
            let member = names
                .get(member_id)
                .cloned()
                .unwrap_or_else(|| member_id.to_string());

            csv_writer
                .write_record([
                    expense.id.as_uuid().to_string(),
                    expense.details.title.clone(),
                    member,
                    share.amount.to_string(),
                    format!("{:.1}", share.percentage),
                ])
                .map_err(|e| OnSplitError::Export(e.to_string()))?;
        }
    }

    csv_writer
        .flush()
        .map_err(|e| OnSplitError::Export(e.to_string()))?;
    Ok(())
}
