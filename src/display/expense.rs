//! Committed-expense display formatting

use crate::models::Expense;

/// Format a single expense for display (ledger row)
pub fn format_expense_row(expense: &Expense) -> String {
    let amount = expense
        .details
        .amount
        .map(|a| a.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {:24} {:>12} {:>3} member(s)",
        expense.id,
        expense.committed_at.format("%Y-%m-%d"),
        truncate(&expense.details.title, 24),
        amount,
        expense.split.shares.len()
    )
}

/// Format a list of expenses as a ledger
pub fn format_expense_list(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:24} {:>12}\n",
        "Id", "Date", "Title", "Amount"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Format full details of one expense
pub fn format_expense_details(expense: &Expense) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense {}\n", expense.id));
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!("Title:     {}\n", expense.details.title));
    if let Some(amount) = expense.details.amount {
        output.push_str(&format!(
            "Amount:    {} {}\n",
            amount, expense.details.currency
        ));
    }
    output.push_str(&format!("Category:  {}\n", expense.details.category));
    output.push_str(&format!("Payment:   {}\n", expense.payment_method));
    output.push_str(&format!(
        "Committed: {}\n",
        expense.committed_at.format("%Y-%m-%d %H:%M")
    ));
    output.push_str(&format!("Receipts:  {}\n", expense.receipts.len()));

    output.push_str(&format!("Split ({}):\n", expense.split.method));
    for (member, share) in &expense.split.shares {
        output.push_str(&format!(
            "  {:12} {:>12} {:>7.1}%\n",
            member.to_string(),
            share.amount.to_string(),
            share.percentage
        ));
    }

    output
}

/// Truncate a string to a maximum display length
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
