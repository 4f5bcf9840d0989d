//! Draft and wizard-step display formatting

use std::collections::HashMap;

use crate::models::{member_totals, unassigned_total, ExpenseDraft, LineItem, Member, MemberId};
use crate::wizard::{step_count, FieldErrors, StepDefinition};

/// Format the wizard header line for a step
pub fn format_step_header(step: &StepDefinition) -> String {
    format!(
        "Step {}/{} {} {}",
        step.ordinal,
        step_count(),
        step.icon,
        step.title
    )
}

/// Format field-level validation errors for inline display
pub fn format_field_errors(errors: &FieldErrors) -> String {
    let mut output = String::new();
    for (field, message) in errors.iter() {
        output.push_str(&format!("  ✗ {}: {}\n", field, message));
    }
    output
}

fn member_name(members: &HashMap<MemberId, String>, id: &MemberId) -> String {
    members
        .get(id)
        .cloned()
        .unwrap_or_else(|| id.to_string())
}

fn name_lookup(members: &[Member]) -> HashMap<MemberId, String> {
    members.iter().map(|m| (m.id, m.name.clone())).collect()
}

/// Format the split shares as a small table
pub fn format_split_table(draft: &ExpenseDraft, members: &[Member]) -> String {
    let split = &draft.split_data;
    if split.is_empty() {
        return "No split entered yet.\n".to_string();
    }

    let names = name_lookup(members);
    let mut output = String::new();
    output.push_str(&format!("Split method: {}\n", split.method));
    output.push_str(&format!("{:20} {:>12} {:>8}\n", "Member", "Amount", "Share"));
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for (id, share) in &split.shares {
        output.push_str(&format!(
            "{:20} {:>12} {:>7.1}%\n",
            truncate(&member_name(&names, id), 20),
            share.amount.to_string(),
            share.percentage
        ));
    }

    if let Some(total) = draft.total_amount() {
        let flag = if split.is_balanced(total) {
            "balanced"
        } else {
            "UNBALANCED"
        };
        output.push_str(&format!(
            "Total {} of {} ({})\n",
            split.total(),
            total,
            flag
        ));
    }

    output
}

/// Format the itemized rows, member totals, and unassigned amount
pub fn format_items_table(items: &[LineItem], members: &[Member]) -> String {
    if items.is_empty() {
        return "No items entered.\n".to_string();
    }

    let names = name_lookup(members);
    let mut output = String::new();
    output.push_str(&format!("{:12} {:20} {:>10} {}\n", "Id", "Item", "Amount", "Assigned"));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for item in items {
        let assigned = if item.is_unassigned() {
            "(unassigned)".to_string()
        } else {
            item.assigned_to
                .iter()
                .map(|id| member_name(&names, id))
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!(
            "{:12} {:20} {:>10} {}\n",
            item.id.to_string(),
            truncate(&item.name, 20),
            item.amount.to_string(),
            assigned
        ));
    }

    let unassigned = unassigned_total(items);
    if !unassigned.is_zero() {
        output.push_str(&format!("Unassigned amount: {}\n", unassigned));
    }

    let totals = member_totals(items);
    if !totals.is_empty() {
        output.push_str("Per-member item totals:\n");
        for (id, total) in &totals {
            output.push_str(&format!("  {:20} {}\n", member_name(&names, id), total));
        }
    }

    output
}

/// Format the full draft for `expense status`
pub fn format_draft_summary(
    draft: &ExpenseDraft,
    step: &StepDefinition,
    members: &[Member],
) -> String {
    let mut output = String::new();
    output.push_str(&format_step_header(step));
    output.push('\n');
    output.push_str(&"=".repeat(40));
    output.push('\n');

    let details = &draft.expense_data;
    let title = if details.title.is_empty() {
        "(untitled)"
    } else {
        details.title.as_str()
    };
    let amount = details
        .amount
        .map(|a| a.to_string())
        .unwrap_or_else(|| "(not set)".to_string());
    output.push_str(&format!("Title:    {}\n", title));
    if !details.description.is_empty() {
        output.push_str(&format!("Notes:    {}\n", details.description));
    }
    output.push_str(&format!("Amount:   {} {}\n", amount, details.currency));
    output.push_str(&format!("Category: {}\n", details.category));
    if let Some(date) = details.date {
        output.push_str(&format!("Date:     {}\n", date.format("%Y-%m-%d")));
    }

    output.push_str(&format!("Receipts: {}\n", draft.receipts.len()));

    if let Some(method) = &draft.payment_method {
        output.push_str(&format!("Payment:  {}\n", method));
    }

    output.push('\n');
    output.push_str(&format_split_table(draft, members));

    if !draft.itemized_data.is_empty() {
        output.push('\n');
        output.push_str(&format_items_table(&draft.itemized_data, members));
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
