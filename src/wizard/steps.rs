//! Step registry for the expense-creation wizard
//!
//! Declares the fixed ordered sequence of steps and, for each, a pure
//! validation function over the draft. The registry is purely
//! descriptive data; the controller consults it to decide whether
//! forward navigation is permitted.

use std::collections::BTreeMap;
use std::fmt;

use crate::models::{ExpenseDraft, PaymentMethod};

/// Identifies one wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepId {
    Details,
    Receipts,
    Split,
    Items,
    Payment,
    Review,
}

impl StepId {
    /// Stable lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::Receipts => "receipts",
            Self::Split => "split",
            Self::Items => "items",
            Self::Payment => "payment",
            Self::Review => "review",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation failures: field name -> message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Check whether any errors were recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up the message for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Iterate over (field, message) pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The failing field names
    pub fn fields(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Absorb all errors from another set
    pub fn merge(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Outcome of validating one step's slice
pub type StepValidation = Result<(), FieldErrors>;

/// Static definition of one wizard step
#[derive(Debug)]
pub struct StepDefinition {
    /// Step identifier
    pub id: StepId,

    /// 1-based position in the flow
    pub ordinal: usize,

    /// Title shown in the step header
    pub title: &'static str,

    /// Icon shown next to the title
    pub icon: &'static str,

    /// Pure validation over the slice this step owns
    pub validate: fn(&ExpenseDraft) -> StepValidation,
}

/// The fixed step sequence, in order
static REGISTRY: [StepDefinition; 6] = [
    StepDefinition {
        id: StepId::Details,
        ordinal: 1,
        title: "Expense Details",
        icon: "📝",
        validate: validate_details,
    },
    StepDefinition {
        id: StepId::Receipts,
        ordinal: 2,
        title: "Receipts",
        icon: "🧾",
        validate: validate_receipts,
    },
    StepDefinition {
        id: StepId::Split,
        ordinal: 3,
        title: "Split",
        icon: "➗",
        validate: validate_split,
    },
    StepDefinition {
        id: StepId::Items,
        ordinal: 4,
        title: "Itemize",
        icon: "📋",
        validate: validate_items,
    },
    StepDefinition {
        id: StepId::Payment,
        ordinal: 5,
        title: "Payment Method",
        icon: "💳",
        validate: validate_payment,
    },
    StepDefinition {
        id: StepId::Review,
        ordinal: 6,
        title: "Review & Submit",
        icon: "✅",
        validate: validate_review,
    },
];

/// The ordered step registry
pub fn registry() -> &'static [StepDefinition] {
    &REGISTRY
}

/// Total number of steps
pub fn step_count() -> usize {
    REGISTRY.len()
}

/// Look up a step by its 1-based ordinal
pub fn by_ordinal(ordinal: usize) -> Option<&'static StepDefinition> {
    REGISTRY.get(ordinal.checked_sub(1)?)
}

fn validate_details(draft: &ExpenseDraft) -> StepValidation {
    let mut errors = FieldErrors::new();
    let details = &draft.expense_data;

    if details.title.trim().is_empty() {
        errors.insert("title", "Title is required");
    }
    match details.amount {
        None => errors.insert("amount", "Amount is required"),
        Some(amount) if !amount.is_positive() => {
            errors.insert("amount", "Amount must be positive")
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_receipts(_draft: &ExpenseDraft) -> StepValidation {
    // Attachments are optional
    Ok(())
}

fn validate_split(draft: &ExpenseDraft) -> StepValidation {
    let mut errors = FieldErrors::new();
    let split = &draft.split_data;

    if split.is_empty() {
        errors.insert("shares", "Add at least one member to the split");
        return Err(errors);
    }

    for (member, share) in &split.shares {
        if !(0.0..=100.0).contains(&share.percentage) {
            errors.insert(
                format!("shares.{}", member),
                "Percentage must be between 0 and 100",
            );
        }
        if share.amount.is_negative() {
            errors.insert(format!("shares.{}", member), "Share cannot be negative");
        }
        if let Some(weight) = share.weight {
            if weight <= 0.0 || !weight.is_finite() {
                errors.insert(format!("shares.{}", member), "Weight must be positive");
            }
        }
    }

    match draft.total_amount() {
        None => errors.insert("amount", "Enter the expense amount before splitting"),
        Some(total) if !split.is_balanced(total) => errors.insert(
            "shares",
            format!(
                "Shares total {} but the expense is {}",
                split.total(),
                total
            ),
        ),
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_items(draft: &ExpenseDraft) -> StepValidation {
    let mut errors = FieldErrors::new();

    for (index, item) in draft.itemized_data.iter().enumerate() {
        if item.name.trim().is_empty() {
            errors.insert(format!("items[{}].name", index), "Item name is required");
        }
        if item.amount.is_negative() {
            errors.insert(
                format!("items[{}].amount", index),
                "Item amount cannot be negative",
            );
        }
    }

    // Unassigned items are allowed; they surface as an unassigned total
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_payment(draft: &ExpenseDraft) -> StepValidation {
    let mut errors = FieldErrors::new();

    match draft.payment_method.as_deref() {
        None => errors.insert("paymentMethod", "Select a payment method"),
        Some(id) if PaymentMethod::find(id).is_none() => {
            errors.insert("paymentMethod", format!("Unknown payment method: {}", id))
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_review(draft: &ExpenseDraft) -> StepValidation {
    // The review step re-checks everything before submit
    let mut errors = FieldErrors::new();
    for step in &REGISTRY[..REGISTRY.len() - 1] {
        if let Err(step_errors) = (step.validate)(draft) {
            errors.merge(step_errors);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
