//! Payment method catalog
//!
//! The set of settlement methods a user can pick on the payment step.
//! The catalog is static display metadata; the draft only stores the
//! selected method id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of settlement rail behind a payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Wallet,
    Onchain,
    Bank,
    Card,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wallet => "Wallet",
            Self::Onchain => "On-chain",
            Self::Bank => "Bank",
            Self::Card => "Card",
        };
        write!(f, "{}", name)
    }
}

/// A selectable payment method with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Stable identifier stored in drafts and expenses
    pub id: &'static str,

    /// Human-readable label
    pub label: &'static str,

    /// Settlement rail
    pub kind: PaymentKind,

    /// Short note shown next to the label
    pub note: &'static str,
}

impl PaymentMethod {
    /// The built-in payment method catalog, in display order
    pub fn catalog() -> &'static [PaymentMethod] {
        &[
            PaymentMethod {
                id: "wallet-usdc",
                label: "USDC Wallet",
                kind: PaymentKind::Wallet,
                note: "settles from the connected wallet balance",
            },
            PaymentMethod {
                id: "onchain-eth",
                label: "ETH On-chain",
                kind: PaymentKind::Onchain,
                note: "direct transfer, network fees apply",
            },
            PaymentMethod {
                id: "bank-transfer",
                label: "Bank Transfer",
                kind: PaymentKind::Bank,
                note: "1-2 business days",
            },
            PaymentMethod {
                id: "card",
                label: "Debit / Credit Card",
                kind: PaymentKind::Card,
                note: "instant, processing fee applies",
            },
        ]
    }

    /// Look up a catalog method by id
    pub fn find(id: &str) -> Option<&'static PaymentMethod> {
        Self::catalog().iter().find(|m| m.id == id)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] - {}", self.label, self.kind, self.note)
    }
}
