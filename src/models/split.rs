//! Split data: how an expense total is divided across members
//!
//! Supports equal, percentage, fixed-amount, and weighted methods. Share
//! amounts are computed in exact cents; the balance check tolerates a
//! one-cent deviation before flagging the split as unbalanced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::ids::MemberId;
use super::money::Money;

/// Largest share-sum deviation from the expense total still considered balanced
pub const BALANCE_EPSILON_CENTS: i64 = 1;

/// The rule used to compute each member's share of a total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    #[default]
    Equal,
    Percentage,
    Fixed,
    Weighted,
}

impl fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Equal => "equal",
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
            Self::Weighted => "weighted",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SplitMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "percentage" | "percent" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            "weighted" => Ok(Self::Weighted),
            other => Err(format!("Unknown split method: {}", other)),
        }
    }
}

/// One member's computed share
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitShare {
    /// Amount owed by the member
    pub amount: Money,

    /// Share of the total, 0-100
    pub percentage: f64,

    /// Relative weight (weighted method only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// The split slice of a draft: method plus per-member shares
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SplitData {
    /// Method the shares were computed with
    pub method: SplitMethod,

    /// Member id -> computed share
    pub shares: BTreeMap<MemberId, SplitShare>,
}

impl SplitData {
    /// Split `total` equally across `members`
    ///
    /// Duplicate member ids are collapsed. Remainder cents go to the
    /// members that sort first, so shares differ by at most one cent.
    pub fn equal(total: Money, members: &[MemberId]) -> Self {
        let mut ids: Vec<MemberId> = members.to_vec();
        ids.sort();
        ids.dedup();

        let amounts = total.split_even(ids.len());
        let percentage = if ids.is_empty() {
            0.0
        } else {
            100.0 / ids.len() as f64
        };

        let shares = ids
            .into_iter()
            .zip(amounts)
            .map(|(id, amount)| {
                (
                    id,
                    SplitShare {
                        amount,
                        percentage,
                        weight: None,
                    },
                )
            })
            .collect();

        Self {
            method: SplitMethod::Equal,
            shares,
        }
    }

    /// Split `total` by explicit percentages
    pub fn percentage(total: Money, entries: &[(MemberId, f64)]) -> Self {
        let weights: Vec<f64> = entries.iter().map(|(_, p)| *p).collect();
        let amounts = total.allocate(&weights);

        let shares = entries
            .iter()
            .zip(amounts)
            .map(|(&(id, pct), amount)| {
                (
                    id,
                    SplitShare {
                        amount,
                        percentage: pct,
                        weight: None,
                    },
                )
            })
            .collect();

        Self {
            method: SplitMethod::Percentage,
            shares,
        }
    }

    /// Split by fixed per-member amounts; percentages are derived from `total`
    pub fn fixed(total: Money, entries: &[(MemberId, Money)]) -> Self {
        let shares = entries
            .iter()
            .map(|&(id, amount)| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    amount.cents() as f64 / total.cents() as f64 * 100.0
                };
                (
                    id,
                    SplitShare {
                        amount,
                        percentage,
                        weight: None,
                    },
                )
            })
            .collect();

        Self {
            method: SplitMethod::Fixed,
            shares,
        }
    }

    /// Split `total` proportionally to per-member weights
    pub fn weighted(total: Money, entries: &[(MemberId, f64)]) -> Self {
        let weights: Vec<f64> = entries.iter().map(|(_, w)| *w).collect();
        let weight_sum: f64 = weights.iter().sum();
        let amounts = total.allocate(&weights);

        let shares = entries
            .iter()
            .zip(amounts)
            .map(|(&(id, weight), amount)| {
                let percentage = if weight_sum <= 0.0 {
                    0.0
                } else {
                    weight / weight_sum * 100.0
                };
                (
                    id,
                    SplitShare {
                        amount,
                        percentage,
                        weight: Some(weight),
                    },
                )
            })
            .collect();

        Self {
            method: SplitMethod::Weighted,
            shares,
        }
    }

    /// Sum of all share amounts
    pub fn total(&self) -> Money {
        self.shares.values().map(|s| s.amount).sum()
    }

    /// Check whether the shares cover `expense_total` within the epsilon
    pub fn is_balanced(&self, expense_total: Money) -> bool {
        (self.total() - expense_total).cents().abs() <= BALANCE_EPSILON_CENTS
    }

    /// Check whether any shares have been entered
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }
}
