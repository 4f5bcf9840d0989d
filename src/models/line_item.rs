//! Itemized line items and their per-member totals
//!
//! An item's amount is divided across its assignees in exact cents; items
//! with no assignees accumulate into the unassigned total instead.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::ids::{LineItemId, MemberId};
use super::money::Money;

/// One itemized purchase row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique identifier
    pub id: LineItemId,

    /// Item description
    pub name: String,

    /// Item amount (non-negative)
    pub amount: Money,

    /// Members responsible for this item
    #[serde(default)]
    pub assigned_to: BTreeSet<MemberId>,
}

impl LineItem {
    /// Create a new unassigned line item
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: LineItemId::new(),
            name: name.into(),
            amount,
            assigned_to: BTreeSet::new(),
        }
    }

    /// Assign this item to the given members
    pub fn assign(&mut self, members: impl IntoIterator<Item = MemberId>) {
        self.assigned_to.extend(members);
    }

    /// Check whether nobody is responsible for this item
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_empty()
    }

    /// Each assignee's share of this item
    ///
    /// Remainder cents go to the assignees that sort first. Empty for an
    /// unassigned item.
    pub fn member_shares(&self) -> BTreeMap<MemberId, Money> {
        let shares = self.amount.split_even(self.assigned_to.len());
        self.assigned_to.iter().copied().zip(shares).collect()
    }
}

/// Total amount across items that nobody is assigned to
pub fn unassigned_total(items: &[LineItem]) -> Money {
    items
        .iter()
        .filter(|item| item.is_unassigned())
        .map(|item| item.amount)
        .sum()
}

/// Per-member totals across all assigned items
pub fn member_totals(items: &[LineItem]) -> BTreeMap<MemberId, Money> {
    let mut totals: BTreeMap<MemberId, Money> = BTreeMap::new();
    for item in items {
        for (member, share) in item.member_shares() {
            *totals.entry(member).or_default() += share;
        }
    }
    totals
}
