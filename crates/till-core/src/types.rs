//! # Domain Types
//!
//! Records flowing into and out of the till.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Denomination   │   │      Item       │   │  Transaction    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  face value     │   │  description    │   │  items          │       │
//! │  │  (u32, > 0)     │   │  amount (Money) │   │  paid (Money[]) │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │ ChangeBreakdown │   │ NoChangeReason  │   │ TransactionSummary  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  Dispensed      │   │  ExactPayment   │   │  till_start         │   │
//! │  │  NoChange       │   │  Underpayment   │   │  totals, change     │   │
//! │  └─────────────────┘   │  Unavailable    │   │  breakdown          │   │
//! │                        └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A coin or note face value, in whole currency units.
///
/// Ordering is by face value, so a `BTreeMap<Denomination, _>` iterates
/// smallest first and `.rev()` gives the greedy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Denomination(u32);

impl Denomination {
    /// Creates a denomination, rejecting a zero face value.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::Denomination;
    ///
    /// assert_eq!(Denomination::new(50).unwrap().value(), 50);
    /// assert!(Denomination::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> CoreResult<Self> {
        if value == 0 {
            return Err(CoreError::InvalidDenomination(value));
        }
        Ok(Denomination(value))
    }

    /// Returns the face value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the face value as Money.
    #[inline]
    pub fn as_money(&self) -> Money {
        Money::from_units(i64::from(self.0))
    }

    /// Looks up the denomination whose face value equals `amount`.
    ///
    /// Returns `None` for zero, negative or out-of-range amounts.
    pub fn from_money(amount: Money) -> Option<Self> {
        u32::try_from(amount.units())
            .ok()
            .and_then(|v| Denomination::new(v).ok())
    }
}

impl TryFrom<u32> for Denomination {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Denomination::new(value)
    }
}

impl From<Denomination> for u32 {
    fn from(d: Denomination) -> u32 {
        d.0
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A sold line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Free text, never used in computation.
    pub description: String,

    /// Price in whole currency units.
    pub amount: Money,
}

impl Item {
    pub fn new(description: impl Into<String>, amount: Money) -> Self {
        Item {
            description: description.into(),
            amount,
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// One customer's purchase: the items sold and the cash handed over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transaction {
    pub items: Vec<Item>,

    /// Tendered amounts, summed. A customer paying "R50-R20" gave two notes.
    pub paid: Vec<Money>,
}

impl Transaction {
    pub fn new(items: Vec<Item>, paid: Vec<Money>) -> Self {
        Transaction { items, paid }
    }

    /// Sum of item amounts.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.amount).sum()
    }

    /// Sum of tendered amounts.
    pub fn total_paid(&self) -> Money {
        self.paid.iter().sum()
    }

    /// Tendered minus total. Negative means the customer underpaid.
    pub fn change_owed(&self) -> Money {
        self.total_paid() - self.total()
    }
}

// =============================================================================
// Change Breakdown
// =============================================================================

/// Why no change was handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoChangeReason {
    /// Customer paid the exact total.
    ExactPayment,
    /// Customer paid less than the total.
    Underpayment,
    /// Greedy selection could not cover the amount from current stock.
    ExactChangeUnavailable,
}

/// Outcome of a change calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum ChangeBreakdown {
    /// Denominations handed out, largest first, repeats adjacent.
    Dispensed(Vec<Denomination>),
    /// Nothing handed out.
    NoChange(NoChangeReason),
}

impl ChangeBreakdown {
    /// Denominations handed out; empty for every no-change outcome.
    pub fn denominations(&self) -> &[Denomination] {
        match self {
            ChangeBreakdown::Dispensed(coins) => coins,
            ChangeBreakdown::NoChange(_) => &[],
        }
    }

    /// Total value handed out.
    pub fn total(&self) -> Money {
        self.denominations().iter().map(Denomination::as_money).sum()
    }

    /// The no-change reason, if any.
    pub fn no_change_reason(&self) -> Option<NoChangeReason> {
        match self {
            ChangeBreakdown::Dispensed(_) => None,
            ChangeBreakdown::NoChange(reason) => Some(*reason),
        }
    }
}

// =============================================================================
// Transaction Summary
// =============================================================================

/// What one transaction did to the till, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Cash total before this transaction.
    pub till_start: Money,
    pub transaction_total: Money,
    pub total_paid: Money,
    /// Paid minus total; negative on underpayment.
    pub change_owed: Money,
    pub breakdown: ChangeBreakdown,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u32) -> Denomination {
        Denomination::new(v).unwrap()
    }

    #[test]
    fn test_denomination_rejects_zero() {
        assert_eq!(
            Denomination::new(0).unwrap_err(),
            CoreError::InvalidDenomination(0)
        );
        assert_eq!(d(20).value(), 20);
        assert_eq!(d(20).as_money(), Money::from_units(20));
    }

    #[test]
    fn test_denomination_from_money() {
        assert_eq!(Denomination::from_money(Money::from_units(5)), Some(d(5)));
        assert_eq!(Denomination::from_money(Money::zero()), None);
        assert_eq!(Denomination::from_money(Money::from_units(-5)), None);
        assert_eq!(Denomination::from_money(Money::from_units(i64::MAX)), None);
    }

    #[test]
    fn test_transaction_totals() {
        let tx = Transaction::new(
            vec![
                Item::new("Bread", Money::from_units(12)),
                Item::new("Milk", Money::from_units(35)),
            ],
            vec![Money::from_units(20), Money::from_units(20), Money::from_units(10)],
        );

        assert_eq!(tx.total().units(), 47);
        assert_eq!(tx.total_paid().units(), 50);
        assert_eq!(tx.change_owed().units(), 3);
    }

    #[test]
    fn test_underpaid_transaction_owes_negative_change() {
        let tx = Transaction::new(
            vec![Item::new("Cheese", Money::from_units(60))],
            vec![Money::from_units(50)],
        );
        assert_eq!(tx.change_owed().units(), -10);
    }

    #[test]
    fn test_breakdown_accessors() {
        let dispensed = ChangeBreakdown::Dispensed(vec![d(2), d(1)]);
        assert_eq!(dispensed.total().units(), 3);
        assert_eq!(dispensed.no_change_reason(), None);

        let none = ChangeBreakdown::NoChange(NoChangeReason::ExactChangeUnavailable);
        assert!(none.denominations().is_empty());
        assert!(none.total().is_zero());
        assert_eq!(
            none.no_change_reason(),
            Some(NoChangeReason::ExactChangeUnavailable)
        );
    }

    #[test]
    fn test_breakdown_serialization() {
        let json = serde_json::to_value(ChangeBreakdown::Dispensed(vec![d(2), d(1)])).unwrap();
        assert_eq!(json["outcome"], "dispensed");
        assert_eq!(json["detail"], serde_json::json!([2, 1]));

        let json =
            serde_json::to_value(ChangeBreakdown::NoChange(NoChangeReason::Underpayment)).unwrap();
        assert_eq!(json["outcome"], "no_change");
        assert_eq!(json["detail"], "underpayment");
    }

    #[test]
    fn test_denomination_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Denomination>("0").is_err());
        assert_eq!(serde_json::from_str::<Denomination>("10").unwrap(), d(10));
    }
}
