//! # Till Inventory
//!
//! Denomination stock counts and the till's running cash total.
//!
//! ## Snapshot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     TillState Lifecycle                                 │
//! │                                                                         │
//! │  float spec ──► initialize() ──► S0                                    │
//! │                                   │                                     │
//! │                   process_transaction(t1, &S0) ──► S1                  │
//! │                                                    │                    │
//! │                          process_transaction(t2, &S1) ──► S2 ...       │
//! │                                                                         │
//! │  Every arrow produces a NEW value. S0 is still valid after S1 exists,  │
//! │  which is what makes replaying a single transaction trivial.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - The set of denominations is fixed when the inventory is built
//! - Counts never go negative (`u32`, and adjustments are checked)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Denomination;

// =============================================================================
// Float Specification
// =============================================================================

/// One line of the starting float: "5 x R50" is `{ count: 5, denomination: 50 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloatEntry {
    pub count: u32,
    pub denomination: u32,
}

impl FloatEntry {
    pub const fn new(count: u32, denomination: u32) -> Self {
        FloatEntry {
            count,
            denomination,
        }
    }
}

// =============================================================================
// Till Inventory
// =============================================================================

/// Denomination → count in stock.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TillInventory {
    stock: BTreeMap<Denomination, u32>,
}

impl TillInventory {
    /// Builds an inventory from float entries.
    ///
    /// ## Errors
    /// - `InvalidDenomination` for a zero face value
    /// - `DuplicateDenomination` when a face value is listed twice
    pub fn from_float(spec: &[FloatEntry]) -> CoreResult<Self> {
        let mut stock = BTreeMap::new();
        for entry in spec {
            let denomination = Denomination::new(entry.denomination)?;
            if stock.insert(denomination, entry.count).is_some() {
                return Err(CoreError::DuplicateDenomination(entry.denomination));
            }
        }
        Ok(TillInventory { stock })
    }

    /// Count in stock; zero for denominations outside the set.
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.stock.get(&denomination).copied().unwrap_or(0)
    }

    /// Whether the denomination is part of the fixed set.
    pub fn contains(&self, denomination: Denomination) -> bool {
        self.stock.contains_key(&denomination)
    }

    /// Denominations in greedy order (largest first).
    pub fn denominations(&self) -> impl Iterator<Item = Denomination> + '_ {
        self.stock.keys().rev().copied()
    }

    /// `(denomination, count)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        self.stock.iter().map(|(d, c)| (*d, *c))
    }

    /// Σ count × denomination.
    pub fn total_value(&self) -> Money {
        self.iter()
            .map(|(d, count)| d.as_money() * i64::from(count))
            .sum()
    }

    /// The inventory as float entries, largest denomination first.
    pub fn to_float(&self) -> Vec<FloatEntry> {
        self.stock
            .iter()
            .rev()
            .map(|(d, count)| FloatEntry::new(*count, d.value()))
            .collect()
    }

    /// Returns a new inventory with one count adjusted by `delta`.
    ///
    /// `self` is left untouched whether or not the adjustment succeeds.
    ///
    /// ## Errors
    /// - `InvalidDenomination` if the denomination is not in the set
    /// - `NegativeStock` if the count would drop below zero
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{Denomination, FloatEntry, TillInventory};
    ///
    /// let r2 = Denomination::new(2).unwrap();
    /// let till = TillInventory::from_float(&[FloatEntry::new(1, 2)]).unwrap();
    ///
    /// let after = till.with_updated_count(r2, -1).unwrap();
    /// assert_eq!(after.count(r2), 0);
    /// assert_eq!(till.count(r2), 1);
    ///
    /// assert!(after.with_updated_count(r2, -1).is_err());
    /// ```
    pub fn with_updated_count(&self, denomination: Denomination, delta: i64) -> CoreResult<Self> {
        let mut next = self.clone();
        next.adjust(denomination, delta)?;
        Ok(next)
    }

    /// In-place adjustment. Only used on working copies inside the crate.
    pub(crate) fn adjust(&mut self, denomination: Denomination, delta: i64) -> CoreResult<()> {
        let count = self
            .stock
            .get_mut(&denomination)
            .ok_or(CoreError::InvalidDenomination(denomination.value()))?;

        let updated = i64::from(*count) + delta;
        if updated < 0 {
            return Err(CoreError::NegativeStock {
                denomination: denomination.value(),
                available: *count,
                requested: delta.unsigned_abs(),
            });
        }

        // Saturate rather than wrap on absurd positive deltas
        *count = u32::try_from(updated).unwrap_or(u32::MAX);
        Ok(())
    }
}

// =============================================================================
// Till State
// =============================================================================

/// Inventory plus the cash figure the till reports.
///
/// `cash_total` starts at the float's value and then grows by each
/// transaction total. Change handed out reduces stock counts only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillState {
    pub inventory: TillInventory,
    pub cash_total: Money,
}

impl TillState {
    /// Builds the opening state from a float specification.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::{TillState, DEFAULT_FLOAT};
    ///
    /// let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
    /// assert_eq!(state.cash_total.units(), 500);
    /// ```
    pub fn initialize(spec: &[FloatEntry]) -> CoreResult<Self> {
        let inventory = TillInventory::from_float(spec)?;
        let cash_total = inventory.total_value();
        tracing::debug!(
            denominations = spec.len(),
            cash_total = cash_total.units(),
            "Till initialized"
        );
        Ok(TillState {
            inventory,
            cash_total,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
