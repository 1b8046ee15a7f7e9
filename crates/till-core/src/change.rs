//! # Change Calculator
//!
//! Greedy, largest-denomination-first change making against limited stock.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_change(owed = 3, stock = {50:5, 20:5, 10:6, 5:12, 2:1, 1:2})  │
//! │                                                                         │
//! │  candidates ≤ 3, descending:  [2, 1]                                   │
//! │                                                                         │
//! │  R2: remaining 3 ≥ 2, stock 1 → take   remaining 1, stock 0            │
//! │      stock 0                   → next                                  │
//! │  R1: remaining 1 ≥ 1, stock 2 → take   remaining 0, stock 1            │
//! │                                                                         │
//! │  remaining == 0 → Dispensed([2, 1]), commit working copy               │
//! │  remaining != 0 → NoChange(ExactChangeUnavailable), discard copy       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Known Limitation
//! Greedy selection is not optimal. With stock `{5:1, 2:3}` and 6 owed it
//! takes the R5 first and then cannot make the last R1, even though
//! `2+2+2` would work. That result is reported as "No Change", unchanged.

use tracing::debug;

use crate::inventory::TillInventory;
use crate::money::Money;
use crate::types::{ChangeBreakdown, Denomination, NoChangeReason};

/// Result of a change calculation: what was handed out and the stock left.
///
/// On any no-change outcome `inventory` equals the input inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    pub breakdown: ChangeBreakdown,
    pub inventory: TillInventory,
}

impl ChangeOutcome {
    fn unchanged(reason: NoChangeReason, inventory: &TillInventory) -> Self {
        ChangeOutcome {
            breakdown: ChangeBreakdown::NoChange(reason),
            inventory: inventory.clone(),
        }
    }
}

/// Selects denominations to cover `owed` from `inventory`.
///
/// ## Outcomes
/// - `owed == 0` → `NoChange(ExactPayment)`
/// - `owed < 0`  → `NoChange(Underpayment)`
/// - stock can't cover it greedily → `NoChange(ExactChangeUnavailable)`
/// - otherwise → `Dispensed(..)` with the decremented inventory
///
/// ## Example
/// ```rust
/// use till_core::{compute_change, ChangeBreakdown, Denomination, FloatEntry, Money, TillInventory};
///
/// let till = TillInventory::from_float(&[FloatEntry::new(1, 2), FloatEntry::new(2, 1)]).unwrap();
/// let outcome = compute_change(Money::from_units(3), &till);
///
/// let coins: Vec<u32> = outcome.breakdown.denominations().iter().map(|d| d.value()).collect();
/// assert_eq!(coins, vec![2, 1]);
/// assert_eq!(outcome.inventory.count(Denomination::new(1).unwrap()), 1);
/// ```
pub fn compute_change(owed: Money, inventory: &TillInventory) -> ChangeOutcome {
    if owed.is_zero() {
        return ChangeOutcome::unchanged(NoChangeReason::ExactPayment, inventory);
    }
    if owed.is_negative() {
        return ChangeOutcome::unchanged(NoChangeReason::Underpayment, inventory);
    }

    let mut working = inventory.clone();
    let mut remaining = owed;
    let mut used: Vec<Denomination> = Vec::new();

    let candidates: Vec<Denomination> = inventory
        .denominations()
        .filter(|d| d.as_money() <= owed)
        .collect();

    for denomination in candidates {
        let value = denomination.as_money();
        while remaining >= value && working.count(denomination) > 0 {
            // Stock was checked above, so this cannot underflow
            if working.adjust(denomination, -1).is_err() {
                break;
            }
            used.push(denomination);
            remaining = remaining - value;
        }
    }

    if !remaining.is_zero() {
        debug!(
            owed = owed.units(),
            short_by = remaining.units(),
            "Exact change unavailable, discarding working stock"
        );
        return ChangeOutcome::unchanged(NoChangeReason::ExactChangeUnavailable, inventory);
    }

    debug!(owed = owed.units(), coins = used.len(), "Change dispensed");
    ChangeOutcome {
        breakdown: ChangeBreakdown::Dispensed(used),
        inventory: working,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::FloatEntry;
    use crate::DEFAULT_FLOAT;

    fn d(v: u32) -> Denomination {
        Denomination::new(v).unwrap()
    }

    fn till(entries: &[(u32, u32)]) -> TillInventory {
        let spec: Vec<FloatEntry> = entries
            .iter()
            .map(|&(count, denomination)| FloatEntry::new(count, denomination))
            .collect();
        TillInventory::from_float(&spec).unwrap()
    }

    fn values(outcome: &ChangeOutcome) -> Vec<u32> {
        outcome
            .breakdown
            .denominations()
            .iter()
            .map(|d| d.value())
            .collect()
    }

    #[test]
    fn test_zero_owed_is_exact_payment() {
        let inventory = till(&[(5, 50), (10, 1)]);
        let outcome = compute_change(Money::zero(), &inventory);

        assert_eq!(
            outcome.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::ExactPayment)
        );
        assert_eq!(outcome.inventory, inventory);
    }

    #[test]
    fn test_negative_owed_is_underpayment() {
        let inventory = till(&[(5, 50), (10, 1)]);
        let outcome = compute_change(Money::from_units(-7), &inventory);

        assert_eq!(
            outcome.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::Underpayment)
        );
        assert_eq!(outcome.inventory, inventory);
    }

    #[test]
    fn test_small_change_uses_two_then_one() {
        let inventory = till(&[(1, 2), (2, 1)]);
        let outcome = compute_change(Money::from_units(3), &inventory);

        assert_eq!(values(&outcome), vec![2, 1]);
        assert_eq!(outcome.inventory.count(d(2)), 0);
        assert_eq!(outcome.inventory.count(d(1)), 1);
    }

    #[test]
    fn test_empty_small_coins_gives_no_change_and_untouched_stock() {
        let inventory = till(&[(0, 2), (0, 1)]);
        let outcome = compute_change(Money::from_units(3), &inventory);

        assert_eq!(
            outcome.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::ExactChangeUnavailable)
        );
        assert_eq!(outcome.inventory.count(d(2)), 0);
        assert_eq!(outcome.inventory.count(d(1)), 0);
    }

    #[test]
    fn test_partial_progress_is_rolled_back() {
        // Greedy takes R5 then needs R1, which isn't stocked
        let inventory = till(&[(1, 5), (3, 2)]);
        let outcome = compute_change(Money::from_units(6), &inventory);

        assert_eq!(
            outcome.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::ExactChangeUnavailable)
        );
        assert_eq!(outcome.inventory, inventory);
    }

    #[test]
    fn test_rollback_is_idempotent() {
        let inventory = till(&[(1, 5), (3, 2)]);
        let first = compute_change(Money::from_units(6), &inventory);
        let second = compute_change(Money::from_units(6), &inventory);
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeats_are_adjacent_and_descending() {
        let inventory = TillInventory::from_float(DEFAULT_FLOAT).unwrap();
        let outcome = compute_change(Money::from_units(98), &inventory);

        assert_eq!(values(&outcome), vec![50, 20, 20, 5, 2, 1]);
        assert_eq!(outcome.breakdown.total().units(), 98);
        assert_eq!(outcome.inventory.count(d(20)), 3);
    }

    #[test]
    fn test_skips_exhausted_denomination() {
        let inventory = till(&[(0, 10), (4, 5)]);
        let outcome = compute_change(Money::from_units(15), &inventory);

        assert_eq!(values(&outcome), vec![5, 5, 5]);
        assert_eq!(outcome.inventory.count(d(5)), 1);
        assert_eq!(outcome.inventory.count(d(10)), 0);
    }

    #[test]
    fn test_dispensed_sum_matches_and_stock_reflects_decrements() {
        let inventory = TillInventory::from_float(DEFAULT_FLOAT).unwrap();

        for owed in 1..=200 {
            let outcome = compute_change(Money::from_units(owed), &inventory);
            let coins = outcome.breakdown.denominations();
            if coins.is_empty() {
                assert_eq!(outcome.inventory, inventory, "owed {owed}");
                continue;
            }

            assert_eq!(outcome.breakdown.total().units(), owed);
            assert!(coins.windows(2).all(|w| w[0] >= w[1]), "owed {owed}");
            for (denomination, before) in inventory.iter() {
                let used = coins.iter().filter(|c| **c == denomination).count() as u32;
                assert_eq!(outcome.inventory.count(denomination), before - used);
            }
        }
    }
}
