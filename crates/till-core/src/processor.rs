//! # Transaction Processor
//!
//! Applies one transaction to a till snapshot and describes what happened.
//!
//! ## Per-Transaction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    process_transaction(tx, &state)                      │
//! │                                                                         │
//! │  total  = Σ item.amount           paid = Σ tender                      │
//! │  owed   = paid - total                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  compute_change(owed, &state.inventory) ──► breakdown + stock          │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  summary { till_start, total, paid, owed, breakdown }                  │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  cash_total = till_start + total (saturating)                          │
//! │  for item whose price is a denomination: stock[price] -= 1             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  (new TillState, summary)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Tracking Is Approximate
//! Selling an item priced exactly at a face value takes one of that
//! denomination out of stock. This tracks a net approximate float, not
//! literal note-for-note movement. A decrement that would go below zero is
//! skipped.

use tracing::{debug, warn};

use crate::change::compute_change;
use crate::inventory::TillState;
use crate::types::{Denomination, NoChangeReason, Transaction, TransactionSummary};

/// Processes one transaction against `state`.
///
/// `state` is not modified; the successor state is returned alongside the
/// summary.
///
/// ## Example
/// ```rust
/// use till_core::{process_transaction, Item, Money, Transaction, TillState, DEFAULT_FLOAT};
///
/// let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
/// let tx = Transaction::new(
///     vec![Item::new("Bread", Money::from_units(47))],
///     vec![Money::from_units(50)],
/// );
///
/// let (next, summary) = process_transaction(&tx, &state);
/// assert_eq!(summary.till_start.units(), 500);
/// assert_eq!(summary.change_owed.units(), 3);
/// assert_eq!(next.cash_total.units(), 547);
/// ```
pub fn process_transaction(
    transaction: &Transaction,
    state: &TillState,
) -> (TillState, TransactionSummary) {
    let till_start = state.cash_total;
    let transaction_total = transaction.total();
    let total_paid = transaction.total_paid();
    let change_owed = transaction.change_owed();

    let outcome = compute_change(change_owed, &state.inventory);

    if outcome.breakdown.no_change_reason() == Some(NoChangeReason::Underpayment) {
        warn!(
            total = transaction_total.units(),
            paid = total_paid.units(),
            "Transaction underpaid, no change given"
        );
    }

    let summary = TransactionSummary {
        till_start,
        transaction_total,
        total_paid,
        change_owed,
        breakdown: outcome.breakdown,
    };

    let mut inventory = outcome.inventory;
    for item in &transaction.items {
        let Some(denomination) = Denomination::from_money(item.amount) else {
            continue;
        };
        if !inventory.contains(denomination) {
            continue;
        }
        match inventory.with_updated_count(denomination, -1) {
            Ok(updated) => inventory = updated,
            Err(e) => warn!(
                item = %item.description,
                error = %e,
                "Skipping stock decrement for sold item"
            ),
        }
    }

    let next = TillState {
        inventory,
        cash_total: till_start.saturating_add(transaction_total),
    };

    debug!(
        till_start = till_start.units(),
        total = transaction_total.units(),
        paid = total_paid.units(),
        change = change_owed.units(),
        "Transaction processed"
    );

    (next, summary)
}

/// Folds `process_transaction` over `transactions` in order.
///
/// Returns the closing state and one summary per transaction.
pub fn process_all<'a, I>(transactions: I, state: TillState) -> (TillState, Vec<TransactionSummary>)
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summaries = Vec::new();
    let closing = transactions.into_iter().fold(state, |current, tx| {
        let (next, summary) = process_transaction(tx, &current);
        summaries.push(summary);
        next
    });
    (closing, summaries)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{FloatEntry, TillInventory};
    use crate::money::Money;
    use crate::types::{ChangeBreakdown, Item};
    use crate::DEFAULT_FLOAT;

    fn d(v: u32) -> Denomination {
        Denomination::new(v).unwrap()
    }

    fn tx(items: &[(&str, i64)], paid: &[i64]) -> Transaction {
        Transaction::new(
            items
                .iter()
                .map(|&(desc, amount)| Item::new(desc, Money::from_units(amount)))
                .collect(),
            paid.iter().map(|&p| Money::from_units(p)).collect(),
        )
    }

    #[test]
    fn test_summary_fields() {
        let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let (_, summary) = process_transaction(
            &tx(&[("Bread", 12), ("Milk", 35)], &[20, 20, 10]),
            &state,
        );

        assert_eq!(summary.till_start.units(), 500);
        assert_eq!(summary.transaction_total.units(), 47);
        assert_eq!(summary.total_paid.units(), 50);
        assert_eq!(summary.change_owed.units(), 3);
        assert_eq!(summary.breakdown, ChangeBreakdown::Dispensed(vec![d(2), d(1)]));
    }

    #[test]
    fn test_cash_total_grows_by_transaction_total_only() {
        let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let (next, _) = process_transaction(&tx(&[("Bread", 47)], &[100]), &state);

        // Change of 53 is handed out, but cash_total only tracks sales
        assert_eq!(next.cash_total.units(), 547);
    }

    #[test]
    fn test_input_state_is_not_modified() {
        let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let before = state.clone();
        let _ = process_transaction(&tx(&[("Chips", 5)], &[50]), &state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_item_priced_at_denomination_decrements_stock() {
        let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let (next, summary) = process_transaction(&tx(&[("Gum", 5), ("Tea", 7)], &[12]), &state);

        assert_eq!(
            summary.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::ExactPayment)
        );
        assert_eq!(next.inventory.count(d(5)), 11);
        // 7 isn't a denomination, nothing else moves
        assert_eq!(next.inventory.count(d(2)), 10);
        assert_eq!(next.inventory.count(d(1)), 10);
    }

    #[test]
    fn test_item_decrement_after_change_is_dispensed() {
        let state = TillState::initialize(&[FloatEntry::new(1, 2), FloatEntry::new(2, 1)]).unwrap();
        let (next, summary) = process_transaction(&tx(&[("Sweet", 1)], &[4]), &state);

        assert_eq!(summary.breakdown, ChangeBreakdown::Dispensed(vec![d(2), d(1)]));
        // One R1 out as change, one more for the R1 item
        assert_eq!(next.inventory.count(d(1)), 0);
        assert_eq!(next.inventory.count(d(2)), 0);
    }

    #[test]
    fn test_item_decrement_never_goes_negative() {
        let state = TillState::initialize(&[FloatEntry::new(0, 5), FloatEntry::new(1, 10)]).unwrap();
        let (next, _) = process_transaction(&tx(&[("Gum", 5)], &[5]), &state);

        assert_eq!(next.inventory.count(d(5)), 0);
        assert_eq!(next.cash_total.units(), 15);
    }

    #[test]
    fn test_underpayment_yields_no_change() {
        let state = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let (next, summary) = process_transaction(&tx(&[("Cheese", 60)], &[50]), &state);

        assert_eq!(summary.change_owed.units(), -10);
        assert_eq!(
            summary.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::Underpayment)
        );
        assert_eq!(next.cash_total.units(), 560);
        assert_eq!(next.inventory, state.inventory);
    }

    #[test]
    fn test_change_unavailable_keeps_stock() {
        let state = TillState::initialize(&[
            FloatEntry::new(2, 50),
            FloatEntry::new(0, 2),
            FloatEntry::new(0, 1),
        ])
        .unwrap();
        let (next, summary) = process_transaction(&tx(&[("Soap", 47)], &[50]), &state);

        assert_eq!(
            summary.breakdown,
            ChangeBreakdown::NoChange(NoChangeReason::ExactChangeUnavailable)
        );
        assert_eq!(next.inventory.count(d(2)), 0);
        assert_eq!(next.inventory.count(d(1)), 0);
        assert_eq!(next.inventory.count(d(50)), 2);
    }

    #[test]
    fn test_process_all_matches_manual_fold() {
        let s0 = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let t1 = tx(&[("Bread", 12), ("Milk", 35)], &[50]);
        let t2 = tx(&[("Eggs", 20), ("Butter", 18)], &[20, 20]);

        let (s1, sum1) = process_transaction(&t1, &s0);
        let (s2, sum2) = process_transaction(&t2, &s1);

        let (closing, summaries) = process_all([&t1, &t2], s0);

        assert_eq!(closing, s2);
        assert_eq!(summaries, vec![sum1, sum2]);
        assert_eq!(summaries[1].till_start.units(), 547);
        assert_eq!(closing.cash_total.units(), 585);
    }

    #[test]
    fn test_cash_total_saturates_instead_of_overflowing() {
        let state = TillState {
            inventory: TillInventory::from_float(&[FloatEntry::new(1, 1)]).unwrap(),
            cash_total: Money::from_units(i64::MAX - 1),
        };
        let (next, summary) = process_transaction(&tx(&[("Gum", 5)], &[5]), &state);

        assert_eq!(summary.transaction_total.units(), 5);
        assert_eq!(next.cash_total.units(), i64::MAX);
    }

    #[test]
    fn test_process_all_empty_list() {
        let s0 = TillState::initialize(DEFAULT_FLOAT).unwrap();
        let (closing, summaries) = process_all(&Vec::<Transaction>::new(), s0.clone());
        assert_eq!(closing, s0);
        assert!(summaries.is_empty());
    }
}
