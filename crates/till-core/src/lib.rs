//! # till-core: Pure Change-Making Logic
//!
//! This crate is the **engine** of the till. It holds the float inventory,
//! the greedy change calculator and the per-transaction state fold, as pure
//! functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Till Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    till-cli                                     │   │
//! │  │    config ──► parse input.txt ──► fold ──► report              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Transaction records, TillState         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ till-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │  change   │  │ processor │  │ validation│  │   │
//! │  │   │ TillState │  │  greedy   │  │  per-tx   │  │   rules   │  │   │
//! │  │   │ FloatEntry│  │  rollback │  │  fold     │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Denomination, Item, Transaction, ChangeBreakdown, summaries
//! - [`money`] - Whole-unit integer money
//! - [`inventory`] - Stock counts and till snapshots
//! - [`change`] - Greedy change calculator with rollback
//! - [`processor`] - Per-transaction state transition
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules
//!
//! ## Example Usage
//!
//! ```rust
//! use till_core::{process_all, Item, Money, Transaction, TillState, DEFAULT_FLOAT};
//!
//! let opening = TillState::initialize(DEFAULT_FLOAT).unwrap();
//! let day = vec![
//!     Transaction::new(vec![Item::new("Bread", Money::from_units(47))], vec![Money::from_units(50)]),
//!     Transaction::new(vec![Item::new("Milk", Money::from_units(18))], vec![Money::from_units(20)]),
//! ];
//!
//! let (closing, summaries) = process_all(&day, opening);
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(closing.cash_total.units(), 565);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod change;
pub mod error;
pub mod inventory;
pub mod money;
pub mod processor;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use change::{compute_change, ChangeOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{FloatEntry, TillInventory, TillState};
pub use money::Money;
pub use processor::{process_all, process_transaction};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The standard opening float: 5 x R50, 5 x R20, 6 x R10, 12 x R5,
/// 10 x R2, 10 x R1 (R500 in total).
pub const DEFAULT_FLOAT: &[FloatEntry] = &[
    FloatEntry::new(5, 50),
    FloatEntry::new(5, 20),
    FloatEntry::new(6, 10),
    FloatEntry::new(12, 5),
    FloatEntry::new(10, 2),
    FloatEntry::new(10, 1),
];

/// Currency prefix used when rendering amounts, e.g. "R47".
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

/// Largest accepted single price or tendered amount.
pub const MAX_AMOUNT: i64 = 1_000_000_000;

/// Longest accepted item description.
pub const MAX_DESCRIPTION_LEN: usize = 200;
