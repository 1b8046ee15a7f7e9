//! # Validation Module
//!
//! Input validation for records entering the till.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parser (till-cli)                                            │
//! │  ├── Line shape (items, tender separator)                              │
//! │  └── Integer parsing                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Prices and tender are positive and at most MAX_AMOUNT             │
//! │  ├── Item and tender sums fit in an i64                                │
//! │  └── Transactions have at least one item and one tender                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Core constructors                                            │
//! │  └── Denomination::new / TillInventory::from_float                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//! use till_core::validation::{validate_item_amount, validate_tender_amount};
//!
//! assert!(validate_item_amount(Money::from_units(47)).is_ok());
//! assert!(validate_tender_amount(Money::zero()).is_err());
//! ```

use crate::error::ValidationError;
use crate::inventory::FloatEntry;
use crate::money::Money;
use crate::types::Transaction;
use crate::{MAX_AMOUNT, MAX_DESCRIPTION_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item description.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_DESCRIPTION_LEN` characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item price. Must be positive and at most `MAX_AMOUNT`.
pub fn validate_item_amount(amount: Money) -> ValidationResult<()> {
    validate_amount("item amount", amount)
}

/// Validates a single tendered amount. Must be positive and at most `MAX_AMOUNT`.
pub fn validate_tender_amount(amount: Money) -> ValidationResult<()> {
    validate_amount("paid amount", amount)
}

fn validate_amount(field: &str, amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    if amount.units() > MAX_AMOUNT {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: MAX_AMOUNT,
        });
    }
    Ok(())
}

/// Sums amounts, failing instead of overflowing.
fn checked_total<'a>(
    field: &str,
    amounts: impl IntoIterator<Item = &'a Money>,
) -> ValidationResult<Money> {
    amounts
        .into_iter()
        .try_fold(Money::zero(), |acc, amount| acc.checked_add(*amount))
        .ok_or_else(|| ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        })
}

/// Validates a denomination face value.
///
/// ## Example
/// ```rust
/// use till_core::validation::validate_denomination;
///
/// assert!(validate_denomination(50).is_ok());
/// assert!(validate_denomination(0).is_err());
/// ```
pub fn validate_denomination(value: i64) -> ValidationResult<()> {
    if value <= 0 || value > i64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange {
            field: "denomination".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}

/// Validates a float count.
pub fn validate_float_count(count: i64) -> ValidationResult<()> {
    if count < 0 || count > i64::from(u32::MAX) {
        return Err(ValidationError::OutOfRange {
            field: "float count".to_string(),
            min: 0,
            max: i64::from(u32::MAX),
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a float specification before it reaches `TillState::initialize`.
///
/// ## Rules
/// - At least one entry
/// - Every face value positive
pub fn validate_float(spec: &[FloatEntry]) -> ValidationResult<()> {
    if spec.is_empty() {
        return Err(ValidationError::Required {
            field: "float".to_string(),
        });
    }
    for entry in spec {
        validate_denomination(i64::from(entry.denomination))?;
    }
    Ok(())
}

/// Validates a parsed transaction.
///
/// ## Rules
/// - At least one item, each with a description and a positive price
/// - At least one tendered amount, each positive
/// - Neither the item total nor the tendered total overflows
pub fn validate_transaction(transaction: &Transaction) -> ValidationResult<()> {
    if transaction.items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }
    if transaction.paid.is_empty() {
        return Err(ValidationError::Required {
            field: "paid".to_string(),
        });
    }

    for item in &transaction.items {
        validate_description(&item.description)?;
        validate_item_amount(item.amount)?;
    }
    for amount in &transaction.paid {
        validate_tender_amount(*amount)?;
    }

    checked_total(
        "transaction total",
        transaction.items.iter().map(|item| &item.amount),
    )?;
    checked_total("paid total", &transaction.paid)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
