//! # Error Types
//!
//! Domain-specific error types for till-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  till-core errors (this file)                                          │
//! │  ├── CoreError        - Till inventory / float construction failures   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  till-cli errors (separate crate)                                      │
//! │  ├── ParseError       - Malformed transaction log lines                │
//! │  ├── ConfigError      - Bad float / config file                        │
//! │  └── AppError         - What the terminal sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError / ParseError → AppError → stderr    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not An Error
//! Being unable to make exact change is an ordinary business outcome. It is
//! reported through [`crate::types::NoChangeReason::ExactChangeUnavailable`]
//! inside the transaction summary, never through `CoreError`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core till errors.
///
/// These only surface while building or adjusting a [`crate::TillInventory`].
/// Transaction processing never returns them mid-stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Denomination is zero or not part of the till's fixed set.
    ///
    /// ## When This Occurs
    /// - Float configuration lists a zero face value
    /// - An adjustment names a face value the till was never given
    #[error("Invalid denomination: {0}")]
    InvalidDenomination(u32),

    /// The same face value appears twice in a float specification.
    #[error("Denomination {0} is listed more than once in the float")]
    DuplicateDenomination(u32),

    /// An adjustment would take a denomination's stock below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// with_updated_count(R2, -3)
    ///      │
    ///      ▼
    /// Check stock: available=1
    ///      │
    ///      ▼
    /// NegativeStock { denomination: 2, available: 1, requested: 3 }
    /// ```
    #[error("Insufficient stock of {denomination}: available {available}, requested {requested}")]
    NegativeStock {
        denomination: u32,
        available: u32,
        requested: u64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by [`crate::validation`] before records reach the processor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. amount without currency symbol).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeStock {
            denomination: 2,
            available: 1,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock of 2: available 1, requested 3"
        );
        assert_eq!(
            CoreError::InvalidDenomination(0).to_string(),
            "Invalid denomination: 0"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "item amount".to_string(),
        };
        assert_eq!(err.to_string(), "item amount must be positive");

        let err = ValidationError::TooLong {
            field: "description".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "description must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "float".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
