//! # Error Types
//!
//! Domain-specific error types for estimate-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  estimate-core errors (this file)                                      │
//! │  ├── CalcError        - Rejected numeric input                         │
//! │  └── ValidationError  - Textual field failures (unit, description)     │
//! │                                                                         │
//! │  estimate-cli errors (app)                                             │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CalcError → caller (re-supplies valid input)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local and recoverable. Nothing is clamped silently:
//! a negative dimension is reported, never turned into zero.

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Calculation Error
// =============================================================================

/// Errors raised by a calculation. Input is checked before any arithmetic;
/// only [`CalcError::Overflow`] can come from the arithmetic itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// A length, width, height, nos or quantity was negative.
    ///
    /// ## When This Occurs
    /// - A measurement row typed as `-3.5` instead of `3.5`
    /// - A sub-item with a negative depth
    /// - A negative entered quantity on a line item
    #[error("{field} must not be negative (got {value})")]
    InvalidDimension { field: String, value: Decimal },

    /// A CGST, SGST, cess, contingency, discount or profit percentage was
    /// negative (or a discount exceeded 100%).
    #[error("{field} percentage is invalid: {value}")]
    InvalidPercentage { field: String, value: Decimal },

    /// A rate or amount was negative.
    ///
    /// Raised by the words converter and by the aggregator for rates and
    /// subtotals.
    #[error("{field} must not be negative (got {value})")]
    InvalidAmount { field: String, value: Decimal },

    /// A product or sum left the range `Decimal` can represent
    /// (about 7.9 × 10^28).
    #[error("{field} is too large to compute")]
    Overflow { field: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for textual record fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. control characters in a unit symbol).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
