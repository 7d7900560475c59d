//! # Validation Module
//!
//! Boundary checks shared by record constructors and calculation entry points.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend forms                                               │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Record construction (types.rs)                               │
//! │  └── THIS MODULE: reject negatives, empty symbols, nos <= 0            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculation entry points (quantity.rs, amount.rs, words.rs)  │
//! │  └── Re-check: records deserialized from JSON bypass constructors      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use estimate_core::validation::{validate_dimension, validate_unit_symbol};
//! use rust_decimal::Decimal;
//!
//! assert!(validate_unit_symbol("m³").is_ok());
//! assert!(validate_dimension("length", Decimal::new(-1, 0)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult, ValidationError, ValidationResult};
use crate::{MAX_DESCRIPTION_LEN, MAX_UNIT_SYMBOL_LEN};

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a length, width, height, depth or quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (it means "not measured")
pub fn validate_dimension(field: &str, value: Decimal) -> CalcResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalcError::InvalidDimension {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validates an optional dimension. Absent values are always valid.
pub fn validate_optional_dimension(field: &str, value: Option<Decimal>) -> CalcResult<()> {
    if let Some(value) = value {
        validate_dimension(field, value)?;
    }

    Ok(())
}

/// Validates the "nos" multiplier of a line item.
///
/// ## Rules
/// - Must not be negative (`InvalidDimension`)
/// - Must not be zero (`MustBePositive`): a line always counts at least once
pub fn validate_nos(value: Decimal) -> CalcResult<Decimal> {
    validate_dimension("nos", value)?;

    if value.is_zero() {
        return Err(ValidationError::MustBePositive {
            field: "nos".to_string(),
        }
        .into());
    }

    Ok(value)
}

/// Validates a charge percentage (CGST, SGST, cess, contingency, profit).
///
/// ## Rules
/// - Must be non-negative
/// - No upper bound: contingency above 100% is unusual but legal
///
/// ## Example
/// ```rust
/// use estimate_core::validation::validate_percentage;
/// use rust_decimal::Decimal;
///
/// assert!(validate_percentage("cgst", Decimal::new(9, 0)).is_ok());
/// assert!(validate_percentage("cgst", Decimal::ZERO).is_ok());
/// assert!(validate_percentage("cgst", Decimal::new(-9, 0)).is_err());
/// ```
pub fn validate_percentage(field: &str, value: Decimal) -> CalcResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalcError::InvalidPercentage {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validates a discount percentage: 0% to 100% inclusive.
pub fn validate_discount_percentage(value: Decimal) -> CalcResult<Decimal> {
    validate_percentage("discount", value)?;

    if value > Decimal::ONE_HUNDRED {
        return Err(CalcError::InvalidPercentage {
            field: "discount".to_string(),
            value,
        });
    }

    Ok(value)
}

/// Validates a rate or an amount of money.
pub fn validate_amount(field: &str, value: Decimal) -> CalcResult<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CalcError::InvalidAmount {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a unit-of-measure symbol.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_UNIT_SYMBOL_LEN` characters
/// - No control characters
pub fn validate_unit_symbol(symbol: &str) -> ValidationResult<()> {
    let symbol = symbol.trim();

    if symbol.is_empty() {
        return Err(ValidationError::Required {
            field: "unit symbol".to_string(),
        });
    }

    if symbol.chars().count() > MAX_UNIT_SYMBOL_LEN {
        return Err(ValidationError::TooLong {
            field: "unit symbol".to_string(),
            max: MAX_UNIT_SYMBOL_LEN,
        });
    }

    if symbol.chars().any(char::is_control) {
        return Err(ValidationError::InvalidFormat {
            field: "unit symbol".to_string(),
            reason: "must not contain control characters".to_string(),
        });
    }

    Ok(())
}

/// Validates a work-item or sub-item description.
///
/// Empty descriptions are allowed (sub-items are often unlabeled); only the
/// length is bounded.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.trim().chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
