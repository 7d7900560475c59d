//! # Currency Module
//!
//! Rounding and Indian-style display of rupee amounts.
//!
//! ## Indian Digit Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Western:   12,345,678.90                                               │
//! │  Indian:  ₹1,23,45,678.90                                               │
//! │              │  │  └──┴── last three digits form one group              │
//! │              └──┴──────── every group before that has two digits        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation modules never round. These helpers exist for the
//! display and export layers, which show amounts to 2 places and
//! quantities to 3.
//!
//! ## Usage
//! ```rust
//! use estimate_core::currency::{format_inr, round_amount};
//! use rust_decimal::Decimal;
//!
//! let gross = Decimal::new(123456789, 2); // 1234567.89
//! assert_eq!(format_inr(gross), "₹12,34,567.89");
//! assert_eq!(round_amount(Decimal::new(10005, 3), 2), Decimal::new(1001, 2));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for rupee amounts on screen and in exports.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Decimal places for measured quantities on screen and in exports.
pub const QUANTITY_DECIMALS: u32 = 3;

/// Rounds half away from zero, the way fixed-point display does.
#[inline]
pub fn round_amount(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a value with exactly `places` decimals (rounded, zero-padded).
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = round_amount(value, places);
    rounded.rescale(places);
    rounded.to_string()
}

/// Formats an amount as rupees with Indian digit grouping and two decimals.
///
/// ## Example
/// ```rust
/// use estimate_core::currency::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::ZERO), "₹0.00");
/// assert_eq!(format_inr(Decimal::new(1000, 0)), "₹1,000.00");
/// assert_eq!(format_inr(Decimal::new(100000, 0)), "₹1,00,000.00");
/// assert_eq!(format_inr(Decimal::new(-55, 1)), "-₹5.50");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_amount(amount, AMOUNT_DECIMALS);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format_fixed(rounded.abs(), AMOUNT_DECIMALS);
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{}₹{}.{}", sign, group_indian(whole), fraction)
}

/// Inserts Indian grouping separators into a string of ASCII digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(&head[start..end]);
        end = start;
    }
    pairs.reverse();

    format!("{},{}", pairs.join(","), last_three)
}

// =============================================================================
// Unit Tests
// =============================================================================
