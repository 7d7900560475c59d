//! # Amount in Words
//!
//! English words for a rupee amount, grouped the Indian way.
//!
//! ## Grouping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   12,34,56,789                                                          │
//! │   ──  ──  ──  ───                                                       │
//! │   │   │   │   └── hundreds, tens, ones  "Seven Hundred Eighty Nine"     │
//! │   │   │   └────── thousand (10^3)       "Fifty Six Thousand"            │
//! │   │   └────────── lakh     (10^5)       "Thirty Four Lakh"              │
//! │   └────────────── crore    (10^7)       "Twelve Crore"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the integer part is converted; paise are ignored. A group whose
//! value is zero is skipped entirely ("One Lakh", never "One Lakh Zero
//! Thousand"). A crore count of 1000 or more is itself grouped, so
//! 1,000 crore reads "One Thousand Crore".

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};
use crate::validation::validate_amount;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;

/// Converts the integer part of a non-negative amount to words.
///
/// ## Errors
/// `InvalidAmount` for negative input.
///
/// ## Example
/// ```rust
/// use estimate_core::words::to_words;
/// use rust_decimal::Decimal;
///
/// assert_eq!(to_words(Decimal::ZERO).unwrap(), "Zero");
/// assert_eq!(to_words(Decimal::new(1500, 0)).unwrap(), "One Thousand Five Hundred");
/// assert_eq!(to_words(Decimal::new(100000, 0)).unwrap(), "One Lakh");
/// assert!(to_words(Decimal::new(-1, 0)).is_err());
/// ```
pub fn to_words(amount: Decimal) -> CalcResult<String> {
    validate_amount("amount", amount)?;

    let rupees = amount
        .trunc()
        .to_u128()
        .ok_or_else(|| CalcError::InvalidAmount {
            field: "amount".to_string(),
            value: amount,
        })?;

    if rupees == 0 {
        return Ok("Zero".to_string());
    }

    Ok(indian_words(rupees))
}

/// `"Rupees <words> Only"`, the line printed under a bill's gross total.
pub fn amount_in_words(amount: Decimal) -> CalcResult<String> {
    Ok(format!("Rupees {} Only", to_words(amount)?))
}

fn indian_words(mut n: u128) -> String {
    let mut groups: Vec<String> = Vec::new();

    let crores = n / CRORE;
    n %= CRORE;
    if crores > 0 {
        groups.push(format!("{} Crore", indian_words(crores)));
    }

    let lakhs = n / LAKH;
    n %= LAKH;
    if lakhs > 0 {
        groups.push(format!("{} Lakh", below_thousand(lakhs)));
    }

    let thousands = n / THOUSAND;
    n %= THOUSAND;
    if thousands > 0 {
        groups.push(format!("{} Thousand", below_thousand(thousands)));
    }

    if n > 0 {
        groups.push(below_thousand(n));
    }

    groups.join(" ")
}

/// Words for 1..=999; empty for 0.
fn below_thousand(n: u128) -> String {
    let n = n as usize;
    match n {
        0 => String::new(),
        1..=9 => ONES[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        20..=99 => {
            if n % 10 == 0 {
                TENS[n / 10].to_string()
            } else {
                format!("{} {}", TENS[n / 10], ONES[n % 10])
            }
        }
        _ => {
            let hundreds = format!("{} Hundred", ONES[n / 100]);
            if n % 100 == 0 {
                hundreds
            } else {
                format!("{} {}", hundreds, below_thousand((n % 100) as u128))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
