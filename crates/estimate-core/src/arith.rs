//! Overflow-checked `Decimal` arithmetic.
//!
//! `Decimal`'s operators panic once a result leaves the 96-bit mantissa.
//! Every multiplication and running sum in the calculation modules goes
//! through these helpers so that oversized input comes back as
//! [`CalcError::Overflow`] instead.

use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};

#[inline]
pub(crate) fn mul(field: &str, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| overflow(field))
}

#[inline]
pub(crate) fn add(field: &str, lhs: Decimal, rhs: Decimal) -> CalcResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| overflow(field))
}

/// Product of all factors; one for an empty slice.
pub(crate) fn product(field: &str, factors: &[Decimal]) -> CalcResult<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| mul(field, acc, *factor))
}

/// Sum of all values; zero for an empty iterator.
pub(crate) fn sum<I>(field: &str, values: I) -> CalcResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| add(field, acc, value))
}

/// `value × percent / 100`. Exactly zero for a 0% charge.
pub(crate) fn percent_of(field: &str, value: Decimal, percent: Decimal) -> CalcResult<Decimal> {
    if percent.is_zero() {
        return Ok(Decimal::ZERO);
    }
    Ok(mul(field, value, percent)? / Decimal::ONE_HUNDRED)
}

fn overflow(field: &str) -> CalcError {
    CalcError::Overflow {
        field: field.to_string(),
    }
}
