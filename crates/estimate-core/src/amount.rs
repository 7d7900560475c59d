//! # Amount Aggregation
//!
//! Line amounts, subtotals and the tax / cess / contingency charges on top.
//!
//! ## Bill Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LineItem ──► derive_item_quantity ──► quantity × rate                  │
//! │                                            │                            │
//! │                              discount % / profit margin %               │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                 Σ amounts = subtotal                    │
//! │                                            │                            │
//! │        ┌───────────────┬──────────────────┼──────────────────┐         │
//! │        ▼               ▼                  ▼                  ▼         │
//! │   CGST % of       SGST % of          cess % of      contingency % of   │
//! │   subtotal        subtotal           subtotal           subtotal       │
//! │        └───────────────┴──────────┬───────┴──────────────────┘         │
//! │                                   ▼                                     │
//! │                   gross = subtotal + all four charges                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here. Display precision belongs to the caller
//! (see [`crate::currency`]).

use rust_decimal::Decimal;

use crate::arith::{add, mul, percent_of, sum};
use crate::error::CalcResult;
use crate::quantity::derive_item_quantity;
use crate::types::{BillTotals, CostBreakdown, LineItem, PricingAdjustments, TaxConfig};
use crate::validation::{validate_amount, validate_dimension};

/// `quantity × rate`, unrounded.
///
/// ## Example
/// ```rust
/// use estimate_core::amount::line_amount;
/// use rust_decimal::Decimal;
///
/// let amount = line_amount(Decimal::new(125, 1), Decimal::new(480, 0)).unwrap();
/// assert_eq!(amount, Decimal::new(6000, 0)); // 12.5 × 480
/// ```
pub fn line_amount(quantity: Decimal, rate: Decimal) -> CalcResult<Decimal> {
    validate_dimension("quantity", quantity)?;
    validate_amount("rate", rate)?;
    mul("amount", quantity, rate)
}

/// Line amount after a discount and a profit margin.
///
/// ```text
/// base     = quantity × rate
/// discount = base × discount% / 100
/// profit   = (base − discount) × profit% / 100
/// amount   = base − discount + profit
/// ```
pub fn priced_amount(
    quantity: Decimal,
    rate: Decimal,
    pricing: &PricingAdjustments,
) -> CalcResult<Decimal> {
    pricing.validate()?;
    let base = line_amount(quantity, rate)?;

    if pricing.is_none() {
        return Ok(base);
    }

    let discount = percent_of("discount", base, pricing.discount_percent)?;
    let discounted = base - discount;
    let profit = percent_of("profit margin", discounted, pricing.profit_margin_percent)?;

    add("amount", discounted, profit)
}

/// Amount of one work item: derived quantity priced at its rate.
pub fn item_amount(item: &LineItem) -> CalcResult<Decimal> {
    let quantity = derive_item_quantity(item)?;
    priced_amount(quantity, item.rate, &item.pricing)
}

/// Sum of item amounts. An empty list is zero.
pub fn subtotal(items: &[LineItem]) -> CalcResult<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| -> CalcResult<Decimal> {
            add("subtotal", total, item_amount(item)?)
        })
}

/// Applies CGST, SGST, cess and contingency to a subtotal.
///
/// Every charge is a percentage of the same subtotal. A 0% charge is
/// exactly zero so that callers can hide its line.
///
/// ## Example
/// ```rust
/// use estimate_core::amount::apply_taxes;
/// use estimate_core::TaxConfig;
/// use rust_decimal::Decimal;
///
/// let taxes = TaxConfig::new(
///     Decimal::new(9, 0),
///     Decimal::new(9, 0),
///     Decimal::ONE,
///     Decimal::ZERO,
/// )
/// .unwrap();
/// let totals = apply_taxes(Decimal::new(1000, 0), &taxes).unwrap();
/// assert_eq!(totals.gross_total, Decimal::new(1190, 0));
/// ```
pub fn apply_taxes(subtotal: Decimal, taxes: &TaxConfig) -> CalcResult<BillTotals> {
    validate_amount("subtotal", subtotal)?;
    taxes.validate()?;

    let cgst_amount = percent_of("cgst", subtotal, taxes.cgst_percent)?;
    let sgst_amount = percent_of("sgst", subtotal, taxes.sgst_percent)?;
    let cess_amount = percent_of("cess", subtotal, taxes.cess_percent)?;
    let contingency_amount = percent_of("contingency", subtotal, taxes.contingency_percent)?;

    Ok(BillTotals {
        subtotal,
        cgst_amount,
        sgst_amount,
        cess_amount,
        contingency_amount,
        gross_total: sum(
            "gross total",
            [subtotal, cgst_amount, sgst_amount, cess_amount, contingency_amount],
        )?,
    })
}

/// Subtotal of the items followed by [`apply_taxes`].
pub fn bill_totals(items: &[LineItem], taxes: &TaxConfig) -> CalcResult<BillTotals> {
    apply_taxes(subtotal(items)?, taxes)
}

/// Component-wise sum of the items' cost breakdowns.
pub fn total_costs(items: &[LineItem]) -> CalcResult<CostBreakdown> {
    items
        .iter()
        .try_fold(CostBreakdown::default(), |acc, item| -> CalcResult<CostBreakdown> {
            item.costs.validate()?;
            Ok(CostBreakdown {
                material: add("material cost", acc.material, item.costs.material)?,
                labour: add("labour cost", acc.labour, item.costs.labour)?,
                equipment: add("equipment cost", acc.equipment, item.costs.equipment)?,
                overhead: add("overhead cost", acc.overhead, item.costs.overhead)?,
            })
        })
}

/// Sum of already-computed amounts (bill lines, item amounts).
///
/// ## Errors
/// `InvalidAmount` for a negative amount, `Overflow` when the sum does not
/// fit in a `Decimal`.
pub fn sum_amounts<I>(amounts: I) -> CalcResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let amounts = amounts
        .into_iter()
        .map(|amount| validate_amount("amount", amount))
        .collect::<CalcResult<Vec<_>>>()?;
    sum("subtotal", amounts)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::types::{Dimensions, SubItem, UnitOfMeasure};
    use rust_decimal_macros::dec;

    fn count_item(entered: Decimal, rate: Decimal) -> LineItem {
        LineItem::new(
            "Door shutter",
            UnitOfMeasure::new("Nos").unwrap(),
            Dimensions::none(),
            entered,
            rate,
        )
        .unwrap()
    }

    #[test]
    fn test_line_amount() {
        assert_eq!(line_amount(dec!(2.5), dec!(400)), Ok(dec!(1000)));
        assert_eq!(line_amount(dec!(0), dec!(400)), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_line_amount_rejects_negatives() {
        assert!(matches!(
            line_amount(dec!(-1), dec!(10)),
            Err(CalcError::InvalidDimension { .. })
        ));
        assert!(matches!(
            line_amount(dec!(1), dec!(-10)),
            Err(CalcError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_oversized_amounts_are_errors_not_panics() {
        assert_eq!(
            line_amount(dec!(1e20), dec!(1e10)),
            Err(CalcError::Overflow {
                field: "amount".to_string()
            })
        );

        let items = vec![
            count_item(Decimal::MAX, dec!(1)),
            count_item(Decimal::MAX, dec!(1)),
        ];
        assert_eq!(
            subtotal(&items),
            Err(CalcError::Overflow {
                field: "subtotal".to_string()
            })
        );

        let taxes = TaxConfig::new(dec!(9), dec!(9), dec!(1), dec!(0)).unwrap();
        assert_eq!(
            apply_taxes(Decimal::MAX, &taxes),
            Err(CalcError::Overflow {
                field: "cgst".to_string()
            })
        );
    }

    #[test]
    fn test_sum_amounts() {
        assert_eq!(sum_amounts([dec!(1500), dec!(250.5)]), Ok(dec!(1750.5)));
        assert_eq!(sum_amounts(Vec::new()), Ok(Decimal::ZERO));
        assert!(matches!(
            sum_amounts([dec!(10), dec!(-1)]),
            Err(CalcError::InvalidAmount { .. })
        ));
        assert!(matches!(
            sum_amounts([Decimal::MAX, dec!(1)]),
            Err(CalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_priced_amount_discount_then_profit() {
        let pricing = PricingAdjustments::new(dec!(10), dec!(10)).unwrap();
        // 1000 - 100 = 900, + 90 profit
        assert_eq!(priced_amount(dec!(10), dec!(100), &pricing), Ok(dec!(990)));
    }

    #[test]
    fn test_priced_amount_without_adjustments_is_line_amount() {
        let pricing = PricingAdjustments::default();
        assert_eq!(
            priced_amount(dec!(3), dec!(33.33), &pricing),
            line_amount(dec!(3), dec!(33.33))
        );
    }

    #[test]
    fn test_subtotal_empty_is_zero() {
        assert_eq!(subtotal(&[]), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_subtotal_sums_items() {
        let items = vec![count_item(dec!(2), dec!(1500)), count_item(dec!(0), dec!(250))];
        // 2 × 1500 + 1 × 250 (count floor)
        assert_eq!(subtotal(&items), Ok(dec!(3250)));
    }

    #[test]
    fn test_subtotal_uses_sub_items() {
        let item = LineItem::new(
            "PCC 1:4:8",
            UnitOfMeasure::new("cum").unwrap(),
            Dimensions::new(dec!(100), dec!(100), dec!(100)).unwrap(),
            Decimal::ZERO,
            dec!(5000),
        )
        .unwrap()
        .with_sub_items(vec![SubItem::new("", dec!(2), dec!(3), dec!(1), dec!(1)).unwrap()])
        .unwrap();
        assert_eq!(subtotal(&[item]), Ok(dec!(30000)));
    }

    #[test]
    fn test_apply_taxes_are_independent() {
        let taxes = TaxConfig::new(dec!(9), dec!(9), dec!(1), dec!(0)).unwrap();
        let totals = apply_taxes(dec!(1000), &taxes).unwrap();

        assert_eq!(totals.subtotal, dec!(1000));
        assert_eq!(totals.cgst_amount, dec!(90));
        assert_eq!(totals.sgst_amount, dec!(90));
        assert_eq!(totals.cess_amount, dec!(10));
        assert_eq!(totals.contingency_amount, Decimal::ZERO);
        assert_eq!(totals.gross_total, dec!(1190));
        assert_eq!(totals.charges(), Ok(dec!(190)));
    }

    #[test]
    fn test_zero_percent_is_exact_zero() {
        let totals = apply_taxes(dec!(123456.789), &TaxConfig::default()).unwrap();
        assert!(totals.cgst_amount.is_zero());
        assert!(totals.sgst_amount.is_zero());
        assert!(totals.cess_amount.is_zero());
        assert!(totals.contingency_amount.is_zero());
        assert_eq!(totals.gross_total, dec!(123456.789));
    }

    #[test]
    fn test_apply_taxes_rejects_bad_input() {
        assert!(matches!(
            apply_taxes(dec!(-1), &TaxConfig::default()),
            Err(CalcError::InvalidAmount { .. })
        ));

        let bad = TaxConfig {
            contingency_percent: dec!(-3),
            ..TaxConfig::default()
        };
        assert!(matches!(
            apply_taxes(dec!(100), &bad),
            Err(CalcError::InvalidPercentage { .. })
        ));
    }

    #[test]
    fn test_bill_totals_all_fields_non_negative() {
        let items = vec![count_item(dec!(3), dec!(999.99))];
        let taxes = TaxConfig::new(dec!(9), dec!(9), dec!(1), dec!(3)).unwrap();
        let totals = bill_totals(&items, &taxes).unwrap();
        for field in [
            totals.subtotal,
            totals.cgst_amount,
            totals.sgst_amount,
            totals.cess_amount,
            totals.contingency_amount,
            totals.gross_total,
        ] {
            assert!(field >= Decimal::ZERO);
        }
        assert_eq!(totals, bill_totals(&items, &taxes).unwrap());
    }

    #[test]
    fn test_total_costs() {
        let first = count_item(dec!(1), dec!(10))
            .with_costs(CostBreakdown {
                material: dec!(60),
                labour: dec!(30),
                ..CostBreakdown::default()
            })
            .unwrap();
        let second = count_item(dec!(1), dec!(10))
            .with_costs(CostBreakdown {
                material: dec!(5),
                equipment: dec!(7),
                overhead: dec!(1.5),
                ..CostBreakdown::default()
            })
            .unwrap();

        let totals = total_costs(&[first, second]).unwrap();
        assert_eq!(totals.material, dec!(65));
        assert_eq!(totals.labour, dec!(30));
        assert_eq!(totals.equipment, dec!(7));
        assert_eq!(totals.overhead, dec!(1.5));
        assert_eq!(totals.total(), Ok(dec!(103.5)));
    }
}
