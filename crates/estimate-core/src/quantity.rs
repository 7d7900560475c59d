//! # Quantity Derivation
//!
//! Turns a classified unit plus whatever was measured into one quantity.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sub-items present?  ── yes ──► Σ nos × L × B × D   (always wins)       │
//! │        │                                                                │
//! │        no                                                               │
//! │        ▼                                                                │
//! │  COUNT   entered > 0 ? entered : 1                                      │
//! │  LINEAR  product = L                                                    │
//! │  AREA    product = L × W                                                │
//! │  VOLUME  product = L × W × H                                            │
//! │                                                                         │
//! │  product > 0 ? product : entered                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An absent dimension is zero, so a partially measured area never uses
//! one side alone: it falls back to the entered quantity instead.
//!
//! The parent item's `nos` is validated but does not scale its own
//! dimensions; only sub-item rows multiply by their `nos`.

use rust_decimal::Decimal;

use crate::arith::{add, product};
use crate::error::CalcResult;
use crate::types::{DimensionClass, Dimensions, LineItem, SubItem};
use crate::validation::{validate_dimension, validate_nos};

/// Derives the quantity of a directly measured line.
///
/// ## Errors
/// `InvalidDimension` for any negative dimension or entered quantity, a
/// validation error when `nos` is not positive, and `Overflow` when the
/// product does not fit in a `Decimal`. Nothing is clamped.
///
/// ## Example
/// ```rust
/// use estimate_core::quantity::derive_quantity;
/// use estimate_core::{DimensionClass, Dimensions};
/// use rust_decimal::Decimal;
///
/// let dims = Dimensions::new(Decimal::new(4, 0), Decimal::new(3, 0), Decimal::ZERO).unwrap();
/// let qty = derive_quantity(DimensionClass::Area, &dims, Decimal::ONE, Decimal::ZERO).unwrap();
/// assert_eq!(qty, Decimal::new(12, 0));
/// ```
pub fn derive_quantity(
    class: DimensionClass,
    dims: &Dimensions,
    nos: Decimal,
    entered_quantity: Decimal,
) -> CalcResult<Decimal> {
    dims.validate()?;
    validate_nos(nos)?;
    validate_dimension("entered quantity", entered_quantity)?;

    let measured = match class {
        DimensionClass::Count => {
            return Ok(if entered_quantity > Decimal::ZERO {
                entered_quantity
            } else {
                Decimal::ONE
            });
        }
        DimensionClass::Linear => dims.length(),
        DimensionClass::Area => product("quantity", &[dims.length(), dims.width()])?,
        DimensionClass::Volume => {
            product("quantity", &[dims.length(), dims.width(), dims.height()])?
        }
    };

    if measured > Decimal::ZERO {
        Ok(measured)
    } else {
        Ok(entered_quantity)
    }
}

/// Sums `nos × length × breadth × depth` over sub-items. Empty input is zero.
pub fn roll_up_sub_items<'a, I>(sub_items: I) -> CalcResult<Decimal>
where
    I: IntoIterator<Item = &'a SubItem>,
{
    sub_items
        .into_iter()
        .try_fold(Decimal::ZERO, |total, sub_item| -> CalcResult<Decimal> {
            add("quantity", total, sub_item.quantity()?)
        })
}

/// Derives the effective quantity of a work item.
///
/// Sub-items (direct or grouped under sub-categories) take precedence over
/// the item's own dimensions whenever there is at least one of them, even
/// if their sum is zero.
pub fn derive_item_quantity(item: &LineItem) -> CalcResult<Decimal> {
    item.validate()?;

    if item.has_sub_items() {
        return roll_up_sub_items(item.all_sub_items());
    }

    derive_quantity(
        item.unit.class(),
        &item.dimensions,
        item.nos,
        item.entered_quantity,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use crate::types::{SubCategory, UnitOfMeasure};
    use rust_decimal_macros::dec;

    fn dims(length: Decimal, width: Decimal, height: Decimal) -> Dimensions {
        Dimensions::new(length, width, height).unwrap()
    }

    fn item(symbol: &str, dimensions: Dimensions, entered: Decimal) -> LineItem {
        LineItem::new(
            "Test item",
            UnitOfMeasure::new(symbol).unwrap(),
            dimensions,
            entered,
            dec!(100),
        )
        .unwrap()
    }

    #[test]
    fn test_count_floor_is_one() {
        let qty = derive_quantity(DimensionClass::Count, &Dimensions::none(), dec!(1), dec!(0));
        assert_eq!(qty, Ok(dec!(1)));
    }

    #[test]
    fn test_count_uses_entered_quantity() {
        let qty = derive_quantity(
            DimensionClass::Count,
            &dims(dec!(9), dec!(9), dec!(9)),
            dec!(1),
            dec!(5),
        );
        assert_eq!(qty, Ok(dec!(5)));
    }

    #[test]
    fn test_linear_uses_length() {
        let qty = derive_quantity(
            DimensionClass::Linear,
            &dims(dec!(12.5), dec!(0), dec!(0)),
            dec!(1),
            dec!(3),
        );
        assert_eq!(qty, Ok(dec!(12.5)));
    }

    #[test]
    fn test_linear_falls_back_without_length() {
        let qty = derive_quantity(DimensionClass::Linear, &Dimensions::none(), dec!(1), dec!(3));
        assert_eq!(qty, Ok(dec!(3)));
    }

    #[test]
    fn test_area_computation() {
        let qty = derive_quantity(
            DimensionClass::Area,
            &dims(dec!(4), dec!(3), dec!(0)),
            dec!(1),
            dec!(0),
        );
        assert_eq!(qty, Ok(dec!(12)));
    }

    #[test]
    fn test_area_with_one_side_missing_does_not_use_other_side() {
        let partial = Dimensions {
            length: Some(dec!(4)),
            ..Dimensions::none()
        };
        let qty = derive_quantity(DimensionClass::Area, &partial, dec!(1), dec!(2));
        assert_eq!(qty, Ok(dec!(2)));
    }

    #[test]
    fn test_volume_fallback_when_length_zero() {
        let qty = derive_quantity(
            DimensionClass::Volume,
            &dims(dec!(0), dec!(5), dec!(2)),
            dec!(1),
            dec!(7),
        );
        assert_eq!(qty, Ok(dec!(7)));
    }

    #[test]
    fn test_volume_computation() {
        let qty = derive_quantity(
            DimensionClass::Volume,
            &dims(dec!(2), dec!(1.5), dec!(0.5)),
            dec!(1),
            dec!(0),
        );
        assert_eq!(qty, Ok(dec!(1.5)));
    }

    #[test]
    fn test_parent_nos_does_not_scale_dimensions() {
        let area = dims(dec!(4), dec!(3), dec!(0));
        assert_eq!(
            derive_quantity(DimensionClass::Area, &area, dec!(2), dec!(0)),
            Ok(dec!(12))
        );
        assert_eq!(
            derive_quantity(DimensionClass::Linear, &area, dec!(5), dec!(0)),
            Ok(dec!(4))
        );
        assert_eq!(
            derive_quantity(
                DimensionClass::Volume,
                &dims(dec!(2), dec!(1.5), dec!(0.5)),
                dec!(3),
                dec!(0),
            ),
            Ok(dec!(1.5))
        );

        let item = item("Sqm", area, dec!(0)).with_nos(dec!(2)).unwrap();
        assert_eq!(derive_item_quantity(&item), Ok(dec!(12)));
    }

    #[test]
    fn test_oversized_volume_is_an_error_not_a_panic() {
        let huge = dims(dec!(1e15), dec!(1e15), dec!(1e15));
        assert_eq!(
            derive_quantity(DimensionClass::Volume, &huge, dec!(1), dec!(0)),
            Err(CalcError::Overflow {
                field: "quantity".to_string()
            })
        );
    }

    #[test]
    fn test_oversized_sub_item_sum_is_an_error_not_a_panic() {
        let row = SubItem::new("", Decimal::MAX, dec!(1), dec!(1), dec!(1)).unwrap();
        let item = item("m3", Dimensions::none(), dec!(0))
            .with_sub_items(vec![row.clone(), row])
            .unwrap();
        assert!(matches!(
            derive_item_quantity(&item),
            Err(CalcError::Overflow { .. })
        ));
    }

    #[test]
    fn test_negative_dimension_is_rejected() {
        let bad = Dimensions {
            length: Some(dec!(-4)),
            width: Some(dec!(3)),
            height: None,
        };
        let err = derive_quantity(DimensionClass::Area, &bad, dec!(1), dec!(0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidDimension { .. }));
    }

    #[test]
    fn test_negative_entered_quantity_is_rejected() {
        let err = derive_quantity(DimensionClass::Count, &Dimensions::none(), dec!(1), dec!(-1))
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidDimension { .. }));
    }

    #[test]
    fn test_zero_nos_is_rejected() {
        assert!(derive_quantity(DimensionClass::Linear, &Dimensions::none(), dec!(0), dec!(1)).is_err());
    }

    #[test]
    fn test_sub_items_take_precedence() {
        let item = item("m3", dims(dec!(10), dec!(10), dec!(10)), dec!(50))
            .with_sub_items(vec![SubItem::new("", dec!(2), dec!(3), dec!(1), dec!(1)).unwrap()])
            .unwrap();
        assert_eq!(derive_item_quantity(&item), Ok(dec!(6)));
    }

    #[test]
    fn test_zero_sum_sub_items_still_take_precedence() {
        let item = item("m3", dims(dec!(10), dec!(10), dec!(10)), dec!(50))
            .with_sub_items(vec![SubItem::new("", dec!(0), dec!(3), dec!(1), dec!(1)).unwrap()])
            .unwrap();
        assert_eq!(derive_item_quantity(&item), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_sub_categories_are_rolled_up() {
        let item = item("m³", Dimensions::none(), dec!(0))
            .with_sub_items(vec![SubItem::new("Slab", dec!(1), dec!(4), dec!(3), dec!(0.1)).unwrap()])
            .unwrap()
            .with_sub_categories(vec![
                SubCategory {
                    name: "Columns".to_string(),
                    sub_items: vec![
                        SubItem::new("C1", dec!(4), dec!(0.3), dec!(0.3), dec!(3)).unwrap(),
                    ],
                },
                SubCategory {
                    name: "Empty".to_string(),
                    sub_items: Vec::new(),
                },
            ])
            .unwrap();
        // 1.2 + 1.08
        assert_eq!(derive_item_quantity(&item), Ok(dec!(2.28)));
    }

    #[test]
    fn test_empty_sub_categories_use_own_dimensions() {
        let item = item("sqm", dims(dec!(5), dec!(2), dec!(0)), dec!(0))
            .with_sub_categories(vec![SubCategory {
                name: "Unused".to_string(),
                sub_items: Vec::new(),
            }])
            .unwrap();
        assert_eq!(derive_item_quantity(&item), Ok(dec!(10)));
    }

    #[test]
    fn test_roll_up_empty_is_zero() {
        assert_eq!(roll_up_sub_items(&Vec::<SubItem>::new()), Ok(Decimal::ZERO));
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let item = item("m2", dims(dec!(3.333), dec!(1.5), dec!(0)), dec!(0));
        assert_eq!(derive_item_quantity(&item), derive_item_quantity(&item));
    }
}
