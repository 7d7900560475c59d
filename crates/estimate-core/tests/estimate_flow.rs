//! End-to-end: a small building estimate from JSON to gross total in words.

use estimate_core::amount::{bill_totals, item_amount, total_costs};
use estimate_core::currency::format_inr;
use estimate_core::quantity::derive_item_quantity;
use estimate_core::words::amount_in_words;
use estimate_core::{AbstractBill, CalcError, LineItem, MeasurementEntry, TaxConfig};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const ESTIMATE_JSON: &str = r#"[
    {
        "description": "Earthwork in excavation for foundation",
        "unit": { "symbol": "cum" },
        "dimensions": { "length": "10", "width": "1.2", "height": "1.5" },
        "rate": "245",
        "costs": { "labour": "2000", "equipment": "1000" }
    },
    {
        "description": "RCC M20 in footings and columns",
        "unit": { "symbol": "m³" },
        "dimensions": { "length": "99", "width": "99", "height": "99" },
        "rate": "7200",
        "subItems": [
            { "description": "Footing F1", "nos": "4", "length": "1.5", "breadth": "1.5", "depth": "0.3" }
        ],
        "subCategories": [
            {
                "name": "Columns",
                "subItems": [
                    { "description": "C1", "nos": "4", "length": "0.3", "breadth": "0.3", "depth": "3" }
                ]
            }
        ],
        "costs": { "material": "15000", "labour": "4000" }
    },
    {
        "description": "Cement plaster 12mm",
        "unit": { "symbol": "Sqm" },
        "dimensions": { "length": "20" },
        "enteredQuantity": "45",
        "rate": "310",
        "pricing": { "discountPercent": "10", "profitMarginPercent": "10" }
    },
    {
        "description": "Flush door shutters",
        "unit": { "symbol": "Nos" },
        "rate": "8500"
    }
]"#;

fn estimate() -> Vec<LineItem> {
    serde_json::from_str(ESTIMATE_JSON).unwrap()
}

#[test]
fn quantities_follow_unit_classes() {
    let items = estimate();
    let quantities: Vec<Decimal> = items
        .iter()
        .map(|item| derive_item_quantity(item).unwrap())
        .collect();

    assert_eq!(quantities[0], dec!(18)); // 10 × 1.2 × 1.5
    assert_eq!(quantities[1], dec!(3.78)); // 2.70 + 1.08 from sub-items
    assert_eq!(quantities[2], dec!(45)); // width missing, entered quantity
    assert_eq!(quantities[3], dec!(1)); // count floor
}

#[test]
fn gross_total_and_words() {
    let items = estimate();
    assert_eq!(item_amount(&items[2]).unwrap(), dec!(13810.5)); // 13950 - 1395 + 1255.5

    let taxes = TaxConfig::new(dec!(9), dec!(9), dec!(1), dec!(2)).unwrap();
    let totals = bill_totals(&items, &taxes).unwrap();

    // 4410 + 27216 + 13810.5 + 8500
    assert_eq!(totals.subtotal, dec!(53936.5));
    assert_eq!(totals.cgst_amount, dec!(4854.285));
    assert_eq!(totals.contingency_amount, dec!(1078.73));
    assert_eq!(totals.gross_total, totals.subtotal + totals.charges().unwrap());
    assert_eq!(format_inr(totals.gross_total), "₹65,263.17");
    assert_eq!(
        amount_in_words(totals.gross_total).unwrap(),
        "Rupees Sixty Five Thousand Two Hundred Sixty Three Only"
    );
}

#[test]
fn cost_breakdown_is_summed() {
    let costs = total_costs(&estimate()).unwrap();
    assert_eq!(costs.material, dec!(15000));
    assert_eq!(costs.labour, dec!(6000));
    assert_eq!(costs.equipment, dec!(1000));
    assert_eq!(costs.total(), Ok(dec!(22000)));
}

#[test]
fn bad_record_is_rejected_not_clamped() {
    let mut items = estimate();
    items[0].dimensions.height = Some(dec!(-1.5));

    let err = bill_totals(&items, &TaxConfig::default()).unwrap_err();
    assert_eq!(
        err,
        CalcError::InvalidDimension {
            field: "height".to_string(),
            value: dec!(-1.5),
        }
    );
}

#[test]
fn abstract_bill_from_measurement_book() {
    let entries: Vec<MeasurementEntry> = serde_json::from_str(
        r#"[
            { "itemNo": 1, "entryDate": "2024-04-02", "description": "earthwork in excavation for foundation",
              "unitSymbol": "CUM", "quantity": "12" },
            { "itemNo": 4, "entryDate": "2024-04-09", "description": "Flush door shutters",
              "unitSymbol": "Nos", "quantity": "2" }
        ]"#,
    )
    .unwrap();

    let taxes = TaxConfig::new(dec!(9), dec!(9), dec!(1), dec!(0)).unwrap();
    let bill = AbstractBill::from_measurements(&entries, &estimate(), &taxes).unwrap();

    // 12 × 245 + 2 × 8500
    assert_eq!(bill.totals.subtotal, dec!(19940));
    assert_eq!(bill.totals.gross_total, dec!(23728.6));
    assert_eq!(
        bill.amount_in_words,
        "Rupees Twenty Three Thousand Seven Hundred Twenty Eight Only"
    );
    assert_eq!(bill.period_from.unwrap().to_string(), "2024-04-02");
    assert_eq!(bill.period_to.unwrap().to_string(), "2024-04-09");
}
