//! # Abstract Bills
//!
//! Assembles a payment abstract from measurement-book entries, priced at the
//! rates of the estimate they were measured against.
//!
//! ## User Workflow
//! ```text
//! Measurement book entries                  Estimate work items
//!   "Brick masonry"  m³  12.4                 "Brick masonry"  m³  @ 6500
//!   "Plastering"     m²  80.0                 "Plastering"     m²  @ 310
//!   "Extra item"     Nos 2                          │
//!        │                                          │
//!        └──────────── match_rate ◄─────────────────┘
//!                          │   (same unit, same description)
//!                          ▼
//!              AbstractBillLine (qty × rate)
//!                          │
//!                   billable only (qty > 0, rate > 0)
//!                          ▼
//!              AbstractBill { totals, amount in words }
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::amount::{apply_taxes, line_amount, sum_amounts};
use crate::error::CalcResult;
use crate::types::{BillTotals, LineItem, TaxConfig};
use crate::validation::{validate_description, validate_dimension};
use crate::words::amount_in_words;

// =============================================================================
// Measurement Entry
// =============================================================================

/// One dated row of a measurement book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementEntry {
    pub item_no: u32,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub page_no: Option<String>,
    pub description: String,
    pub unit_symbol: String,
    #[ts(as = "String")]
    pub quantity: Decimal,
}

impl MeasurementEntry {
    pub fn validate(&self) -> CalcResult<()> {
        validate_description(&self.description)?;
        validate_dimension("quantity", self.quantity)?;
        Ok(())
    }
}

/// Rate of the first work item measured in the same unit and described the
/// same way (trimmed, case-insensitive). Zero when nothing matches.
pub fn match_rate(entry: &MeasurementEntry, work_items: &[LineItem]) -> Decimal {
    let description = normalize(&entry.description);
    let unit = normalize(&entry.unit_symbol);

    work_items
        .iter()
        .find(|item| normalize(&item.unit.symbol) == unit && normalize(&item.description) == description)
        .map(|item| item.rate)
        .unwrap_or(Decimal::ZERO)
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

// =============================================================================
// Abstract Bill Line
// =============================================================================

/// A priced line of an abstract bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AbstractBillLine {
    #[serde(default)]
    pub item_no: Option<u32>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub measured_on: Option<NaiveDate>,
    pub description: String,
    pub unit_symbol: String,
    #[ts(as = "String")]
    pub quantity: Decimal,
    #[ts(as = "String")]
    pub rate: Decimal,
    #[ts(as = "String")]
    pub amount: Decimal,
}

impl AbstractBillLine {
    /// Creates a custom line (not backed by a measurement entry).
    pub fn new(
        description: impl Into<String>,
        unit_symbol: impl Into<String>,
        quantity: Decimal,
        rate: Decimal,
    ) -> CalcResult<Self> {
        let description = description.into();
        validate_description(&description)?;

        Ok(AbstractBillLine {
            item_no: None,
            measured_on: None,
            description,
            unit_symbol: unit_symbol.into(),
            quantity,
            rate,
            amount: line_amount(quantity, rate)?,
        })
    }

    /// Prices a measurement entry against the estimate's work items.
    pub fn from_entry(entry: &MeasurementEntry, work_items: &[LineItem]) -> CalcResult<Self> {
        entry.validate()?;
        let rate = match_rate(entry, work_items);

        Ok(AbstractBillLine {
            item_no: Some(entry.item_no),
            measured_on: entry.entry_date,
            description: entry.description.clone(),
            unit_symbol: entry.unit_symbol.clone(),
            quantity: entry.quantity,
            rate,
            amount: line_amount(entry.quantity, rate)?,
        })
    }

    /// A line is billed only when it is described, has a unit, and carries
    /// a positive quantity and rate.
    pub fn is_billable(&self) -> bool {
        !self.description.trim().is_empty()
            && !self.unit_symbol.trim().is_empty()
            && self.quantity > Decimal::ZERO
            && self.rate > Decimal::ZERO
    }
}

/// Keeps the billable lines, in order.
pub fn billable_lines(lines: Vec<AbstractBillLine>) -> Vec<AbstractBillLine> {
    lines.into_iter().filter(AbstractBillLine::is_billable).collect()
}

// =============================================================================
// Abstract Bill
// =============================================================================

/// A computed abstract bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AbstractBill {
    pub lines: Vec<AbstractBillLine>,
    pub totals: BillTotals,
    pub amount_in_words: String,
    #[ts(as = "Option<String>")]
    pub period_from: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub period_to: Option<NaiveDate>,
}

impl AbstractBill {
    /// Drops unbillable lines, re-prices the rest, and applies the charges.
    ///
    /// Amounts are recomputed from quantity and rate; a stale `amount` on an
    /// incoming line is never trusted.
    pub fn compute(lines: Vec<AbstractBillLine>, taxes: &TaxConfig) -> CalcResult<Self> {
        let mut billed = Vec::new();
        for mut line in billable_lines(lines) {
            line.amount = line_amount(line.quantity, line.rate)?;
            billed.push(line);
        }

        let subtotal = sum_amounts(billed.iter().map(|line| line.amount))?;
        let totals = apply_taxes(subtotal, taxes)?;
        let dates = billed.iter().filter_map(|line| line.measured_on);

        Ok(AbstractBill {
            period_from: dates.clone().min(),
            period_to: dates.max(),
            amount_in_words: amount_in_words(totals.gross_total)?,
            totals,
            lines: billed,
        })
    }

    /// Builds the bill straight from a measurement book.
    pub fn from_measurements(
        entries: &[MeasurementEntry],
        work_items: &[LineItem],
        taxes: &TaxConfig,
    ) -> CalcResult<Self> {
        let lines = entries
            .iter()
            .map(|entry| AbstractBillLine::from_entry(entry, work_items))
            .collect::<CalcResult<Vec<_>>>()?;

        Self::compute(lines, taxes)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
