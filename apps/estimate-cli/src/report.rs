//! Computed reports and their plain-text rendering.

use estimate_core::amount::{apply_taxes, item_amount, sum_amounts, total_costs};
use estimate_core::currency::{format_fixed, format_inr, AMOUNT_DECIMALS};
use estimate_core::quantity::derive_item_quantity;
use estimate_core::words::amount_in_words;
use estimate_core::{AbstractBill, BillTotals, CalcResult, CostBreakdown, DimensionClass, TaxConfig};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::CliConfig;
use crate::document::{EstimateCategory, EstimateDocument};

// =============================================================================
// Estimate Summary
// =============================================================================

/// One priced work item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateLine {
    pub item_no: usize,
    pub description: String,
    pub unit_symbol: String,
    pub class: DimensionClass,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// An estimate with every derived figure filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateSummary {
    pub title: String,
    pub category: Option<EstimateCategory>,
    pub location: Option<String>,
    pub taxes: TaxConfig,
    pub lines: Vec<EstimateLine>,
    pub totals: BillTotals,
    pub costs: CostBreakdown,
    pub cost_total: Decimal,
    pub amount_in_words: String,
}

impl EstimateSummary {
    pub fn compute(doc: &EstimateDocument, taxes: &TaxConfig) -> CalcResult<Self> {
        let mut lines = Vec::with_capacity(doc.work_items.len());
        for (index, item) in doc.work_items.iter().enumerate() {
            lines.push(EstimateLine {
                item_no: index + 1,
                description: item.description.clone(),
                unit_symbol: item.unit.symbol.clone(),
                class: item.unit.class(),
                quantity: derive_item_quantity(item)?,
                rate: item.rate,
                amount: item_amount(item)?,
            });
        }

        let subtotal = sum_amounts(lines.iter().map(|line| line.amount))?;
        let totals = apply_taxes(subtotal, taxes)?;
        let costs = total_costs(&doc.work_items)?;

        Ok(EstimateSummary {
            title: doc.title.clone(),
            category: doc.category,
            location: doc.location.clone(),
            taxes: *taxes,
            lines,
            cost_total: costs.total()?,
            costs,
            amount_in_words: amount_in_words(totals.gross_total)?,
            totals,
        })
    }
}

// =============================================================================
// Text Rendering
// =============================================================================

const RULE_WIDTH: usize = 96;

pub fn render_estimate(summary: &EstimateSummary, config: &CliConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", summary.title));
    if let Some(category) = summary.category {
        out.push_str(&format!("Category: {}\n", category));
    }
    if let Some(location) = &summary.location {
        out.push_str(&format!("Location: {}\n", location));
    }
    out.push_str(&rule());
    out.push_str(&header_row("No."));

    for line in &summary.lines {
        out.push_str(&row(
            &line.item_no.to_string(),
            &line.description,
            &line.unit_symbol,
            line.quantity,
            line.rate,
            line.amount,
            config,
        ));
    }

    out.push_str(&rule());
    out.push_str(&totals_block(&summary.totals, &summary.taxes, config));

    if summary.cost_total > Decimal::ZERO {
        out.push_str(&rule());
        out.push_str(&total_row("Material", summary.costs.material, config));
        out.push_str(&total_row("Labour", summary.costs.labour, config));
        out.push_str(&total_row("Equipment", summary.costs.equipment, config));
        out.push_str(&total_row("Overhead", summary.costs.overhead, config));
        out.push_str(&total_row("Cost Breakdown Total", summary.cost_total, config));
    }

    out.push_str(&format!("\n{}\n", summary.amount_in_words));
    out
}

pub fn render_abstract(bill: &AbstractBill, taxes: &TaxConfig, config: &CliConfig) -> String {
    let mut out = String::new();

    if let (Some(from), Some(to)) = (bill.period_from, bill.period_to) {
        out.push_str(&format!(
            "Period: {} to {}\n",
            from.format("%d/%m/%Y"),
            to.format("%d/%m/%Y")
        ));
    }
    out.push_str(&rule());
    out.push_str(&header_row("Item"));

    for line in &bill.lines {
        let item_no = line.item_no.map(|n| n.to_string()).unwrap_or_default();
        out.push_str(&row(
            &item_no,
            &line.description,
            &line.unit_symbol,
            line.quantity,
            line.rate,
            line.amount,
            config,
        ));
    }

    out.push_str(&rule());
    out.push_str(&totals_block(&bill.totals, taxes, config));
    out.push_str(&format!("\n{}\n", bill.amount_in_words));
    out
}

/// Subtotal, each non-zero charge, and the gross total.
fn totals_block(totals: &BillTotals, taxes: &TaxConfig, config: &CliConfig) -> String {
    let mut out = total_row("Subtotal", totals.subtotal, config);

    for (label, percent, amount) in [
        ("CGST", taxes.cgst_percent, totals.cgst_amount),
        ("SGST", taxes.sgst_percent, totals.sgst_amount),
        ("L.W. Cess", taxes.cess_percent, totals.cess_amount),
        ("Contingency", taxes.contingency_percent, totals.contingency_amount),
    ] {
        if percent.is_zero() {
            continue;
        }
        let label = format!("{} @ {}%", label, percent.normalize());
        out.push_str(&total_row(&label, amount, config));
    }

    out.push_str(&total_row("Gross Total", totals.gross_total, config));
    out
}

fn rule() -> String {
    format!("{}\n", "-".repeat(RULE_WIDTH))
}

fn header_row(first: &str) -> String {
    format!(
        "{:<5} {:<40} {:<8} {:>12} {:>12} {:>14}\n",
        first, "Description", "Unit", "Quantity", "Rate", "Amount"
    )
}

fn row(
    item_no: &str,
    description: &str,
    unit: &str,
    quantity: Decimal,
    rate: Decimal,
    amount: Decimal,
    config: &CliConfig,
) -> String {
    format!(
        "{:<5} {:<40} {:<8} {:>12} {:>12} {:>14}\n",
        item_no,
        clip(description, 40),
        unit,
        format_fixed(quantity, config.quantity_decimals),
        format_fixed(rate, config.amount_decimals),
        format_fixed(amount, config.amount_decimals),
    )
}

fn total_row(label: &str, amount: Decimal, config: &CliConfig) -> String {
    let shown = if config.amount_decimals == AMOUNT_DECIMALS {
        format_inr(amount)
    } else {
        format!("₹{}", format_fixed(amount, config.amount_decimals))
    };
    format!("{:>60} {:>35}\n", label, shown)
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width - 3).collect();
    clipped.push_str("...");
    clipped
}

// =============================================================================
// Unit Tests
// =============================================================================
