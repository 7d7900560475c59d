//! # estimate
//!
//! Command-line front end for estimate-core.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  estimate classify <symbol>        unit symbol → dimension class        │
//! │  estimate words <amount>           amount → "Rupees ... Only"           │
//! │  estimate bill <file> [--json]     estimate JSON → priced bill          │
//! │  estimate abstract <file> [--json] measurement book JSON → abstract     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`); reports go to stdout.

mod config;
mod document;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use estimate_core::unit::classify;
use estimate_core::words::amount_in_words;
use estimate_core::AbstractBill;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::document::{EstimateDocument, MeasurementBookDocument};
use crate::report::{render_abstract, render_estimate, EstimateSummary};

#[derive(Parser)]
#[command(name = "estimate", version, about = "Civil-works estimate calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the dimension class of a unit symbol
    Classify {
        symbol: String,
    },

    /// Print an amount in Indian-numbering words
    Words {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Price an estimate document
    Bill {
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build an abstract bill from a measurement book
    Abstract {
        file: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = CliConfig::load().context("failed to load configuration")?;
    debug!(
        cgst = %config.default_taxes.cgst_percent,
        sgst = %config.default_taxes.sgst_percent,
        cess = %config.default_taxes.cess_percent,
        contingency = %config.default_taxes.contingency_percent,
        "Configuration loaded"
    );

    match cli.command {
        Command::Classify { symbol } => {
            println!("{:?}", classify(&symbol));
        }

        Command::Words { amount } => {
            println!("{}", amount_in_words(amount)?);
        }

        Command::Bill { file, json } => {
            let doc: EstimateDocument = document::load(&file)?;
            let taxes = doc.taxes.unwrap_or_else(|| {
                info!("No tax block in document, using configured defaults");
                config.default_taxes
            });

            let summary = EstimateSummary::compute(&doc, &taxes)
                .with_context(|| format!("failed to price {}", file.display()))?;
            info!(
                items = summary.lines.len(),
                subtotal = %summary.totals.subtotal,
                gross = %summary.totals.gross_total,
                "Estimate priced"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_estimate(&summary, &config));
            }
        }

        Command::Abstract { file, json } => {
            let doc: MeasurementBookDocument = document::load(&file)?;
            let taxes = doc.taxes.unwrap_or(config.default_taxes);

            let bill = AbstractBill::from_measurements(&doc.entries, &doc.work_items, &taxes)
                .with_context(|| format!("failed to build abstract from {}", file.display()))?;

            let dropped = doc.entries.len() - bill.lines.len();
            if dropped > 0 {
                warn!(dropped, "Unbillable entries left out (no matching rate or zero quantity)");
            }
            info!(
                lines = bill.lines.len(),
                gross = %bill.totals.gross_total,
                "Abstract bill computed"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&bill)?);
            } else {
                match &doc.bill_no {
                    Some(bill_no) => println!("{} (Bill No. {})", doc.title, bill_no),
                    None => println!("{}", doc.title),
                }
                if let Some(contractor) = &doc.contractor {
                    println!("Contractor: {}", contractor);
                }
                if let Some(engineer) = &doc.engineer {
                    println!("Engineer: {}", engineer);
                }
                print!("{}", render_abstract(&bill, &taxes, &config));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use estimate_core::CalcError;

    #[test]
    fn test_negative_amount_reaches_the_converter() {
        let cli = Cli::try_parse_from(["estimate", "words", "-5"]).unwrap();
        let Command::Words { amount } = cli.command else {
            panic!("expected the words command");
        };
        assert_eq!(amount, Decimal::new(-5, 0));
        assert!(matches!(
            amount_in_words(amount),
            Err(CalcError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_bill_flags() {
        let cli = Cli::try_parse_from(["estimate", "bill", "estimate.json", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Bill { json: true, .. }));
    }
}
