//! CLI configuration.
//!
//! Loaded from environment variables with fallback to defaults. The tax
//! defaults are the ones the estimate form starts from (CGST 9%, SGST 9%,
//! L.W. cess 1%, no contingency).

use std::env;
use std::str::FromStr;

use estimate_core::currency::{AMOUNT_DECIMALS, QUANTITY_DECIMALS};
use estimate_core::{CalcError, TaxConfig};
use rust_decimal::Decimal;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Charges used when a document carries no tax block.
    pub default_taxes: TaxConfig,

    /// Decimal places for quantities in printed tables.
    pub quantity_decimals: u32,

    /// Decimal places for amounts in printed tables.
    pub amount_decimals: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_taxes: TaxConfig {
                cgst_percent: Decimal::new(9, 0),
                sgst_percent: Decimal::new(9, 0),
                cess_percent: Decimal::ONE,
                contingency_percent: Decimal::ZERO,
            },
            quantity_decimals: QUANTITY_DECIMALS,
            amount_decimals: AMOUNT_DECIMALS,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `ESTIMATE_CGST_PERCENT`, `ESTIMATE_SGST_PERCENT`,
    ///   `ESTIMATE_CESS_PERCENT`, `ESTIMATE_CONTINGENCY_PERCENT`
    /// - `ESTIMATE_QUANTITY_DECIMALS`, `ESTIMATE_AMOUNT_DECIMALS`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let default_taxes = TaxConfig::new(
            read_or(&lookup, "ESTIMATE_CGST_PERCENT", defaults.default_taxes.cgst_percent)?,
            read_or(&lookup, "ESTIMATE_SGST_PERCENT", defaults.default_taxes.sgst_percent)?,
            read_or(&lookup, "ESTIMATE_CESS_PERCENT", defaults.default_taxes.cess_percent)?,
            read_or(
                &lookup,
                "ESTIMATE_CONTINGENCY_PERCENT",
                defaults.default_taxes.contingency_percent,
            )?,
        )?;

        let config = CliConfig {
            default_taxes,
            quantity_decimals: read_or(&lookup, "ESTIMATE_QUANTITY_DECIMALS", defaults.quantity_decimals)?,
            amount_decimals: read_or(&lookup, "ESTIMATE_AMOUNT_DECIMALS", defaults.amount_decimals)?,
        };

        if config.quantity_decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::InvalidValue("ESTIMATE_QUANTITY_DECIMALS".to_string()));
        }
        if config.amount_decimals > MAX_DISPLAY_DECIMALS {
            return Err(ConfigError::InvalidValue("ESTIMATE_AMOUNT_DECIMALS".to_string()));
        }

        Ok(config)
    }
}

const MAX_DISPLAY_DECIMALS: u32 = 6;

fn read_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid tax configuration: {0}")]
    InvalidTaxes(#[from] CalcError),
}
