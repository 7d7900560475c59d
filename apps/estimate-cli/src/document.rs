//! Input documents read by the CLI.
//!
//! These are the JSON shapes the web application exports for an estimate
//! and for a measurement book. Both reuse the core records unchanged.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use estimate_core::{LineItem, MeasurementEntry, TaxConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Estimate categories offered by the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateCategory {
    Building,
    Road,
    Drain,
    Culvert,
    Electrical,
    #[serde(rename = "Water Supply")]
    WaterSupply,
    Irrigation,
    Miscellaneous,
}

impl EstimateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateCategory::Building => "Building",
            EstimateCategory::Road => "Road",
            EstimateCategory::Drain => "Drain",
            EstimateCategory::Culvert => "Culvert",
            EstimateCategory::Electrical => "Electrical",
            EstimateCategory::WaterSupply => "Water Supply",
            EstimateCategory::Irrigation => "Irrigation",
            EstimateCategory::Miscellaneous => "Miscellaneous",
        }
    }
}

impl fmt::Display for EstimateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An estimate with its work items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateDocument {
    pub title: String,
    #[serde(default)]
    pub category: Option<EstimateCategory>,
    #[serde(default)]
    pub location: Option<String>,
    /// Missing means "use the configured defaults".
    #[serde(default)]
    pub taxes: Option<TaxConfig>,
    pub work_items: Vec<LineItem>,
}

/// A measurement book with the estimate it measures against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementBookDocument {
    pub title: String,
    #[serde(default)]
    pub bill_no: Option<String>,
    #[serde(default)]
    pub contractor: Option<String>,
    #[serde(default)]
    pub engineer: Option<String>,
    #[serde(default)]
    pub taxes: Option<TaxConfig>,
    pub work_items: Vec<LineItem>,
    pub entries: Vec<MeasurementEntry>,
}

/// Reads and parses a JSON document.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}
