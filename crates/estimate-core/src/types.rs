//! # Domain Types
//!
//! Plain value records passed into the calculation core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │    SubItem      │   │   TaxConfig     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  unit           │◄──│  nos            │   │  cgst %         │       │
//! │  │  dimensions     │   │  length         │   │  sgst %         │       │
//! │  │  nos            │   │  breadth        │   │  cess %         │       │
//! │  │  entered qty    │   │  depth          │   │  contingency %  │       │
//! │  │  rate           │   └─────────────────┘   └────────┬────────┘       │
//! │  └─────────────────┘                                  │                │
//! │                                                       ▼                │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ UnitOfMeasure   │   │ DimensionClass  │   │   BillTotals    │       │
//! │  │  symbol         │──►│  Count    (0)   │   │  subtotal       │       │
//! │  └─────────────────┘   │  Linear   (1)   │   │  charges        │       │
//! │                        │  Area     (2)   │   │  gross total    │       │
//! │                        │  Volume   (3)   │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Records are built fresh for every calculation and never mutated by the
//! core. Constructors validate; records deserialized from JSON skip the
//! constructors, so every calculation entry point calls `validate()` again.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::arith;
use crate::error::CalcResult;
use crate::unit;
use crate::validation::{
    validate_amount, validate_description, validate_dimension, validate_discount_percentage,
    validate_nos, validate_optional_dimension, validate_percentage, validate_unit_symbol,
};

fn default_nos() -> Decimal {
    Decimal::ONE
}

// =============================================================================
// Unit of Measure
// =============================================================================

/// How many measured dimensions a unit needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DimensionClass {
    /// Counted items ("Nos", "Pcs"). No dimensions.
    Count,
    /// Running length ("m", "rmt"). Length only.
    Linear,
    /// Surface ("m²", "sqm"). Length × width.
    Area,
    /// Bulk ("m³", "cum"). Length × width × height.
    Volume,
}

impl DimensionClass {
    /// Number of dimensions that must be measured for this class.
    #[inline]
    pub const fn required_dimensions(self) -> u8 {
        match self {
            DimensionClass::Count => 0,
            DimensionClass::Linear => 1,
            DimensionClass::Area => 2,
            DimensionClass::Volume => 3,
        }
    }
}

impl Default for DimensionClass {
    fn default() -> Self {
        DimensionClass::Linear
    }
}

/// A unit of measure as stored in the unit master (e.g. "m³", "Nos").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UnitOfMeasure {
    pub symbol: String,
}

impl UnitOfMeasure {
    /// Creates a validated unit. The symbol is kept as typed; classification
    /// normalizes on its own.
    pub fn new(symbol: impl Into<String>) -> CalcResult<Self> {
        let unit = UnitOfMeasure {
            symbol: symbol.into(),
        };
        unit.validate()?;
        Ok(unit)
    }

    pub fn validate(&self) -> CalcResult<()> {
        validate_unit_symbol(&self.symbol)?;
        Ok(())
    }

    /// Classifies this unit. Never fails.
    #[inline]
    pub fn class(&self) -> DimensionClass {
        unit::classify(&self.symbol)
    }
}

// =============================================================================
// Dimensions
// =============================================================================

/// Measured dimensions of a line item. Absent values count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub length: Option<Decimal>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub width: Option<Decimal>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub height: Option<Decimal>,
}

impl Dimensions {
    /// Creates fully specified dimensions.
    pub fn new(length: Decimal, width: Decimal, height: Decimal) -> CalcResult<Self> {
        let dims = Dimensions {
            length: Some(length),
            width: Some(width),
            height: Some(height),
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Dimensions with nothing measured.
    #[inline]
    pub const fn none() -> Self {
        Dimensions {
            length: None,
            width: None,
            height: None,
        }
    }

    pub fn validate(&self) -> CalcResult<()> {
        validate_optional_dimension("length", self.length)?;
        validate_optional_dimension("width", self.width)?;
        validate_optional_dimension("height", self.height)?;
        Ok(())
    }

    #[inline]
    pub fn length(&self) -> Decimal {
        self.length.unwrap_or(Decimal::ZERO)
    }

    #[inline]
    pub fn width(&self) -> Decimal {
        self.width.unwrap_or(Decimal::ZERO)
    }

    #[inline]
    pub fn height(&self) -> Decimal {
        self.height.unwrap_or(Decimal::ZERO)
    }
}

// =============================================================================
// Sub-Items
// =============================================================================

/// One measured row beneath a work item (nos × L × B × D).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_nos")]
    #[ts(as = "String")]
    pub nos: Decimal,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub length: Option<Decimal>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub breadth: Option<Decimal>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub depth: Option<Decimal>,
}

impl SubItem {
    /// Creates a validated sub-item with every dimension measured.
    pub fn new(
        description: impl Into<String>,
        nos: Decimal,
        length: Decimal,
        breadth: Decimal,
        depth: Decimal,
    ) -> CalcResult<Self> {
        let item = SubItem {
            description: description.into(),
            nos,
            length: Some(length),
            breadth: Some(breadth),
            depth: Some(depth),
        };
        item.validate()?;
        Ok(item)
    }

    /// Sub-item nos may be zero (a row kept for reference); only negatives
    /// are rejected.
    pub fn validate(&self) -> CalcResult<()> {
        validate_description(&self.description)?;
        validate_dimension("nos", self.nos)?;
        validate_optional_dimension("length", self.length)?;
        validate_optional_dimension("breadth", self.breadth)?;
        validate_optional_dimension("depth", self.depth)?;
        Ok(())
    }

    /// `nos × length × breadth × depth`, absent dimensions as zero.
    ///
    /// ## Example
    /// ```rust
    /// use estimate_core::types::SubItem;
    /// use rust_decimal::Decimal;
    ///
    /// let footing = SubItem::new(
    ///     "Footing F1",
    ///     Decimal::new(2, 0),
    ///     Decimal::new(3, 0),
    ///     Decimal::ONE,
    ///     Decimal::ONE,
    /// )
    /// .unwrap();
    /// assert_eq!(footing.quantity().unwrap(), Decimal::new(6, 0));
    /// ```
    pub fn quantity(&self) -> CalcResult<Decimal> {
        self.validate()?;
        arith::product(
            "sub-item quantity",
            &[
                self.nos,
                self.length.unwrap_or(Decimal::ZERO),
                self.breadth.unwrap_or(Decimal::ZERO),
                self.depth.unwrap_or(Decimal::ZERO),
            ],
        )
    }
}

/// A named group of sub-items (e.g. "Foundation", "Superstructure").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub name: String,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

// =============================================================================
// Pricing and Costs
// =============================================================================

/// Per-item discount and profit margin, both in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingAdjustments {
    #[serde(default)]
    #[ts(as = "String")]
    pub discount_percent: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub profit_margin_percent: Decimal,
}

impl PricingAdjustments {
    pub fn new(discount_percent: Decimal, profit_margin_percent: Decimal) -> CalcResult<Self> {
        let adjustments = PricingAdjustments {
            discount_percent,
            profit_margin_percent,
        };
        adjustments.validate()?;
        Ok(adjustments)
    }

    pub fn validate(&self) -> CalcResult<()> {
        validate_discount_percentage(self.discount_percent)?;
        validate_percentage("profit margin", self.profit_margin_percent)?;
        Ok(())
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.discount_percent.is_zero() && self.profit_margin_percent.is_zero()
    }
}

/// Cost components of a work item, summed for the estimate summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[serde(default)]
    #[ts(as = "String")]
    pub material: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub labour: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub equipment: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub overhead: Decimal,
}

impl CostBreakdown {
    pub fn validate(&self) -> CalcResult<()> {
        validate_amount("material cost", self.material)?;
        validate_amount("labour cost", self.labour)?;
        validate_amount("equipment cost", self.equipment)?;
        validate_amount("overhead cost", self.overhead)?;
        Ok(())
    }

    pub fn total(&self) -> CalcResult<Decimal> {
        arith::sum(
            "cost breakdown total",
            [self.material, self.labour, self.equipment, self.overhead],
        )
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A priced work item of an estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    pub unit: UnitOfMeasure,
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default = "default_nos")]
    #[ts(as = "String")]
    pub nos: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub entered_quantity: Decimal,
    #[ts(as = "String")]
    pub rate: Decimal,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    #[serde(default)]
    pub pricing: PricingAdjustments,
    #[serde(default)]
    pub costs: CostBreakdown,
}

impl LineItem {
    /// Creates a validated line item with no sub-items, nos = 1 and no
    /// pricing adjustments. Use the `with_*` methods to add the rest.
    pub fn new(
        description: impl Into<String>,
        unit: UnitOfMeasure,
        dimensions: Dimensions,
        entered_quantity: Decimal,
        rate: Decimal,
    ) -> CalcResult<Self> {
        let item = LineItem {
            description: description.into(),
            unit,
            dimensions,
            nos: Decimal::ONE,
            entered_quantity,
            rate,
            sub_items: Vec::new(),
            sub_categories: Vec::new(),
            pricing: PricingAdjustments::default(),
            costs: CostBreakdown::default(),
        };
        item.validate()?;
        Ok(item)
    }

    pub fn with_nos(mut self, nos: Decimal) -> CalcResult<Self> {
        validate_nos(nos)?;
        self.nos = nos;
        Ok(self)
    }

    pub fn with_sub_items(mut self, sub_items: Vec<SubItem>) -> CalcResult<Self> {
        for sub_item in &sub_items {
            sub_item.validate()?;
        }
        self.sub_items = sub_items;
        Ok(self)
    }

    pub fn with_sub_categories(mut self, sub_categories: Vec<SubCategory>) -> CalcResult<Self> {
        for sub_item in sub_categories.iter().flat_map(|c| &c.sub_items) {
            sub_item.validate()?;
        }
        self.sub_categories = sub_categories;
        Ok(self)
    }

    pub fn with_pricing(mut self, pricing: PricingAdjustments) -> CalcResult<Self> {
        pricing.validate()?;
        self.pricing = pricing;
        Ok(self)
    }

    pub fn with_costs(mut self, costs: CostBreakdown) -> CalcResult<Self> {
        costs.validate()?;
        self.costs = costs;
        Ok(self)
    }

    /// Checks every field, including nested sub-items.
    pub fn validate(&self) -> CalcResult<()> {
        validate_description(&self.description)?;
        self.unit.validate()?;
        self.dimensions.validate()?;
        validate_nos(self.nos)?;
        validate_dimension("entered quantity", self.entered_quantity)?;
        validate_amount("rate", self.rate)?;
        for sub_item in self.all_sub_items() {
            sub_item.validate()?;
        }
        self.pricing.validate()?;
        self.costs.validate()?;
        Ok(())
    }

    /// Direct sub-items followed by those of every sub-category.
    pub fn all_sub_items(&self) -> impl Iterator<Item = &SubItem> {
        self.sub_items
            .iter()
            .chain(self.sub_categories.iter().flat_map(|c| c.sub_items.iter()))
    }

    /// True when the quantity comes from sub-items rather than the item's
    /// own dimensions.
    pub fn has_sub_items(&self) -> bool {
        self.all_sub_items().next().is_some()
    }
}

// =============================================================================
// Taxes
// =============================================================================

/// Percentage charges applied to a bill subtotal.
///
/// Each percentage is applied to the subtotal on its own; charges never
/// compound on each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfig {
    #[serde(default)]
    #[ts(as = "String")]
    pub cgst_percent: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub sgst_percent: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub cess_percent: Decimal,
    #[serde(default)]
    #[ts(as = "String")]
    pub contingency_percent: Decimal,
}

impl TaxConfig {
    pub fn new(
        cgst_percent: Decimal,
        sgst_percent: Decimal,
        cess_percent: Decimal,
        contingency_percent: Decimal,
    ) -> CalcResult<Self> {
        let config = TaxConfig {
            cgst_percent,
            sgst_percent,
            cess_percent,
            contingency_percent,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CalcResult<()> {
        validate_percentage("cgst", self.cgst_percent)?;
        validate_percentage("sgst", self.sgst_percent)?;
        validate_percentage("cess", self.cess_percent)?;
        validate_percentage("contingency", self.contingency_percent)?;
        Ok(())
    }
}

/// Derived, read-only bill totals.
///
/// `gross_total = subtotal + cgst + sgst + cess + contingency`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    #[ts(as = "String")]
    pub subtotal: Decimal,
    #[ts(as = "String")]
    pub cgst_amount: Decimal,
    #[ts(as = "String")]
    pub sgst_amount: Decimal,
    #[ts(as = "String")]
    pub cess_amount: Decimal,
    #[ts(as = "String")]
    pub contingency_amount: Decimal,
    #[ts(as = "String")]
    pub gross_total: Decimal,
}

impl BillTotals {
    /// Sum of all charges on top of the subtotal.
    pub fn charges(&self) -> CalcResult<Decimal> {
        arith::sum(
            "charges",
            [
                self.cgst_amount,
                self.sgst_amount,
                self.cess_amount,
                self.contingency_amount,
            ],
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
