//! # estimate-core: Pure Calculation Rules for Civil-Works Estimates
//!
//! This crate holds the quantity and billing rules behind estimates,
//! measurement books and abstract bills, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estimator Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Pages / API routes / PDF & Excel export            │   │
//! │  │   Estimate form ──► Work items ──► Measurement book ──► Bill     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain records                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ estimate-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐       │   │
//! │  │   │   unit   │─►│ quantity │─►│  amount  │  │  words   │       │   │
//! │  │   │ classify │  │  derive  │  │  totals  │  │ lakh/cr  │       │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Persistence (stores computed quantity / amount)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value records (LineItem, SubItem, TaxConfig, BillTotals, ...)
//! - [`unit`] - Unit symbol → dimension class
//! - [`quantity`] - Quantity derivation and sub-item rollup
//! - [`amount`] - Line amounts, subtotals, tax / cess / contingency
//! - [`words`] - Amount in words, Indian numbering
//! - [`currency`] - Rounding and ₹ display helpers
//! - [`abstract_bill`] - Abstract bills from measurement entries
//! - [`validation`] - Boundary checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, bit-identical output; safe to call
//!    from any number of threads
//! 2. **Exact Decimals**: every quantity and rupee is a `Decimal`
//! 3. **Reject, Don't Clamp**: negative input is an error, never a zero
//! 4. **No Rounding Inside**: display precision is the caller's choice
//!
//! ## Example Usage
//!
//! ```rust
//! use estimate_core::{amount, Dimensions, LineItem, TaxConfig, UnitOfMeasure};
//! use rust_decimal::Decimal;
//!
//! let slab = LineItem::new(
//!     "RCC slab",
//!     UnitOfMeasure::new("m³").unwrap(),
//!     Dimensions::new(Decimal::new(5, 0), Decimal::new(4, 0), Decimal::new(1, 1)).unwrap(),
//!     Decimal::ZERO,
//!     Decimal::new(500, 0),
//! )
//! .unwrap();
//!
//! let taxes = TaxConfig::new(Decimal::new(9, 0), Decimal::new(9, 0), Decimal::ONE, Decimal::ZERO)
//!     .unwrap();
//! let totals = amount::bill_totals(&[slab], &taxes).unwrap();
//!
//! // 5 × 4 × 0.1 = 2 m³ at ₹500 = ₹1000, plus 19% charges
//! assert_eq!(totals.gross_total, Decimal::new(1190, 0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod abstract_bill;
pub mod amount;
mod arith;
pub mod currency;
pub mod error;
pub mod quantity;
pub mod types;
pub mod unit;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use abstract_bill::{AbstractBill, AbstractBillLine, MeasurementEntry};
pub use error::{CalcError, CalcResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted unit symbol ("Cu.m", "Sqm", "Nos", ...).
pub const MAX_UNIT_SYMBOL_LEN: usize = 20;

/// Longest accepted work-item description.
pub const MAX_DESCRIPTION_LEN: usize = 500;
