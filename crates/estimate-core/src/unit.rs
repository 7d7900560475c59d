//! # Unit Classification
//!
//! Maps a unit-of-measure symbol to the number of dimensions it needs.
//!
//! ## Rules (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  normalized = symbol.trim().to_lowercase()                              │
//! │                                                                         │
//! │  1. COUNT   == "no"  or contains "nos" | "pcs" | "piece"                │
//! │  2. VOLUME  contains "³" | "m3" | "cu" | "cubic"   or token "3"         │
//! │  3. AREA    contains "²" | "m2" | "sq" | "square"  or token "2"         │
//! │  4. LINEAR  everything else, including "" and unknown symbols           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Volume is checked before area so that a symbol carrying both markers
//! is treated as the larger class. Classification never fails.

use crate::types::DimensionClass;

const COUNT_MARKERS: &[&str] = &["nos", "pcs", "piece"];
const VOLUME_MARKERS: &[&str] = &["³", "m3", "cu", "cubic"];
const AREA_MARKERS: &[&str] = &["²", "m2", "sq", "square"];

/// Classifies a unit symbol.
///
/// ## Example
/// ```rust
/// use estimate_core::unit::classify;
/// use estimate_core::DimensionClass;
///
/// assert_eq!(classify("Nos"), DimensionClass::Count);
/// assert_eq!(classify("m³"), DimensionClass::Volume);
/// assert_eq!(classify(" Sqm "), DimensionClass::Area);
/// assert_eq!(classify("rmt"), DimensionClass::Linear);
/// assert_eq!(classify(""), DimensionClass::Linear);
/// ```
pub fn classify(symbol: &str) -> DimensionClass {
    let normalized = symbol.trim().to_lowercase();

    if normalized == "no" || contains_any(&normalized, COUNT_MARKERS) {
        return DimensionClass::Count;
    }

    if contains_any(&normalized, VOLUME_MARKERS) || has_token(&normalized, "3") {
        return DimensionClass::Volume;
    }

    if contains_any(&normalized, AREA_MARKERS) || has_token(&normalized, "2") {
        return DimensionClass::Area;
    }

    DimensionClass::Linear
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// True when `token` appears on its own, delimited by anything that is not
/// a letter or digit ("m 3", "m^3", "3").
fn has_token(haystack: &str, token: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|part| part == token)
}

// =============================================================================
// Unit Tests
// =============================================================================
