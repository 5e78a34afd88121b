//! # Domain Types
//!
//! Core domain types used throughout SwiftShip.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐     │
//! │  │   ParcelType    │  │    RateTier     │  │    TaxRate      │     │
//! │  │  ─────────────  │  │  ─────────────  │  │  ─────────────  │     │
//! │  │  Package        │  │  Standard       │  │  bps (u32)      │     │
//! │  │  Letter         │  │  Xpress         │  │  1300 = 13%     │     │
//! │  │                 │  │  Priority       │  │                 │     │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘     │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │  QuoteForm                                                  │   │
//! │  │  ─────────────────────────────────────────────────────────  │   │
//! │  │  sending_address, destination_address  (free-text strings)  │   │
//! │  │  parcel_type: Option<ParcelType>  (unset until tapped)      │   │
//! │  │  parcel_weight: String  (numeric text, validated later)     │   │
//! │  │  selected_rate: Option<RateTier>                            │   │
//! │  │  signature_option: bool                                     │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both enums are **closed sets**: the rate table is a total function over
//! their product, so a validated form can always be priced.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1300 bps = 13% (Ontario HST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Parcel Type
// =============================================================================

/// What is being shipped: a package, or a letter/document.
///
/// Selecting the type picks the rate table partition and the weight limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ParcelType {
    /// A boxed shipment, up to 44 lbs.
    Package,
    /// A letter or document, up to 1.1 lbs.
    Letter,
}

impl ParcelType {
    /// All parcel types, in the order the form presents them.
    pub const ALL: [ParcelType; 2] = [ParcelType::Package, ParcelType::Letter];

    /// The radio-button label shown on the form.
    pub const fn label(&self) -> &'static str {
        match self {
            ParcelType::Package => "Package",
            ParcelType::Letter => "Letter or Document",
        }
    }

    /// Maximum accepted weight in pounds (inclusive).
    pub const fn max_weight_lbs(&self) -> f64 {
        match self {
            ParcelType::Package => crate::MAX_PACKAGE_WEIGHT_LBS,
            ParcelType::Letter => crate::MAX_LETTER_WEIGHT_LBS,
        }
    }
}

/// Short name used in error messages and the quote summary
/// ("Package weight cannot exceed 44 lbs", "Type: Letter").
impl fmt::Display for ParcelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParcelType::Package => write!(f, "Package"),
            ParcelType::Letter => write!(f, "Letter"),
        }
    }
}

// =============================================================================
// Rate Tier
// =============================================================================

/// Service speed for the shipment. Each tier has a fixed price per
/// parcel type (see [`crate::rates::RateTable`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Slowest, cheapest service.
    Standard,
    /// Expedited service.
    Xpress,
    /// Fastest service.
    Priority,
}

impl RateTier {
    /// All rate tiers, in the order the form presents them.
    pub const ALL: [RateTier; 3] = [RateTier::Standard, RateTier::Xpress, RateTier::Priority];

    /// The radio-button label shown on the form.
    pub const fn label(&self) -> &'static str {
        match self {
            RateTier::Standard => "Standard",
            RateTier::Xpress => "Xpress Post",
            RateTier::Priority => "Priority Post",
        }
    }
}

/// Display label used in the quote summary ("Rate: Xpress Post").
impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Quote Form
// =============================================================================

/// A snapshot of the six form fields, exactly as the user left them.
///
/// ## Lifecycle
/// Created empty at session start, mutated field-by-field by the session
/// layer, read once by [`crate::validation::validate_form`] /
/// [`crate::quote::quote_for`] when the user presses Calculate.
///
/// `parcel_weight` stays a string here: the raw text is what the user must
/// see echoed back, and whether it parses is a validation question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    /// Free-text sending address. Only non-emptiness is checked.
    pub sending_address: String,

    /// Free-text destination address. Only non-emptiness is checked.
    pub destination_address: String,

    /// Chosen parcel type; `None` until the user taps a radio button.
    pub parcel_type: Option<ParcelType>,

    /// Weight as entered (numeric text, pounds).
    pub parcel_weight: String,

    /// Chosen rate tier; only meaningful once `parcel_type` is set.
    pub selected_rate: Option<RateTier>,

    /// Whether the signature-on-delivery add-on is checked.
    pub signature_option: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
