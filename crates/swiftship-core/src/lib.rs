//! # swiftship-core: Pure Business Logic for SwiftShip
//!
//! This crate is the **heart** of SwiftShip. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     SwiftShip Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Mobile Frontend (React Native)             │   │
//! │  │   Address Inputs ──► Type/Rate Radios ──► Calculate Button  │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │                  swiftship-session                          │   │
//! │  │   FormState, submit_quote, Alert/Modal surfaces             │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │             ★ swiftship-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────┐ │   │
//! │  │  │  types  │ │  money  │ │  rates  │ │validation│ │quote │ │   │
//! │  │  │ Parcel  │ │  Money  │ │  Rate   │ │  rules   │ │ calc │ │   │
//! │  │  │ Tier    │ │ TaxRate │ │  Table  │ │  checks  │ │      │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └──────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • NO UI • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ParcelType, RateTier, QuoteForm, Quote)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`rates`] - The fixed shipping rate table
//! - [`error`] - Validation error type with fixed user-facing messages
//! - [`validation`] - Ordered form validation rules
//! - [`quote`] - The quote calculator
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and platform UI access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use swiftship_core::{quote_for, ParcelType, QuoteForm, RateTier};
//!
//! let form = QuoteForm {
//!     sending_address: "12 King St W, Toronto".to_string(),
//!     destination_address: "88 Water St, St. John's".to_string(),
//!     parcel_type: Some(ParcelType::Package),
//!     parcel_weight: "10".to_string(),
//!     selected_rate: Some(RateTier::Xpress),
//!     signature_option: false,
//! };
//!
//! let quote = quote_for(&form).unwrap();
//! assert_eq!(quote.subtotal.cents(), 1899); // $18.99
//! assert_eq!(quote.tax.cents(), 247);       // $2.47 at 13% HST
//! assert_eq!(quote.total.cents(), 2146);    // $21.46
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod quote;
pub mod rates;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use swiftship_core::Money` instead of
// `use swiftship_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use quote::{quote_for, Quote};
pub use rates::RateTable;
pub use types::*;
pub use validation::{validate_form, RatedShipment};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat fee for the signature-on-delivery option ($2.00).
///
/// ## Business Reason
/// Recipient signature is a per-shipment add-on, independent of parcel
/// type, weight, and rate tier.
pub const SIGNATURE_FEE: Money = Money::from_cents(200);

/// Sales tax applied to every quote: 13% HST, expressed in basis points.
pub const TAX_RATE: types::TaxRate = types::TaxRate::from_bps(1300);

/// Maximum accepted weight for a package, in pounds (inclusive).
///
/// ## Business Reason
/// 44 lbs (~20 kg) is the handling limit for standard package service.
pub const MAX_PACKAGE_WEIGHT_LBS: f64 = 44.0;

/// Maximum accepted weight for a letter or document, in pounds (inclusive).
///
/// ## Business Reason
/// Anything above 1.1 lbs (~500 g) must ship as a package.
pub const MAX_LETTER_WEIGHT_LBS: f64 = 1.1;
