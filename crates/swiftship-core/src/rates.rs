//! # Rate Table
//!
//! The fixed shipping rate table.
//!
//! ## The Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │              Base Rates (per parcel type × tier)                    │
//! │                                                                     │
//! │               Standard      Xpress Post    Priority Post            │
//! │  Package       $12.99        $18.99         $24.99                  │
//! │  Letter         $4.99         $9.99         $14.99                  │
//! │                                                                     │
//! │  Signature option: flat +$2.00 on top of any base rate              │
//! │  Tax: 13% HST on the subtotal                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Completeness
//! The table is an exhaustive `match` over `(ParcelType, RateTier)`. The
//! compiler proves every combination resolves, so pricing a validated form
//! can never fail at runtime.

use crate::money::Money;
use crate::types::{ParcelType, RateTier};

/// The six-entry shipping rate table. Never mutated at runtime.
pub struct RateTable;

impl RateTable {
    /// Base price for shipping `parcel` at `tier`, before the signature
    /// fee and tax.
    ///
    /// ## Example
    /// ```rust
    /// use swiftship_core::{Money, ParcelType, RateTable, RateTier};
    ///
    /// let rate = RateTable::base_rate(ParcelType::Package, RateTier::Xpress);
    /// assert_eq!(rate, Money::from_cents(1899)); // $18.99
    /// ```
    pub const fn base_rate(parcel: ParcelType, tier: RateTier) -> Money {
        match (parcel, tier) {
            (ParcelType::Package, RateTier::Standard) => Money::from_major_minor(12, 99),
            (ParcelType::Package, RateTier::Xpress) => Money::from_major_minor(18, 99),
            (ParcelType::Package, RateTier::Priority) => Money::from_major_minor(24, 99),
            (ParcelType::Letter, RateTier::Standard) => Money::from_major_minor(4, 99),
            (ParcelType::Letter, RateTier::Xpress) => Money::from_major_minor(9, 99),
            (ParcelType::Letter, RateTier::Priority) => Money::from_major_minor(14, 99),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
