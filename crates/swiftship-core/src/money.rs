//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  The original SwiftShip screen computed quotes in floats and        │
//! │  rounded at render time. It happened to work for this table, but    │
//! │  only by luck.                                                      │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    $12.99 is 1299 cents. Tax is computed in integer math with       │
//! │    explicit half-up rounding. No accumulation drift, ever.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swiftship_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(1299); // $12.99
//!
//! // Arithmetic operations
//! let with_signature = rate + Money::from_cents(200); // $14.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(12.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Keeps the type interchangeable with standard
///   currency tooling even though quotes are never negative
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// RateTable entry ──► subtotal ──► calculate_tax ──► tax ──► total
///                        │
///                        └──► Displayed as "$18.99" in the summary
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use swiftship_core::money::Money;
    ///
    /// let rate = Money::from_cents(1299); // Represents $12.99
    /// assert_eq!(rate.cents(), 1299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// Used by the rate table so entries read like the posted prices.
    ///
    /// ## Example
    /// ```rust
    /// use swiftship_core::money::Money;
    ///
    /// let rate = Money::from_major_minor(12, 99); // $12.99
    /// assert_eq!(rate.cents(), 1299);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Money(major * 100 + minor)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax with half-up rounding to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount_cents * bps + 5000) / 10000`.
    /// The +5000 provides half-up rounding (5000/10000 = 0.5), which is the
    /// standard currency rounding the quote summary promises.
    ///
    /// ## Example
    /// ```rust
    /// use swiftship_core::money::Money;
    /// use swiftship_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(1299); // $12.99
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1300)); // 13% HST
    ///
    /// // $12.99 × 13% = $1.6887 → rounds to $1.69
    /// assert_eq!(tax.cents(), 169);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 to prevent overflow on large amounts
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the summary format: `$12.99`.
///
/// ## Note
/// Both presentation surfaces render money through this impl, so the
/// "exactly 2 decimal places" contract lives in one place.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
