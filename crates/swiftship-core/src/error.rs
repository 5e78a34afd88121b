//! # Error Types
//!
//! Validation errors for the quote form.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                  │
//! │                                                                     │
//! │  swiftship-core (this file)                                         │
//! │  └── ValidationError  - first failed form rule, fixed message       │
//! │                                                                     │
//! │  swiftship-session                                                  │
//! │  └── FormError        - what the frontend sees (serialized)         │
//! │                                                                     │
//! │  Flow: ValidationError → FormError → Surface::show_error            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant IS the user-facing message - the surface shows it
//!    verbatim, so the `#[error(...)]` strings are part of the contract
//! 4. Every error is recoverable: the user fixes the field and resubmits

use thiserror::Error;

use crate::types::ParcelType;

// =============================================================================
// Validation Error
// =============================================================================

/// The first form rule a submission violated.
///
/// Variants are ordered the way the validator checks them; when several
/// fields are wrong, the user sees exactly one message, always the same one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// One or both address fields are empty.
    #[error("Please enter both addresses")]
    MissingAddresses,

    /// No parcel type radio button has been tapped yet.
    #[error("Please select a parcel type")]
    MissingParcelType,

    /// The weight field is empty.
    #[error("Please enter parcel weight")]
    MissingWeight,

    /// The weight field does not parse as a finite, non-negative number.
    ///
    /// The original screen let such input slip through `parseFloat`
    /// unnoticed; here it is a hard error.
    #[error("Please enter a valid parcel weight")]
    InvalidWeight,

    /// The parcel is heavier than its type allows.
    #[error("{parcel} weight cannot exceed {limit_lbs} lbs")]
    Overweight {
        parcel: ParcelType,
        /// Inclusive limit in pounds (44 for packages, 1.1 for letters).
        limit_lbs: f64,
    },

    /// No rate tier has been selected.
    #[error("Please select a rate")]
    MissingRate,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
