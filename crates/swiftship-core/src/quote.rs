//! # Quote Calculator
//!
//! Turns a validated form into a priced quote.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Quote Calculation                             │
//! │                                                                     │
//! │  RateTable[(type, tier)]                                            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  + signature fee ($2.00 if checked) ──► subtotal                    │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  × 13% HST (half-up to the cent) ─────► tax                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  subtotal + tax ──────────────────────► total                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Once validation has passed there are no error conditions left: the rate
//! table is total over the closed enum product, and the arithmetic is plain
//! integer math.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::rates::RateTable;
use crate::types::{ParcelType, QuoteForm, RateTier};
use crate::validation::validate_form;
use crate::{SIGNATURE_FEE, TAX_RATE};

// =============================================================================
// Quote
// =============================================================================

/// A priced shipping quote, ready for display.
///
/// Echoes the form fields the user submitted (the summary shows them back)
/// plus the computed price breakdown. Transient: consumed by a presentation
/// surface and discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Sending address, echoed verbatim.
    pub sending_address: String,

    /// Destination address, echoed verbatim.
    pub destination_address: String,

    /// The chosen parcel type.
    pub parcel_type: ParcelType,

    /// The weight text exactly as the user entered it.
    pub parcel_weight: String,

    /// The chosen rate tier.
    pub selected_rate: RateTier,

    /// Whether the signature add-on was included.
    pub signature_option: bool,

    /// Base rate plus the optional signature fee.
    pub subtotal: Money,

    /// 13% HST on the subtotal, rounded half-up to the cent.
    pub tax: Money,

    /// `subtotal + tax`.
    pub total: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Validates the form and, if it passes, computes the quote.
///
/// Pure and idempotent: the same form always yields the identical quote.
///
/// ## Example
/// ```rust
/// use swiftship_core::{quote_for, ParcelType, QuoteForm, RateTier};
///
/// let form = QuoteForm {
///     sending_address: "A".to_string(),
///     destination_address: "B".to_string(),
///     parcel_type: Some(ParcelType::Letter),
///     parcel_weight: "0.5".to_string(),
///     selected_rate: Some(RateTier::Priority),
///     signature_option: true,
/// };
///
/// let quote = quote_for(&form).unwrap();
/// assert_eq!(quote.subtotal.to_string(), "$16.99"); // $14.99 + $2.00
/// assert_eq!(quote.tax.to_string(), "$2.21");
/// assert_eq!(quote.total.to_string(), "$19.20");
/// ```
pub fn quote_for(form: &QuoteForm) -> ValidationResult<Quote> {
    let shipment = validate_form(form)?;

    let base = RateTable::base_rate(shipment.parcel_type, shipment.selected_rate);
    let signature_fee = if form.signature_option {
        SIGNATURE_FEE
    } else {
        Money::zero()
    };

    let subtotal = base + signature_fee;
    let tax = subtotal.calculate_tax(TAX_RATE);
    let total = subtotal + tax;

    Ok(Quote {
        sending_address: form.sending_address.clone(),
        destination_address: form.destination_address.clone(),
        parcel_type: shipment.parcel_type,
        parcel_weight: form.parcel_weight.clone(),
        selected_rate: shipment.selected_rate,
        signature_option: form.signature_option,
        subtotal,
        tax,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn form(parcel: ParcelType, tier: RateTier, signature: bool) -> QuoteForm {
        QuoteForm {
            sending_address: "12 King St W, Toronto".to_string(),
            destination_address: "88 Water St, St. John's".to_string(),
            parcel_type: Some(parcel),
            parcel_weight: "1".to_string(),
            selected_rate: Some(tier),
            signature_option: signature,
        }
    }

    #[test]
    fn test_standard_package_without_signature() {
        let quote = quote_for(&form(ParcelType::Package, RateTier::Standard, false)).unwrap();
        assert_eq!(quote.subtotal.cents(), 1299); // $12.99
        assert_eq!(quote.tax.cents(), 169); // 12.99 × 0.13 = 1.6887 → 1.69
        assert_eq!(quote.total.cents(), 1468); // $14.68
    }

    #[test]
    fn test_priority_letter_with_signature() {
        let quote = quote_for(&form(ParcelType::Letter, RateTier::Priority, true)).unwrap();
        assert_eq!(quote.subtotal.cents(), 1699); // $14.99 + $2.00
        assert_eq!(quote.tax.cents(), 221); // 16.99 × 0.13 = 2.2087 → 2.21
        assert_eq!(quote.total.cents(), 1920); // $19.20
    }

    #[test]
    fn test_signature_fee_is_flat_across_types() {
        let without = quote_for(&form(ParcelType::Package, RateTier::Xpress, false)).unwrap();
        let with = quote_for(&form(ParcelType::Package, RateTier::Xpress, true)).unwrap();
        assert_eq!((with.subtotal - without.subtotal).cents(), 200);
    }

    #[test]
    fn test_quote_echoes_the_form_fields() {
        let input = form(ParcelType::Package, RateTier::Xpress, true);
        let quote = quote_for(&input).unwrap();

        assert_eq!(quote.sending_address, input.sending_address);
        assert_eq!(quote.destination_address, input.destination_address);
        assert_eq!(quote.parcel_type, ParcelType::Package);
        assert_eq!(quote.parcel_weight, "1");
        assert_eq!(quote.selected_rate, RateTier::Xpress);
        assert!(quote.signature_option);
    }

    #[test]
    fn test_calculator_is_idempotent() {
        let input = form(ParcelType::Letter, RateTier::Standard, true);
        let first = quote_for(&input).unwrap();
        let second = quote_for(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_form_never_produces_a_quote() {
        let mut input = form(ParcelType::Package, RateTier::Standard, false);
        input.parcel_weight = "44.01".to_string();
        assert_eq!(
            quote_for(&input),
            Err(ValidationError::Overweight {
                parcel: ParcelType::Package,
                limit_lbs: 44.0,
            })
        );
    }

    #[test]
    fn test_quote_serializes_camel_case_for_the_frontend() {
        let quote = quote_for(&form(ParcelType::Package, RateTier::Standard, false)).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["sendingAddress"], "12 King St W, Toronto");
        assert_eq!(json["parcelType"], "package");
        assert_eq!(json["selectedRate"], "standard");
        // Money serializes as integer cents
        assert_eq!(json["subtotal"], 1299);
    }
}
