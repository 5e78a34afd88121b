//! # Validation Module
//!
//! Ordered validation of the quote form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Form Validation (ordered checks)                   │
//! │                                                                     │
//! │  User presses "Calculate Shipping"                                  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  1. both addresses non-empty?  ──no──► "Please enter both addresses"│
//! │  2. parcel type selected?      ──no──► "Please select a parcel type"│
//! │  3. weight entered?            ──no──► "Please enter parcel weight" │
//! │  4. weight a real number?      ──no──► "Please enter a valid ..."   │
//! │     weight within type limit?  ──no──► "... cannot exceed N lbs"    │
//! │  5. rate tier selected?        ──no──► "Please select a rate"       │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  RatedShipment ──► quote calculator                                 │
//! │                                                                     │
//! │  Short-circuit: when several fields are wrong, the user is shown    │
//! │  only the FIRST failure, so the check order above is a contract.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swiftship_core::{validate_form, QuoteForm};
//!
//! let form = QuoteForm::default();
//! let err = validate_form(&form).unwrap_err();
//! assert_eq!(err.to_string(), "Please enter both addresses");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{ParcelType, QuoteForm, RateTier};

// =============================================================================
// Validated Output
// =============================================================================

/// The typed result of a successful validation pass.
///
/// Validation parses as it checks, so the calculator downstream works with
/// real types (`ParcelType`, `f64`, `RateTier`) and never has to unwrap an
/// `Option` or re-parse the weight text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatedShipment {
    /// The chosen parcel type.
    pub parcel_type: ParcelType,

    /// Parsed weight in pounds. Finite, non-negative, within the type limit.
    pub weight_lbs: f64,

    /// The chosen rate tier.
    pub selected_rate: RateTier,
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates the form, returning the typed shipment or the first failure.
///
/// Pure function of the form snapshot; no side effects. See the module
/// docs for the check order.
///
/// ## Weight Parsing
/// The weight text is trimmed and parsed as `f64`. Unparseable, non-finite,
/// or negative input is a hard [`ValidationError::InvalidWeight`] - the
/// original screen's `parseFloat` let such input fall through both limit
/// comparisons and priced the shipment anyway.
pub fn validate_form(form: &QuoteForm) -> ValidationResult<RatedShipment> {
    // 1. Both addresses must be present
    if form.sending_address.is_empty() || form.destination_address.is_empty() {
        return Err(ValidationError::MissingAddresses);
    }

    // 2. A parcel type must be chosen before weight rules can apply
    let parcel_type = form.parcel_type.ok_or(ValidationError::MissingParcelType)?;

    // 3. The weight field must not be empty
    if form.parcel_weight.is_empty() {
        return Err(ValidationError::MissingWeight);
    }

    // 4. The weight must be a real, non-negative number within the limit
    let weight_lbs = parse_weight(&form.parcel_weight)?;
    let limit_lbs = parcel_type.max_weight_lbs();
    if weight_lbs > limit_lbs {
        return Err(ValidationError::Overweight {
            parcel: parcel_type,
            limit_lbs,
        });
    }

    // 5. A rate tier must be chosen
    let selected_rate = form.selected_rate.ok_or(ValidationError::MissingRate)?;

    Ok(RatedShipment {
        parcel_type,
        weight_lbs,
        selected_rate,
    })
}

/// Parses the weight text into pounds.
///
/// Rejects anything that is not a finite, non-negative number. The limit
/// boundaries themselves are inclusive (44 lbs and 1.1 lbs are accepted),
/// checked by the caller.
fn parse_weight(text: &str) -> ValidationResult<f64> {
    let weight: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidWeight)?;

    // `parse::<f64>` happily accepts "NaN" and "inf"
    if !weight.is_finite() || weight < 0.0 {
        return Err(ValidationError::InvalidWeight);
    }

    Ok(weight)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Form that passes every check; tests poke holes in it one at a time.
    fn complete_form() -> QuoteForm {
        QuoteForm {
            sending_address: "12 King St W, Toronto".to_string(),
            destination_address: "88 Water St, St. John's".to_string(),
            parcel_type: Some(ParcelType::Package),
            parcel_weight: "10".to_string(),
            selected_rate: Some(RateTier::Standard),
            signature_option: false,
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        let shipment = validate_form(&complete_form()).unwrap();
        assert_eq!(shipment.parcel_type, ParcelType::Package);
        assert_eq!(shipment.weight_lbs, 10.0);
        assert_eq!(shipment.selected_rate, RateTier::Standard);
    }

    #[test]
    fn test_either_address_missing() {
        let mut form = complete_form();
        form.sending_address.clear();
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::MissingAddresses)
        );

        let mut form = complete_form();
        form.destination_address.clear();
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::MissingAddresses)
        );
    }

    #[test]
    fn test_addresses_checked_before_everything_else() {
        // A completely empty form fails on the address rule, not a later one
        let form = QuoteForm::default();
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::MissingAddresses)
        );
    }

    #[test]
    fn test_parcel_type_checked_before_weight_and_rate() {
        // Weight and rate are also missing; the type message still wins
        let form = QuoteForm {
            sending_address: "A".to_string(),
            destination_address: "B".to_string(),
            ..QuoteForm::default()
        };
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::MissingParcelType)
        );
    }

    #[test]
    fn test_empty_weight() {
        let mut form = complete_form();
        form.parcel_weight.clear();
        assert_eq!(validate_form(&form), Err(ValidationError::MissingWeight));
    }

    #[test]
    fn test_package_weight_boundary_inclusive() {
        let mut form = complete_form();
        form.parcel_weight = "44".to_string();
        assert!(validate_form(&form).is_ok());

        form.parcel_weight = "44.01".to_string();
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::Overweight {
                parcel: ParcelType::Package,
                limit_lbs: 44.0,
            })
        );
    }

    #[test]
    fn test_letter_weight_boundary_inclusive() {
        let mut form = complete_form();
        form.parcel_type = Some(ParcelType::Letter);
        form.parcel_weight = "1.1".to_string();
        assert!(validate_form(&form).is_ok());

        form.parcel_weight = "1.2".to_string();
        assert_eq!(
            validate_form(&form),
            Err(ValidationError::Overweight {
                parcel: ParcelType::Letter,
                limit_lbs: 1.1,
            })
        );
    }

    #[test]
    fn test_garbage_weight_is_a_hard_error() {
        for bad in ["abc", "12kg", "NaN", "inf", "-3", "--", "1.2.3"] {
            let mut form = complete_form();
            form.parcel_weight = bad.to_string();
            assert_eq!(
                validate_form(&form),
                Err(ValidationError::InvalidWeight),
                "weight {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_weight_text_is_trimmed_before_parsing() {
        let mut form = complete_form();
        form.parcel_weight = " 10 ".to_string();
        assert_eq!(validate_form(&form).unwrap().weight_lbs, 10.0);
    }

    #[test]
    fn test_missing_rate_is_the_last_check() {
        let mut form = complete_form();
        form.selected_rate = None;
        assert_eq!(validate_form(&form), Err(ValidationError::MissingRate));
    }
}
