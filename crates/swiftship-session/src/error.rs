//! # Form Error DTO
//!
//! The error shape handed across the UI boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in SwiftShip                          │
//! │                                                                     │
//! │  swiftship-core                swiftship-session        Frontend    │
//! │  ──────────────                ─────────────────        ────────    │
//! │                                                                     │
//! │  ValidationError ────From────► FormError ──serialize──► { code,     │
//! │  (typed variant)               (code + message)          message }  │
//! │                                                                     │
//! │  The message string is shown to the user VERBATIM - the core        │
//! │  error text IS the user-facing copy, never transformed here.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every form error is recoverable by resubmission; there is no fatal
//! class and nothing to retry automatically.

use serde::Serialize;
use ts_rs::TS;

use swiftship_core::ValidationError;

/// Form submission error returned to the frontend.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OVERWEIGHT_PARCEL",
///   "message": "Package weight cannot exceed 44 lbs"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for form submission failures.
///
/// ## Usage in Frontend
/// ```typescript
/// const outcome = submit();
/// if (outcome.code === 'MISSING_FIELD') {
///   highlightFirstEmptyField();
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A required field is empty or unselected.
    MissingField,

    /// The weight text is not a usable number.
    InvalidWeight,

    /// The parcel is heavier than its type allows.
    OverweightParcel,
}

impl FormError {
    /// Creates a new form error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        FormError {
            code,
            message: message.into(),
        }
    }
}

/// Converts core validation errors to boundary errors.
/// The message is the core error's Display output, untouched.
impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::MissingAddresses
            | ValidationError::MissingParcelType
            | ValidationError::MissingWeight
            | ValidationError::MissingRate => ErrorCode::MissingField,
            ValidationError::InvalidWeight => ErrorCode::InvalidWeight,
            ValidationError::Overweight { .. } => ErrorCode::OverweightParcel,
        };
        FormError::new(code, err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use swiftship_core::ParcelType;

    #[test]
    fn test_message_passes_through_verbatim() {
        let err = FormError::from(ValidationError::MissingAddresses);
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.message, "Please enter both addresses");

        let err = FormError::from(ValidationError::Overweight {
            parcel: ParcelType::Letter,
            limit_lbs: 1.1,
        });
        assert_eq!(err.code, ErrorCode::OverweightParcel);
        assert_eq!(err.message, "Letter weight cannot exceed 1.1 lbs");
    }

    #[test]
    fn test_serialized_shape_for_the_frontend() {
        let err = FormError::from(ValidationError::InvalidWeight);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_WEIGHT");
        assert_eq!(json["message"], "Please enter a valid parcel weight");
    }
}
