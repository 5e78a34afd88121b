//! # Submit Flow
//!
//! The single Calculate-button operation.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                submit_quote(form_state, surface)                    │
//! │                                                                     │
//! │  1. Snapshot the session ──► QuoteForm (read once, spec'd order)    │
//! │  2. quote_for(&form)     ──► validate, then price                   │
//! │  3. Dispatch:                                                       │
//! │     Ok(quote)  ──► surface.show_quote(&quote)                       │
//! │     Err(rule)  ──► surface.show_error(message)  (first failure      │
//! │                                                  only, verbatim)    │
//! │  4. Return the stamped outcome to the caller                        │
//! │                                                                     │
//! │  Runs to completion inside one UI callback. Nothing suspends.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! On failure the session is left untouched - the user corrects the
//! offending field and taps Calculate again.
//!
//! The calculator itself stays clock-free (the same form always prices
//! identically); the moment of presentation is stamped here, the same way
//! the cart layer - not the pricing math - timestamps its snapshots.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use ts_rs::TS;

use swiftship_core::{quote_for, Quote};

use crate::error::FormError;
use crate::session::FormState;
use crate::surface::Surface;

// =============================================================================
// Presented Quote
// =============================================================================

/// A quote together with when it was presented to the user.
///
/// The timestamp belongs to the presentation event, not the price: quoting
/// the same form twice yields the identical [`Quote`] inside, stamped at
/// two different moments.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PresentedQuote {
    /// The priced quote, exactly as the surface rendered it.
    pub quote: Quote,

    /// When this submission was presented.
    #[ts(as = "String")]
    pub quoted_at: DateTime<Utc>,
}

// =============================================================================
// Submit Command
// =============================================================================

/// Validates the current form and presents the quote or the first error.
///
/// The outcome is also returned so a host bridge can serialize it, but the
/// surface has already been told everything it needs to render.
///
/// ## Example
/// ```rust
/// use swiftship_core::{ParcelType, RateTier};
/// use swiftship_session::{submit_quote, AlertSurface, FormState};
///
/// let state = FormState::new();
/// state.with_form_mut(|s| {
///     s.set_sending_address("A");
///     s.set_destination_address("B");
///     s.set_parcel_type(ParcelType::Package);
///     s.set_parcel_weight("10");
///     s.set_selected_rate(RateTier::Xpress);
/// });
///
/// let mut surface = AlertSurface::new();
/// let presented = submit_quote(&state, &mut surface).unwrap();
/// assert_eq!(presented.quote.total.to_string(), "$21.46");
/// assert!(surface.last_alert.is_some());
/// ```
pub fn submit_quote(
    form_state: &FormState,
    surface: &mut dyn Surface,
) -> Result<PresentedQuote, FormError> {
    debug!("submit_quote command");

    let form = form_state.with_form(|s| s.snapshot());

    match quote_for(&form) {
        Ok(quote) => {
            info!(
                parcel = %quote.parcel_type,
                rate = %quote.selected_rate,
                total = %quote.total,
                "quote presented"
            );
            surface.show_quote(&quote);
            Ok(PresentedQuote {
                quote,
                quoted_at: Utc::now(),
            })
        }
        Err(err) => {
            let form_err = FormError::from(err);
            debug!(message = %form_err.message, "form rejected");
            surface.show_error(&form_err.message);
            Err(form_err)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::surface::{AlertSurface, ModalSurface};
    use swiftship_core::{ParcelType, RateTier};

    fn filled_state() -> FormState {
        let state = FormState::new();
        state.with_form_mut(|s| {
            s.set_sending_address("A");
            s.set_destination_address("B");
            s.set_parcel_type(ParcelType::Package);
            s.set_parcel_weight("10");
            s.set_selected_rate(RateTier::Xpress);
        });
        state
    }

    #[test]
    fn test_full_valid_submission_end_to_end() {
        let state = filled_state();
        let mut surface = AlertSurface::new();

        let presented = submit_quote(&state, &mut surface).unwrap();
        assert_eq!(presented.quote.subtotal.to_string(), "$18.99");
        assert_eq!(presented.quote.tax.to_string(), "$2.47");
        assert_eq!(presented.quote.total.to_string(), "$21.46");

        let alert = surface.last_alert.unwrap();
        assert_eq!(alert.title, "SwiftShip Order Summary");
        assert!(alert.message.contains("Subtotal: $18.99"));
        assert!(alert.message.contains("Tax (13%): $2.47"));
        assert!(alert.message.contains("Total: $21.46"));
    }

    #[test]
    fn test_presented_quote_is_stamped_but_the_price_is_not() {
        let state = filled_state();
        let mut surface = ModalSurface::new();

        let before = Utc::now();
        let first = submit_quote(&state, &mut surface).unwrap();
        let second = submit_quote(&state, &mut surface).unwrap();

        // Same form, identical price - only the presentation moment moves
        assert_eq!(first.quote, second.quote);
        assert!(first.quoted_at >= before);
        assert!(second.quoted_at >= first.quoted_at);
    }

    #[test]
    fn test_rejected_submission_surfaces_the_first_error_only() {
        // Empty session: every rule fails, the address message wins
        let state = FormState::new();
        let mut surface = ModalSurface::new();

        let err = submit_quote(&state, &mut surface).unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.message, "Please enter both addresses");
        assert_eq!(surface.error.as_deref(), Some("Please enter both addresses"));
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_user_can_correct_and_resubmit() {
        let state = filled_state();
        state.with_form_mut(|s| s.set_parcel_weight("45"));
        let mut surface = AlertSurface::new();

        let err = submit_quote(&state, &mut surface).unwrap_err();
        assert_eq!(err.message, "Package weight cannot exceed 44 lbs");

        // Fix the weight and try again - same session, no reset required
        state.with_form_mut(|s| s.set_parcel_weight("44"));
        let presented = submit_quote(&state, &mut surface).unwrap();
        assert_eq!(presented.quote.parcel_weight, "44");
    }

    #[test]
    fn test_both_variants_present_the_same_quote() {
        let state = filled_state();
        let mut alert = AlertSurface::new();
        let mut modal = ModalSurface::new();

        let from_alert = submit_quote(&state, &mut alert).unwrap();
        let from_modal = submit_quote(&state, &mut modal).unwrap();
        assert_eq!(from_alert.quote, from_modal.quote);

        // The alert body is exactly the modal's lines plus spacing
        let alert_body = alert.last_alert.unwrap().message;
        for line in &modal.lines {
            assert!(alert_body.contains(line.as_str()));
        }
    }

    #[test]
    fn test_submit_does_not_mutate_the_session() {
        let state = filled_state();
        let before = state.with_form(|s| s.snapshot());

        let mut surface = ModalSurface::new();
        submit_quote(&state, &mut surface).unwrap();

        let after = state.with_form(|s| s.snapshot());
        assert_eq!(before, after);
    }
}
