//! # Form Session State
//!
//! Manages the current quote form session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple UI callbacks may access/modify the form
//! 2. Only one callback should modify it at a time
//! 3. The host's event bridge may invoke callbacks from its own thread
//!
//! In practice the UI event model is single-threaded and there is exactly
//! one writer; the lock makes that exclusivity explicit instead of ambient.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Form Session Operations                            │
//! │                                                                     │
//! │  UI Event                  Setter                 Session Change    │
//! │  ────────                  ──────                 ──────────────    │
//! │  Types in address ───────► set_sending_address ─► field = text      │
//! │  Taps type radio ────────► set_parcel_type ─────► Some(type)        │
//! │  Types weight ───────────► set_parcel_weight ───► field = text      │
//! │  Taps rate radio ────────► set_selected_rate ───► Some(tier)        │
//! │  Taps signature box ─────► toggle_signature ────► flag = !flag      │
//! │  Starts over ────────────► reset ───────────────► all fields empty  │
//! │                                                                     │
//! │  Taps Calculate ─────────► snapshot ────────────► (read only)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use swiftship_core::{ParcelType, QuoteForm, RateTier};

// =============================================================================
// Form Session
// =============================================================================

/// One quote form session: the six input fields plus when it began.
///
/// ## Invariants
/// - Created with every field empty/unset
/// - Mutated only through the setters below (field-by-field, mirroring the
///   UI events), never shared while mutable
/// - `selected_rate` may be set before `parcel_type` (the session does not
///   gate it); validation ordering on submit surfaces the type error first
#[derive(Debug, Clone)]
pub struct FormSession {
    form: QuoteForm,
    started_at: DateTime<Utc>,
}

impl FormSession {
    /// Creates a new empty session.
    pub fn new() -> Self {
        FormSession {
            form: QuoteForm::default(),
            started_at: Utc::now(),
        }
    }

    /// Replaces the sending address with the current text-input contents.
    pub fn set_sending_address(&mut self, text: impl Into<String>) {
        self.form.sending_address = text.into();
    }

    /// Replaces the destination address with the current text-input contents.
    pub fn set_destination_address(&mut self, text: impl Into<String>) {
        self.form.destination_address = text.into();
    }

    /// Selects a parcel type radio button.
    pub fn set_parcel_type(&mut self, parcel: ParcelType) {
        self.form.parcel_type = Some(parcel);
    }

    /// Replaces the weight text with the current input contents.
    /// Kept as raw text; parsing happens at validation time.
    pub fn set_parcel_weight(&mut self, text: impl Into<String>) {
        self.form.parcel_weight = text.into();
    }

    /// Selects a rate tier radio button.
    pub fn set_selected_rate(&mut self, tier: RateTier) {
        self.form.selected_rate = Some(tier);
    }

    /// Flips the signature-option checkbox.
    pub fn toggle_signature(&mut self) {
        self.form.signature_option = !self.form.signature_option;
    }

    /// Clears every field back to the empty state and restarts the clock.
    pub fn reset(&mut self) {
        self.form = QuoteForm::default();
        self.started_at = Utc::now();
    }

    /// An immutable snapshot of the fields, as read by the calculator.
    pub fn snapshot(&self) -> QuoteForm {
        self.form.clone()
    }

    /// When this session was created or last reset.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl Default for FormSession {
    fn default() -> Self {
        FormSession::new()
    }
}

// =============================================================================
// Managed State
// =============================================================================

/// Host-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<FormSession>>`:
/// - `Arc`: shared ownership with the host's callback registry
/// - `Mutex`: exactly one callback touches the form at a time
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct FormState {
    session: Arc<Mutex<FormSession>>,
}

impl FormState {
    /// Creates state holding a fresh empty session.
    pub fn new() -> Self {
        FormState {
            session: Arc::new(Mutex::new(FormSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let form = form_state.with_form(|s| s.snapshot());
    /// ```
    pub fn with_form<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FormSession) -> R,
    {
        let session = self.session.lock().expect("Form mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// form_state.with_form_mut(|s| s.set_parcel_weight("10"));
    /// ```
    pub fn with_form_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut FormSession) -> R,
    {
        let mut session = self.session.lock().expect("Form mutex poisoned");
        f(&mut session)
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = FormSession::new();
        assert_eq!(session.snapshot(), QuoteForm::default());
    }

    #[test]
    fn test_setters_mutate_one_field_at_a_time() {
        let mut session = FormSession::new();

        session.set_sending_address("12 King St W");
        session.set_destination_address("88 Water St");
        session.set_parcel_type(ParcelType::Letter);
        session.set_parcel_weight("0.5");
        session.set_selected_rate(RateTier::Priority);

        let form = session.snapshot();
        assert_eq!(form.sending_address, "12 King St W");
        assert_eq!(form.destination_address, "88 Water St");
        assert_eq!(form.parcel_type, Some(ParcelType::Letter));
        assert_eq!(form.parcel_weight, "0.5");
        assert_eq!(form.selected_rate, Some(RateTier::Priority));
        assert!(!form.signature_option);
    }

    #[test]
    fn test_toggle_signature_flips_back_and_forth() {
        let mut session = FormSession::new();
        session.toggle_signature();
        assert!(session.snapshot().signature_option);
        session.toggle_signature();
        assert!(!session.snapshot().signature_option);
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut session = FormSession::new();
        session.set_sending_address("somewhere");
        session.set_parcel_type(ParcelType::Package);
        session.toggle_signature();

        session.reset();
        assert_eq!(session.snapshot(), QuoteForm::default());
    }

    #[test]
    fn test_reset_restarts_the_clock() {
        let mut session = FormSession::new();
        let first_start = session.started_at();
        assert!(first_start <= Utc::now());

        session.reset();
        assert!(session.started_at() >= first_start);
    }

    #[test]
    fn test_snapshot_is_detached_from_the_session() {
        let mut session = FormSession::new();
        session.set_parcel_weight("10");
        let snapshot = session.snapshot();

        session.set_parcel_weight("99");
        assert_eq!(snapshot.parcel_weight, "10");
    }

    #[test]
    fn test_form_state_round_trip() {
        let state = FormState::new();
        state.with_form_mut(|s| s.set_sending_address("A"));
        let address = state.with_form(|s| s.snapshot().sending_address);
        assert_eq!(address, "A");
    }
}
