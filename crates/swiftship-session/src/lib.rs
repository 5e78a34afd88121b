//! # swiftship-session: Form Session & Presentation Dispatch
//!
//! The application layer between the mobile UI shell and `swiftship-core`.
//!
//! ## Module Organization
//! ```text
//! swiftship_session/
//! ├── lib.rs       ◄─── You are here (wiring & re-exports)
//! ├── session.rs   ◄─── FormSession + FormState (the six input fields)
//! ├── submit.rs    ◄─── The single Calculate-button operation
//! ├── surface.rs   ◄─── Surface trait + alert/modal variants + summary
//! └── error.rs     ◄─── FormError DTO for the UI boundary
//! ```
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Submit Flow                                  │
//! │                                                                     │
//! │  User edits fields ──► FormSession setters (exclusive owner)        │
//! │                                                                     │
//! │  User taps "Calculate Shipping"                                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  submit_quote(form_state, surface)                                  │
//! │       │                                                             │
//! │       ├── snapshot()  ──► QuoteForm                                 │
//! │       ├── quote_for() ──► validate, then price                      │
//! │       │                                                             │
//! │       ├── Ok(quote) ─────► surface.show_quote(&quote)               │
//! │       └── Err(rule) ─────► surface.show_error(message)              │
//! │                                                                     │
//! │  Everything runs to completion inside the one UI callback.         │
//! │  No I/O, nothing suspends, exactly one writer of the session.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Logic Pair, Two Screens
//! The product ships the same calculator behind two presentation styles: a
//! native alert dialog and an in-app modal overlay. Both are [`Surface`]
//! implementations; neither duplicates any validation or pricing.

pub mod error;
pub mod session;
pub mod submit;
pub mod surface;

pub use error::{ErrorCode, FormError};
pub use session::{FormSession, FormState};
pub use submit::{submit_quote, PresentedQuote};
pub use surface::{Alert, AlertSurface, ModalSurface, Surface};
