//! # Presentation Surfaces
//!
//! The capability the UI layer implements to show submit results, plus the
//! shared summary renderer.
//!
//! ## One Logic Pair, Two Screens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                   Presentation Variants                             │
//! │                                                                     │
//! │                 validate ──► quote (one pair, swiftship-core)       │
//! │                        │                                            │
//! │             ┌──────────┴──────────┐                                 │
//! │             ▼                     ▼                                 │
//! │     ┌───────────────┐     ┌───────────────┐                         │
//! │     │ AlertSurface  │     │ ModalSurface  │                         │
//! │     │ native dialog │     │ in-app overlay│                         │
//! │     │ title+message │     │ lines+visible │                         │
//! │     └───────────────┘     └───────────────┘                         │
//! │                                                                     │
//! │  The two SwiftShip screens differ ONLY here. Neither owns any       │
//! │  validation or pricing logic.                                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The surfaces hold the *content* to present (strings, visibility); the
//! actual dialog/overlay widgets belong to the mobile shell.

use serde::Serialize;
use ts_rs::TS;

use swiftship_core::{Quote, TAX_RATE};

// =============================================================================
// Surface Capability
// =============================================================================

/// What the submit flow needs from a screen: show one error message, or
/// show one priced quote. Nothing else.
pub trait Surface {
    /// Presents a single validation error message, verbatim.
    fn show_error(&mut self, message: &str);

    /// Presents a successful quote.
    fn show_quote(&mut self, quote: &Quote);
}

// =============================================================================
// Summary Rendering (shared by both variants)
// =============================================================================

/// The fixed, ordered, labeled lines of a quote summary.
///
/// Order is part of the contract with the screens:
/// From, To, Type, Weight, Rate, optional Signature line, Subtotal,
/// Tax, Total.
pub fn summary_lines(quote: &Quote) -> Vec<String> {
    let mut lines = vec![
        format!("From: {}", quote.sending_address),
        format!("To: {}", quote.destination_address),
        format!("Type: {}", quote.parcel_type),
        format!("Weight: {} lbs", quote.parcel_weight),
        format!("Rate: {}", quote.selected_rate),
    ];

    if quote.signature_option {
        lines.push(format!("Signature Option: +{}", swiftship_core::SIGNATURE_FEE));
    }

    lines.push(format!("Subtotal: {}", quote.subtotal));
    lines.push(format!("Tax ({}%): {}", TAX_RATE.percentage(), quote.tax));
    lines.push(format!("Total: {}", quote.total));
    lines
}

/// The summary as one readable block, with the price section set off by
/// blank lines the way the original alert formatted it.
pub fn summary_text(quote: &Quote) -> String {
    let mut text = String::new();
    for line in summary_lines(quote) {
        if !text.is_empty() {
            text.push('\n');
        }
        // Blank line before the subtotal and before the grand total
        if line.starts_with("Subtotal:") || line.starts_with("Total:") {
            text.push('\n');
        }
        text.push_str(&line);
    }
    text
}

// =============================================================================
// Alert Variant
// =============================================================================

/// Content of one native alert dialog.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Dialog title bar text.
    pub title: String,

    /// Flat message body.
    pub message: String,

    /// Label of the single dismiss button.
    pub dismiss_label: String,
}

/// The alert-dialog presentation variant.
///
/// Records the alert the shell should pop; the shell reads `last_alert`
/// after each submit and hands it to the platform dialog API.
#[derive(Debug, Default)]
pub struct AlertSurface {
    /// The most recent alert to display, if any.
    pub last_alert: Option<Alert>,
}

impl AlertSurface {
    /// Creates a surface with no alert pending.
    pub fn new() -> Self {
        AlertSurface::default()
    }
}

impl Surface for AlertSurface {
    fn show_error(&mut self, message: &str) {
        self.last_alert = Some(Alert {
            title: "Error".to_string(),
            message: message.to_string(),
            dismiss_label: "Close".to_string(),
        });
    }

    fn show_quote(&mut self, quote: &Quote) {
        self.last_alert = Some(Alert {
            title: "SwiftShip Order Summary".to_string(),
            message: summary_text(quote),
            dismiss_label: "Close".to_string(),
        });
    }
}

// =============================================================================
// Modal Variant
// =============================================================================

/// The in-app modal overlay presentation variant.
///
/// Holds the overlay's visibility and content; the shell re-renders from
/// these fields and clears them with [`ModalSurface::dismiss`].
#[derive(Debug, Default)]
pub struct ModalSurface {
    /// Whether the overlay is currently shown.
    pub visible: bool,

    /// Heading text at the top of the overlay.
    pub heading: String,

    /// Summary lines for a successful quote, in display order.
    pub lines: Vec<String>,

    /// Error message, when the submit was rejected.
    pub error: Option<String>,
}

impl ModalSurface {
    /// Creates a hidden, empty modal.
    pub fn new() -> Self {
        ModalSurface::default()
    }

    /// Hides the overlay and clears its content.
    pub fn dismiss(&mut self) {
        *self = ModalSurface::default();
    }
}

impl Surface for ModalSurface {
    fn show_error(&mut self, message: &str) {
        self.visible = true;
        self.heading = "Error".to_string();
        self.lines.clear();
        self.error = Some(message.to_string());
    }

    fn show_quote(&mut self, quote: &Quote) {
        self.visible = true;
        self.heading = "SwiftShip Order Summary".to_string();
        self.lines = summary_lines(quote);
        self.error = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
