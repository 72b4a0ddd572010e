//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Form Types** - Tabs of the configuration form
//! - **Toast Types** - Transient notifications
//! - **Confetti** - Thank-you page decoration
//! - **Error Types** - Frontend error handling

use paypage::{LinkError, StoreError, ValidationError};
use rand::Rng;
use std::fmt;

use crate::MAX_TOASTS;

// =============================================================================
// Form Types
// =============================================================================

/// Tabs of the configuration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormTab {
    Basic,
    Button,
    ThankYou,
    Payment,
    Social,
}

impl FormTab {
    pub const ALL: [FormTab; 5] = [
        FormTab::Basic,
        FormTab::Button,
        FormTab::ThankYou,
        FormTab::Payment,
        FormTab::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormTab::Basic => "Basic Info",
            FormTab::Button => "Button Style",
            FormTab::ThankYou => "Thank You",
            FormTab::Payment => "Payment Options",
            FormTab::Social => "Social",
        }
    }

    /// Hover hint.
    pub fn tooltip(&self) -> &'static str {
        match self {
            FormTab::Basic => "Configure basic payment settings",
            FormTab::Button => "Customize your payment button",
            FormTab::ThankYou => "Design your thank you page",
            FormTab::Payment => "Set up payment options",
            FormTab::Social => "Customize social media previews",
        }
    }
}

/// Leading integer of a CSS pixel length (`"12px"` -> 12), clamped to `range`.
pub fn px_value(css: &str, range: (u32, u32)) -> u32 {
    let digits: String = css.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().unwrap_or(range.0).clamp(range.0, range.1)
}

// =============================================================================
// Toast Types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first. Holds at most [`MAX_TOASTS`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id. The oldest toast is dropped when full.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// User-facing text for a failed submit.
pub fn submit_error_message(err: &StoreError) -> String {
    match err {
        StoreError::Validation(ValidationError::MissingField("recipient")) => {
            "Please enter an ENS name or address".to_string()
        }
        StoreError::Validation(ValidationError::MissingField("slug")) => {
            "Please enter a URL slug".to_string()
        }
        StoreError::Storage(_) => "Failed to save configuration".to_string(),
        other => other.to_string(),
    }
}

// =============================================================================
// Confetti
// =============================================================================

const CONFETTI_COLORS: [&str; 6] = ["#F43F5E", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#EC4899"];

/// One falling confetti piece, positioned with inline CSS.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: u32,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub color: &'static str,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; background-color: {}; animation-delay: {}ms; animation-duration: {}ms;",
            self.left_pct, self.color, self.delay_ms, self.duration_ms
        )
    }
}

pub fn confetti_pieces(count: usize, rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left_pct: rng.gen_range(0..100),
            delay_ms: rng.gen_range(0..1_500),
            duration_ms: rng.gen_range(2_500..4_500),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
        })
        .collect()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Browser API unavailable or refused.
    Browser(String),
    /// Payment URL could not be built.
    Link(LinkError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
            AppError::Link(e) => write!(f, "Invalid payment link: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        AppError::Link(e)
    }
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
