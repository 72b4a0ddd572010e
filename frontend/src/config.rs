//! Application configuration.
//!
//! Centralized constants for the payment-page frontend.

/// Payment provider the pay button redirects to.
pub const PROVIDER_URL: &str = paypage::settings::DEFAULT_PROVIDER_URL;

/// Public address where payment pages are served.
///
/// Used for shareable links; redirects use the live origin instead.
pub const SITE_URL: &str = paypage::settings::DEFAULT_SITE_URL;

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "Payment Configuration";

/// How long a toast stays on screen (ms).
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Maximum toasts visible at once.
pub const MAX_TOASTS: usize = 3;

/// Confetti pieces rendered on the thank-you page.
pub const CONFETTI_PIECES: usize = 60;

/// Border radius slider bounds (px).
pub const BORDER_RADIUS_RANGE: (u32, u32) = (0, 24);

/// Font size slider bounds (px).
pub const FONT_SIZE_RANGE: (u32, u32) = (12, 24);
