//! UI Components for the payment-page application.
//!
//! # Layout Components
//! - [`Header`] - Title bar
//! - [`Footer`] - Page footer
//! - [`Toaster`] - Transient notifications
//!
//! # Feature Components
//! - [`ConfigForm`] - Tabbed configuration form
//! - [`PreviewPanel`] - Saved page preview with shareable link
//! - [`PaymentCard`] - Pay button card, live or in preview mode
//! - [`PaymentPage`] - `/:slug` route
//! - [`ThankYouView`] - `/:slug/thank-you` route
//! - [`NotFound`] - Catch-all route

mod header;
mod footer;
mod toast;
mod config_form;
mod preview;
mod payment;
mod thank_you;
mod not_found;

pub use header::*;
pub use footer::*;
pub use toast::*;
pub use config_form::*;
pub use preview::*;
pub use payment::*;
pub use thank_you::*;
pub use not_found::*;
