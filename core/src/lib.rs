//! # Paypage - configuration store for crypto-payment landing pages
//!
//! A payment page is described by one [`Configuration`]: who gets paid,
//! the page slug, button and thank-you styling, social-preview metadata
//! and provider options (tokens, chains, currency, webhooks). This crate
//! holds the rules that keep that record consistent and the builders that
//! turn it into outbound URLs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Form / CLI  │────▶│ ConfigEditor│────▶│ ConfigStore │────▶│   Storage   │
//! │   edits     │     │ (normalize) │     │ (validate)  │     │ (one slot)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │    links    │
//!                                         │ (redirects) │
//!                                         └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use paypage::{ConfigEditor, ConfigStore, MemoryStorage, payment_link};
//!
//! let mut store = ConfigStore::new(MemoryStorage::new());
//! let mut editor = ConfigEditor::new(store.load());
//! editor.set_recipient("vitalik.eth");
//! editor.toggle_token("USDC").unwrap();
//!
//! let saved = store.submit(&editor).unwrap();
//! assert_eq!(saved.slug, "vitalik");
//!
//! let link = payment_link(&saved, "https://yodl.me", "https://pay.example", None).unwrap();
//! assert!(link.payment.as_str().starts_with("https://yodl.me/vitalik.eth?tokens=USDC"));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error hierarchy
//! - [`models`] - The configuration record and its defaults
//! - [`catalog`] - Supported tokens, chains and currencies
//! - [`normalize`] - Slug and set-string rules
//! - [`editor`] - Form-state editing session
//! - [`store`] - Load / save / submit
//! - [`storage`] - Storage slot back-ends
//! - [`links`] - Redirect and payment URL builders
//! - [`validation`] - Submit checks and JSON Schema
//! - [`settings`] - Environment-driven settings
//! - [`logging`] - CLI log backend

// Core modules
pub mod error;
pub mod models;
pub mod catalog;

// Rules
pub mod normalize;
pub mod editor;
pub mod validation;

// Persistence
pub mod storage;
pub mod store;

// URLs
pub mod links;

// Ambient
pub mod settings;
pub mod logging;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    EditError,
    LinkError,
    StorageError,
    StoreError,
    ValidationError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    ButtonStyle,
    Configuration,
    MetaConfig,
    PaymentOptions,
    ThankYouPage,
    Webhooks,
};

pub use catalog::{Chain, Currency, SUPPORTED_CHAINS, SUPPORTED_TOKENS};

// =============================================================================
// Re-exports - Rules
// =============================================================================

pub use normalize::{derive_slug, normalize_slug, sanitize_slug_input, toggle_set_member};
pub use editor::{ConfigEditor, SlugSource};
pub use validation::check_submit;

#[cfg(feature = "schema")]
pub use validation::{is_valid_configuration, validate_configuration};

// =============================================================================
// Re-exports - Store
// =============================================================================

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{ConfigStore, STORAGE_KEY};

// =============================================================================
// Re-exports - Links
// =============================================================================

pub use links::{
    build_payment_url, build_redirect_url, page_url, payment_link, share_links, PaymentLink, ShareLinks,
};

pub use settings::Settings;
