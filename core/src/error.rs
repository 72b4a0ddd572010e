//! Error types for the payment-page configuration store.
//!
//! - [`ValidationError`] - Submit-time and schema validation failures
//! - [`StorageError`] - Storage slot read/write failures
//! - [`LinkError`] - Redirect and payment URL construction faults
//! - [`EditError`] - Rejected editor operations
//! - [`StoreError`] - Top-level store errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised before a configuration is allowed into storage.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Invalid field value.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// Stored blob does not match the configuration schema.
    #[error("Schema validation failed: {errors:?}")]
    SchemaError { errors: Vec<String> },
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from a storage slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error.
    #[error("Storage IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The backing store cannot be reached (e.g. browser storage disabled).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// Link Errors
// =============================================================================

/// Errors while constructing outbound URLs.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LinkError {
    /// Base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBase {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Base URL has no path component to extend (e.g. `mailto:`).
    #[error("URL cannot carry a path: {0}")]
    CannotBeABase(String),

    /// Recipient is empty.
    #[error("Recipient is empty")]
    MissingRecipient,

    /// Slug is empty.
    #[error("Slug is empty")]
    MissingSlug,
}

// =============================================================================
// Editor Errors
// =============================================================================

/// Errors from editor operations that reference catalog entries or list slots.
#[derive(Debug, Error, PartialEq)]
pub enum EditError {
    /// Token is not in the supported catalog.
    #[error("Unsupported token: {0}")]
    UnsupportedToken(String),

    /// Chain is not in the supported catalog.
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    /// Webhook slot does not exist.
    #[error("Webhook index {index} out of range (have {len})")]
    WebhookIndex { index: usize, len: usize },
}

// =============================================================================
// Store Errors (top-level)
// =============================================================================

/// Top-level store errors.
///
/// This is the error returned by [`crate::store::ConfigStore::submit`]
/// and friends. It wraps the lower-level errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Editor error.
    #[error("Edit error: {0}")]
    Edit(#[from] EditError),

    /// Link error.
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for URL construction.
pub type LinkResult<T> = Result<T, LinkError>;

/// Result type for editor operations.
pub type EditResult<T> = Result<T, EditError>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
