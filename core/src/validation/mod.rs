//! Validation of configurations.
//!
//! Two gates guard the storage slot:
//!
//! - **Submit checks** ([`check_submit`]) run before every save: recipient
//!   and slug must be present, a fixed amount must be a non-negative decimal.
//! - **Schema checks** (`schema` feature) run on every load: the raw stored
//!   blob is validated against `schemas/payment-page-config.json`
//!   (JSON Schema Draft 7) before it is deserialized.
//!
//! # Example
//!
//! ```rust
//! use paypage::{check_submit, Configuration, ValidationError};
//!
//! let config = Configuration::default();
//! assert_eq!(check_submit(&config), Err(ValidationError::MissingField("recipient")));
//! ```

#[cfg(feature = "schema")]
mod schema;

#[cfg(feature = "schema")]
pub use schema::{is_valid, is_valid_configuration, validate, validate_configuration};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::models::Configuration;
use crate::normalize::normalize_slug;

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").unwrap());

/// Checks that must pass before a configuration is written.
///
/// The slug is checked in its normalized form, so `"--"` counts as empty.
pub fn check_submit(config: &Configuration) -> ValidationResult<()> {
    if config.recipient.trim().is_empty() {
        return Err(ValidationError::MissingField("recipient"));
    }

    if normalize_slug(&config.slug).is_empty() {
        return Err(ValidationError::MissingField("slug"));
    }

    if let Some(amount) = config
        .payment_options
        .as_ref()
        .and_then(|o| o.amount.as_deref())
        .map(str::trim)
        .filter(|a| !a.is_empty())
    {
        if !DECIMAL.is_match(amount) {
            return Err(ValidationError::InvalidValue {
                field: "amount",
                message: format!("'{}' is not a non-negative decimal number", amount),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Configuration {
        Configuration {
            recipient: "vitalik.eth".into(),
            slug: "vitalik".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_submit_requires_recipient() {
        let mut config = filled();
        config.recipient = "   ".into();
        assert_eq!(check_submit(&config), Err(ValidationError::MissingField("recipient")));
    }

    #[test]
    fn test_submit_requires_slug() {
        let mut config = filled();
        config.slug = "--".into();
        assert_eq!(check_submit(&config), Err(ValidationError::MissingField("slug")));
    }

    #[test]
    fn test_submit_amount() {
        let mut config = filled();
        config.payment_options_mut().amount = Some("12.50".into());
        assert!(check_submit(&config).is_ok());

        config.payment_options_mut().amount = Some("".into());
        assert!(check_submit(&config).is_ok());

        config.payment_options_mut().amount = Some("-3".into());
        let err = check_submit(&config).unwrap_err();
        assert!(err.to_string().contains("amount"));
    }
}
