//! Domain models for the payment-page configuration.
//!
//! - [`Configuration`] - The single persisted record
//! - [`ButtonStyle`] - Style tokens of the pay button
//! - [`ThankYouPage`] - Look and message of the post-payment page
//! - [`MetaConfig`] - Social-preview metadata
//! - [`PaymentOptions`] - Provider options (tokens, chains, currency, webhooks)
//! - [`Webhooks`] - Bounded, never-empty webhook list
//!
//! JSON keys are camelCase. Blobs written with the older `ensNameOrAddress`
//! and `yodl` keys are still accepted on load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::Currency;
use crate::normalize::set_members;

// =============================================================================
// Button Style
// =============================================================================

/// Free-form CSS tokens for the pay button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyle {
    pub background_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub font_size: String,
    pub padding: String,
    pub button_text: String,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background_color: "#4F46E5".to_string(),
            text_color: "#FFFFFF".to_string(),
            border_radius: "12px".to_string(),
            font_size: "16px".to_string(),
            padding: "12px 24px".to_string(),
            button_text: "Buy me a coffee ☕".to_string(),
        }
    }
}

impl ButtonStyle {
    /// Inline style attribute for rendering the button.
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; color: {}; border-radius: {}; font-size: {}; padding: {};",
            self.background_color, self.text_color, self.border_radius, self.font_size, self.padding
        )
    }
}

// =============================================================================
// Thank-You Page
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThankYouPage {
    pub background_color: String,
    pub text_color: String,
    pub message: String,
    pub show_confetti: bool,
}

impl Default for ThankYouPage {
    fn default() -> Self {
        Self {
            background_color: "#4F46E5".to_string(),
            text_color: "#FFFFFF".to_string(),
            message: "Thank you for your support! 🎉".to_string(),
            show_confetti: true,
        }
    }
}

impl ThankYouPage {
    pub fn css(&self) -> String {
        format!("background-color: {}; color: {};", self.background_color, self.text_color)
    }
}

// =============================================================================
// Social Preview Metadata
// =============================================================================

/// Open Graph / Twitter card fields. Each one defaults to empty on its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct MetaConfig {
    pub title: String,
    pub description: String,
    pub image: String,
}

// =============================================================================
// Webhooks
// =============================================================================

/// Ordered webhook URLs, always holding between 1 and [`Webhooks::MAX`] entries.
///
/// Entries may be empty strings; the UI shows one blank input by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Webhooks(Vec<String>);

impl Webhooks {
    pub const MAX: usize = 5;

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= Self::MAX
    }

    /// Append a blank entry. Returns `false` (and does nothing) when full.
    pub fn push_blank(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.0.push(String::new());
        true
    }

    /// Remove the entry at `index`. The last remaining entry is cleared
    /// instead of removed. Returns `false` if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.0.len() {
            return false;
        }
        if self.0.len() > 1 {
            self.0.remove(index);
        } else {
            self.0[0].clear();
        }
        true
    }

    /// Replace the entry at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, url: impl Into<String>) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = url.into();
                true
            }
            None => false,
        }
    }

    /// Non-blank entries, trimmed.
    pub fn filled(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|w| w.trim()).filter(|w| !w.is_empty())
    }
}

impl Default for Webhooks {
    fn default() -> Self {
        Self(vec![String::new()])
    }
}

/// An empty list becomes one blank entry; more than [`Webhooks::MAX`] is rejected.
impl TryFrom<Vec<String>> for Webhooks {
    type Error = String;

    fn try_from(mut list: Vec<String>) -> Result<Self, Self::Error> {
        if list.len() > Self::MAX {
            return Err(format!("at most {} webhooks allowed, got {}", Self::MAX, list.len()));
        }
        if list.is_empty() {
            list.push(String::new());
        }
        Ok(Self(list))
    }
}

impl From<Webhooks> for Vec<String> {
    fn from(webhooks: Webhooks) -> Self {
        webhooks.0
    }
}

// =============================================================================
// Payment Options
// =============================================================================

/// Options forwarded to the payment provider.
///
/// `tokens` and `chains` are sets stored as comma-joined strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct PaymentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
    /// Fixed amount; absent means the payer chooses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub webhooks: Webhooks,
}

impl PaymentOptions {
    pub fn token_list(&self) -> Vec<&str> {
        set_members(self.tokens.as_deref().unwrap_or(""))
    }

    pub fn chain_list(&self) -> Vec<&str> {
        set_members(self.chains.as_deref().unwrap_or(""))
    }

    pub fn display_currency(&self) -> Currency {
        self.currency.unwrap_or_default()
    }

    /// JSON published as the `me.yodl` ENS text record.
    ///
    /// Only non-empty fields are written; blank webhooks are dropped.
    pub fn to_text_record(&self) -> Value {
        let mut record = Map::new();

        let non_empty = |v: &Option<String>| v.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string);

        if let Some(tokens) = non_empty(&self.tokens) {
            record.insert("tokens".into(), Value::String(tokens));
        }
        if let Some(chains) = non_empty(&self.chains) {
            record.insert("chains".into(), Value::String(chains));
        }
        if let Some(currency) = self.currency {
            record.insert("currency".into(), Value::String(currency.code().to_string()));
        }
        if let Some(amount) = non_empty(&self.amount) {
            record.insert("amount".into(), Value::String(amount));
        }
        if let Some(memo) = non_empty(&self.memo) {
            record.insert("memo".into(), Value::String(memo));
        }

        let webhooks: Vec<Value> = self.webhooks.filled().map(|w| Value::String(w.to_string())).collect();
        if !webhooks.is_empty() {
            record.insert("webhooks".into(), Value::Array(webhooks));
        }

        Value::Object(record)
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// The persisted payment-page configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// ENS name or address receiving payments.
    #[serde(alias = "ensNameOrAddress")]
    pub recipient: String,
    /// URL path segment of the payment page.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub button_style: ButtonStyle,
    #[serde(default)]
    pub thank_you_page: ThankYouPage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<MetaConfig>,
    #[serde(default, alias = "yodl", skip_serializing_if = "Option::is_none")]
    pub payment_options: Option<PaymentOptions>,
}

impl Configuration {
    /// Headline of the payment page.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Make a Payment")
    }

    pub fn display_description(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Support by sending crypto")
    }

    /// Payment options, created with defaults on first access.
    pub fn payment_options_mut(&mut self) -> &mut PaymentOptions {
        self.payment_options.get_or_insert_with(PaymentOptions::default)
    }

    pub fn meta_mut(&mut self) -> &mut MetaConfig {
        self.meta.get_or_insert_with(MetaConfig::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert!(config.recipient.is_empty());
        assert!(config.slug.is_empty());
        assert_eq!(config.button_style.background_color, "#4F46E5");
        assert!(config.thank_you_page.show_confetti);
        assert!(config.payment_options.is_none());
    }

    #[test]
    fn test_legacy_keys_accepted() {
        let blob = json!({
            "ensNameOrAddress": "vitalik.eth",
            "slug": "vitalik",
            "buttonStyle": { "buttonText": "Tip" },
            "thankYouPage": { "showConfetti": false },
            "yodl": { "tokens": "USDC,DAI", "webhooks": [] }
        });
        let config: Configuration = serde_json::from_value(blob).unwrap();
        assert_eq!(config.recipient, "vitalik.eth");
        assert_eq!(config.button_style.button_text, "Tip");
        // Missing style tokens fall back individually
        assert_eq!(config.button_style.padding, "12px 24px");
        assert!(!config.thank_you_page.show_confetti);

        let options = config.payment_options.unwrap();
        assert_eq!(options.token_list(), vec!["USDC", "DAI"]);
        assert_eq!(options.webhooks.as_slice(), &[String::new()]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut config = Configuration::default();
        config.recipient = "alice.eth".into();
        config.payment_options_mut().currency = Some(Currency::EUR);

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["recipient"], "alice.eth");
        assert_eq!(value["buttonStyle"]["backgroundColor"], "#4F46E5");
        assert_eq!(value["paymentOptions"]["currency"], "EUR");
        assert_eq!(value["paymentOptions"]["webhooks"], json!([""]));
        assert!(value.get("meta").is_none());
    }

    #[test]
    fn test_webhooks_bounds() {
        let mut hooks = Webhooks::default();
        assert!(!hooks.remove(3));
        assert!(hooks.remove(0));
        assert_eq!(hooks.len(), 1);

        for _ in 0..10 {
            hooks.push_blank();
        }
        assert_eq!(hooks.len(), Webhooks::MAX);
        assert!(!hooks.push_blank());

        let hooks = Webhooks::try_from(vec!["a".to_string(); 5]).unwrap();
        assert!(hooks.is_full());
        assert!(Webhooks::try_from(vec!["a".to_string(); 6]).is_err());
    }

    #[test]
    fn test_text_record_skips_blanks() {
        let mut options = PaymentOptions {
            tokens: Some("USDC".into()),
            memo: Some("  ".into()),
            ..Default::default()
        };
        options.webhooks.set(0, "https://example.com/hook");
        options.webhooks.push_blank();

        let record = options.to_text_record();
        assert_eq!(
            record,
            json!({ "tokens": "USDC", "webhooks": ["https://example.com/hook"] })
        );
    }

    #[test]
    fn test_button_css() {
        let css = ButtonStyle::default().css();
        assert!(css.contains("background-color: #4F46E5"));
        assert!(css.contains("padding: 12px 24px"));
    }

    #[test]
    fn test_display_fallbacks() {
        let mut config = Configuration::default();
        assert_eq!(config.display_title(), "Make a Payment");
        config.title = Some("Tips".into());
        assert_eq!(config.display_title(), "Tips");
    }
}
