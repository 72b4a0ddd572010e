//! In-memory edit session over a [`Configuration`].
//!
//! The editor is what a form binds to. It owns the slug auto-derivation
//! rule and the bounded webhook list; the persisted value only changes
//! when the session is handed to [`crate::store::ConfigStore::submit`].

use crate::catalog::{self, Currency};
use crate::error::{EditError, EditResult};
use crate::models::Configuration;
use crate::normalize::{derive_slug, sanitize_slug_input, toggle_set_member};

/// Where the current slug came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugSource {
    /// No slug yet; the next recipient edit derives one.
    #[default]
    Empty,
    /// Derived from the recipient. Later recipient edits leave it alone.
    Derived,
    /// Typed by the user.
    Manual,
}

/// Mutable form state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigEditor {
    config: Configuration,
    slug_source: SlugSource,
}

impl ConfigEditor {
    /// Start editing an existing configuration.
    ///
    /// A non-empty stored slug is treated as user-chosen.
    pub fn new(config: Configuration) -> Self {
        let slug_source = if config.slug.is_empty() {
            SlugSource::Empty
        } else {
            SlugSource::Manual
        };
        Self { config, slug_source }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn slug_source(&self) -> SlugSource {
        self.slug_source
    }

    // =========================================================================
    // Basic info
    // =========================================================================

    /// Update the recipient, deriving the slug if none is set yet.
    pub fn set_recipient(&mut self, recipient: impl Into<String>) {
        self.config.recipient = recipient.into();

        if self.slug_source == SlugSource::Empty && self.config.slug.is_empty() {
            let derived = derive_slug(&self.config.recipient);
            if !derived.is_empty() {
                log::debug!("derived slug '{}' from recipient", derived);
                self.config.slug = derived;
                self.slug_source = SlugSource::Derived;
            }
        }
    }

    /// Update the slug from user input.
    ///
    /// Clearing it re-enables derivation on the next recipient edit.
    pub fn set_slug(&mut self, input: &str) {
        self.config.slug = sanitize_slug_input(input);
        self.slug_source = if self.config.slug.is_empty() {
            SlugSource::Empty
        } else {
            SlugSource::Manual
        };
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.config.title = Some(title.into()).filter(|t: &String| !t.is_empty());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.config.description = Some(description.into()).filter(|d: &String| !d.is_empty());
    }

    // =========================================================================
    // Button style
    // =========================================================================

    pub fn set_button_background(&mut self, color: impl Into<String>) {
        self.config.button_style.background_color = color.into();
    }

    pub fn set_button_text_color(&mut self, color: impl Into<String>) {
        self.config.button_style.text_color = color.into();
    }

    /// Border radius in pixels.
    pub fn set_border_radius(&mut self, px: u32) {
        self.config.button_style.border_radius = format!("{}px", px);
    }

    /// Font size in pixels.
    pub fn set_font_size(&mut self, px: u32) {
        self.config.button_style.font_size = format!("{}px", px);
    }

    pub fn set_padding(&mut self, padding: impl Into<String>) {
        self.config.button_style.padding = padding.into();
    }

    pub fn set_button_text(&mut self, text: impl Into<String>) {
        self.config.button_style.button_text = text.into();
    }

    // =========================================================================
    // Thank-you page
    // =========================================================================

    pub fn set_thank_you_background(&mut self, color: impl Into<String>) {
        self.config.thank_you_page.background_color = color.into();
    }

    pub fn set_thank_you_text_color(&mut self, color: impl Into<String>) {
        self.config.thank_you_page.text_color = color.into();
    }

    pub fn set_thank_you_message(&mut self, message: impl Into<String>) {
        self.config.thank_you_page.message = message.into();
    }

    pub fn set_confetti(&mut self, enabled: bool) {
        self.config.thank_you_page.show_confetti = enabled;
    }

    // =========================================================================
    // Social preview
    // =========================================================================

    pub fn set_meta_title(&mut self, title: impl Into<String>) {
        self.config.meta_mut().title = title.into();
    }

    pub fn set_meta_description(&mut self, description: impl Into<String>) {
        self.config.meta_mut().description = description.into();
    }

    pub fn set_meta_image(&mut self, image: impl Into<String>) {
        self.config.meta_mut().image = image.into();
    }

    // =========================================================================
    // Payment options
    // =========================================================================

    /// Add or remove an accepted token.
    pub fn toggle_token(&mut self, symbol: &str) -> EditResult<()> {
        if !catalog::is_supported_token(symbol) {
            return Err(EditError::UnsupportedToken(symbol.to_string()));
        }
        let options = self.config.payment_options_mut();
        let current = options.tokens.take().unwrap_or_default();
        options.tokens = Some(toggle_set_member(&current, symbol));
        Ok(())
    }

    /// Add or remove an accepted chain by id.
    pub fn toggle_chain(&mut self, id: &str) -> EditResult<()> {
        if catalog::find_chain(id).is_none() {
            return Err(EditError::UnsupportedChain(id.to_string()));
        }
        let options = self.config.payment_options_mut();
        let current = options.chains.take().unwrap_or_default();
        options.chains = Some(toggle_set_member(&current, id));
        Ok(())
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.config.payment_options_mut().currency = Some(currency);
    }

    /// Set the fixed amount; an empty string clears it.
    pub fn set_amount(&mut self, amount: impl Into<String>) {
        let amount = amount.into();
        self.config.payment_options_mut().amount = Some(amount).filter(|a| !a.trim().is_empty());
    }

    pub fn set_memo(&mut self, memo: impl Into<String>) {
        let memo = memo.into();
        self.config.payment_options_mut().memo = Some(memo).filter(|m| !m.is_empty());
    }

    /// Append a blank webhook slot. No-op once five slots exist.
    pub fn add_webhook(&mut self) -> bool {
        self.config.payment_options_mut().webhooks.push_blank()
    }

    /// Remove a webhook slot; the last slot is cleared instead.
    pub fn remove_webhook(&mut self, index: usize) -> EditResult<()> {
        let webhooks = &mut self.config.payment_options_mut().webhooks;
        let len = webhooks.len();
        if webhooks.remove(index) {
            Ok(())
        } else {
            Err(EditError::WebhookIndex { index, len })
        }
    }

    pub fn set_webhook(&mut self, index: usize, url: impl Into<String>) -> EditResult<()> {
        let webhooks = &mut self.config.payment_options_mut().webhooks;
        let len = webhooks.len();
        if webhooks.set(index, url) {
            Ok(())
        } else {
            Err(EditError::WebhookIndex { index, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_derives_slug_once() {
        let mut editor = ConfigEditor::default();
        editor.set_recipient("Vitalik.ETH");
        assert_eq!(editor.config().slug, "vitalik");
        assert_eq!(editor.slug_source(), SlugSource::Derived);

        // First write wins
        editor.set_recipient("alice.eth");
        assert_eq!(editor.config().slug, "vitalik");
        assert_eq!(editor.config().recipient, "alice.eth");
    }

    #[test]
    fn test_padded_recipient_still_strips_ens_suffix() {
        let mut editor = ConfigEditor::default();
        editor.set_recipient("vitalik.eth ");
        assert_eq!(editor.config().slug, "vitalik");
    }

    #[test]
    fn test_manual_slug_is_kept() {
        let mut editor = ConfigEditor::default();
        editor.set_slug("My Page");
        assert_eq!(editor.config().slug, "my-page");
        assert_eq!(editor.slug_source(), SlugSource::Manual);

        editor.set_recipient("bob.eth");
        assert_eq!(editor.config().slug, "my-page");
    }

    #[test]
    fn test_cleared_slug_rederives() {
        let mut editor = ConfigEditor::default();
        editor.set_recipient("bob.eth");
        editor.set_slug("");
        assert_eq!(editor.slug_source(), SlugSource::Empty);

        editor.set_recipient("carol.eth");
        assert_eq!(editor.config().slug, "carol");
    }

    #[test]
    fn test_loaded_slug_counts_as_manual() {
        let config = Configuration {
            recipient: "a.eth".into(),
            slug: "custom".into(),
            ..Default::default()
        };
        let mut editor = ConfigEditor::new(config);
        editor.set_recipient("b.eth");
        assert_eq!(editor.config().slug, "custom");
    }

    #[test]
    fn test_recipient_without_slug_chars() {
        let mut editor = ConfigEditor::default();
        editor.set_recipient("!!!");
        assert!(editor.config().slug.is_empty());
        assert_eq!(editor.slug_source(), SlugSource::Empty);

        editor.set_recipient("dave.eth");
        assert_eq!(editor.config().slug, "dave");
    }

    #[test]
    fn test_toggle_tokens_and_chains() {
        let mut editor = ConfigEditor::default();
        editor.toggle_token("USDC").unwrap();
        editor.toggle_token("DAI").unwrap();
        editor.toggle_token("USDC").unwrap();
        editor.toggle_chain("base").unwrap();

        let options = editor.config().payment_options.as_ref().unwrap();
        assert_eq!(options.tokens.as_deref(), Some("DAI"));
        assert_eq!(options.chains.as_deref(), Some("base"));

        assert_eq!(
            editor.toggle_token("DOGE"),
            Err(EditError::UnsupportedToken("DOGE".into()))
        );
        assert!(editor.toggle_chain("solana").is_err());
    }

    #[test]
    fn test_webhook_list_bounds() {
        let mut editor = ConfigEditor::default();

        // Removing the sole entry clears it
        editor.remove_webhook(0).unwrap();
        let hooks = &editor.config().payment_options.as_ref().unwrap().webhooks;
        assert_eq!(hooks.as_slice(), &[String::new()]);

        for _ in 0..4 {
            assert!(editor.add_webhook());
        }
        assert!(!editor.add_webhook());
        assert_eq!(editor.config().payment_options.as_ref().unwrap().webhooks.len(), 5);

        editor.set_webhook(4, "https://example.com/hook").unwrap();
        editor.remove_webhook(0).unwrap();
        let hooks = &editor.config().payment_options.as_ref().unwrap().webhooks;
        assert_eq!(hooks.len(), 4);
        assert_eq!(hooks.as_slice()[3], "https://example.com/hook");

        assert_eq!(
            editor.set_webhook(9, "x"),
            Err(EditError::WebhookIndex { index: 9, len: 4 })
        );
    }

    #[test]
    fn test_style_setters() {
        let mut editor = ConfigEditor::default();
        editor.set_border_radius(4);
        editor.set_font_size(20);
        editor.set_confetti(false);
        editor.set_amount("  ");
        editor.set_currency(Currency::GBP);

        let config = editor.config();
        assert_eq!(config.button_style.border_radius, "4px");
        assert_eq!(config.button_style.font_size, "20px");
        assert!(!config.thank_you_page.show_confetti);
        let options = config.payment_options.as_ref().unwrap();
        assert_eq!(options.amount, None);
        assert_eq!(options.display_currency(), Currency::GBP);
    }
}
