//! Configuration Store - load, save and submit against one storage slot.
//!
//! ```text
//! ┌──────────────┐  submit   ┌──────────────┐  save   ┌──────────────┐
//! │ ConfigEditor │──────────▶│ check_submit │────────▶│   Storage    │
//! └──────────────┘           └──────────────┘         │  (one slot)  │
//!        ▲                                            └──────┬───────┘
//!        └──────────────── load (schema + serde) ────────────┘
//! ```
//!
//! The slot is overwritten whole on every save. A failed submit never
//! reaches storage, and a blob that fails validation on load is replaced
//! by the default configuration (the slot itself is left untouched until
//! the next save).

use serde_json::Value;

use crate::editor::ConfigEditor;
use crate::error::{StoreError, StoreResult, ValidationError};
use crate::models::Configuration;
use crate::normalize::normalize_slug;
use crate::storage::Storage;
use crate::validation::check_submit;

/// Key of the configuration slot.
pub const STORAGE_KEY: &str = "yodl_config";

/// Owns the storage slot holding the configuration.
pub struct ConfigStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// The stored configuration, or the default if there is none or it is
    /// unreadable. Never fails.
    pub fn load(&self) -> Configuration {
        self.load_saved().unwrap_or_default()
    }

    /// The stored configuration, or `None` if nothing usable is stored.
    pub fn load_saved(&self) -> Option<Configuration> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("no configuration stored under '{}'", self.key);
                return None;
            }
            Err(e) => {
                log::warn!("could not read configuration slot '{}': {}", self.key, e);
                return None;
            }
        };

        match parse_stored(&raw) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("ignoring malformed configuration in '{}': {}", self.key, e);
                None
            }
        }
    }

    /// Overwrite the slot with `config`.
    pub fn save(&mut self, config: &Configuration) -> StoreResult<()> {
        let blob = serde_json::to_string(config)?;
        self.storage.set(&self.key, &blob)?;
        log::info!("saved configuration for '{}' (slug '{}')", config.recipient, config.slug);
        Ok(())
    }

    /// Validate the editor's configuration, normalize its slug and save it.
    ///
    /// Returns the configuration as stored. On error the slot is unchanged.
    pub fn submit(&mut self, editor: &ConfigEditor) -> StoreResult<Configuration> {
        let mut config = editor.config().clone();
        check_submit(&config)?;

        config.recipient = config.recipient.trim().to_string();
        config.slug = normalize_slug(&config.slug);

        self.save(&config)?;
        Ok(config)
    }
}

/// Parse a stored blob, validating it before deserializing.
pub fn parse_stored(raw: &str) -> StoreResult<Configuration> {
    let value: Value = serde_json::from_str(raw)?;
    check_shape(&value)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(feature = "schema")]
fn check_shape(value: &Value) -> StoreResult<()> {
    crate::validation::validate_configuration(value)
        .map_err(|errors| StoreError::Validation(ValidationError::SchemaError { errors }))
}

// Without the schema, typed deserialization is the only gate
#[cfg(not(feature = "schema"))]
fn check_shape(value: &Value) -> StoreResult<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err(StoreError::Validation(ValidationError::SchemaError {
            errors: vec!["configuration must be a JSON object".to_string()],
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::SlugSource;
    use crate::error::StorageError;
    use crate::storage::{FileStorage, MemoryStorage};
    use tempfile::tempdir;

    fn editor_for(recipient: &str) -> ConfigEditor {
        let mut editor = ConfigEditor::default();
        editor.set_recipient(recipient);
        editor
    }

    #[test]
    fn test_load_default_when_empty() {
        let store = ConfigStore::new(MemoryStorage::new());
        assert_eq!(store.load(), Configuration::default());
        assert!(store.load_saved().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let config = store.submit(&editor_for("vitalik.eth")).unwrap();

        assert_eq!(config.slug, "vitalik");
        assert_eq!(store.load(), config);
    }

    #[test]
    fn test_last_write_wins() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let x = store.submit(&editor_for("x.eth")).unwrap();
        store.save(&x).unwrap();
        store.save(&x).unwrap();
        assert_eq!(store.load(), x);

        let y = store.submit(&editor_for("y.eth")).unwrap();
        assert_eq!(store.load(), y);
    }

    #[test]
    fn test_failed_submit_keeps_prior_value() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let prior = store.submit(&editor_for("alice.eth")).unwrap();

        let mut editor = ConfigEditor::new(prior.clone());
        editor.set_recipient("");
        let err = store.submit(&editor).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::MissingField("recipient"))));

        let mut editor = ConfigEditor::new(prior.clone());
        editor.set_slug("");
        assert!(store.submit(&editor).is_err());

        assert_eq!(store.load(), prior);
    }

    #[test]
    fn test_submit_normalizes_slug() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let mut editor = editor_for("bob.eth");
        editor.set_slug("--Bob's  Page--");
        let stored = store.submit(&editor).unwrap();
        assert_eq!(stored.slug, "bob-s-page");
    }

    #[test]
    fn test_editor_reopened_on_stored_value_shows_normalized_slug() {
        let mut store = ConfigStore::new(MemoryStorage::new());
        let mut editor = editor_for("erin.eth");
        editor.set_slug("My Page-");
        assert_eq!(editor.config().slug, "my-page-");

        let stored = store.submit(&editor).unwrap();
        let reopened = ConfigEditor::new(stored);
        assert_eq!(reopened.config().slug, "my-page");
        assert_eq!(reopened.slug_source(), SlugSource::Manual);
    }

    #[test]
    fn test_malformed_blob_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(STORAGE_KEY, "{not json").unwrap();
        let store = ConfigStore::new(storage);
        assert_eq!(store.load(), Configuration::default());

        let mut storage = MemoryStorage::new();
        storage
            .set(STORAGE_KEY, r#"{"recipient": 42, "slug": ["x"]}"#)
            .unwrap();
        let store = ConfigStore::new(storage);
        assert!(store.load_saved().is_none());
    }

    #[test]
    fn test_legacy_blob_loads() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                STORAGE_KEY,
                r##"{"ensNameOrAddress":"vitalik.eth","slug":"vitalik",
                    "buttonStyle":{"backgroundColor":"#000"},
                    "thankYouPage":{"message":"gm"},
                    "yodl":{"tokens":"USDC","webhooks":["https://hook"]}}"##,
            )
            .unwrap();
        let store = ConfigStore::new(storage);

        let config = store.load();
        assert_eq!(config.recipient, "vitalik.eth");
        assert_eq!(config.thank_you_page.message, "gm");
        assert_eq!(config.payment_options.unwrap().token_list(), vec!["USDC"]);
    }

    #[test]
    fn test_too_many_webhooks_falls_back() {
        let mut storage = MemoryStorage::new();
        storage
            .set(
                STORAGE_KEY,
                r#"{"recipient":"a.eth","slug":"a",
                    "paymentOptions":{"webhooks":["1","2","3","4","5","6"]}}"#,
            )
            .unwrap();
        let store = ConfigStore::new(storage);

        assert!(store.load_saved().is_none());
        assert_eq!(store.load(), Configuration::default());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = ConfigStore::new(FileStorage::with_dir(dir.path()));
        let saved = store.submit(&editor_for("carol.eth")).unwrap();

        // A fresh store over the same directory sees the same value
        let reopened = ConfigStore::new(FileStorage::with_dir(dir.path()));
        assert_eq!(reopened.load(), saved);
    }

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> crate::error::StorageResult<Option<String>> {
            Err(StorageError::Unavailable("disabled".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> crate::error::StorageResult<()> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn test_unavailable_storage() {
        let mut store = ConfigStore::new(BrokenStorage);
        assert_eq!(store.load(), Configuration::default());

        let err = store.submit(&editor_for("dave.eth")).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Unavailable(_))));
    }
}
