//! `localStorage`-backed storage slot.

use paypage::error::StorageResult;
use paypage::{Storage, StorageError};

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn handle() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl Storage for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::handle()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        Self::handle()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(format!("Quota or access error: {:?}", e)))
    }
}
