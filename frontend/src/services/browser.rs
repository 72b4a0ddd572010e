//! Page origin and navigation helpers.

use crate::{AppError, AppResult};

/// Origin of the current page, e.g. `https://pay.example`.
pub fn page_origin() -> AppResult<String> {
    web_sys::window()
        .ok_or_else(|| AppError::Browser("no window".to_string()))?
        .location()
        .origin()
        .map_err(|e| AppError::Browser(format!("Failed to read origin: {:?}", e)))
}

/// Leave the app for `url`.
pub fn navigate_external(url: &str) -> AppResult<()> {
    web_sys::window()
        .ok_or_else(|| AppError::Browser("no window".to_string()))?
        .location()
        .set_href(url)
        .map_err(|e| AppError::Browser(format!("Redirect failed: {:?}", e)))
}
