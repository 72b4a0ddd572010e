//! Browser services.
//!
//! - [`storage`] - `localStorage` slot for the configuration store
//! - [`browser`] - Page origin and navigation

pub mod storage;
pub mod browser;

pub use storage::*;
pub use browser::*;
