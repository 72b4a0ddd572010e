//! Runtime settings for the CLI.
//!
//! Read from the environment after an optional `.env` file has been
//! loaded with `dotenvy`:
//!
//! | Variable               | Default                          |
//! |------------------------|----------------------------------|
//! | `PAYPAGE_STORAGE_DIR`  | `.paypage`                       |
//! | `PAYPAGE_PROVIDER_URL` | `https://yodl.me`                |
//! | `PAYPAGE_SITE_URL`     | `https://dob3y-yapp.netlify.app` |
//! | `PAYPAGE_LOG`          | `info`                           |

use std::path::PathBuf;

use log::LevelFilter;

use crate::storage::DEFAULT_STORAGE_DIR;

/// Payment provider that receives the redirect.
pub const DEFAULT_PROVIDER_URL: &str = "https://yodl.me";

/// Where payment pages are published.
pub const DEFAULT_SITE_URL: &str = "https://dob3y-yapp.netlify.app";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub storage_dir: PathBuf,
    pub provider_url: String,
    pub site_url: String,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl Settings {
    /// Load `.env` (if present) and read settings from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            storage_dir: var("PAYPAGE_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            provider_url: var("PAYPAGE_PROVIDER_URL").unwrap_or(defaults.provider_url),
            site_url: var("PAYPAGE_SITE_URL").unwrap_or(defaults.site_url),
            log_level: var("PAYPAGE_LOG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("PAYPAGE_STORAGE_DIR", "/tmp/pp"),
            ("PAYPAGE_PROVIDER_URL", "https://pay.test"),
            ("PAYPAGE_SITE_URL", "  "),
            ("PAYPAGE_LOG", "debug"),
        ]
        .into_iter()
        .collect();

        let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(settings.storage_dir, PathBuf::from("/tmp/pp"));
        assert_eq!(settings.provider_url, "https://pay.test");
        assert_eq!(settings.site_url, DEFAULT_SITE_URL);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_ignored() {
        let settings = Settings::from_lookup(|k| (k == "PAYPAGE_LOG").then(|| "loud".to_string()));
        assert_eq!(settings.log_level, LevelFilter::Info);
    }
}
