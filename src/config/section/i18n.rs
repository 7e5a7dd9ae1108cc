//! `[i18n]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [i18n]
//! default_locale = "en"
//! locales = ["en", "pt-BR"]
//! ```

use serde::{Deserialize, Serialize};

/// Locale settings governing translated content selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when no translation exists.
    pub default_locale: String,

    /// Supported locales. An empty list resolves to `{default_locale}`.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: Vec::new(),
        }
    }
}
