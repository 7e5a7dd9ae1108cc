//! `[links]` section configuration.
//!
//! Broken-link policies for the renderer. Policy tokens stay raw strings
//! here and are parsed during resolution so an unknown token surfaces as a
//! typed diagnostic with a field path instead of a serde error.
//!
//! # Example
//!
//! ```toml
//! [links]
//! on_broken = "fail"            # fail | warn | ignore
//! on_broken_markdown = "warn"
//! allow_broken = false
//! ```

use serde::{Deserialize, Serialize};

/// Broken-link policy settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Policy for dangling internal links: "fail", "warn", or "ignore".
    pub on_broken: String,

    /// Policy for dangling markdown-specific links.
    pub on_broken_markdown: String,

    /// Escape hatch for iterative authoring: when set, invalid policy
    /// tokens resolve to the ignore policy instead of failing validation.
    pub allow_broken: bool,
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            on_broken: "warn".to_string(),
            on_broken_markdown: "warn".to_string(),
            allow_broken: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.links.on_broken, "warn");
        assert_eq!(config.links.on_broken_markdown, "warn");
        assert!(!config.links.allow_broken);
    }

    #[test]
    fn test_custom_policies() {
        let config = test_parse_config(
            "[links]\non_broken = \"fail\"\non_broken_markdown = \"ignore\"\nallow_broken = true",
        );
        assert_eq!(config.links.on_broken, "fail");
        assert_eq!(config.links.on_broken_markdown, "ignore");
        assert!(config.links.allow_broken);
    }
}
