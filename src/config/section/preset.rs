//! `[[preset]]` entries.
//!
//! A preset is a named bundle of pre-configured sub-options shipped by the
//! renderer ecosystem. Only the "classic" kind exists today; the kind stays
//! a raw string here so an unknown kind surfaces as a typed diagnostic.
//! Missing sub-sections are filled with built-in defaults, never rejected.
//!
//! # Example
//!
//! ```toml
//! [[preset]]
//! kind = "classic"
//!
//! [preset.docs]
//! sidebar_path = "sidebars.toml"
//! edit_url = "https://github.com/example/docs/tree/main/"
//!
//! [preset.blog]
//! show_reading_time = true
//!
//! [preset.theme]
//! custom_css = "src/css/custom.css"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One preset entry: kind tag plus docs/blog/theme sub-configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Preset kind. "classic" is the only kind the renderer ships.
    pub kind: String,

    /// Documentation sub-configuration.
    pub docs: PresetDocsConfig,

    /// Blog sub-configuration.
    pub blog: PresetBlogConfig,

    /// Theme sub-configuration.
    pub theme: PresetThemeConfig,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            kind: "classic".to_string(),
            docs: PresetDocsConfig::default(),
            blog: PresetBlogConfig::default(),
            theme: PresetThemeConfig::default(),
        }
    }
}

/// Documentation section of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetDocsConfig {
    /// Sidebar definition file, relative to the config file.
    /// Existence is checked at resolve time; content is the renderer's job.
    pub sidebar_path: PathBuf,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for PresetDocsConfig {
    fn default() -> Self {
        Self {
            sidebar_path: PathBuf::from("sidebars.toml"),
            edit_url: None,
        }
    }
}

/// Blog section of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetBlogConfig {
    /// Show estimated reading time on posts.
    pub show_reading_time: bool,

    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for PresetBlogConfig {
    fn default() -> Self {
        Self {
            show_reading_time: true,
            edit_url: None,
        }
    }
}

/// Theme section of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetThemeConfig {
    /// Custom stylesheet, relative to the config file.
    /// Existence is checked at resolve time.
    pub custom_css: PathBuf,
}

impl Default for PresetThemeConfig {
    fn default() -> Self {
        Self {
            custom_css: PathBuf::from("src/css/custom.css"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_no_presets_by_default() {
        let config = test_parse_config("");
        assert!(config.preset.is_empty());
    }

    #[test]
    fn test_missing_subsections_get_defaults() {
        let config = test_parse_config("[[preset]]\nkind = \"classic\"");
        assert_eq!(config.preset.len(), 1);
        let preset = &config.preset[0];
        assert_eq!(preset.kind, "classic");
        assert_eq!(preset.docs.sidebar_path, PathBuf::from("sidebars.toml"));
        assert!(preset.blog.show_reading_time);
        assert_eq!(preset.theme.custom_css, PathBuf::from("src/css/custom.css"));
    }

    #[test]
    fn test_full_preset() {
        let config = test_parse_config(
            r#"[[preset]]
kind = "classic"

[preset.docs]
sidebar_path = "nav/sidebars.toml"
edit_url = "https://github.com/example/docs/tree/main/"

[preset.blog]
show_reading_time = false

[preset.theme]
custom_css = "css/site.css""#,
        );
        let preset = &config.preset[0];
        assert_eq!(preset.docs.sidebar_path, PathBuf::from("nav/sidebars.toml"));
        assert_eq!(
            preset.docs.edit_url.as_deref(),
            Some("https://github.com/example/docs/tree/main/")
        );
        assert!(!preset.blog.show_reading_time);
        assert_eq!(preset.theme.custom_css, PathBuf::from("css/site.css"));
    }
}
