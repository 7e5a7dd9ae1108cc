//! Raw site configuration parsed from `docforge.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── deploy     # [deploy]
//! │   ├── i18n       # [i18n]
//! │   ├── links      # [links]
//! │   ├── preset     # [[preset]]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ErrorKind, ConfigDiagnostics, ConfigError
//! │   └── field      # FieldPath
//! └── mod.rs         # RawConfig (this file)
//! ```
//!
//! `RawConfig` is authored data, nothing more: loose strings, relative
//! paths, unparsed tokens. All validation and normalization happens in
//! [`crate::resolve`], which turns it into a `SiteDescriptor`.

pub mod section;
pub mod types;
mod util;

pub use util::extract_url_path;

// Re-export from section/
pub use section::{
    DeployConfig, FooterConfig, FooterGroupConfig, FooterItemConfig, I18nConfig, LinksConfig,
    LogoConfig, NavItemConfig, NavbarConfig, PresetBlogConfig, PresetConfig, PresetDocsConfig,
    PresetThemeConfig, PrismConfig, SiteConfig, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ErrorKind, FieldPath};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `docforge.toml`.
///
/// Immutable input to resolution. Unknown keys are collected and warned
/// about but never rejected, so configs written for newer releases keep
/// loading on older ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Directory paths in the config are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site identity and URLs
    pub site: SiteConfig,

    /// Deployment target metadata (opaque passthrough)
    pub deploy: DeployConfig,

    /// Locale settings
    pub i18n: I18nConfig,

    /// Broken-link policies
    pub links: LinksConfig,

    /// Preset entries
    pub preset: Vec<PresetConfig>,

    /// Theme settings (navbar, footer, prism)
    pub theme: ThemeConfig,

    /// Forward-compatibility flags, passed through uninterpreted.
    /// Ordered map so repeated resolution serializes identically.
    pub future: BTreeMap<String, bool>,
}

impl RawConfig {
    /// Parse configuration from a TOML string.
    ///
    /// Paths are resolved against the current directory; use
    /// [`RawConfig::from_path`] when the config lives in a file.
    #[allow(clippy::should_implement_trait)] // Fallible parse, not FromStr
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;
        Self::warn_unknown_fields(&ignored, None);
        config.root = std::env::current_dir().unwrap_or_default();
        Ok(config)
    }

    /// Load configuration from a file path.
    ///
    /// The config file's parent directory becomes the root against which
    /// every relative path reference is resolved.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        Self::warn_unknown_fields(&ignored, Some(path));

        let abs = crate::utils::path::normalize_path(path);
        config.root = abs.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Warn about unknown fields. Never an error: unrecognized keys are
    /// ignored so configs stay forward-compatible across releases.
    fn warn_unknown_fields(fields: &[String], path: Option<&Path>) {
        if fields.is_empty() {
            return;
        }
        match path.and_then(Path::file_name) {
            Some(name) => {
                log!("warning"; "ignoring unknown fields in {}:", name.to_string_lossy());
            }
            None => log!("warning"; "ignoring unknown fields:"),
        }
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
///
/// `extra` continues the `[site]` table when it starts with bare keys, or
/// opens new sections with its own headers.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> RawConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = RawConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = RawConfig::from_str("[site\ntitle = \"My Docs\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_raw_config_default() {
        let config = RawConfig::default();
        assert_eq!(config.root, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.i18n.default_locale, "en");
        assert!(config.preset.is_empty());
        assert!(config.future.is_empty());
    }

    #[test]
    fn test_set_root() {
        let mut config = RawConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_unknown_fields_collected_not_rejected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = RawConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"";
        let (_, ignored) = RawConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_future_flags_passthrough() {
        let config = test_parse_config("[future]\nv4 = true\nexperimental_faster = false");
        assert_eq!(config.future.get("v4"), Some(&true));
        assert_eq!(config.future.get("experimental_faster"), Some(&false));
    }

    #[test]
    fn test_from_path_sets_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docforge.toml");
        fs::write(&path, "[site]\ntitle = \"Test\"").unwrap();

        let config = RawConfig::from_path(&path).unwrap();
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.get_root(), dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = RawConfig::from_path(Path::new("/nonexistent/docforge.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }
}
