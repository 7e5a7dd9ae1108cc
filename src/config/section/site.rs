//! `[site]` section configuration.
//!
//! Basic site identity plus the two URL fields every emitted link depends
//! on: the origin (`url`) and the path prefix (`base_url`).
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Docs"
//! tagline = "Documentation hub"
//! favicon = "img/favicon.ico"
//! url = "https://example.github.io"
//! base_url = "/docs/"
//! ```

use serde::{Deserialize, Serialize};

/// Site identity and URL settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title. Required, must be non-empty.
    pub title: String,

    /// Short tagline shown by the theme.
    pub tagline: String,

    /// Favicon path, passed through to the renderer unchecked.
    pub favicon: Option<String>,

    /// Site origin (e.g., "https://example.github.io"). Must be an absolute
    /// http(s) URL with no path component; path prefixes belong in `base_url`.
    pub url: Option<String>,

    /// URL path prefix for every internal link (e.g., "/docs/").
    /// Must start and end with `/`.
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            favicon: None,
            url: None,
            base_url: "/".to_string(),
        }
    }
}
