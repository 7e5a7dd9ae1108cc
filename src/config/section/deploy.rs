//! `[deploy]` section configuration.
//!
//! Deployment target metadata. These values are passed through to the
//! external deployment tool as opaque strings; the resolver never
//! interprets them.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! organization = "example"
//! project = "docs"
//! branch = "gh-pages"
//! ```

use serde::{Deserialize, Serialize};

/// Deployment target metadata (opaque passthrough).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Organization or user that owns the hosting repository.
    pub organization: String,

    /// Project / repository name.
    pub project: String,

    /// Target branch for deployment.
    pub branch: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            organization: String::new(),
            project: String::new(),
            branch: "gh-pages".to_string(),
        }
    }
}
