//! docforge-config - site configuration resolution for docforge.
//!
//! Turns an authored `docforge.toml` into an immutable [`SiteDescriptor`]
//! that the renderer consumes as-is:
//!
//! ```text
//! RawConfig (authored TOML)
//!     │  RawConfig::from_path / from_str
//!     ▼
//! Resolver::resolve          validation + defaults + path resolution
//!     ▼
//! SiteDescriptor             fully resolved, never mutated afterwards
//! ```
//!
//! Resolution either yields a complete descriptor or fails with every
//! collected violation; a partially resolved descriptor is never exposed.

pub mod config;
pub mod logger;
pub mod resolve;
pub mod utils;

pub use config::{ConfigDiagnostics, ConfigError, ErrorKind, FieldPath, RawConfig};
pub use resolve::{Resolver, SiteDescriptor};
