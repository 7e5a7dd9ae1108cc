//! Resolved site descriptor.
//!
//! Everything in this module is output of [`crate::resolve::Resolver`]:
//! validated, defaulted, absolute-pathed data the renderer consumes without
//! re-checking. None of these types are ever mutated after construction.

use std::collections::BTreeMap;
use std::path::PathBuf;
use url::Url;

/// Fully resolved site configuration.
///
/// Invariants (established by the resolver, relied on by the renderer):
/// - `default_locale` is always a member of `locales`
/// - every path in `presets` is absolute and existed at resolve time
/// - every internal link the renderer emits must be prefixed with `base_path`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteDescriptor {
    /// Site title.
    pub title: String,
    /// Site tagline.
    pub tagline: String,
    /// Favicon path, opaque to the resolver.
    pub favicon: Option<String>,
    /// Absolute site origin.
    pub origin: Url,
    /// URL path prefix; starts and ends with `/`.
    pub base_path: String,
    /// Deployment target metadata, opaque strings for the deployment tool.
    pub deployment: Deployment,
    /// Default locale; guaranteed member of `locales`.
    pub default_locale: String,
    /// Supported locales, ordered, deduplicated, never empty.
    pub locales: Vec<String>,
    /// Resolved preset bundles, in authored order.
    pub presets: Vec<ResolvedPreset>,
    /// Navigation bar.
    pub navbar: Navbar,
    /// Footer.
    pub footer: Footer,
    /// Renderer behavior on dangling links.
    pub link_policy: LinkPolicy,
    /// Syntax-highlight theme pair.
    pub prism: Prism,
    /// Social card image, opaque to the resolver.
    pub image: Option<String>,
    /// Forward-compatibility flags, passed through uninterpreted.
    pub future: BTreeMap<String, bool>,
}

/// Deployment target metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub organization: String,
    pub project: String,
    pub branch: String,
}

// ============================================================================
// Presets
// ============================================================================

/// Known preset kinds. Unknown kinds are a typed resolution error, never
/// silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetKind {
    Classic,
}

impl PresetKind {
    /// Parse an authored kind token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "classic" => Some(Self::Classic),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
        }
    }
}

/// One resolved preset bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPreset {
    pub kind: PresetKind,
    pub docs: ResolvedDocs,
    pub blog: ResolvedBlog,
    pub theme: ResolvedTheme,
}

/// Resolved documentation sub-configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocs {
    /// Absolute path to the sidebar definition file.
    pub sidebar_path: PathBuf,
    /// Base URL for "edit this page" links.
    pub edit_url: Option<Url>,
}

/// Resolved blog sub-configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBlog {
    pub show_reading_time: bool,
    pub edit_url: Option<Url>,
}

/// Resolved theme sub-configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// Absolute path to the custom stylesheet.
    pub custom_css: PathBuf,
}

// ============================================================================
// Navbar
// ============================================================================

/// Resolved navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navbar {
    /// Navbar title; falls back to the site title.
    pub title: String,
    /// Navbar logo.
    pub logo: Option<Logo>,
    /// Ordered items.
    pub items: Vec<NavItem>,
}

/// Navbar logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    pub alt: String,
    pub src: String,
}

/// Navbar side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Left,
    Right,
}

impl Position {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// One resolved navbar item, tagged by kind.
///
/// `Sidebar` carries the sidebar identifier unchecked: sidebar definitions
/// resolve after navbar parsing, so membership is verified by the renderer
/// once the referenced sidebar file is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Sidebar {
        label: String,
        sidebar_id: String,
        position: Position,
    },
    Page {
        label: String,
        to: String,
        position: Position,
    },
    External {
        label: String,
        href: Url,
        position: Position,
    },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Sidebar { label, .. } | Self::Page { label, .. } | Self::External { label, .. } => {
                label
            }
        }
    }

    pub const fn position(&self) -> Position {
        match self {
            Self::Sidebar { position, .. }
            | Self::Page { position, .. }
            | Self::External { position, .. } => *position,
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Resolved footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    /// Footer style token, opaque to the resolver.
    pub style: String,
    /// Ordered link groups.
    pub groups: Vec<FooterGroup>,
    /// Copyright line with the current year already substituted.
    pub copyright_text: String,
}

/// One footer link group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterGroup {
    pub title: String,
    pub items: Vec<FooterItem>,
}

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterItem {
    pub label: String,
    pub target: LinkTarget,
}

/// A link target: internal route or external URL, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Internal(String),
    External(Url),
}

// ============================================================================
// Policies
// ============================================================================

/// Renderer behavior when an internal link target does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fail,
    Warn,
    Ignore,
}

impl Policy {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "fail" => Some(Self::Fail),
            "warn" => Some(Self::Warn),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Warn => "warn",
            Self::Ignore => "ignore",
        }
    }
}

/// Broken-link policies, independently configurable for regular and
/// markdown-specific links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    pub on_broken: Policy,
    pub on_broken_markdown: Policy,
}

/// Syntax-highlight theme pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prism {
    pub theme: String,
    pub dark_theme: String,
}
