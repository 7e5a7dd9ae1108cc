//! `[theme]` section configuration.
//!
//! Navbar, footer, and syntax-highlight settings. Item kinds and positions
//! stay raw strings here; the resolver parses them into tagged variants so
//! violations carry field paths.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! image = "img/social-card.jpg"
//!
//! [theme.navbar]
//! title = "My Docs"
//! logo = { alt = "Logo", src = "img/logo.svg" }
//!
//! [[theme.navbar.items]]
//! kind = "sidebar"
//! sidebar = "tutorialSidebar"
//! label = "Docs"
//! position = "left"
//!
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} My Docs"
//!
//! [[theme.footer.groups]]
//! title = "Docs"
//! items = [{ label = "Intro", to = "/docs/intro" }]
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

use serde::{Deserialize, Serialize};

/// Theme configuration: navbar, footer, prism, social image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Social card image, passed through to the renderer unchecked.
    pub image: Option<String>,

    /// Navigation bar settings.
    pub navbar: NavbarConfig,

    /// Footer settings.
    pub footer: FooterConfig,

    /// Syntax-highlight theme pair.
    pub prism: PrismConfig,
}

// ============================================================================
// Navbar
// ============================================================================

/// Navigation bar: optional title/logo plus an ordered item list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Navbar title. Falls back to the site title when absent.
    pub title: Option<String>,

    /// Navbar logo.
    pub logo: Option<LogoConfig>,

    /// Ordered navigation items.
    pub items: Vec<NavItemConfig>,
}

/// Navbar logo (alt text + image source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoConfig {
    pub alt: String,
    pub src: String,
}

/// One navbar item as authored.
///
/// `kind` may be omitted; the resolver infers it from which target field is
/// set (`sidebar` -> sidebar-link, `href` -> external-link, `to` -> page-link).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItemConfig {
    /// Item kind: "sidebar", "page", or "external".
    pub kind: Option<String>,

    /// Display label. Required, non-empty.
    pub label: String,

    /// Navbar side: "left" or "right".
    pub position: String,

    /// Sidebar identifier (sidebar-link items).
    pub sidebar: Option<String>,

    /// Internal route (page-link items).
    pub to: Option<String>,

    /// External URL (external-link items).
    pub href: Option<String>,
}

impl Default for NavItemConfig {
    fn default() -> Self {
        Self {
            kind: None,
            label: String::new(),
            position: "left".to_string(),
            sidebar: None,
            to: None,
            href: None,
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

/// Footer: style, link groups, and the copyright template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer style token, passed through to the renderer.
    pub style: String,

    /// Copyright template. `{year}` is substituted with the current year and
    /// `{title}` with the site title at resolve time. Defaults to
    /// "Copyright © {year} {title}" when absent.
    pub copyright: Option<String>,

    /// Ordered link groups.
    pub groups: Vec<FooterGroupConfig>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            style: "dark".to_string(),
            copyright: None,
            groups: Vec::new(),
        }
    }
}

/// One footer link group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterGroupConfig {
    /// Group heading. Required, non-empty.
    pub title: String,

    /// Ordered items. Required, non-empty.
    pub items: Vec<FooterItemConfig>,
}

/// One footer link: a label plus exactly one of `to` (internal) or `href`
/// (external).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterItemConfig {
    /// Display label. Required, non-empty.
    pub label: String,

    /// Internal route target.
    pub to: Option<String>,

    /// External URL target.
    pub href: Option<String>,
}

// ============================================================================
// Prism
// ============================================================================

/// Syntax-highlight theme pair (light / dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Light-mode theme name.
    pub theme: String,

    /// Dark-mode theme name.
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_string(),
            dark_theme: "dracula".to_string(),
        }
    }
}
