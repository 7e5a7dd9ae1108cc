//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docforge.toml`:
//!
//! | Module   | TOML Section  | Purpose                              |
//! |----------|---------------|--------------------------------------|
//! | `site`   | `[site]`      | Title, tagline, origin URL, base URL |
//! | `deploy` | `[deploy]`    | Deployment target metadata (opaque)  |
//! | `i18n`   | `[i18n]`      | Default locale and locale list       |
//! | `links`  | `[links]`     | Broken-link policies                 |
//! | `preset` | `[[preset]]`  | Preset bundles (docs, blog, theme)   |
//! | `theme`  | `[theme]`     | Navbar, footer, syntax highlighting  |

mod deploy;
mod i18n;
mod links;
mod preset;
mod site;
mod theme;

pub use deploy::DeployConfig;
pub use i18n::I18nConfig;
pub use links::LinksConfig;
pub use preset::{PresetBlogConfig, PresetConfig, PresetDocsConfig, PresetThemeConfig};
pub use site::SiteConfig;
pub use theme::{
    FooterConfig, FooterGroupConfig, FooterItemConfig, LogoConfig, NavItemConfig, NavbarConfig,
    PrismConfig, ThemeConfig,
};
