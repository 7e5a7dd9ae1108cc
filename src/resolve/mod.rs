//! Configuration resolution.
//!
//! [`Resolver::resolve`] turns a [`RawConfig`] into a [`SiteDescriptor`]:
//! it validates every section, applies defaults, resolves file references to
//! absolute paths, and substitutes the copyright year. Diagnostics are
//! accumulated across the whole config; the caller gets either a complete
//! descriptor or every violation at once, never a partial result.
//!
//! Resolution is a pure function of the raw config and the filesystem,
//! plus a single clock read for the copyright year.

mod descriptor;

pub use descriptor::{
    Deployment, Footer, FooterGroup, FooterItem, LinkPolicy, LinkTarget, Logo, NavItem, Navbar,
    Policy, Position, PresetKind, Prism, ResolvedBlog, ResolvedDocs, ResolvedPreset, ResolvedTheme,
    SiteDescriptor,
};

use crate::config::{
    ConfigDiagnostics, ConfigError, ErrorKind, FieldPath, FooterGroupConfig, NavItemConfig,
    PresetConfig, RawConfig, extract_url_path,
};
use crate::utils::{date::current_year, path::resolve_path};
use crate::{debug, log};
use anyhow::{Context, Result};
use std::path::Path;
use url::Url;

/// Site configuration resolver.
///
/// Stateless: each call to [`Resolver::resolve`] is independent, so a
/// watch/rebuild loop simply calls it again per build.
pub struct Resolver;

impl Resolver {
    /// Load a config file and resolve it in one step.
    pub fn load(path: &Path) -> Result<SiteDescriptor> {
        let raw = RawConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        let descriptor = Resolver::resolve(&raw)?;
        Ok(descriptor)
    }

    /// Resolve a raw configuration into an immutable site descriptor.
    ///
    /// Reads the system clock once (copyright year) and checks existence of
    /// referenced files; everything else depends only on `raw`.
    pub fn resolve(raw: &RawConfig) -> Result<SiteDescriptor, ConfigError> {
        Self::resolve_at_year(raw, current_year())
    }

    /// Resolution body with the clock factored out, so tests can pin the
    /// year and assert byte-identical re-resolution.
    fn resolve_at_year(raw: &RawConfig, year: u16) -> Result<SiteDescriptor, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if raw.site.title.is_empty() {
            diag.error(
                ErrorKind::MissingField,
                FieldPath::new("site.title"),
                "site title is required",
            );
        }

        let origin = resolve_origin(raw, &mut diag);
        resolve_base_path(&raw.site.base_url, &mut diag);
        let (default_locale, locales) = resolve_locales(raw, &mut diag);
        let presets = resolve_presets(raw, &mut diag);
        let navbar = resolve_navbar(raw, &mut diag);
        let footer = resolve_footer(raw, year, &mut diag);
        let link_policy = resolve_link_policy(raw, &mut diag);

        if let Some(origin) = origin
            && !diag.has_errors()
        {
            debug!("resolve"; "resolved {} presets, {} navbar items", presets.len(), navbar.items.len());
            return Ok(SiteDescriptor {
                title: raw.site.title.clone(),
                tagline: raw.site.tagline.clone(),
                favicon: raw.site.favicon.clone(),
                origin,
                base_path: raw.site.base_url.clone(),
                deployment: Deployment {
                    organization: raw.deploy.organization.clone(),
                    project: raw.deploy.project.clone(),
                    branch: raw.deploy.branch.clone(),
                },
                default_locale,
                locales,
                presets,
                navbar,
                footer,
                link_policy,
                prism: Prism {
                    theme: raw.theme.prism.theme.clone(),
                    dark_theme: raw.theme.prism.dark_theme.clone(),
                },
                image: raw.theme.image.clone(),
                future: raw.future.clone(),
            });
        }

        Err(ConfigError::Diagnostics(diag))
    }
}

// ============================================================================
// site: origin and base path
// ============================================================================

/// Validate `site.url` as an absolute http(s) origin.
fn resolve_origin(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> Option<Url> {
    let field = FieldPath::new("site.url");

    let Some(url_str) = raw.site.url.as_deref().filter(|s| !s.is_empty()) else {
        diag.error_with_hint(
            ErrorKind::MissingField,
            field,
            "site origin is required",
            "set site.url, e.g.: \"https://example.github.io\"",
        );
        return None;
    };

    let parsed = match Url::parse(url_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            diag.error_with_hint(
                ErrorKind::InvalidUrl,
                field,
                format!("invalid URL: {e}"),
                "use format like https://example.com",
            );
            return None;
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        diag.error_with_hint(
            ErrorKind::InvalidUrl,
            field,
            format!(
                "scheme '{}' not supported, must be http or https",
                parsed.scheme()
            ),
            "use format like https://example.com",
        );
        return None;
    }
    if parsed.host_str().is_none() {
        diag.error_with_hint(
            ErrorKind::InvalidUrl,
            field,
            "URL must have a valid host",
            "use format like https://example.com",
        );
        return None;
    }

    // Path prefixes belong in base_url, not the origin.
    if let Some(path) = extract_url_path(url_str)
        && !path.is_empty()
    {
        log!("hint"; "[site.url] carries path '/{path}'; path prefixes belong in site.base_url");
    }

    Some(parsed)
}

/// Validate the `/`-delimited shape of `site.base_url`.
fn resolve_base_path(base_url: &str, diag: &mut ConfigDiagnostics) {
    if !base_url.starts_with('/') || !base_url.ends_with('/') {
        diag.error_with_hint(
            ErrorKind::InvalidBasePath,
            FieldPath::new("site.base_url"),
            format!("'{base_url}' must start and end with '/'"),
            "use format like \"/\" or \"/docs/\"",
        );
    }
}

// ============================================================================
// i18n
// ============================================================================

/// Resolve the locale set: empty list defaults to `{default_locale}`,
/// otherwise the default must be a member. Order preserved, duplicates
/// dropped.
fn resolve_locales(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> (String, Vec<String>) {
    let default_locale = raw.i18n.default_locale.clone();

    if raw.i18n.locales.is_empty() {
        return (default_locale.clone(), vec![default_locale]);
    }

    let mut locales: Vec<String> = Vec::with_capacity(raw.i18n.locales.len());
    for locale in &raw.i18n.locales {
        if !locales.contains(locale) {
            locales.push(locale.clone());
        }
    }

    if !locales.contains(&default_locale) {
        diag.error_with_hint(
            ErrorKind::LocaleMismatch,
            FieldPath::new("i18n.default_locale"),
            format!("default locale '{default_locale}' is not in i18n.locales"),
            format!("add \"{default_locale}\" to i18n.locales"),
        );
    }

    (default_locale, locales)
}

// ============================================================================
// presets
// ============================================================================

fn resolve_presets(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> Vec<ResolvedPreset> {
    raw.preset
        .iter()
        .enumerate()
        .filter_map(|(i, preset)| {
            let field = FieldPath::new("preset").index(i);
            resolve_preset(preset, &field, raw.get_root(), diag)
        })
        .collect()
}

/// Resolve one preset entry: kind tag, file references, edit URLs.
fn resolve_preset(
    preset: &PresetConfig,
    field: &FieldPath,
    root: &Path,
    diag: &mut ConfigDiagnostics,
) -> Option<ResolvedPreset> {
    let before = diag.len();

    let kind = PresetKind::from_token(&preset.kind);
    if kind.is_none() {
        diag.error_with_hint(
            ErrorKind::UnknownPresetKind,
            field.child("kind"),
            format!("unknown preset kind '{}'", preset.kind),
            "the only supported kind is \"classic\"",
        );
    }

    let sidebar_path = resolve_file_ref(
        &preset.docs.sidebar_path,
        &field.child("docs").child("sidebar_path"),
        root,
        diag,
    );
    let custom_css = resolve_file_ref(
        &preset.theme.custom_css,
        &field.child("theme").child("custom_css"),
        root,
        diag,
    );

    let docs_edit_url = resolve_opt_url(
        preset.docs.edit_url.as_deref(),
        &field.child("docs").child("edit_url"),
        diag,
    );
    let blog_edit_url = resolve_opt_url(
        preset.blog.edit_url.as_deref(),
        &field.child("blog").child("edit_url"),
        diag,
    );

    if diag.len() > before {
        return None;
    }

    Some(ResolvedPreset {
        kind: kind?,
        docs: ResolvedDocs {
            sidebar_path: sidebar_path?,
            edit_url: docs_edit_url,
        },
        blog: ResolvedBlog {
            show_reading_time: preset.blog.show_reading_time,
            edit_url: blog_edit_url,
        },
        theme: ResolvedTheme {
            custom_css: custom_css?,
        },
    })
}

/// Resolve a mandatory file reference to an absolute path, erroring when the
/// file does not exist. Existence only; content stays the renderer's job.
fn resolve_file_ref(
    path: &Path,
    field: &FieldPath,
    root: &Path,
    diag: &mut ConfigDiagnostics,
) -> Option<std::path::PathBuf> {
    let resolved = resolve_path(path, root);
    if !resolved.is_file() {
        diag.error(
            ErrorKind::MissingReferencedFile,
            field.clone(),
            format!("referenced file not found: {}", resolved.display()),
        );
        return None;
    }
    Some(resolved)
}

/// Parse an optional URL field.
fn resolve_opt_url(
    url: Option<&str>,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Url> {
    let url = url?;
    match Url::parse(url) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            diag.error(
                ErrorKind::InvalidUrl,
                field.clone(),
                format!("invalid URL: {e}"),
            );
            None
        }
    }
}

// ============================================================================
// navbar
// ============================================================================

fn resolve_navbar(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> Navbar {
    let items = raw
        .theme
        .navbar
        .items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let field = FieldPath::new("theme.navbar.items").index(i);
            resolve_nav_item(item, &field, diag)
        })
        .collect();

    Navbar {
        title: raw
            .theme
            .navbar
            .title
            .clone()
            .unwrap_or_else(|| raw.site.title.clone()),
        logo: raw.theme.navbar.logo.as_ref().map(|logo| Logo {
            alt: logo.alt.clone(),
            src: logo.src.clone(),
        }),
        items,
    }
}

/// Resolve one navbar item, validating by kind.
///
/// Sidebar identifiers are carried through unchecked: sidebar definitions
/// resolve after navbar parsing, so membership is the renderer's check.
fn resolve_nav_item(
    item: &NavItemConfig,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<NavItem> {
    let before = diag.len();

    if item.label.is_empty() {
        diag.error(
            ErrorKind::MalformedNavItem,
            field.child("label"),
            "navbar item label must be non-empty",
        );
    }

    let position = Position::from_token(&item.position);
    if position.is_none() {
        diag.error_with_hint(
            ErrorKind::MalformedNavItem,
            field.child("position"),
            format!("invalid position '{}'", item.position),
            "position must be \"left\" or \"right\"",
        );
    }

    let kind = nav_item_kind(item, field, diag);

    let resolved = match kind.as_deref() {
        Some("sidebar") => {
            let sidebar_id = item.sidebar.clone().filter(|s| !s.is_empty());
            if sidebar_id.is_none() {
                diag.error(
                    ErrorKind::MalformedNavItem,
                    field.child("sidebar"),
                    "sidebar-link item requires a sidebar identifier",
                );
            }
            sidebar_id.map(|sidebar_id| NavItem::Sidebar {
                label: item.label.clone(),
                sidebar_id,
                position: position.unwrap_or(Position::Left),
            })
        }
        Some("page") => {
            let to = item.to.clone().filter(|s| !s.is_empty());
            if to.is_none() {
                diag.error(
                    ErrorKind::MalformedNavItem,
                    field.child("to"),
                    "page-link item requires an internal target",
                );
            }
            to.map(|to| NavItem::Page {
                label: item.label.clone(),
                to,
                position: position.unwrap_or(Position::Left),
            })
        }
        Some("external") => {
            let href = match item.href.as_deref() {
                Some(href) => match Url::parse(href) {
                    Ok(parsed) => Some(parsed),
                    Err(e) => {
                        diag.error(
                            ErrorKind::InvalidUrl,
                            field.child("href"),
                            format!("invalid URL: {e}"),
                        );
                        None
                    }
                },
                None => {
                    diag.error(
                        ErrorKind::MalformedNavItem,
                        field.child("href"),
                        "external-link item requires an URL",
                    );
                    None
                }
            };
            href.map(|href| NavItem::External {
                label: item.label.clone(),
                href,
                position: position.unwrap_or(Position::Left),
            })
        }
        _ => None,
    };

    if diag.len() > before {
        return None;
    }
    resolved
}

/// Determine the item kind: the explicit `kind` token, or inferred from
/// which target field is set.
fn nav_item_kind(
    item: &NavItemConfig,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    match item.kind.as_deref() {
        Some(kind @ ("sidebar" | "page" | "external")) => Some(kind.to_string()),
        Some(other) => {
            diag.error_with_hint(
                ErrorKind::MalformedNavItem,
                field.child("kind"),
                format!("unknown navbar item kind '{other}'"),
                "kind must be \"sidebar\", \"page\", or \"external\"",
            );
            None
        }
        None if item.sidebar.is_some() => Some("sidebar".to_string()),
        None if item.href.is_some() => Some("external".to_string()),
        None if item.to.is_some() => Some("page".to_string()),
        None => {
            diag.error_with_hint(
                ErrorKind::MalformedNavItem,
                field.clone(),
                "cannot determine item kind",
                "set kind, or one of sidebar / to / href",
            );
            None
        }
    }
}

// ============================================================================
// footer
// ============================================================================

fn resolve_footer(raw: &RawConfig, year: u16, diag: &mut ConfigDiagnostics) -> Footer {
    let groups = raw
        .theme
        .footer
        .groups
        .iter()
        .enumerate()
        .filter_map(|(i, group)| {
            let field = FieldPath::new("theme.footer.groups").index(i);
            resolve_footer_group(group, &field, diag)
        })
        .collect();

    Footer {
        style: raw.theme.footer.style.clone(),
        groups,
        copyright_text: render_copyright(raw.theme.footer.copyright.as_deref(), &raw.site.title, year),
    }
}

/// Resolve one footer group: non-empty title, non-empty item list.
fn resolve_footer_group(
    group: &FooterGroupConfig,
    field: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<FooterGroup> {
    let before = diag.len();

    if group.title.is_empty() {
        diag.error(
            ErrorKind::MalformedFooterItem,
            field.child("title"),
            "footer group requires a title",
        );
    }
    if group.items.is_empty() {
        diag.error(
            ErrorKind::MalformedFooterItem,
            field.child("items"),
            "footer group requires at least one item",
        );
    }

    let items: Vec<FooterItem> = group
        .items
        .iter()
        .enumerate()
        .filter_map(|(j, item)| {
            let item_field = field.child("items").index(j);

            if item.label.is_empty() {
                diag.error(
                    ErrorKind::MalformedFooterItem,
                    item_field.child("label"),
                    "footer item requires a label",
                );
                return None;
            }

            // Exactly one of internal target / external URL.
            let target = match (item.to.as_deref(), item.href.as_deref()) {
                (Some(to), None) => Some(LinkTarget::Internal(to.to_string())),
                (None, Some(href)) => match Url::parse(href) {
                    Ok(parsed) => Some(LinkTarget::External(parsed)),
                    Err(e) => {
                        diag.error(
                            ErrorKind::InvalidUrl,
                            item_field.child("href"),
                            format!("invalid URL: {e}"),
                        );
                        None
                    }
                },
                (Some(_), Some(_)) => {
                    diag.error(
                        ErrorKind::MalformedFooterItem,
                        item_field,
                        "footer item must set exactly one of `to` or `href`, not both",
                    );
                    None
                }
                (None, None) => {
                    diag.error(
                        ErrorKind::MalformedFooterItem,
                        item_field,
                        "footer item must set one of `to` or `href`",
                    );
                    None
                }
            };

            target.map(|target| FooterItem {
                label: item.label.clone(),
                target,
            })
        })
        .collect();

    if diag.len() > before {
        return None;
    }

    Some(FooterGroup {
        title: group.title.clone(),
        items,
    })
}

/// Render the copyright line, substituting `{year}` and `{title}`.
///
/// Substitution happens here, at resolve time, so re-resolving the same
/// config across a year boundary yields a different line.
fn render_copyright(template: Option<&str>, title: &str, year: u16) -> String {
    let template = template.unwrap_or("Copyright © {year} {title}");
    template
        .replace("{year}", &year.to_string())
        .replace("{title}", title)
}

// ============================================================================
// link policies
// ============================================================================

fn resolve_link_policy(raw: &RawConfig, diag: &mut ConfigDiagnostics) -> LinkPolicy {
    let allow_broken = raw.links.allow_broken;
    LinkPolicy {
        on_broken: resolve_policy(
            &raw.links.on_broken,
            FieldPath::new("links.on_broken"),
            allow_broken,
            diag,
        ),
        on_broken_markdown: resolve_policy(
            &raw.links.on_broken_markdown,
            FieldPath::new("links.on_broken_markdown"),
            allow_broken,
            diag,
        ),
    }
}

/// Parse a policy token. With `allow_broken` set, invalid tokens resolve to
/// [`Policy::Ignore`] instead of failing; an escape hatch for iterative
/// authoring, never the default.
fn resolve_policy(
    token: &str,
    field: FieldPath,
    allow_broken: bool,
    diag: &mut ConfigDiagnostics,
) -> Policy {
    match Policy::from_token(token) {
        Some(policy) => policy,
        None if allow_broken => {
            log!("warning"; "[{}] invalid policy '{}' ignored (links.allow_broken)", field.as_str(), token);
            Policy::Ignore
        }
        None => {
            diag.error_with_hint(
                ErrorKind::InvalidPolicyToken,
                field,
                format!("invalid policy '{token}'"),
                "policy must be \"fail\", \"warn\", or \"ignore\"",
            );
            Policy::Ignore
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    /// Build a raw config rooted in a temp dir seeded with the default
    /// preset files (`sidebars.toml`, `src/css/custom.css`).
    fn test_config(extra: &str) -> (TempDir, RawConfig) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sidebars.toml"), "").unwrap();
        fs::create_dir_all(dir.path().join("src/css")).unwrap();
        fs::write(dir.path().join("src/css/custom.css"), "").unwrap();

        let mut raw = test_parse_config(&format!("url = \"https://example.org\"\n{extra}"));
        raw.set_root(dir.path());
        (dir, raw)
    }

    fn diagnostics(err: ConfigError) -> ConfigDiagnostics {
        match err {
            ConfigError::Diagnostics(diag) => diag,
            other => panic!("expected diagnostics, got: {other}"),
        }
    }

    #[test]
    fn test_minimal_config_resolves() {
        let (_dir, raw) = test_config("");
        let descriptor = Resolver::resolve(&raw).unwrap();

        assert_eq!(descriptor.title, "Test");
        assert_eq!(descriptor.origin.as_str(), "https://example.org/");
        assert_eq!(descriptor.base_path, "/");
        assert_eq!(descriptor.locales, vec!["en"]);
        assert_eq!(descriptor.default_locale, "en");
        assert!(descriptor.presets.is_empty());
        assert_eq!(descriptor.link_policy.on_broken, Policy::Warn);
    }

    #[test]
    fn test_empty_locales_default_to_default_locale() {
        // Spec scenario: origin + /docs/ + empty locales
        let (_dir, raw) = test_config("base_url = \"/docs/\"\n[i18n]\nlocales = []");
        let descriptor = Resolver::resolve(&raw).unwrap();

        assert_eq!(descriptor.base_path, "/docs/");
        assert_eq!(descriptor.locales, vec!["en"]);
        assert!(descriptor.locales.contains(&descriptor.default_locale));
    }

    #[test]
    fn test_default_locale_must_be_member() {
        let (_dir, raw) = test_config("[i18n]\ndefault_locale = \"fr\"\nlocales = [\"en\", \"pt-BR\"]");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::LocaleMismatch).unwrap();
        assert_eq!(found.field.as_str(), "i18n.default_locale");
    }

    #[test]
    fn test_locales_deduplicated_in_order() {
        let (_dir, raw) =
            test_config("[i18n]\ndefault_locale = \"en\"\nlocales = [\"pt-BR\", \"en\", \"pt-BR\"]");
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.locales, vec!["pt-BR", "en"]);
    }

    #[test]
    fn test_missing_title_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut raw = RawConfig::default();
        raw.site.url = Some("https://example.org".to_string());
        raw.set_root(dir.path());

        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert_eq!(
            diag.find(ErrorKind::MissingField).unwrap().field.as_str(),
            "site.title"
        );
    }

    #[test]
    fn test_missing_origin_fails() {
        let raw = test_parse_config("");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert_eq!(
            diag.find(ErrorKind::MissingField).unwrap().field.as_str(),
            "site.url"
        );
    }

    #[test]
    fn test_invalid_origin_fails() {
        let (_dir, mut raw) = test_config("");
        raw.site.url = Some("not a url".to_string());
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert!(diag.find(ErrorKind::InvalidUrl).is_some());
    }

    #[test]
    fn test_non_http_scheme_fails() {
        let (_dir, mut raw) = test_config("");
        raw.site.url = Some("ftp://example.org".to_string());
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert!(diag.find(ErrorKind::InvalidUrl).is_some());
    }

    #[test]
    fn test_base_path_must_be_slash_delimited() {
        for bad in ["docs/", "/docs", "docs"] {
            let (_dir, mut raw) = test_config("");
            raw.site.base_url = bad.to_string();
            let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
            let found = diag.find(ErrorKind::InvalidBasePath).unwrap();
            assert_eq!(found.field.as_str(), "site.base_url", "case: {bad}");
        }
    }

    #[test]
    fn test_preset_paths_resolve_absolute() {
        let (_dir, raw) = test_config("[[preset]]\nkind = \"classic\"");
        let descriptor = Resolver::resolve(&raw).unwrap();

        assert_eq!(descriptor.presets.len(), 1);
        let preset = &descriptor.presets[0];
        assert_eq!(preset.kind, PresetKind::Classic);
        assert!(preset.docs.sidebar_path.is_absolute());
        assert!(preset.theme.custom_css.is_absolute());
        assert!(preset.docs.sidebar_path.ends_with("sidebars.toml"));
    }

    #[test]
    fn test_missing_sidebar_file_fails() {
        let (_dir, raw) = test_config(
            "[[preset]]\nkind = \"classic\"\n[preset.docs]\nsidebar_path = \"nope.toml\"",
        );
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::MissingReferencedFile).unwrap();
        assert_eq!(found.field.as_str(), "preset[0].docs.sidebar_path");
    }

    #[test]
    fn test_missing_css_file_fails() {
        let (dir, raw) = test_config("[[preset]]\nkind = \"classic\"");
        fs::remove_file(dir.path().join("src/css/custom.css")).unwrap();
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::MissingReferencedFile).unwrap();
        assert_eq!(found.field.as_str(), "preset[0].theme.custom_css");
    }

    #[test]
    fn test_unknown_preset_kind_fails() {
        let (_dir, raw) = test_config("[[preset]]\nkind = \"modern\"");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::UnknownPresetKind).unwrap();
        assert_eq!(found.field.as_str(), "preset[0].kind");
    }

    #[test]
    fn test_preset_edit_urls_parsed() {
        let (_dir, raw) = test_config(
            r#"[[preset]]
kind = "classic"
[preset.docs]
edit_url = "https://github.com/example/docs/tree/main/""#,
        );
        let descriptor = Resolver::resolve(&raw).unwrap();
        let edit_url = descriptor.presets[0].docs.edit_url.as_ref().unwrap();
        assert_eq!(edit_url.host_str(), Some("github.com"));
    }

    #[test]
    fn test_invalid_policy_token_fails() {
        let (_dir, raw) = test_config("[links]\non_broken = \"explode\"");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::InvalidPolicyToken).unwrap();
        assert_eq!(found.field.as_str(), "links.on_broken");
    }

    #[test]
    fn test_allow_broken_escape_hatch() {
        let (_dir, raw) = test_config("[links]\non_broken = \"explode\"\nallow_broken = true");
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.link_policy.on_broken, Policy::Ignore);
    }

    #[test]
    fn test_policies_independently_configurable() {
        let (_dir, raw) = test_config("[links]\non_broken = \"fail\"\non_broken_markdown = \"ignore\"");
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.link_policy.on_broken, Policy::Fail);
        assert_eq!(descriptor.link_policy.on_broken_markdown, Policy::Ignore);
    }

    #[test]
    fn test_navbar_items_resolve_by_kind() {
        let (_dir, raw) = test_config(
            r#"[[theme.navbar.items]]
kind = "sidebar"
sidebar = "tutorialSidebar"
label = "Docs"

[[theme.navbar.items]]
to = "/blog"
label = "Blog"

[[theme.navbar.items]]
href = "https://github.com/example/docs"
label = "GitHub"
position = "right""#,
        );
        let descriptor = Resolver::resolve(&raw).unwrap();
        let items = &descriptor.navbar.items;
        assert_eq!(items.len(), 3);
        assert!(matches!(
            &items[0],
            NavItem::Sidebar { sidebar_id, position: Position::Left, .. }
                if sidebar_id == "tutorialSidebar"
        ));
        // Kind inferred from `to` / `href`
        assert!(matches!(&items[1], NavItem::Page { to, .. } if to == "/blog"));
        assert!(matches!(
            &items[2],
            NavItem::External { position: Position::Right, .. }
        ));
    }

    #[test]
    fn test_navbar_item_empty_label_fails() {
        let (_dir, raw) = test_config("[[theme.navbar.items]]\nto = \"/blog\"");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::MalformedNavItem).unwrap();
        assert_eq!(found.field.as_str(), "theme.navbar.items[0].label");
    }

    #[test]
    fn test_navbar_item_bad_position_fails() {
        let (_dir, raw) =
            test_config("[[theme.navbar.items]]\nto = \"/blog\"\nlabel = \"Blog\"\nposition = \"center\"");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::MalformedNavItem).unwrap();
        assert_eq!(found.field.as_str(), "theme.navbar.items[0].position");
    }

    #[test]
    fn test_navbar_item_bad_external_url_fails() {
        let (_dir, raw) = test_config(
            "[[theme.navbar.items]]\nhref = \"not a url\"\nlabel = \"GitHub\"",
        );
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert_eq!(
            diag.find(ErrorKind::InvalidUrl).unwrap().field.as_str(),
            "theme.navbar.items[0].href"
        );
    }

    #[test]
    fn test_navbar_item_no_target_fails() {
        let (_dir, raw) = test_config("[[theme.navbar.items]]\nlabel = \"Mystery\"");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert!(diag.find(ErrorKind::MalformedNavItem).is_some());
    }

    #[test]
    fn test_navbar_title_falls_back_to_site_title() {
        let (_dir, raw) = test_config("");
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.navbar.title, "Test");
    }

    #[test]
    fn test_footer_groups_resolve() {
        let (_dir, raw) = test_config(
            r#"[[theme.footer.groups]]
title = "Docs"
items = [{ label = "Intro", to = "/docs/intro" }]

[[theme.footer.groups]]
title = "Community"
items = [{ label = "Discord", href = "https://discord.gg/example" }]"#,
        );
        let descriptor = Resolver::resolve(&raw).unwrap();
        let groups = &descriptor.footer.groups;
        assert_eq!(groups.len(), 2);
        assert!(matches!(
            &groups[0].items[0].target,
            LinkTarget::Internal(to) if to == "/docs/intro"
        ));
        assert!(matches!(&groups[1].items[0].target, LinkTarget::External(_)));
    }

    #[test]
    fn test_footer_item_with_both_targets_fails() {
        // Spec scenario: second group, one item with both targets set
        let (_dir, raw) = test_config(
            r#"[[theme.footer.groups]]
title = "Docs"
items = [{ label = "Intro", to = "/docs/intro" }]

[[theme.footer.groups]]
title = "More"
items = [{ label = "Blog", to = "/blog", href = "https://example.org/blog" }]"#,
        );
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        let found = diag.find(ErrorKind::MalformedFooterItem).unwrap();
        assert_eq!(found.field.as_str(), "theme.footer.groups[1].items[0]");
    }

    #[test]
    fn test_footer_group_requires_title_and_items() {
        let (_dir, raw) = test_config("[[theme.footer.groups]]\nitems = []");
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert_eq!(diag.len(), 2);
        assert!(
            diag.errors()
                .iter()
                .all(|d| d.kind == ErrorKind::MalformedFooterItem)
        );
    }

    #[test]
    fn test_copyright_year_substitution() {
        let (_dir, raw) =
            test_config("[theme.footer]\ncopyright = \"Copyright © {year} My Docs\"");
        let descriptor = Resolver::resolve_at_year(&raw, 2024).unwrap();
        assert_eq!(descriptor.footer.copyright_text, "Copyright © 2024 My Docs");

        // Different calendar year, different copyright line
        let later = Resolver::resolve_at_year(&raw, 2025).unwrap();
        assert_eq!(later.footer.copyright_text, "Copyright © 2025 My Docs");
    }

    #[test]
    fn test_copyright_default_template() {
        let (_dir, raw) = test_config("");
        let descriptor = Resolver::resolve_at_year(&raw, 2024).unwrap();
        assert_eq!(descriptor.footer.copyright_text, "Copyright © 2024 Test");
    }

    #[test]
    fn test_resolution_idempotent_within_year() {
        let (_dir, raw) = test_config(
            r#"base_url = "/docs/"
[[preset]]
kind = "classic"
[[theme.navbar.items]]
to = "/blog"
label = "Blog""#,
        );
        let first = Resolver::resolve_at_year(&raw, 2026).unwrap();
        let second = Resolver::resolve_at_year(&raw, 2026).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_errors_accumulate() {
        let (_dir, raw) = test_config(
            r#"base_url = "docs"
[links]
on_broken = "explode"
[[preset]]
kind = "modern"
[i18n]
default_locale = "fr"
locales = ["en"]"#,
        );
        let diag = diagnostics(Resolver::resolve(&raw).unwrap_err());
        assert!(diag.find(ErrorKind::InvalidBasePath).is_some());
        assert!(diag.find(ErrorKind::InvalidPolicyToken).is_some());
        assert!(diag.find(ErrorKind::UnknownPresetKind).is_some());
        assert!(diag.find(ErrorKind::LocaleMismatch).is_some());
        assert!(diag.len() >= 4);
    }

    #[test]
    fn test_deployment_passthrough() {
        let (_dir, raw) = test_config(
            "[deploy]\norganization = \"example\"\nproject = \"docs\"\nbranch = \"gh-pages\"",
        );
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.deployment.organization, "example");
        assert_eq!(descriptor.deployment.project, "docs");
        assert_eq!(descriptor.deployment.branch, "gh-pages");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sidebars.toml"), "").unwrap();
        fs::write(
            dir.path().join("docforge.toml"),
            r#"[site]
title = "My Docs"
url = "https://example.github.io"
base_url = "/docs/""#,
        )
        .unwrap();

        let descriptor = Resolver::load(&dir.path().join("docforge.toml")).unwrap();
        assert_eq!(descriptor.title, "My Docs");
        assert_eq!(descriptor.base_path, "/docs/");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = Resolver::load(Path::new("/nonexistent/docforge.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }

    #[test]
    fn test_future_flags_carried() {
        let (_dir, raw) = test_config("[future]\nv4 = true");
        let descriptor = Resolver::resolve(&raw).unwrap();
        assert_eq!(descriptor.future.get("v4"), Some(&true));
    }
}
