//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ErrorKind
// ============================================================================

/// Validation failure categories, one per rule the resolver enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `site.url` (or a nav/footer href) is not a valid absolute URL.
    InvalidUrl,
    /// `site.base_url` does not start and end with `/`.
    InvalidBasePath,
    /// `i18n.default_locale` is not a member of `i18n.locales`.
    LocaleMismatch,
    /// A preset entry names a kind the renderer does not ship.
    UnknownPresetKind,
    /// A referenced sidebar/stylesheet file does not exist on disk.
    MissingReferencedFile,
    /// A broken-link policy token is not one of `fail`, `warn`, `ignore`.
    InvalidPolicyToken,
    /// A navbar item is structurally invalid for its kind.
    MalformedNavItem,
    /// A footer group or item is structurally invalid.
    MalformedFooterItem,
    /// A required field is empty or absent.
    MissingField,
}

impl ErrorKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid URL",
            Self::InvalidBasePath => "invalid base path",
            Self::LocaleMismatch => "locale mismatch",
            Self::UnknownPresetKind => "unknown preset kind",
            Self::MissingReferencedFile => "missing referenced file",
            Self::InvalidPolicyToken => "invalid policy token",
            Self::MalformedNavItem => "malformed navbar item",
            Self::MalformedFooterItem => "malformed footer item",
            Self::MissingField => "missing field",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Failure category.
    pub kind: ErrorKind,
    /// Config field path (e.g., "theme.navbar.items[0].label")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: ErrorKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, kind label dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.kind.label().dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Accumulates validation failures across the whole raw config.
///
/// Resolution walks every section before reporting, so one run surfaces
/// every violation instead of stopping at the first.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: ErrorKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: ErrorKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// First diagnostic of the given kind, if any.
    pub fn find(&self, kind: ErrorKind) -> Option<&ConfigDiagnostic> {
        self.errors.iter().find(|d| d.kind == kind)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
