//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted config field path, e.g. `theme.navbar.items[2].label`.
///
/// Paths are built incrementally while walking the raw config so every
/// diagnostic can name the exact offending field, including list indexes.
///
/// # Example
///
/// ```
/// use docforge_config::FieldPath;
///
/// let path = FieldPath::new("theme.footer.groups").index(1).child("items");
/// assert_eq!(path.as_str(), "theme.footer.groups[1].items");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a child segment: `site` + `url` -> `site.url`.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        Self(format!("{}.{}", self.0, segment))
    }

    /// Append a list index: `preset` + 0 -> `preset[0]`.
    #[must_use]
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_and_index() {
        let path = FieldPath::new("theme.navbar.items").index(0).child("label");
        assert_eq!(path.as_str(), "theme.navbar.items[0].label");
    }

    #[test]
    fn test_as_ref() {
        let path = FieldPath::new("site.url");
        let s: &str = path.as_ref();
        assert_eq!(s, "site.url");
    }
}
