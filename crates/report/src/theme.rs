//! Theme definitions for the HTML report
//!
//! This module provides the colors behind the row status classes and
//! turns them into a stylesheet. Colors are designed to work well on both
//! light and dark backgrounds.

use derive_more::Display;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which built-in color set to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ThemeKind {
    #[default]
    #[display(fmt = "light")]
    Light,

    #[display(fmt = "dark")]
    Dark,
}

/// A theme name that is not one of the built-in themes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}` (expected light or dark)")]
pub struct UnknownTheme(pub String);

impl std::str::FromStr for ThemeKind {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Colors for the report, as CSS color values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTheme {
    /// Background color for the page
    pub background: &'static str,

    /// Background color for inserted lines (green tint)
    pub added_line_background: &'static str,

    /// Background color for deleted lines (red tint)
    pub deleted_line_background: &'static str,

    /// Background color for changed lines (yellow/orange tint)
    pub changed_line_background: &'static str,

    /// Default text color
    pub text: &'static str,

    /// Muted text color (captions, error placeholder)
    pub text_muted: &'static str,

    /// Border color
    pub border: &'static str,
}

impl ReportTheme {
    /// Create a light theme (default)
    pub fn light() -> Self {
        Self {
            background: "hsl(0, 0%, 98%)",
            added_line_background: "hsla(120, 50%, 45%, 0.18)",
            deleted_line_background: "hsla(0, 60%, 50%, 0.18)",
            changed_line_background: "hsla(45, 60%, 50%, 0.18)",
            text: "hsl(0, 0%, 15%)",
            text_muted: "hsl(0, 0%, 45%)",
            border: "hsl(0, 0%, 80%)",
        }
    }

    /// Create a dark theme
    pub fn dark() -> Self {
        Self {
            background: "hsl(0, 0%, 12%)",
            added_line_background: "hsla(120, 40%, 25%, 0.6)",
            deleted_line_background: "hsla(0, 50%, 30%, 0.6)",
            changed_line_background: "hsla(45, 50%, 30%, 0.6)",
            text: "hsl(0, 0%, 85%)",
            text_muted: "hsl(0, 0%, 50%)",
            border: "hsl(0, 0%, 25%)",
        }
    }

    /// Get the theme for a kind
    pub fn of(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    /// Render the stylesheet for the report's classes
    pub fn stylesheet(&self) -> String {
        format!(
            r#"body {{
  background: {background};
  color: {text};
  font-family: monospace;
}}

.report {{
  display: flex;
  flex-wrap: wrap;
  align-items: flex-start;
  gap: 1.5em;
}}

table {{
  border-collapse: collapse;
  border: 1px solid {border};
}}

caption {{
  color: {text_muted};
  padding: 0.25em;
}}

td {{
  padding: 0 0.5em;
  white-space: pre;
}}

.diffChanged {{
  background: {changed};
}}

.diffDeleted {{
  background: {deleted};
}}

.diffAdded {{
  background: {added};
}}

.diffError {{
  color: {text_muted};
  font-style: italic;
}}

.legend td {{
  padding: 0.25em;
}}

.rect {{
  padding: 0 0.5em;
  border: 1px solid {border};
}}
"#,
            background = self.background,
            text = self.text,
            border = self.border,
            text_muted = self.text_muted,
            changed = self.changed_line_background,
            deleted = self.deleted_line_background,
            added = self.added_line_background,
        )
    }
}

impl Default for ReportTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// The stylesheet of the default theme
pub fn default_stylesheet() -> String {
    ReportTheme::default().stylesheet()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_status_classes() {
        let css = default_stylesheet();

        for class in [".diffChanged", ".diffDeleted", ".diffAdded", ".diffError", ".legend", ".rect"] {
            assert!(css.contains(class), "missing {}", class);
        }
        assert!(css.contains(ReportTheme::light().added_line_background));
    }

    #[test]
    fn test_theme_kind() {
        assert_eq!(ReportTheme::of(ThemeKind::Dark), ReportTheme::dark());
        assert_eq!(ThemeKind::default().to_string(), "light");
    }

    #[test]
    fn test_parse_theme_kind() {
        assert_eq!("Dark".parse(), Ok(ThemeKind::Dark));
        assert_eq!("light".parse(), Ok(ThemeKind::Light));

        let err = "solarized".parse::<ThemeKind>().unwrap_err();
        assert_eq!(err, UnknownTheme("solarized".to_string()));
        assert_eq!(
            err.to_string(),
            "unknown theme `solarized` (expected light or dark)"
        );
    }
}
