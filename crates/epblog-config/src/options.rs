//! Option blocks consumed by the sidebar and Mermaid plugins.
//!
//! The types live here so they can be parsed from `[sidebar]` and
//! `[mermaid]` sections of `epblog.toml`; the plugin crates attach and
//! interpret them.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the sidebar plugin.
///
/// Defaults mirror the upstream plugin: nothing excluded, filesystem
/// ordering, labels derived from filenames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarOptions {
    /// Glob patterns; files and directories matching any pattern are
    /// omitted from sidebar generation.
    pub exclude: Vec<String>,
    /// Order sidebar entries by the date field of each content file's
    /// front-matter instead of filesystem order.
    pub sort_by_frontmatter_date: bool,
    /// Label sidebar entries with the front-matter title field instead of
    /// deriving labels from filenames.
    pub use_title_from_frontmatter: bool,
    /// Start sidebar groups collapsed.
    pub collapsed: bool,
}

/// Configuration consumed by the Mermaid plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MermaidOptions {
    /// Rendering theme passed to Mermaid.
    pub theme: MermaidTheme,
    /// Code-fence info strings treated as Mermaid diagrams.
    pub fences: Vec<String>,
}

impl Default for MermaidOptions {
    fn default() -> Self {
        Self {
            theme: MermaidTheme::default(),
            fences: vec!["mermaid".to_owned()],
        }
    }
}

/// Mermaid rendering themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MermaidTheme {
    /// Standard light theme.
    #[default]
    Default,
    /// Dark backgrounds.
    Dark,
    /// Green-tinted theme.
    Forest,
    /// Grayscale theme for black-and-white documents.
    Neutral,
    /// Unstyled base theme meant for customization.
    Base,
}

impl MermaidTheme {
    /// Parse a theme from its configuration name.
    ///
    /// Returns None if the name is not a known theme.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "default" => Some(Self::Default),
            "dark" => Some(Self::Dark),
            "forest" => Some(Self::Forest),
            "neutral" => Some(Self::Neutral),
            "base" => Some(Self::Base),
            _ => None,
        }
    }

    /// Configuration name of this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Forest => "forest",
            Self::Neutral => "neutral",
            Self::Base => "base",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sidebar_options_default() {
        let options = SidebarOptions::default();
        assert!(options.exclude.is_empty());
        assert!(!options.sort_by_frontmatter_date);
        assert!(!options.use_title_from_frontmatter);
        assert!(!options.collapsed);
    }

    #[test]
    fn test_mermaid_options_default() {
        let options = MermaidOptions::default();
        assert_eq!(options.theme, MermaidTheme::Default);
        assert_eq!(options.fences, vec!["mermaid".to_owned()]);
    }

    #[test]
    fn test_mermaid_theme_parse() {
        let themes = [
            ("default", MermaidTheme::Default),
            ("dark", MermaidTheme::Dark),
            ("forest", MermaidTheme::Forest),
            ("neutral", MermaidTheme::Neutral),
            ("base", MermaidTheme::Base),
        ];
        for (name, expected) in themes {
            assert_eq!(MermaidTheme::parse(name), Some(expected), "Failed to parse: {name}");
            assert_eq!(expected.as_str(), name);
        }
    }

    #[test]
    fn test_mermaid_theme_parse_unknown() {
        assert!(MermaidTheme::parse("solarized").is_none());
        assert!(MermaidTheme::parse("").is_none());
        assert!(MermaidTheme::parse("Dark").is_none());
    }

    #[test]
    fn test_mermaid_theme_serde_names() {
        let options: MermaidOptions = toml::from_str("theme = \"forest\"").unwrap();
        assert_eq!(options.theme, MermaidTheme::Forest);
        assert_eq!(options.fences, vec!["mermaid".to_owned()]);
    }

    #[test]
    fn test_sidebar_options_partial_section() {
        let options: SidebarOptions = toml::from_str("sort_by_frontmatter_date = true").unwrap();
        assert!(options.sort_by_frontmatter_date);
        assert!(!options.use_title_from_frontmatter);
        assert!(options.exclude.is_empty());
    }
}
