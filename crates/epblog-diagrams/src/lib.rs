//! Mermaid plugin wiring for the Embassy Preempt blog.
//!
//! Diagram compilation happens in the Markdown pipeline of the site
//! renderer; this crate attaches the [`MermaidOptions`] that pipeline reads
//! and decides which fenced code blocks the plugin claims.
//!
//! [`with_mermaid`] is a consuming decorator applied after the sidebar
//! decorator. Both operate on disjoint fields, so everything present in the
//! sidebar-augmented configuration is present and unchanged in the result.

use epblog_config::{MermaidOptions, SiteConfig};

/// Attach Mermaid options to a site configuration.
///
/// The options are stored as given; no transformation occurs.
#[must_use]
pub fn with_mermaid(mut site: SiteConfig, options: MermaidOptions) -> SiteConfig {
    tracing::debug!(theme = options.theme.as_str(), "attaching mermaid options");
    site.mermaid = Some(options);
    site
}

/// Whether a code-fence info string belongs to the Mermaid plugin.
///
/// Only the first whitespace-separated token is considered, so attribute
/// suffixes such as `mermaid {align=center}` still match.
#[must_use]
pub fn claims_fence(options: &MermaidOptions, info: &str) -> bool {
    let Some(language) = info.split_whitespace().next() else {
        return false;
    };
    options.fences.iter().any(|f| f == language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epblog_config::MermaidTheme;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_with_mermaid_attaches_options() {
        let base = SiteConfig {
            title: "Embassy Preempt 博客".to_owned(),
            ..SiteConfig::default()
        };
        let options = MermaidOptions {
            theme: MermaidTheme::Dark,
            ..MermaidOptions::default()
        };

        let site = with_mermaid(base, options.clone());

        assert_eq!(site.mermaid, Some(options));
        assert_eq!(site.title, "Embassy Preempt 博客");
    }

    #[test]
    fn test_with_mermaid_preserves_sidebar_field() {
        let base = SiteConfig {
            sidebar: Some(epblog_config::SidebarOptions {
                sort_by_frontmatter_date: true,
                ..epblog_config::SidebarOptions::default()
            }),
            ..SiteConfig::default()
        };
        let sidebar_before = base.sidebar.clone();

        let site = with_mermaid(base, MermaidOptions::default());

        assert_eq!(site.sidebar, sidebar_before);
    }

    #[test]
    fn test_claims_fence_default() {
        let options = MermaidOptions::default();
        assert!(claims_fence(&options, "mermaid"));
        assert!(!claims_fence(&options, "rust"));
        assert!(!claims_fence(&options, ""));
    }

    #[test]
    fn test_claims_fence_with_attributes() {
        let options = MermaidOptions::default();
        assert!(claims_fence(&options, "mermaid {align=center}"));
        assert!(!claims_fence(&options, "rust mermaid"));
    }

    #[test]
    fn test_claims_fence_custom_fences() {
        let options = MermaidOptions {
            fences: vec!["mermaid".to_owned(), "mmd".to_owned()],
            ..MermaidOptions::default()
        };
        assert!(claims_fence(&options, "mmd"));
        assert!(claims_fence(&options, "mermaid"));
        assert!(!claims_fence(&options, "plantuml"));
    }
}
