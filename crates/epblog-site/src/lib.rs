//! Built-in site configuration for the Embassy Preempt blog.
//!
//! This crate holds the one value everything else exists for: the
//! configuration of the documentation blog for the embassy_preempt
//! embedded operating system. [`site_config`] assembles the base metadata
//! and navigation, then applies the sidebar and Mermaid decorators in
//! fixed order:
//!
//! ```text
//! with_mermaid(with_sidebar(base, sidebar_options()), MermaidOptions::default())
//! ```
//!
//! Construction is pure and infallible; the value is a function of the
//! literals below. [`default_config`] memoizes it for the lifetime of the
//! process, and [`effective_config`] lets an `epblog.toml` file replace the
//! built-in value entirely.

use std::path::Path;
use std::sync::LazyLock;

use epblog_config::{
    ConfigError, MermaidOptions, NavItem, SidebarOptions, SiteConfig, SocialIcon, SocialLink,
    ThemeConfig,
};
use epblog_diagrams::with_mermaid;
use epblog_sidebar::with_sidebar;

/// Site title.
pub const SITE_TITLE: &str = "Embassy Preempt 博客";
/// Site description used for indexing and sharing.
pub const SITE_DESCRIPTION: &str = "基于 Rust 的嵌入式异步实时操作系统技术博客";
/// Language of the site content.
pub const SITE_LANG: &str = "zh-CN";
/// Base path the site is served under.
pub const SITE_BASE: &str = "/";
/// Project repository shown in the navigation bar.
pub const REPO_URL: &str = "https://github.com/Oveln/embassy_preempt";

static DEFAULT_CONFIG: LazyLock<SiteConfig> = LazyLock::new(site_config);

/// The base configuration before any plugin decorator is applied.
#[must_use]
pub fn base_config() -> SiteConfig {
    SiteConfig {
        title: SITE_TITLE.to_owned(),
        description: SITE_DESCRIPTION.to_owned(),
        lang: SITE_LANG.to_owned(),
        base: SITE_BASE.to_owned(),
        theme: ThemeConfig {
            nav: vec![
                NavItem::new("首页", "/"),
                NavItem::new("文档", "/docs/"),
                NavItem::new("技术报告", "/reports/"),
                NavItem::new("周报", "/weekly/"),
                NavItem::new("项目计划", "/plan/"),
            ],
            social_links: vec![SocialLink::new(SocialIcon::Github, REPO_URL)],
        },
        ..SiteConfig::default()
    }
}

/// Sidebar options of the blog.
///
/// Weekly reports and technical documents carry their title and date in
/// front-matter, so the sidebar is metadata-driven rather than
/// filename-driven. Tooling directories are excluded from the content tree.
#[must_use]
pub fn sidebar_options() -> SidebarOptions {
    SidebarOptions {
        exclude: vec![
            "node_modules/**".to_owned(),
            ".vitepress/**".to_owned(),
            "public/**".to_owned(),
        ],
        sort_by_frontmatter_date: true,
        use_title_from_frontmatter: true,
        collapsed: false,
    }
}

/// Assemble the full site configuration.
///
/// Pure and infallible: base literals, then the sidebar decorator, then the
/// Mermaid decorator. Calling this twice yields equal values.
#[must_use]
pub fn site_config() -> SiteConfig {
    let site = with_sidebar(base_config(), sidebar_options());
    with_mermaid(site, MermaidOptions::default())
}

/// Process-wide built-in configuration, constructed on first access.
#[must_use]
pub fn default_config() -> &'static SiteConfig {
    &DEFAULT_CONFIG
}

/// Resolve the configuration the site tooling should use.
///
/// An explicit `path` must exist and load cleanly. Without one, a
/// discovered `epblog.toml` takes precedence; otherwise the built-in
/// configuration is returned.
///
/// # Errors
///
/// Returns an error if an explicit or discovered config file fails to
/// load, expand, or validate.
pub fn effective_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    match path {
        Some(explicit) => SiteConfig::load_from_file(explicit),
        None => match SiteConfig::discover() {
            Some(discovered) => SiteConfig::load_from_file(&discovered),
            None => {
                tracing::debug!("no config file found, using built-in configuration");
                Ok(site_config())
            }
        },
    }
}

/// Serialize a configuration as JSON for the site renderer.
///
/// # Errors
///
/// Returns `ConfigError::Json` if serialization fails.
pub fn to_json(config: &SiteConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}
