//! Site configuration model for the Embassy Preempt blog.
//!
//! Defines the [`SiteConfig`] value consumed by the site renderer: site
//! metadata, top navigation, social links, and the option blocks attached by
//! the sidebar and Mermaid plugins. Parses `epblog.toml` files with serde and
//! provides auto-discovery of the config file in parent directories.
//!
//! Plain construction of a [`SiteConfig`] never fails; loading from a file
//! additionally runs environment variable expansion and [`SiteConfig::validate`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `title`
//! - `description`
//! - `base`
//! - `theme.social_links[*].link`
//!
//! ## File format
//!
//! ```toml
//! title = "Embassy Preempt 博客"
//! description = "基于 Rust 的嵌入式异步实时操作系统技术博客"
//! lang = "zh-CN"
//! base = "/"
//!
//! [[theme.nav]]
//! text = "首页"
//! link = "/"
//!
//! [[theme.social_links]]
//! icon = "github"
//! link = "https://github.com/Oveln/embassy_preempt"
//!
//! [sidebar]
//! exclude = ["node_modules/**", ".vitepress/**", "public/**"]
//! sort_by_frontmatter_date = true
//! use_title_from_frontmatter = true
//!
//! [mermaid]
//! theme = "default"
//! ```

mod expand;
mod options;
mod social;

pub use options::{MermaidOptions, MermaidTheme, SidebarOptions};
pub use social::SocialIcon;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "epblog.toml";

/// Site configuration.
///
/// The root value handed to the site renderer. All fields have defaults, so
/// an empty TOML document parses into the neutral configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name of the site.
    pub title: String,
    /// Site metadata for indexing and sharing.
    pub description: String,
    /// BCP-47 language tag of the site content.
    pub lang: String,
    /// Root-relative base path the site is served under.
    pub base: String,
    /// Theme configuration (navigation, social links).
    pub theme: ThemeConfig,
    /// Options attached by the sidebar plugin, if enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<SidebarOptions>,
    /// Options attached by the Mermaid plugin, if enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mermaid: Option<MermaidOptions>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en".to_owned(),
            base: "/".to_owned(),
            theme: ThemeConfig::default(),
            sidebar: None,
            mermaid: None,
            config_path: None,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Top navigation entries; order is display order.
    pub nav: Vec<NavItem>,
    /// Social links shown in the navigation bar.
    pub social_links: Vec<SocialLink>,
}

/// A top navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Target: absolute http(s) URL or root-relative path.
    pub link: String,
}

impl NavItem {
    /// Create a navigation entry.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A social link shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform icon identifier.
    pub icon: SocialIcon,
    /// Absolute http(s) URL of the profile or repository.
    pub link: String,
}

impl SocialLink {
    /// Create a social link.
    #[must_use]
    pub fn new(icon: SocialIcon, link: impl Into<String>) -> Self {
        Self {
            icon,
            link: link.into(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`theme.social_links[0].link`").
        field: String,
        /// Error message (e.g., "${`REPO_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a link field to be an absolute http(s) URL or a root-relative path.
fn require_link(link: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(link, field)?;
    if link.starts_with('/') || link.starts_with("http://") || link.starts_with("https://") {
        return Ok(());
    }
    Err(ConfigError::Validation(format!(
        "{field} must be an absolute http(s) URL or a root-relative path"
    )))
}

impl SiteConfig {
    /// Parse a configuration from TOML text.
    ///
    /// Performs no expansion or validation; this is plain deserialization.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the configuration to TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a specific file.
    ///
    /// Expands environment variables and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, expanded, or
    /// validated.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        tracing::debug!(path = %path.display(), "loading site configuration");
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.expand_env_vars()?;
        config.validate()?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for `epblog.toml` in the current directory and parents.
    #[must_use]
    pub fn discover() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Search for `epblog.toml` in `start` and its parents.
    #[must_use]
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "discovered config file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Validate configuration values.
    ///
    /// Checks that the title is set and that every link is an absolute
    /// http(s) URL or a root-relative path. Social links must be absolute
    /// URLs. Called automatically after loading from file; never called by
    /// plain construction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any check fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_link(&self.base, "base")?;
        for (i, item) in self.theme.nav.iter().enumerate() {
            require_non_empty(&item.text, &format!("theme.nav[{i}].text"))?;
            require_link(&item.link, &format!("theme.nav[{i}].link"))?;
        }
        for (i, social) in self.theme.social_links.iter().enumerate() {
            require_http_url(&social.link, &format!("theme.social_links[{i}].link"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand::expand_env(&self.title, "title")?;
        self.description = expand::expand_env(&self.description, "description")?;
        self.base = expand::expand_env(&self.base, "base")?;
        for (i, social) in self.theme.social_links.iter_mut().enumerate() {
            social.link =
                expand::expand_env(&social.link, &format!("theme.social_links[{i}].link"))?;
        }
        Ok(())
    }
}
