//! Sidebar plugin wiring for the Embassy Preempt blog.
//!
//! The sidebar itself is generated by the theme layer from the content
//! tree; this crate attaches the [`SidebarOptions`] that drive it and
//! compiles the exclusion patterns those options carry.
//!
//! [`with_sidebar`] is a consuming decorator: it takes the base site
//! configuration, sets the sidebar options, and returns the augmented
//! value. Every other field passes through untouched.

use epblog_config::{SidebarOptions, SiteConfig};
use glob::{Pattern, PatternError};
use std::path::Path;

/// Sidebar configuration error.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// A malformed exclusion glob pattern.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        /// The offending pattern text.
        pattern: String,
        /// Underlying glob error.
        source: PatternError,
    },
}

/// Attach sidebar options to a site configuration.
///
/// The options are stored as given; no transformation occurs. Applied
/// before the Mermaid decorator when assembling the site.
#[must_use]
pub fn with_sidebar(mut site: SiteConfig, options: SidebarOptions) -> SiteConfig {
    tracing::debug!(
        excludes = options.exclude.len(),
        "attaching sidebar options"
    );
    site.sidebar = Some(options);
    site
}

/// Validate sidebar options.
///
/// # Errors
///
/// Returns `SidebarError::Pattern` if any exclusion pattern is malformed.
pub fn validate(options: &SidebarOptions) -> Result<(), SidebarError> {
    ExcludeSet::compile(&options.exclude)?;
    Ok(())
}

/// A compiled set of exclusion patterns.
///
/// Paths matching any pattern are omitted from sidebar generation.
#[derive(Debug)]
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compile glob patterns into an exclusion set.
    ///
    /// # Errors
    ///
    /// Returns `SidebarError::Pattern` on the first malformed pattern.
    pub fn compile(patterns: &[String]) -> Result<Self, SidebarError> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| SidebarError::Pattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether a content path matches any exclusion pattern.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_path(path))
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
