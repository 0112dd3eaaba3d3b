//! Social platform icons for navigation-bar links.

use serde::{Deserialize, Serialize};

/// Known social platform icons.
///
/// Serialized with lowercase names, matching the identifiers the theme
/// layer uses to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitee,
    Discord,
    Twitter,
    Youtube,
    Mastodon,
    Linkedin,
}

impl SocialIcon {
    /// Parse an icon from its configuration name.
    ///
    /// Returns None if the name is not a known platform.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "github" => Some(Self::Github),
            "gitee" => Some(Self::Gitee),
            "discord" => Some(Self::Discord),
            "twitter" | "x" => Some(Self::Twitter),
            "youtube" => Some(Self::Youtube),
            "mastodon" => Some(Self::Mastodon),
            "linkedin" => Some(Self::Linkedin),
            _ => None,
        }
    }

    /// Icon identifier used in serialized configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitee => "gitee",
            Self::Discord => "discord",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Mastodon => "mastodon",
            Self::Linkedin => "linkedin",
        }
    }
}
