//! Platform identifiers, filter markers and badge styles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distribution channel an entry is published on.
///
/// Unrecognized names parse as [`Platform::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Platform {
    Facebook,
    LinkedIn,
    YouTube,
    Blog,
    GitHub,
    Podcast,
    Other,
}

/// Colors used to draw a platform badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    /// Background override for dark themes
    pub dark_background: Option<&'static str>,
    pub text: &'static str,
}

impl BadgeStyle {
    /// Background for the requested theme
    #[must_use]
    pub fn background_for(&self, dark: bool) -> &'static str {
        if dark {
            self.dark_background.unwrap_or(self.background)
        } else {
            self.background
        }
    }
}

const fn badge(background: &'static str, dark_background: Option<&'static str>) -> BadgeStyle {
    BadgeStyle {
        background,
        dark_background,
        text: "#ffffff",
    }
}

impl Platform {
    /// Every platform, in the order filter controls are laid out
    pub const ALL: [Self; 7] = [
        Self::Facebook,
        Self::LinkedIn,
        Self::YouTube,
        Self::Blog,
        Self::GitHub,
        Self::Podcast,
        Self::Other,
    ];

    /// Lowercase identifier used in data and badge labels
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::YouTube => "youtube",
            Self::Blog => "blog",
            Self::GitHub => "github",
            Self::Podcast => "podcast",
            Self::Other => "other",
        }
    }

    /// Strict lookup by identifier; `None` for unknown names
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|platform| platform.name().eq_ignore_ascii_case(name))
    }

    /// Icon class carried by the filter control for this platform
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Facebook => "fa-facebook-f",
            Self::LinkedIn => "fa-linkedin-in",
            Self::YouTube => "fa-youtube",
            Self::Blog => "fa-blog",
            Self::GitHub => "fa-github",
            Self::Podcast => "fa-podcast",
            Self::Other => "fa-ellipsis",
        }
    }

    /// Resolve a filter control's icon classes to a platform.
    ///
    /// `classes` is a whitespace-separated class list such as
    /// `"fab fa-youtube"`. Returns `None` when no class is a known marker.
    #[must_use]
    pub fn from_marker(classes: &str) -> Option<Self> {
        classes.split_whitespace().find_map(|class| {
            Self::ALL
                .into_iter()
                .find(|platform| platform.marker() == class)
        })
    }

    /// Badge colors for this platform
    #[must_use]
    pub const fn badge_style(self) -> BadgeStyle {
        match self {
            Self::Facebook => badge("#1877F2", None),
            Self::LinkedIn => badge("#0A66C2", None),
            Self::YouTube => badge("#FF0000", None),
            Self::Blog => badge("#FF5722", None),
            Self::GitHub => badge("#171515", Some("#2b2b2b")),
            Self::Podcast => badge("#8557D0", None),
            Self::Other => badge("#64748b", Some("#475569")),
        }
    }
}

/// Badge colors for an arbitrary platform name, falling back to `other`.
#[must_use]
pub fn badge_style_for(name: &str) -> BadgeStyle {
    Platform::from(name).badge_style()
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Self::from_name(value).unwrap_or(Self::Other)
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
