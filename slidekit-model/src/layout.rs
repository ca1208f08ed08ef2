use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// How slides are sized and how the carousel pages through them.
///
/// Fixed once a carousel is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LayoutMode {
    /// Uniform-width slides, `slides_in_view` visible at once.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "landscape"))]
    Fixed,
    /// Fixed-width portrait cards. Pages like `Fixed`; a centered start
    /// sits one slide earlier on wide viewports.
    Portrait,
    /// Variable-width slides; the final window is right-aligned.
    Auto,
    /// Variable-width slides; the active slide is centered on narrow
    /// viewports instead of right-aligning the final window.
    AutoAlign,
    /// One slide at a time, always looping.
    PortraitOne,
}

impl LayoutMode {
    pub const ALL: [Self; 5] = [
        Self::Fixed,
        Self::Portrait,
        Self::Auto,
        Self::AutoAlign,
        Self::PortraitOne,
    ];

    /// Uniform-width layouts that page by whole windows.
    pub const fn pages_by_window(self) -> bool {
        matches!(self, Self::Fixed | Self::Portrait)
    }

    /// Offsets come from measured slide widths rather than a fixed fraction.
    pub const fn is_variable_width(self) -> bool {
        matches!(self, Self::Auto | Self::AutoAlign)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Portrait => "portrait",
            Self::Auto => "auto",
            Self::AutoAlign => "auto-align",
            Self::PortraitOne => "portrait-one",
        }
    }
}

impl Display for LayoutMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // Legacy markup spells the fixed layout `landscape`.
            "fixed" | "landscape" => Ok(Self::Fixed),
            "portrait" => Ok(Self::Portrait),
            "auto" => Ok(Self::Auto),
            "auto-align" => Ok(Self::AutoAlign),
            "portrait-one" => Ok(Self::PortraitOne),
            other => Err(ModelError::UnknownLayout(other.to_string())),
        }
    }
}

/// Reading direction of the page hosting the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ltr"))]
    LeftToRight,
    #[cfg_attr(feature = "serde", serde(rename = "rtl"))]
    RightToLeft,
}

impl Direction {
    /// Derive the direction from a document `dir` attribute. Only an exact
    /// `rtl` flips the direction; anything else reads left-to-right.
    pub fn from_dir_attribute(dir: Option<&str>) -> Self {
        match dir {
            Some("rtl") => Self::RightToLeft,
            _ => Self::LeftToRight,
        }
    }

    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftToRight => write!(f, "ltr"),
            Self::RightToLeft => write!(f, "rtl"),
        }
    }
}
