use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;
use crate::layout::LayoutMode;

/// Autoplay delay applied when none (or an unparsable one) is configured.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 5_000;

/// Which slide is active when a carousel first renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InitialSlidePolicy {
    #[default]
    First,
    /// Middle slide; even counts start one slide before the midpoint.
    Center,
}

impl FromStr for InitialSlidePolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "center" => Ok(Self::Center),
            other => Err(ModelError::UnknownInitialPolicy(other.to_string())),
        }
    }
}

impl Display for InitialSlidePolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Center => write!(f, "center"),
        }
    }
}

/// Control behaviour variant of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CarouselKind {
    #[default]
    Standard,
    /// Previous/next actions are disabled at the ends of the carousel.
    Roller,
}

impl FromStr for CarouselKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => Ok(Self::Standard),
            "roller" => Ok(Self::Roller),
            other => Err(ModelError::UnknownKind(other.to_string())),
        }
    }
}

/// Construction-time options for one carousel instance.
///
/// Every field has a default, so partially specified sources (markup
/// attributes, config files) deserialize into a complete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub layout: LayoutMode,
    pub initial: InitialSlidePolicy,
    /// Advance automatically every `delay_ms`.
    pub autoplay: bool,
    pub delay_ms: u64,
    /// Keep autoplaying while the pointer hovers the carousel.
    pub autopause_disabled: bool,
    pub kind: CarouselKind,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            layout: LayoutMode::default(),
            initial: InitialSlidePolicy::default(),
            autoplay: false,
            delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
            autopause_disabled: false,
            kind: CarouselKind::default(),
        }
    }
}

impl CarouselOptions {
    pub const fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    pub const fn with_autoplay(mut self, delay_ms: u64) -> Self {
        self.autoplay = true;
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_initial(mut self, initial: InitialSlidePolicy) -> Self {
        self.initial = initial;
        self
    }

    pub const fn with_kind(mut self, kind: CarouselKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"layout":"auto-align","autoplay":true}"#)
                .expect("parse options");
        assert_eq!(options.layout, LayoutMode::AutoAlign);
        assert!(options.autoplay);
        assert_eq!(options.delay_ms, DEFAULT_AUTOPLAY_DELAY_MS);
        assert_eq!(options.initial, InitialSlidePolicy::First);
        assert_eq!(options.kind, CarouselKind::Standard);
    }

    #[test]
    fn legacy_layout_alias_deserializes() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"layout":"landscape"}"#)
                .expect("parse options");
        assert_eq!(options.layout, LayoutMode::Fixed);

        let options: CarouselOptions =
            serde_json::from_str(r#"{"layout":"portrait"}"#)
                .expect("parse options");
        assert_eq!(options.layout, LayoutMode::Portrait);
    }
}
