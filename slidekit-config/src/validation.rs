use std::fmt;

use slidekit_model::{CarouselKind, CarouselOptions, LayoutMode};
use thiserror::Error;

use crate::models::SlidekitConfig;

/// Autoplay delays below this are flagged as likely mistakes.
const MIN_COMFORTABLE_DELAY_MS: u64 = 1_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsGuardRailError {
    #[error("carousel {carousel}: autoplay delay must be greater than zero")]
    ZeroDelay { carousel: String },
}

/// Non-fatal finding about one carousel's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub carousel: String,
    pub message: String,
    pub hint: Option<&'static str>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.carousel, self.message)
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    fn note(
        &mut self,
        carousel: &str,
        message: impl Into<String>,
        hint: Option<&'static str>,
    ) {
        let warning = ConfigWarning {
            carousel: carousel.to_string(),
            message: message.into(),
            hint,
        };
        tracing::warn!(warning = %warning, "carousel options");
        self.items.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

/// Check the defaults and every per-carousel entry.
pub fn apply_guard_rails(
    config: &SlidekitConfig,
) -> Result<ConfigWarnings, OptionsGuardRailError> {
    let mut warnings = check_options("defaults", &config.defaults)?;
    for (key, options) in &config.carousels {
        warnings.extend(check_options(key, options)?);
    }
    Ok(warnings)
}

/// Check one set of options. `carousel` labels messages.
pub fn check_options(
    carousel: &str,
    options: &CarouselOptions,
) -> Result<ConfigWarnings, OptionsGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if options.delay_ms == 0 {
        return Err(OptionsGuardRailError::ZeroDelay {
            carousel: carousel.to_string(),
        });
    }

    if options.autopause_disabled && !options.autoplay {
        warnings.note(
            carousel,
            "autopause_disabled has no effect without autoplay",
            Some("Enable autoplay or drop autopause_disabled"),
        );
    }

    if options.autoplay && options.delay_ms < MIN_COMFORTABLE_DELAY_MS {
        warnings.note(
            carousel,
            format!(
                "autoplay delay of {}ms advances faster than slides can be read",
                options.delay_ms
            ),
            None,
        );
    }

    if options.kind == CarouselKind::Roller
        && options.layout == LayoutMode::PortraitOne
    {
        warnings.note(
            carousel,
            "roller controls disable at the ends of a looping portrait-one carousel",
            Some("Use the standard kind for portrait-one layouts"),
        );
    }

    Ok(warnings)
}
