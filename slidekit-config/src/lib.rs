//! Carousel option loading for slidekit.
//!
//! Options come from two places: `data-cmp-*` attributes on a carousel
//! element, and a `slidekit.toml`/`slidekit.json` file holding page-wide
//! defaults plus per-carousel overrides. `validation` applies guard rails
//! to whichever source produced them.

pub mod attributes;
pub mod models;
pub mod validation;

pub use attributes::{ATTRIBUTE_PREFIX, options_from_data_attributes};
pub use models::{OptionsSource, SlidekitConfig};
pub use validation::{
    ConfigWarning, ConfigWarnings, OptionsGuardRailError, apply_guard_rails,
    check_options,
};
