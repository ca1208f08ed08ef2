//! Core value types shared across slidekit crates.
#![allow(missing_docs)]

pub mod error;
pub mod layout;
pub mod options;
#[cfg(feature = "serde")]
pub mod payloads;

pub use error::{ModelError, Result as ModelResult};
pub use layout::{Direction, LayoutMode};
pub use options::{
    CarouselKind, CarouselOptions, DEFAULT_AUTOPLAY_DELAY_MS,
    InitialSlidePolicy,
};
