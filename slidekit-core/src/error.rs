use thiserror::Error;

/// Failures raised while constructing or re-measuring a carousel.
///
/// Navigation itself never fails; out-of-range requests are ignored.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    NoSlides,

    #[error("carousel markup is missing the '{0}' hook")]
    MissingHook(&'static str),

    #[error("carousel has {items} slides but {indicators} indicators")]
    IndicatorMismatch { items: usize, indicators: usize },

    #[error("slide width table has {got} entries, expected {expected}")]
    WidthTableMismatch { expected: usize, got: usize },

    #[error("slide width {width} at index {index} is not a finite, non-negative length")]
    InvalidWidth { index: usize, width: f32 },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
