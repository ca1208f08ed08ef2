//! Carousel navigation core.
//!
//! `SlideIndexEngine` computes which slide is active, where next/previous
//! lead, and how far the slide track must move, for fixed-width,
//! variable-width and single-slide layouts in either reading direction.
//! `Carousel` wraps the engine with touch tracking and autoplay behind the
//! `CarouselHost` trait, and `CarouselRegistry` initializes many carousels
//! independently of one another.

pub mod autoplay;
pub mod carousel;
pub mod constants;
pub mod driver;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod initial;
pub mod keyboard;
pub mod registry;

pub use autoplay::{Autoplay, TimerCommand, TimerId};
pub use carousel::{
    Carousel, CarouselEvent, CarouselHost, CarouselMarkup, CarouselState,
    Controls, Frame, Measurements, PageContext,
};
pub use driver::IntervalDriver;
pub use engine::{Offset, SlideIndexEngine, Transition, ViewportMetrics};
pub use error::{CarouselError, Result};
pub use gesture::{SwipeDirection, TouchTracker};
pub use initial::{SlideCard, VisitorProfile};
pub use keyboard::Key;
pub use registry::{
    CarouselEntry, CarouselKey, CarouselRegistry, RegistrationFailure,
};
pub use slidekit_model::{
    CarouselKind, CarouselOptions, Direction, InitialSlidePolicy, LayoutMode,
};
