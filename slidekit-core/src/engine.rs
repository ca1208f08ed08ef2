//! SlideIndexEngine: pure index and offset computation for one carousel
//!
//! The engine never touches rendering state. Hosts feed it measurements
//! (slide widths, container/track widths, narrow viewport flag) and ask it
//! for the next/previous index and the offset that brings an index into
//! view.

use serde::Serialize;
use slidekit_model::{Direction, LayoutMode};

use crate::constants::viewport::NARROW_MAX_WIDTH;
use crate::error::{CarouselError, Result};

/// Geometry of the visible area, refreshed on resize.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ViewportMetrics {
    /// Visible content width, used for overflow decisions.
    pub container_width: f32,
    /// Client width of the slide track; pixel offsets are expressed as a
    /// percentage of this and right-alignment is measured against it.
    pub track_width: f32,
    /// Viewport is at or below the narrow breakpoint.
    pub narrow: bool,
}

impl ViewportMetrics {
    pub fn new(container_width: f32, track_width: f32, narrow: bool) -> Self {
        Self {
            container_width: container_width.max(0.0),
            track_width: track_width.max(0.0),
            narrow,
        }
    }

    /// Container and track share one width (the common case).
    pub fn uniform(width: f32) -> Self {
        Self::new(width, width, false)
    }

    /// Metrics for a page whose window is `window_width` pixels wide.
    pub fn for_window(
        container_width: f32,
        track_width: f32,
        window_width: f32,
    ) -> Self {
        Self::new(
            container_width,
            track_width,
            window_width <= NARROW_MAX_WIDTH,
        )
    }
}

/// Translation that brings a slide into view.
///
/// Fixed-width layouts translate by a percentage of the track; variable
/// width layouts translate by measured pixels. Negative values move the
/// track toward the reading-order start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum Offset {
    Percent(f32),
    Pixels(f32),
}

impl Offset {
    fn zero_for(layout: LayoutMode) -> Self {
        if layout.is_variable_width() {
            Self::Pixels(0.0)
        } else {
            Self::Percent(0.0)
        }
    }

    fn mirrored(self) -> Self {
        match self {
            Self::Percent(v) => Self::Percent(-v),
            Self::Pixels(v) => Self::Pixels(-v),
        }
    }

    /// Express the offset as a percentage of the track width.
    pub fn as_track_percent(self, track_width: f32) -> f32 {
        match self {
            Self::Percent(v) => v,
            Self::Pixels(_) if track_width <= 0.0 => 0.0,
            Self::Pixels(v) => 100.0 * v / track_width,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Self::Percent(v) | Self::Pixels(v) => v == 0.0,
        }
    }
}

/// Result of an accepted navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub index: usize,
    pub offset: Offset,
}

#[derive(Debug, Clone)]
pub struct SlideIndexEngine {
    layout: LayoutMode,
    direction: Direction,
    active: usize,
    total: usize,
    slides_in_view: usize,
    /// Measured slide widths, only meaningful for variable-width layouts.
    widths: Vec<f32>,
    viewport: ViewportMetrics,
}

impl SlideIndexEngine {
    /// Create an engine for `total_slides` slides starting at index 0.
    pub fn new(
        layout: LayoutMode,
        direction: Direction,
        total_slides: usize,
    ) -> Result<Self> {
        if total_slides == 0 {
            return Err(CarouselError::NoSlides);
        }
        Ok(Self {
            layout,
            direction,
            active: 0,
            total: total_slides,
            slides_in_view: 1,
            widths: Vec::new(),
            viewport: ViewportMetrics::default(),
        })
    }

    /// Set the starting index without producing a transition. Indices past
    /// the end clamp to the last slide.
    pub fn with_active(mut self, index: usize) -> Self {
        self.active = index.min(self.total - 1);
        self
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn total_slides(&self) -> usize {
        self.total
    }

    pub fn slides_in_view(&self) -> usize {
        self.slides_in_view
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    pub fn slide_widths(&self) -> &[f32] {
        &self.widths
    }

    // ----- metrics -----

    /// Replace the slide width table. The table must have one finite,
    /// non-negative entry per slide.
    pub fn set_slide_widths(&mut self, widths: Vec<f32>) -> Result<()> {
        if widths.len() != self.total {
            return Err(CarouselError::WidthTableMismatch {
                expected: self.total,
                got: widths.len(),
            });
        }
        if let Some((index, &width)) = widths
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(CarouselError::InvalidWidth { index, width });
        }
        self.widths = widths;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: ViewportMetrics) {
        self.viewport = ViewportMetrics::new(
            viewport.container_width,
            viewport.track_width,
            viewport.narrow,
        );
    }

    /// Clamp and store the number of simultaneously visible slides.
    pub fn set_slides_in_view(&mut self, slides_in_view: usize) {
        self.slides_in_view = slides_in_view.clamp(1, self.total);
    }

    /// Derive `slides_in_view` from the carousel width and the width of the
    /// first slide. Variable-width layouts always keep a single slide in
    /// view; their windows are computed from the width table instead.
    pub fn measure_slides_in_view(
        &mut self,
        carousel_width: f32,
        first_item_width: f32,
    ) -> usize {
        if self.layout.is_variable_width() || self.total <= 1 {
            return self.slides_in_view;
        }
        if first_item_width > 0.0 && carousel_width.is_finite() {
            let ratio = (carousel_width / first_item_width).round();
            self.set_slides_in_view(ratio.max(1.0) as usize);
        }
        self.slides_in_view
    }

    // ----- queries -----

    pub fn is_first_slide(&self) -> bool {
        self.active == 0
    }

    pub fn is_last_slide(&self) -> bool {
        self.active == self.last_window_start()
    }

    /// Every slide fits in the viewport at once.
    pub fn all_in_view(&self) -> bool {
        self.total <= self.slides_in_view
    }

    /// Indicators whose window would run past the final slide.
    pub fn hidden_indicators(&self) -> Vec<usize> {
        (0..self.total)
            .filter(|i| i + self.slides_in_view > self.total)
            .collect()
    }

    /// Slides from the active one onward fit in the container, leaving
    /// trailing space.
    pub fn remaining_fits(&self) -> bool {
        self.fits_from(self.active)
    }

    /// Index of the first slide of the last full window.
    fn last_window_start(&self) -> usize {
        self.total - self.slides_in_view
    }

    /// Summed width of slides from `start` to the end.
    fn width_from(&self, start: usize) -> f32 {
        self.widths.iter().skip(start).sum()
    }

    fn width_of(&self, index: usize) -> f32 {
        self.widths.get(index).copied().unwrap_or(0.0)
    }

    fn fits_from(&self, start: usize) -> bool {
        self.width_from(start) <= self.viewport.container_width
    }

    // ----- navigation -----

    /// Index one step forward in reading order, looping at the end.
    pub fn next_index(&self) -> usize {
        self.next_index_from(self.active)
    }

    /// Index one step backward in reading order, looping at the start.
    pub fn previous_index(&self) -> usize {
        self.previous_index_from(self.active)
    }

    fn next_index_from(&self, active: usize) -> usize {
        let total = self.total;
        // Variable-width layouts keep ascending index order in both
        // directions; only their offsets mirror.
        if self.direction.is_rtl() && !self.layout.is_variable_width() {
            return match (self.layout, active) {
                (LayoutMode::PortraitOne, 0) => total - 1,
                (_, 0) => self.last_window_start(),
                (_, i) => i - 1,
            };
        }

        match self.layout {
            LayoutMode::PortraitOne => {
                if active + 1 >= total {
                    0
                } else {
                    active + 1
                }
            }
            LayoutMode::Auto | LayoutMode::AutoAlign
                if active < self.last_window_start() =>
            {
                if self.fits_from(0) {
                    // Everything is already visible.
                    return 0;
                }
                let next = active + 1;
                if self.fits_from(next) {
                    // Stepping once would leave a gap; align to the end.
                    return total - 1;
                }
                next
            }
            _ => {
                if active + self.slides_in_view >= total {
                    0
                } else {
                    active + 1
                }
            }
        }
    }

    fn previous_index_from(&self, active: usize) -> usize {
        let total = self.total;
        if self.direction.is_rtl() && !self.layout.is_variable_width() {
            return match self.layout {
                LayoutMode::PortraitOne if active + 1 >= total => 0,
                LayoutMode::PortraitOne => active + 1,
                _ if active >= self.last_window_start() => 0,
                _ => active + 1,
            };
        }

        match self.layout {
            LayoutMode::PortraitOne => {
                if active == 0 {
                    total - 1
                } else {
                    active - 1
                }
            }
            LayoutMode::Auto | LayoutMode::AutoAlign => {
                if self.fits_from(0) {
                    return 0;
                }
                if active == 0 {
                    return self.last_window_start();
                }
                // Walk back to the furthest index whose window still fills
                // the container without trailing space.
                let container = self.viewport.container_width;
                let mut candidate = active;
                let mut width = self.width_from(active);
                while candidate > 0 {
                    candidate -= 1;
                    width += self.width_of(candidate);
                    if width >= container {
                        break;
                    }
                }
                candidate
            }
            LayoutMode::Fixed | LayoutMode::Portrait => {
                if active == 0 {
                    self.last_window_start()
                } else {
                    active - 1
                }
            }
        }
    }

    /// Offset that brings `index` into view.
    pub fn offset_for_index(&self, index: usize) -> Offset {
        if self.all_in_view() {
            return Offset::zero_for(self.layout);
        }

        let offset = if self.layout.is_variable_width() {
            Offset::Pixels(self.variable_translation(index))
        } else {
            Offset::Percent(self.fixed_translation(index))
        };

        if self.direction.is_rtl() {
            offset.mirrored()
        } else {
            offset
        }
    }

    fn fixed_translation(&self, index: usize) -> f32 {
        let in_view = self.slides_in_view as f32;
        let position = match self.layout {
            // Center the active slide instead of left-aligning it.
            LayoutMode::PortraitOne => index as f32 - (in_view - 1.0) / 2.0,
            _ => index as f32,
        };
        -position * 100.0 / in_view
    }

    fn variable_translation(&self, index: usize) -> f32 {
        let is_last = index == self.last_window_start();
        let mut offset = if is_last && self.layout != LayoutMode::AutoAlign {
            // Right-align the final window.
            self.width_from(0) - self.viewport.track_width
        } else {
            // Leading edge, measured from the reading-order start.
            self.widths.iter().take(index).sum::<f32>()
        };

        if self.layout == LayoutMode::AutoAlign && self.viewport.narrow {
            let slack = self.viewport.container_width - self.width_of(index);
            if self.next_index_from(index) == 0 {
                offset -= slack;
            } else if index > 0 {
                offset -= slack / 2.0;
            }
        }

        -offset
    }

    /// Make `index` active. Out-of-range targets and single-slide
    /// carousels are ignored and return `None`.
    pub fn navigate(&mut self, index: usize) -> Option<Transition> {
        if index >= self.total || self.total <= 1 {
            tracing::trace!(index, total = self.total, "ignoring navigation");
            return None;
        }

        self.active = index;
        let offset = self.offset_for_index(index);
        tracing::debug!(index, ?offset, layout = %self.layout, "navigate");
        Some(Transition { index, offset })
    }
}
