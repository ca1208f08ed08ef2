//! Carousel adapter
//!
//! Wraps a `SlideIndexEngine` with per-instance gesture tracking and
//! autoplay, and talks to the hosting renderer through `CarouselHost`.
//! The host reports geometry and applies the frames and timer commands
//! produced here; no rendering happens in this crate.

use serde::Serialize;
use slidekit_model::{CarouselKind, CarouselOptions, Direction, LayoutMode};

use crate::autoplay::{Autoplay, TimerCommand, TimerId};
use crate::constants::viewport::PORTRAIT_CENTER_MIN_WIDTH;
use crate::engine::{Offset, SlideIndexEngine, ViewportMetrics};
use crate::error::{CarouselError, Result};
use crate::gesture::{SwipeDirection, TouchTracker};
use crate::initial::{SlideCard, VisitorProfile, resolve_initial_index};
use crate::keyboard::{Key, KeyAction, key_action};

/// Page-wide settings shared by every carousel on a page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub direction: Direction,
    pub visitor: Option<VisitorProfile>,
    /// Window width (px) at construction, when known.
    pub window_width: Option<f32>,
}

/// The structural hooks a carousel element exposes.
#[derive(Debug, Clone, Default)]
pub struct CarouselMarkup {
    pub items: usize,
    /// Indicator count; zero when the markup has no indicators.
    pub indicators: usize,
    pub has_content: bool,
    pub has_slides: bool,
    /// Optional targeting metadata, one per item.
    pub cards: Vec<SlideCard>,
}

impl CarouselMarkup {
    /// Markup with every hook present and one indicator per item.
    pub fn complete(items: usize) -> Self {
        Self {
            items,
            indicators: items,
            has_content: true,
            has_slides: true,
            cards: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.items == 0 {
            return Err(CarouselError::NoSlides);
        }
        if !self.has_content {
            return Err(CarouselError::MissingHook("content"));
        }
        if !self.has_slides {
            return Err(CarouselError::MissingHook("slides"));
        }
        if self.indicators != 0 && self.indicators != self.items {
            return Err(CarouselError::IndicatorMismatch {
                items: self.items,
                indicators: self.indicators,
            });
        }
        Ok(())
    }
}

/// Geometry read from the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    /// Width of the carousel element itself.
    pub carousel_width: f32,
    /// Width of the first slide; fixed layouts derive `slides_in_view`
    /// from it.
    pub first_item_width: f32,
    /// Per-slide widths, read for variable-width layouts.
    pub slide_widths: Vec<f32>,
    pub viewport: ViewportMetrics,
}

/// Host side of a carousel: geometry in, frames and timers out.
pub trait CarouselHost {
    fn measure(&self) -> Measurements;

    fn render(&mut self, frame: &Frame);

    fn schedule(&mut self, command: TimerCommand);

    /// The page is in the background; autoplay ticks are skipped.
    fn page_hidden(&self) -> bool {
        false
    }
}

/// Input the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    Next,
    Previous,
    Indicator(usize),
    Key(Key),
    TouchStart { x: f32, y: f32 },
    TouchMove { x: f32, y: f32, cancelable: bool },
    TouchEnd { cancelable: bool },
    TouchCancel,
    HoverEnter,
    HoverLeave,
    Play,
    Pause,
    TimerFired(TimerId),
    /// Viewport resized; slide widths are re-read.
    Resize,
    /// Carousel entered or left the viewport.
    Visibility(bool),
    /// Periodic layout refresh.
    RefreshTick,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Controls {
    /// Navigation controls are shown (not every slide fits).
    pub visible: bool,
    pub hidden_indicators: Vec<usize>,
    pub play_disabled: bool,
    pub pause_disabled: bool,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Everything a renderer needs to draw the carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub active_index: usize,
    pub offset: Offset,
    /// Extra drag translation in pixels while a horizontal touch is live.
    pub drag_px: Option<f32>,
    pub touched: bool,
    /// Move focus to the active indicator.
    pub focus_indicator: bool,
    pub controls: Controls,
}

/// Snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselState {
    pub active_index: usize,
    pub total_slides: usize,
    pub slides_in_view: usize,
    pub paused: bool,
}

#[derive(Debug)]
pub struct Carousel {
    options: CarouselOptions,
    engine: SlideIndexEngine,
    touch: TouchTracker,
    autoplay: Autoplay,
    indicator_count: usize,
    controls_visible: bool,
    visible: bool,
}

impl Carousel {
    /// Build a carousel, render its first frame and start autoplay.
    ///
    /// Fails when the markup is incomplete or the host reports a width
    /// table that does not match the slides.
    pub fn new<H: CarouselHost>(
        options: CarouselOptions,
        page: &PageContext,
        markup: &CarouselMarkup,
        host: &mut H,
    ) -> Result<Self> {
        markup.validate()?;

        let initial = resolve_initial_index(
            options.layout,
            options.initial,
            markup.items,
            &markup.cards,
            page.visitor.as_ref(),
            page.window_width
                .is_some_and(|width| width >= PORTRAIT_CENTER_MIN_WIDTH),
        );
        let engine =
            SlideIndexEngine::new(options.layout, page.direction, markup.items)?
                .with_active(initial);

        let mut carousel = Self {
            options,
            engine,
            touch: TouchTracker::new(),
            autoplay: Autoplay::from_options(&options),
            indicator_count: if markup.indicators > 0 {
                markup.indicators
            } else {
                markup.items
            },
            controls_visible: false,
            visible: true,
        };

        carousel.apply_measurements(host.measure())?;
        carousel.refresh_layout(host);
        if markup.items > 1 {
            let commands = carousel.autoplay.reset();
            schedule_all(host, commands);
        }

        tracing::debug!(
            layout = %options.layout,
            slides = markup.items,
            initial,
            "carousel created"
        );
        Ok(carousel)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn engine(&self) -> &SlideIndexEngine {
        &self.engine
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.autoplay.is_paused()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            active_index: self.engine.active_index(),
            total_slides: self.engine.total_slides(),
            slides_in_view: self.engine.slides_in_view(),
            paused: self.autoplay.is_paused(),
        }
    }

    /// Current frame, without a drag component.
    pub fn frame(&self) -> Frame {
        let active = self.engine.active_index();
        let paused = self.autoplay.is_paused();
        let roller = self.options.kind == CarouselKind::Roller;
        Frame {
            active_index: active,
            offset: self.engine.offset_for_index(active),
            drag_px: None,
            touched: self.touch.is_active(),
            focus_indicator: false,
            controls: Controls {
                visible: self.controls_visible,
                hidden_indicators: if self.controls_visible {
                    self.engine.hidden_indicators()
                } else {
                    Vec::new()
                },
                play_disabled: !paused,
                pause_disabled: paused,
                previous_disabled: roller && self.engine.is_first_slide(),
                next_disabled: roller && self.engine.next_index() == 0,
            },
        }
    }

    pub fn handle<H: CarouselHost>(
        &mut self,
        event: CarouselEvent,
        host: &mut H,
    ) {
        // A single slide binds no navigation.
        if self.engine.total_slides() <= 1
            && !matches!(
                event,
                CarouselEvent::Resize | CarouselEvent::Visibility(_)
            )
        {
            return;
        }

        match event {
            CarouselEvent::Next => {
                let index = self.engine.next_index();
                self.go_to(index, false, host);
            }
            CarouselEvent::Previous => {
                let index = self.engine.previous_index();
                self.go_to(index, false, host);
            }
            CarouselEvent::Indicator(index) => self.go_to(index, false, host),
            CarouselEvent::Key(key) => self.on_key(key, host),
            CarouselEvent::TouchStart { x, y } => {
                self.refresh_layout(host);
                self.touch.start(x, y);
                if self.autoplay.is_enabled() {
                    let commands = self.autoplay.pause();
                    schedule_all(host, commands);
                }
                self.render(host, false);
            }
            CarouselEvent::TouchMove { x, y, cancelable } => {
                match self.touch.move_to(x, y, cancelable) {
                    Some(drag) => {
                        let mut frame = self.frame();
                        frame.drag_px = Some(drag);
                        host.render(&frame);
                    }
                    None if !self.touch.is_active() => self.settle(host),
                    None => {}
                }
            }
            CarouselEvent::TouchEnd { cancelable } => {
                let swipe = self.touch.end(
                    cancelable,
                    self.engine.layout(),
                    self.engine.direction(),
                );
                let index = match swipe {
                    Some(SwipeDirection::Next) => self.engine.next_index(),
                    Some(SwipeDirection::Previous) => {
                        self.engine.previous_index()
                    }
                    None => self.engine.active_index(),
                };
                self.go_to(index, false, host);
            }
            CarouselEvent::TouchCancel => {
                self.touch.cancel();
                let index = self.engine.active_index();
                self.go_to(index, false, host);
            }
            CarouselEvent::HoverEnter => {
                let commands = self.autoplay.hover_enter();
                schedule_all(host, commands);
            }
            CarouselEvent::HoverLeave => {
                let commands = self.autoplay.hover_leave();
                schedule_all(host, commands);
            }
            CarouselEvent::Play => {
                let commands = self.autoplay.play();
                schedule_all(host, commands);
                self.render(host, false);
            }
            CarouselEvent::Pause => {
                let commands = self.autoplay.pause();
                schedule_all(host, commands);
                self.render(host, false);
            }
            CarouselEvent::TimerFired(id) => {
                if !self.autoplay.accepts_tick(id) {
                    tracing::trace!(timer = id.get(), "stale autoplay tick");
                    return;
                }
                if host.page_hidden() {
                    return;
                }
                let index = self.engine.next_index();
                self.go_to(index, false, host);
            }
            CarouselEvent::Resize => {
                if let Err(err) = self.apply_measurements(host.measure()) {
                    tracing::warn!(
                        error = %err,
                        "ignoring carousel measurements"
                    );
                }
            }
            CarouselEvent::Visibility(visible) => {
                self.visible = visible;
                if visible
                    && let Err(err) = self.apply_measurements(host.measure())
                {
                    tracing::warn!(
                        error = %err,
                        "ignoring carousel measurements"
                    );
                }
            }
            CarouselEvent::RefreshTick => {
                if self.visible && !self.touch.is_active() {
                    self.refresh_layout(host);
                }
            }
        }
    }

    fn on_key<H: CarouselHost>(&mut self, key: Key, host: &mut H) {
        let action = key_action(
            key,
            self.engine.active_index(),
            self.indicator_count,
            self.autoplay.is_enabled(),
        );
        match action {
            KeyAction::FocusIndex(index) => self.go_to(index, true, host),
            KeyAction::TogglePlayback => {
                let commands = self.autoplay.toggle();
                schedule_all(host, commands);
                self.render(host, false);
            }
            KeyAction::Ignore => {}
        }
    }

    /// Navigate on behalf of the user or autoplay, restarting the timer.
    fn go_to<H: CarouselHost>(
        &mut self,
        index: usize,
        focus: bool,
        host: &mut H,
    ) {
        if self.engine.navigate(index).is_none() {
            return;
        }
        self.render(host, focus);
        let commands = self.autoplay.after_navigation();
        schedule_all(host, commands);
    }

    /// Move to `index` during a layout refresh. The timer only restarts
    /// when the active slide actually changes.
    fn reconcile<H: CarouselHost>(&mut self, index: usize, host: &mut H) {
        if index == self.engine.active_index() {
            self.settle(host);
        } else {
            self.go_to(index, false, host);
        }
    }

    /// Re-apply the active offset without touching the autoplay timer.
    fn settle<H: CarouselHost>(&mut self, host: &mut H) {
        let index = self.engine.active_index();
        self.engine.navigate(index);
        self.render(host, false);
    }

    fn render<H: CarouselHost>(&self, host: &mut H, focus: bool) {
        let mut frame = self.frame();
        frame.focus_indicator = focus;
        host.render(&frame);
    }

    fn apply_measurements(
        &mut self,
        measurements: Measurements,
    ) -> Result<()> {
        self.engine.set_viewport(measurements.viewport);
        if self.engine.layout().is_variable_width() {
            self.engine.set_slide_widths(measurements.slide_widths)?;
        } else {
            self.engine.measure_slides_in_view(
                measurements.carousel_width,
                measurements.first_item_width,
            );
        }
        Ok(())
    }

    /// Re-measure and reconcile the active index with the new layout.
    pub fn refresh_layout<H: CarouselHost>(&mut self, host: &mut H) {
        if let Err(err) = self.apply_measurements(host.measure()) {
            tracing::warn!(error = %err, "ignoring carousel measurements");
        }
        let total = self.engine.total_slides();
        if total <= 1 {
            self.render(host, false);
            return;
        }

        let layout = self.engine.layout();
        let active = self.engine.active_index();
        let in_view = self.engine.slides_in_view();
        self.controls_visible = total > in_view;

        if layout == LayoutMode::Auto
            && !self.engine.is_last_slide()
            && self.engine.remaining_fits()
        {
            // Trailing space after the active window; pull it back.
            let index = self.engine.previous_index();
            self.reconcile(index, host);
            return;
        }

        if layout.pages_by_window()
            && active + in_view > total
            && total != in_view
        {
            let index = self.engine.previous_index();
            self.reconcile(index, host);
            return;
        }

        if self.controls_visible {
            self.settle(host);
        } else {
            self.render(host, false);
        }
    }
}

fn schedule_all<H: CarouselHost>(host: &mut H, commands: Vec<TimerCommand>) {
    for command in commands {
        host.schedule(command);
    }
}
