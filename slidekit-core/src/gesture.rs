//! Per-carousel touch tracking
//!
//! Each carousel owns one tracker; gesture state is never shared between
//! instances.

use serde::Serialize;
use slidekit_model::{Direction, LayoutMode};

/// Which way a completed horizontal swipe navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SwipeDirection {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchPoint {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    origin: Option<TouchPoint>,
    /// Origin minus the latest position, per axis.
    delta: Option<(f32, f32)>,
    /// The latest move was a cancelable horizontal drag.
    horizontal: bool,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A touch is in progress.
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn start(&mut self, x: f32, y: f32) {
        self.origin = Some(TouchPoint { x, y });
        self.delta = None;
        self.horizontal = false;
    }

    /// Track a move. Returns the horizontal drag distance in pixels when the
    /// move is a cancelable, predominantly horizontal drag; vertical moves
    /// are left to the page scroll.
    ///
    /// A move without a recorded start cancels the gesture.
    pub fn move_to(&mut self, x: f32, y: f32, cancelable: bool) -> Option<f32> {
        let Some(origin) = self.origin else {
            self.cancel();
            return None;
        };

        let dx = origin.x - x;
        let dy = origin.y - y;
        self.delta = Some((dx, dy));
        self.horizontal = dx.abs() > dy.abs() && cancelable;
        self.horizontal.then_some(dx.floor())
    }

    /// Finish the gesture, clearing all tracking. Returns the swipe
    /// direction for a horizontal drag.
    ///
    /// Right-to-left variable-width carousels keep ascending index order, so
    /// the physical swipe direction is switched for them.
    pub fn end(
        &mut self,
        cancelable: bool,
        layout: LayoutMode,
        direction: Direction,
    ) -> Option<SwipeDirection> {
        let swipe = match self.delta {
            Some((dx, dy)) if dx.abs() > dy.abs() && cancelable => {
                let switched =
                    direction.is_rtl() && layout.is_variable_width();
                let next = if switched { dx <= 0.0 } else { dx >= 0.0 };
                Some(if next {
                    SwipeDirection::Next
                } else {
                    SwipeDirection::Previous
                })
            }
            _ => None,
        };
        self.cancel();
        swipe
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.delta = None;
        self.horizontal = false;
    }
}
