//! Autoplay timer state
//!
//! Tracks whether the carousel should be advancing on its own and which
//! timer is currently live. Every state change yields the `TimerCommand`s a
//! driver must execute; a new timer is only ever started after the previous
//! one has been cancelled, so at most one timer is live per carousel.

use std::time::Duration;

use serde::Serialize;
use slidekit_model::CarouselOptions;

use crate::constants::autoplay::MIN_PERIOD_MS;

/// Identity of one started timer. Ticks from stale timers are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimerId(u64);

impl TimerId {
    pub const fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerCommand {
    Start { id: TimerId, period: Duration },
    Cancel(TimerId),
}

#[derive(Debug, Clone)]
pub struct Autoplay {
    enabled: bool,
    delay: Duration,
    autopause_disabled: bool,
    paused: bool,
    hovered: bool,
    live: Option<TimerId>,
    next_id: u64,
}

impl Autoplay {
    /// Delays shorter than `MIN_PERIOD_MS` are raised to it; a zero delay
    /// still advances the carousel as fast as the driver allows.
    pub fn new(enabled: bool, delay: Duration, autopause_disabled: bool) -> Self {
        let floor = Duration::from_millis(MIN_PERIOD_MS);
        if enabled && delay < floor {
            tracing::warn!(
                delay_ms = delay.as_millis() as u64,
                min_ms = MIN_PERIOD_MS,
                "autoplay delay raised to the minimum period"
            );
        }
        Self {
            enabled,
            delay: delay.max(floor),
            autopause_disabled,
            paused: false,
            hovered: false,
            live: None,
            next_id: 0,
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(
            options.autoplay,
            Duration::from_millis(options.delay_ms),
            options.autopause_disabled,
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn live_timer(&self) -> Option<TimerId> {
        self.live
    }

    /// Only the live timer may advance the carousel.
    pub fn accepts_tick(&self, id: TimerId) -> bool {
        self.live == Some(id)
    }

    fn cancel_into(&mut self, commands: &mut Vec<TimerCommand>) {
        if let Some(id) = self.live.take() {
            commands.push(TimerCommand::Cancel(id));
        }
    }

    /// Restart the interval. No-op while paused or when autoplay is off.
    pub fn reset(&mut self) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        if self.paused || !self.enabled {
            return commands;
        }
        self.cancel_into(&mut commands);

        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.live = Some(id);
        commands.push(TimerCommand::Start {
            id,
            period: self.delay,
        });
        commands
    }

    /// Stop the interval without changing the paused flag.
    pub fn clear(&mut self) -> Vec<TimerCommand> {
        let mut commands = Vec::new();
        self.cancel_into(&mut commands);
        commands
    }

    pub fn pause(&mut self) -> Vec<TimerCommand> {
        self.paused = true;
        self.clear()
    }

    /// Resume. A hovered carousel waits for the pointer to leave unless
    /// autopause is disabled.
    pub fn play(&mut self) -> Vec<TimerCommand> {
        self.paused = false;
        if self.autopause_disabled || !self.hovered {
            self.reset()
        } else {
            Vec::new()
        }
    }

    pub fn toggle(&mut self) -> Vec<TimerCommand> {
        if self.paused { self.play() } else { self.pause() }
    }

    pub fn hover_enter(&mut self) -> Vec<TimerCommand> {
        if self.autopause_disabled {
            return Vec::new();
        }
        self.hovered = true;
        self.clear()
    }

    pub fn hover_leave(&mut self) -> Vec<TimerCommand> {
        if self.autopause_disabled {
            return Vec::new();
        }
        self.hovered = false;
        self.reset()
    }

    /// Navigation restarts the interval unless the pointer is over the
    /// carousel.
    pub fn after_navigation(&mut self) -> Vec<TimerCommand> {
        if self.hovered {
            Vec::new()
        } else {
            self.reset()
        }
    }
}
