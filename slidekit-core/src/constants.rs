//! Carousel constants
//!
//! Shared tuning values for measurement cadence and viewport breakpoints.
//! Tuning should happen here so every carousel instance updates consistently.

/// Viewport breakpoints used when computing offsets.
pub mod viewport {
    /// Widest viewport (px) still treated as narrow by `auto-align`.
    pub const NARROW_MAX_WIDTH: f32 = 999.0;

    /// Narrowest viewport (px) on which a centered `portrait` carousel
    /// starts one slide earlier.
    pub const PORTRAIT_CENTER_MIN_WIDTH: f32 = 768.0;
}

/// Periodic re-measurement while the carousel is visible.
pub mod refresh {
    /// Interval between layout refresh ticks (ms).
    pub const INTERVAL_MS: u64 = 500;
}

/// Autoplay timer plumbing.
pub mod autoplay {
    /// Capacity of the tick channel between the interval task and the host.
    pub const TICK_CHANNEL_CAPACITY: usize = 8;

    /// Shortest interval period (ms). A zero delay ticks at this rate.
    pub const MIN_PERIOD_MS: u64 = 1;
}
