//! In-memory carousel host used by the simulator

use slidekit_core::{
    CarouselHost, Frame, Measurements, TimerCommand, TimerId, ViewportMetrics,
};

/// Geometry flags shared by `simulate` and `play`.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub container_width: f32,
    pub item_width: f32,
    pub slide_widths: Vec<f32>,
    pub window_width: f32,
}

#[derive(Debug)]
pub struct ScriptHost {
    measurements: Measurements,
    pub frames: Vec<Frame>,
    pub pending: Vec<TimerCommand>,
    live: Option<TimerId>,
}

impl ScriptHost {
    pub fn new(geometry: &Geometry) -> Self {
        Self {
            measurements: Measurements {
                carousel_width: geometry.container_width,
                first_item_width: geometry.item_width,
                slide_widths: geometry.slide_widths.clone(),
                viewport: ViewportMetrics::for_window(
                    geometry.container_width,
                    geometry.container_width,
                    geometry.window_width,
                ),
            },
            frames: Vec::new(),
            pending: Vec::new(),
            live: None,
        }
    }

    /// Timer that a `tick` step fires.
    pub fn live_timer(&self) -> Option<TimerId> {
        self.live
    }

    pub fn take_commands(&mut self) -> Vec<TimerCommand> {
        std::mem::take(&mut self.pending)
    }
}

impl CarouselHost for ScriptHost {
    fn measure(&self) -> Measurements {
        self.measurements.clone()
    }

    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn schedule(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Start { id, .. } => self.live = Some(id),
            TimerCommand::Cancel(id) if self.live == Some(id) => {
                self.live = None;
            }
            TimerCommand::Cancel(_) => {}
        }
        self.pending.push(command);
    }
}
