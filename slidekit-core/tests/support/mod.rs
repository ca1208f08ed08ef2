//! Shared fixtures for carousel integration tests

#![allow(dead_code)]

use slidekit_core::{
    CarouselHost, Frame, Measurements, TimerCommand, TimerId, ViewportMetrics,
};

/// Host that records every frame and timer command it receives.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub measurements: Measurements,
    pub frames: Vec<Frame>,
    pub commands: Vec<TimerCommand>,
    pub hidden: bool,
}

impl RecordingHost {
    /// Fixed-width geometry: `carousel_width / item_width` slides in view.
    pub fn fixed(carousel_width: f32, item_width: f32) -> Self {
        Self {
            measurements: Measurements {
                carousel_width,
                first_item_width: item_width,
                slide_widths: Vec::new(),
                viewport: ViewportMetrics::uniform(carousel_width),
            },
            ..Self::default()
        }
    }

    /// Variable-width geometry with a measured width per slide.
    pub fn variable(widths: &[f32], container_width: f32) -> Self {
        Self {
            measurements: Measurements {
                carousel_width: container_width,
                first_item_width: widths.first().copied().unwrap_or(0.0),
                slide_widths: widths.to_vec(),
                viewport: ViewportMetrics::uniform(container_width),
            },
            ..Self::default()
        }
    }

    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("at least one rendered frame")
    }

    /// Id of the most recently started timer.
    pub fn last_started(&self) -> Option<TimerId> {
        self.commands.iter().rev().find_map(|command| match command {
            TimerCommand::Start { id, .. } => Some(*id),
            TimerCommand::Cancel(_) => None,
        })
    }

    pub fn starts(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, TimerCommand::Start { .. }))
            .count()
    }
}

impl CarouselHost for RecordingHost {
    fn measure(&self) -> Measurements {
        self.measurements.clone()
    }

    fn render(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }

    fn schedule(&mut self, command: TimerCommand) {
        self.commands.push(command);
    }

    fn page_hidden(&self) -> bool {
        self.hidden
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}
