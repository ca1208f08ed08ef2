//! Tokio interval driver for autoplay timers

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::autoplay::{TimerCommand, TimerId};
use crate::constants::autoplay::{MIN_PERIOD_MS, TICK_CHANNEL_CAPACITY};

/// Runs at most one interval task and forwards its ticks as `TimerId`s.
///
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct IntervalDriver {
    ticks: mpsc::Sender<TimerId>,
    task: Option<(TimerId, JoinHandle<()>)>,
}

impl IntervalDriver {
    /// Create a driver and the receiver its ticks are delivered on.
    pub fn new() -> (Self, mpsc::Receiver<TimerId>) {
        let (ticks, rx) = mpsc::channel(TICK_CHANNEL_CAPACITY);
        (Self { ticks, task: None }, rx)
    }

    pub fn live(&self) -> Option<TimerId> {
        self.task.as_ref().map(|(id, _)| *id)
    }

    pub fn apply(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Cancel(id) => {
                if self.live() == Some(id)
                    && let Some((_, handle)) = self.task.take()
                {
                    handle.abort();
                }
            }
            TimerCommand::Start { id, period } => {
                if let Some((stale, handle)) = self.task.take() {
                    tracing::warn!(
                        stale = stale.get(),
                        id = id.get(),
                        "timer started without cancelling the live one"
                    );
                    handle.abort();
                }

                // tokio intervals reject a zero period.
                let period = period.max(Duration::from_millis(MIN_PERIOD_MS));
                let ticks = self.ticks.clone();
                let handle = tokio::spawn(async move {
                    let mut interval =
                        time::interval_at(Instant::now() + period, period);
                    interval
                        .set_missed_tick_behavior(MissedTickBehavior::Delay);
                    loop {
                        interval.tick().await;
                        if ticks.send(id).await.is_err() {
                            break;
                        }
                    }
                });
                self.task = Some((id, handle));
            }
        }
    }

    pub fn apply_all(
        &mut self,
        commands: impl IntoIterator<Item = TimerCommand>,
    ) {
        for command in commands {
            self.apply(command);
        }
    }
}

impl Drop for IntervalDriver {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.task.take() {
            handle.abort();
        }
    }
}
