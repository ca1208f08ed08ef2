//! Input scripts for `slidekitctl simulate`
//!
//! A script is a comma-separated list of steps such as
//! `next,next,goto:3,key:home,swipe:80,tick`.

use std::fmt::{self, Display};
use std::str::FromStr;

use anyhow::{anyhow, bail};
use slidekit_core::{CarouselEvent, Key};

use crate::host::ScriptHost;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Event(CarouselEvent),
    /// Horizontal drag by this many pixels, then release.
    Swipe(f32),
    /// Fire the live autoplay timer.
    Tick,
}

impl Step {
    /// Events this step feeds the carousel.
    pub fn events(self, host: &ScriptHost) -> Vec<CarouselEvent> {
        match self {
            Step::Event(event) => vec![event],
            Step::Swipe(dx) => {
                let (x, y) = (400.0, 200.0);
                vec![
                    CarouselEvent::TouchStart { x, y },
                    CarouselEvent::TouchMove {
                        x: x - dx,
                        y,
                        cancelable: true,
                    },
                    CarouselEvent::TouchEnd { cancelable: true },
                ]
            }
            Step::Tick => host
                .live_timer()
                .map(CarouselEvent::TimerFired)
                .into_iter()
                .collect(),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Event(event) => write!(f, "{event:?}"),
            Step::Swipe(dx) => write!(f, "Swipe({dx})"),
            Step::Tick => write!(f, "Tick"),
        }
    }
}

fn parse_key(raw: &str) -> anyhow::Result<Key> {
    Ok(match raw {
        "left" => Key::ArrowLeft,
        "up" => Key::ArrowUp,
        "right" => Key::ArrowRight,
        "down" => Key::ArrowDown,
        "home" => Key::Home,
        "end" => Key::End,
        "space" => Key::Space,
        other => bail!("unknown key '{other}'"),
    })
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_ascii_lowercase();
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (raw.as_str(), None),
        };

        let event = match (name, arg) {
            ("next", None) => CarouselEvent::Next,
            ("prev" | "previous", None) => CarouselEvent::Previous,
            ("goto", Some(index)) => CarouselEvent::Indicator(
                index
                    .parse()
                    .map_err(|_| anyhow!("invalid slide index '{index}'"))?,
            ),
            ("key", Some(key)) => CarouselEvent::Key(parse_key(key)?),
            ("swipe", Some(dx)) => {
                let dx = dx
                    .parse()
                    .map_err(|_| anyhow!("invalid swipe distance '{dx}'"))?;
                return Ok(Step::Swipe(dx));
            }
            ("tick", None) => return Ok(Step::Tick),
            ("play", None) => CarouselEvent::Play,
            ("pause", None) => CarouselEvent::Pause,
            ("hover", None) => CarouselEvent::HoverEnter,
            ("leave", None) => CarouselEvent::HoverLeave,
            ("refresh", None) => CarouselEvent::RefreshTick,
            ("resize", None) => CarouselEvent::Resize,
            _ => bail!("unknown step '{s}'"),
        };
        Ok(Step::Event(event))
    }
}

/// Parse a comma-separated script. Empty entries are skipped.
pub fn parse_script(raw: &str) -> anyhow::Result<Vec<Step>> {
    raw.split(',')
        .filter(|step| !step.trim().is_empty())
        .map(str::parse)
        .collect()
}
