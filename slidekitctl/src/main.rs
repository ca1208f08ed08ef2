use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use slidekit_config::{
    OptionsSource, SlidekitConfig, apply_guard_rails, check_options,
    options_from_data_attributes,
};
use slidekit_core::{
    Carousel, CarouselEvent, CarouselMarkup, CarouselOptions, Direction,
    IntervalDriver, LayoutMode, PageContext, constants::refresh,
};
use slidekit_model::payloads::{
    CountryRecord, FlightListing, LandmarkSearch, TimeZoneInfo,
};
use tokio::time;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod host;
mod script;

use host::{Geometry, ScriptHost};
use script::parse_script;

#[derive(Parser)]
#[command(
    name = "slidekitctl",
    about = "Carousel option checker and input simulator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a carousel config file (or the environment's config)
    Check {
        /// Config file; falls back to SLIDEKIT_CONFIG_PATH and friends
        config: Option<PathBuf>,
    },
    /// Resolve options from data-cmp-* attributes
    Options {
        /// Attribute as name=value, e.g. data-cmp-layout=auto
        #[arg(long = "attr", value_name = "NAME=VALUE")]
        attrs: Vec<String>,
    },
    /// Replay a scripted input sequence and print every rendered frame
    Simulate {
        #[command(flatten)]
        carousel: CarouselArgs,
        /// Comma-separated steps: next, prev, goto:N, key:NAME, swipe:PX,
        /// tick, play, pause, hover, leave, refresh, resize
        #[arg(long, default_value = "")]
        script: String,
    },
    /// Run autoplay in real time for a number of ticks
    Play {
        #[command(flatten)]
        carousel: CarouselArgs,
        #[arg(long, default_value_t = 3)]
        ticks: usize,
    },
    /// Decode a collaborator payload and print a summary
    Payload {
        #[arg(value_enum)]
        kind: PayloadKind,
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
struct CarouselArgs {
    /// Number of slides
    #[arg(long)]
    slides: usize,
    /// Config file with defaults and per-carousel options
    #[arg(long)]
    config: Option<PathBuf>,
    /// Carousel id to look up in the config
    #[arg(long)]
    carousel: Option<String>,
    /// Layout override
    #[arg(long)]
    layout: Option<LayoutMode>,
    /// Width of the carousel element in pixels
    #[arg(long, default_value_t = 1000.0)]
    container_width: f32,
    /// Width of one slide for fixed layouts
    #[arg(long, default_value_t = 1000.0)]
    item_width: f32,
    /// Per-slide widths for auto layouts, comma-separated
    #[arg(long, value_delimiter = ',')]
    widths: Vec<f32>,
    #[arg(long)]
    rtl: bool,
    /// Browser window width; 999px and below counts as narrow
    #[arg(long, default_value_t = 1280.0)]
    window_width: f32,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PayloadKind {
    Flights,
    Landmarks,
    Country,
    Timezone,
}

impl CarouselArgs {
    fn options(&self) -> Result<CarouselOptions> {
        let config = match &self.config {
            Some(path) => SlidekitConfig::load_from_file(path)?,
            None => SlidekitConfig::load_from_env()?.0,
        };
        let mut options = match &self.carousel {
            Some(key) => config.options_for(key),
            None => config.defaults,
        };
        if let Some(layout) = self.layout {
            options.layout = layout;
        }
        let label = self.carousel.as_deref().unwrap_or("defaults");
        check_options(label, &options)?;
        Ok(options)
    }

    fn geometry(&self) -> Geometry {
        Geometry {
            container_width: self.container_width,
            item_width: self.item_width,
            slide_widths: self.widths.clone(),
            window_width: self.window_width,
        }
    }

    fn build(
        &self,
        options: CarouselOptions,
    ) -> Result<(Carousel, ScriptHost)> {
        let page = PageContext {
            direction: if self.rtl {
                Direction::RightToLeft
            } else {
                Direction::LeftToRight
            },
            visitor: None,
            window_width: Some(self.window_width),
        };
        let mut host = ScriptHost::new(&self.geometry());
        let carousel = Carousel::new(
            options,
            &page,
            &CarouselMarkup::complete(self.slides),
            &mut host,
        )
        .context("failed to create carousel")?;
        Ok((carousel, host))
    }
}

fn print_frames(step: &str, host: &mut ScriptHost) -> Result<()> {
    for frame in host.frames.drain(..) {
        let line = json!({ "step": step, "frame": frame });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}

fn check(config: Option<PathBuf>) -> Result<()> {
    let (config, source) = match config {
        Some(path) => {
            let config = SlidekitConfig::load_from_file(&path)?;
            (config, OptionsSource::File(path))
        }
        None => SlidekitConfig::load_from_env()?,
    };

    let warnings = apply_guard_rails(&config)?;
    let origin = match &source {
        OptionsSource::Default => "built-in defaults".to_string(),
        OptionsSource::EnvInline => "SLIDEKIT_CONFIG_JSON".to_string(),
        OptionsSource::EnvPath(path) | OptionsSource::File(path) => {
            path.display().to_string()
        }
    };
    println!(
        "{origin}: {} carousel(s) configured",
        config.carousels.len()
    );
    for warning in &warnings.items {
        println!("warning: {warning}");
        if let Some(hint) = warning.hint {
            println!("  hint: {hint}");
        }
    }
    println!("ok");
    Ok(())
}

fn resolve_options(attrs: &[String]) -> Result<()> {
    let mut pairs = Vec::with_capacity(attrs.len());
    for attr in attrs {
        let pair = attr.split_once('=').unwrap_or((attr.as_str(), ""));
        pairs.push(pair);
    }
    let options = options_from_data_attributes(pairs);
    let warnings = check_options("attributes", &options)?;
    for warning in &warnings.items {
        eprintln!("warning: {warning}");
    }
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

fn simulate(args: &CarouselArgs, raw_script: &str) -> Result<()> {
    let steps = parse_script(raw_script)?;
    let options = args.options()?;
    let (mut carousel, mut host) = args.build(options)?;
    print_frames("init", &mut host)?;

    for step in steps {
        for event in step.events(&host) {
            carousel.handle(event, &mut host);
        }
        print_frames(&step.to_string(), &mut host)?;
    }

    let state = carousel.state();
    println!("{}", serde_json::to_string(&json!({ "state": state }))?);
    Ok(())
}

async fn play(args: &CarouselArgs, ticks: usize) -> Result<()> {
    if args.slides < 2 {
        bail!("autoplay needs at least two slides");
    }
    let mut options = args.options()?;
    options.autoplay = true;
    let (mut carousel, mut host) = args.build(options)?;
    print_frames("init", &mut host)?;

    let (mut driver, mut tick_rx) = IntervalDriver::new();
    driver.apply_all(host.take_commands());
    let mut refresh =
        time::interval(Duration::from_millis(refresh::INTERVAL_MS));

    let mut fired = 0;
    while fired < ticks {
        tokio::select! {
            tick = tick_rx.recv() => {
                let Some(id) = tick else {
                    break;
                };
                fired += 1;
                carousel.handle(CarouselEvent::TimerFired(id), &mut host);
                print_frames("tick", &mut host)?;
            }
            _ = refresh.tick() => {
                carousel.handle(CarouselEvent::RefreshTick, &mut host);
                host.frames.clear();
            }
        }
        driver.apply_all(host.take_commands());
    }
    Ok(())
}

fn payload(kind: PayloadKind, file: PathBuf) -> Result<()> {
    let raw = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let context = || format!("invalid {kind:?} payload in {}", file.display());

    match kind {
        PayloadKind::Flights => {
            let listing: FlightListing =
                serde_json::from_str(&raw).with_context(context)?;
            for flight in &listing.flights {
                println!(
                    "{} {} {} -> {} ({})",
                    flight.airline,
                    flight.flight_number,
                    flight.origin,
                    flight.destination,
                    flight.departure_time
                );
            }
        }
        PayloadKind::Landmarks => {
            let search: LandmarkSearch =
                serde_json::from_str(&raw).with_context(context)?;
            for title in search.titles() {
                println!("{title}");
            }
        }
        PayloadKind::Country => {
            let records: Vec<CountryRecord> =
                serde_json::from_str(&raw).with_context(context)?;
            let Some(zone) = records.first().and_then(CountryRecord::zone_id)
            else {
                bail!("country payload has no region/capital pair");
            };
            println!("{zone}");
        }
        PayloadKind::Timezone => {
            let info: TimeZoneInfo =
                serde_json::from_str(&raw).with_context(context)?;
            println!("{}", info.current_local_time);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { config } => check(config),
        Command::Options { attrs } => resolve_options(&attrs),
        Command::Simulate { carousel, script } => {
            simulate(&carousel, &script)
        }
        Command::Play { carousel, ticks } => play(&carousel, ticks).await,
        Command::Payload { kind, file } => payload(kind, file),
    }
}
