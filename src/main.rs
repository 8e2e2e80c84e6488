use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use log::info;

use solar_ascii::{angles, grid, Caption, Config, ObserverState};

/// Print the sun's position as an ASCII sky.
#[derive(Debug, Parser)]
#[command(name = "solar-ascii", version, about)]
struct Args {
    /// Observer latitude in degrees, north positive.
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Day of the year, 1-366.
    #[arg(long, conflicts_with_all = ["date", "now"])]
    day: Option<i64>,

    /// Clock hour, fractional (e.g. 13.5).
    #[arg(long, conflicts_with = "now")]
    hour: Option<f64>,

    /// Calendar date (YYYY-MM-DD) used for the day of year.
    #[arg(long, conflicts_with = "now")]
    date: Option<NaiveDate>,

    /// Take day and hour from the local clock.
    #[arg(long)]
    now: bool,

    /// JSON config file for canvas layout and default observer.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames to print.
    #[arg(long, default_value_t = 1)]
    frames: usize,

    /// Hours between successive frames.
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    step: f64,

    /// Print the solar position as JSON instead of drawing.
    #[arg(long)]
    json: bool,
}

fn resolve_observer(args: &Args, config: &Config) -> Result<ObserverState> {
    let defaults = config.observer;
    let latitude = args.latitude.unwrap_or(defaults.latitude);

    if args.now {
        return angles::observer_at(latitude, &Local::now()).context("invalid observer");
    }

    let day = match args.date {
        Some(date) => date.ordinal() as i64,
        None => args.day.unwrap_or(defaults.day_of_year),
    };
    let hour = args.hour.unwrap_or(defaults.hour);
    ObserverState::new(latitude, day, hour).context("invalid observer")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    let start = resolve_observer(&args, &config)?;
    info!(
        "observer latitude={} day={} hour={:.2}",
        start.latitude, start.day_of_year, start.hour
    );

    let frames = grid::render_sequence(&start, args.step, args.frames, &config.canvas);
    for frame in &frames {
        if args.json {
            let json = serde_json::to_string(&frame.position).context("serializing position")?;
            println!("{json}");
        } else {
            println!("{}", Caption::new(&frame.observer, &frame.position));
            println!("{}", frame.matrix);
            println!();
        }
    }
    Ok(())
}
