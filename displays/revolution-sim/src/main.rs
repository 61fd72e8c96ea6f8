//! Revolution watchface simulator
//!
//! Runs the watchface in a desktop window, standing in for the watch
//! firmware: it owns the clock and the screen and calls the watchface on
//! start, on every minute change and on exit.
//!
//! ```text
//! revolution-sim --config revolution.toml
//! revolution-sim --start 2026-12-31T23:58:00 --speed 60
//! ```

mod clock;
mod config;
mod runtime;
mod window;

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;
use revolution_core::ClockStyle;

use crate::clock::{Clock, SimulatedClock, SystemClock};
use crate::config::SimConfig;
use crate::runtime::{Runtime, POLL_INTERVAL};
use crate::window::SimulatorWindow;

#[derive(Parser)]
#[command(version, about = "Revolution watchface simulator")]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Window scale, overrides the config file
    #[arg(long)]
    scale: Option<u32>,

    /// Start the clock at this local time instead of now (e.g. 2026-12-31T23:58:00)
    #[arg(long)]
    start: Option<NaiveDateTime>,

    /// Run the clock this many times faster than real time
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Use a 12 hour clock, overrides the config file
    #[arg(long)]
    twelve_hour: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();
    let mut config = SimConfig::load(args.config.as_deref())?;

    if let Some(scale) = args.scale {
        anyhow::ensure!(scale > 0, "--scale must be at least 1");
        config.simulator.scale = scale;
    }
    if args.twelve_hour {
        config.face.clock_style = ClockStyle::TwelveHour;
    }
    log::debug!("Face settings: {:?}", config.face);

    let clock: Box<dyn Clock> = match (args.start, args.speed) {
        (None, 1) => Box::new(SystemClock),
        (start, speed) => {
            let start = start.unwrap_or_else(|| SystemClock.now());
            log::info!("Simulated clock from {} at {}x", start, speed);
            Box::new(SimulatedClock::new(start, speed))
        }
    };

    let mut window = SimulatorWindow::new(&config.simulator);
    let mut runtime = Runtime::new(clock, config.face);
    runtime.run(&mut window, POLL_INTERVAL)
}
