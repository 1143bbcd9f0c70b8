//! No Time New Year 2025 headless runner.
//!
//! Runs the toy's simulation without a window:
//! - **bevy_ecs** for the entity-component-system architecture
//! - **configparser** for the INI tuning file
//! - **serde_json** for machine-readable event output
//!
//! # Main Loop
//!
//! 1. Load [`ToyConfig`](resources::toyconfig::ToyConfig) and apply CLI overrides
//! 2. Build the world, register observers and spawn the toys
//! 3. Step a fixed-delta loop, injecting scripted clicks and markers
//! 4. Print the recorded events
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seconds 120 --click-bird-at 5 --json
//! ```

mod components;
mod error;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::error::ToyError;
use crate::events::bird::BirdClickedEvent;
use crate::events::timeline::AddMarkerEvent;
use crate::resources::eventlog::{EventLog, LogEntry};
use crate::resources::toyconfig::ToyConfig;
use crate::resources::worldtime::WorldTime;

/// No Time New Year 2025
#[derive(Parser)]
#[command(
    version,
    about = "Headless simulation of the No Time New Year 2025 toys: hourglasses, a bird, fireworks and a timeline."
)]
struct Cli {
    /// INI file with tuning values.
    #[arg(long, value_name = "PATH", default_value = "./notime.ini")]
    config: PathBuf,

    /// Simulated seconds to run.
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Simulation steps per second. Overrides the config file.
    #[arg(long)]
    fps: Option<u32>,

    /// Random seed. Overrides the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Print events as JSON lines.
    #[arg(long)]
    json: bool,

    /// Write the default configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,

    /// Click the bird at these times (seconds). Repeatable.
    #[arg(long, value_name = "SECONDS")]
    click_bird_at: Vec<f32>,

    /// Add a timeline marker at these times (seconds). Repeatable.
    #[arg(long, value_name = "SECONDS")]
    add_marker_at: Vec<f32>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write defaults and quit
    if let Some(path) = cli.write_config {
        return match ToyConfig::with_path(&path).save_to_file() {
            Ok(()) => {
                println!("Default configuration written to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ToyError> {
    let mut config = ToyConfig::with_path(&cli.config);
    if cli.config.exists() {
        config.load_from_file()?;
    } else {
        log::info!("No config at {:?}, using defaults", cli.config);
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if config.fps == 0 {
        return Err(ToyError::InvalidConfig("fps must be at least 1".into()));
    }
    if !(cli.seconds.is_finite() && cli.seconds >= 0.0) {
        return Err(ToyError::InvalidDuration(cli.seconds));
    }

    let dt = 1.0 / config.fps as f32;
    let frames = (cli.seconds * config.fps as f32).ceil() as u64;
    log::info!(
        "Running {} frames at {} fps (seed {})",
        frames,
        config.fps,
        config.seed
    );

    let mut clicks = sorted(cli.click_bird_at);
    let mut markers = sorted(cli.add_marker_at);

    let mut world = game::build_world(config)?;
    let mut update = game::update_schedule();

    for _ in 0..frames {
        game::tick(&mut world, &mut update, dt);
        let now = world.resource::<WorldTime>().elapsed;
        while clicks.last().is_some_and(|&t| t <= now) {
            clicks.pop();
            world.trigger(BirdClickedEvent);
        }
        while markers.last().is_some_and(|&t| t <= now) {
            markers.pop();
            world.trigger(AddMarkerEvent::default());
        }
        print_entries(world.resource_mut::<EventLog>().drain(), cli.json);
    }

    game::teardown(&mut world);
    Ok(())
}

/// Times in descending order, so the next one due is at the end.
fn sorted(times: Vec<f32>) -> Vec<f64> {
    let mut times: Vec<f64> = times
        .into_iter()
        .filter(|t| t.is_finite())
        .map(f64::from)
        .collect();
    times.sort_by(|a, b| b.total_cmp(a));
    times
}

fn print_entries(entries: Vec<LogEntry>, json: bool) {
    for entry in entries {
        if json {
            match serde_json::to_string(&entry) {
                Ok(line) => println!("{line}"),
                Err(e) => log::warn!("Could not serialize event: {e}"),
            }
        } else {
            println!("{:>9.3}s  {:?}", entry.time, entry.event);
        }
    }
}
