// src/main.rs
//! Toyline Simulator
//!
//! Orchestrator binary: parses the CLI, wires up logging, builds the factory
//! floor, spawns the crew, runs for the configured duration or until ctrl-c,
//! then prints a production summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use toyline::{spawn_crew, Factory, ItemKind, SimConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toyline")]
#[command(version, about = "Concurrent toy-factory line simulator", long_about = None)]
struct Cli {
    /// Number of car makers (no workbench needed)
    #[arg(long, default_value_t = 2)]
    car_makers: usize,

    /// Number of alternating doll/ball makers
    #[arg(long, default_value_t = 1)]
    alternating_makers: usize,

    /// Number of ball makers (workbench every craft)
    #[arg(long, default_value_t = 2)]
    ball_makers: usize,

    /// Number of sled inspectors
    #[arg(long, default_value_t = 3)]
    inspectors: usize,

    /// Number of loaders moving items into the sled
    #[arg(long, default_value_t = 2)]
    loaders: usize,

    /// Conveyor capacity in slots
    #[arg(long, default_value_t = 10)]
    capacity: usize,

    /// Number of workbench permits
    #[arg(long, default_value_t = 2)]
    benches: usize,

    /// Run duration in seconds
    #[arg(long, default_value_t = 20)]
    duration: u64,

    /// Pacing divisor; above 1.0 speeds the simulation up
    #[arg(long, default_value_t = 1.25)]
    speed: f64,

    /// RNG seed for reproducible pacing
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colour in log output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn into_config(self) -> SimConfig {
        SimConfig {
            car_makers: self.car_makers,
            alternating_makers: self.alternating_makers,
            ball_makers: self.ball_makers,
            inspectors: self.inspectors,
            loaders: self.loaders,
            conveyor_capacity: self.capacity,
            workbenches: self.benches,
            duration_secs: self.duration.max(1),
            speed: self.speed,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(!cli.no_color)
        .init();

    let config = cli.into_config();
    info!(
        version = toyline::VERSION,
        crew = config.crew_size(),
        capacity = config.conveyor_capacity,
        benches = config.workbenches,
        duration_secs = config.duration_secs,
        speed = config.speed,
        "starting toyline"
    );

    // Validates before any agent thread exists.
    let factory = Arc::new(Factory::new(&config).context("invalid configuration")?);

    // Ctrl-c ends the run early but still drains gracefully.
    {
        let factory = Arc::clone(&factory);
        ctrlc::set_handler(move || {
            info!("interrupt received, stopping the floor");
            factory.stop();
        })
        .expect("failed to install ctrl-c handler");
    }

    let crew = spawn_crew(Arc::clone(&factory), &config);

    // Poll in short slices so ctrl-c and the deadline both end the run
    // promptly.
    let deadline = Instant::now() + Duration::from_secs(config.duration_secs);
    while Instant::now() < deadline && factory.running() {
        thread::sleep(Duration::from_millis(200));
    }
    factory.stop();

    for handle in crew {
        if handle.join().is_err() {
            anyhow::bail!("an agent thread panicked");
        }
    }

    print_summary(&factory);
    Ok(())
}

fn print_summary(factory: &Factory) {
    let snapshot = factory.snapshot();

    println!();
    println!("=== Production summary ===");
    for kind in ItemKind::ALL {
        let produced = snapshot.produced.get(&kind).copied().unwrap_or(0);
        let delivered = snapshot.delivered.get(&kind).copied().unwrap_or(0);
        println!("{kind:>5}: produced {produced:>4}, delivered {delivered:>4}");
    }
    println!(
        "conveyor left: {}/{}  |  sled total: {}",
        snapshot.conveyor_used, snapshot.conveyor_capacity, snapshot.sled_items
    );
}
