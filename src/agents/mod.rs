// src/agents/mod.rs
//! Worker agents
//!
//! Five roles, one OS thread each, all looping against the shared
//! [`Factory`] until the stop signal is observed at a safe point:
//!
//! - **Producers** (three recipes): craft an item, then insert it through
//!   the insert-side gate
//! - **Loader**: remove an item through the remove-side gate, land it in the
//!   sled under the write permit
//! - **Inspector**: tally the sled under a read permit
//!
//! Gate, bench, and sled acquisition timeouts are not errors; the agent
//! retries its loop iteration and thereby rechecks the stop flag. A conveyor
//! operation reporting cancellation breaks the loop.

pub mod inspector;
pub mod loader;
pub mod producer;

// Re-export commonly used types
pub use inspector::Inspector;
pub use loader::Loader;
pub use producer::{Producer, Recipe};

use crate::config::SimConfig;
use crate::factory::Factory;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long an agent waits on a gate before rechecking the stop flag.
pub(crate) const GATE_WAIT: Duration = Duration::from_millis(500);

/// How long a producer waits for a workbench permit.
pub(crate) const BENCH_WAIT: Duration = Duration::from_millis(500);

/// How long a loader or inspector waits for sled admission.
pub(crate) const SLED_WAIT: Duration = Duration::from_millis(500);

/// Crafting time range in seconds, before the speed divisor.
pub(crate) const CRAFT_PACE: (f64, f64) = (0.25, 0.6);

/// Loader settle time range in seconds.
pub(crate) const SETTLE_PACE: (f64, f64) = (0.05, 0.2);

/// Inspector pause range in seconds.
pub(crate) const INSPECT_PACE: (f64, f64) = (0.3, 0.8);

/// Sleep for a uniform draw from `range`, divided by the speed factor.
/// Models work, not synchronization.
pub(crate) fn pace(rng: &mut StdRng, range: (f64, f64), speed: f64) {
    let secs = rng.gen_range(range.0..=range.1) / speed;
    thread::sleep(Duration::from_secs_f64(secs));
}

/// Derive a per-agent RNG: deterministic from the base seed when one is
/// configured, otherwise from entropy.
fn rng_for(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(base) => StdRng::seed_from_u64(base.wrapping_add(index)),
        None => StdRng::from_entropy(),
    }
}

/// Spawn the whole crew described by `config` against one shared floor.
///
/// Returns the join handles in spawn order; joining them after
/// [`Factory::stop`] completes within a bounded grace period because every
/// blocking wait in the crew is timed or interrupted.
pub fn spawn_crew(factory: Arc<Factory>, config: &SimConfig) -> Vec<JoinHandle<()>> {
    let mut handles = Vec::with_capacity(config.crew_size());
    let mut index = 0u64;

    let mut spawn = |name: String, body: Box<dyn FnOnce() + Send>| {
        let handle = thread::Builder::new()
            .name(name)
            .spawn(body)
            .expect("failed to spawn agent thread");
        handles.push(handle);
    };

    for n in 1..=config.car_makers {
        let agent = Producer::new(
            format!("car-maker-{n}"),
            Recipe::Cars,
            Arc::clone(&factory),
            rng_for(config.seed, index),
        );
        index += 1;
        spawn(agent.name().to_string(), Box::new(move || agent.run()));
    }
    for n in 1..=config.alternating_makers {
        let agent = Producer::new(
            format!("mix-maker-{n}"),
            Recipe::Alternating,
            Arc::clone(&factory),
            rng_for(config.seed, index),
        );
        index += 1;
        spawn(agent.name().to_string(), Box::new(move || agent.run()));
    }
    for n in 1..=config.ball_makers {
        let agent = Producer::new(
            format!("ball-maker-{n}"),
            Recipe::Balls,
            Arc::clone(&factory),
            rng_for(config.seed, index),
        );
        index += 1;
        spawn(agent.name().to_string(), Box::new(move || agent.run()));
    }
    for n in 1..=config.loaders {
        let agent = Loader::new(
            format!("loader-{n}"),
            Arc::clone(&factory),
            rng_for(config.seed, index),
        );
        index += 1;
        spawn(agent.name().to_string(), Box::new(move || agent.run()));
    }
    for n in 1..=config.inspectors {
        let agent = Inspector::new(
            format!("inspector-{n}"),
            Arc::clone(&factory),
            rng_for(config.seed, index),
        );
        index += 1;
        spawn(agent.name().to_string(), Box::new(move || agent.run()));
    }

    handles
}
