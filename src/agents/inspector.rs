// src/agents/inspector.rs
//! Sled inspector
//!
//! Reads the sled under a shared read permit and logs the running tally.
//! Any number of inspectors may be in the sled together; they only yield to
//! an active or waiting writer.

use crate::agents::{pace, INSPECT_PACE, SLED_WAIT};
use crate::factory::Factory;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

/// Read-side agent tallying the sled.
pub struct Inspector {
    name: String,
    factory: Arc<Factory>,
    rng: StdRng,
}

impl Inspector {
    pub fn new(name: String, factory: Arc<Factory>, rng: StdRng) -> Self {
        Self { name, factory, rng }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn run(mut self) {
        while self.factory.running() {
            if !self.factory.sled().acquire_read_for(SLED_WAIT) {
                // A writer is in or queued; retry and recheck stop.
                continue;
            }
            let counts = self.factory.sled().tally();
            self.factory.sled().release_read();

            let total: u64 = counts.values().sum();
            let breakdown = counts
                .iter()
                .map(|(kind, count)| format!("{kind}:{count}"))
                .collect::<Vec<_>>()
                .join(", ");
            info!(agent = %self.name, total, breakdown = %breakdown, "sled inspected");

            pace(&mut self.rng, INSPECT_PACE, self.factory.speed());
        }
        debug!(agent = %self.name, "inspector stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::factory::{Item, ItemKind};
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_inspector_exits_on_stop() {
        let config = SimConfig {
            speed: 100.0,
            ..Default::default()
        };
        let factory = Arc::new(Factory::new(&config).unwrap());
        let agent = Inspector::new(
            "inspector-1".to_string(),
            Arc::clone(&factory),
            StdRng::seed_from_u64(11),
        );
        let handle = thread::spawn(move || agent.run());

        thread::sleep(Duration::from_millis(100));
        factory.stop();
        handle.join().unwrap();

        let stats = factory.sled().access_stats();
        assert_eq!(stats.readers, 0);
        assert!(!stats.writer_active);
    }

    #[test]
    fn test_inspectors_share_the_sled() {
        let factory = Arc::new(Factory::new(&SimConfig::default()).unwrap());
        assert!(factory.sled().acquire_write_for(Duration::from_millis(100)));
        factory
            .sled()
            .append(Item::new(ItemKind::Car, "car-1".to_string()));
        factory.sled().release_write();

        let peak = Arc::new(AtomicUsize::new(0));
        let mut crew = Vec::new();
        for n in 0..3 {
            let factory = Arc::clone(&factory);
            let peak = Arc::clone(&peak);
            crew.push(thread::spawn(move || {
                let mut reads = 0;
                while reads < 30 {
                    if !factory.sled().acquire_read_for(Duration::from_millis(10)) {
                        continue;
                    }
                    peak.fetch_max(factory.sled().access_stats().readers, Ordering::SeqCst);
                    let _ = factory.sled().tally();
                    if n == 0 {
                        thread::yield_now();
                    }
                    factory.sled().release_read();
                    reads += 1;
                }
            }));
        }
        for worker in crew {
            worker.join().unwrap();
        }

        assert!(peak.load(Ordering::SeqCst) > 1, "read sections never overlapped");
    }
}
