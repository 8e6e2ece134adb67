// src/agents/loader.rs
//! Remove-side loader
//!
//! Takes items off the conveyor through the remove-side gate and lands them
//! in the sled under the exclusive write permit. The gate is released before
//! the sled is touched, so conveyor removal and sled writing never hold each
//! other up.

use crate::agents::{pace, GATE_WAIT, SETTLE_PACE, SLED_WAIT};
use crate::factory::{Factory, Item};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

/// Remove-side agent moving items from the conveyor into the sled.
pub struct Loader {
    name: String,
    factory: Arc<Factory>,
    rng: StdRng,
}

impl Loader {
    pub fn new(name: String, factory: Arc<Factory>, rng: StdRng) -> Self {
        Self { name, factory, rng }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loop until the conveyor reports cancellation or the stop signal is
    /// observed at the loop head.
    pub fn run(mut self) {
        while self.factory.running() {
            if !self.factory.remove_gate().acquire_for(GATE_WAIT) {
                continue;
            }
            let taken = self.factory.conveyor().take(self.factory.stop_signal());
            self.factory.remove_gate().release();

            let item = match taken {
                Some(item) => item,
                // Stopped with an empty conveyor: nothing left to move.
                None => break,
            };
            info!(agent = %self.name, item = %item, "removed from conveyor");

            self.deliver(item);
            pace(&mut self.rng, SETTLE_PACE, self.factory.speed());
        }
        debug!(agent = %self.name, "loader stopped");
    }

    /// Land an item in the sled. An item already off the conveyor is
    /// in-flight work and is delivered even during shutdown; the retry on
    /// the write permit is finite because readers and writers drain.
    fn deliver(&mut self, item: Item) {
        while !self.factory.sled().acquire_write_for(SLED_WAIT) {}
        let kind = item.kind;
        let id = item.id.clone();
        self.factory.sled().append(item);
        self.factory.sled().release_write();

        self.factory.counters().record_delivered(kind);
        info!(agent = %self.name, item = %id, "landed in sled");
        debug!(
            conveyor = %self.factory.conveyor_bar(),
            sled = self.factory.counters().total_delivered(),
            "floor state"
        );
    }
}
