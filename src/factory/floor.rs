// src/factory/floor.rs
//! The factory floor: shared pipeline context
//!
//! One explicitly owned bundle of every piece of mutable shared state: the
//! conveyor, the two group gates, the workbench pool, the sled, the tallies,
//! the stop signal, and the id mint. Agents receive it behind an `Arc` at
//! spawn time; there are no ambient globals.

use crate::config::SimConfig;
use crate::error::Result;
use crate::factory::counters::Counters;
use crate::factory::item::{Item, ItemKind};
use crate::factory::sled::Sled;
use crate::sync::buffer::BoundedBuffer;
use crate::sync::gate::Gate;
use crate::sync::pool::PermitPool;
use crate::sync::stop::StopSignal;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Point-in-time telemetry across the whole floor, safe to take while the
/// crew is running.
#[derive(Debug, Clone)]
pub struct FactorySnapshot {
    pub conveyor_used: usize,
    pub conveyor_capacity: usize,
    pub benches_in_use: usize,
    pub benches_total: usize,
    pub produced: BTreeMap<ItemKind, u64>,
    pub delivered: BTreeMap<ItemKind, u64>,
    pub sled_items: usize,
}

/// Shared context for one simulation run.
pub struct Factory {
    conveyor: BoundedBuffer<Item>,
    insert_gate: Gate,
    remove_gate: Gate,
    workbenches: PermitPool,
    sled: Sled,
    counters: Counters,
    stop: StopSignal,
    item_seq: AtomicU64,
    speed: f64,
}

impl Factory {
    /// Build the floor from a validated configuration.
    ///
    /// Fails before any agent exists if the configuration is unusable.
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            conveyor: BoundedBuffer::new(config.conveyor_capacity),
            insert_gate: Gate::new(),
            remove_gate: Gate::new(),
            workbenches: PermitPool::new(config.workbenches),
            sled: Sled::new(),
            counters: Counters::new(),
            stop: StopSignal::new(),
            item_seq: AtomicU64::new(0),
            speed: config.speed.max(0.1),
        })
    }

    /// The conveyor between makers and loaders.
    pub fn conveyor(&self) -> &BoundedBuffer<Item> {
        &self.conveyor
    }

    /// Gate serializing all insert-side makers.
    pub fn insert_gate(&self) -> &Gate {
        &self.insert_gate
    }

    /// Gate serializing all remove-side loaders.
    pub fn remove_gate(&self) -> &Gate {
        &self.remove_gate
    }

    /// Workbench permits for ball crafting.
    pub fn workbenches(&self) -> &PermitPool {
        &self.workbenches
    }

    pub fn sled(&self) -> &Sled {
        &self.sled
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn stop_signal(&self) -> &StopSignal {
        &self.stop
    }

    /// Pacing divisor, clamped to at least 0.1 at construction.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Whether the crew should keep looping.
    pub fn running(&self) -> bool {
        !self.stop.is_set()
    }

    /// Raise the stop signal and wake every blocked waiter. Idempotent.
    ///
    /// Gate, pool, and sled waiters wake on their own acquire timeouts; the
    /// conveyor's waits are untimed, so it gets an explicit broadcast.
    pub fn stop(&self) {
        if self.running() {
            info!("factory floor stopping");
        }
        self.stop.trigger();
        self.conveyor.interrupt();
    }

    /// Mint a globally unique item id with the given role tag.
    pub fn next_id(&self, tag: &str) -> String {
        let seq = self.item_seq.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{tag}-{seq}")
    }

    /// Telemetry across the floor, each piece read under its own lock.
    pub fn snapshot(&self) -> FactorySnapshot {
        let (conveyor_used, conveyor_capacity) = self.conveyor.snapshot();
        FactorySnapshot {
            conveyor_used,
            conveyor_capacity,
            benches_in_use: self.workbenches.occupancy(),
            benches_total: self.workbenches.bound(),
            produced: self.counters.produced(),
            delivered: self.counters.delivered(),
            sled_items: self.sled.len(),
        }
    }

    /// Conveyor fill bar for state logging, e.g. `[###.......] 3/10`.
    pub fn conveyor_bar(&self) -> String {
        let (used, capacity) = self.conveyor.snapshot();
        format!(
            "[{}{}] {}/{}",
            "#".repeat(used),
            ".".repeat(capacity - used),
            used,
            capacity
        )
    }
}
