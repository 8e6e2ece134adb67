// src/factory/counters.rs
//! Production and delivery tallies
//!
//! Two per-kind counters sharing one lock: `produced` is bumped when a maker
//! places an item on the conveyor, `delivered` when a loader lands it in the
//! sled. Both are monotonically non-decreasing.

use crate::factory::item::ItemKind;
use parking_lot::Mutex;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct CounterState {
    produced: BTreeMap<ItemKind, u64>,
    delivered: BTreeMap<ItemKind, u64>,
}

/// Shared produced/delivered tallies.
#[derive(Debug, Default)]
pub struct Counters {
    state: Mutex<CounterState>,
}

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item placed on the conveyor.
    pub fn record_produced(&self, kind: ItemKind) {
        *self.state.lock().produced.entry(kind).or_insert(0) += 1;
    }

    /// Record one item landed in the sled.
    pub fn record_delivered(&self, kind: ItemKind) {
        *self.state.lock().delivered.entry(kind).or_insert(0) += 1;
    }

    /// Per-kind produced counts.
    pub fn produced(&self) -> BTreeMap<ItemKind, u64> {
        self.state.lock().produced.clone()
    }

    /// Per-kind delivered counts.
    pub fn delivered(&self) -> BTreeMap<ItemKind, u64> {
        self.state.lock().delivered.clone()
    }

    /// Total items delivered across all kinds.
    pub fn total_delivered(&self) -> u64 {
        self.state.lock().delivered.values().sum()
    }
}
