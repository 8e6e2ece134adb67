// src/factory/sled.rs
//! The sled: shared append-only aggregate
//!
//! Delivered items accumulate here for the duration of the run; nothing is
//! ever removed. Access follows a readers-writer discipline enforced by an
//! [`RwGate`]: loaders append under the exclusive write permit, inspectors
//! tally under shared read permits.
//!
//! The storage itself sits in a plain mutex taken only inside `append` and
//! `tally`. The gate, not that mutex, is what enforces the reader/writer
//! policy the simulation demonstrates; the mutex merely keeps the `Vec`
//! sound to touch from multiple threads.
//!
//! Growth is unbounded, which is fine for a duration-bounded run.

use crate::factory::item::{Item, ItemKind};
use crate::sync::rwgate::{RwGate, RwGateStats};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::time::Duration;

/// Append-only aggregate behind a readers-writer gate.
#[derive(Default)]
pub struct Sled {
    access: RwGate,
    items: Mutex<Vec<Item>>,
}

impl Sled {
    pub fn new() -> Self {
        Self::default()
    }

    /// Try for a shared read permit. See [`RwGate::acquire_read_for`].
    pub fn acquire_read_for(&self, timeout: Duration) -> bool {
        self.access.acquire_read_for(timeout)
    }

    pub fn release_read(&self) {
        self.access.release_read();
    }

    /// Try for the exclusive write permit. See [`RwGate::acquire_write_for`].
    pub fn acquire_write_for(&self, timeout: Duration) -> bool {
        self.access.acquire_write_for(timeout)
    }

    pub fn release_write(&self) {
        self.access.release_write();
    }

    /// Append an item. Caller must hold the write permit.
    pub fn append(&self, item: Item) {
        debug_assert!(
            self.access.stats().writer_active,
            "append without the write permit"
        );
        self.items.lock().push(item);
    }

    /// Per-kind counts of everything delivered so far. Caller must hold a
    /// read permit; the result is consistent with the state at acquisition.
    pub fn tally(&self) -> BTreeMap<ItemKind, u64> {
        debug_assert!(
            self.access.stats().readers > 0,
            "tally without a read permit"
        );
        let items = self.items.lock();
        let mut counts = BTreeMap::new();
        for item in items.iter() {
            *counts.entry(item.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Number of items in the sled. Telemetry only; reads the storage lock
    /// directly rather than competing for an admission permit.
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Current admission state of the access gate.
    pub fn access_stats(&self) -> RwGateStats {
        self.access.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    const WAIT: Duration = Duration::from_millis(200);

    fn car(id: &str) -> Item {
        Item::new(ItemKind::Car, id.to_string())
    }

    #[test]
    fn test_append_and_tally() {
        let sled = Sled::new();

        assert!(sled.acquire_write_for(WAIT));
        sled.append(car("car-1"));
        sled.append(Item::new(ItemKind::Ball, "ball-2".to_string()));
        sled.release_write();

        assert!(sled.acquire_read_for(WAIT));
        let counts = sled.tally();
        sled.release_read();

        assert_eq!(counts.get(&ItemKind::Car), Some(&1));
        assert_eq!(counts.get(&ItemKind::Ball), Some(&1));
        assert_eq!(sled.len(), 2);
    }

    #[test]
    fn test_writer_blocks_reader_admission() {
        let sled = Sled::new();
        assert!(sled.acquire_write_for(WAIT));
        assert!(!sled.acquire_read_for(Duration::from_millis(20)));
        sled.release_write();
        assert!(sled.acquire_read_for(WAIT));
        sled.release_read();
    }

    #[test]
    fn test_concurrent_inspections() {
        let sled = Arc::new(Sled::new());
        assert!(sled.acquire_write_for(WAIT));
        sled.append(car("car-1"));
        sled.release_write();

        let mut inspectors = Vec::new();
        for _ in 0..2 {
            let sled = Arc::clone(&sled);
            inspectors.push(thread::spawn(move || {
                assert!(sled.acquire_read_for(Duration::from_secs(1)));
                let total: u64 = sled.tally().values().sum();
                thread::sleep(Duration::from_millis(50));
                sled.release_read();
                total
            }));
        }

        for inspector in inspectors {
            assert_eq!(inspector.join().unwrap(), 1);
        }
    }
}
