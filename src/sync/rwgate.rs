// src/sync/rwgate.rs
//! Readers-writer policy gate
//!
//! Coordinates the sled's two access roles: any number of inspectors may
//! read concurrently, while a loader writing is exclusive against readers
//! and other writers. The policy is writer-preference: while a writer is
//! waiting, new readers are turned away, so a steady stream of inspections
//! cannot starve deliveries.
//!
//! All acquisitions are timed. A timeout is not an error; the caller's loop
//! rechecks the stop flag and retries, which keeps shutdown bounded without
//! a dedicated wake-up channel for this gate.

use parking_lot::{Condvar, Mutex};
use std::time::Duration;

#[derive(Debug, Default)]
struct RwState {
    readers: usize,
    writer_active: bool,
    writers_waiting: usize,
}

/// Point-in-time view of the gate, for telemetry and invariant checks.
#[derive(Debug, Clone, Copy)]
pub struct RwGateStats {
    pub readers: usize,
    pub writer_active: bool,
    pub writers_waiting: usize,
}

/// Many-reader / single-writer admission gate with writer preference.
pub struct RwGate {
    state: Mutex<RwState>,
    readers_admitted: Condvar,
    writer_admitted: Condvar,
}

impl RwGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RwState::default()),
            readers_admitted: Condvar::new(),
            writer_admitted: Condvar::new(),
        }
    }

    /// Take a read permit, waiting at most `timeout`.
    ///
    /// Admission fails while a writer is active or waiting.
    pub fn acquire_read_for(&self, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        self.readers_admitted.wait_while_for(
            &mut state,
            |state| state.writer_active || state.writers_waiting > 0,
            timeout,
        );
        if state.writer_active || state.writers_waiting > 0 {
            return false;
        }
        state.readers += 1;
        true
    }

    /// Return a read permit.
    pub fn release_read(&self) {
        let mut state = self.state.lock();
        debug_assert!(state.readers > 0, "read permit released twice");
        state.readers -= 1;
        if state.readers == 0 {
            self.writer_admitted.notify_one();
        }
    }

    /// Take the write permit, waiting at most `timeout`.
    ///
    /// Admission requires zero readers and no active writer.
    pub fn acquire_write_for(&self, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        state.writers_waiting += 1;
        self.writer_admitted.wait_while_for(
            &mut state,
            |state| state.writer_active || state.readers > 0,
            timeout,
        );
        state.writers_waiting -= 1;
        if state.writer_active || state.readers > 0 {
            // Timed out. If no other writer is queued, readers held back by
            // the preference rule are admissible again.
            if state.writers_waiting == 0 {
                self.readers_admitted.notify_all();
            }
            return false;
        }
        state.writer_active = true;
        true
    }

    /// Return the write permit.
    pub fn release_write(&self) {
        let mut state = self.state.lock();
        debug_assert!(state.writer_active, "write permit released while free");
        state.writer_active = false;
        // Queued writers go first; readers recheck the preference rule.
        self.writer_admitted.notify_one();
        self.readers_admitted.notify_all();
    }

    /// Current admission state, read under the gate lock.
    pub fn stats(&self) -> RwGateStats {
        let state = self.state.lock();
        RwGateStats {
            readers: state.readers,
            writer_active: state.writer_active,
            writers_waiting: state.writers_waiting,
        }
    }
}

impl Default for RwGate {
    fn default() -> Self {
        Self::new()
    }
}
