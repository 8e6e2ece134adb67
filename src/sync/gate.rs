// src/sync/gate.rs
//! Single-holder group gate
//!
//! A mutual-exclusion permit shared by a whole group of agents: whichever
//! member holds it, nobody else in the group passes. Acquisition is timed
//! rather than indefinite so a blocked agent periodically returns to its
//! loop head and rechecks the stop flag instead of deadlocking on a gate
//! that will never be released during drain.
//!
//! The factory owns two independent instances: one serializing the
//! insert-side makers, one serializing the remove-side loaders. Both may be
//! held at the same time by different groups.

use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// Mutual-exclusion permit with bounded-wait acquisition.
pub struct Gate {
    held: Mutex<bool>,
    freed: Condvar,
}

impl Gate {
    pub fn new() -> Self {
        Self {
            held: Mutex::new(false),
            freed: Condvar::new(),
        }
    }

    /// Try to take the gate, waiting at most `timeout`.
    ///
    /// Returns `false` on timeout; the caller retries its loop iteration.
    pub fn acquire_for(&self, timeout: Duration) -> bool {
        let mut held = self.held.lock();
        self.freed.wait_while_for(&mut held, |held| *held, timeout);
        if *held {
            return false;
        }
        *held = true;
        true
    }

    /// Release the gate. Must only be called by the current holder.
    pub fn release(&self) {
        let mut held = self.held.lock();
        debug_assert!(*held, "gate released while free");
        *held = false;
        self.freed.notify_one();
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    const WAIT: Duration = Duration::from_millis(200);

    #[test]
    fn test_acquire_release() {
        let gate = Gate::new();
        assert!(gate.acquire_for(WAIT));
        gate.release();
        assert!(gate.acquire_for(WAIT));
        gate.release();
    }

    #[test]
    fn test_acquire_times_out_while_held() {
        let gate = Gate::new();
        assert!(gate.acquire_for(WAIT));
        assert!(!gate.acquire_for(Duration::from_millis(20)));
        gate.release();
        assert!(gate.acquire_for(WAIT));
        gate.release();
    }

    #[test]
    fn test_release_wakes_a_waiter() {
        let gate = Arc::new(Gate::new());
        assert!(gate.acquire_for(WAIT));

        let waiter = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || gate.acquire_for(Duration::from_secs(2)))
        };

        thread::sleep(Duration::from_millis(50));
        gate.release();
        assert!(waiter.join().unwrap());
        gate.release();
    }

    #[test]
    fn test_mutual_exclusion_under_contention() {
        let gate = Arc::new(Gate::new());
        let inside = Arc::new(AtomicUsize::new(0));
        let max_inside = Arc::new(AtomicUsize::new(0));

        let mut members = Vec::new();
        for _ in 0..4 {
            let gate = Arc::clone(&gate);
            let inside = Arc::clone(&inside);
            let max_inside = Arc::clone(&max_inside);
            members.push(thread::spawn(move || {
                let mut passes = 0;
                while passes < 50 {
                    if !gate.acquire_for(Duration::from_millis(10)) {
                        continue;
                    }
                    let now = inside.fetch_add(1, Ordering::SeqCst) + 1;
                    max_inside.fetch_max(now, Ordering::SeqCst);
                    thread::yield_now();
                    inside.fetch_sub(1, Ordering::SeqCst);
                    gate.release();
                    passes += 1;
                }
            }));
        }

        for member in members {
            member.join().unwrap();
        }
        assert_eq!(max_inside.load(Ordering::SeqCst), 1);
    }
}
