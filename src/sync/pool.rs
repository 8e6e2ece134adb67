// src/sync/pool.rs
//! Counting permit pool (the workbenches)
//!
//! A strict counting semaphore bounding how many agents may occupy a scarce
//! shared station at once. Acquisition is timed, like the [`Gate`], so
//! callers keep observing the stop flag; no fairness is promised beyond the
//! platform wait queue, and starvation is bounded by the timeout after which
//! the caller simply retries.
//!
//! [`Gate`]: crate::sync::gate::Gate

use parking_lot::{Condvar, Mutex};
use std::time::Duration;

/// Capacity-N admission permit for a shared station.
pub struct PermitPool {
    available: Mutex<usize>,
    returned: Condvar,
    bound: usize,
}

impl PermitPool {
    /// Create a pool with `bound` permits. Bound is validated upstream.
    pub fn new(bound: usize) -> Self {
        debug_assert!(bound > 0, "permit bound must be positive");
        Self {
            available: Mutex::new(bound),
            returned: Condvar::new(),
            bound,
        }
    }

    /// Take one permit, waiting at most `timeout`. Returns `false` on
    /// timeout.
    pub fn acquire_for(&self, timeout: Duration) -> bool {
        let mut available = self.available.lock();
        self.returned
            .wait_while_for(&mut available, |available| *available == 0, timeout);
        if *available == 0 {
            return false;
        }
        *available -= 1;
        true
    }

    /// Return a permit. Must pair with a successful acquire.
    pub fn release(&self) {
        let mut available = self.available.lock();
        debug_assert!(*available < self.bound, "permit released twice");
        *available += 1;
        self.returned.notify_one();
    }

    /// Permits currently held.
    pub fn occupancy(&self) -> usize {
        self.bound - *self.available.lock()
    }

    /// Total number of permits.
    pub fn bound(&self) -> usize {
        self.bound
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
    fn test_counts_down_and_up() {
        let pool = PermitPool::new(2);
        assert_eq!(pool.occupancy(), 0);

        assert!(pool.acquire_for(WAIT));
        assert!(pool.acquire_for(WAIT));
        assert_eq!(pool.occupancy(), 2);

        // Exhausted: the third acquire must time out.
        assert!(!pool.acquire_for(Duration::from_millis(20)));

        pool.release();
        assert_eq!(pool.occupancy(), 1);
        assert!(pool.acquire_for(WAIT));

        pool.release();
        pool.release();
        assert_eq!(pool.occupancy(), 0);
    }

    #[test]
    fn test_release_wakes_a_waiter() {
        let pool = Arc::new(PermitPool::new(1));
        assert!(pool.acquire_for(WAIT));

        let waiter = {
            let pool = Arc::clone(&pool);
            thread::spawn(move || pool.acquire_for(Duration::from_secs(2)))
        };

        thread::sleep(Duration::from_millis(50));
        pool.release();
        assert!(waiter.join().unwrap());
        pool.release();
    }

    #[test]
    fn test_occupancy_never_exceeds_bound() {
        let pool = Arc::new(PermitPool::new(2));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let mut workers = Vec::new();
        for _ in 0..5 {
            let pool = Arc::clone(&pool);
            let max_seen = Arc::clone(&max_seen);
            workers.push(thread::spawn(move || {
                let mut done = 0;
                while done < 20 {
                    if !pool.acquire_for(Duration::from_millis(10)) {
                        continue;
                    }
                    max_seen.fetch_max(pool.occupancy(), Ordering::SeqCst);
                    thread::yield_now();
                    pool.release();
                    done += 1;
                }
            }));
        }

        for worker in workers {
            worker.join().unwrap();
        }
        let max = max_seen.load(Ordering::SeqCst);
        assert!(max <= 2, "occupancy reached {max}");
    }
}
