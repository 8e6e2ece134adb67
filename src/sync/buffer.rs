// src/sync/buffer.rs
//! Bounded blocking FIFO buffer (the conveyor belt)
//!
//! A fixed-capacity queue protected by one mutex and one condition variable.
//! `put` blocks while the buffer is full, `take` blocks while it is empty,
//! and both give up cleanly once the [`StopSignal`] is raised. Every state
//! change broadcasts with `notify_all`: producers waiting on space, loaders
//! waiting on items, and shutdown waiters are heterogeneous classes sharing
//! one condvar, and a targeted wake could strand the wrong class.
//!
//! After the stop signal is raised, `put` refuses new values even when space
//! exists, while `take` keeps draining whatever is already queued. That
//! ordering lets in-flight work reach the sled while cutting off new work at
//! the source.

use crate::sync::stop::StopSignal;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Fixed-capacity FIFO with blocking, cancellable endpoints.
pub struct BoundedBuffer<T> {
    queue: Mutex<VecDeque<T>>,
    changed: Condvar,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Create a buffer holding at most `capacity` values.
    ///
    /// Capacity is validated upstream by the factory config; a zero here is
    /// a programming error.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "buffer capacity must be positive");
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            changed: Condvar::new(),
            capacity,
        }
    }

    /// Append a value, blocking while the buffer is full.
    ///
    /// Returns `true` once the value is queued. Returns `false` without
    /// queuing if `stop` is raised first, even if space is available by then.
    pub fn put(&self, value: T, stop: &StopSignal) -> bool {
        let mut queue = self.queue.lock();
        while queue.len() >= self.capacity && !stop.is_set() {
            self.changed.wait(&mut queue);
        }
        if stop.is_set() {
            return false;
        }
        queue.push_back(value);
        self.changed.notify_all();
        true
    }

    /// Remove the oldest value, blocking while the buffer is empty.
    ///
    /// Keeps draining after `stop` is raised; returns `None` only when the
    /// signal is set and nothing remains.
    pub fn take(&self, stop: &StopSignal) -> Option<T> {
        let mut queue = self.queue.lock();
        while queue.is_empty() && !stop.is_set() {
            self.changed.wait(&mut queue);
        }
        let value = queue.pop_front();
        if value.is_some() {
            self.changed.notify_all();
        }
        value
    }

    /// Current fill level and capacity, read under the buffer lock.
    pub fn snapshot(&self) -> (usize, usize) {
        (self.queue.lock().len(), self.capacity)
    }

    /// Buffer capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Wake every waiter so it can re-observe the stop flag.
    ///
    /// Taking the lock before notifying closes the race with a waiter that
    /// has checked the flag but not yet parked.
    pub fn interrupt(&self) {
        let _queue = self.queue.lock();
        self.changed.notify_all();
    }
}
