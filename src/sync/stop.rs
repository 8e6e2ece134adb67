// src/sync/stop.rs
//! Process-wide cooperative stop signal
//!
//! A single terminal flag shared by every agent on the floor. Once raised it
//! is never reset; agents observe it at safe points in their loops and the
//! factory broadcasts a wake-up to any blocked waiter so nobody sleeps
//! through shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Terminal, idempotent cancellation flag.
#[derive(Debug, Default)]
pub struct StopSignal {
    raised: AtomicBool,
}

impl StopSignal {
    /// Create a new, unraised signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the signal. Safe to call any number of times.
    pub fn trigger(&self) {
        if !self.raised.swap(true, Ordering::SeqCst) {
            debug!("stop signal raised");
        }
    }

    /// Whether the signal has been raised.
    pub fn is_set(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unraised() {
        let stop = StopSignal::new();
        assert!(!stop.is_set());
    }

    #[test]
    fn test_trigger_is_terminal_and_idempotent() {
        let stop = StopSignal::new();
        stop.trigger();
        assert!(stop.is_set());

        // A second trigger changes nothing
        stop.trigger();
        assert!(stop.is_set());
    }

    #[test]
    fn test_visible_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let stop = Arc::new(StopSignal::new());
        let observer = {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.is_set() {
                    thread::yield_now();
                }
            })
        };

        stop.trigger();
        observer.join().unwrap();
    }
}
