// src/error.rs
//! Error types for the simulator
//!
//! Transient contention is never an error here: gate and pool timeouts are
//! boolean outcomes and cancellation is a normal loop exit. The only fatal
//! conditions are configuration mistakes caught before any agent thread is
//! spawned.

use thiserror::Error;

/// Fatal simulator errors.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("conveyor capacity must be at least 1 (got {0})")]
    InvalidConveyorCapacity(usize),

    #[error("workbench count must be at least 1 (got {0})")]
    InvalidWorkbenchCount(usize),

    #[error("speed factor must be positive (got {0})")]
    InvalidSpeed(f64),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
