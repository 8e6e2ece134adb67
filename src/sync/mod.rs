// src/sync/mod.rs
//! Classic synchronization primitives
//!
//! The coordination layer the whole simulation rests on:
//!
//! - **BoundedBuffer**: fixed-capacity FIFO with blocking, cancellable endpoints
//! - **Gate**: single-holder group permit with bounded-wait acquisition
//! - **PermitPool**: counting semaphore bounding a shared station
//! - **RwGate**: readers-writer admission with writer preference
//! - **StopSignal**: terminal, idempotent shutdown flag
//!
//! Every blocking wait here is either cancellable (the buffer, which is
//! interrupted on stop) or timed (gates, pool, rw admission), so no agent
//! can sleep past shutdown.

pub mod buffer;
pub mod gate;
pub mod pool;
pub mod rwgate;
pub mod stop;

// Re-export commonly used types
pub use buffer::BoundedBuffer;
pub use gate::Gate;
pub use pool::PermitPool;
pub use rwgate::{RwGate, RwGateStats};
pub use stop::StopSignal;
