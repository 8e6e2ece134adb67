// src/lib.rs
//! Toyline Simulator Library
//!
//! A multi-stage toy-factory line staffed by concurrent worker agents and
//! coordinated entirely through classic synchronization primitives. The
//! point is pedagogical: correct, deadlock-free coordination among producer
//! groups, a capacity-limited workbench station, a bounded conveyor, and a
//! shared sled read under a readers-writer discipline.
//!
//! # Architecture
//!
//! The crate is structured into three layers:
//!
//! - **sync**: the primitives: bounded buffer, group gates, permit pool,
//!   readers-writer gate, stop signal
//! - **factory**: the domain: items, counters, the sled, and the `Factory`
//!   context bundling all shared state
//! - **agents**: the five worker roles and crew spawning
//!
//! The binary in `main.rs` is a thin orchestrator: it parses the CLI, wires
//! up logging, spawns the crew, runs for the configured duration (or until
//! ctrl-c), and prints a summary.

// Public module exports
pub mod agents;
pub mod config;
pub mod error;
pub mod factory;
pub mod sync;

// Re-export commonly used types
pub use agents::spawn_crew;
pub use config::SimConfig;
pub use error::{Result, SimError};
pub use factory::{Factory, FactorySnapshot, Item, ItemKind};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
