// src/factory/mod.rs
//! The factory floor and everything on it
//!
//! Domain layer built on the primitives in [`crate::sync`]:
//!
//! - **Item / ItemKind**: what moves through the line
//! - **Counters**: produced/delivered tallies
//! - **Sled**: the append-only aggregate under a readers-writer discipline
//! - **Factory**: the shared context handed to every agent
//!
//! ```text
//! makers ──insert gate──▶ [conveyor] ──remove gate──▶ loaders ──▶ (sled)
//!    │                                                              ▲
//!    └─ ball crafting gated by the workbench pool      inspectors ──┘ (reads)
//! ```

pub mod counters;
pub mod floor;
pub mod item;
pub mod sled;

// Re-export commonly used types
pub use counters::Counters;
pub use floor::{Factory, FactorySnapshot};
pub use item::{Item, ItemKind};
pub use sled::Sled;
