// src/agents/producer.rs
//! Insert-side makers
//!
//! Three recipes share one loop shape: craft an item (possibly under a
//! workbench permit), then pass the insert-side gate and place it on the
//! conveyor. The recipes differ only in which kinds they craft and when a
//! bench is required:
//!
//! - `Cars`: cars only, no bench
//! - `Alternating`: dolls and balls in turn; only the ball needs a bench
//! - `Balls`: balls only, bench every time

use crate::agents::{pace, BENCH_WAIT, CRAFT_PACE, GATE_WAIT};
use crate::factory::{Factory, Item, ItemKind};
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

/// What a producer makes and whether crafting needs a workbench.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    Cars,
    Alternating,
    Balls,
}

impl Recipe {
    /// Tag used in minted item ids.
    fn id_tag(&self) -> &'static str {
        match self {
            Recipe::Cars => "car",
            Recipe::Alternating => "mix",
            Recipe::Balls => "ball",
        }
    }
}

/// Insert-side agent crafting items and feeding the conveyor.
pub struct Producer {
    name: String,
    recipe: Recipe,
    next_is_ball: bool,
    factory: Arc<Factory>,
    rng: StdRng,
}

impl Producer {
    pub fn new(name: String, recipe: Recipe, factory: Arc<Factory>, rng: StdRng) -> Self {
        Self {
            name,
            recipe,
            // The alternating recipe starts with a doll.
            next_is_ball: false,
            factory,
            rng,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loop until the stop signal is observed at a safe point.
    pub fn run(mut self) {
        while self.factory.running() {
            let item = match self.craft() {
                Some(item) => item,
                // Bench timeout: retry the iteration, rechecking stop.
                None => continue,
            };

            if !self.factory.insert_gate().acquire_for(GATE_WAIT) {
                // The uncounted craft is discarded and remade next round.
                continue;
            }
            let kind = item.kind;
            let id = item.id.clone();
            let placed = self.factory.conveyor().put(item, self.factory.stop_signal());
            if placed {
                self.factory.counters().record_produced(kind);
                info!(agent = %self.name, item = %id, "placed on conveyor");
                debug!(conveyor = %self.factory.conveyor_bar(), "floor state");
            }
            self.factory.insert_gate().release();
            if !placed {
                break;
            }
        }
        debug!(agent = %self.name, "producer stopped");
    }

    fn craft(&mut self) -> Option<Item> {
        match self.recipe {
            Recipe::Cars => {
                self.work();
                Some(self.mint(ItemKind::Car))
            }
            Recipe::Balls => self.craft_ball(),
            Recipe::Alternating => {
                if self.next_is_ball {
                    // Flip only after a successful craft; a bench timeout
                    // retries the ball rather than skipping it.
                    let ball = self.craft_ball()?;
                    self.next_is_ball = false;
                    Some(ball)
                } else {
                    self.work();
                    let doll = self.mint(ItemKind::Doll);
                    self.next_is_ball = true;
                    Some(doll)
                }
            }
        }
    }

    /// Crafting a ball occupies a workbench for the duration of the work.
    fn craft_ball(&mut self) -> Option<Item> {
        if !self.factory.workbenches().acquire_for(BENCH_WAIT) {
            return None;
        }
        self.work();
        let ball = self.mint(ItemKind::Ball);
        self.factory.workbenches().release();
        Some(ball)
    }

    fn work(&mut self) {
        pace(&mut self.rng, CRAFT_PACE, self.factory.speed());
    }

    fn mint(&self, kind: ItemKind) -> Item {
        Item::new(kind, self.factory.next_id(self.recipe.id_tag()))
    }
}
