// src/config.rs
//! Simulation configuration
//!
//! Crew sizes, conveyor capacity, workbench bound, and pacing knobs. The
//! defaults reproduce the canonical floor: two car makers, one alternating
//! maker, two ball makers, three inspectors, two loaders, a ten-slot
//! conveyor, and two workbenches.

use crate::error::{Result, SimError};

/// Full configuration for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Car makers: craft cars, never need a workbench.
    pub car_makers: usize,

    /// Alternating makers: craft dolls and balls in turn; balls need a bench.
    pub alternating_makers: usize,

    /// Ball makers: every craft needs a workbench permit.
    pub ball_makers: usize,

    /// Inspectors: tally the sled under a read permit.
    pub inspectors: usize,

    /// Loaders: move items from the conveyor into the sled.
    pub loaders: usize,

    /// Conveyor capacity (slots).
    pub conveyor_capacity: usize,

    /// Number of workbench permits.
    pub workbenches: usize,

    /// Run duration in seconds.
    pub duration_secs: u64,

    /// Pacing divisor; values above 1.0 speed the simulation up.
    pub speed: f64,

    /// Base RNG seed for reproducible pacing; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            car_makers: 2,
            alternating_makers: 1,
            ball_makers: 2,
            inspectors: 3,
            loaders: 2,
            conveyor_capacity: 10,
            workbenches: 2,
            duration_secs: 20,
            speed: 1.25,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validate the configuration.
    ///
    /// Called by the factory constructor before any thread exists; a failure
    /// here is the only non-zero exit path of the binary.
    pub fn validate(&self) -> Result<()> {
        if self.conveyor_capacity == 0 {
            return Err(SimError::InvalidConveyorCapacity(self.conveyor_capacity));
        }
        if self.workbenches == 0 {
            return Err(SimError::InvalidWorkbenchCount(self.workbenches));
        }
        if !(self.speed > 0.0) {
            return Err(SimError::InvalidSpeed(self.speed));
        }
        Ok(())
    }

    /// Total number of agent threads this configuration spawns.
    pub fn crew_size(&self) -> usize {
        self.car_makers
            + self.alternating_makers
            + self.ball_makers
            + self.inspectors
            + self.loaders
    }
}
