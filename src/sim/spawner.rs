//! Periodic pursuer spawning

use serde::{Deserialize, Serialize};

/// Counts playing ticks and fires once every `interval` ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawner {
    counter: u32,
    interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self {
            counter: 0,
            interval,
        }
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advance one tick. Returns true when a pursuer should spawn.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}
