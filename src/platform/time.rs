//! Monotonic time sources

use std::time::{Duration, Instant};

/// Supplies monotonic seconds and the per-tick pacing wait
pub trait ClockSource {
    /// Seconds since an arbitrary fixed origin
    fn now(&self) -> f64;

    /// Block until `deadline` (same timebase as [`ClockSource::now`])
    fn wait_until(&mut self, deadline: f64);
}

/// Wall-clock time backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    fn wait_until(&mut self, deadline: f64) {
        let wait = deadline - self.now();
        if wait > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(wait));
        }
    }
}

/// Time that only moves when the loop waits; a whole session runs instantly
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedClock {
    now: f64,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClockSource for SimulatedClock {
    fn now(&self) -> f64 {
        self.now
    }

    fn wait_until(&mut self, deadline: f64) {
        self.now = self.now.max(deadline);
    }
}
