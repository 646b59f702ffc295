//! Session countdown
//!
//! Times are seconds from a monotonic source supplied by the caller, so the
//! clock itself never reads the system time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionClock {
    started_at: Option<f64>,
    duration: f64,
}

impl SessionClock {
    pub fn new(duration: f64) -> Self {
        Self {
            started_at: None,
            duration,
        }
    }

    /// Record the moment play began
    pub fn start(&mut self, now: f64) {
        self.started_at = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Seconds since start (0 before the session starts)
    pub fn elapsed(&self, now: f64) -> f64 {
        self.started_at.map_or(0.0, |start| (now - start).max(0.0))
    }

    /// Seconds left, never negative
    pub fn remaining(&self, now: f64) -> f64 {
        (self.duration - self.elapsed(now)).max(0.0)
    }

    /// True once a started clock has run for the full duration
    pub fn is_expired(&self, now: f64) -> bool {
        self.is_started() && self.elapsed(now) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstarted_clock() {
        let clock = SessionClock::new(300.0);
        assert_eq!(clock.elapsed(1000.0), 0.0);
        assert_eq!(clock.remaining(1000.0), 300.0);
        assert!(!clock.is_expired(1000.0));
    }

    #[test]
    fn test_expires_at_exact_duration() {
        let mut clock = SessionClock::new(300.0);
        clock.start(10.0);
        assert!(!clock.is_expired(309.999));
        assert!(clock.is_expired(310.0));
        assert_eq!(clock.remaining(310.0), 0.0);
        assert_eq!(clock.remaining(400.0), 0.0);
        assert!((clock.remaining(70.0) - 240.0).abs() < 1e-9);
    }
}
