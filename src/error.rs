//! Error types
//!
//! Placement is the only part of the simulation that can fail at runtime;
//! everything else (walls, despawns, collisions) is an ordinary state change.

use thiserror::Error;

/// Invalid tuning values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("world must have positive size, got {width}x{height}")]
    EmptyWorld { width: u32, height: u32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} range is inverted: min {min} > max {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{what} of size {size} does not fit in a {width}x{height} world")]
    DoesNotFit {
        what: &'static str,
        size: f32,
        width: u32,
        height: u32,
    },
    #[error("collision shrink factor must be in (0, 1], got {0}")]
    ShrinkOutOfRange(f32),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejection sampling gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no safe craft position found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Failure to build a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}
