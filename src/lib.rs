//! Sea Escape - a survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, steering, collisions, session state)
//! - `config`: Data-driven game tuning
//! - `platform`: Clock and input collaborators
//! - `renderer`: Read-only snapshots and HUD text for whoever draws the game
//! - `game`: Session ownership, restarts and the fixed-tick loop

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, PlacementError, SessionError};
pub use game::{Game, RunSummary, run};

use glam::Vec2;

/// Game configuration constants (defaults for [`Config`])
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions
    pub const WORLD_WIDTH: u32 = 1500;
    pub const WORLD_HEIGHT: u32 = 900;

    /// Craft defaults
    pub const CRAFT_WIDTH: f32 = 30.0;
    pub const CRAFT_HEIGHT: f32 = 40.0;
    /// Units per tick
    pub const CRAFT_SPEED: f32 = 6.0;
    /// Degrees per tick
    pub const CRAFT_TURN_RATE: f32 = 5.0;

    /// Pursuer defaults
    pub const PURSUER_WIDTH: f32 = 70.0;
    pub const PURSUER_HEIGHT: f32 = 40.0;
    pub const PURSUER_SPEED_MIN: f32 = 2.0;
    pub const PURSUER_SPEED_MAX: f32 = 3.5;
    /// Fraction of the heading error corrected each tick
    pub const PURSUER_STEERING_GAIN: f32 = 0.1;
    /// Tail wag phase advance per tick (cosmetic)
    pub const PURSUER_ANIMATION_STEP: f32 = 0.1;
    /// Pursuers are removed once they drift this far outside the world
    pub const DESPAWN_MARGIN: f32 = 100.0;

    /// One pursuer every 2 seconds at 60 Hz
    pub const SPAWN_INTERVAL_TICKS: u32 = 120;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 30;
    pub const OBSTACLE_RADIUS_MIN: u32 = 10;
    pub const OBSTACLE_RADIUS_MAX: u32 = 25;

    /// Survive this long to win (5 minutes)
    pub const SESSION_DURATION_SECS: f64 = 300.0;

    /// Collision boxes are shrunk to this fraction of the nominal size
    pub const COLLISION_SHRINK: f32 = 2.0 / 3.0;

    /// Rejection sampling cap for craft placement
    pub const PLACEMENT_MAX_ATTEMPTS: u32 = 10_000;
}

/// Wrap an angle in degrees to (-180, 180]
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 { a - 360.0 } else { a }
}

/// Unit vector for a heading in degrees (0 = +x, counter-clockwise in math coords)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Bearing in degrees from `from` toward `to`
#[inline]
pub fn bearing_degrees(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}
