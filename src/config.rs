//! Game tuning
//!
//! Every gameplay constant lives in one immutable struct that is handed to each
//! session. Defaults come from [`crate::consts`]; a JSON document may override
//! any subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === World ===
    pub world_width: u32,
    pub world_height: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Seconds to survive for a victory
    pub session_duration_secs: f64,

    // === Craft ===
    pub craft_width: f32,
    pub craft_height: f32,
    /// Units per tick
    pub craft_speed: f32,
    /// Degrees per tick
    pub craft_turn_rate: f32,
    /// Rejection sampling cap when placing the craft
    pub placement_max_attempts: u32,

    // === Pursuers ===
    pub pursuer_width: f32,
    pub pursuer_height: f32,
    pub pursuer_speed_min: f32,
    pub pursuer_speed_max: f32,
    pub pursuer_steering_gain: f32,
    pub pursuer_animation_step: f32,
    pub spawn_interval_ticks: u32,
    pub despawn_margin: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_radius_min: u32,
    pub obstacle_radius_max: u32,

    // === Collision ===
    /// Fraction of nominal size used for collision boxes
    pub collision_shrink: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            tick_rate: TICK_RATE,
            session_duration_secs: SESSION_DURATION_SECS,

            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            craft_speed: CRAFT_SPEED,
            craft_turn_rate: CRAFT_TURN_RATE,
            placement_max_attempts: PLACEMENT_MAX_ATTEMPTS,

            pursuer_width: PURSUER_WIDTH,
            pursuer_height: PURSUER_HEIGHT,
            pursuer_speed_min: PURSUER_SPEED_MIN,
            pursuer_speed_max: PURSUER_SPEED_MAX,
            pursuer_steering_gain: PURSUER_STEERING_GAIN,
            pursuer_animation_step: PURSUER_ANIMATION_STEP,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            despawn_margin: DESPAWN_MARGIN,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_radius_min: OBSTACLE_RADIUS_MIN,
            obstacle_radius_max: OBSTACLE_RADIUS_MAX,

            collision_shrink: COLLISION_SHRINK,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Seconds per simulation tick
    pub fn tick_secs(&self) -> f64 {
        1.0 / f64::from(self.tick_rate)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.world_width, self.world_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyWorld { width, height });
        }

        let finite: [(&'static str, f64); 10] = [
            ("session_duration_secs", self.session_duration_secs),
            ("craft_width", f64::from(self.craft_width)),
            ("craft_height", f64::from(self.craft_height)),
            ("craft_speed", f64::from(self.craft_speed)),
            ("craft_turn_rate", f64::from(self.craft_turn_rate)),
            ("pursuer_width", f64::from(self.pursuer_width)),
            ("pursuer_height", f64::from(self.pursuer_height)),
            ("pursuer_steering_gain", f64::from(self.pursuer_steering_gain)),
            ("pursuer_animation_step", f64::from(self.pursuer_animation_step)),
            ("despawn_margin", f64::from(self.despawn_margin)),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        let non_negative: [(&'static str, f64); 4] = [
            ("craft_speed", f64::from(self.craft_speed)),
            ("pursuer_speed_min", f64::from(self.pursuer_speed_min)),
            ("pursuer_speed_max", f64::from(self.pursuer_speed_max)),
            ("despawn_margin", f64::from(self.despawn_margin)),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        let positive: [(&'static str, f64); 9] = [
            ("tick_rate", f64::from(self.tick_rate)),
            ("session_duration_secs", self.session_duration_secs),
            ("craft_width", f64::from(self.craft_width)),
            ("craft_height", f64::from(self.craft_height)),
            ("placement_max_attempts", f64::from(self.placement_max_attempts)),
            ("pursuer_width", f64::from(self.pursuer_width)),
            ("pursuer_height", f64::from(self.pursuer_height)),
            ("spawn_interval_ticks", f64::from(self.spawn_interval_ticks)),
            ("obstacle_radius_min", f64::from(self.obstacle_radius_min)),
        ];
        for (name, value) in positive {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.pursuer_speed_min > self.pursuer_speed_max {
            return Err(ConfigError::InvertedRange {
                name: "pursuer_speed",
                min: f64::from(self.pursuer_speed_min),
                max: f64::from(self.pursuer_speed_max),
            });
        }
        if self.obstacle_radius_min > self.obstacle_radius_max {
            return Err(ConfigError::InvertedRange {
                name: "obstacle_radius",
                min: f64::from(self.obstacle_radius_min),
                max: f64::from(self.obstacle_radius_max),
            });
        }

        // Placement draws integer coordinates from [r, W - r] and [w, W - w]
        let obstacle_span = 2 * u64::from(self.obstacle_radius_max);
        if obstacle_span > u64::from(width) || obstacle_span > u64::from(height) {
            return Err(ConfigError::DoesNotFit {
                what: "obstacle",
                size: obstacle_span as f32,
                width,
                height,
            });
        }
        if 2.0 * self.craft_width.ceil() > width as f32
            || 2.0 * self.craft_height.ceil() > height as f32
        {
            return Err(ConfigError::DoesNotFit {
                what: "craft",
                size: self.craft_width.max(self.craft_height),
                width,
                height,
            });
        }

        if !(self.collision_shrink > 0.0 && self.collision_shrink <= 1.0) {
            return Err(ConfigError::ShrinkOutOfRange(self.collision_shrink));
        }

        Ok(())
    }
}
