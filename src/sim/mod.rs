//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Time arrives as a parameter, never read from the system
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod placement;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_intents;
pub use clock::SessionClock;
pub use collision::{BoundingBox, Collision, collides, find_collision};
pub use placement::{is_safe_spawn, layout_obstacles, place_craft, pursuer_spawn_point};
pub use spawner::Spawner;
pub use state::{Craft, Obstacle, Phase, Pursuer, Session, WorldBounds};
pub use tick::{GameEvent, MovementIntents, TickInput, tick};
