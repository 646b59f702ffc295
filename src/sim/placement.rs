//! Random placement of obstacles, the craft and new pursuers

use glam::Vec2;
use rand::Rng;

use super::state::Obstacle;
use crate::config::Config;
use crate::error::PlacementError;

/// Scatter `obstacle_count` reefs fully inside the world
pub fn layout_obstacles<R: Rng>(rng: &mut R, config: &Config) -> Vec<Obstacle> {
    (0..config.obstacle_count)
        .map(|_| {
            let radius = rng.random_range(config.obstacle_radius_min..=config.obstacle_radius_max);
            let x = rng.random_range(radius..=config.world_width - radius);
            let y = rng.random_range(radius..=config.world_height - radius);
            Obstacle::new(Vec2::new(x as f32, y as f32), radius)
        })
        .collect()
}

/// Whether a craft of `craft_size` at `pos` keeps a safe distance from every obstacle
pub fn is_safe_spawn(pos: Vec2, craft_size: Vec2, obstacles: &[Obstacle]) -> bool {
    let clearance = craft_size.x.max(craft_size.y);
    obstacles
        .iter()
        .all(|o| pos.distance(o.pos) >= o.radius as f32 + clearance)
}

/// Rejection-sample a craft position clear of every obstacle
///
/// Gives up after `placement_max_attempts` draws so a crowded layout can't
/// hang session creation.
pub fn place_craft<R: Rng>(
    rng: &mut R,
    config: &Config,
    obstacles: &[Obstacle],
) -> Result<Vec2, PlacementError> {
    let size = Vec2::new(config.craft_width, config.craft_height);
    // Integer draws inset by the full craft size
    let inset_x = config.craft_width.ceil() as u32;
    let inset_y = config.craft_height.ceil() as u32;
    let attempts = config.placement_max_attempts;

    for attempt in 1..=attempts {
        let x = rng.random_range(inset_x..=config.world_width - inset_x);
        let y = rng.random_range(inset_y..=config.world_height - inset_y);
        let pos = Vec2::new(x as f32, y as f32);
        if is_safe_spawn(pos, size, obstacles) {
            if attempt > 100 {
                log::warn!("Craft placement needed {} attempts", attempt);
            }
            return Ok(pos);
        }
    }

    Err(PlacementError::Exhausted { attempts })
}

/// Pick a spawn point just outside one of the four edges
pub fn pursuer_spawn_point<R: Rng>(rng: &mut R, config: &Config) -> Vec2 {
    let (width, height) = (config.world_width as f32, config.world_height as f32);

    if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -config.pursuer_width
        } else {
            width + config.pursuer_width
        };
        let y = rng.random_range(0..=config.world_height) as f32;
        Vec2::new(x, y)
    } else {
        // Top or bottom edge
        let x = rng.random_range(0..=config.world_width) as f32;
        let y = if rng.random_bool(0.5) {
            -config.pursuer_height
        } else {
            height + config.pursuer_height
        };
        Vec2::new(x, y)
    }
}
