//! Idle/demo mode - AI steers the craft
//!
//! Keeps the boat moving and turns it away from whatever threat is closest,
//! blending in a pull toward open water when it gets near a wall.

use glam::Vec2;

use super::state::Session;
use super::tick::MovementIntents;
use crate::wrap_degrees;

/// Threats farther than this are ignored
const THREAT_RADIUS: f32 = 220.0;
/// Start steering back toward the middle inside this distance from a wall
const WALL_MARGIN: f32 = 120.0;

/// Heading (craft convention: 0 = up, clockwise) that points along `dir`
fn craft_heading_for(dir: Vec2) -> f32 {
    dir.x.atan2(-dir.y).to_degrees()
}

/// Pick movement intents for the current session state
pub fn autopilot_intents(session: &Session) -> MovementIntents {
    let craft = &session.craft;
    let pos = craft.pos;

    // Sum of repulsion from nearby threats, weighted by closeness
    let mut away = Vec2::ZERO;
    let threats = session
        .obstacles
        .iter()
        .map(|o| (o.pos, o.radius as f32))
        .chain(session.pursuers.iter().map(|p| (p.pos, p.width / 2.0)));
    for (threat_pos, reach) in threats {
        let offset = pos - threat_pos;
        let dist = (offset.length() - reach).max(1.0);
        if dist < THREAT_RADIUS {
            away += offset.normalize_or_zero() * (THREAT_RADIUS - dist) / THREAT_RADIUS;
        }
    }

    let center = Vec2::new(session.bounds.width, session.bounds.height) / 2.0;
    let near_wall = pos.x < WALL_MARGIN
        || pos.y < WALL_MARGIN
        || pos.x > session.bounds.width - WALL_MARGIN
        || pos.y > session.bounds.height - WALL_MARGIN;
    if near_wall {
        away += (center - pos).normalize_or_zero();
    }

    let mut intents = MovementIntents {
        forward: true,
        ..Default::default()
    };
    if away.length_squared() < 1e-6 {
        return intents;
    }

    let error = wrap_degrees(craft_heading_for(away) - craft.heading);
    if error > craft.turn_rate / 2.0 {
        intents.turn_right = true;
    } else if error < -craft.turn_rate / 2.0 {
        intents.turn_left = true;
    }
    intents
}
