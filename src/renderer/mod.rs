//! Rendering boundary
//!
//! Drawing happens outside the simulation. A renderer receives a read-only
//! [`SessionSnapshot`] once per tick and owns all pixel and text output.

pub mod hud;
pub mod log_renderer;

pub use log_renderer::LogRenderer;

use serde::Serialize;

use crate::sim::{Craft, Obstacle, Phase, Pursuer, Session};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionSnapshot<'a> {
    pub phase: Phase,
    pub remaining_secs: f64,
    pub time_ticks: u64,
    pub world_width: f32,
    pub world_height: f32,
    pub obstacles: &'a [Obstacle],
    pub craft: &'a Craft,
    pub pursuers: &'a [Pursuer],
}

impl<'a> SessionSnapshot<'a> {
    pub fn capture(session: &'a Session, now: f64) -> Self {
        Self {
            phase: session.phase,
            remaining_secs: session.remaining_secs(now),
            time_ticks: session.time_ticks,
            world_width: session.bounds.width,
            world_height: session.bounds.height,
            obstacles: &session.obstacles,
            craft: &session.craft,
            pursuers: &session.pursuers,
        }
    }
}

/// Consumes one snapshot per tick
pub trait Renderer {
    fn render(&mut self, snapshot: &SessionSnapshot<'_>);
}
