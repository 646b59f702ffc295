//! Headless renderer that writes the HUD to the log

use super::hud::{format_remaining, overlay_lines};
use super::{Renderer, SessionSnapshot};
use crate::sim::Phase;

/// Logs overlay text on phase changes and a HUD line once per game second.
/// At trace level it also dumps the full snapshot as JSON.
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<Phase>,
    last_second: Option<u64>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &SessionSnapshot<'_>) {
        self.frames += 1;

        if self.last_phase != Some(snapshot.phase) {
            self.last_phase = Some(snapshot.phase);
            self.last_second = None;
            for line in overlay_lines(snapshot.phase, snapshot.remaining_secs) {
                if !line.is_empty() {
                    log::info!("{}", line);
                }
            }
        }

        if snapshot.phase == Phase::Playing {
            let second = snapshot.remaining_secs as u64;
            if self.last_second != Some(second) {
                self.last_second = Some(second);
                log::debug!(
                    "{} | craft ({:.0}, {:.0}) heading {:.0} | sharks {}",
                    format_remaining(snapshot.remaining_secs),
                    snapshot.craft.pos.x,
                    snapshot.craft.pos.y,
                    snapshot.craft.heading,
                    snapshot.pursuers.len()
                );
            }
        }

        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(snapshot) {
                Ok(json) => log::trace!("{}", json),
                Err(e) => log::warn!("Snapshot serialization failed: {}", e),
            }
        }
    }
}
