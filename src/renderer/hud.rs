//! HUD and overlay text
//!
//! Pure strings; fonts and layout belong to the renderer.

use crate::sim::Phase;

pub const INTRO_LINES: &[&str] = &[
    "A merchant ship has strayed into shark waters",
    "Steer clear of the reefs and the sharks",
    "Hold out for five minutes to escape their territory",
    "",
    "Controls:",
    "Up - forward",
    "Down - reverse",
    "Left/Right - turn",
    "",
    "Press Space to start",
];

pub const PLAYING_HINT: &str = "Avoid the black reefs and grey sharks for 5 minutes";
pub const GAME_OVER_TITLE: &str = "Game over! The sharks got you";
pub const VICTORY_TITLE: &str = "Victory! You escaped the shark waters";
pub const RESTART_PROMPT: &str = "Press Space to play again";

/// Remaining time as `MM:SS`, truncated to whole seconds
pub fn format_remaining(remaining_secs: f64) -> String {
    let total = remaining_secs.max(0.0) as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Lines to draw for a phase, top to bottom
pub fn overlay_lines(phase: Phase, remaining_secs: f64) -> Vec<String> {
    match phase {
        Phase::StartScreen => INTRO_LINES.iter().map(|s| s.to_string()).collect(),
        Phase::Playing => vec![
            format!("Time left: {}", format_remaining(remaining_secs)),
            PLAYING_HINT.to_string(),
        ],
        Phase::GameOver => vec![GAME_OVER_TITLE.to_string(), RESTART_PROMPT.to_string()],
        Phase::Victory => vec![VICTORY_TITLE.to_string(), RESTART_PROMPT.to_string()],
    }
}
