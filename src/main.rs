//! Sea Escape entry point
//!
//! Runs the simulation headless: the autopilot plays, the HUD goes to the log.
//! Environment:
//! - `RUST_LOG`: log filter (default `info`)
//! - `SEA_ESCAPE_CONFIG`: path to a JSON tuning file
//! - `SEA_ESCAPE_SEED`: seed for the first session
//! - `SEA_ESCAPE_SESSIONS`: sessions to play before quitting (default 1)
//! - `SEA_ESCAPE_REALTIME=1`: pace ticks against the wall clock

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};

use sea_escape::platform::{AutopilotInput, SimulatedClock, SystemClock};
use sea_escape::renderer::LogRenderer;
use sea_escape::{Config, Game, RunSummary, run};

fn load_config() -> Result<Config> {
    match std::env::var("SEA_ESCAPE_CONFIG") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            let config =
                Config::from_json(&json).with_context(|| format!("loading config file {path}"))?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        Err(_) => Ok(Config::default()),
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("invalid {name}={value}")),
        Err(_) => Ok(None),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sea Escape (headless) starting...");

    let config = load_config()?;
    let seed = match env_parse::<u64>("SEA_ESCAPE_SEED")? {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0),
    };
    let sessions = env_parse::<u32>("SEA_ESCAPE_SESSIONS")?.unwrap_or(1);
    let realtime = std::env::var("SEA_ESCAPE_REALTIME").is_ok_and(|v| v == "1");

    let mut game = Game::new(config, seed).context("building first session")?;
    log::info!("Game initialized with seed: {}", seed);

    let mut input = AutopilotInput::new(sessions);
    let mut renderer = LogRenderer::new();

    let summary: RunSummary = if realtime {
        run(&mut game, &mut input, &mut renderer, &mut SystemClock::new())
    } else {
        run(&mut game, &mut input, &mut renderer, &mut SimulatedClock::new())
    }
    .context("running game loop")?;

    log::info!(
        "Done: {} sessions, {} victories, {} defeats, {} ticks, {} frames",
        summary.sessions_started,
        summary.victories,
        summary.defeats,
        summary.ticks,
        renderer.frames()
    );
    Ok(())
}
