//! Game loop
//!
//! [`Game`] owns the current session and swaps in a fresh one on restart.
//! [`run`] drives it at a fixed tick rate through the platform and renderer
//! collaborators.

use crate::config::Config;
use crate::error::SessionError;
use crate::platform::{ClockSource, InputSource};
use crate::renderer::{Renderer, SessionSnapshot};
use crate::sim::{GameEvent, Session, TickInput, tick};

/// How far the loop may fall behind before it stops trying to catch up
const MAX_LAG_TICKS: f64 = 8.0;

/// Game instance holding the current session
#[derive(Debug)]
pub struct Game {
    session: Session,
    restarts: u32,
}

impl Game {
    /// Validate `config` and build the first session from `seed`
    pub fn new(config: Config, seed: u64) -> Result<Self, SessionError> {
        Ok(Self {
            session: Session::new(config, seed)?,
            restarts: 0,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn config(&self) -> &Config {
        &self.session.config
    }

    /// Number of times a finished session was replaced
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Run one tick. A confirm on an end screen replaces the whole session.
    pub fn step(&mut self, input: &TickInput, now: f64) -> Result<Vec<GameEvent>, SessionError> {
        let events = tick(&mut self.session, input, now);

        if events.contains(&GameEvent::RestartRequested) {
            let next = self.session.restart()?;
            self.session = next;
            self.restarts += 1;
            log::info!("Restarted (session #{})", self.restarts + 1);
        }

        Ok(events)
    }

    pub fn snapshot(&self, now: f64) -> SessionSnapshot<'_> {
        SessionSnapshot::capture(&self.session, now)
    }
}

/// What happened during a call to [`run`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub sessions_started: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl RunSummary {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Started => self.sessions_started += 1,
                GameEvent::Survived => self.victories += 1,
                GameEvent::Collided(_) => self.defeats += 1,
                GameEvent::PursuerSpawned { .. }
                | GameEvent::PursuerDespawned { .. }
                | GameEvent::RestartRequested => {}
            }
        }
    }
}

/// Drive the game until the input source asks to quit.
///
/// Each iteration: poll input, step the simulation, render, then wait for the
/// next tick deadline.
pub fn run<I, R, C>(
    game: &mut Game,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
) -> Result<RunSummary, SessionError>
where
    I: InputSource,
    R: Renderer,
    C: ClockSource,
{
    let tick_secs = game.config().tick_secs();
    let mut summary = RunSummary::default();
    let mut next_tick = clock.now();

    log::info!("Loop running at {} ticks/s", game.config().tick_rate);

    loop {
        let frame = input.poll(game.session());
        if frame.quit {
            log::info!("Quit requested after {} ticks", summary.ticks);
            break;
        }

        let now = clock.now();
        let events = game.step(&frame.tick, now)?;
        summary.ticks += 1;
        summary.record(&events);

        renderer.render(&game.snapshot(now));

        next_tick += tick_secs;
        let behind = clock.now() - next_tick;
        if behind > tick_secs * MAX_LAG_TICKS {
            log::warn!("Loop fell {:.0} ms behind, resyncing", behind * 1000.0);
            next_tick = clock.now();
        }
        clock.wait_until(next_tick);
    }

    Ok(summary)
}
