//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one tick. Ordering within a tick is fixed:
//! craft, spawner, pursuers, collisions, then the clock.

use serde::{Deserialize, Serialize};

use super::collision::{Collision, find_collision};
use super::state::{Phase, Session};

/// Movement keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementIntents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub intents: MovementIntents,
    /// Confirm/start key went down this tick (edge-triggered)
    pub confirm: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start screen confirmed, clock running
    Started,
    PursuerSpawned { id: u32 },
    PursuerDespawned { id: u32 },
    /// Craft hit something; the session is over
    Collided(Collision),
    /// Clock ran out with the craft intact
    Survived,
    /// Confirm pressed on an end screen; the owner should build a new session
    RestartRequested,
}

/// Advance the session by one tick. `now` is monotonic time in seconds.
pub fn tick(session: &mut Session, input: &TickInput, now: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match session.phase {
        Phase::StartScreen => {
            if input.confirm {
                session.clock.start(now);
                session.phase = Phase::Playing;
                log::info!("Session started (seed {})", session.seed);
                events.push(GameEvent::Started);
            }
        }

        Phase::Playing => {
            step_playing(session, input, now, &mut events);
        }

        Phase::GameOver | Phase::Victory => {
            if input.confirm {
                events.push(GameEvent::RestartRequested);
            }
        }
    }

    events
}

fn step_playing(session: &mut Session, input: &TickInput, now: f64, events: &mut Vec<GameEvent>) {
    session.time_ticks += 1;

    session.craft.apply_intents(input.intents, &session.bounds);

    if session.spawner.tick() {
        let id = session.spawn_pursuer();
        log::debug!(
            "Pursuer {} spawned ({} active)",
            id,
            session.pursuers.len()
        );
        events.push(GameEvent::PursuerSpawned { id });
    }

    let target = session.craft.pos;
    let gain = session.config.pursuer_steering_gain;
    let anim_step = session.config.pursuer_animation_step;
    for pursuer in &mut session.pursuers {
        pursuer.steer_toward(target, gain);
        pursuer.advance(anim_step);
    }

    // Compact after the whole pass so removal never disturbs iteration
    let bounds = session.bounds;
    let margin = session.config.despawn_margin;
    session.pursuers.retain(|p| {
        let keep = bounds.contains_with_margin(p.pos, margin);
        if !keep {
            log::debug!("Pursuer {} left the map", p.id);
            events.push(GameEvent::PursuerDespawned { id: p.id });
        }
        keep
    });

    if let Some(collision) = find_collision(
        &session.craft,
        &session.obstacles,
        &session.pursuers,
        session.config.collision_shrink,
    ) {
        session.phase = Phase::GameOver;
        log::info!(
            "Game over after {:.1}s: {:?}",
            session.clock.elapsed(now),
            collision
        );
        events.push(GameEvent::Collided(collision));
        return;
    }

    if session.clock.is_expired(now) {
        session.phase = Phase::Victory;
        log::info!("Victory! Survived {:.0}s", session.clock.duration());
        events.push(GameEvent::Survived);
    }
}
