//! Session state and core simulation types
//!
//! A [`Session`] owns everything that changes during one play-through. A restart
//! never mutates an old session; it builds a new one.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::SessionClock;
use super::collision::BoundingBox;
use super::placement;
use super::spawner::Spawner;
use super::tick::MovementIntents;
use crate::config::Config;
use crate::error::SessionError;
use crate::{bearing_degrees, heading_vector, wrap_degrees};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Intro text, waiting for confirm
    StartScreen,
    /// Active gameplay
    Playing,
    /// Craft hit something
    GameOver,
    /// Craft survived the full duration
    Victory,
}

impl Phase {
    /// True for the two end-of-session phases
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver | Phase::Victory)
    }
}

/// The playable rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.world_width, config.world_height)
    }

    /// Clamp a position so a box of `size` centered on it stays inside
    pub fn clamp_inset(&self, pos: Vec2, size: Vec2) -> Vec2 {
        let half = size / 2.0;
        Vec2::new(
            pos.x.clamp(half.x, self.width - half.x),
            pos.y.clamp(half.y, self.height - half.y),
        )
    }

    /// Whether `pos` lies within the bounds grown by `margin` on every side.
    /// Points exactly on the grown edge count as inside.
    pub fn contains_with_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x >= -margin
            && pos.x <= self.width + margin
            && pos.y >= -margin
            && pos.y <= self.height + margin
    }
}

/// A static circular reef
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: u32,
}

impl Obstacle {
    pub fn new(pos: Vec2, radius: u32) -> Self {
        Self { pos, radius }
    }

    pub fn diameter(&self) -> f32 {
        2.0 * self.radius as f32
    }

    pub fn bounding_box(&self, shrink: f32) -> BoundingBox {
        BoundingBox::from_center(self.pos, Vec2::splat(self.diameter()), shrink)
    }
}

/// The player's boat
///
/// Heading is in degrees with 0 pointing up the screen (toward -y) and
/// positive angles turning clockwise on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Craft {
    pub pos: Vec2,
    pub heading: f32,
    pub width: f32,
    pub height: f32,
    /// Units per tick
    pub speed: f32,
    /// Degrees per tick
    pub turn_rate: f32,
}

impl Craft {
    pub fn new(pos: Vec2, config: &Config) -> Self {
        Self {
            pos,
            heading: 0.0,
            width: config.craft_width,
            height: config.craft_height,
            speed: config.craft_speed,
            turn_rate: config.craft_turn_rate,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Unit vector the bow points along
    pub fn forward(&self) -> Vec2 {
        let rad = self.heading.to_radians();
        Vec2::new(rad.sin(), -rad.cos())
    }

    /// Apply one tick of movement intents, then clamp to the world.
    /// Turning left lowers the heading (counter-clockwise on screen), turning right raises it.
    pub fn apply_intents(&mut self, intents: MovementIntents, bounds: &WorldBounds) {
        if intents.turn_left {
            self.heading -= self.turn_rate;
        }
        if intents.turn_right {
            self.heading += self.turn_rate;
        }
        // Translation uses the heading after this tick's turn
        if intents.forward {
            self.pos += self.forward() * self.speed;
        }
        if intents.backward {
            self.pos -= self.forward() * self.speed;
        }

        self.pos = bounds.clamp_inset(self.pos, self.size());
    }

    pub fn bounding_box(&self, shrink: f32) -> BoundingBox {
        BoundingBox::from_center(self.pos, self.size(), shrink)
    }
}

/// A shark that hunts the craft
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: u32,
    pub pos: Vec2,
    /// Degrees, 0 = +x
    pub heading: f32,
    /// Units per tick, fixed at spawn
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    /// Tail wag phase (cosmetic only)
    pub anim_phase: f32,
}

impl Pursuer {
    pub fn new(id: u32, pos: Vec2, speed: f32, config: &Config) -> Self {
        Self {
            id,
            pos,
            heading: 0.0,
            speed,
            width: config.pursuer_width,
            height: config.pursuer_height,
            anim_phase: 0.0,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Turn a fraction `gain` of the way toward `target`.
    /// Returns the signed heading change applied.
    pub fn steer_toward(&mut self, target: Vec2, gain: f32) -> f32 {
        let bearing = bearing_degrees(self.pos, target);
        let delta = wrap_degrees(bearing - self.heading) * gain;
        self.heading += delta;
        delta
    }

    /// Move along the current heading
    pub fn advance(&mut self, anim_step: f32) {
        self.pos += heading_vector(self.heading) * self.speed;
        self.anim_phase += anim_step;
    }

    pub fn bounding_box(&self, shrink: f32) -> BoundingBox {
        BoundingBox::from_center(self.pos, self.size(), shrink)
    }
}

/// One complete play-through
#[derive(Debug, Clone)]
pub struct Session {
    /// Tuning this session was built with
    pub config: Config,
    /// Seed the session RNG started from
    pub seed: u64,
    rng: Pcg32,
    pub bounds: WorldBounds,
    pub phase: Phase,
    pub obstacles: Vec<Obstacle>,
    pub craft: Craft,
    /// Active pursuers, in spawn order
    pub pursuers: Vec<Pursuer>,
    pub spawner: Spawner,
    pub clock: SessionClock,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    next_id: u32,
}

impl Session {
    /// Build a session: lay out obstacles, then place the craft clear of them
    pub fn new(config: Config, seed: u64) -> Result<Self, SessionError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = WorldBounds::from_config(&config);
        let obstacles = placement::layout_obstacles(&mut rng, &config);
        let craft_pos = placement::place_craft(&mut rng, &config, &obstacles)?;
        let craft = Craft::new(craft_pos, &config);

        log::info!(
            "New session: seed={}, obstacles={}, craft at ({:.0}, {:.0})",
            seed,
            obstacles.len(),
            craft_pos.x,
            craft_pos.y
        );

        Ok(Self {
            spawner: Spawner::new(config.spawn_interval_ticks),
            clock: SessionClock::new(config.session_duration_secs),
            config,
            seed,
            rng,
            bounds,
            phase: Phase::StartScreen,
            obstacles,
            craft,
            pursuers: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        })
    }

    /// Build the next session, seeded from this session's RNG
    pub fn restart(&mut self) -> Result<Session, SessionError> {
        let seed = self.rng.random::<u64>();
        Session::new(self.config.clone(), seed)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a pursuer just outside the world. Returns its id.
    pub fn spawn_pursuer(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = placement::pursuer_spawn_point(&mut self.rng, &self.config);
        let speed = self
            .rng
            .random_range(self.config.pursuer_speed_min..=self.config.pursuer_speed_max);
        self.pursuers.push(Pursuer::new(id, pos, speed, &self.config));
        id
    }

    /// Seconds left on the clock at `now`
    pub fn remaining_secs(&self, now: f64) -> f64 {
        self.clock.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> WorldBounds {
        WorldBounds::new(1500, 900)
    }

    fn craft_at(x: f32, y: f32) -> Craft {
        Craft::new(Vec2::new(x, y), &Config::default())
    }

    #[test]
    fn test_forward_moves_up_at_zero_heading() {
        let mut craft = craft_at(500.0, 500.0);
        craft.apply_intents(
            MovementIntents {
                forward: true,
                ..Default::default()
            },
            &bounds(),
        );
        assert!((craft.pos.x - 500.0).abs() < 1e-4);
        assert!((craft.pos.y - 494.0).abs() < 1e-4);
    }

    #[test]
    fn test_turn_then_translate_uses_new_heading() {
        let mut craft = craft_at(500.0, 500.0);
        craft.heading = 85.0;
        craft.apply_intents(
            MovementIntents {
                turn_right: true,
                forward: true,
                ..Default::default()
            },
            &bounds(),
        );
        assert_eq!(craft.heading, 90.0);
        // Heading 90 points along +x
        assert!((craft.pos.x - 506.0).abs() < 1e-3);
        assert!((craft.pos.y - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_turn_left_is_counter_clockwise() {
        let mut craft = craft_at(500.0, 500.0);
        let turn_left = MovementIntents {
            turn_left: true,
            ..Default::default()
        };
        craft.apply_intents(turn_left, &bounds());
        assert_eq!(craft.heading, -5.0);
        // Nose swings from straight up toward -x
        assert!(craft.forward().x < 0.0);
        assert!(craft.forward().y < 0.0);
    }

    #[test]
    fn test_opposing_intents_cancel() {
        let mut craft = craft_at(500.0, 500.0);
        craft.apply_intents(
            MovementIntents {
                turn_left: true,
                turn_right: true,
                forward: true,
                backward: true,
            },
            &bounds(),
        );
        assert_eq!(craft.heading, 0.0);
        assert!((craft.pos - Vec2::new(500.0, 500.0)).length() < 1e-4);
    }

    #[test]
    fn test_craft_clamped_at_wall() {
        let mut craft = craft_at(16.0, 450.0);
        craft.heading = -90.0; // facing -x
        craft.apply_intents(
            MovementIntents {
                forward: true,
                ..Default::default()
            },
            &bounds(),
        );
        assert_eq!(craft.pos.x, 15.0);
    }

    #[test]
    fn test_pursuer_steers_ten_percent() {
        let config = Config::default();
        let mut pursuer = Pursuer::new(1, Vec2::ZERO, 2.0, &config);
        // Target straight below (+y) is a bearing of 90 degrees
        let delta = pursuer.steer_toward(Vec2::new(0.0, 100.0), config.pursuer_steering_gain);
        assert!((delta - 9.0).abs() < 1e-4);
        assert!((pursuer.heading - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_pursuer_takes_short_way_around() {
        let config = Config::default();
        let mut pursuer = Pursuer::new(1, Vec2::ZERO, 2.0, &config);
        pursuer.heading = 170.0;
        // Bearing -170: the short way is +20 degrees through 180
        let target = heading_vector(-170.0) * 50.0;
        let delta = pursuer.steer_toward(target, 0.1);
        assert!((delta - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_pursuer_advance() {
        let config = Config::default();
        let mut pursuer = Pursuer::new(1, Vec2::new(10.0, 10.0), 3.0, &config);
        pursuer.heading = 90.0;
        pursuer.advance(0.1);
        assert!((pursuer.pos - Vec2::new(10.0, 13.0)).length() < 1e-4);
        assert!((pursuer.anim_phase - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_margin_edge_is_inclusive() {
        let b = bounds();
        assert!(b.contains_with_margin(Vec2::new(-100.0, 450.0), 100.0));
        assert!(!b.contains_with_margin(Vec2::new(-100.01, 450.0), 100.0));
        assert!(b.contains_with_margin(Vec2::new(750.0, 1000.0), 100.0));
        assert!(!b.contains_with_margin(Vec2::new(750.0, 1000.01), 100.0));
        assert!(!b.contains_with_margin(Vec2::new(1600.5, 450.0), 100.0));
    }

    #[test]
    fn test_session_refuses_infinite_pursuer_speed() {
        let config = Config {
            pursuer_speed_max: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(
            Session::new(config, 3),
            Err(SessionError::Config(crate::error::ConfigError::NotFinite { .. }))
        ));
    }

    #[test]
    fn test_new_session_shape() {
        let session = Session::new(Config::default(), 42).expect("placement");
        assert_eq!(session.phase, Phase::StartScreen);
        assert_eq!(session.obstacles.len(), 30);
        assert!(session.pursuers.is_empty());
        assert_eq!(session.spawner.counter(), 0);
        assert!(!session.clock.is_started());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Session::new(Config::default(), 7).expect("placement");
        let b = Session::new(Config::default(), 7).expect("placement");
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.craft.pos, b.craft.pos);
    }

    #[test]
    fn test_spawned_pursuer_speed_in_range() {
        let mut session = Session::new(Config::default(), 3).expect("placement");
        for _ in 0..50 {
            session.spawn_pursuer();
        }
        let ids: Vec<u32> = session.pursuers.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=50).collect::<Vec<_>>());
        for p in &session.pursuers {
            assert!((2.0..=3.5).contains(&p.speed));
        }
    }

    fn intents_strategy() -> impl Strategy<Value = MovementIntents> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(turn_left, turn_right, forward, backward)| MovementIntents {
                turn_left,
                turn_right,
                forward,
                backward,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_craft_stays_in_bounds(
            x in 15.0f32..1485.0,
            y in 20.0f32..880.0,
            heading in -720.0f32..720.0,
            steps in proptest::collection::vec(intents_strategy(), 1..200),
        ) {
            let b = bounds();
            let mut craft = craft_at(x, y);
            craft.heading = heading;
            for intents in steps {
                craft.apply_intents(intents, &b);
                prop_assert!(craft.pos.x >= 15.0 && craft.pos.x <= 1485.0);
                prop_assert!(craft.pos.y >= 20.0 && craft.pos.y <= 880.0);
            }
        }

        #[test]
        fn prop_steering_is_proportional_and_bounded(
            px in -200.0f32..1700.0,
            py in -200.0f32..1100.0,
            tx in 0.0f32..1500.0,
            ty in 0.0f32..900.0,
            heading in -1000.0f32..1000.0,
        ) {
            let config = Config::default();
            let mut pursuer = Pursuer::new(1, Vec2::new(px, py), 2.5, &config);
            pursuer.heading = heading;
            let expected = wrap_degrees(bearing_degrees(pursuer.pos, Vec2::new(tx, ty)) - heading);
            let before = pursuer.heading;
            pursuer.steer_toward(Vec2::new(tx, ty), 0.1);
            let change = pursuer.heading - before;
            prop_assert!((change.abs() - 0.1 * expected.abs()).abs() < 1e-2);
            prop_assert!(change.abs() <= 18.0 + 1e-2);
        }
    }
}
