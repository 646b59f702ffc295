//! Collision detection
//!
//! Every entity is approximated by an axis-aligned box centered on it and
//! shrunk to a fraction of its nominal size, which forgives the empty corners
//! around the boat and shark silhouettes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Craft, Obstacle, Pursuer};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl BoundingBox {
    /// Box of `size * shrink` centered on `center`
    pub fn from_center(center: Vec2, size: Vec2, shrink: f32) -> Self {
        let half = size * shrink / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes; boxes that only share an edge don't collide
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Whether two boxes collide (symmetric)
#[inline]
pub fn collides(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}

/// What the craft ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Index into the session's obstacle list
    Obstacle { index: usize },
    /// Pursuer id
    Pursuer { id: u32 },
}

/// First collision between the craft and anything else, obstacles checked first
pub fn find_collision(
    craft: &Craft,
    obstacles: &[Obstacle],
    pursuers: &[Pursuer],
    shrink: f32,
) -> Option<Collision> {
    let craft_box = craft.bounding_box(shrink);

    if let Some(index) = obstacles
        .iter()
        .position(|o| collides(&craft_box, &o.bounding_box(shrink)))
    {
        return Some(Collision::Obstacle { index });
    }

    pursuers
        .iter()
        .find(|p| collides(&craft_box, &p.bounding_box(shrink)))
        .map(|p| Collision::Pursuer { id: p.id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::consts::COLLISION_SHRINK;
    use proptest::prelude::*;

    #[test]
    fn test_box_shrinks_around_center() {
        let b = BoundingBox::from_center(Vec2::new(100.0, 100.0), Vec2::new(30.0, 60.0), 2.0 / 3.0);
        assert!((b.size() - Vec2::new(20.0, 40.0)).length() < 1e-4);
        assert!((b.min - Vec2::new(90.0, 80.0)).length() < 1e-4);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = BoundingBox {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(10.0, 10.0),
        };
        let b = BoundingBox {
            min: Vec2::new(10.0, 0.0),
            max: Vec2::new(20.0, 10.0),
        };
        assert!(!collides(&a, &b));

        let c = BoundingBox {
            min: Vec2::new(9.9, 9.9),
            max: Vec2::new(20.0, 20.0),
        };
        assert!(collides(&a, &c));
    }

    #[test]
    fn test_find_collision_obstacle() {
        let config = Config::default();
        let craft = Craft::new(Vec2::new(200.0, 200.0), &config);
        let obstacles = [
            Obstacle::new(Vec2::new(600.0, 600.0), 20),
            Obstacle::new(Vec2::new(215.0, 200.0), 10),
        ];
        let hit = find_collision(&craft, &obstacles, &[], COLLISION_SHRINK);
        assert_eq!(hit, Some(Collision::Obstacle { index: 1 }));
    }

    #[test]
    fn test_find_collision_pursuer() {
        let config = Config::default();
        let craft = Craft::new(Vec2::new(200.0, 200.0), &config);
        let far = Pursuer::new(1, Vec2::new(900.0, 200.0), 2.0, &config);
        let near = Pursuer::new(2, Vec2::new(225.0, 205.0), 2.0, &config);
        let hit = find_collision(&craft, &[], &[far, near], COLLISION_SHRINK);
        assert_eq!(hit, Some(Collision::Pursuer { id: 2 }));
    }

    #[test]
    fn test_no_collision_when_clear() {
        let config = Config::default();
        let craft = Craft::new(Vec2::new(200.0, 200.0), &config);
        // Craft half-extent 10, obstacle half-extent 2/3 * 25 = 16.7
        let obstacles = [Obstacle::new(Vec2::new(230.0, 200.0), 25)];
        assert_eq!(find_collision(&craft, &obstacles, &[], COLLISION_SHRINK), None);
    }

    fn box_strategy() -> impl Strategy<Value = BoundingBox> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0).prop_map(
            |(x, y, w, h)| BoundingBox::from_center(Vec2::new(x, y), Vec2::new(w, h), 1.0),
        )
    }

    proptest! {
        #[test]
        fn prop_collides_is_symmetric(a in box_strategy(), b in box_strategy()) {
            prop_assert_eq!(collides(&a, &b), collides(&b, &a));
        }
    }
}
