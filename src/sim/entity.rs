//! Positioned, sized, moving game objects
//!
//! Entities carry no behavior beyond translation and bounds reporting; all
//! movement policy (homing, input clamping, culling) lives in the tick code.

use glam::Vec2;

use super::collision::Aabb;

/// Stable identifier handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Category tag - determines collision response and sprite choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Hazard,
    Projectile,
    Pickup,
}

/// A positioned, sized, moving object
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    pub pos: Vec2,
    /// Nominal speed; only the player's is consulted (per held direction)
    pub speed: f32,
    pub size: Vec2,
    pub kind: EntityKind,
}

impl Entity {
    /// No validation beyond a non-negative size
    pub fn new(id: EntityId, speed: f32, x: f32, y: f32, kind: EntityKind, size: Vec2) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            speed,
            size: size.max(Vec2::ZERO),
            kind,
        }
    }

    /// Translate unconditionally - the caller owns any bounds checks
    pub fn move_by(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    /// Axis-aligned bounds, consumed only by the collision detector
    pub fn bounding_box(&self) -> Aabb {
        Aabb {
            left: self.pos.x,
            top: self.pos.y,
            right: self.pos.x + self.size.x,
            bottom: self.pos.y + self.size.y,
        }
    }
}
