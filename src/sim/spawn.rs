//! Timed entity creation
//!
//! Projectiles launch from the hazard with a velocity fixed at spawn time;
//! pickups land at a uniformly random spot inside the viewport with a fixed
//! margin. Neither has a concurrency cap or de-duplication.

use glam::Vec2;
use rand::Rng;

use super::entity::{Entity, EntityKind};
use super::homing::projectile_launch;
use super::state::{GameEvent, GameState, Projectile};
use super::tick::Viewport;
use crate::consts::*;

/// One projectile at the hazard's current position, aimed at the player
pub fn spawn_projectile(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let vel = projectile_launch(state.player.pos, state.hazard.pos);
    let id = state.next_entity_id();
    let entity = Entity::new(
        id,
        PROJECTILE_SPEED,
        state.hazard.pos.x,
        state.hazard.pos.y,
        EntityKind::Projectile,
        Vec2::splat(PROJECTILE_SIZE),
    );
    state.projectiles.push(Projectile { entity, vel });
    events.push(GameEvent::Spawned(id, EntityKind::Projectile));
}

/// One pickup, uniformly random in `[0, w-100] x [0, h-100]`.
///
/// A degenerate viewport collapses the spawn region to the origin instead of
/// producing a negative-size range.
pub fn spawn_pickup(state: &mut GameState, viewport: Viewport, events: &mut Vec<GameEvent>) {
    let span_x = (viewport.width - PICKUP_SPAWN_MARGIN).max(0.0);
    let span_y = (viewport.height - PICKUP_SPAWN_MARGIN).max(0.0);
    let x = if span_x > 0.0 {
        state.rng.random_range(0.0..span_x)
    } else {
        0.0
    };
    let y = if span_y > 0.0 {
        state.rng.random_range(0.0..span_y)
    } else {
        0.0
    };

    let id = state.next_entity_id();
    let entity = Entity::new(id, 0.0, x, y, EntityKind::Pickup, Vec2::splat(PICKUP_SIZE));
    state.pickups.push(entity);
    events.push(GameEvent::Spawned(id, EntityKind::Pickup));
}
