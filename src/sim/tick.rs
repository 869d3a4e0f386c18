//! Fixed-cadence simulation operations
//!
//! Each function here is one timer-driven activity. The master game tick
//! performs movement, collision, and culling in a fixed order; the other
//! cadences (hazard homing, volleys, pickup drops, the clock) are
//! independent and only share the state they mutate.

use std::mem;

use glam::Vec2;

use super::collision::overlaps;
use super::homing::hazard_pursuit;
use super::spawn;
use super::state::{GameEvent, GameState};
use crate::consts::*;
use crate::input::Intent;

/// Viewport extent, re-queried per movement/spawn decision (it may resize).
///
/// The constructor clamps zero/negative reports so downstream arithmetic
/// never sees a negative region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

/// Master game tick: advance projectiles, resolve collisions, apply input.
///
/// Steps run in a fixed order; a mid-tick GameOver does not abort the
/// remaining steps (inherited behavior - the terminal transition itself is
/// still emitted exactly once).
pub fn game_tick(state: &mut GameState, intent: &Intent, viewport: Viewport) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    // 1. Advance projectiles by their stored velocity, then cull anything
    //    strictly outside the viewport on either axis. Filter/rebuild, so
    //    removal never shifts indices mid-iteration.
    for p in &mut state.projectiles {
        let vel = p.vel;
        p.entity.move_by(vel);
    }
    let moved = mem::take(&mut state.projectiles);
    let mut kept = Vec::with_capacity(moved.len());
    for p in moved {
        let pos = p.entity.pos;
        let gone =
            pos.x < 0.0 || pos.x > viewport.width || pos.y < 0.0 || pos.y > viewport.height;
        if gone {
            events.push(GameEvent::Removed(p.entity.id));
        } else {
            kept.push(p);
        }
    }
    state.projectiles = kept;

    let player_box = state.player.bounding_box();

    // 2. Projectile hits: damage and immediate removal
    let live = mem::take(&mut state.projectiles);
    let mut kept = Vec::with_capacity(live.len());
    for p in live {
        if overlaps(&player_box, &p.entity.bounding_box()) {
            events.push(GameEvent::Removed(p.entity.id));
            state.apply_health(-PROJECTILE_DAMAGE, &mut events);
        } else {
            kept.push(p);
        }
    }
    state.projectiles = kept;

    // 3. Hazard contact drains every tick it persists, uncapped
    if overlaps(&player_box, &state.hazard.bounding_box()) {
        state.apply_health(-HAZARD_CONTACT_DAMAGE, &mut events);
    }

    // 4. Pickups heal (uncapped above the starting value) and are consumed
    let pickups = mem::take(&mut state.pickups);
    let mut kept = Vec::with_capacity(pickups.len());
    for pickup in pickups {
        if overlaps(&player_box, &pickup.bounding_box()) {
            events.push(GameEvent::Removed(pickup.id));
            state.apply_health(PICKUP_HEAL, &mut events);
        } else {
            kept.push(pickup);
        }
    }
    state.pickups = kept;

    // 5. The terminal transition already fired inside apply_health if any
    //    of the deltas above depleted health.

    // 6. Player movement from the held-direction intent. Each direction is
    //    gated independently by its own bounds pre-check, so opposing keys
    //    both apply and cancel out naturally.
    let speed = state.player.speed;
    let player = &mut state.player;
    if intent.left && player.pos.x > 0.0 {
        player.move_by(Vec2::new(-speed, 0.0));
    }
    if intent.up && player.pos.y > 0.0 {
        player.move_by(Vec2::new(0.0, -speed));
    }
    if intent.down && player.pos.y + player.size.y * CLAMP_HEIGHT_FRACTION < viewport.height {
        player.move_by(Vec2::new(0.0, speed));
    }
    if intent.right && player.pos.x + player.size.x * CLAMP_WIDTH_FRACTION < viewport.width {
        player.move_by(Vec2::new(speed, 0.0));
    }

    events
}

/// Hazard homing tick: re-target and step toward the player
pub fn hazard_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    let step = hazard_pursuit(state.player.pos, state.hazard.pos);
    state.hazard.move_by(step);
}

/// Projectile volley: one projectile from the hazard, aimed once
pub fn projectile_volley(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_running() {
        spawn::spawn_projectile(state, &mut events);
    }
    events
}

/// Pickup drop at a uniformly random viewport position
pub fn pickup_drop(state: &mut GameState, viewport: Viewport) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_running() {
        spawn::spawn_pickup(state, viewport, &mut events);
    }
    events
}

/// Elapsed-time clock: one second per fire, best-time updated the moment it
/// is exceeded (never batched)
pub fn clock_tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    state.elapsed_secs += 1;
    events.push(GameEvent::ElapsedChanged(state.elapsed_secs));
    if state.elapsed_secs > state.best_secs {
        state.best_secs = state.elapsed_secs;
        events.push(GameEvent::NewBest(state.best_secs));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Entity, EntityKind};
    use crate::sim::state::Projectile;

    const VIEW: Viewport = Viewport {
        width: 1000.0,
        height: 800.0,
    };

    fn push_projectile(state: &mut GameState, x: f32, y: f32, vel: Vec2) {
        let id = state.next_entity_id();
        let entity = Entity::new(
            id,
            PROJECTILE_SPEED,
            x,
            y,
            EntityKind::Projectile,
            Vec2::splat(PROJECTILE_SIZE),
        );
        state.projectiles.push(Projectile { entity, vel });
    }

    /// A state where nothing touches anything by default
    fn quiet_state() -> GameState {
        let mut state = GameState::new(1, 0);
        state.hazard.pos = Vec2::new(700.0, 600.0);
        state
    }

    #[test]
    fn hazard_tick_matches_pursuit_scenario() {
        let mut state = GameState::new(1, 0);
        // fixed origins: player (100,80), hazard (300,300)
        hazard_tick(&mut state);
        assert!((state.hazard.pos.x - 292.0).abs() < 1e-4);
        assert!((state.hazard.pos.y - 292.0).abs() < 1e-4);
    }

    #[test]
    fn projectile_advances_by_stored_velocity() {
        let mut state = quiet_state();
        push_projectile(&mut state, 500.0, 500.0, Vec2::new(-9.6, -14.84));
        game_tick(&mut state, &Intent::default(), VIEW);
        let p = &state.projectiles[0];
        assert!((p.entity.pos.x - 490.4).abs() < 1e-3);
        assert!((p.entity.pos.y - 485.16).abs() < 1e-3);
    }

    #[test]
    fn projectile_is_culled_on_the_tick_it_leaves() {
        let mut state = quiet_state();
        // heading left, still inside after the first step
        push_projectile(&mut state, 8.0, 400.0, Vec2::new(-5.0, 0.0));

        let events = game_tick(&mut state, &Intent::default(), VIEW);
        assert_eq!(state.projectiles.len(), 1, "still at x=3, not culled yet");
        assert!(events.iter().all(|e| !matches!(e, GameEvent::Removed(_))));

        let events = game_tick(&mut state, &Intent::default(), VIEW);
        assert!(state.projectiles.is_empty(), "x=-2 leaves the viewport");
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::Removed(_)))
        );
    }

    #[test]
    fn projectile_hit_costs_ten_and_removes_it() {
        let mut state = quiet_state();
        // stationary projectile on top of the player
        let (px, py) = (state.player.pos.x, state.player.pos.y);
        push_projectile(&mut state, px, py, Vec2::ZERO);
        let events = game_tick(&mut state, &Intent::default(), VIEW);
        assert_eq!(state.health, 140);
        assert!(state.projectiles.is_empty());
        assert!(events.contains(&GameEvent::HealthChanged(140)));
    }

    #[test]
    fn hazard_contact_drains_one_per_tick() {
        let mut state = GameState::new(1, 0);
        state.hazard.pos = state.player.pos;
        for _ in 0..3 {
            game_tick(&mut state, &Intent::default(), VIEW);
        }
        assert_eq!(state.health, 147);
    }

    #[test]
    fn pickup_heals_past_150() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.pickups.push(Entity::new(
            id,
            0.0,
            state.player.pos.x,
            state.player.pos.y,
            EntityKind::Pickup,
            Vec2::splat(PICKUP_SIZE),
        ));
        let events = game_tick(&mut state, &Intent::default(), VIEW);
        assert_eq!(state.health, 160, "healing is deliberately uncapped");
        assert!(state.pickups.is_empty());
        assert!(events.contains(&GameEvent::Removed(id)));
    }

    #[test]
    fn simultaneous_damage_sources_yield_one_game_over() {
        let mut state = GameState::new(1, 0);
        state.health = 5;
        state.hazard.pos = state.player.pos;
        let (px, py) = (state.player.pos.x, state.player.pos.y);
        push_projectile(&mut state, px, py, Vec2::ZERO);

        let events = game_tick(&mut state, &Intent::default(), VIEW);
        let game_overs = events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver))
            .count();
        assert_eq!(game_overs, 1);
        assert_eq!(state.health, 0);
        assert!(!state.is_running());
    }

    #[test]
    fn opposing_keys_cancel_out() {
        let mut state = quiet_state();
        let start = state.player.pos;
        let intent = Intent {
            left: true,
            right: true,
            ..Intent::default()
        };
        game_tick(&mut state, &intent, VIEW);
        assert_eq!(state.player.pos, start, "both moves apply, net zero");
    }

    #[test]
    fn movement_respects_edge_pre_checks() {
        let mut state = quiet_state();
        state.player.pos = Vec2::new(0.0, 0.0);
        let intent = Intent {
            left: true,
            up: true,
            ..Intent::default()
        };
        game_tick(&mut state, &intent, VIEW);
        assert_eq!(state.player.pos, Vec2::ZERO, "blocked at the origin edges");

        // right is gated on x + width/4 < viewport width
        let mut state = quiet_state();
        state.player.pos = Vec2::new(VIEW.width - PLAYER_SIZE * 0.25, 300.0);
        let intent = Intent {
            right: true,
            ..Intent::default()
        };
        game_tick(&mut state, &intent, VIEW);
        assert_eq!(state.player.pos.x, VIEW.width - PLAYER_SIZE * 0.25);

        // down is gated on y + 80% of height < viewport height
        let mut state = quiet_state();
        state.player.pos = Vec2::new(300.0, VIEW.height - PLAYER_SIZE * 0.8);
        let intent = Intent {
            down: true,
            ..Intent::default()
        };
        game_tick(&mut state, &intent, VIEW);
        assert_eq!(state.player.pos.y, VIEW.height - PLAYER_SIZE * 0.8);
    }

    #[test]
    fn clock_updates_best_only_when_exceeded() {
        let mut state = GameState::new(1, 5);
        for _ in 0..5 {
            let events = clock_tick(&mut state);
            assert!(
                events.iter().all(|e| !matches!(e, GameEvent::NewBest(_))),
                "best of 5 stands through second {}",
                state.elapsed_secs
            );
        }
        let events = clock_tick(&mut state);
        assert!(events.contains(&GameEvent::NewBest(6)));
        assert_eq!(state.best_secs, 6);
    }

    #[test]
    fn fresh_run_sets_best_at_second_one() {
        let mut state = GameState::new(1, 0);
        let events = clock_tick(&mut state);
        assert!(events.contains(&GameEvent::NewBest(1)));
    }

    #[test]
    fn nothing_advances_after_game_over() {
        let mut state = GameState::new(1, 0);
        state.health = 1;
        state.hazard.pos = state.player.pos;
        game_tick(&mut state, &Intent::default(), VIEW);
        assert!(!state.is_running());

        let hazard_pos = state.hazard.pos;
        hazard_tick(&mut state);
        assert_eq!(state.hazard.pos, hazard_pos);
        assert!(projectile_volley(&mut state).is_empty());
        assert!(pickup_drop(&mut state, VIEW).is_empty());
        assert!(clock_tick(&mut state).is_empty());
        assert!(game_tick(&mut state, &Intent::default(), VIEW).is_empty());
    }
}
