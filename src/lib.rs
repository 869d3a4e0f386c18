//! Ember Run - a browser arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, homing, game state)
//! - `schedule`: Fixed-cadence cooperative timers
//! - `engine`: Orchestration - ties the sim, scheduler, and ports together
//! - `present`: Presentation and persistence ports consumed by the engine
//! - `platform`: Browser adapters (DOM sprites, LocalStorage)
//! - `input`: Arrow-key intent mapping

pub mod best_time;
pub mod engine;
pub mod input;
pub mod platform;
pub mod present;
pub mod schedule;
pub mod sim;

pub use best_time::BestTimeRecord;
pub use engine::Engine;
pub use input::Intent;

/// Game tuning constants
pub mod consts {
    /// Master game-loop cadence (movement, collisions, culling)
    pub const GAME_TICK_MS: f64 = 20.0;
    /// Hazard homing cadence
    pub const HAZARD_TICK_MS: f64 = 20.0;
    /// Projectile volley cadence
    pub const PROJECTILE_SPAWN_MS: f64 = 500.0;
    /// Pickup drop cadence
    pub const PICKUP_SPAWN_MS: f64 = 10_000.0;
    /// Elapsed-time clock cadence
    pub const CLOCK_MS: f64 = 1_000.0;

    /// Player displacement per held direction per game tick
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 80.0;
    pub const PLAYER_SIZE: f32 = 200.0;

    pub const HAZARD_START_X: f32 = 300.0;
    pub const HAZARD_START_Y: f32 = 300.0;
    pub const HAZARD_SIZE: f32 = 200.0;
    /// Nominal hazard speed (actual movement comes from the homing gain)
    pub const HAZARD_SPEED: f32 = 0.01;

    pub const PROJECTILE_SIZE: f32 = 40.0;
    pub const PROJECTILE_SPEED: f32 = 15.0;
    pub const PICKUP_SIZE: f32 = 50.0;

    /// Proportional-pursuit gain for the hazard (both axes, re-evaluated per tick)
    pub const HAZARD_PULL: f32 = 0.04;
    /// Projectile launch gains (fixed at spawn, never re-targeted)
    pub const PROJECTILE_PULL_X: f32 = 0.05;
    pub const PROJECTILE_PULL_Y: f32 = 0.07;

    pub const START_HEALTH: i32 = 150;
    pub const PROJECTILE_DAMAGE: i32 = 10;
    /// Drained every game tick of continuous hazard contact
    pub const HAZARD_CONTACT_DAMAGE: i32 = 1;
    /// Applied uncapped - healing past the starting value is intentional
    pub const PICKUP_HEAL: i32 = 10;

    /// Pickups spawn inside [0, extent - margin] on each axis
    pub const PICKUP_SPAWN_MARGIN: f32 = 100.0;

    /// The player may keep moving right while its left edge plus a quarter of
    /// its width stays inside the viewport, and down while 80% of its height
    /// still fits above the bottom edge
    pub const CLAMP_WIDTH_FRACTION: f32 = 0.25;
    pub const CLAMP_HEIGHT_FRACTION: f32 = 0.8;
}
