//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed cadences only, driven from the scheduler
//! - Seeded RNG only
//! - No rendering or platform dependencies - changes are reported as
//!   [`GameEvent`]s and mapped to ports by the engine

pub mod collision;
pub mod entity;
pub mod homing;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, overlaps};
pub use entity::{Entity, EntityId, EntityKind};
pub use homing::{hazard_pursuit, projectile_launch};
pub use state::{GameEvent, GamePhase, GameState, Projectile};
pub use tick::{Viewport, clock_tick, game_tick, hazard_tick, pickup_drop, projectile_volley};
