//! Game state and lifecycle
//!
//! The state machine owns every entity plus health, elapsed time, and the
//! best-time record. It is replaced wholesale on restart - never partially
//! mutated across a reset boundary.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityId, EntityKind};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Health depleted; only an external restart leaves this phase
    GameOver,
}

/// A projectile with the velocity it was launched with
#[derive(Debug, Clone)]
pub struct Projectile {
    pub entity: Entity,
    /// Fixed at spawn, never re-targeted
    pub vel: Vec2,
}

/// What a sim operation changed, for the engine to mirror onto the ports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned(EntityId, EntityKind),
    Removed(EntityId),
    HealthChanged(i32),
    ElapsedChanged(u32),
    /// Elapsed time exceeded the previous best; persist immediately
    NewBest(u32),
    /// Emitted exactly once per run, on the tick that depleted health
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed (pickup placement)
    pub seed: u64,
    pub elapsed_secs: u32,
    /// Monotonically non-decreasing across restarts
    pub best_secs: u32,
    /// Floor-clamped to 0 at the terminal transition; deliberately uncapped above
    pub health: i32,
    pub player: Entity,
    pub hazard: Entity,
    pub projectiles: Vec<Projectile>,
    pub pickups: Vec<Entity>,
    pub phase: GamePhase,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Fresh run: full health, fixed origins, empty collections.
    ///
    /// `best_secs` survives restarts and is threaded back in by the caller.
    pub fn new(seed: u64, best_secs: u32) -> Self {
        let player = Entity::new(
            EntityId(1),
            PLAYER_SPEED,
            PLAYER_START_X,
            PLAYER_START_Y,
            EntityKind::Player,
            Vec2::splat(PLAYER_SIZE),
        );
        let hazard = Entity::new(
            EntityId(2),
            HAZARD_SPEED,
            HAZARD_START_X,
            HAZARD_START_Y,
            EntityKind::Hazard,
            Vec2::splat(HAZARD_SIZE),
        );
        Self {
            seed,
            elapsed_secs: 0,
            best_secs,
            health: START_HEALTH,
            player,
            hazard,
            projectiles: Vec::new(),
            pickups: Vec::new(),
            phase: GamePhase::Running,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 3,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Apply a health delta and transition to GameOver at most once.
    ///
    /// Damage within a tick is uncapped (several projectile hits stack), and
    /// so is healing above the starting value. The phase guard ensures a
    /// single terminal transition even when multiple sources fire in the
    /// same tick.
    pub(crate) fn apply_health(&mut self, delta: i32, events: &mut Vec<GameEvent>) {
        self.health = (self.health + delta).max(0);
        events.push(GameEvent::HealthChanged(self.health));
        if self.health == 0 && self.phase == GamePhase::Running {
            self.phase = GamePhase::GameOver;
            events.push(GameEvent::GameOver);
        }
    }
}
