//! Presentation and persistence ports
//!
//! The sim core never touches a rendering surface or a storage backend; the
//! engine drives these traits instead. Failures here are fatal to the single
//! call only - the engine logs them and the loop keeps running.

use thiserror::Error;

use crate::sim::{EntityId, EntityKind, Viewport};

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("presentation surface unavailable: {0}")]
    Unavailable(String),
    #[error("no visual exists for entity {0:?}")]
    UnknownEntity(EntityId),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("failed to encode best-time record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Visual surface consumed by the engine.
///
/// Implementations map entity kinds to their sprite assets and size classes;
/// the core only hands over ids, kinds, and positions.
pub trait Presenter {
    fn create_visual(&mut self, id: EntityId, kind: EntityKind) -> Result<(), PresentError>;
    fn destroy_visual(&mut self, id: EntityId) -> Result<(), PresentError>;
    /// Reflect an entity position visually
    fn render_entity(&mut self, id: EntityId, x: f32, y: f32) -> Result<(), PresentError>;
    fn display_elapsed(&mut self, seconds: u32) -> Result<(), PresentError>;
    fn display_best(&mut self, seconds: u32) -> Result<(), PresentError>;
    fn display_health(&mut self, value: i32) -> Result<(), PresentError>;
    fn show_game_over(&mut self) -> Result<(), PresentError>;
    fn hide_game_over(&mut self) -> Result<(), PresentError>;
    /// Queried per movement/spawn decision - the viewport may resize
    fn viewport(&self) -> Viewport;
}

/// Best-time persistence.
///
/// Loaded once at startup; saved the moment a new best is set.
pub trait BestTimeStore {
    /// Returns 0 when no (or a corrupt) record exists
    fn load(&mut self) -> u32;
    fn save(&mut self, seconds: u32) -> Result<(), StoreError>;
}
