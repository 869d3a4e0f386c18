//! In-process adapters
//!
//! `NullPresenter` swallows every draw call behind a fixed viewport and
//! `MemoryBestTime` keeps the record in a field. The native binary runs the
//! engine headless through these; tests use them where a recording fake
//! would be overkill.

use crate::present::{BestTimeStore, PresentError, Presenter, StoreError};
use crate::sim::{EntityId, EntityKind, Viewport};

/// Presenter that renders nothing
#[derive(Debug, Clone)]
pub struct NullPresenter {
    viewport: Viewport,
}

impl NullPresenter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
        }
    }
}

impl Presenter for NullPresenter {
    fn create_visual(&mut self, _id: EntityId, _kind: EntityKind) -> Result<(), PresentError> {
        Ok(())
    }

    fn destroy_visual(&mut self, _id: EntityId) -> Result<(), PresentError> {
        Ok(())
    }

    fn render_entity(&mut self, _id: EntityId, _x: f32, _y: f32) -> Result<(), PresentError> {
        Ok(())
    }

    fn display_elapsed(&mut self, _seconds: u32) -> Result<(), PresentError> {
        Ok(())
    }

    fn display_best(&mut self, _seconds: u32) -> Result<(), PresentError> {
        Ok(())
    }

    fn display_health(&mut self, _value: i32) -> Result<(), PresentError> {
        Ok(())
    }

    fn show_game_over(&mut self) -> Result<(), PresentError> {
        Ok(())
    }

    fn hide_game_over(&mut self) -> Result<(), PresentError> {
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Best-time store backed by a plain field
#[derive(Debug, Clone, Default)]
pub struct MemoryBestTime {
    seconds: u32,
}

impl MemoryBestTime {
    pub fn new(seconds: u32) -> Self {
        Self { seconds }
    }
}

impl BestTimeStore for MemoryBestTime {
    fn load(&mut self) -> u32 {
        self.seconds
    }

    fn save(&mut self, seconds: u32) -> Result<(), StoreError> {
        self.seconds = seconds;
        Ok(())
    }
}
