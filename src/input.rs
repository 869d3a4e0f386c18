//! Arrow-key intent mapping
//!
//! Raw key-down/key-up events become a 4-slot held-direction vector. There
//! is deliberately no debouncing and no opposing-key conflict resolution:
//! movement application checks each slot independently, so holding both
//! directions of an axis yields a net displacement of zero.

/// The current held-direction state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intent {
    /// Set a slot from a `KeyboardEvent.key` value; other keys are ignored
    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    /// Clear a slot from a `KeyboardEvent.key` value
    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    fn set(&mut self, key: &str, held: bool) {
        match key {
            "ArrowUp" => self.up = held,
            "ArrowDown" => self.down = held,
            "ArrowLeft" => self.left = held,
            "ArrowRight" => self.right = held,
            _ => {}
        }
    }
}
