//! Platform adapters for the presentation and persistence ports
//!
//! - `dom`: browser sprites, HUD widgets, and LocalStorage (wasm32 only)
//! - `memory`: in-process fallbacks for native runs and harnesses

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomPresenter, LocalStorageBestTime};
pub use memory::{MemoryBestTime, NullPresenter};
