//! Browser adapters (wasm32 only)
//!
//! Entities are absolutely-positioned `<img>` sprites under the `#board`
//! element; the HUD lives in `#time`, `#best-time`, and the `#hp` progress
//! bar; `#game-over` is an overlay toggled through its class attribute. The
//! best time persists in LocalStorage as a versioned JSON record.

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlImageElement, HtmlProgressElement, Storage};

use crate::best_time::{BestTimeRecord, STORAGE_KEY};
use crate::present::{BestTimeStore, PresentError, Presenter, StoreError};
use crate::sim::{EntityId, EntityKind, Viewport};

fn js_unavailable(context: &str, value: JsValue) -> PresentError {
    PresentError::Unavailable(format!("{context}: {value:?}"))
}

/// Sprite asset and CSS class for an entity kind
fn sprite_for(kind: EntityKind) -> (&'static str, &'static str) {
    match kind {
        EntityKind::Player => ("assets/player.webp", "player"),
        EntityKind::Hazard => ("assets/hazard.webp", "hazard"),
        EntityKind::Projectile => ("assets/projectile.webp", "projectile"),
        EntityKind::Pickup => ("assets/pickup.webp", "pickup"),
    }
}

/// Presenter backed by the page DOM
pub struct DomPresenter {
    document: Document,
    board: Element,
    sprites: HashMap<EntityId, HtmlImageElement>,
}

impl DomPresenter {
    pub fn new() -> Result<Self, PresentError> {
        let window = web_sys::window()
            .ok_or_else(|| PresentError::Unavailable("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PresentError::Unavailable("no document".to_string()))?;
        let board = document
            .get_element_by_id("board")
            .ok_or_else(|| PresentError::Unavailable("no #board element".to_string()))?;
        Ok(Self {
            document,
            board,
            sprites: HashMap::new(),
        })
    }

    fn hud_element(&self, id: &str) -> Result<Element, PresentError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| PresentError::Unavailable(format!("no #{id} element")))
    }

    fn set_hud_text(&self, id: &str, text: &str) -> Result<(), PresentError> {
        self.hud_element(id)?.set_text_content(Some(text));
        Ok(())
    }
}

impl Presenter for DomPresenter {
    fn create_visual(&mut self, id: EntityId, kind: EntityKind) -> Result<(), PresentError> {
        let img: HtmlImageElement = self
            .document
            .create_element("img")
            .map_err(|e| js_unavailable("create <img>", e))?
            .dyn_into()
            .map_err(|e| js_unavailable("not an <img>", e.into()))?;

        let (src, class) = sprite_for(kind);
        img.set_src(src);
        img.set_attribute("class", class)
            .map_err(|e| js_unavailable("set class", e))?;
        self.board
            .append_child(&img)
            .map_err(|e| js_unavailable("append sprite", e))?;

        // A replaced visual loses its old element
        if let Some(old) = self.sprites.insert(id, img) {
            old.remove();
        }
        Ok(())
    }

    fn destroy_visual(&mut self, id: EntityId) -> Result<(), PresentError> {
        let img = self
            .sprites
            .remove(&id)
            .ok_or(PresentError::UnknownEntity(id))?;
        img.remove();
        Ok(())
    }

    fn render_entity(&mut self, id: EntityId, x: f32, y: f32) -> Result<(), PresentError> {
        let img = self
            .sprites
            .get(&id)
            .ok_or(PresentError::UnknownEntity(id))?;
        let style = img.style();
        style
            .set_property("left", &format!("{x}px"))
            .map_err(|e| js_unavailable("set left", e))?;
        style
            .set_property("top", &format!("{y}px"))
            .map_err(|e| js_unavailable("set top", e))?;
        Ok(())
    }

    fn display_elapsed(&mut self, seconds: u32) -> Result<(), PresentError> {
        self.set_hud_text("time", &seconds.to_string())
    }

    fn display_best(&mut self, seconds: u32) -> Result<(), PresentError> {
        self.set_hud_text("best-time", &seconds.to_string())
    }

    fn display_health(&mut self, value: i32) -> Result<(), PresentError> {
        let bar: HtmlProgressElement = self
            .hud_element("hp")?
            .dyn_into()
            .map_err(|e| js_unavailable("#hp is not a <progress>", e.into()))?;
        bar.set_value(f64::from(value.max(0)));
        Ok(())
    }

    fn show_game_over(&mut self) -> Result<(), PresentError> {
        self.hud_element("game-over")?
            .set_attribute("class", "")
            .map_err(|e| js_unavailable("show overlay", e))
    }

    fn hide_game_over(&mut self) -> Result<(), PresentError> {
        self.hud_element("game-over")?
            .set_attribute("class", "hidden")
            .map_err(|e| js_unavailable("hide overlay", e))
    }

    fn viewport(&self) -> Viewport {
        let size = web_sys::window().map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()),
                w.inner_height().ok().and_then(|v| v.as_f64()),
            )
        });
        match size {
            Some((Some(w), Some(h))) => Viewport::new(w as f32, h as f32),
            _ => Viewport::new(0.0, 0.0),
        }
    }
}

/// Best-time store backed by LocalStorage
pub struct LocalStorageBestTime {
    storage: Storage,
}

impl LocalStorageBestTime {
    pub fn new() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl BestTimeStore for LocalStorageBestTime {
    fn load(&mut self) -> u32 {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(json)) => match BestTimeRecord::decode(&json) {
                Some(record) => {
                    log::info!("Restored best time: {} s", record.seconds);
                    record.seconds
                }
                None => {
                    log::warn!("Discarding unreadable best-time record");
                    0
                }
            },
            _ => {
                log::info!("No stored best time, starting fresh");
                0
            }
        }
    }

    fn save(&mut self, seconds: u32) -> Result<(), StoreError> {
        let json = BestTimeRecord::new(seconds).encode()?;
        self.storage
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
