//! Ember Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use ember_run::Engine;
    use ember_run::platform::{DomPresenter, LocalStorageBestTime};

    type WebEngine = Engine<DomPresenter, LocalStorageBestTime>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ember Run starting...");

        let presenter = DomPresenter::new().expect("page is missing the game board");
        let store = LocalStorageBestTime::new().expect("LocalStorage unavailable");

        let seed = js_sys::Date::now() as u64;
        let engine = Rc::new(RefCell::new(Engine::new(seed, presenter, store)));
        log::info!("Engine initialized with seed: {}", seed);

        setup_key_handlers(engine.clone());
        setup_restart_button(engine.clone());
        request_animation_frame(engine);

        log::info!("Ember Run running!");
    }

    fn setup_key_handlers(engine: Rc<RefCell<WebEngine>>) {
        let window = web_sys::window().expect("no window");

        {
            let engine = engine.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                engine.borrow_mut().key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                engine.borrow_mut().key_up(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(engine: Rc<RefCell<WebEngine>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                engine.borrow_mut().restart(seed);
                log::info!("Run restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(engine: Rc<RefCell<WebEngine>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(engine, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(engine: Rc<RefCell<WebEngine>>, time: f64) {
        engine.borrow_mut().advance(time);
        request_animation_frame(engine);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ember_run::Engine;
    use ember_run::platform::{MemoryBestTime, NullPresenter};

    env_logger::init();
    log::info!("Ember Run (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless smoke run: ten simulated seconds at 60 fps
    let presenter = NullPresenter::new(1280.0, 720.0);
    let store = MemoryBestTime::default();
    let mut engine = Engine::new(42, presenter, store);

    let mut now_ms = 0.0;
    while now_ms <= 10_000.0 {
        engine.advance(now_ms);
        now_ms += 1000.0 / 60.0;
    }

    let state = engine.state();
    log::info!(
        "Headless run finished: elapsed {} s, health {}, {} projectiles live",
        state.elapsed_secs,
        state.health,
        state.projectiles.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
