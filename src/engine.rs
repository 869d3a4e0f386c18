//! Engine orchestration
//!
//! Owns the game state, the scheduler, the input intent, and the two ports.
//! The shell feeds it raw key events and animation-frame timestamps; the
//! engine drains due timer fires, runs the matching sim operations, and
//! mirrors the resulting [`GameEvent`]s onto the presenter and the store.

use glam::Vec2;

use crate::input::Intent;
use crate::present::{BestTimeStore, Presenter};
use crate::schedule::{Activity, Scheduler};
use crate::sim::{
    EntityId, GameEvent, GameState, clock_tick, game_tick, hazard_tick, pickup_drop,
    projectile_volley,
};

/// Log-and-skip policy for port failures: fatal to the call, never the loop
fn log_skip<E: std::fmt::Display>(what: &str, result: Result<(), E>) {
    if let Err(err) = result {
        log::warn!("{what} failed, skipping: {err}");
    }
}

pub struct Engine<P: Presenter, S: BestTimeStore> {
    state: GameState,
    scheduler: Scheduler,
    intent: Intent,
    presenter: P,
    store: S,
    last_time_ms: Option<f64>,
}

impl<P: Presenter, S: BestTimeStore> Engine<P, S> {
    /// Boot a fresh run: load the persisted best, arm the timers, and put
    /// the initial picture on screen.
    pub fn new(seed: u64, presenter: P, mut store: S) -> Self {
        let best = store.load();
        log::info!("starting run, seed {seed}, best {best}s");
        let mut engine = Self {
            state: GameState::new(seed, best),
            scheduler: Scheduler::new(),
            intent: Intent::default(),
            presenter,
            store,
            last_time_ms: None,
        };
        engine.init_presentation();
        engine
    }

    /// Full reset: the old scheduler is cancelled before the new one is
    /// armed, the state is replaced wholesale, and only the best time
    /// carries over.
    pub fn restart(&mut self, seed: u64) {
        self.scheduler.cancel();
        self.teardown_presentation();

        log::info!("restarting, seed {seed}, best {}s", self.state.best_secs);
        self.state = GameState::new(seed, self.state.best_secs);
        self.scheduler = Scheduler::new();
        self.intent = Intent::default();
        self.init_presentation();
    }

    /// Drive the engine from an animation-frame timestamp (milliseconds)
    pub fn advance(&mut self, now_ms: f64) {
        let dt_ms = match self.last_time_ms {
            Some(last) => now_ms - last,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        let mut fired = Vec::new();
        self.scheduler.advance(dt_ms, &mut fired);
        for activity in fired {
            self.run_activity(activity);
        }
    }

    pub fn key_down(&mut self, key: &str) {
        self.intent.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.intent.key_up(key);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn run_activity(&mut self, activity: Activity) {
        match activity {
            Activity::Clock => {
                let events = clock_tick(&mut self.state);
                self.handle_events(events);
            }
            Activity::HazardHoming => {
                if self.state.is_running() {
                    hazard_tick(&mut self.state);
                    self.render(self.state.hazard.id, self.state.hazard.pos);
                }
            }
            Activity::ProjectileVolley => {
                let events = projectile_volley(&mut self.state);
                self.handle_events(events);
            }
            Activity::PickupDrop => {
                let viewport = self.presenter.viewport();
                let events = pickup_drop(&mut self.state, viewport);
                self.handle_events(events);
            }
            Activity::GameTick => {
                let viewport = self.presenter.viewport();
                let events = game_tick(&mut self.state, &self.intent, viewport);
                self.handle_events(events);
                self.render(self.state.player.id, self.state.player.pos);
                for i in 0..self.state.projectiles.len() {
                    let p = &self.state.projectiles[i];
                    let (id, pos) = (p.entity.id, p.entity.pos);
                    self.render(id, pos);
                }
            }
        }
    }

    fn handle_events(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Spawned(id, kind) => {
                    log_skip("create_visual", self.presenter.create_visual(id, kind));
                    if let Some(pos) = self.entity_pos(id) {
                        self.render(id, pos);
                    }
                }
                GameEvent::Removed(id) => {
                    log_skip("destroy_visual", self.presenter.destroy_visual(id));
                }
                GameEvent::HealthChanged(value) => {
                    log_skip("display_health", self.presenter.display_health(value));
                }
                GameEvent::ElapsedChanged(seconds) => {
                    log_skip("display_elapsed", self.presenter.display_elapsed(seconds));
                }
                GameEvent::NewBest(seconds) => {
                    // persisted the moment it is set, not batched
                    log_skip("best-time save", self.store.save(seconds));
                    log_skip("display_best", self.presenter.display_best(seconds));
                }
                GameEvent::GameOver => {
                    // the single cancellation pass for this run
                    self.scheduler.cancel();
                    log_skip("show_game_over", self.presenter.show_game_over());
                    log::info!(
                        "game over after {}s (best {}s)",
                        self.state.elapsed_secs,
                        self.state.best_secs
                    );
                }
            }
        }
    }

    fn init_presentation(&mut self) {
        log_skip("hide_game_over", self.presenter.hide_game_over());
        let player = (self.state.player.id, self.state.player.kind, self.state.player.pos);
        let hazard = (self.state.hazard.id, self.state.hazard.kind, self.state.hazard.pos);
        for (id, kind, pos) in [player, hazard] {
            log_skip("create_visual", self.presenter.create_visual(id, kind));
            self.render(id, pos);
        }
        log_skip("display_health", self.presenter.display_health(self.state.health));
        log_skip(
            "display_elapsed",
            self.presenter.display_elapsed(self.state.elapsed_secs),
        );
        log_skip("display_best", self.presenter.display_best(self.state.best_secs));
    }

    fn teardown_presentation(&mut self) {
        let mut ids = vec![self.state.player.id, self.state.hazard.id];
        ids.extend(self.state.projectiles.iter().map(|p| p.entity.id));
        ids.extend(self.state.pickups.iter().map(|p| p.id));
        for id in ids {
            log_skip("destroy_visual", self.presenter.destroy_visual(id));
        }
    }

    fn render(&mut self, id: EntityId, pos: Vec2) {
        log_skip("render_entity", self.presenter.render_entity(id, pos.x, pos.y));
    }

    fn entity_pos(&self, id: EntityId) -> Option<Vec2> {
        if id == self.state.player.id {
            return Some(self.state.player.pos);
        }
        if id == self.state.hazard.id {
            return Some(self.state.hazard.pos);
        }
        self.state
            .projectiles
            .iter()
            .map(|p| &p.entity)
            .chain(self.state.pickups.iter())
            .find(|e| e.id == id)
            .map(|e| e.pos)
    }
}
