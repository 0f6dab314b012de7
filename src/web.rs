//! Browser bindings
//!
//! Thin `wasm_bindgen` wrapper around [`Game`]. The page owns the canvas and
//! the animation-frame loop: it forwards DOM events, calls `frame` with the
//! elapsed milliseconds, and paints the JSON draw list returned by `render`.

use std::sync::Once;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::audio::WebAudio;
use crate::game::{CallbackSlots, Game, HostCallback, HostEvents};
use crate::input::{InputEvent, Key};
use crate::persistence::{LocalStorage, MemoryStorage, Storage};
use crate::render::{Assets, DrawList, Sprite};
use crate::sim::{ActorVariant, GamePhase};

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already installed".into());
        }
    });
}

/// JS callbacks registered by the page
struct JsHost(CallbackSlots<Function>);

impl HostEvents for JsHost {
    fn on_score_changed(&mut self, score: u32) {
        if let Some(f) = self.0.get(HostCallback::Score) {
            let _ = f.call1(&JsValue::NULL, &score.into());
        }
    }

    fn on_game_over(&mut self, score: u32, high_score: u32) {
        if let Some(f) = self.0.get(HostCallback::GameOver) {
            let _ = f.call2(&JsValue::NULL, &score.into(), &high_score.into());
        }
    }

    fn on_game_over_screen(&mut self, score: u32, high_score: u32, stars: u32) {
        if let Some(f) = self.0.get(HostCallback::GameOverScreen) {
            let _ = f.call3(&JsValue::NULL, &score.into(), &high_score.into(), &stars.into());
        }
    }
}

/// Whether the page finished loading its sprite sheet
struct PageAssets {
    loaded: bool,
}

impl Assets for PageAssets {
    fn has_sprite(&self, _sprite: Sprite) -> bool {
        self.loaded
    }
}

#[wasm_bindgen]
pub struct WebGame {
    game: Game,
    callbacks: CallbackSlots<Function>,
    assets: PageAssets,
    draw_list: DrawList,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        init_logging();

        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(s) => Box::new(s),
            Err(e) => {
                log::warn!("{e}; progress will not be saved");
                Box::new(MemoryStorage::new())
            }
        };
        let callbacks = CallbackSlots::new();
        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            seed,
            storage,
            Box::new(WebAudio::new()),
            Box::new(JsHost(callbacks.clone())),
        );
        log::info!("Flap Rush running!");

        WebGame {
            game,
            callbacks,
            assets: PageAssets { loaded: false },
            draw_list: DrawList::new(),
        }
    }

    pub fn set_on_score(&mut self, f: Function) {
        self.callbacks.set(HostCallback::Score, f);
    }

    pub fn set_on_game_over(&mut self, f: Function) {
        self.callbacks.set(HostCallback::GameOver, f);
    }

    pub fn set_on_game_over_screen(&mut self, f: Function) {
        self.callbacks.set(HostCallback::GameOverScreen, f);
    }

    pub fn set_sprites_loaded(&mut self, loaded: bool) {
        self.assets.loaded = loaded;
    }

    /// `KeyboardEvent.key` from a keydown listener
    pub fn key_down(&mut self, key: &str) {
        self.game.handle_input(InputEvent::KeyDown(Key::from_dom(key)));
    }

    pub fn pointer_down(&mut self) {
        self.game.handle_input(InputEvent::PointerDown);
    }

    pub fn touch_start(&mut self) {
        self.game.handle_input(InputEvent::TouchStart);
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn restart(&mut self) {
        self.game.restart();
    }

    pub fn toggle_pause(&mut self) {
        self.game.toggle_pause();
    }

    /// Pause if running (window blur)
    pub fn auto_pause(&mut self) {
        if self.game.phase() == GamePhase::Running {
            self.game.toggle_pause();
            log::info!("Auto-paused (window blur)");
        }
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.game.toggle_sound()
    }

    /// Returns false for an unknown variant name
    pub fn select_variant(&mut self, name: &str) -> bool {
        match ActorVariant::parse(name) {
            Some(variant) => {
                self.game.select_variant(variant);
                true
            }
            None => {
                log::warn!("Unknown actor variant '{name}'");
                false
            }
        }
    }

    pub fn set_debug_overlays(&mut self, collision_boxes: bool, difficulty_info: bool) {
        self.game.set_debug_overlays(collision_boxes, difficulty_info);
    }

    /// Advance by the elapsed milliseconds since the previous frame
    pub fn frame(&mut self, elapsed_ms: f64) {
        self.game.frame((elapsed_ms / 1000.0) as f32);
    }

    /// This frame's draw commands as JSON
    pub fn render(&mut self) -> String {
        self.draw_list.clear();
        self.game.render(&self.assets, &mut self.draw_list);
        match serde_json::to_string(&self.draw_list.commands) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode draw list: {e}");
                "[]".to_string()
            }
        }
    }

    pub fn score(&self) -> u32 {
        self.game.state().score
    }

    pub fn high_score(&self) -> u32 {
        self.game.state().high_score
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.game.phase())
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}
