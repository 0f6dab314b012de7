//! Frame driver
//!
//! [`Game`] owns the simulation state and everything around it: the input
//! latch, player settings, storage, audio, host callbacks and presentation
//! timers. The host calls [`Game::frame`] once per display frame and
//! [`Game::render`] to get the draw commands.

use std::cell::RefCell;
use std::rc::Rc;

use crate::audio::{AudioSink, Cue};
use crate::input::{InputEvent, InputSignal};
use crate::persistence::{self, Storage};
use crate::render::{self, Assets, Screen, Surface};
use crate::settings::Settings;
use crate::sim::{ActorVariant, GameEvent, GamePhase, GameState, difficulty_stars, tick};
use crate::timers::Timers;

/// Delay between the crash and the death sting
pub const DIE_CUE_DELAY: f32 = 0.5;
/// Delay between the crash and the game-over panel
pub const GAME_OVER_REVEAL_DELAY: f32 = 1.0;

/// Notifications for the embedding page/window
pub trait HostEvents {
    fn on_score_changed(&mut self, _score: u32) {}
    /// The run just ended
    fn on_game_over(&mut self, _score: u32, _high_score: u32) {}
    /// The game-over panel is now showing
    fn on_game_over_screen(&mut self, _score: u32, _high_score: u32, _stars: u32) {}
}

/// Host that ignores every notification
#[derive(Debug, Default)]
pub struct NoHost;

impl HostEvents for NoHost {}

/// Which host callback a registration targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCallback {
    Score,
    GameOver,
    GameOverScreen,
}

/// Shared table of host-registered callbacks.
///
/// Handles are cloned out of the table before they are invoked, so a
/// callback may register a new handler while it runs.
pub struct CallbackSlots<F> {
    slots: Rc<RefCell<[Option<F>; 3]>>,
}

impl<F> Clone for CallbackSlots<F> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<F> Default for CallbackSlots<F> {
    fn default() -> Self {
        Self {
            slots: Rc::new(RefCell::new([None, None, None])),
        }
    }
}

impl<F: Clone> CallbackSlots<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, which: HostCallback, f: F) {
        self.slots.borrow_mut()[which as usize] = Some(f);
    }

    pub fn get(&self, which: HostCallback) -> Option<F> {
        self.slots.borrow()[which as usize].clone()
    }
}

/// Delayed presentation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presentation {
    DieCue,
    RevealGameOver,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: InputSignal,
    settings: Settings,
    storage: Box<dyn Storage>,
    audio: Box<dyn AudioSink>,
    host: Box<dyn HostEvents>,
    timers: Timers<Presentation>,
    screen: Screen,
    /// Score beat the stored best this run
    beat_best: bool,
    /// Last high score written to storage
    saved_high_score: u32,
}

impl Game {
    /// Build a game, restoring high score and preferences from `storage`.
    ///
    /// Storage failures are logged and replaced with defaults.
    pub fn new(
        seed: u64,
        storage: Box<dyn Storage>,
        mut audio: Box<dyn AudioSink>,
        host: Box<dyn HostEvents>,
    ) -> Self {
        let settings = Settings::load_or_default(storage.as_ref());
        let high_score = match persistence::load_high_score(storage.as_ref()) {
            Ok(score) => score,
            Err(e) => {
                log::warn!("Could not load high score ({e}); starting from 0");
                0
            }
        };
        audio.set_volume(settings.effective_volume());
        log::info!(
            "Game ready (seed {seed}, best {high_score}, variant {})",
            settings.variant.as_str()
        );

        Self {
            state: GameState::new(seed, high_score, settings.variant),
            input: InputSignal::new(),
            settings,
            storage,
            audio,
            host,
            timers: Timers::new(),
            screen: Screen::Play,
            beat_best: false,
            saved_high_score: high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Feed a raw host input event
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    pub fn request_flap(&mut self) {
        self.input.request_activate();
    }

    pub fn toggle_pause(&mut self) {
        self.input.request_pause();
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
    }

    /// Start the run from the ready screen without flapping
    pub fn start(&mut self) {
        self.state.start();
        self.dispatch_events();
    }

    /// Throw away the current run and go back to the ready screen
    pub fn restart(&mut self) {
        self.timers.cancel_all();
        self.state.reset();
        // Drop requests made during the old run
        let _ = self.input.take();
        self.screen = Screen::Play;
        self.beat_best = false;
        self.play(Cue::Swoosh);
        self.host.on_score_changed(0);
        log::info!("Restarted (best {})", self.state.high_score);
    }

    /// Change and remember the actor colour
    pub fn select_variant(&mut self, variant: ActorVariant) {
        self.settings.variant = variant;
        self.state.set_variant(variant);
        self.save_settings();
        self.play(Cue::Swoosh);
    }

    /// Flip sound on/off; returns the new setting
    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.audio.set_volume(self.settings.effective_volume());
        self.save_settings();
        self.settings.sound_enabled
    }

    pub fn set_debug_overlays(&mut self, collision_boxes: bool, difficulty_info: bool) {
        self.settings.show_collision_boxes = collision_boxes;
        self.settings.show_difficulty_info = difficulty_info;
        self.save_settings();
    }

    /// Advance one display frame of `dt` seconds
    pub fn frame(&mut self, dt: f32) {
        for action in self.timers.advance(dt) {
            self.run_presentation(action);
        }

        let input = self.input.take();
        tick(&mut self.state, &input, dt);
        self.dispatch_events();
    }

    /// Emit this frame's draw commands
    pub fn render(&self, assets: &dyn Assets, out: &mut dyn Surface) {
        render::render_frame(&self.state, &self.settings, assets, self.screen, out);
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => self.play(Cue::Swoosh),
                GameEvent::Flapped => self.play(Cue::Flap),
                GameEvent::Scored { total, .. } => {
                    self.play(Cue::Score);
                    self.host.on_score_changed(total);
                    self.persist_high_score();
                }
                GameEvent::ShieldBroken => self.play(Cue::Hit),
                GameEvent::BonusCollected(_) => self.play(Cue::Score),
                GameEvent::NewHighScore(score) => {
                    self.beat_best = true;
                    log::info!("New high score: {score}");
                }
                GameEvent::Died { score, high_score } => {
                    self.play(Cue::Hit);
                    self.timers.schedule(DIE_CUE_DELAY, Presentation::DieCue);
                    self.timers
                        .schedule(GAME_OVER_REVEAL_DELAY, Presentation::RevealGameOver);
                    self.persist_high_score();
                    self.host.on_game_over(score, high_score);
                }
            }
        }
    }

    fn run_presentation(&mut self, action: Presentation) {
        match action {
            Presentation::DieCue => self.play(Cue::Die),
            Presentation::RevealGameOver => {
                self.screen = Screen::GameOver {
                    new_best: self.beat_best,
                };
                self.host.on_game_over_screen(
                    self.state.score,
                    self.state.high_score,
                    difficulty_stars(self.state.score),
                );
            }
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.settings.sound_enabled {
            self.audio.play(cue);
        }
    }

    fn persist_high_score(&mut self) {
        let best = self.state.high_score;
        if best <= self.saved_high_score {
            return;
        }
        match persistence::save_high_score(self.storage.as_mut(), best) {
            Ok(()) => self.saved_high_score = best,
            Err(e) => log::warn!("Could not save high score: {e}"),
        }
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(self.storage.as_mut()) {
            log::warn!("Could not save settings: {e}");
        }
    }
}
