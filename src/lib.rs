//! Flap Rush - a side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `game`: Frame driver wiring the simulation to input, audio, storage and host UI
//! - `render`: Draw-command generation with sprite/fallback-shape selection
//! - `persistence`: High score and preference storage
//! - `settings`: Player preferences

pub mod audio;
pub mod game;
pub mod input;
pub mod persistence;
pub mod render;
pub mod settings;
pub mod sim;
pub mod timers;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{Game, HostEvents};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest frame delta the simulation will integrate in one step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 480.0;
    pub const GAME_HEIGHT: f32 = 640.0;
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Scroll speed (pixels/s)
    pub const BASE_SPEED: f32 = 200.0;
    pub const MAX_SPEED: f32 = 400.0;

    /// Vertical opening between a top and bottom obstacle
    pub const INITIAL_GAP: f32 = 150.0;
    pub const MIN_GAP: f32 = 100.0;

    /// Seconds between obstacle pair spawns
    pub const INITIAL_SPAWN_INTERVAL: f32 = 1.5;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.8;

    /// Score at which red obstacles start to appear
    pub const SPECIAL_OBSTACLE_SCORE: u32 = 25;
    /// Chance of a special obstacle once enabled
    pub const SPECIAL_OBSTACLE_CHANCE: f64 = 0.2;
    /// Score at which the gap-center band stops narrowing
    pub const GAP_VARIATION_SATURATION_SCORE: u32 = 50;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 52.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 34.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;
    /// Horizontal position as a fraction of the playfield width
    pub const ACTOR_X_RATIO: f32 = 0.3;
    pub const GRAVITY: f32 = 900.0;
    /// Negative because y grows downward
    pub const FLAP_IMPULSE: f32 = -350.0;
    pub const MAX_FALL_SPEED: f32 = 400.0;
    /// Pixels of forgiveness on each side of the actor hit box
    pub const COLLISION_INSET: f32 = 4.0;
    pub const ANIMATION_FRAME_DURATION: f32 = 0.1;
    pub const ANIMATION_FRAMES: usize = 3;

    /// Bonus pickups
    pub const BONUS_SIZE: f32 = 40.0;
    pub const BONUS_SPAWN_INTERVAL: f32 = 10.0;
    pub const BONUS_MIN_SCORE: u32 = 10;
    pub const BONUS_SPAWN_MARGIN: f32 = 100.0;
    pub const BONUS_BOB_AMOUNT: f32 = 10.0;

    /// Power-up durations (seconds)
    pub const SHIELD_DURATION: f32 = 5.0;
    pub const SLOW_MOTION_DURATION: f32 = 5.0;
    pub const SLOW_MOTION_FACTOR: f32 = 0.5;
    pub const SCORE_BOOST_DURATION: f32 = 10.0;

    /// Cosmetic effect lifetime (seconds)
    pub const EFFECT_LIFETIME: f32 = 1.5;

    /// Difficulty stars shown on the HUD
    pub const MAX_DIFFICULTY_STARS: u32 = 5;
}

/// Clamp a raw frame delta into a range the integrator can handle.
///
/// Negative, NaN and infinite deltas become zero; huge deltas (tab switches,
/// debugger pauses) are capped at [`consts::MAX_FRAME_DT`].
#[inline]
pub fn sanitize_dt(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(consts::MAX_FRAME_DT)
    }
}
