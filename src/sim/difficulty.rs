//! Score-driven difficulty curve
//!
//! Pure step functions of the cumulative score, re-evaluated every frame.


use crate::consts::*;

/// Tuning values derived from the current score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Scroll speed for the world (pixels/s)
    pub speed: f32,
    /// Vertical gap between obstacle pair members
    pub gap: f32,
    /// Seconds between obstacle pair spawns
    pub spawn_interval: f32,
    /// Whether red obstacles may appear
    pub special_obstacles: bool,
}

impl Default for Difficulty {
    fn default() -> Self {
        difficulty_for_score(0)
    }
}

/// +10% speed every 5 points, capped at [`MAX_SPEED`]
pub fn speed_for_score(score: u32) -> f32 {
    let level = (score / 5) as f32;
    (BASE_SPEED * (1.0 + 0.1 * level)).min(MAX_SPEED)
}

/// -5 px of gap every 10 points, floored at [`MIN_GAP`]
pub fn gap_for_score(score: u32) -> f32 {
    let reduction = (score / 10) as f32 * 5.0;
    (INITIAL_GAP - reduction).max(MIN_GAP)
}

/// -0.1 s of spawn interval every 15 points, floored at [`MIN_SPAWN_INTERVAL`]
pub fn spawn_interval_for_score(score: u32) -> f32 {
    let reduction = (score / 15) as f32 * 0.1;
    (INITIAL_SPAWN_INTERVAL - reduction).max(MIN_SPAWN_INTERVAL)
}

/// Full difficulty snapshot for a score
pub fn difficulty_for_score(score: u32) -> Difficulty {
    Difficulty {
        speed: speed_for_score(score),
        gap: gap_for_score(score),
        spawn_interval: spawn_interval_for_score(score),
        special_obstacles: score >= SPECIAL_OBSTACLE_SCORE,
    }
}

/// Difficulty stars shown on the HUD and game-over screen (0..=5)
pub fn difficulty_stars(score: u32) -> u32 {
    (score / 10).min(MAX_DIFFICULTY_STARS)
}
