//! Timed power-up pickups

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collision::Aabb;
use super::entity::Entity;
use crate::consts::*;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BonusKind {
    Shield,
    SlowMo,
    ScoreBoost,
}

impl BonusKind {
    pub const ALL: [BonusKind; 3] = [BonusKind::Shield, BonusKind::SlowMo, BonusKind::ScoreBoost];

    /// Banner text shown when picked up
    pub fn banner(&self) -> &'static str {
        match self {
            BonusKind::Shield => "SHIELD!",
            BonusKind::SlowMo => "SLOW-MO!",
            BonusKind::ScoreBoost => "DOUBLE SCORE!",
        }
    }
}

/// A pickup drifting across the screen
#[derive(Debug, Clone)]
pub struct Bonus {
    pub id: u32,
    pub kind: BonusKind,
    /// Collision position; the bob is applied only when drawing
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_collected: bool,
    /// Seconds alive
    pub age: f32,
    /// Spin angle in [0, 2π)
    pub spin: f32,
}

impl Bonus {
    pub fn new(id: u32, kind: BonusKind, pos: Vec2, speed: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::new(-speed, 0.0),
            width: BONUS_SIZE,
            height: BONUS_SIZE,
            is_collected: false,
            age: 0.0,
            spin: 0.0,
        }
    }

    /// Vertical draw offset of the idle bob
    pub fn bob_offset(&self) -> f32 {
        (self.age * 3.0).sin() * BONUS_BOB_AMOUNT
    }

    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

impl Entity for Bonus {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        self.pos.x += self.vel.x * dt;
        self.age += dt;
        self.spin = (self.spin + dt * 2.0) % TAU;
    }

    fn collision_box(&self) -> Option<Aabb> {
        Some(Aabb::from_center(self.pos, self.width, self.height))
    }
}

/// Roll a new bonus, or `None` while the score is below [`BONUS_MIN_SCORE`]
pub fn spawn_bonus<R: Rng>(rng: &mut R, id: u32, score: u32, speed: f32) -> Option<Bonus> {
    if score < BONUS_MIN_SCORE {
        return None;
    }

    let min_y = GAME_HEIGHT * 0.2;
    let max_y = GAME_HEIGHT * 0.7;
    let y = min_y + rng.random::<f32>() * (max_y - min_y);
    let kind = BonusKind::ALL[rng.random_range(0..BonusKind::ALL.len())];

    Some(Bonus::new(
        id,
        kind,
        Vec2::new(GAME_WIDTH + BONUS_SPAWN_MARGIN, y),
        speed,
    ))
}
