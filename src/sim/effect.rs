//! Self-expiring cosmetic entities (score popups, pickup banners)
//!
//! Effects never collide and have no gameplay impact beyond their lifetime.

use glam::Vec2;

use super::bonus::BonusKind;
use super::collision::Aabb;
use super::entity::Entity;
use crate::consts::EFFECT_LIFETIME;

/// What the effect shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Floating "+N" above the actor
    ScorePopup { points: u32 },
    /// Pickup name rising from where the bonus was collected
    BonusBanner { bonus: BonusKind },
}

/// A transient decorative entity
#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub max_age: f32,
}

impl Effect {
    pub fn score_popup(pos: Vec2, points: u32) -> Self {
        Self {
            kind: EffectKind::ScorePopup { points },
            pos,
            vel: Vec2::new(0.0, -60.0),
            age: 0.0,
            max_age: EFFECT_LIFETIME,
        }
    }

    pub fn bonus_banner(pos: Vec2, bonus: BonusKind) -> Self {
        Self {
            kind: EffectKind::BonusBanner { bonus },
            pos,
            vel: Vec2::new(0.0, -50.0),
            age: 0.0,
            max_age: EFFECT_LIFETIME,
        }
    }

    /// Lifetime fraction used so far
    pub fn progress(&self) -> f32 {
        (self.age / self.max_age).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.age >= self.max_age
    }

    /// Draw scale
    pub fn scale(&self) -> f32 {
        let p = self.progress();
        match self.kind {
            // Pop to 1.4x over the first 20%, then shrink slowly
            EffectKind::ScorePopup { .. } => {
                if p < 0.2 {
                    1.0 + p * 2.0
                } else {
                    1.4 - (p - 0.2) * 0.5
                }
            }
            // Grow from half size over the first 30%
            EffectKind::BonusBanner { .. } => {
                if p < 0.3 {
                    0.5 + (p / 0.3) * 0.5
                } else {
                    1.0
                }
            }
        }
    }

    /// Draw opacity in [0, 1]
    pub fn opacity(&self) -> f32 {
        let p = self.progress();
        let alpha = match self.kind {
            EffectKind::ScorePopup { .. } => {
                if p < 0.2 {
                    1.0
                } else {
                    1.0 - (p - 0.2) * 1.25
                }
            }
            EffectKind::BonusBanner { .. } => {
                if p < 0.3 {
                    (p * 3.0).min(1.0)
                } else {
                    1.0 - (p - 0.3) / 0.7
                }
            }
        };
        alpha.clamp(0.0, 1.0)
    }

    pub fn label(&self) -> String {
        match self.kind {
            EffectKind::ScorePopup { points } => format!("+{points}"),
            EffectKind::BonusBanner { bonus } => bonus.banner().to_string(),
        }
    }
}

impl Entity for Effect {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
    }

    fn collision_box(&self) -> Option<Aabb> {
        None
    }
}
