//! The player-controlled flyer
//!
//! Horizontally fixed (the world scrolls past it), pulled down by gravity and
//! kicked upward by a flap. Holds the timed shield power-up.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::entity::Entity;
use crate::consts::*;

/// Cosmetic colour variant of the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActorVariant {
    #[default]
    Yellow,
    Red,
    Blue,
}

impl ActorVariant {
    pub const ALL: [ActorVariant; 3] =
        [ActorVariant::Yellow, ActorVariant::Red, ActorVariant::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActorVariant::Yellow => "yellow",
            ActorVariant::Red => "red",
            ActorVariant::Blue => "blue",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Some(ActorVariant::Yellow),
            "red" => Some(ActorVariant::Red),
            "blue" => Some(ActorVariant::Blue),
            _ => None,
        }
    }
}

/// The controlled actor
#[derive(Debug, Clone)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Visual tilt in radians (positive = nose down)
    pub rotation: f32,
    pub variant: ActorVariant,
    pub has_shield: bool,
    /// Seconds since the shield was raised
    pub shield_timer: f32,
    pub shield_duration: f32,
    /// Current animation frame
    pub frame: usize,
    frame_timer: f32,
}

impl Actor {
    pub fn new(pos: Vec2, variant: ActorVariant) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            width: ACTOR_WIDTH,
            height: ACTOR_HEIGHT,
            rotation: 0.0,
            variant,
            has_shield: false,
            shield_timer: 0.0,
            shield_duration: SHIELD_DURATION,
            frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Spawn position for a playfield of the given size
    pub fn spawn_point() -> Vec2 {
        Vec2::new(GAME_WIDTH * ACTOR_X_RATIO, GAME_HEIGHT / 2.0)
    }

    /// Set vertical velocity to the flap impulse, whatever it was before
    pub fn flap(&mut self) {
        self.vel.y = FLAP_IMPULSE;
    }

    /// Raise (or refresh) the shield
    pub fn activate_shield(&mut self) {
        self.has_shield = true;
        self.shield_timer = 0.0;
    }

    /// Drop the shield after it absorbed a hit
    pub fn consume_shield(&mut self) {
        self.has_shield = false;
    }

    /// Fraction of the shield's lifetime already used (0..=1)
    pub fn shield_progress(&self) -> f32 {
        (self.shield_timer / self.shield_duration).clamp(0.0, 1.0)
    }

    /// Raw (un-inset) bounding box
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.width, self.height)
    }

    fn target_rotation(&self) -> f32 {
        if self.vel.y > 0.0 {
            (self.vel.y / MAX_FALL_SPEED * PI / 2.0).min(PI / 4.0)
        } else {
            (self.vel.y / -FLAP_IMPULSE * PI / 6.0).max(-PI / 6.0)
        }
    }
}

impl Entity for Actor {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        self.vel.y = (self.vel.y + GRAVITY * dt).min(MAX_FALL_SPEED);
        self.vel.x = 0.0;
        self.pos += self.vel * dt;

        // Rising tilts the nose up, falling tilts it down
        let target = self.target_rotation();
        let blend = (5.0 * dt).min(1.0);
        self.rotation += (target - self.rotation) * blend;

        self.frame_timer += dt;
        if self.frame_timer >= ANIMATION_FRAME_DURATION {
            self.frame_timer = 0.0;
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
        }

        if self.has_shield {
            self.shield_timer += dt;
            if self.shield_timer >= self.shield_duration {
                self.has_shield = false;
            }
        }
    }

    /// Hit box with the forgiveness inset applied on all four sides
    fn collision_box(&self) -> Option<Aabb> {
        Some(self.bounds().inset(COLLISION_INSET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> Actor {
        Actor::new(Actor::spawn_point(), ActorVariant::Yellow)
    }

    #[test]
    fn test_gravity_one_frame() {
        let mut a = actor();
        a.update(1.0 / 60.0);
        assert!((a.vel.y - 15.0).abs() < 1e-3);
        assert_eq!(a.vel.x, 0.0);
    }

    #[test]
    fn test_fall_speed_clamped() {
        let mut a = actor();
        for _ in 0..200 {
            a.update(0.05);
        }
        assert_eq!(a.vel.y, MAX_FALL_SPEED);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut a = actor();
        a.vel.y = 390.0;
        a.flap();
        assert_eq!(a.vel.y, FLAP_IMPULSE);

        a.vel.y = -500.0;
        a.flap();
        assert_eq!(a.vel.y, FLAP_IMPULSE);
    }

    #[test]
    fn test_shield_expires() {
        let mut a = actor();
        a.activate_shield();
        assert!(a.has_shield);

        // 4.9375s: still up
        for _ in 0..79 {
            a.update(0.0625);
        }
        assert!(a.has_shield);

        a.update(0.0625);
        assert!(!a.has_shield);
    }

    #[test]
    fn test_shield_refresh_resets_timer() {
        let mut a = actor();
        a.activate_shield();
        a.update(0.1);
        a.update(0.1);
        a.activate_shield();
        assert_eq!(a.shield_timer, 0.0);
    }

    #[test]
    fn test_collision_box_is_inset() {
        let a = actor();
        let raw = a.bounds();
        let hit = a.collision_box().unwrap();
        assert_eq!(hit.width(), raw.width() - 2.0 * COLLISION_INSET);
        assert_eq!(hit.height(), raw.height() - 2.0 * COLLISION_INSET);
    }

    #[test]
    fn test_rotation_tilts_with_velocity() {
        let mut a = actor();
        a.flap();
        a.update(1.0 / 60.0);
        assert!(a.rotation < 0.0);
        for _ in 0..6 {
            a.update(1.0 / 60.0);
        }
        // Still rising, nose up but never past the cap
        assert!(a.vel.y < 0.0);
        assert!(a.rotation < 0.0 && a.rotation >= -PI / 6.0);

        let mut b = actor();
        b.vel.y = 300.0;
        b.update(1.0 / 60.0);
        assert!(b.rotation > 0.0);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(ActorVariant::parse("Red"), Some(ActorVariant::Red));
        assert_eq!(ActorVariant::parse("green"), None);
        for v in ActorVariant::ALL {
            assert_eq!(ActorVariant::parse(v.as_str()), Some(v));
        }
    }
}
