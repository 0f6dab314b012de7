//! Capabilities shared by simulated entities
//!
//! Entities live in typed collections on [`GameState`](super::GameState); these
//! traits give them a common update/collide surface without a class hierarchy.
//! Drawing is a separate capability implemented in `crate::render`.

use glam::Vec2;

use super::collision::Aabb;

/// Per-frame update and collision geometry
pub trait Entity {
    /// Center position
    fn position(&self) -> Vec2;

    /// Advance by `dt` seconds
    fn update(&mut self, dt: f32);

    /// Collision box for this frame, `None` for purely cosmetic entities
    fn collision_box(&self) -> Option<Aabb>;

    /// True if this entity's box overlaps the other's
    fn collides_with(&self, other: &dyn Entity) -> bool {
        match (self.collision_box(), other.collision_box()) {
            (Some(a), Some(b)) => a.overlaps(&b),
            _ => false,
        }
    }
}

/// Entities whose scroll speed follows the current difficulty
pub trait ScrollSpeed {
    fn set_speed(&mut self, speed: f32);
}
