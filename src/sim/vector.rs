//! 2D vector helpers
//!
//! Positions and velocities are plain `glam::Vec2` values (copy, immutable
//! arithmetic). This module adds the handful of named operations the
//! simulation reads best with.

use glam::Vec2;

/// Point/velocity type used by every entity
pub type Vector2 = Vec2;

/// Named arithmetic on [`Vector2`]
pub trait VectorExt: Copy {
    /// Multiply by a scalar
    fn scale(self, by: f32) -> Self;
    /// Euclidean length
    fn magnitude(self) -> f32;
    /// Unit vector in the same direction, or zero for the zero vector
    fn normalized(self) -> Self;
    /// Distance between two points
    fn distance_to(self, other: Self) -> f32;
}

impl VectorExt for Vec2 {
    #[inline]
    fn scale(self, by: f32) -> Self {
        self * by
    }

    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    #[inline]
    fn normalized(self) -> Self {
        self.normalize_or_zero()
    }

    #[inline]
    fn distance_to(self, other: Self) -> f32 {
        (self - other).length()
    }
}
