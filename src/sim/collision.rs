//! Axis-aligned collision boxes
//!
//! Every collidable entity reports a normalized [`Aabb`] computed from its own
//! geometry rules; the simulation only ever compares boxes.

use glam::Vec2;

/// Axis-aligned bounding box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Box of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self {
            left: center.x - half_w,
            right: center.x + half_w,
            top: center.y - half_h,
            bottom: center.y + half_h,
        }
    }

    /// Shrink every side by `amount`
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            left: self.left + amount,
            right: self.right - amount,
            top: self.top + amount,
            bottom: self.bottom - amount,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict overlap test; touching edges do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center() {
        let b = Aabb::from_center(Vec2::new(100.0, 50.0), 40.0, 20.0);
        assert_eq!(b, Aabb::new(80.0, 120.0, 40.0, 60.0));
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 20.0);
    }

    #[test]
    fn test_overlap() {
        let a = Aabb::new(0.0, 10.0, 0.0, 10.0);
        assert!(a.overlaps(&Aabb::new(5.0, 15.0, 5.0, 15.0)));
        assert!(!a.overlaps(&Aabb::new(20.0, 30.0, 0.0, 10.0)));
        // Shared edge is not a hit
        assert!(!a.overlaps(&Aabb::new(10.0, 20.0, 0.0, 10.0)));
    }

    #[test]
    fn test_inset_turns_graze_into_miss() {
        let actor = Aabb::new(0.0, 34.0, 0.0, 24.0);
        let wall = Aabb::new(32.0, 84.0, 0.0, 100.0);
        assert!(actor.overlaps(&wall));
        assert!(!actor.inset(4.0).overlaps(&wall));
    }
}
