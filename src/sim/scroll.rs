//! Endlessly scrolling scenery strips (backdrop and ground)
//!
//! A layer is a row of equal-width segments. Segments that leave the left edge
//! are recycled behind the rightmost one, so the strip never shows a seam.
//! Unlike obstacles, layers follow the current scroll speed immediately.

use glam::Vec2;

use super::collision::Aabb;
use super::entity::{Entity, ScrollSpeed};
use crate::consts::*;

/// Which strip this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Sky/city backdrop, slow parallax, never collides
    Backdrop,
    /// Floor strip the actor can crash into
    Ground,
}

/// Number of segments per strip
const SEGMENTS: usize = 3;
/// Backdrop moves at a fraction of the world speed
const BACKDROP_PARALLAX: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct ScrollLayer {
    pub kind: LayerKind,
    /// Left x of each segment
    pub segments: Vec<f32>,
    pub segment_width: f32,
    pub top: f32,
    pub height: f32,
    /// World speed last propagated to this layer
    pub speed: f32,
    pub speed_factor: f32,
}

impl ScrollLayer {
    pub fn ground(speed: f32) -> Self {
        Self::new(
            LayerKind::Ground,
            GAME_HEIGHT - GROUND_HEIGHT,
            GROUND_HEIGHT,
            speed,
            1.0,
        )
    }

    pub fn backdrop(speed: f32) -> Self {
        Self::new(
            LayerKind::Backdrop,
            0.0,
            GAME_HEIGHT - GROUND_HEIGHT,
            speed,
            BACKDROP_PARALLAX,
        )
    }

    fn new(kind: LayerKind, top: f32, height: f32, speed: f32, speed_factor: f32) -> Self {
        let segment_width = GAME_WIDTH;
        Self {
            kind,
            segments: (0..SEGMENTS).map(|i| i as f32 * segment_width).collect(),
            segment_width,
            top,
            height,
            speed,
            speed_factor,
        }
    }

    /// Boxes of the individual segments
    pub fn segment_boxes(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.segments.iter().map(move |&left| {
            Aabb::new(left, left + self.segment_width, self.top, self.top + self.height)
        })
    }

    fn rightmost(&self) -> f32 {
        self.segments.iter().copied().fold(f32::MIN, f32::max)
    }
}

impl ScrollSpeed for ScrollLayer {
    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }
}

impl Entity for ScrollLayer {
    fn position(&self) -> Vec2 {
        Vec2::new(GAME_WIDTH / 2.0, self.top + self.height / 2.0)
    }

    fn update(&mut self, dt: f32) {
        let shift = self.speed * self.speed_factor * dt;
        for left in &mut self.segments {
            *left -= shift;
        }
        // Recycle segments that fell off the left edge
        for i in 0..self.segments.len() {
            if self.segments[i] + self.segment_width <= 0.0 {
                let next = self.rightmost() + self.segment_width;
                self.segments[i] = next;
            }
        }
    }

    fn collision_box(&self) -> Option<Aabb> {
        match self.kind {
            LayerKind::Backdrop => None,
            LayerKind::Ground => {
                let left = self.segments.iter().copied().fold(f32::MAX, f32::min);
                let right = self.rightmost() + self.segment_width;
                Some(Aabb::new(left, right, self.top, self.top + self.height))
            }
        }
    }
}
