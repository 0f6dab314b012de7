//! Scrolling obstacle pairs
//!
//! A pair is two entities sharing one gap roll: a top obstacle hanging from the
//! ceiling down to the gap and a bottom obstacle standing from the gap to the
//! floor. Only the top member scores, so a pair is never counted twice.

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use super::difficulty::Difficulty;
use super::entity::Entity;
use crate::consts::*;

/// One half of an obstacle pair
///
/// `pos.x` is the horizontal center. `pos.y` is the edge facing the gap: the
/// bottom edge of a top obstacle, the top edge of a bottom obstacle.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Shared by both members of a pair
    pub pair_id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub is_top: bool,
    /// Red variant; cosmetic only
    pub is_special: bool,
    /// Set once the actor has cleared this obstacle
    pub is_passed: bool,
}

impl Obstacle {
    /// Right edge x-coordinate
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// True once the obstacle has scrolled fully past the left screen edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.trailing_edge() < 0.0
    }

    /// Report the first frame the actor is past this obstacle.
    ///
    /// Only top members ever return true, and each does so exactly once.
    pub fn check_passed(&mut self, actor_x: f32) -> bool {
        if self.is_top && !self.is_passed && actor_x > self.trailing_edge() {
            self.is_passed = true;
            return true;
        }
        false
    }

    /// (top, bottom) of the body; the body extends away from the gap
    fn vertical_span(&self) -> (f32, f32) {
        if self.is_top {
            (self.pos.y - self.height, self.pos.y)
        } else {
            (self.pos.y, self.pos.y + self.height)
        }
    }
}

impl Entity for Obstacle {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn update(&mut self, dt: f32) {
        self.pos.x += self.vel.x * dt;
    }

    fn collision_box(&self) -> Option<Aabb> {
        let (top, bottom) = self.vertical_span();
        let left = self.pos.x - self.width / 2.0;
        Some(Aabb::new(left, left + self.width, top, bottom))
    }
}

/// Vertical band the gap center is drawn from.
///
/// Starts at `[0.2H, 0.8H]` and narrows toward `[0.3H, 0.7H]`, saturating at
/// [`GAP_VARIATION_SATURATION_SCORE`].
pub fn gap_center_range(score: u32) -> (f32, f32) {
    let variation = (score as f32 / GAP_VARIATION_SATURATION_SCORE as f32).min(1.0);
    let min_y = GAME_HEIGHT * (0.2 + variation * 0.1);
    let max_y = GAME_HEIGHT * (0.8 - variation * 0.1);
    (min_y, max_y)
}

/// Build a top/bottom pair around a given gap center
pub fn build_pair(
    first_id: u32,
    gap_y: f32,
    gap: f32,
    speed: f32,
    is_special: bool,
) -> [Obstacle; 2] {
    let x = GAME_WIDTH + OBSTACLE_WIDTH;
    let gap_top = gap_y - gap / 2.0;
    let gap_bottom = gap_y + gap / 2.0;

    let top = Obstacle {
        id: first_id,
        pair_id: first_id,
        pos: Vec2::new(x, gap_top),
        vel: Vec2::new(-speed, 0.0),
        width: OBSTACLE_WIDTH,
        height: gap_top.max(0.0),
        is_top: true,
        is_special,
        is_passed: false,
    };
    let bottom = Obstacle {
        id: first_id + 1,
        pair_id: first_id,
        pos: Vec2::new(x, gap_bottom),
        vel: Vec2::new(-speed, 0.0),
        width: OBSTACLE_WIDTH,
        height: (GAME_HEIGHT - gap_bottom).max(0.0),
        is_top: false,
        is_special,
        is_passed: false,
    };
    [top, bottom]
}

/// Roll a new obstacle pair for the current difficulty.
///
/// `speed` is the effective scroll speed at spawn time (it may be slowed
/// below `difficulty.speed`); the pair keeps it for its whole life.
pub fn spawn_pair<R: Rng>(
    rng: &mut R,
    first_id: u32,
    difficulty: &Difficulty,
    speed: f32,
    score: u32,
) -> [Obstacle; 2] {
    let (min_y, max_y) = gap_center_range(score);
    let gap_y = min_y + rng.random::<f32>() * (max_y - min_y);
    let is_special =
        difficulty.special_obstacles && rng.random_bool(SPECIAL_OBSTACLE_CHANCE);
    build_pair(first_id, gap_y, difficulty.gap, speed, is_special)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::difficulty::difficulty_for_score;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pair_geometry() {
        let [top, bottom] = build_pair(1, 300.0, 150.0, 200.0, false);

        let top_box = top.collision_box().unwrap();
        assert_eq!(top_box.top, 0.0);
        assert_eq!(top_box.bottom, 225.0);

        let bottom_box = bottom.collision_box().unwrap();
        assert_eq!(bottom_box.top, 375.0);
        assert_eq!(bottom_box.bottom, GAME_HEIGHT);

        assert_eq!(top.pair_id, bottom.pair_id);
        assert!(top.pos.x > GAME_WIDTH);
        assert_eq!(top.vel.x, -200.0);
    }

    #[test]
    fn test_check_passed_once_top_only() {
        let [mut top, mut bottom] = build_pair(1, 300.0, 150.0, 200.0, false);
        top.pos.x = 100.0;
        bottom.pos.x = 100.0;

        // Trailing edge is at 126
        assert!(!top.check_passed(126.0));
        assert!(top.check_passed(127.0));
        assert!(!top.check_passed(127.0));
        assert!(!top.check_passed(500.0));

        assert!(!bottom.check_passed(500.0));
        assert!(!bottom.is_passed);
    }

    #[test]
    fn test_off_screen() {
        let [mut top, _] = build_pair(1, 300.0, 150.0, 200.0, false);
        top.pos.x = -OBSTACLE_WIDTH / 2.0;
        assert!(!top.is_off_screen());
        top.pos.x -= 0.5;
        assert!(top.is_off_screen());
    }

    #[test]
    fn test_gap_center_range_narrows() {
        let (lo0, hi0) = gap_center_range(0);
        assert!((lo0 - GAME_HEIGHT * 0.2).abs() < 1e-3);
        assert!((hi0 - GAME_HEIGHT * 0.8).abs() < 1e-3);

        let (lo50, hi50) = gap_center_range(50);
        assert!((lo50 - GAME_HEIGHT * 0.3).abs() < 1e-3);
        assert!((hi50 - GAME_HEIGHT * 0.7).abs() < 1e-3);

        assert_eq!(gap_center_range(500), gap_center_range(50));
    }

    #[test]
    fn test_spawned_gap_within_band() {
        let mut rng = Pcg32::seed_from_u64(7);
        let difficulty = difficulty_for_score(0);
        for i in 0..200 {
            let [top, bottom] = spawn_pair(&mut rng, i * 2, &difficulty, 200.0, 0);
            let gap_y = (top.pos.y + bottom.pos.y) / 2.0;
            assert!(gap_y >= GAME_HEIGHT * 0.2 - 1e-3);
            assert!(gap_y <= GAME_HEIGHT * 0.8 + 1e-3);
            assert!((bottom.pos.y - top.pos.y - difficulty.gap).abs() < 1e-3);
            assert!(!top.is_special);
        }
    }

    #[test]
    fn test_special_obstacles_only_when_enabled() {
        let mut rng = Pcg32::seed_from_u64(11);
        let difficulty = difficulty_for_score(30);
        let specials = (0..500)
            .filter(|i| spawn_pair(&mut rng, i * 2, &difficulty, 200.0, 30)[0].is_special)
            .count();
        // 20% of 500, loosely
        assert!(specials > 50 && specials < 150, "specials = {specials}");
    }
}
