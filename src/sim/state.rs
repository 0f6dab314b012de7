//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in one [`GameState`]; there is no
//! ambient or static state.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorVariant};
use super::bonus::{Bonus, BonusKind};
use super::difficulty::Difficulty;
use super::effect::Effect;
use super::obstacle::Obstacle;
use super::scroll::ScrollLayer;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh world, waiting for the first flap
    Ready,
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Something the host should react to (sound, UI, storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ready -> Running
    Started,
    Flapped,
    /// A pair was cleared
    Scored { points: u32, total: u32 },
    /// A hit was absorbed by the shield
    ShieldBroken,
    BonusCollected(BonusKind),
    /// Score passed the previous best
    NewHighScore(u32),
    /// Running -> GameOver
    Died { score: u32, high_score: u32 },
}

/// Timed power-ups owned by the world rather than the actor
#[derive(Debug, Clone, Default)]
pub struct ActiveEffects {
    pub slow_motion: bool,
    pub slow_motion_timer: f32,
    pub score_boost: bool,
    pub score_boost_timer: f32,
}

impl ActiveEffects {
    pub fn start_slow_motion(&mut self) {
        self.slow_motion = true;
        self.slow_motion_timer = 0.0;
    }

    pub fn start_score_boost(&mut self) {
        self.score_boost = true;
        self.score_boost_timer = 0.0;
    }

    /// Points awarded for one cleared pair
    pub fn points_per_pass(&self) -> u32 {
        if self.score_boost { 2 } else { 1 }
    }

    /// Advance both timers. Returns true if slow motion ended this call.
    pub fn advance(&mut self, dt: f32) -> bool {
        let mut slow_ended = false;
        if self.slow_motion {
            self.slow_motion_timer += dt;
            if self.slow_motion_timer >= SLOW_MOTION_DURATION {
                self.slow_motion = false;
                slow_ended = true;
            }
        }
        if self.score_boost {
            self.score_boost_timer += dt;
            if self.score_boost_timer >= SCORE_BOOST_DURATION {
                self.score_boost = false;
            }
        }
        slow_ended
    }

    /// Scroll speed after slow motion is applied
    pub fn effective_speed(&self, base: f32) -> f32 {
        if self.slow_motion {
            base * SLOW_MOTION_FACTOR
        } else {
            base
        }
    }
}

/// Broken state invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    HighScoreBelowScore,
    SpeedOutOfRange,
    GapOutOfRange,
    SpawnIntervalOutOfRange,
    UnpairedObstacle,
    ShieldTimerOverrun,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighScoreBelowScore => write!(f, "HIGH_SCORE_BELOW_SCORE"),
            Self::SpeedOutOfRange => write!(f, "SPEED_OUT_OF_RANGE"),
            Self::GapOutOfRange => write!(f, "GAP_OUT_OF_RANGE"),
            Self::SpawnIntervalOutOfRange => write!(f, "SPAWN_INTERVAL_OUT_OF_RANGE"),
            Self::UnpairedObstacle => write!(f, "UNPAIRED_OBSTACLE"),
            Self::ShieldTimerOverrun => write!(f, "SHIELD_TIMER_OVERRUN"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score ever seen; never decreases
    pub high_score: u32,
    /// Simulated seconds spent running this run
    pub elapsed: f32,
    pub frame_count: u64,
    /// Seconds since the last obstacle pair spawn
    pub obstacle_timer: f32,
    /// Seconds since the last bonus spawn attempt
    pub bonus_timer: f32,
    /// Difficulty for the current score
    pub difficulty: Difficulty,
    /// Scroll speed actually in effect (difficulty speed, slowed by slow motion)
    pub current_speed: f32,
    pub effects: ActiveEffects,
    pub actor: Actor,
    pub backdrop: ScrollLayer,
    pub ground: ScrollLayer,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Live bonuses, in spawn order
    pub bonuses: Vec<Bonus>,
    /// Cosmetic effects, in spawn order
    pub transient: Vec<Effect>,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
    /// High score when this run began
    best_at_start: u32,
    next_id: u32,
}

impl GameState {
    /// Create a fresh world in the `Ready` phase
    pub fn new(seed: u64, high_score: u32, variant: ActorVariant) -> Self {
        let difficulty = Difficulty::default();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            score: 0,
            high_score,
            elapsed: 0.0,
            frame_count: 0,
            obstacle_timer: 0.0,
            bonus_timer: 0.0,
            difficulty,
            current_speed: difficulty.speed,
            effects: ActiveEffects::default(),
            actor: Actor::new(Actor::spawn_point(), variant),
            backdrop: ScrollLayer::backdrop(difficulty.speed),
            ground: ScrollLayer::ground(difficulty.speed),
            obstacles: Vec::new(),
            bonuses: Vec::new(),
            transient: Vec::new(),
            events: Vec::new(),
            best_at_start: high_score,
            next_id: 1,
        }
    }

    /// Return to `Ready`, discarding every entity and timer.
    ///
    /// High score, actor variant and the RNG stream carry over, so the next
    /// run differs from the last while staying reproducible from the seed.
    pub fn reset(&mut self) {
        let difficulty = Difficulty::default();
        let variant = self.actor.variant;

        self.phase = GamePhase::Ready;
        self.score = 0;
        self.elapsed = 0.0;
        self.frame_count = 0;
        self.obstacle_timer = 0.0;
        self.bonus_timer = 0.0;
        self.difficulty = difficulty;
        self.current_speed = difficulty.speed;
        self.effects = ActiveEffects::default();
        self.actor = Actor::new(Actor::spawn_point(), variant);
        self.backdrop = ScrollLayer::backdrop(difficulty.speed);
        self.ground = ScrollLayer::ground(difficulty.speed);
        self.obstacles.clear();
        self.bonuses.clear();
        self.transient.clear();
        self.events.clear();
        self.best_at_start = self.high_score;
        self.next_id = 1;
    }

    /// Allocate `count` consecutive entity IDs, returning the first
    pub fn alloc_ids(&mut self, count: u32) -> u32 {
        let id = self.next_id;
        self.next_id += count;
        id
    }

    /// Leave `Ready` and start the run. No-op in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Running;
            self.events.push(GameEvent::Started);
            log::info!("Run started (seed {})", self.seed);
        }
    }

    /// Toggle `Running <-> Paused`. Other phases are unaffected.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    pub fn set_variant(&mut self, variant: ActorVariant) {
        self.actor.variant = variant;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Add points and keep the high score in step
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.score > self.high_score {
            let previous = self.score - points;
            if previous <= self.best_at_start && self.score > self.best_at_start {
                self.events.push(GameEvent::NewHighScore(self.score));
            }
            self.high_score = self.score;
        }
    }

    /// Check the structural invariants of the world
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.high_score < self.score {
            return Err(InvariantViolation::HighScoreBelowScore);
        }
        let d = &self.difficulty;
        if !(BASE_SPEED..=MAX_SPEED).contains(&d.speed) {
            return Err(InvariantViolation::SpeedOutOfRange);
        }
        if !(MIN_GAP..=INITIAL_GAP).contains(&d.gap) {
            return Err(InvariantViolation::GapOutOfRange);
        }
        if !(MIN_SPAWN_INTERVAL..=INITIAL_SPAWN_INTERVAL).contains(&d.spawn_interval) {
            return Err(InvariantViolation::SpawnIntervalOutOfRange);
        }
        for ob in &self.obstacles {
            let partners = self
                .obstacles
                .iter()
                .filter(|o| o.pair_id == ob.pair_id && o.is_top != ob.is_top)
                .count();
            // A lone member is fine only once it has scrolled off (pruned next pass)
            if partners != 1 && !ob.is_off_screen() {
                return Err(InvariantViolation::UnpairedObstacle);
            }
        }
        if self.actor.has_shield && self.actor.shield_timer >= self.actor.shield_duration {
            return Err(InvariantViolation::ShieldTimerOverrun);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(42, 7, ActorVariant::Blue);
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert_eq!(state.actor.variant, ActorVariant::Blue);
        assert!(state.obstacles.is_empty());
        assert!(state.check_invariants().is_ok());
    }

    #[test]
    fn test_add_score_tracks_high_score() {
        let mut state = GameState::new(1, 2, ActorVariant::Yellow);
        state.add_score(1);
        assert_eq!(state.high_score, 2);
        assert!(state.events.is_empty());

        state.add_score(2);
        assert_eq!(state.score, 3);
        assert_eq!(state.high_score, 3);
        assert_eq!(state.events, vec![GameEvent::NewHighScore(3)]);

        // Only the first crossing is announced
        state.add_score(1);
        assert_eq!(state.high_score, 4);
        assert_eq!(state.events.len(), 1);
    }

    #[test]
    fn test_reset_keeps_high_score_and_variant() {
        let mut state = GameState::new(1, 0, ActorVariant::Red);
        state.start();
        state.add_score(5);
        state.effects.start_score_boost();
        state.obstacle_timer = 1.0;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 5);
        assert_eq!(state.actor.variant, ActorVariant::Red);
        assert!(!state.effects.score_boost);
        assert_eq!(state.obstacle_timer, 0.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_pause_toggle_only_while_running() {
        let mut state = GameState::new(1, 0, ActorVariant::Yellow);
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Ready);

        state.start();
        state.toggle_pause();
        assert!(state.is_paused());
        state.toggle_pause();
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_active_effect_timers() {
        let mut fx = ActiveEffects::default();
        fx.start_slow_motion();
        fx.start_score_boost();
        assert_eq!(fx.points_per_pass(), 2);
        assert_eq!(fx.effective_speed(300.0), 150.0);

        // 79 * 0.0625 = 4.9375s
        for _ in 0..79 {
            assert!(!fx.advance(0.0625));
        }
        assert!(fx.slow_motion);
        assert!(fx.advance(0.0625));
        assert!(!fx.slow_motion);
        assert_eq!(fx.effective_speed(300.0), 300.0);

        // Boost runs for 10s total
        assert!(fx.score_boost);
        for _ in 0..80 {
            fx.advance(0.0625);
        }
        assert!(!fx.score_boost);
        assert_eq!(fx.points_per_pass(), 1);
    }

    #[test]
    fn test_invariant_detects_high_score_drift() {
        let mut state = GameState::new(1, 0, ActorVariant::Yellow);
        state.score = 3;
        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::HighScoreBelowScore)
        );
    }
}
