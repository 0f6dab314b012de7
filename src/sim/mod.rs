//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame delta only (clamped, never read from a clock)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod bonus;
pub mod collision;
pub mod difficulty;
pub mod effect;
pub mod entity;
pub mod obstacle;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorVariant};
pub use bonus::{Bonus, BonusKind};
pub use collision::Aabb;
pub use difficulty::{Difficulty, difficulty_for_score, difficulty_stars};
pub use effect::{Effect, EffectKind};
pub use entity::{Entity, ScrollSpeed};
pub use obstacle::Obstacle;
pub use scroll::{LayerKind, ScrollLayer};
pub use state::{ActiveEffects, GameEvent, GamePhase, GameState, InvariantViolation};
pub use tick::{Collision, TickInput, tick};
pub use vector::{Vector2, VectorExt};
