//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall-clock time
//! - No RNG
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod formation;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, first_overlapping};
pub use entities::{Enemy, Player, Projectile, Rect};
pub use formation::{FormationLayout, WaveShape, bounce_and_descend, generate_wave};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
