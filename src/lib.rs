//! Modern Invaders - a frame-driven arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, formation, collisions, game state)
//! - `session`: Input-gated façade over the simulation, produces render snapshots
//! - `renderer`: Backend-agnostic draw list built from snapshots
//! - `platform`: Input latching and fixed-rate frame limiting
//! - `autopilot`: Seeded input source for headless runs
//! - `settings`: Playfield and loop configuration

pub mod autopilot;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use session::{RenderSnapshot, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Reference playfield the formation layout is specified against
    pub const REFERENCE_WIDTH: i32 = 1200;
    pub const REFERENCE_HEIGHT: i32 = 800;
    /// Largest playfield side settings will accept
    pub const MAX_PLAYFIELD_SIZE: i32 = 16384;
    /// Default loop rate
    pub const TARGET_FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_WIDTH: i32 = 60;
    pub const PLAYER_HEIGHT: i32 = 60;
    pub const PLAYER_SPEED: i32 = 8;
    pub const PLAYER_HEALTH: i32 = 100;
    /// Player top edge sits this far above the bottom of the playfield
    pub const PLAYER_BOTTOM_OFFSET: i32 = 100;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: i32 = 4;
    pub const PROJECTILE_HEIGHT: i32 = 20;
    pub const PROJECTILE_SPEED: i32 = 12;

    /// Enemy defaults
    pub const ENEMY_WIDTH: i32 = 50;
    pub const ENEMY_HEIGHT: i32 = 50;

    /// Formation layout at the reference playfield
    pub const FORMATION_ORIGIN_X: i32 = 100;
    pub const FORMATION_ORIGIN_Y: i32 = 100;
    pub const FORMATION_COL_PITCH: i32 = 80;
    pub const FORMATION_ROW_PITCH: i32 = 70;
    /// Vertical drop applied to the whole formation on each bounce
    pub const FORMATION_DESCENT: i32 = 20;

    /// Points per destroyed enemy
    pub const ENEMY_KILL_SCORE: u64 = 100;
}
