//! Game state and core simulation types
//!
//! The whole session aggregate lives here; nothing is held in statics.

use serde::{Deserialize, Serialize};

use super::entities::{Enemy, Player, Projectile};
use super::formation::{FormationLayout, generate_wave};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Formation reached the player's line; only a restart leaves this phase
    GameOver,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile struck an enemy that survived
    EnemyHit { remaining_health: i32 },
    /// A projectile finished off an enemy
    EnemyDestroyed { points: u64 },
    /// The formation touched a side edge and dropped
    FormationBounced,
    /// The formation was wiped out and the next wave spawned
    LevelCleared { cleared: u32, next: u32 },
    /// The formation crossed the player's line
    GameOver { score: u64, level: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Formation grid scaled to the playfield
    pub layout: FormationLayout,
    /// Score
    pub score: u64,
    /// Current level (1-based)
    pub level: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (frozen while game over)
    pub frame: u64,
    /// Player ship
    pub player: Player,
    /// Live projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Live formation members, row-major from the top-left
    pub enemies: Vec<Enemy>,
}

impl GameState {
    /// Fresh session on a `width` x `height` playfield with the level 1 wave spawned
    pub fn new(width: i32, height: i32) -> Self {
        let layout = FormationLayout::for_playfield(width, height);
        Self {
            width,
            height,
            layout,
            score: 0,
            level: 1,
            phase: GamePhase::Playing,
            frame: 0,
            player: Player::spawn(width, height),
            projectiles: Vec::new(),
            enemies: generate_wave(1, &layout),
        }
    }

    /// Reinitialize to a fresh session on the same playfield
    pub fn reset(&mut self) {
        *self = Self::new(self.width, self.height);
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Spawn a projectile at the player's muzzle. Ignored while game over.
    ///
    /// Returns whether a projectile was created.
    pub fn fire(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.projectiles.push(Projectile::new(self.player.muzzle()));
        true
    }
}
