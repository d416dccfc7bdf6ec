//! Session façade over the simulation
//!
//! Owns the game state and the held movement input. Gates input against the
//! game-over state and hands out owned snapshots for the renderer, so nothing
//! outside the session can mutate the simulation.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::{Enemy, GameEvent, GameState, Player, Projectile, Rect, TickInput, tick};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub score: u64,
    pub level: u32,
    pub game_over: bool,
    pub player: Rect,
    pub projectiles: Vec<Rect>,
    pub enemies: Vec<Rect>,
}

/// One playthrough and its restarts
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    move_dir: i32,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        log::info!(
            "New session on {}x{} playfield",
            settings.width,
            settings.height
        );
        Self {
            state: GameState::new(settings.width, settings.height),
            move_dir: 0,
        }
    }

    /// Fire a projectile (ignored while game over)
    pub fn on_fire_input(&mut self) {
        self.state.fire();
    }

    /// Set held horizontal movement: negative left, positive right, zero to stop
    pub fn on_move_input(&mut self, direction: i32) {
        if self.state.is_game_over() {
            return;
        }
        self.move_dir = direction.signum();
    }

    /// Start over (only honoured after game over)
    pub fn on_restart_input(&mut self) {
        if !self.state.is_game_over() {
            return;
        }
        log::info!(
            "Restarting after game over (score {}, level {})",
            self.state.score,
            self.state.level
        );
        self.state.reset();
        self.move_dir = 0;
    }

    /// Advance one frame
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let input = TickInput {
            move_dir: self.move_dir,
        };
        tick(&mut self.state, &input)
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.state.projectiles
    }

    /// Owned copy of the renderable state, valid until the next tick
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            score: self.state.score,
            level: self.state.level,
            game_over: self.state.is_game_over(),
            player: self.state.player.rect(),
            projectiles: self.state.projectiles.iter().map(Projectile::rect).collect(),
            enemies: self.state.enemies.iter().map(Enemy::rect).collect(),
        }
    }
}
