//! Entity records: player, projectile, enemy
//!
//! Plain data plus their own kinematics. Nothing here reads game state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Axis-aligned rectangle in playfield pixels (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }

    pub const fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub pos: IVec2,
    pub size: IVec2,
    /// Horizontal pixels per frame while a move key is held
    pub speed: i32,
    /// Carried for display only; the loss condition never reads it
    pub health: i32,
}

impl Player {
    /// Spawn centered horizontally, `PLAYER_BOTTOM_OFFSET` above the bottom edge
    pub fn spawn(playfield_width: i32, playfield_height: i32) -> Self {
        Self {
            pos: IVec2::new(playfield_width / 2, playfield_height - PLAYER_BOTTOM_OFFSET),
            size: IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            speed: PLAYER_SPEED,
            health: PLAYER_HEALTH,
        }
    }

    /// Move by `direction * speed` and clamp to `[0, playfield_width - width]`
    pub fn shift(&mut self, direction: i32, playfield_width: i32) {
        let max_x = (playfield_width - self.size.x).max(0);
        self.pos.x = (self.pos.x + direction.signum() * self.speed).clamp(0, max_x);
    }

    /// Spawn point for a new projectile: horizontally centered on the top edge
    pub fn muzzle(&self) -> IVec2 {
        IVec2::new(self.pos.x + self.size.x / 2 - PROJECTILE_WIDTH / 2, self.pos.y)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A player shot travelling straight up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
    pub size: IVec2,
    pub speed: i32,
}

impl Projectile {
    pub fn new(pos: IVec2) -> Self {
        Self {
            pos,
            size: IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Past the top boundary
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.pos.y < 0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A formation member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: IVec2,
    pub size: IVec2,
    pub health: i32,
    /// +1 moving right, -1 moving left
    pub direction: i32,
    pub speed: i32,
}

impl Enemy {
    pub fn new(pos: IVec2, health: i32, speed: i32) -> Self {
        Self {
            pos,
            size: IVec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            health,
            direction: 1,
            speed,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos.x += self.speed * self.direction;
    }

    /// Take one point of damage. Returns true when the enemy should be removed.
    pub fn take_damage(&mut self) -> bool {
        self.health -= 1;
        self.health <= 0
    }

    /// Horizontal extent touches or crosses either playfield edge
    pub fn at_edge(&self, playfield_width: i32) -> bool {
        self.pos.x <= 0 || self.pos.x + self.size.x >= playfield_width
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}
