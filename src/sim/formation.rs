//! Enemy formation: per-level wave layout and the bounce-and-descend rule
//!
//! The formation is a rigid grid. Every member shares a direction, and when any
//! member touches a side edge the whole grid drops and reverses together.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::entities::Enemy;
use crate::consts::*;

/// Grid origin and pitch, scaled to the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationLayout {
    pub origin: IVec2,
    pub col_pitch: i32,
    pub row_pitch: i32,
}

impl Default for FormationLayout {
    fn default() -> Self {
        Self::for_playfield(REFERENCE_WIDTH, REFERENCE_HEIGHT)
    }
}

impl FormationLayout {
    /// Scale the reference layout proportionally to a `width` x `height` playfield
    pub fn for_playfield(width: i32, height: i32) -> Self {
        // Product in i64; the quotient never exceeds `size`
        let scale = |v: i32, size: i32, reference: i32| {
            let scaled = i64::from(v) * i64::from(size) / i64::from(reference);
            i32::try_from(scaled).unwrap_or(i32::MAX)
        };
        let sx = |v: i32| scale(v, width, REFERENCE_WIDTH);
        let sy = |v: i32| scale(v, height, REFERENCE_HEIGHT);
        Self {
            origin: IVec2::new(sx(FORMATION_ORIGIN_X), sy(FORMATION_ORIGIN_Y)),
            col_pitch: sx(FORMATION_COL_PITCH),
            row_pitch: sy(FORMATION_ROW_PITCH),
        }
    }
}

/// Grid shape and per-enemy stats for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveShape {
    pub rows: u32,
    pub cols: u32,
    pub health: i32,
    pub speed: i32,
}

impl WaveShape {
    pub fn for_level(level: u32) -> Self {
        debug_assert!(level >= 1, "wave requested for level {level}");
        let level = level.max(1);
        Self {
            rows: 4 + level / 2,
            cols: 8 + level,
            health: 3 + (level / 2) as i32,
            speed: 2 + (level / 2) as i32,
        }
    }

    pub fn enemy_count(&self) -> usize {
        (self.rows * self.cols) as usize
    }
}

/// Build the enemy grid for `level`, row-major from the top-left
pub fn generate_wave(level: u32, layout: &FormationLayout) -> Vec<Enemy> {
    let shape = WaveShape::for_level(level);
    log::info!(
        "Level {}: {}x{} formation, hp={}, speed={}",
        level,
        shape.rows,
        shape.cols,
        shape.health,
        shape.speed
    );

    let mut enemies = Vec::with_capacity(shape.enemy_count());
    for row in 0..shape.rows as i32 {
        for col in 0..shape.cols as i32 {
            let pos = layout.origin + IVec2::new(col * layout.col_pitch, row * layout.row_pitch);
            enemies.push(Enemy::new(pos, shape.health, shape.speed));
        }
    }
    enemies
}

/// Reverse and drop the whole formation if any member touches a side edge.
///
/// Evaluated on post-move positions. The reaction is applied exactly once per
/// enemy no matter how many members triggered it. Returns whether it fired.
pub fn bounce_and_descend(enemies: &mut [Enemy], playfield_width: i32) -> bool {
    if !enemies.iter().any(|e| e.at_edge(playfield_width)) {
        return false;
    }
    for enemy in enemies.iter_mut() {
        enemy.pos.y += FORMATION_DESCENT;
        enemy.direction = -enemy.direction;
    }
    true
}
