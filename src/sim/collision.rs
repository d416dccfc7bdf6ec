//! Collision detection for axis-aligned rectangles
//!
//! Every entity in the playfield is an unrotated box, so a strict overlap
//! test on the four edges is all the simulation needs. Touching edges do
//! not count as a hit.

use super::entities::{Enemy, Rect};

/// Strict AABB overlap
#[inline]
pub fn aabb_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

/// Index of the first enemy (in collection order) overlapping `shot`
pub fn first_overlapping(shot: &Rect, enemies: &[Enemy]) -> Option<usize> {
    enemies.iter().position(|e| aabb_overlap(shot, &e.rect()))
}
