//! Rendering adapter
//!
//! Turns a [`RenderSnapshot`] into a draw list: colored triangles for the
//! playfield plus HUD text labels. Backend-agnostic; a GPU host uploads
//! [`DrawList::vertex_bytes`] as-is, a software host rasterizes the triangles.
//! Coordinates are playfield pixels with the origin at the top-left.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::session::RenderSnapshot;
use crate::settings::Settings;

/// Border width for the player and enemy outlines
pub const OUTLINE_THICKNESS: i32 = 2;

/// Where a label's position sits relative to its text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Horizontally centered on `x`
    TopCenter,
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub anchor: Anchor,
    pub color: [f32; 4],
}

/// Everything to draw for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl DrawList {
    /// Build the frame: player, projectiles, enemies, then the HUD on top
    pub fn from_snapshot(snapshot: &RenderSnapshot, settings: &Settings) -> Self {
        let quads = 5 + snapshot.projectiles.len() + snapshot.enemies.len() * 5;
        let mut vertices = Vec::with_capacity(quads * shapes::QUAD_VERTICES);

        vertices.extend(shapes::filled_rect(&snapshot.player, colors::PLAYER));
        vertices.extend(shapes::rect_outline(
            &snapshot.player,
            OUTLINE_THICKNESS,
            colors::OUTLINE,
        ));

        for shot in &snapshot.projectiles {
            vertices.extend(shapes::filled_rect(shot, colors::PROJECTILE));
        }

        for enemy in &snapshot.enemies {
            vertices.extend(shapes::filled_rect(enemy, colors::ENEMY));
            vertices.extend(shapes::rect_outline(enemy, OUTLINE_THICKNESS, colors::OUTLINE));
        }

        Self {
            clear_color: colors::BACKGROUND,
            vertices,
            labels: hud_labels(snapshot, settings),
        }
    }

    /// Raw vertex data for a GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

fn hud_labels(snapshot: &RenderSnapshot, settings: &Settings) -> Vec<TextLabel> {
    let mut labels = vec![
        TextLabel {
            text: format!("Score: {}", snapshot.score),
            x: 10.0,
            y: 10.0,
            anchor: Anchor::TopLeft,
            color: colors::HUD_TEXT,
        },
        TextLabel {
            text: format!("Level: {}", snapshot.level),
            x: 10.0,
            y: 50.0,
            anchor: Anchor::TopLeft,
            color: colors::HUD_TEXT,
        },
    ];

    if snapshot.game_over {
        let center_x = settings.width as f32 / 2.0;
        let center_y = settings.height as f32 / 2.0;
        labels.push(TextLabel {
            text: "GAME OVER".to_string(),
            x: center_x,
            y: center_y,
            anchor: Anchor::TopCenter,
            color: colors::GAME_OVER_TEXT,
        });
        labels.push(TextLabel {
            text: "Press R to Restart".to_string(),
            x: center_x,
            y: center_y + 50.0,
            anchor: Anchor::TopCenter,
            color: colors::HUD_TEXT,
        });
    }

    labels
}
