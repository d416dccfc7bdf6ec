//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in playfield pixels.

use super::vertex::Vertex;
use crate::sim::Rect;

/// Vertices in one filled quad (two triangles)
pub const QUAD_VERTICES: usize = 6;

/// Generate vertices for a filled rectangle
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(QUAD_VERTICES);
    push_quad(&mut vertices, rect, color);
    vertices
}

/// Generate vertices for a rectangle border `thickness` pixels wide, drawn inside the edges
pub fn rect_outline(rect: &Rect, thickness: i32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.w / 2).min(rect.h / 2).max(1);
    let edges = [
        // Top and bottom span the full width
        Rect::from_xywh(rect.x, rect.y, rect.w, t),
        Rect::from_xywh(rect.x, rect.bottom() - t, rect.w, t),
        // Sides fill the gap between them
        Rect::from_xywh(rect.x, rect.y + t, t, rect.h - 2 * t),
        Rect::from_xywh(rect.right() - t, rect.y + t, t, rect.h - 2 * t),
    ];

    let mut vertices = Vec::with_capacity(edges.len() * QUAD_VERTICES);
    for edge in &edges {
        push_quad(&mut vertices, edge, color);
    }
    vertices
}

fn push_quad(vertices: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let x0 = rect.x as f32;
    let y0 = rect.y as f32;
    let x1 = rect.right() as f32;
    let y1 = rect.bottom() as f32;

    // Two triangles
    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x0, y1, color));

    vertices.push(Vertex::new(x0, y1, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
}
