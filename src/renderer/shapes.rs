//! Shape generation for 2D primitives
//!
//! Turns a draw list into a triangle list a GPU backend can upload as-is.

use glam::Vec2;
use std::f32::consts::PI;

use super::draw::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Segments used for circles; plenty for a 15px ball
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let min = rect.pos.as_vec2();
    let max = min + rect.size.as_vec2();

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate a draw list into one triangle list.
///
/// `Clear` and `Text` produce no geometry: clearing is a render pass load op
/// and glyphs belong to the host's font renderer.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Rect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => vertices.extend(circle(*center, *radius, *color, CIRCLE_SEGMENTS)),
            DrawCommand::Clear { .. } | DrawCommand::Text { .. } => {}
        }
    }
    vertices
}
