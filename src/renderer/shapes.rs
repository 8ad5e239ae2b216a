//! Shape generation for 2D primitives
//!
//! Every shape is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Ship outline in local space, nose along +x
pub const SHIP_POINTS: [Vec2; 3] = [
    Vec2::new(18.0, 0.0),
    Vec2::new(-12.0, 10.0),
    Vec2::new(-12.0, -10.0),
];

/// Radius of the dot drawn at the ship's center
pub const SHIP_CORE_RADIUS: f32 = 6.0;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
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

/// Generate vertices for the ship triangle, rotated to `angle` around `pos`
pub fn ship(pos: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle);
    SHIP_POINTS
        .iter()
        .map(|p| {
            let v = pos + rot.rotate(*p);
            Vertex::new(v.x, v.y, color)
        })
        .collect()
}

/// Generate vertices for an axis-aligned rectangle
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}
