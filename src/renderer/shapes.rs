//! Shape generation for 2D primitives and the per-frame scene
//!
//! Coordinates are playfield pixels with y pointing down; the pipeline maps
//! them to clip space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::PARTICLE_RADIUS;
use crate::sim::{GamePhase, GameWorld, Heart, Player};

/// Segments used for small circles (hearts, particles)
const CIRCLE_SEGMENTS: u32 = 16;

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

/// Generate vertices for a filled quad given its four corners in order
pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Axis-aligned rectangle from its top-left corner
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
        color,
    )
}

/// Heart shape inside a `size` square: two lobes and a point
pub fn heart(pos: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let lobe = size * 0.27;
    let lobe_y = pos.y + size * 0.32;
    let left = Vec2::new(pos.x + size * 0.29, lobe_y);
    let right = Vec2::new(pos.x + size * 0.71, lobe_y);

    let mut vertices = circle(left, lobe, color, CIRCLE_SEGMENTS);
    vertices.extend(circle(right, lobe, color, CIRCLE_SEGMENTS));

    // Point: from the outer lobe edges down to the bottom center
    let tip = Vec2::new(pos.x + size * 0.5, pos.y + size * 0.9);
    let outer_left = Vec2::new(pos.x + size * 0.03, lobe_y + lobe * 0.35);
    let outer_right = Vec2::new(pos.x + size * 0.97, lobe_y + lobe * 0.35);
    let mid = Vec2::new(pos.x + size * 0.5, lobe_y);
    vertices.extend(
        [outer_left, mid, tip, mid, outer_right, tip].map(|p| Vertex::at(p, color)),
    );
    vertices
}

/// Basket: tapered body below a handle bar
pub fn basket(player: &Player) -> Vec<Vertex> {
    let Vec2 { x, y } = player.pos;
    let Vec2 { x: w, y: h } = player.size;

    let body_top = y + h * 0.4;
    let mut vertices = quad(
        Vec2::new(x + w * 0.1, body_top),
        Vec2::new(x + w * 0.9, body_top),
        Vec2::new(x + w * 0.75, y + h * 0.9),
        Vec2::new(x + w * 0.25, y + h * 0.9),
        colors::BASKET,
    );
    vertices.extend(rect(
        Vec2::new(x + w * 0.05, body_top - h * 0.05),
        Vec2::new(w * 0.9, h * 0.08),
        colors::BASKET_RIM,
    ));
    vertices
}

fn heart_sprite(h: &Heart) -> Vec<Vertex> {
    heart(h.pos, h.size, colors::HEART)
}

/// Project the world into a triangle list; empty unless a run is active
pub fn scene(world: &GameWorld) -> Vec<Vertex> {
    if world.phase != GamePhase::Playing {
        return Vec::new();
    }

    let mut vertices = basket(&world.player);

    for h in &world.hearts {
        vertices.extend(heart_sprite(h));
    }

    for p in &world.particles {
        let mut color = p.color;
        color[3] *= p.opacity();
        vertices.extend(circle(p.pos, PARTICLE_RADIUS, color, CIRCLE_SEGMENTS));
    }

    vertices
}
