//! Collision detection between the basket and falling hearts
//!
//! All tests use strict inequalities: boxes whose edges only touch do not
//! overlap.

use glam::Vec2;

use super::state::{Heart, Player};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Catch region of the basket: its box with the top edge lowered by `offset`
pub fn catch_box(player: &Player, offset: f32) -> Aabb {
    let mut aabb = Aabb::from_pos_size(player.pos, player.size);
    aabb.min.y += offset;
    aabb
}

pub fn heart_box(heart: &Heart) -> Aabb {
    Aabb::from_pos_size(heart.pos, Vec2::splat(heart.size))
}

/// Heart landed in the basket opening
pub fn is_caught(heart: &Heart, player: &Player, offset: f32) -> bool {
    heart_box(heart).overlaps(&catch_box(player, offset))
}

/// Heart's top edge fell past the bottom of the playfield
pub fn is_missed(heart: &Heart, playfield_height: f32) -> bool {
    heart.pos.y > playfield_height
}
