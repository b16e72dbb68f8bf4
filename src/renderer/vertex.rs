//! Colored 2D vertex and the scene palette

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Position in playfield pixels (clip space once uploaded) plus RGBA
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: [f32; 4]) -> Self {
        Self::new(point.x, point.y, color)
    }

    /// Same vertex moved to `position`
    pub fn moved_to(self, position: [f32; 2]) -> Self {
        Self { position, ..self }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Scene palette
pub mod colors {
    /// #8B4513, the basket body
    pub const BASKET: [f32; 4] = [0.545, 0.271, 0.075, 1.0];
    pub const BASKET_RIM: [f32; 4] = [0.45, 0.22, 0.06, 1.0];
    /// #ff4757
    pub const HEART: [f32; 4] = [1.0, 0.278, 0.341, 1.0];
    /// Pale pink canvas
    pub const BACKGROUND: [f32; 4] = [1.0, 0.94, 0.96, 1.0];
}
