//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use super::canvas::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for movie elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CHARACTER_BODY: Color = [1.0, 0.85, 0.4, 1.0];
    pub const CHARACTER_EYE: Color = [0.1, 0.1, 0.1, 1.0];
    pub const FLAG_POLE: Color = [0.0, 0.0, 0.0, 1.0];
    pub const FLAG_CLOTH: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BLASTER: Color = [0.0, 0.0, 0.0, 1.0];
    pub const BUBBLE: Color = [0.45, 0.75, 1.0, 0.8];
    /// Bubble still being pulled back
    pub const BUBBLE_CHARGING: Color = [0.65, 0.85, 1.0, 0.6];
}
