//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
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

/// Colors for game elements
pub mod colors {
    /// Sky-blue bathroom backdrop
    pub const BACKGROUND: [f32; 4] = [0.75, 0.89, 0.95, 1.0];

    pub const MOUTH: [f32; 4] = [1.0, 0.541, 0.502, 1.0];
    pub const MOUTH_RIM: [f32; 4] = [0.898, 0.451, 0.451, 1.0];
    pub const THROAT: [f32; 4] = [0.45, 0.08, 0.08, 0.35];
    pub const TONGUE: [f32; 4] = [0.973, 0.443, 0.443, 0.9];

    pub const TOOTH_CLEAN: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TOOTH_CLEAN_EDGE: [f32; 4] = [0.886, 0.910, 0.941, 1.0];
    /// Plaque-yellow once a germ settles in
    pub const TOOTH_DIRTY: [f32; 4] = [0.996, 0.976, 0.765, 1.0];
    pub const TOOTH_DIRTY_EDGE: [f32; 4] = [0.992, 0.878, 0.278, 1.0];

    pub const GERM_MICROBE: [f32; 4] = [0.45, 0.75, 0.25, 1.0];
    pub const GERM_INVADER: [f32; 4] = [0.58, 0.40, 0.85, 1.0];
    pub const GERM_SLIME: [f32; 4] = [0.70, 0.78, 0.22, 1.0];
    pub const GERM_CANDY: [f32; 4] = [0.95, 0.50, 0.72, 1.0];
    pub const GERM_EYE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GERM_PUPIL: [f32; 4] = [0.15, 0.15, 0.2, 1.0];

    pub const BUBBLE: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const SPARKLE: [f32; 4] = [1.0, 0.84, 0.25, 0.9];
    pub const BRISTLES: [f32; 4] = [0.698, 0.922, 0.949, 1.0];
    pub const BRUSH_NECK: [f32; 4] = [0.926, 0.937, 0.945, 1.0];
}
