// src/vertex.rs

use bytemuck::{Pod, Zeroable};
use crate::light_map::LightTriangle;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Flat triangle list, three vertices per wedge, ready to upload as-is.
    pub fn from_fan(triangles: &[LightTriangle], color: [f32; 4]) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(triangles.len() * 3);
        for triangle in triangles {
            for p in [triangle.p0, triangle.p1, triangle.p2] {
                vertices.push(Vertex::new(p.as_vec2().to_array(), color));
            }
        }
        vertices
    }
}
