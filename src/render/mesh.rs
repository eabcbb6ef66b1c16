use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
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
    };

    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Closed polygon approximating a circle, as line-list segment endpoints.
///
/// Returns `2 * segments` points: each consecutive pair is one segment.
pub fn circle_outline(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let segments = segments.max(3);
    let rim = |seg: u32| {
        let theta = 2.0 * PI * seg as f32 / segments as f32;
        center + Vec2::from_angle(theta) * radius
    };

    let mut points = Vec::with_capacity(segments as usize * 2);
    for seg in 0..segments {
        points.push(rim(seg));
        points.push(rim(seg + 1));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_points_lie_on_circle() {
        let center = Vec2::new(10.0, -4.0);
        let points = circle_outline(center, 3.0, 16);
        assert_eq!(points.len(), 32);
        for p in &points {
            assert!((p.distance(center) - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn outline_is_closed() {
        let points = circle_outline(Vec2::ZERO, 1.0, 8);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!(first.distance(last) < 1e-5);
    }

    #[test]
    fn too_few_segments_are_raised_to_a_triangle() {
        assert_eq!(circle_outline(Vec2::ZERO, 1.0, 1).len(), 6);
    }
}
