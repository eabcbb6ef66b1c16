use glam::Vec2;

use super::mesh::{circle_outline, LineVertex};
use super::surface::{Color, Surface};
use crate::math::Rect;

/// CPU-side line list, filled through [`Surface`] and uploaded by the GPU renderer.
#[derive(Debug, Clone)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
    clear_color: Color,
    circle_segments: u32,
}

impl LineBatch {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: Color::BLACK,
            circle_segments: circle_segments.max(3),
        }
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for LineBatch {
    fn default() -> Self {
        Self::new(32)
    }
}

impl Surface for LineBatch {
    /// Drops everything recorded so far; the GPU pass clears the whole target.
    fn clear(&mut self, _region: Rect, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Color) {
        let color = stroke.to_array();
        self.vertices.extend(
            circle_outline(center, radius, self.circle_segments)
                .into_iter()
                .map(|p| LineVertex::new(p, color)),
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color) {
        let color = stroke.to_array();
        self.vertices.push(LineVertex::new(from, color));
        self.vertices.push(LineVertex::new(to, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circles_and_lines_become_segments() {
        let mut batch = LineBatch::new(12);
        batch.draw_circle(Vec2::new(5.0, 5.0), 2.0, Color::RED);
        batch.draw_line(Vec2::ZERO, Vec2::ONE, Color::WHITE);

        assert_eq!(batch.segment_count(), 13);
        assert_eq!(batch.vertices()[0].color, Color::RED.to_array());
        assert_eq!(batch.vertices()[24].position, [0.0, 0.0]);
        assert_eq!(batch.vertices()[25].position, [1.0, 1.0]);
    }

    #[test]
    fn clear_resets_and_records_color() {
        let mut batch = LineBatch::default();
        batch.draw_line(Vec2::ZERO, Vec2::ONE, Color::WHITE);
        batch.clear(Rect::from_size(Vec2::new(10.0, 10.0)), Color::WHITE);
        assert!(batch.is_empty());
        assert_eq!(batch.clear_color(), Color::WHITE);
    }
}
