use glam::Vec2;

use crate::math::Rect;

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

/// The drawing primitives the chain needs from a host surface.
///
/// Coordinates are logical units with the origin at the top-left corner.
pub trait Surface {
    fn clear(&mut self, region: Rect, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, stroke: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, stroke: Color);
}
