use glam::Vec2;

use crate::error::{ChainError, ChainResult};

/// Axis-aligned rectangle in logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_size(size: Vec2) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Drawable area: logical size plus the pixel density it is backed by.
///
/// All simulation and drawing happens in logical units. The backing surface is
/// `logical * scale_factor` physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    logical_size: Vec2,
    scale_factor: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, scale_factor: f32) -> ChainResult<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !(valid(width) && valid(height) && valid(scale_factor)) {
            return Err(ChainError::InvalidViewport {
                width,
                height,
                scale_factor,
            });
        }

        Ok(Self {
            logical_size: Vec2::new(width, height),
            scale_factor,
        })
    }

    /// Builds a viewport from a physical surface size, as reported by the window system.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> ChainResult<Self> {
        let scale = scale_factor as f32;
        Self::new(width as f32 / scale, height as f32 / scale, scale)
    }

    pub fn logical_size(&self) -> Vec2 {
        self.logical_size
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn physical_size(&self) -> (u32, u32) {
        let physical = (self.logical_size * self.scale_factor).round();
        (physical.x.max(1.0) as u32, physical.y.max(1.0) as u32)
    }

    /// The whole drawable area.
    pub fn region(&self) -> Rect {
        Rect::from_size(self.logical_size)
    }

    /// Converts a physical pixel position (e.g. a cursor event) to logical units.
    pub fn to_logical(&self, physical: Vec2) -> Vec2 {
        physical / self.scale_factor
    }
}
