//! Math utilities module
//!
//! Planar geometry helpers and the logical/physical viewport mapping, built on glam.

pub mod geometry;
mod viewport;

pub use geometry::{
    constrain_distance, direction, is_angle_within_tolerance, magnitude, normalize_angle,
    point_on_circle,
};
pub use viewport::{Rect, Viewport};

// Re-export commonly used glam types
pub use glam::Vec2;
