//! Rendering module
//!
//! The `Surface` drawing interface, CPU line tessellation, and a wgpu backend
//! that draws the tessellated lines into a window.

pub mod batch;
pub mod context;
pub mod draw;
pub mod mesh;
pub mod pipeline;
pub mod renderer;
pub mod surface;

pub use batch::LineBatch;
pub use context::{GpuContext, GpuError};
pub use draw::draw_chain;
pub use mesh::{circle_outline, LineVertex};
pub use pipeline::LinePipeline;
pub use renderer::LineRenderer;
pub use surface::{Color, Surface};
