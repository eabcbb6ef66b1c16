//! Host-independent glue between window input, the driver and the line batch.

use std::time::Duration;

use glam::Vec2;

use crate::config::{ChainLayout, RenderStyle, SimConfig};
use crate::error::ChainResult;
use crate::math::Viewport;
use crate::render::LineBatch;
use crate::sim::{Driver, Simulation, TargetSender};

/// Everything a window host needs besides the GPU: the driver, its input
/// sender, the current viewport and the batch the next frame is drawn into.
pub struct Scene {
    driver: Driver,
    input: TargetSender,
    style: RenderStyle,
    viewport: Viewport,
    batch: LineBatch,
    cursor: Vec2,
    pointer_down: bool,
}

impl Scene {
    pub fn new(
        viewport: Viewport,
        layout: &ChainLayout,
        config: SimConfig,
        style: RenderStyle,
    ) -> ChainResult<Self> {
        let chain = layout.build(viewport.region(), config.spacing)?;
        let simulation = Simulation::new(chain, &config)?;
        let (driver, input) = Driver::with_channel(simulation, &config)?;

        log::info!(
            "scene ready: {} joints, viewport {:?} at scale {}",
            driver.simulation().chain().joint_count(),
            viewport.logical_size(),
            viewport.scale_factor()
        );

        Ok(Self {
            driver,
            input,
            batch: LineBatch::new(style.circle_segments),
            style,
            viewport,
            cursor: Vec2::ZERO,
            pointer_down: false,
        })
    }

    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Another sender for input sources living outside the window loop.
    pub fn input(&self) -> TargetSender {
        self.input.clone()
    }

    pub fn resize(&mut self, width: u32, height: u32, scale_factor: f64) {
        match Viewport::from_physical(width, height, scale_factor) {
            Ok(viewport) => self.viewport = viewport,
            Err(e) => log::warn!("keeping previous viewport: {}", e),
        }
    }

    /// Cursor position in physical pixels. Drags keep updating the target.
    pub fn pointer_moved(&mut self, physical: Vec2) {
        self.cursor = self.viewport.to_logical(physical);
        if self.pointer_down {
            self.input.set_target(self.cursor);
        }
    }

    /// Primary button state. A press sets the target to the cursor.
    pub fn pointer_button(&mut self, pressed: bool) {
        self.pointer_down = pressed;
        if pressed {
            self.input.set_target(self.cursor);
        }
    }

    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.driver.frame(elapsed)
    }

    /// Redraws the chain into the batch and returns it for upload.
    pub fn prepare(&mut self) -> &LineBatch {
        self.driver.draw(&mut self.batch, &self.style, &self.viewport);
        &self.batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let viewport = Viewport::new(400.0, 300.0, 2.0).unwrap();
        let layout = ChainLayout::default().with_seed(11).with_radii(vec![10.0, 9.0, 8.0]);
        Scene::new(viewport, &layout, SimConfig::default(), RenderStyle::default()).unwrap()
    }

    #[test]
    fn click_sets_target_in_logical_units() {
        let mut scene = scene();
        scene.pointer_moved(Vec2::new(600.0, 200.0));
        scene.pointer_button(true);
        scene.advance(Duration::from_millis(20));

        assert_eq!(scene.driver().simulation().target(), Vec2::new(300.0, 100.0));
    }

    #[test]
    fn hover_without_press_leaves_target_alone() {
        let mut scene = scene();
        scene.pointer_moved(Vec2::new(600.0, 200.0));
        scene.advance(Duration::from_millis(20));

        assert_eq!(scene.driver().simulation().target(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn prepare_fills_batch_with_one_outline_per_joint() {
        let mut scene = scene();
        let batch = scene.prepare();
        assert_eq!(batch.segment_count(), 3 * 32);
    }

    #[test]
    fn resize_updates_viewport_and_ignores_zero_size() {
        let mut scene = scene();
        scene.resize(1000, 500, 1.0);
        assert_eq!(scene.viewport().logical_size(), Vec2::new(1000.0, 500.0));
        scene.resize(0, 0, 1.0);
        assert_eq!(scene.viewport().logical_size(), Vec2::new(1000.0, 500.0));
    }
}
