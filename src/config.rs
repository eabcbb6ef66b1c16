//! Initialization parameters for the simulation, the starting chain and drawing.
//!
//! Everything here is fixed once the driver is built.

use std::time::Duration;

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{check_spacing, ChainError, ChainResult};
use crate::linkage::Chain;
use crate::math::Rect;
use crate::render::Color;

/// Motion and scheduling parameters.
///
/// ```
/// use chain_follow::SimConfig;
///
/// let config = SimConfig::new()
///     .with_spacing(8.0)
///     .with_speed(3.0)
///     .with_tick_rate(120.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Distance kept between consecutive joints. Default: 5.
    pub spacing: f32,
    /// Distance the head travels per tick while chasing. Default: 2.
    pub speed: f32,
    /// The head stays put when the target is at most this far away. Default: 1.
    pub dead_zone: f32,
    /// Ticks per second of simulated time. Default: 60.
    pub tick_rate: f32,
    /// Upper bound on catch-up ticks run in a single frame. Default: 6.
    pub max_ticks_per_frame: u32,
}

impl SimConfig {
    pub fn new() -> Self {
        Self {
            spacing: 5.0,
            speed: 2.0,
            dead_zone: 1.0,
            tick_rate: 60.0,
            max_ticks_per_frame: 6,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    pub fn with_tick_rate(mut self, tick_rate: f32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_max_ticks_per_frame(mut self, max_ticks: u32) -> Self {
        self.max_ticks_per_frame = max_ticks.max(1);
        self
    }

    /// Interval between ticks.
    pub fn tick_interval(&self) -> ChainResult<Duration> {
        if !(self.tick_rate.is_finite() && self.tick_rate > 0.0) {
            return Err(ChainError::InvalidTimestep);
        }
        let interval = Duration::try_from_secs_f64(1.0 / self.tick_rate as f64)
            .map_err(|_| ChainError::InvalidTimestep)?;
        if interval.is_zero() {
            return Err(ChainError::InvalidTimestep);
        }
        Ok(interval)
    }

    pub fn validate(&self) -> ChainResult<()> {
        check_spacing(self.spacing)?;
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(ChainError::InvalidSpeed(self.speed));
        }
        if !(self.dead_zone.is_finite() && self.dead_zone >= 0.0) {
            return Err(ChainError::InvalidDeadZone(self.dead_zone));
        }
        self.tick_interval().map(|_| ())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors and tessellation used when drawing the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub background: Color,
    pub joint_color: Color,
    pub link_color: Color,
    /// Draw a line between consecutive joints. Default: off.
    pub draw_links: bool,
    /// Line segments per circle outline. Default: 32.
    pub circle_segments: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            joint_color: Color::RED,
            link_color: Color::WHITE,
            draw_links: false,
            circle_segments: 32,
        }
    }
}

impl RenderStyle {
    pub fn with_links(mut self, draw_links: bool) -> Self {
        self.draw_links = draw_links;
        self
    }

    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }
}

/// Starting shape of the chain.
///
/// The head is placed at `head`; each further radius becomes one joint
/// scattered at random over the drawable area. The chain is relaxed once
/// before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainLayout {
    pub head: Vec2,
    /// Radius of every joint, head first.
    pub radii: Vec<f32>,
    /// Fixed seed for reproducible layouts; `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for ChainLayout {
    fn default() -> Self {
        Self {
            head: Vec2::new(100.0, 100.0),
            radii: vec![
                10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 5.0, 4.0, 4.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0,
            ],
            seed: None,
        }
    }
}

impl ChainLayout {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_head(mut self, head: Vec2) -> Self {
        self.head = head;
        self
    }

    pub fn with_radii(mut self, radii: Vec<f32>) -> Self {
        self.radii = radii;
        self
    }

    /// Builds the initial chain over `area` and relaxes it to `spacing`.
    pub fn build(&self, area: Rect, spacing: f32) -> ChainResult<Chain> {
        check_spacing(spacing)?;
        let (head_radius, rest) = self.radii.split_first().ok_or(ChainError::EmptyChain)?;

        let seed = self.seed.unwrap_or_else(clock_seed);
        log::debug!("scattering {} joints with seed {}", rest.len(), seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let chain = Chain::builder()
            .add_joint(self.head, *head_radius)
            .add_scattered(&mut rng, area, rest)
            .build()?;

        Ok(chain.relaxed(spacing))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| (p.now() * 1000.0) as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spacing, 5.0);
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.dead_zone, 1.0);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        assert_eq!(
            SimConfig::new().with_spacing(-1.0).validate(),
            Err(ChainError::InvalidSpacing(-1.0))
        );
        assert_eq!(
            SimConfig::new().with_speed(0.0).validate(),
            Err(ChainError::InvalidSpeed(0.0))
        );
        assert_eq!(
            SimConfig::new().with_dead_zone(-0.1).validate(),
            Err(ChainError::InvalidDeadZone(-0.1))
        );
        assert_eq!(
            SimConfig::new().with_tick_rate(0.0).validate(),
            Err(ChainError::InvalidTimestep)
        );
    }

    #[test]
    fn tiny_tick_rates_are_rejected_not_overflowed() {
        for rate in [1e-20, f32::MIN_POSITIVE] {
            assert_eq!(
                SimConfig::new().with_tick_rate(rate).validate(),
                Err(ChainError::InvalidTimestep),
                "rate {rate}"
            );
        }
        assert_eq!(
            SimConfig::new().with_tick_rate(f32::INFINITY).tick_interval(),
            Err(ChainError::InvalidTimestep)
        );
    }

    #[test]
    fn tick_interval_matches_rate() {
        let interval = SimConfig::new().with_tick_rate(50.0).tick_interval().unwrap();
        assert!((interval.as_secs_f64() - 0.02).abs() < 1e-9);
    }

    #[test]
    fn layout_builds_relaxed_chain() {
        let area = Rect::from_size(Vec2::new(800.0, 600.0));
        let chain = ChainLayout::default().with_seed(3).build(area, 5.0).unwrap();

        assert_eq!(chain.joint_count(), 16);
        assert_eq!(chain.head().position, Vec2::new(100.0, 100.0));
        assert_eq!(chain.head().radius, 10.0);
        assert_eq!(chain.tail().radius, 3.0);
        assert!(chain.max_spacing_error(5.0) < 1e-3);
    }

    #[test]
    fn layout_without_radii_is_rejected() {
        let area = Rect::from_size(Vec2::new(10.0, 10.0));
        let layout = ChainLayout::default().with_radii(Vec::new());
        assert_eq!(layout.build(area, 5.0), Err(ChainError::EmptyChain));
    }
}
