use glam::Vec2;

use super::motion::HeadMotion;
use crate::config::{RenderStyle, SimConfig};
use crate::error::ChainResult;
use crate::linkage::Chain;
use crate::math::Rect;
use crate::render::{draw_chain, Surface};

/// Whether the driver has received a target yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Startup: the target still equals the head's initial position.
    Idle,
    /// At least one target has arrived; the head heads for the latest one.
    Chasing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub head_moved: bool,
    /// Head-to-target distance measured before the head moved.
    pub distance_to_target: f32,
}

/// All mutable state of one chain: the joints, the target, and the driver state.
#[derive(Debug, Clone)]
pub struct Simulation {
    chain: Chain,
    target: Vec2,
    state: DriverState,
    motion: HeadMotion,
    spacing: f32,
    ticks: u64,
}

impl Simulation {
    /// Starts at equilibrium: the target is the head's current position.
    pub fn new(chain: Chain, config: &SimConfig) -> ChainResult<Self> {
        config.validate()?;

        Ok(Self {
            target: chain.head().position,
            chain,
            state: DriverState::Idle,
            motion: HeadMotion::new(config.speed, config.dead_zone),
            spacing: config.spacing,
            ticks: 0,
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn set_target(&mut self, target: Vec2) {
        if !target.is_finite() {
            log::warn!("ignoring non-finite target {:?}", target);
            return;
        }

        if self.state == DriverState::Idle {
            log::info!("first target received, chasing {:?}", target);
            self.state = DriverState::Chasing;
        } else {
            log::debug!("target moved to {:?}", target);
        }
        self.target = target;
    }

    /// One simulation step: move the head, then replace the chain with its relaxed form.
    pub fn tick(&mut self) -> TickReport {
        let head = self.chain.head().position;
        let distance_to_target = head.distance(self.target);
        let next = self.motion.step(head, self.target);

        self.chain.set_head_position(next);
        self.chain = self.chain.relaxed(self.spacing);
        self.ticks += 1;

        log::trace!(
            "tick {}: head {:?}, spacing error {:e}",
            self.ticks,
            next,
            self.chain.max_spacing_error(self.spacing)
        );

        TickReport {
            head_moved: next != head,
            distance_to_target,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &RenderStyle, region: Rect) {
        draw_chain(surface, &self.chain, style, region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(triples: &[(f32, f32, f32)]) -> Simulation {
        let chain = Chain::from_triples(triples).unwrap();
        Simulation::new(chain, &SimConfig::default()).unwrap()
    }

    #[test]
    fn starts_idle_at_equilibrium() {
        let mut sim = sim(&[(4.0, 4.0, 10.0), (9.0, 4.0, 5.0)]);
        assert_eq!(sim.state(), DriverState::Idle);
        assert_eq!(sim.target(), Vec2::new(4.0, 4.0));

        let report = sim.tick();
        assert!(!report.head_moved);
        assert_eq!(sim.chain().head().position, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn first_target_switches_to_chasing() {
        let mut sim = sim(&[(0.0, 0.0, 10.0)]);
        sim.set_target(Vec2::new(10.0, 0.0));
        assert_eq!(sim.state(), DriverState::Chasing);

        let report = sim.tick();
        assert!(report.head_moved);
        assert_eq!(report.distance_to_target, 10.0);
        assert_eq!(sim.chain().to_triples(), vec![(2.0, 0.0, 10.0)]);
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn non_finite_target_is_ignored() {
        let mut sim = sim(&[(0.0, 0.0, 10.0)]);
        sim.set_target(Vec2::new(f32::NAN, 1.0));
        assert_eq!(sim.state(), DriverState::Idle);
        assert_eq!(sim.target(), Vec2::ZERO);
    }

    #[test]
    fn rejects_invalid_config() {
        let chain = Chain::from_triples(&[(0.0, 0.0, 1.0)]).unwrap();
        assert!(Simulation::new(chain, &SimConfig::new().with_speed(-2.0)).is_err());
    }
}
