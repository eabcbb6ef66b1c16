use std::time::Duration;

use super::input::{target_channel, TargetReceiver, TargetSender};
use super::simulation::{Simulation, TickReport};
use super::timestep::FixedTimestep;
use crate::config::{RenderStyle, SimConfig};
use crate::error::ChainResult;
use crate::math::Viewport;
use crate::render::Surface;

/// Owns the simulation, its input inbox and the tick schedule.
///
/// Hosts call [`Driver::frame`] from their redraw callback with the wall time
/// since the previous frame, then [`Driver::draw`] into their surface.
#[derive(Debug)]
pub struct Driver {
    simulation: Simulation,
    inbox: TargetReceiver,
    timestep: FixedTimestep,
}

impl Driver {
    pub fn new(simulation: Simulation, inbox: TargetReceiver, config: &SimConfig) -> ChainResult<Self> {
        let timestep = FixedTimestep::new(config.tick_interval()?, config.max_ticks_per_frame);
        Ok(Self {
            simulation,
            inbox,
            timestep,
        })
    }

    /// Builds a driver together with the sender its input source should use.
    pub fn with_channel(simulation: Simulation, config: &SimConfig) -> ChainResult<(Self, TargetSender)> {
        let (tx, rx) = target_channel();
        Ok((Self::new(simulation, rx, config)?, tx))
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// Reads the latest pending target, then advances the simulation one tick.
    pub fn tick(&mut self) -> TickReport {
        if let Some(target) = self.inbox.latest() {
            self.simulation.set_target(target);
        }
        self.simulation.tick()
    }

    /// Runs every tick due after `elapsed` of wall time; returns how many ran.
    pub fn frame(&mut self, elapsed: Duration) -> u32 {
        let due = self.timestep.advance(elapsed);
        for _ in 0..due {
            self.tick();
        }
        due
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &RenderStyle, viewport: &Viewport) {
        self.simulation.draw(surface, style, viewport.region());
    }
}
