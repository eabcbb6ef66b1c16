//! # chain-follow
//!
//! A chain of circles that chases a target point across a 2D surface. Each
//! tick the head steps towards the target at a fixed speed, then every other
//! joint is pulled to a fixed spacing behind its predecessor.
//!
//! ## Features
//! - Planar geometry helpers (direction, distance, angle tolerance, distance constraint)
//! - Single-pass follow-the-leader chain solver
//! - Fixed-timestep driver fed by a target input channel
//! - `Surface` drawing interface with a wgpu line renderer
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust
//! use chain_follow::{Chain, SimConfig, Simulation};
//! use glam::Vec2;
//!
//! let chain = Chain::from_triples(&[(0.0, 0.0, 10.0), (5.0, 0.0, 5.0)]).unwrap();
//! let mut sim = Simulation::new(chain, &SimConfig::default()).unwrap();
//!
//! sim.set_target(Vec2::new(0.0, 40.0));
//! sim.tick();
//! assert_eq!(sim.chain().head().position, Vec2::new(0.0, 2.0));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod linkage;
pub mod math;
pub mod render;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::Scene;
pub use config::{ChainLayout, RenderStyle, SimConfig};
pub use error::{ChainError, ChainResult};
pub use linkage::{solve_chain, Chain, ChainBuilder, ChainSolver, Joint};
pub use math::{Rect, Viewport};
pub use render::{draw_chain, Color, LineBatch, Surface};
pub use sim::{
    target_channel, Driver, DriverState, FixedTimestep, HeadMotion, InputMessage, Simulation,
    TargetReceiver, TargetSender, TickReport,
};
