//! Animation driver module
//!
//! Per-tick head pursuit, chain relaxation, fixed-timestep scheduling and the
//! input channel feeding target updates into the loop.

mod driver;
mod input;
mod motion;
mod simulation;
mod timestep;

pub use driver::Driver;
pub use input::{target_channel, InputMessage, TargetReceiver, TargetSender};
pub use motion::HeadMotion;
pub use simulation::{DriverState, Simulation, TickReport};
pub use timestep::FixedTimestep;
