//! Chain linkage module
//!
//! Joints, the chain container, and the sequential distance-constraint solver.

pub mod chain;
pub mod joint;
pub mod solver;

pub use chain::{Chain, ChainBuilder};
pub use joint::Joint;
pub use solver::{solve_chain, ChainSolver};
