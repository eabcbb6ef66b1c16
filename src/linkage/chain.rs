use super::joint::Joint;
use super::solver::ChainSolver;
use crate::error::{ChainError, ChainResult};
use crate::math::Rect;
use glam::Vec2;
use rand::Rng;

/// Ordered, non-empty sequence of joints. Index 0 is the head.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub(crate) joints: Vec<Joint>,
}

impl Chain {
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Validates `joints`: at least one joint, finite positions, finite non-negative radii.
    pub fn new(joints: Vec<Joint>) -> ChainResult<Self> {
        if joints.is_empty() {
            return Err(ChainError::EmptyChain);
        }

        for (index, joint) in joints.iter().enumerate() {
            if !joint.position.is_finite() {
                return Err(ChainError::NonFinitePosition { index });
            }
            if !(joint.radius.is_finite() && joint.radius >= 0.0) {
                return Err(ChainError::InvalidRadius {
                    index,
                    radius: joint.radius,
                });
            }
        }

        Ok(Self { joints })
    }

    pub fn from_triples(triples: &[(f32, f32, f32)]) -> ChainResult<Self> {
        Self::new(triples.iter().copied().map(Joint::from_triple).collect())
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    pub fn head(&self) -> Joint {
        self.joints[0]
    }

    pub fn tail(&self) -> Joint {
        self.joints[self.joints.len() - 1]
    }

    pub fn set_head_position(&mut self, position: Vec2) {
        self.joints[0].position = position;
    }

    pub fn to_triples(&self) -> Vec<(f32, f32, f32)> {
        self.joints.iter().map(|j| j.to_triple()).collect()
    }

    /// A new chain with every link pulled to `spacing` behind its predecessor.
    ///
    /// `spacing` is expected to be validated already (see [`crate::SimConfig::validate`]).
    pub fn relaxed(&self, spacing: f32) -> Chain {
        Chain {
            joints: ChainSolver::relax(&self.joints, spacing),
        }
    }

    pub fn max_spacing_error(&self, spacing: f32) -> f32 {
        ChainSolver::max_spacing_error(&self.joints, spacing)
    }
}

pub struct ChainBuilder {
    joints: Vec<Joint>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self { joints: Vec::new() }
    }

    pub fn add_joint(mut self, position: Vec2, radius: f32) -> Self {
        self.joints.push(Joint::new(position, radius));
        self
    }

    pub fn add_triple(self, triple: (f32, f32, f32)) -> Self {
        let joint = Joint::from_triple(triple);
        self.add_joint(joint.position, joint.radius)
    }

    /// Appends one joint per radius, each placed uniformly at random inside `area`.
    pub fn add_scattered<R: Rng>(mut self, rng: &mut R, area: Rect, radii: &[f32]) -> Self {
        let size = area.size().max(Vec2::ZERO);
        for &radius in radii {
            let offset = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) * size;
            self.joints.push(Joint::new(area.min + offset, radius));
        }
        self
    }

    pub fn build(self) -> ChainResult<Chain> {
        Chain::new(self.joints)
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
