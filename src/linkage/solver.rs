use super::joint::Joint;
use crate::error::{check_spacing, ChainError, ChainResult};
use crate::math::constrain_distance;

/// Sequential follow-the-leader relaxation.
///
/// Joint 0 is kept as is. Every later joint is pulled onto the circle of
/// radius `spacing` around its predecessor's *solved* position, keeping the
/// direction towards where it used to be. One pass is exact, so there is no
/// iteration count or tolerance.
pub struct ChainSolver;

impl ChainSolver {
    /// Relaxes `joints` to `spacing`, rejecting an empty chain or an invalid spacing.
    pub fn solve(joints: &[Joint], spacing: f32) -> ChainResult<Vec<Joint>> {
        if joints.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        check_spacing(spacing)?;

        Ok(Self::relax(joints, spacing))
    }

    /// Unchecked relaxation for callers that already validated their inputs.
    pub(crate) fn relax(joints: &[Joint], spacing: f32) -> Vec<Joint> {
        let mut solved = Vec::with_capacity(joints.len());

        let Some((head, rest)) = joints.split_first() else {
            return solved;
        };
        solved.push(*head);

        let mut previous = head.position;
        for joint in rest {
            let position = constrain_distance(previous, joint.position, spacing);
            solved.push(joint.with_position(position));
            previous = position;
        }

        solved
    }

    /// Largest deviation of any adjacent pair from `spacing`.
    pub fn max_spacing_error(joints: &[Joint], spacing: f32) -> f32 {
        joints
            .windows(2)
            .map(|w| (w[0].position.distance(w[1].position) - spacing).abs())
            .fold(0.0, f32::max)
    }
}

/// Free-function form of [`ChainSolver::solve`].
pub fn solve_chain(joints: &[Joint], spacing: f32) -> ChainResult<Vec<Joint>> {
    ChainSolver::solve(joints, spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn joints(triples: &[(f32, f32, f32)]) -> Vec<Joint> {
        triples.iter().copied().map(Joint::from_triple).collect()
    }

    #[test]
    fn single_joint_is_returned_unchanged() {
        let input = joints(&[(3.0, -4.0, 10.0)]);
        assert_eq!(solve_chain(&input, 5.0).unwrap(), input);
    }

    #[test]
    fn correctly_spaced_chain_is_stable() {
        let input = joints(&[(0.0, 0.0, 10.0), (5.0, 0.0, 5.0)]);
        let solved = solve_chain(&input, 5.0).unwrap();
        assert_eq!(solved[0], input[0]);
        assert!((solved[1].position - Vec2::new(5.0, 0.0)).length() < 1e-5);
        assert_eq!(solved[1].radius, 5.0);
    }

    #[test]
    fn every_pair_ends_at_spacing() {
        let input = joints(&[
            (100.0, 100.0, 10.0),
            (412.0, 37.0, 9.0),
            (-80.0, 220.0, 8.0),
            (100.0, 100.0, 7.0),
            (0.5, 999.0, 6.0),
            (101.0, 100.0, 5.0),
        ]);
        let solved = solve_chain(&input, 5.0).unwrap();
        assert_eq!(solved.len(), input.len());
        assert!(ChainSolver::max_spacing_error(&solved, 5.0) < 1e-4);

        let radii: Vec<f32> = solved.iter().map(|j| j.radius).collect();
        assert_eq!(radii, vec![10.0, 9.0, 8.0, 7.0, 6.0, 5.0]);
    }

    #[test]
    fn uses_already_solved_predecessor() {
        // Joint 1 is pulled from (10, 0) to (5, 0); joint 2 then follows (5, 0), not (10, 0).
        let input = joints(&[(0.0, 0.0, 1.0), (10.0, 0.0, 1.0), (10.0, 10.0, 1.0)]);
        let solved = solve_chain(&input, 5.0).unwrap();
        let expected_dir = (Vec2::new(10.0, 10.0) - Vec2::new(5.0, 0.0)).normalize();
        let expected = Vec2::new(5.0, 0.0) + expected_dir * 5.0;
        assert!((solved[2].position - expected).length() < 1e-4);
    }

    #[test]
    fn coincident_joints_fall_back_to_positive_x() {
        let input = joints(&[(2.0, 2.0, 1.0), (2.0, 2.0, 1.0)]);
        let solved = solve_chain(&input, 5.0).unwrap();
        assert_eq!(solved[1].position, Vec2::new(7.0, 2.0));
    }

    #[test]
    fn zero_spacing_collapses_onto_head() {
        let input = joints(&[(1.0, 2.0, 3.0), (40.0, 40.0, 2.0), (-9.0, 0.0, 1.0)]);
        let solved = solve_chain(&input, 0.0).unwrap();
        for joint in &solved {
            assert_eq!(joint.position, Vec2::new(1.0, 2.0));
        }
    }

    #[test]
    fn rejects_bad_preconditions() {
        assert_eq!(solve_chain(&[], 5.0), Err(ChainError::EmptyChain));
        let input = joints(&[(0.0, 0.0, 1.0)]);
        assert_eq!(
            solve_chain(&input, -1.0),
            Err(ChainError::InvalidSpacing(-1.0))
        );
    }
}
