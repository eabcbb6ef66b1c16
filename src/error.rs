//! Error types for chain construction and simulation setup.

use thiserror::Error;

/// Result type alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Precondition violations rejected before they reach the solver or driver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChainError {
    /// A chain needs at least a head joint.
    #[error("chain must contain at least one joint")]
    EmptyChain,

    /// Spacing must be finite and non-negative.
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f32),

    /// Joint radius must be finite and non-negative.
    #[error("joint {index} has invalid radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    /// Joint coordinates must be finite.
    #[error("joint {index} has a non-finite position")]
    NonFinitePosition { index: usize },

    /// Head speed must be finite and positive.
    #[error("speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),

    /// Dead zone must be finite and non-negative.
    #[error("dead zone must be finite and non-negative, got {0}")]
    InvalidDeadZone(f32),

    /// Drawable area must have positive, finite dimensions.
    #[error("invalid viewport {width}x{height} at scale {scale_factor}")]
    InvalidViewport {
        width: f32,
        height: f32,
        scale_factor: f32,
    },

    /// Tick rate must produce a non-zero interval.
    #[error("tick rate must be positive and finite")]
    InvalidTimestep,
}

pub(crate) fn check_spacing(spacing: f32) -> ChainResult<()> {
    if spacing.is_finite() && spacing >= 0.0 {
        Ok(())
    } else {
        Err(ChainError::InvalidSpacing(spacing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_value() {
        let err = ChainError::InvalidSpacing(-1.0);
        assert!(format!("{err}").contains("-1"));

        let err = ChainError::InvalidRadius {
            index: 3,
            radius: -2.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("joint 3"));
        assert!(msg.contains("-2"));

        assert!(format!("{}", ChainError::EmptyChain).contains("at least one joint"));
    }

    #[test]
    fn spacing_check() {
        assert!(check_spacing(0.0).is_ok());
        assert!(check_spacing(5.0).is_ok());
        assert_eq!(check_spacing(-0.5), Err(ChainError::InvalidSpacing(-0.5)));
        assert!(check_spacing(f32::NAN).is_err());
        assert!(check_spacing(f32::INFINITY).is_err());
    }
}
