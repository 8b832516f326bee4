//! Error types for simulation setup and ring construction.

use core::fmt;

/// Errors returned when building or feeding a [`Simulation`](crate::Simulation).
///
/// Numerical degeneracies during a step (coincident spring endpoints, a ring
/// with no area) are not errors; they are absorbed by the force code.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Time step must be positive and finite.
    InvalidTimeStep,
    /// Frame rate must be positive.
    InvalidFrameRate,
    /// Display scale must be positive and finite.
    InvalidScale,
    /// Mass point index is out of bounds.
    MassPointOutOfBounds { index: usize, count: usize },
    /// A spawned ring needs at least 3 segments.
    InsufficientSegments,
    /// A ring cannot be closed without any mass points.
    EmptyChain,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
            PhysicsError::InvalidFrameRate => write!(f, "frame rate must be positive"),
            PhysicsError::InvalidScale => write!(f, "display scale must be positive and finite"),
            PhysicsError::MassPointOutOfBounds { index, count } => {
                write!(f, "mass point index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InsufficientSegments => write!(f, "ring needs at least 3 segments"),
            PhysicsError::EmptyChain => write!(f, "cannot close a ring with no mass points"),
        }
    }
}
