//! Error types for simulation setup.

use core::fmt;

/// Errors raised while building a simulation. Stepping never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// A link must join two distinct particles.
    SelfLink { index: usize },
    /// Rest length must be finite and non-negative.
    InvalidRestLength,
    /// A zero-length link touches a movable particle.
    ZeroLengthLink { a: usize, b: usize },
    /// At least one relaxation round is required.
    NoIterations,
    /// Damping must be in [0, 1].
    InvalidDamping,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// Gravity must be finite.
    InvalidGravity,
    /// Domain width and height must be positive and finite.
    InvalidBounds,
    /// A chain needs at least one segment.
    InsufficientSegments,
    /// Particle positions must be finite.
    NonFinitePosition { index: usize },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SimError::SelfLink { index } => write!(f, "particle {} cannot be linked to itself", index),
            SimError::InvalidRestLength => write!(f, "rest length must be finite and non-negative"),
            SimError::ZeroLengthLink { a, b } => {
                write!(f, "zero-length link between {} and {} has a movable endpoint", a, b)
            }
            SimError::NoIterations => write!(f, "at least one relaxation iteration is required"),
            SimError::InvalidDamping => write!(f, "damping must be in [0, 1]"),
            SimError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            SimError::InvalidGravity => write!(f, "gravity must be finite"),
            SimError::InvalidBounds => write!(f, "bounds must be positive and finite"),
            SimError::InsufficientSegments => write!(f, "chain needs at least 1 segment"),
            SimError::NonFinitePosition { index } => {
                write!(f, "particle {} has a non-finite position", index)
            }
        }
    }
}
