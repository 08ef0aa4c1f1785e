//! Simulation configuration: domain bounds and physical constants.

use crate::bounds::Bounds;
use crate::error::SimError;
use crate::float::Float;

/// Default domain width.
pub const DEFAULT_WIDTH: f32 = 1080.0;
/// Default domain height.
pub const DEFAULT_HEIGHT: f32 = 720.0;
/// Relaxation rounds per step.
pub const DEFAULT_ITERATIONS: usize = 5;
/// Fraction of implicit velocity kept each tick.
pub const DEFAULT_DAMPING: f32 = 0.999;
/// Downward acceleration added once per tick.
pub const DEFAULT_GRAVITY: f32 = 0.5;
/// Fraction of velocity kept (and reversed) on boundary contact.
pub const DEFAULT_RESTITUTION: f32 = 0.999;

/// Immutable configuration handed to a [`Simulation`](crate::Simulation)
/// when it is built.
///
/// All quantities are per tick. The host is expected to call `step()` at a
/// fixed rate; nothing here is scaled by elapsed time.
///
/// # Builder Pattern
/// ```
/// use strand::config::SimConfig;
/// use strand::bounds::Bounds;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_iterations(8)
///     .with_gravity(0.25)
///     .with_damping(0.99)
///     .with_bounds(Bounds::new(800.0, 600.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Rectangle particles are clamped to.
    pub bounds: Bounds<F>,
    /// Relaxation rounds (solve + enforce) per step. Default: 5.
    pub iterations: usize,
    /// Velocity damping in [0, 1]. 1.0 = no friction. Default: 0.999.
    pub damping: F,
    /// Added to every movable particle's y each tick. Default: 0.5.
    pub gravity: F,
    /// Velocity kept after a wall hit, in [0, 1]. Default: 0.999.
    pub restitution: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a config with the default constants.
    pub fn new() -> Self {
        SimConfig {
            bounds: Bounds::new(F::from_f32(DEFAULT_WIDTH), F::from_f32(DEFAULT_HEIGHT)),
            iterations: DEFAULT_ITERATIONS,
            damping: F::from_f32(DEFAULT_DAMPING),
            gravity: F::from_f32(DEFAULT_GRAVITY),
            restitution: F::from_f32(DEFAULT_RESTITUTION),
        }
    }

    pub fn with_bounds(mut self, bounds: Bounds<F>) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    /// Check every field. Called by the builder before a simulation exists.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.iterations == 0 {
            return Err(SimError::NoIterations);
        }
        if !self.damping.in_unit_range() {
            return Err(SimError::InvalidDamping);
        }
        if !self.restitution.in_unit_range() {
            return Err(SimError::InvalidRestitution);
        }
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidGravity);
        }
        self.bounds.validate()
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
